/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Diagnostics with source snippets and caret pointers.

use crate::ast::SourceSpan;
use std::fmt;
use thiserror::Error;

/// Source-mapped message produced by the lexer, parser or normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable error message.
    pub message: String,
    /// 1-based line number (`0` when unavailable).
    pub line: usize,
    /// 1-based column number (`0` when unavailable).
    pub column: usize,
    /// Source line snippet where the error occurred.
    pub snippet: String,
    /// Caret pointer aligned to `snippet`.
    pub pointer: String,
}

impl Diagnostic {
    /// Creates a diagnostic with no location information.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: 0,
            column: 0,
            snippet: String::new(),
            pointer: String::new(),
        }
    }

    /// Creates a source-mapped diagnostic from a [`SourceSpan`].
    pub fn from_span(message: impl Into<String>, source: &str, span: &SourceSpan) -> Self {
        let message = message.into();
        // Pull the exact source line the span starts on.
        let snippet = source
            .lines()
            .nth(span.line.saturating_sub(1))
            .unwrap_or("")
            .to_string();
        // Compute a safe caret range even when spans extend past line boundaries.
        let line_len = snippet.chars().count();
        let pointer_column = span.column.saturating_sub(1).min(line_len);
        let requested_len = source
            .get(span.start..span.end)
            .map(|text| text.chars().count())
            .unwrap_or_else(|| span.len())
            .max(1);
        let max_len = line_len.saturating_sub(pointer_column).max(1);
        let pointer_len = requested_len.min(max_len);
        let pointer = format!("{}{}", " ".repeat(pointer_column), "^".repeat(pointer_len));

        Self {
            message,
            line: span.line,
            column: span.column,
            snippet,
            pointer,
        }
    }

    /// One-line form: the message plus its column when known.
    pub fn summary(&self) -> String {
        if self.column == 0 {
            self.message.clone()
        } else {
            format!("{} (column {})", self.message, self.column)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 || self.column == 0 {
            return write!(f, "{}", self.message);
        }

        write!(
            f,
            "{}\n --> line {}, column {}\n  |\n{:>3} | {}\n  | {}",
            self.message, self.line, self.column, self.line, self.snippet, self.pointer
        )
    }
}

/// Category of an [`InequalityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token stream or grammar violation.
    Syntax,
    /// Degree above two, or an exponent the engine cannot expand.
    Degree,
    /// Variable in a divisor, a second variable, or a non-finite value.
    Domain,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Syntax => "syntax",
            ErrorKind::Degree => "degree",
            ErrorKind::Domain => "domain",
        })
    }
}

/// Errors surfaced by the lexing, parsing and normalizing stages.
///
/// `Display` yields the stable one-line message returned by
/// [`solve_text`](crate::solve_text); the wrapped [`Diagnostic`] carries the
/// full caret rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InequalityError {
    #[error("syntax error: {}", .0.summary())]
    Syntax(Diagnostic),
    #[error("degree error: {}", .0.summary())]
    Degree(Diagnostic),
    #[error("domain error: {}", .0.summary())]
    Domain(Diagnostic),
}

impl InequalityError {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InequalityError::Syntax(_) => ErrorKind::Syntax,
            InequalityError::Degree(_) => ErrorKind::Degree,
            InequalityError::Domain(_) => ErrorKind::Domain,
        }
    }

    /// Returns the source-mapped diagnostic.
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            InequalityError::Syntax(diag)
            | InequalityError::Degree(diag)
            | InequalityError::Domain(diag) => diag,
        }
    }

    pub(crate) fn syntax(message: impl Into<String>, source: &str, span: &SourceSpan) -> Self {
        InequalityError::Syntax(Diagnostic::from_span(message, source, span))
    }

    pub(crate) fn degree(message: impl Into<String>, source: &str, span: &SourceSpan) -> Self {
        InequalityError::Degree(Diagnostic::from_span(message, source, span))
    }

    pub(crate) fn domain(message: impl Into<String>, source: &str, span: &SourceSpan) -> Self {
        InequalityError::Domain(Diagnostic::from_span(message, source, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize, column: usize) -> SourceSpan {
        SourceSpan {
            start,
            end,
            line: 1,
            column,
        }
    }

    #[test]
    fn caret_is_aligned_under_span() {
        let diag = Diagnostic::from_span("bad", "x^2 $ 1", &span(4, 5, 5));
        assert_eq!(diag.snippet, "x^2 $ 1");
        assert_eq!(diag.pointer, "    ^");
        assert_eq!(diag.summary(), "bad (column 5)");
    }

    #[test]
    fn caret_counts_characters_not_bytes() {
        let source = "x ≤≤ 1";
        let start = source.find('≤').unwrap_or_default();
        let diag = Diagnostic::from_span("bad", source, &span(start, start + 3, 3));
        assert_eq!(diag.pointer, "  ^");
    }

    #[test]
    fn caret_is_clamped_to_line_end() {
        let diag = Diagnostic::from_span("end", "x >", &span(3, 3, 4));
        assert_eq!(diag.pointer, "   ^");
    }

    #[test]
    fn display_without_location_is_message_only() {
        let diag = Diagnostic::message_only("empty input");
        assert_eq!(diag.to_string(), "empty input");
        assert_eq!(diag.summary(), "empty input");
    }

    #[test]
    fn display_renders_snippet_block() {
        let diag = Diagnostic::from_span("unexpected character '$'", "x $ 1", &span(2, 3, 3));
        let rendered = diag.to_string();
        assert!(rendered.starts_with("unexpected character '$'\n --> line 1, column 3"));
        assert!(rendered.contains("  1 | x $ 1"));
        assert!(rendered.ends_with("  |   ^"));
    }

    #[test]
    fn error_kind_prefixes_boundary_message() {
        let err = InequalityError::degree("degree 3 exceeds 2", "x^3>0", &span(0, 3, 1));
        assert_eq!(err.kind(), ErrorKind::Degree);
        assert_eq!(err.to_string(), "degree error: degree 3 exceeds 2 (column 1)");
    }
}
