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

//! Command line front end: solves one inequality, or one per stdin line.

use clap::{Parser, ValueEnum};
use quadratic_inequality::{InequalityError, Notation, Solver, SolverConfig};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "quadineq",
    version = env!("CARGO_PKG_VERSION"),
    about = "Solve a single-variable quadratic inequality",
    long_about = r#"
Solves inequalities such as "x^2 - 3x + 2 > 0" and prints the solution set.

EXAMPLES:
    quadineq "x^2 - 3x + 2 > 0"                 # (-∞, 1) ∪ (2, ∞)
    quadineq --notation relation "x^2 <= 4"     # -2 ≤ x ≤ 2
    quadineq -- "-x^2 - 1 > 0"                  # ∅
    printf 'x^2 > 1\nx^2 < 0\n' | quadineq --stdin
    "#
)]
struct Cli {
    /// Inequality to solve
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    inequality: Option<String>,

    /// Read one inequality per line from standard input
    #[arg(long)]
    stdin: bool,

    /// Output notation
    #[arg(long, value_enum, default_value = "interval")]
    notation: NotationArg,

    /// Tolerance for treating values as zero
    #[arg(long)]
    epsilon: Option<f64>,

    /// Require this variable name
    #[arg(long)]
    variable: Option<String>,

    /// Significant digits for non-integral values
    #[arg(long)]
    digits: Option<usize>,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    log: Option<LogLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum NotationArg {
    Interval,
    Relation,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Interval => Notation::Interval,
            NotationArg::Relation => Notation::Relation,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet, cli.log);

    let solver = Solver::new(build_config(&cli));
    tracing::debug!(config = ?solver.config(), "solver configured");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let outcome = match &cli.inequality {
        Some(source) => answer(&solver, source, &mut stdout.lock(), &mut stderr.lock()),
        None => run_lines(&solver, io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock()),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool, log_level: Option<LogLevel>) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}

/// Maps command line flags onto solver options.
fn build_config(cli: &Cli) -> SolverConfig {
    let mut config = SolverConfig::new().with_notation(cli.notation.into());
    if let Some(epsilon) = cli.epsilon {
        config = config.with_epsilon(epsilon);
    }
    if let Some(name) = &cli.variable {
        config = config.with_variable(name.clone());
    }
    if let Some(digits) = cli.digits {
        config = config.with_significant_digits(digits);
    }
    config
}

/// Full caret rendering printed for a rejected input.
fn render_error(err: &InequalityError) -> String {
    format!("{} error: {}", err.kind(), err.diagnostic())
}

/// Solves one input, writing the answer to `out` or the diagnostic to `err`.
///
/// Returns whether the input was solved.
fn answer<O: Write, E: Write>(
    solver: &Solver,
    source: &str,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    match solver.try_solve(source) {
        Ok(solution) => {
            writeln!(out, "{}", solver.format(&solution))?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "{}", render_error(&e))?;
            Ok(false)
        }
    }
}

/// Answers every non-blank line of `input`; returns whether all succeeded.
fn run_lines<R: BufRead, O: Write, E: Write>(
    solver: &Solver,
    input: R,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let mut all_solved = true;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        all_solved &= answer(solver, &line, out, err)?;
    }
    Ok(all_solved)
}
