//! Time f32 versus f64 add/sub/mul/div on the thread CPU clock.
//!
//! # Usage
//!
//! ```bash
//! # One million elements per buffer
//! cargo run --release --bin arith-bench -- 1000000
//!
//! # Abort instead of continuing when the CPU clock cannot be read
//! cargo run --release --bin arith-bench -- --strict-clock 1000000
//!
//! # Log clock resolution and per-pass timings to stderr
//! cargo run --release --bin arith-bench -- -vv 1000000
//! ```

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use arith_bench::output::{format_error, usage_message};
use arith_bench::{run, Config, Error};

const PROGRAM: &str = env!("CARGO_BIN_NAME");

/// Per-thread CPU time of float versus double arithmetic
#[derive(Parser, Debug)]
#[command(name = "arith-bench")]
#[command(about = "Time add/sub/mul/div over a float buffer and a double buffer")]
#[command(version)]
struct Args {
    /// Loop count: elements per buffer and iterations per precision.
    ///
    /// Exactly one is required. Collected as a list so a wrong count can be
    /// answered with the usage message.
    #[arg(value_name = "LOOP_COUNT", num_args = 0.., allow_negative_numbers = true)]
    loop_count: Vec<String>,

    /// Abort on the first failed CPU clock read instead of printing
    /// "get time wrong" and continuing.
    #[arg(long)]
    strict_clock: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn execute(args: &Args) -> Result<(), Error> {
    let [loop_count] = args.loop_count.as_slice() else {
        return Err(Error::Usage);
    };
    let config = Config::from_iterations_arg(loop_count)?.strict_clock(args.strict_clock);
    debug!(?config, "parsed arguments");
    let report = run(config)?;
    debug!(?report, "run complete");
    Ok(())
}

fn fail(err: &Error) -> ExitCode {
    match err {
        Error::Usage => eprint!("{}", usage_message(PROGRAM)),
        _ => eprintln!("{}", format_error(err)),
    }
    ExitCode::from(err.exit_code())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => return fail(&Error::Usage),
        },
    };

    if args.no_color {
        colored::control::set_override(false);
    }
    init_tracing(args.verbose);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}
