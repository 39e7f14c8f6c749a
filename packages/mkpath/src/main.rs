//! mkpath - create the containing directory for each given file path.

use std::env;
use std::io;
use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Exit code for the missing-argument usage error.
const USAGE_EXIT: u8 = 255;

fn main() -> ExitCode {
    let paths: Vec<String> = env::args().skip(1).collect();

    if paths.is_empty() {
        // Usage guidance goes to stdout; stderr is reserved for
        // filesystem failures.
        println!("Invalid argument length: {}, required 1.", paths.len());
        println!("Syntax: mkpath [<path>]");
        return ExitCode::from(USAGE_EXIT);
    }

    init_logging();

    match mkpath::ensure_all(&paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mkpath: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Stderr logging, silent unless `RUST_LOG` asks for more.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
