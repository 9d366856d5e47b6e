//! jdk-scout CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use jdk_scout::cli::Cli;
use jdk_scout::discovery::{discover, ProbeContext};
use jdk_scout::error::ScoutError;
use jdk_scout::report;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("jdk_scout=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jdk_scout=info"))
    };

    // Logs go to stderr so that --json output on stdout stays clean.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("jdk-scout starting with args: {:?}", cli);

    // Resolved exactly once; probes receive it as a plain value.
    let self_path = match std::env::current_exe() {
        Ok(path) => path,
        Err(source) => {
            eprintln!("Error: {}", ScoutError::SelfPathUnavailable { source });
            return ExitCode::from(1);
        }
    };

    let ctx = ProbeContext::new(&self_path, Duration::from_secs(cli.probe_timeout));
    let discovery = discover(&ctx).await;

    if cli.json {
        println!("{}", report::render_json(&discovery));
    } else {
        print!("{}", report::render_human(&discovery, cli.quiet));
    }

    ExitCode::SUCCESS
}
