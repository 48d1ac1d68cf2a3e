//! `passlock` binary entry point.
//!
//! Startup sequence:
//! 1. Parse the command line, then load and validate [`Config`] from
//!    `PASSLOCK_*` environment variables.
//! 2. Initialise logging on stderr.
//! 3. Run the command and write its output to stdout.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use passlock::cli::{self, Cli};
use passlock::config::Config;
use passlock::{telemetry, Sealer};

const EXIT_USAGE: u8 = 64;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Telemetry is not yet up; write to stderr directly.
            eprintln!("ERROR: configuration invalid: {e:#}");
            return ExitCode::from(EXIT_USAGE);
        }
    };
    let params = cfg.kdf_params();

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    if let Err(e) = telemetry::init(&cfg.log_level, cfg.log_format) {
        eprintln!("ERROR: {e:#}");
        return ExitCode::from(EXIT_USAGE);
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        command = ?args.command,
        kdf_iterations = params.iterations(),
        salt_encoding = ?params.salt_encoding(),
        "passlock starting"
    );

    // -----------------------------------------------------------------------
    // 3. Command
    // -----------------------------------------------------------------------
    match cli::run(&args, Sealer::new(params)).await {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
                error!(error = %e, "failed to write output");
                return ExitCode::from(EXIT_USAGE);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::from(e.exit_code())
        }
    }
}
