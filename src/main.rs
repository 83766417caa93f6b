//! mvn-update - checks Gradle build files for outdated Maven dependencies
//!
//! Each `group:artifact:version` declaration is resolved against a primary
//! repository with a fallback, compared with the declared version, and
//! optionally rewritten in place.

use clap::Parser;
use mvn_update::cli::CliArgs;
use mvn_update::config::Config;
use mvn_update::orchestrator::Orchestrator;
use mvn_update::output::{create_formatter, OutputConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code when the run completed but some rewrites failed
const EXIT_PARTIAL: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level chosen by `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "mvn_update=debug"
    } else {
        "mvn_update=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = Config::from_cli(&args)?;
    debug!(
        "mvn-update v{}: checking {}",
        env!("CARGO_PKG_VERSION"),
        config.file.display()
    );

    let output_config =
        OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.is_dry_run())
            .with_color(io::stdout().is_terminal());

    let orchestrator = Orchestrator::new(config)?;
    let result = orchestrator.run(output_config.shows_progress()).await?;

    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    if result.has_errors() {
        Ok(ExitCode::from(EXIT_PARTIAL))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
