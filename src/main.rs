//! pingcheck - concurrent ping of modem, router and DNS
//!
//! Binary entry point for the pingcheck CLI application.

#![warn(clippy::all, warnings)]
#![warn(clippy::pedantic, clippy::nursery)]

use pingcheck::config::ConfigLoader;
use pingcheck::error::Result;
use pingcheck::ping::log::{LogWriter, DEFAULT_LOG_DIR};
use pingcheck::ping::orchestrator::{print_progress, Orchestrator};
use pingcheck::ping::SystemPinger;
use pingcheck::report;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging based on verbosity level.
///
/// Diagnostics stay at `warn` by default so they do not break up the
/// progress lines and the summary table.
fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Main entry point for the pingcheck CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = pingcheck::cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    tracing::debug!("pingcheck starting...");

    let registry = ConfigLoader::load(cli.file.as_deref())?;

    println!("{}", report::start_banner(&chrono::Local::now(), cli.count, registry.len()));

    let log = LogWriter::create(DEFAULT_LOG_DIR)?;
    let orchestrator = Orchestrator::new(SystemPinger::new(), log);

    let rows = orchestrator
        .run_all(registry.hosts(), cli.count, print_progress)
        .await?;

    println!();
    print!("{}", report::render(rows, registry.display_order()));
    println!("{}", report::closing_note(orchestrator.log_dir()));

    Ok(())
}
