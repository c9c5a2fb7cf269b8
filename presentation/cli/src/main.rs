use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod setup;

use cli::args::Args;
use config::app_config::AppConfig;
use setup::runner::Runner;

/// Scanner CLI Entry Point
///
/// Parses arguments, resolves configuration, and runs a single scan job:
/// - cli/: Command line arguments
/// - config/: Scanner connection settings and per-run configuration
/// - setup/: Dependency wiring and the scan runner
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse arguments; malformed dpi or size exits here
    let args = Args::parse();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load environment variables
    dotenv().ok();

    // 4. Load configuration
    let config = AppConfig::from_env(args)?;

    // 5. Run the scan
    let outcome = Runner::run(config).await?;

    tracing::info!(
        "Saved {}x{} scan to {}",
        outcome.width,
        outcome.height,
        outcome.path.display()
    );
    Ok(())
}
