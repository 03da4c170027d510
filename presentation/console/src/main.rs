use dotenvy::dotenv;

mod config;
mod setup;
mod view;

use config::app_config::AppConfig;
use setup::{console::Console, dependency_injection::DependencyContainer};

/// Inventory console entry point
///
/// Loads configuration, wires the synchronizer and use cases to the HTTP
/// gateway, and runs the interactive product list until quit or Ctrl-C.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run until the operator quits
    Console::run(config, container).await?;

    Ok(())
}
