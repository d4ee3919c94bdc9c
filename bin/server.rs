// Meal Energy Matcher - Web Server
// Loads the food table once and serves the calculator over HTTP

use anyhow::{Context, Result};
use clap::Parser;
use nutri_match::{api, logging, ServerConfig};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutri-server", version, about = "Meal Energy Matcher web server")]
struct ServerArgs {
    #[command(flatten)]
    config: ServerConfig,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    logging::init(args.verbose);

    let table = args.config.dataset.load()?;
    let app = api::router(Arc::new(table));

    let listener = tokio::net::TcpListener::bind(&args.config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", args.config.bind))?;

    info!(addr = %args.config.bind, "🚀 Server running");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
