//! sneakers - HTTP API for the sneakers catalog and favorites
//!
//! `sneakers serve` runs the favorites and items endpoints for the shop
//! front-end. Configuration comes from flags, environment variables, or a
//! .env file (current directory, then ~/.sneakers/.env).

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

mod config;
mod serve;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "sneakers", version, about = "HTTP API for the sneakers catalog and favorites")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before parsing so clap's env fallbacks see .env values
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    if let Err(e) = tracing_setup::init(&TracingConfig { debug: cli.debug }) {
        eprintln!("warning: failed to initialize logging: {e}");
    }
    for path in &env_files {
        info!("Loaded configuration from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await?,
    }
    Ok(())
}
