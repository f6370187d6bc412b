use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Args;
use sneakers_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use sneakers_server::{create_pool, run_server, DbConfig, ServerConfig};

/// Arguments for serving the API
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "SNEAKERS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Database URL (overrides the --db-* parts)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "PGHOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "PGPORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "PGUSER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "PGDATABASE", default_value = "mydatabase")]
    pub db_name: String,

    /// Maximum pooled database connections
    #[arg(long, env = "SNEAKERS_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl ServeArgs {
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.database_url.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            dbname: self.db_name.clone(),
            max_connections: self.max_connections,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db_config();
    tracing::debug!(?db_config, "database configuration");

    // Connect and ping before binding; failure here is fatal
    let pool = create_pool(&db_config)
        .await
        .context("Failed to connect to database")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    tracing::info!("Starting sneakers server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
