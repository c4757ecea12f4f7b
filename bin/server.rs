// Woke or Not - Web Server
// Serves the catalog query and lookup as JSON

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use woke_or_not::api::{router, AppState};
use woke_or_not::{load_config, Catalog};

/// Woke or Not - JSON API server
#[derive(Parser)]
#[command(name = "woke-server")]
#[command(version)]
struct Args {
    /// Config file (overrides $WOKE_OR_NOT_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog_path = config.catalog_path();
    let catalog = Catalog::load(catalog_path.as_deref()).context("Failed to load catalog")?;
    info!(
        entities = catalog.len(),
        fingerprint = catalog.fingerprint(),
        "catalog ready"
    );

    // Create shared state
    let state = AppState::new(Arc::new(catalog), config.query.limit);
    let app = router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.server.bind.as_str())
        .await
        .with_context(|| format!("Failed to bind to {}", config.server.bind))?;

    info!("🚀 Server running on http://{}", config.server.bind);
    info!("   API: http://{}/api/entities/companies", config.server.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flag() {
        let args = Args::try_parse_from(["woke-server", "--config", "server.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("server.toml")));

        let args = Args::try_parse_from(["woke-server"]).unwrap();
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_positional_path_rejected() {
        assert!(Args::try_parse_from(["woke-server", "server.toml"]).is_err());
    }
}
