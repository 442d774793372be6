//! Overlay backend server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use overlay_core::config::AppConfig;
use overlay_server::{AppState, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Persistence backend for the stream task overlay
#[derive(Parser, Debug)]
#[command(name = "overlayd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "OVERLAY_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

/// Load configuration: defaults, then the optional TOML file, then `OVERLAY_` env vars.
fn load_config(config_path: &str) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if std::path::Path::new(config_path).exists() {
        tracing::info!(config_path = %config_path, "Loading configuration from file");
        figment = figment.merge(Toml::file(config_path));
    } else {
        tracing::debug!("No config file found at {}, using defaults", config_path);
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("OVERLAY_").split("__"))
        .extract()
        .context("failed to load configuration")?;

    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Startup banner
    tracing::info!("{} v{}", overlay_core::SERVICE_NAME, env!("CARGO_PKG_VERSION"));

    let config = load_config(&args.config)?;

    // Initialize metadata store (creates tables if absent)
    let metadata = overlay_metadata::from_config(&config.metadata)
        .await
        .context("failed to initialize metadata store")?;
    tracing::info!(path = %config.metadata.path.display(), "Database ready");

    // Parse bind address
    let addr: SocketAddr = config.server.bind.parse().context("invalid bind address")?;

    let state = AppState::new(config, metadata);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_without_file_uses_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = load_config("does-not-exist.toml").expect("config should load");
            assert_eq!(config.server.bind, "0.0.0.0:8000");
            assert_eq!(
                config.metadata.path,
                std::path::PathBuf::from("overlay_data.db")
            );
            Ok(())
        });
    }

    #[test]
    fn test_load_config_file_and_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "server.toml",
                r#"
                [server]
                bind = "127.0.0.1:9000"

                [metadata]
                path = "data/overlay.db"
                "#,
            )?;
            jail.set_env("OVERLAY_SERVER__BIND", "127.0.0.1:9100");

            let config = load_config("server.toml").expect("config should load");
            assert_eq!(config.server.bind, "127.0.0.1:9100");
            assert_eq!(
                config.metadata.path,
                std::path::PathBuf::from("data/overlay.db")
            );
            Ok(())
        });
    }
}
