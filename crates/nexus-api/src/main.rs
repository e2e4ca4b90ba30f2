//! nexus-api - local HTTP shell for the dorknexus workbench

use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexus_api::{app, AppState};
use nexus_core::defaults;
use nexus_inference::AiConfig;
use nexus_vault::JsonVaultStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Config/vault load failures degrade to defaults; startup is never blocked
    let config = AiConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "AI config unreadable, starting unconfigured");
        AiConfig::default()
    });
    let store = JsonVaultStore::new(JsonVaultStore::default_path());
    info!(vault = %store.path().display(), "vault location resolved");

    let state = AppState::new(store, config, AiConfig::default_config_path());

    let port = std::env::var(defaults::ENV_PORT)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(defaults::SERVER_PORT);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    info!(%addr, "dorknexus shell listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
