//! Helpdesk - static SPA server and JSON API
//!
//! Main entry point for the helpdesk binary.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use helpdesk_api::utils::{init_tracing, with_bootstrap_tracing};
use helpdesk_api::{build_router, AppContext};
use helpdesk_infra::{config, http};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the config so its variables can override file values
    let dotenv = dotenvy::dotenv();

    // The logging config is part of what is being loaded
    let config = with_bootstrap_tracing(config::load).context("failed to load configuration")?;
    init_tracing(&config.logging);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "dotenv_loaded"),
        Err(err) => info!(reason = %err, "dotenv_not_loaded"),
    }

    let static_dir = Path::new(&config.server.static_dir);
    if !http::entry_document_exists(static_dir) {
        warn!(static_dir = %static_dir.display(), "spa_entry_document_missing");
    }

    let ctx = Arc::new(AppContext::new(config).context("failed to build application context")?);
    let router = build_router(Arc::clone(&ctx)).context("failed to build router")?;

    let listener = http::bind(&ctx.config.server).await.context("failed to bind listener")?;
    info!(
        address = %ctx.config.server.bind_address(),
        static_dir = %ctx.config.server.static_dir,
        "helpdesk_started"
    );

    http::serve(listener, router, http::shutdown_signal()).await.context("server error")?;
    Ok(())
}
