//! HTTP server for the soil to crop recommender.
//!
//! Routes:
//! - `GET /` index page with the soil accordion and the form mount point
//! - `POST /api/soil-to-crops` crop recommendations for one soil
//! - `GET /healthz` liveness
//! - `/assets/*` the WASM bundle, when `--assets-dir` is given

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use log::info;
use scr_soil::Catalog;

pub mod page;
pub mod routes;

pub use routes::{build_router, AppState};

/// Server settings, all from the command line.
#[derive(Args, Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Directory holding the built WASM bundle, served under /assets
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Module script the index page imports to start the form
    #[arg(long, default_value = "/assets/scr-web.js")]
    pub bundle_script: String,
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let catalog = Catalog::embedded().context("failed to load soil catalog")?;
    info!("loaded {} soil types", catalog.soils().len());

    let state = AppState::new(catalog, &config.bundle_script);
    let app = build_router(state, config.assets_dir.as_deref());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
