//! personax-web - PersonaX quiz HTTP service
//!
//! Serves the quiz page and scoring API. Stateless: the only shared data
//! is the immutable question catalog loaded at startup.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use personax_core::Catalog;
use personax_web::{build_router, AppState};

/// PersonaX quiz service
#[derive(Debug, Parser)]
#[command(name = "personax-web", version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "PERSONAX_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "PERSONAX_PORT", default_value_t = 5730)]
    port: u16,

    /// Substitute question catalog (TOML); defaults to the builtin bank
    #[arg(long, env = "PERSONAX_CATALOG")]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting PersonaX quiz service (personax-web) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => {
            let catalog = Catalog::from_toml_file(path)?;
            info!("Loaded catalog from {} ({} questions)", path.display(), catalog.len());
            catalog
        }
        None => {
            let catalog = Catalog::builtin();
            info!("Using builtin catalog ({} questions)", catalog.len());
            catalog
        }
    };

    let state = AppState::new(catalog);
    let app = build_router(state);

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("personax-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
