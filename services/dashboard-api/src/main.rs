//! Forest health dashboard API service.
//!
//! HTTP server exposing daily observation frames as layer specs and
//! descriptive statistics.

mod handlers;
mod state;

use anyhow::Result;
use axum::{routing::get, Router};
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use obs_processor::ProcessorConfig;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "dashboard-api")]
#[command(about = "Forest health observation dashboard API server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Observation CSV path (overrides DATASET_PATH)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Render style JSON path (overrides STYLE_PATH)
    #[arg(long)]
    style: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async_main(args))?;
    Ok(())
}

async fn async_main(args: Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting dashboard API server");

    let mut config = ProcessorConfig::from_env();
    if let Some(dataset) = args.dataset {
        config.dataset_path = dataset;
    }
    if let Some(style) = args.style {
        config.style_path = Some(style);
    }
    config.validate().map_err(anyhow::Error::msg)?;
    info!(dataset = %config.dataset_path.display(), "Using observation dataset");

    let app_state = Arc::new(AppState::new(&config)?);

    let app = Router::new()
        .route("/healthz", get(handlers::healthz_handler))
        .route("/api/dates", get(handlers::dates_handler))
        .route("/api/frames/:date", get(handlers::frame_handler))
        .route("/api/frames/:date/stats", get(handlers::stats_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = args.listen.parse()?;
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
