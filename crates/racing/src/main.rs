//! Racing service binary.

use clap::Parser;
use racing::repo::{RacesRepo, SqliteRacesRepo};
use racing::service::RacingService;
use racing::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Racing service - lists and fetches races.
#[derive(Parser)]
#[command(name = "racing")]
#[command(about = "Read-only racing query service")]
struct Args {
    /// TOML config file (ignored if missing)
    #[arg(long, default_value = "racing.toml")]
    config: PathBuf,

    /// Address to listen on
    #[arg(long)]
    listen: Option<SocketAddr>,

    /// Path to SQLite database
    #[arg(long)]
    db: Option<PathBuf>,

    /// Number of races to seed on startup
    #[arg(long)]
    seed_rows: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "racing=info,feed_core=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = racing::default_config()
        .load(&args.config)?
        .with_overrides(args.listen, args.db, args.seed_rows);

    tracing::info!("Starting racing service");
    tracing::info!("Database: {:?}", config.database);

    let db = feed_core::db::open(&config.database)?;
    let repo = Arc::new(SqliteRacesRepo::new(db, config.seed_rows));
    repo.init()?;

    let state = AppState::new(Arc::new(RacingService::new(repo)));
    let app = racing::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    tracing::info!("Server running on http://{}", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Racing service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
