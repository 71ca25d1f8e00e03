//! Sports service binary.

use clap::Parser;
use sports::repo::{SportsRepo, SqliteSportsRepo};
use sports::service::SportsService;
use sports::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sports service - lists and fetches sporting events.
#[derive(Parser)]
#[command(name = "sports")]
#[command(about = "Read-only sports query service")]
struct Args {
    /// TOML config file (ignored if missing)
    #[arg(long, default_value = "sports.toml")]
    config: PathBuf,

    /// Address to listen on
    #[arg(long)]
    listen: Option<SocketAddr>,

    /// Path to SQLite database
    #[arg(long)]
    db: Option<PathBuf>,

    /// Number of events to seed on startup
    #[arg(long)]
    seed_rows: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sports=info,feed_core=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = sports::default_config()
        .load(&args.config)?
        .with_overrides(args.listen, args.db, args.seed_rows);

    tracing::info!("Starting sports service");
    tracing::info!("Database: {:?}", config.database);

    let db = feed_core::db::open(&config.database)?;
    let repo = Arc::new(SqliteSportsRepo::new(db, config.seed_rows));
    repo.init()?;

    let state = AppState::new(Arc::new(SportsService::new(repo)));
    let app = sports::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    tracing::info!("Server running on http://{}", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Sports service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
