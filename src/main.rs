use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wardbook::api::start_server;
use wardbook::api::types::ApiContext;
use wardbook::config;
use wardbook::db;

#[derive(Parser)]
#[command(name = "wardbook")]
#[command(version, about = "Hospital appointment record keeper", long_about = None)]
struct Args {
    /// Path to the SQLite database file (created if absent)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Address to bind the HTML + API server to
    #[arg(long, default_value = config::DEFAULT_BIND_ADDR)]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let db_path = args.db_path.unwrap_or_else(config::default_database_path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create data directory {}: {e}", parent.display()))?;
    }

    // Open once at startup so schema problems fail fast, then hand the
    // store to the serving context.
    let conn = db::open_database(&db_path)
        .map_err(|e| format!("Cannot open database {}: {e}", db_path.display()))?;
    tracing::info!(path = %db_path.display(), "Database ready");

    let ctx = ApiContext::new(conn);
    let mut server = start_server(ctx, args.bind).await?;
    tracing::info!("Serving on http://{}", server.addr);

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Cannot listen for shutdown signal: {e}"))?;
    server.shutdown();
    Ok(())
}
