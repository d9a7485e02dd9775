//! Planner daemon - academic planner REST backend.
//!
//! A single Rust binary that provides:
//! - CRUD over students, courses, and academic plans
//! - Case-insensitive course search
//! - Prerequisite graph construction for visualization

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use planner_daemon::server::{create_router, AppState};
use planner_daemon::storage::PlanStore;

/// Academic planner backend daemon
#[derive(Parser, Debug)]
#[command(name = "planner-daemon")]
#[command(about = "Academic planner REST backend")]
#[command(version)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, default_value = "planner.db")]
    database: PathBuf,

    /// HTTP port to listen on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    info!("Starting planner daemon");
    info!("Database: {:?}", cli.database);

    // Create the store from the embedded schema on first start
    PlanStore::bootstrap(&cli.database)?;

    let state = AppState {
        db_path: cli.database,
    };

    let router = create_router(state);
    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Planner daemon listening on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
