//! Pokédex HTTP server
//!
//! Loads a `data.json` file of types, pokemons and moves once at startup and
//! serves it read-only as plain text.
//!
//! Usage:
//!   pokedex-server --port 8080 --data data.json
//!
//! `POST /reload` re-reads the data file without restarting.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use pokedex_server::{build_router, AppState};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "pokedex-server")]
#[command(about = "Read-only plain-text Pokédex API")]
struct Args {
    /// HTTP port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Path to the JSON data file
    #[arg(short, long, default_value = "data.json")]
    data: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level.into()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Pokédex server starting...");
    let state = Arc::new(AppState::load(&args.data));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", args.port))?;
    info!("HTTP API listening on port {}", args.port);

    println!("\n========================================");
    println!("  Pokédex Server Running");
    println!("========================================");
    println!("  Data:      {}", args.data.display());
    println!("  HTTP Port: {}", args.port);
    println!("  Usage:     http://localhost:{}/", args.port);
    println!("========================================\n");

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
