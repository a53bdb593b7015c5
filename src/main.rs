use clap::Parser;
use std::path::Path;

mod cli;
mod api;
mod core;
mod utils;
mod models;
mod crypto;
mod analyzer;
mod generators;
mod education;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    if let Some(address) = args.address {
        config.web_address = address;
    }
    if let Some(port) = args.port {
        config.web_port = port;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    // One-shot CLI mode
    if let Some(command) = args.command {
        return cli::handlers::run_command(command).map_err(|e| {
            eprintln!("Error: {e}");
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        });
    }

    log::info!("🔐 Starting PassLab - Password Security Lab");
    log::info!(
        "Argon2 support: {}",
        if crypto::argon2_available() { "available" } else { "not compiled in" }
    );

    ctrlc::set_handler(move || {
        log::info!("🔴 Ctrl+C received. Shutting down.");
        std::process::exit(0);
    })
    .expect("Failed to set Ctrl+C handler");

    api::start_server(config).await.map_err(|e| {
        log::error!("API server failed: {}", e);
        e
    })
}
