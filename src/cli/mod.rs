// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute; starts the API server when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server bind address
    #[arg(long, env = "WEB_ADDRESS")]
    pub address: Option<String>,

    /// API server port
    #[arg(long, env = "WEB_PORT")]
    pub port: Option<u16>,
}
