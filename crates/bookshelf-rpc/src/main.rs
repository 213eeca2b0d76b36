//! Bookshelf RPC Server - JSON-RPC backend for the bookshelf frontend.
//!
//! This binary provides a JSON-RPC 2.0 server that wraps the bookshelf-library
//! crate for communication with the rendering frontend.

mod handlers;
mod server;
mod wrapper;

use anyhow::Result;
use bookshelf_library::config::PathsConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bookshelf-rpc")]
#[command(about = "JSON-RPC server for the bookshelf library")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "0")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Data root directory (defaults to the platform data dir)
    #[arg(long)]
    data_root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Bookshelf RPC Server");

    // Determine the data root
    let data_root = match args.data_root {
        Some(path) => path,
        None => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(PathsConfig::DATA_DIR_NAME),
    };

    info!("Data root: {}", data_root.display());

    // Create the API instance
    let api = bookshelf_library::BookshelfApi::new(&data_root)?;

    // Start the server
    let addr = server::start_server(api, &args.host, args.port).await?;

    // Print port for the frontend launcher to read (intentional stdout for IPC)
    println!("RPC_PORT={}", addr.port());

    info!("RPC server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
