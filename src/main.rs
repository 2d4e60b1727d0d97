//! Todo Widget - Main Entry Point
//!
//! Mounts the todo view on stdout (or an existing file) and reads gestures
//! from stdin. The actual implementation is in the `todo_widget` library.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use todo_widget::{Config, MountTarget, TodoApp, logging, run_session};
use tokio::io::BufReader;

/// Todo Widget - a minimal in-memory todo list for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Render frames into this existing file instead of stdout
    #[arg(long)]
    mount: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging()?;

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let target = match MountTarget::resolve(args.mount.as_deref()) {
        Ok(target) => target,
        Err(e) => {
            tracing::error!(error = %e, "cannot mount todo view");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let writer = target.open().await?;
    let mut app = TodoApp::new(config);
    run_session(&mut app, BufReader::new(tokio::io::stdin()), writer).await
}
