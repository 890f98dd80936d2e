//! Checklist MCP Server - Main Entry Point
//!
//! This is the main entry point for the checklist MCP server application.
//! The actual implementation is in the `checklist_mcp` library.

use anyhow::Result;
use checklist_mcp::{ChecklistServerHandler, ListStore, Settings, logging};
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;

/// Checklist MCP Server - personal checklist with JSON persistence via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the default checklist file (JSON)
    file: PathBuf,

    /// Path to a TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides the settings file
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let level = args.log_level.as_deref().unwrap_or(&settings.log_level);
    logging::init_logging(level, settings.log_dir.as_deref())?;

    let handler = ChecklistServerHandler::new(&args.file, ListStore::new(settings.indent))?;
    log::info!(
        "event=server_start status=ok file={} items={}",
        handler.file_path().display(),
        handler.current_status().total
    );
    serve_stdio(handler).await?;
    Ok(())
}
