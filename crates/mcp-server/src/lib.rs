//! Meeting Guides MCP Server
//!
//! Serves the meeting-automation guide catalog over MCP (stdio).
//!
//! ## Tools
//!
//! - `search-guide` - how to find a meeting in Fireflies
//! - `details-guide` - how to pull summary and transcript for a meeting
//! - `task-creation-guide` - how to turn action items into Asana tasks
//! - `documentation-guide` - how to file the notes in a Notion database
//! - `full-workflow-guide` - the five-step end-to-end run
//! - `quick-commands-guide` - cheat sheet
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "meeting-automation": {
//!       "command": "meeting-guides-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

pub mod inventory;
mod service;

pub use service::{MeetingGuidesService, SERVER_NAME};

pub async fn main_entry() -> Result<()> {
    let mut args = std::env::args().skip(1);
    if let Some(flag) = args.next() {
        match flag.as_str() {
            "--print-tools" => {
                let inventory = inventory::tool_inventory_json(env!("CARGO_PKG_VERSION"));
                println!(
                    "{}",
                    serde_json::to_string_pretty(&inventory).context("serialize tool inventory")?
                );
                return Ok(());
            }
            "--version" | "-V" => {
                println!("{} {}", inventory::BINARY_NAME, env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => anyhow::bail!("unknown argument: {other} (expected --print-tools or --version)"),
        }
    }

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting {SERVER_NAME} MCP server");

    let server = MeetingGuidesService::new()
        .serve(stdio())
        .await
        .context("start MCP server")?;
    server.waiting().await.context("MCP server task failed")?;

    log::info!("{SERVER_NAME} MCP server stopped");
    Ok(())
}
