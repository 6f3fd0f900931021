#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    service::{RunningService, ServiceExt},
    transport::TokioChildProcess,
    RoleClient,
};
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

pub const TIMEOUT: Duration = Duration::from_secs(10);

fn server_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_meeting-guides-mcp"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

/// Runs the server binary once with `args` and collects its output.
pub async fn run_server_with(args: &[&str]) -> Result<Output> {
    let mut cmd = server_command();
    cmd.args(args);
    tokio::time::timeout(TIMEOUT, cmd.output())
        .await
        .context("timeout running meeting-guides-mcp")?
        .context("run meeting-guides-mcp")
}

pub async fn start_mcp_server() -> Result<RunningService<RoleClient, ()>> {
    let transport = TokioChildProcess::new(server_command()).context("spawn mcp server")?;
    tokio::time::timeout(TIMEOUT, ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("start MCP server")
}

pub async fn listed_tool_names(service: &RunningService<RoleClient, ()>) -> Result<Vec<String>> {
    let tools = tokio::time::timeout(TIMEOUT, service.list_tools(Default::default()))
        .await
        .context("timeout listing tools")??;
    Ok(tools.tools.iter().map(|t| t.name.to_string()).collect())
}

pub async fn call_tool(
    service: &RunningService<RoleClient, ()>,
    name: &str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    tokio::time::timeout(
        TIMEOUT,
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling tool")?
    .context("call tool")
}

pub async fn call_tool_text(
    service: &RunningService<RoleClient, ()>,
    name: &str,
    args: serde_json::Value,
) -> Result<String> {
    let result = call_tool(service, name, args).await?;
    assert_ne!(result.is_error, Some(true), "{name} returned error");
    assert_eq!(result.content.len(), 1, "{name} should return one block");
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("tool did not return text content")?;
    Ok(text.to_string())
}
