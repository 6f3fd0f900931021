use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    meeting_guides_mcp::main_entry().await
}
