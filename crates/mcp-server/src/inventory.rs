use meeting_guides::list_operations;
use serde_json::json;

pub const BINARY_NAME: &str = "meeting-guides-mcp";

pub fn tool_inventory_json(version: &str) -> serde_json::Value {
    let tools: Vec<serde_json::Value> = list_operations()
        .iter()
        .map(|op| op.inventory_entry())
        .collect();

    json!({
        "binary": BINARY_NAME,
        "version": version,
        "count": tools.len(),
        "tools": tools,
    })
}

pub fn tool_instructions() -> String {
    let mut lines = vec![
        "Meeting automation guides: each tool returns step-by-step instructions for calling the Fireflies, Asana and Notion MCP tools yourself.".to_string(),
        "Recommended flow: search-guide → details-guide → task-creation-guide / documentation-guide; use full-workflow-guide for an end-to-end run.".to_string(),
        "Tools:".to_string(),
    ];
    for op in list_operations() {
        lines.push(format!("- {}: {}", op.name, op.summary));
    }
    lines.join("\n")
}
