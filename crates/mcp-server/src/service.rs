//! MCP boundary for the guide catalog.

use crate::inventory::tool_instructions;
use meeting_guides::{list_operations, Arguments, Dispatcher, GuideError, OperationDescriptor};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::json;
use std::sync::Arc;

pub const SERVER_NAME: &str = "meeting-automation";

/// Stateless guide server. Clones share one dispatcher.
#[derive(Clone, Debug, Default)]
pub struct MeetingGuidesService {
    dispatcher: Arc<Dispatcher>,
}

impl MeetingGuidesService {
    pub fn new() -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new()),
        }
    }

    pub fn tools() -> Vec<Tool> {
        list_operations().iter().map(descriptor_to_tool).collect()
    }

    /// Protocol-independent half of `call_tool`.
    pub fn call(
        &self,
        name: &str,
        arguments: Option<&serde_json::Map<String, serde_json::Value>>,
    ) -> Result<CallToolResult, McpError> {
        let args = arguments.map(Arguments::from_json).unwrap_or_default();
        let blocks = self
            .dispatcher
            .invoke(name, &args)
            .map_err(guide_error_to_mcp)?;
        Ok(CallToolResult::success(
            blocks.into_iter().map(Content::text).collect(),
        ))
    }
}

fn descriptor_to_tool(op: &OperationDescriptor) -> Tool {
    Tool::new(op.name, op.description, Arc::new(op.input_schema()))
}

fn guide_error_to_mcp(err: GuideError) -> McpError {
    let data = json!({ "operation": err.operation() });
    McpError::invalid_params(err.to_string(), Some(data))
}

impl ServerHandler for MeetingGuidesService {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();
        ServerInfo {
            instructions: Some(tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: Self::tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(&request.name, request.arguments.as_ref())
    }
}
