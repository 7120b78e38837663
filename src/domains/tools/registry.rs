//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch for tool invocations
//! - Tool metadata for listing

use std::sync::Arc;
use tracing::warn;

use rmcp::model::{CallToolResult, Tool};

use super::definitions::mining::common::error_result;
use super::error::ToolError;
use super::definitions::{
    GetHashrateTool, GetMiningPoolBlocksTool, GetMiningPoolHashrateTool,
    GetMiningPoolHashratesTool, GetMiningPoolTool, GetMiningPoolsTool,
};
use super::upstream::MempoolClient;

/// Tool registry - manages all available tools.
///
/// Dispatch contract: an unknown tool name or arguments that fail the
/// tool's schema yield an error result without any upstream request;
/// everything else is relayed from the upstream client unchanged.
pub struct ToolRegistry {
    client: Arc<MempoolClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<MempoolClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetMiningPoolsTool::NAME,
            GetMiningPoolTool::NAME,
            GetMiningPoolHashratesTool::NAME,
            GetMiningPoolHashrateTool::NAME,
            GetMiningPoolBlocksTool::NAME,
            GetHashrateTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetMiningPoolsTool::to_tool(),
            GetMiningPoolTool::to_tool(),
            GetMiningPoolHashratesTool::to_tool(),
            GetMiningPoolHashrateTool::to_tool(),
            GetMiningPoolBlocksTool::to_tool(),
            GetHashrateTool::to_tool(),
        ]
    }

    /// Dispatch a tool invocation to the appropriate handler.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        let args = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => serde_json::Map::new(),
            _ => return error_result(&format!("Arguments for {} must be an object", name)),
        };

        match name {
            GetMiningPoolsTool::NAME => GetMiningPoolsTool::call(args, &self.client).await,
            GetMiningPoolTool::NAME => GetMiningPoolTool::call(args, &self.client).await,
            GetMiningPoolHashratesTool::NAME => {
                GetMiningPoolHashratesTool::call(args, &self.client).await
            }
            GetMiningPoolHashrateTool::NAME => {
                GetMiningPoolHashrateTool::call(args, &self.client).await
            }
            GetMiningPoolBlocksTool::NAME => GetMiningPoolBlocksTool::call(args, &self.client).await,
            GetHashrateTool::NAME => GetHashrateTool::call(args, &self.client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                error_result(&ToolError::not_found(name).to_string())
            }
        }
    }
}
