//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the mining-statistics tool router.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `build_url()` + `execute()` methods (core logic)
//! - `create_route()` (registered via the ToolRouter)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.

use rmcp::{
    RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*, service::RequestContext,
    tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{MempoolClient, build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// incoming tool calls to the mining-statistics tools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared client for the upstream mempool API.
    client: Arc<MempoolClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client = Arc::new(MempoolClient::new(config.mempool_base_url.clone()));

        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config,
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared upstream client.
    pub fn client(&self) -> &Arc<MempoolClient> {
        &self.client
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only Bitcoin mining statistics from a mempool-tracking API: \
                 pool rankings, per-pool hashrate and block history, and network-wide \
                 hashrate and difficulty."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_advertises_all_tools() {
        let server = McpServer::new(Config::default());
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 6);
    }

    #[test]
    fn test_server_info_enables_tools() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
    }
}
