//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires
//! them together for the transport layer.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    GetHashrateTool, GetMiningPoolBlocksTool, GetMiningPoolHashrateTool,
    GetMiningPoolHashratesTool, GetMiningPoolTool, GetMiningPoolsTool,
};
use super::upstream::MempoolClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<MempoolClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetMiningPoolsTool::create_route(client.clone()))
        .with_route(GetMiningPoolTool::create_route(client.clone()))
        .with_route(GetMiningPoolHashratesTool::create_route(client.clone()))
        .with_route(GetMiningPoolHashrateTool::create_route(client.clone()))
        .with_route(GetMiningPoolBlocksTool::create_route(client.clone()))
        .with_route(GetHashrateTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_client() -> Arc<MempoolClient> {
        Arc::new(MempoolClient::new("https://mempool.space/api"))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_mining_pools"));
        assert!(names.contains(&"get_mining_pool"));
        assert!(names.contains(&"get_mining_pool_hashrates"));
        assert!(names.contains(&"get_mining_pool_hashrate"));
        assert!(names.contains(&"get_mining_pool_blocks"));
        assert!(names.contains(&"get_hashrate"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_every_tool_declares_a_description() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(
                tool.description.as_ref().is_some_and(|d| !d.is_empty()),
                "{} has no description",
                tool.name
            );
        }
    }
}
