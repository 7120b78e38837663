//! `get_mining_pool` - details for a single pool by slug.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use super::common::invalid_params_result;
use crate::domains::tools::upstream::MempoolClient;

/// Parameters for the pool detail tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMiningPoolParams {
    #[schemars(description = "Mining pool slug (e.g., slushpool)")]
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct GetMiningPoolTool;

impl GetMiningPoolTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_mining_pool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Returns details about the mining pool specified by slug.";

    /// Build the upstream request URL.
    pub fn build_url(base_url: &str, params: &GetMiningPoolParams) -> String {
        format!("{}/v1/mining/pool/{}", base_url, params.slug)
    }

    /// Execute the tool against the upstream API.
    pub async fn execute(params: &GetMiningPoolParams, client: &MempoolClient) -> CallToolResult {
        let url = Self::build_url(client.base_url(), params);
        client.fetch_and_format(&url).await
    }

    /// Parse raw arguments and run the tool.
    pub async fn call(
        args: serde_json::Map<String, serde_json::Value>,
        client: &MempoolClient,
    ) -> CallToolResult {
        match serde_json::from_value::<GetMiningPoolParams>(serde_json::Value::Object(args)) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => invalid_params_result(Self::NAME, &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetMiningPoolParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(client: Arc<MempoolClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move { Ok(Self::call(args, &client).await) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_required() {
        let result = serde_json::from_str::<GetMiningPoolParams>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_url() {
        let params: GetMiningPoolParams =
            serde_json::from_str(r#"{"slug": "foundryusa"}"#).unwrap();
        assert_eq!(
            GetMiningPoolTool::build_url("https://mempool.space/api", &params),
            "https://mempool.space/api/v1/mining/pool/foundryusa"
        );
    }
}
