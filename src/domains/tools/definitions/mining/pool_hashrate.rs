//! `get_mining_pool_hashrate` - weekly-average hashrate history for one pool.

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

/// Parameters for the pool hashrate history tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMiningPoolHashrateParams {
    #[schemars(description = "Mining pool slug (e.g., foundryusa)")]
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct GetMiningPoolHashrateTool;

impl GetMiningPoolHashrateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_mining_pool_hashrate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns all known hashrate data for the mining pool specified by slug. Hashrate values are weekly averages.";

    /// Build the upstream request URL.
    pub fn build_url(base_url: &str, params: &GetMiningPoolHashrateParams) -> String {
        format!("{}/v1/mining/pool/{}/hashrate", base_url, params.slug)
    }

    /// Execute the tool against the upstream API.
    pub async fn execute(
        params: &GetMiningPoolHashrateParams,
        client: &MempoolClient,
    ) -> CallToolResult {
        let url = Self::build_url(client.base_url(), params);
        client.fetch_and_format(&url).await
    }

    /// Parse raw arguments and run the tool.
    pub async fn call(
        args: serde_json::Map<String, serde_json::Value>,
        client: &MempoolClient,
    ) -> CallToolResult {
        match serde_json::from_value::<GetMiningPoolHashrateParams>(serde_json::Value::Object(
            args,
        )) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => invalid_params_result(Self::NAME, &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetMiningPoolHashrateParams>(),
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
        let result = serde_json::from_str::<GetMiningPoolHashrateParams>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_url() {
        let params: GetMiningPoolHashrateParams =
            serde_json::from_str(r#"{"slug": "luxor"}"#).unwrap();
        assert_eq!(
            GetMiningPoolHashrateTool::build_url("https://mempool.space/api", &params),
            "https://mempool.space/api/v1/mining/pool/luxor/hashrate"
        );
    }
}
