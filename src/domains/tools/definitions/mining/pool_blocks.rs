//! `get_mining_pool_blocks` - recent blocks mined by a pool, optionally
//! looking back from a given block height.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use super::common::{BlockHeight, invalid_params_result};
use crate::domains::tools::upstream::MempoolClient;

/// Parameters for the pool blocks tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMiningPoolBlocksParams {
    #[schemars(description = "Mining pool slug (e.g., luxor)")]
    pub slug: String,

    #[schemars(description = "Optional block height to look back from (e.g., 730000)")]
    #[serde(default)]
    pub block_height: Option<BlockHeight>,
}

#[derive(Debug, Clone)]
pub struct GetMiningPoolBlocksTool;

impl GetMiningPoolBlocksTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_mining_pool_blocks";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns past 10 blocks mined by the specified mining pool before the specified blockHeight. If not specified, returns the 10 most recent blocks.";

    /// Build the upstream request URL.
    ///
    /// When `blockHeight` is absent the trailing path segment is omitted
    /// entirely; the upstream API treats `/blocks` and `/blocks/{height}`
    /// as distinct routes.
    pub fn build_url(base_url: &str, params: &GetMiningPoolBlocksParams) -> String {
        match &params.block_height {
            Some(height) => format!(
                "{}/v1/mining/pool/{}/blocks/{}",
                base_url, params.slug, height
            ),
            None => format!("{}/v1/mining/pool/{}/blocks", base_url, params.slug),
        }
    }

    /// Execute the tool against the upstream API.
    pub async fn execute(
        params: &GetMiningPoolBlocksParams,
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
        match serde_json::from_value::<GetMiningPoolBlocksParams>(serde_json::Value::Object(args)) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => invalid_params_result(Self::NAME, &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetMiningPoolBlocksParams>(),
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
    fn test_build_url_without_height_omits_segment() {
        let params: GetMiningPoolBlocksParams =
            serde_json::from_str(r#"{"slug": "luxor"}"#).unwrap();
        assert_eq!(
            GetMiningPoolBlocksTool::build_url("https://mempool.space/api", &params),
            "https://mempool.space/api/v1/mining/pool/luxor/blocks"
        );
    }

    #[test]
    fn test_build_url_with_numeric_height() {
        let params: GetMiningPoolBlocksParams =
            serde_json::from_str(r#"{"slug": "luxor", "blockHeight": 730000}"#).unwrap();
        assert_eq!(
            GetMiningPoolBlocksTool::build_url("https://mempool.space/api", &params),
            "https://mempool.space/api/v1/mining/pool/luxor/blocks/730000"
        );
    }

    #[test]
    fn test_build_url_with_string_height() {
        let params: GetMiningPoolBlocksParams =
            serde_json::from_str(r#"{"slug": "luxor", "blockHeight": "730000"}"#).unwrap();
        assert_eq!(
            GetMiningPoolBlocksTool::build_url("https://mempool.space/api", &params),
            "https://mempool.space/api/v1/mining/pool/luxor/blocks/730000"
        );
    }

    #[test]
    fn test_slug_is_required() {
        let result = serde_json::from_str::<GetMiningPoolBlocksParams>(r#"{"blockHeight": 1}"#);
        assert!(result.is_err());
    }
}
