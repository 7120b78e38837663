//! `get_mining_pool_hashrates` - average hashrates and hashrate share for
//! active pools over a trailing time period.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use super::common::{default_hashrate_period, invalid_params_result};
use crate::domains::tools::upstream::MempoolClient;

/// Parameters for the pool hashrates tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMiningPoolHashratesParams {
    #[schemars(description = "Optional: 1m, 3m, 6m, 1y, 2y, 3y")]
    #[serde(default = "default_hashrate_period")]
    pub time_period: String,
}

#[derive(Debug, Clone)]
pub struct GetMiningPoolHashratesTool;

impl GetMiningPoolHashratesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_mining_pool_hashrates";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns average hashrates and share of total hashrate for active mining pools over the specified trailing timePeriod.";

    /// Build the upstream request URL.
    pub fn build_url(base_url: &str, params: &GetMiningPoolHashratesParams) -> String {
        format!("{}/v1/mining/hashrate/pools/{}", base_url, params.time_period)
    }

    /// Execute the tool against the upstream API.
    pub async fn execute(
        params: &GetMiningPoolHashratesParams,
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
        match serde_json::from_value::<GetMiningPoolHashratesParams>(serde_json::Value::Object(
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
            input_schema: cached_schema_for_type::<GetMiningPoolHashratesParams>(),
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
    fn test_params_default_period() {
        let params: GetMiningPoolHashratesParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.time_period, "1m");
    }

    #[test]
    fn test_build_url() {
        let params: GetMiningPoolHashratesParams =
            serde_json::from_str(r#"{"timePeriod": "6m"}"#).unwrap();
        assert_eq!(
            GetMiningPoolHashratesTool::build_url("https://mempool.space/api", &params),
            "https://mempool.space/api/v1/mining/hashrate/pools/6m"
        );
    }
}
