//! `get_mining_pools` - pool rankings over a trailing time period.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use super::common::{default_ranking_period, invalid_params_result};
use crate::domains::tools::upstream::MempoolClient;

/// Parameters for the pool ranking tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMiningPoolsParams {
    #[schemars(description = "Optional: trailing period like 24h, 3d, 1w, 1m, 3m, 6m, 1y, 2y, 3y")]
    #[serde(default = "default_ranking_period")]
    pub time_period: String,
}

#[derive(Debug, Clone)]
pub struct GetMiningPoolsTool;

impl GetMiningPoolsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_mining_pools";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns a list of all known mining pools ordered by blocks found over the specified trailing timePeriod.";

    /// Build the upstream request URL.
    pub fn build_url(base_url: &str, params: &GetMiningPoolsParams) -> String {
        format!("{}/v1/mining/pools/{}", base_url, params.time_period)
    }

    /// Execute the tool against the upstream API.
    pub async fn execute(params: &GetMiningPoolsParams, client: &MempoolClient) -> CallToolResult {
        let url = Self::build_url(client.base_url(), params);
        client.fetch_and_format(&url).await
    }

    /// Parse raw arguments and run the tool.
    ///
    /// Arguments that fail validation yield an error result without any
    /// upstream request being made.
    pub async fn call(
        args: serde_json::Map<String, serde_json::Value>,
        client: &MempoolClient,
    ) -> CallToolResult {
        match serde_json::from_value::<GetMiningPoolsParams>(serde_json::Value::Object(args)) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => invalid_params_result(Self::NAME, &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetMiningPoolsParams>(),
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
