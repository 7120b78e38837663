//! `get_hashrate` - network-wide hashrate and difficulty figures.

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

/// Parameters for the network hashrate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetHashrateParams {
    #[schemars(description = "Optional: 1m, 3m, 6m, 1y, 2y, 3y")]
    #[serde(default = "default_hashrate_period")]
    pub time_period: String,
}

#[derive(Debug, Clone)]
pub struct GetHashrateTool;

impl GetHashrateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_hashrate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns current and historical network-wide hashrate and difficulty figures over the specified trailing timePeriod.";

    /// Build the upstream request URL.
    pub fn build_url(base_url: &str, params: &GetHashrateParams) -> String {
        format!("{}/v1/mining/hashrate/{}", base_url, params.time_period)
    }

    /// Execute the tool against the upstream API.
    pub async fn execute(params: &GetHashrateParams, client: &MempoolClient) -> CallToolResult {
        let url = Self::build_url(client.base_url(), params);
        client.fetch_and_format(&url).await
    }

    /// Parse raw arguments and run the tool.
    pub async fn call(
        args: serde_json::Map<String, serde_json::Value>,
        client: &MempoolClient,
    ) -> CallToolResult {
        match serde_json::from_value::<GetHashrateParams>(serde_json::Value::Object(args)) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => invalid_params_result(Self::NAME, &e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetHashrateParams>(),
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
