//! Common utilities shared across the mining tools.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::warn;

use crate::domains::tools::ToolError;

/// Default trailing window for the pool ranking tool.
pub fn default_ranking_period() -> String {
    "1w".to_string()
}

/// Default trailing window for the hashrate tools.
pub fn default_hashrate_period() -> String {
    "1m".to_string()
}

/// A block height, accepted as either a JSON number or a string.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum BlockHeight {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Error result for arguments that failed schema validation.
///
/// Produced before any upstream request is made.
pub fn invalid_params_result(tool: &str, err: &serde_json::Error) -> CallToolResult {
    error_result(&ToolError::invalid_arguments(tool, err.to_string()).to_string())
}
