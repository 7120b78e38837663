//! Upstream mempool API client.
//!
//! A thin wrapper over a shared `reqwest::Client` that turns a fully built
//! URL into a tool result: one GET, the body parsed as JSON and re-rendered
//! as YAML text. Every failure mode is converted to an error tool result at
//! this boundary; nothing propagates past it.

use rmcp::model::{CallToolResult, Content};
use tracing::{debug, error};

use super::error::ToolError;

/// Client for the upstream mempool-tracking HTTP API.
#[derive(Debug, Clone)]
pub struct MempoolClient {
    http: reqwest::Client,
    base_url: String,
}

impl MempoolClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The configured upstream base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `url` and render the JSON response body as YAML text.
    ///
    /// Returns exactly one text content block either way: the YAML rendering
    /// on success, or a message prefixed `"Error fetching data: "` on any
    /// failure (network error, non-JSON body).
    pub async fn fetch_and_format(&self, url: &str) -> CallToolResult {
        match self.fetch_yaml(url).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                error!("Error fetching {}: {}", url, e);
                CallToolResult::error(vec![Content::text(format!("Error fetching data: {}", e))])
            }
        }
    }

    async fn fetch_yaml(&self, url: &str) -> Result<String, ToolError> {
        debug!("GET {}", url);

        // The HTTP status is not inspected: any response with a JSON body
        // is relayed as-is, matching the upstream API's error envelopes.
        let data: serde_json::Value = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ToolError::upstream(e.to_string()))?
            .json()
            .await
            .map_err(|e| ToolError::upstream(e.to_string()))?;

        serde_yaml::to_string(&data).map_err(|e| ToolError::upstream(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_json_body_rendered_as_yaml() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/mining/hashrate/1m"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hashrate": 123
            })))
            .mount(&server)
            .await;

        let client = MempoolClient::new(server.uri());
        let url = format!("{}/v1/mining/hashrate/1m", client.base_url());
        let result = client.fetch_and_format(&url).await;

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
        assert_eq!(text_of(&result), "hashrate: 123\n");
    }

    #[tokio::test]
    async fn test_non_json_body_is_an_error_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = MempoolClient::new(server.uri());
        let result = client.fetch_and_format(&server.uri()).await;

        assert!(result.is_error.unwrap_or(false));
        assert!(text_of(&result).starts_with("Error fetching data: "));
    }

    #[tokio::test]
    async fn test_status_code_is_not_inspected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({ "error": "not found" })),
            )
            .mount(&server)
            .await;

        let client = MempoolClient::new(server.uri());
        let result = client.fetch_and_format(&server.uri()).await;

        // A JSON error envelope from upstream is still a "successful" fetch.
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "error: not found\n");
    }

    #[tokio::test]
    async fn test_connection_refused_does_not_panic() {
        // Bind and immediately drop a server to get an unused local port.
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = MempoolClient::new(uri.clone());
        let result = client.fetch_and_format(&uri).await;

        assert!(result.is_error.unwrap_or(false));
        assert!(text_of(&result).starts_with("Error fetching data: "));
    }
}
