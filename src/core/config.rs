//! Configuration management for the MCP server.
//!
//! Two settings matter at runtime: the port the non-stdio transports listen
//! on, and the base URL of the upstream mempool API. Each is resolved with
//! the precedence CLI argument > environment variable > built-in default,
//! and the winning source is recorded for diagnostics.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default listening port when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3333;

/// Default upstream API when neither `--mempool-url` nor `MEMPOOL_URL` is given.
pub const DEFAULT_MEMPOOL_URL: &str = "https://mempool.space/api";

/// Command-line arguments accepted by the server binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mempool_mcp_server", version, about = "Bitcoin mempool mining-statistics MCP server")]
pub struct CliArgs {
    /// Port to run the server on
    #[arg(long)]
    pub port: Option<u16>,

    /// Base URL for the Mempool API
    #[arg(long = "mempool-url")]
    pub mempool_url: Option<String>,
}

/// Where a resolved configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cli => "cli",
            Self::Env => "env",
            Self::Default => "default",
        };
        f.write_str(s)
    }
}

/// Record of which source supplied each resolved value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSources {
    pub port: ConfigSource,
    pub mempool_base_url: ConfigSource,
}

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Port for the non-stdio transports to listen on.
    pub port: u16,

    /// Base URL of the upstream mempool API. Not validated as a URL; a
    /// malformed value surfaces later as an upstream fetch error.
    pub mempool_base_url: String,

    /// Which source supplied each value above.
    pub sources: ConfigSources,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Bitcoin Mempool MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            port: DEFAULT_PORT,
            mempool_base_url: DEFAULT_MEMPOOL_URL.to_string(),
            sources: ConfigSources {
                port: ConfigSource::Default,
                mempool_base_url: ConfigSource::Default,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Resolve the effective configuration from CLI arguments, environment
    /// variables, and defaults, in that order of precedence.
    ///
    /// A `PORT` environment value that does not parse as an integer is a
    /// configuration error; it is never silently replaced by the default.
    pub fn resolve(cli: &CliArgs) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(port) = cli.port {
            config.port = port;
            config.sources.port = ConfigSource::Cli;
        } else if let Ok(raw) = std::env::var("PORT") {
            config.port = raw
                .trim()
                .parse()
                .map_err(|e| Error::config(format!("invalid PORT value {raw:?}: {e}")))?;
            config.sources.port = ConfigSource::Env;
        }

        if let Some(url) = &cli.mempool_url {
            config.mempool_base_url = url.clone();
            config.sources.mempool_base_url = ConfigSource::Cli;
        } else if let Ok(url) = std::env::var("MEMPOOL_URL") {
            config.mempool_base_url = url;
            config.sources.mempool_base_url = ConfigSource::Env;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env(config.port);

        Ok(config)
    }

    /// Log the resolved values and their sources.
    ///
    /// Skipped in stdio mode: the summary is purely informational and a
    /// silent startup keeps the session log free of noise when the server
    /// runs as a subprocess of an MCP client.
    pub fn log_summary(&self) {
        if self.transport.is_stdio() {
            return;
        }

        info!("Configuration:");
        info!("- PORT: {} (source: {})", self.port, self.sources.port);
        info!(
            "- MEMPOOL_URL: {} (source: {})",
            self.mempool_base_url, self.sources.mempool_base_url
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("MEMPOOL_URL");
        }
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let config = Config::resolve(&CliArgs::default()).unwrap();
        assert_eq!(config.port, 3333);
        assert_eq!(config.sources.port, ConfigSource::Default);
        assert_eq!(config.mempool_base_url, "https://mempool.space/api");
        assert_eq!(config.sources.mempool_base_url, ConfigSource::Default);
    }

    #[test]
    fn test_cli_beats_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("PORT", "9090");
        }
        let cli = CliArgs {
            port: Some(8080),
            mempool_url: None,
        };
        let config = Config::resolve(&cli).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.sources.port, ConfigSource::Cli);
        clear_env();
    }

    #[test]
    fn test_env_beats_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("PORT", "9090");
            std::env::set_var("MEMPOOL_URL", "http://localhost:8999/api");
        }
        let config = Config::resolve(&CliArgs::default()).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.sources.port, ConfigSource::Env);
        assert_eq!(config.mempool_base_url, "http://localhost:8999/api");
        assert_eq!(config.sources.mempool_base_url, ConfigSource::Env);
        clear_env();
    }

    #[test]
    fn test_malformed_port_fails_fast() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("PORT", "not-a-number");
        }
        let result = Config::resolve(&CliArgs::default());
        assert!(matches!(result, Err(Error::Config(_))));
        clear_env();
    }

    #[test]
    fn test_cli_mempool_url() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let cli = CliArgs {
            port: None,
            mempool_url: Some("http://127.0.0.1:4000/api".to_string()),
        };
        let config = Config::resolve(&cli).unwrap();
        assert_eq!(config.mempool_base_url, "http://127.0.0.1:4000/api");
        assert_eq!(config.sources.mempool_base_url, ConfigSource::Cli);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::Cli.to_string(), "cli");
        assert_eq!(ConfigSource::Env.to_string(), "env");
        assert_eq!(ConfigSource::Default.to_string(), "default");
    }
}
