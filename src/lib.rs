//! Bitcoin Mempool MCP Server
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! read-only Bitcoin mining statistics (pool rankings, per-pool hashrate and
//! block history, network hashrate and difficulty) from a mempool-tracking
//! HTTP API as MCP tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the six mining-statistics tools and the upstream client behind them
//!
//! # Example
//!
//! ```rust,no_run
//! use mempool_mcp_server::core::{CliArgs, Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::resolve(&CliArgs::default())?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{CliArgs, Config, Error, McpServer, Result};
