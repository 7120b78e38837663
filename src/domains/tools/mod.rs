//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool is a stateless request/response round trip against the
//! upstream mempool API.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `upstream.rs` - Shared client for the upstream mempool API
//! - `router.rs` - Dynamic ToolRouter builder for the transport layer
//! - `registry.rs` - Central tool registry and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/mining/` (e.g., `my_tool.rs`)
//! 2. Define params, `build_url()`, `execute()`, and `create_route()`
//! 3. Export in `definitions/mining/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;
pub mod upstream;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use upstream::MempoolClient;
