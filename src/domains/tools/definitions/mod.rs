//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod mining;

pub use mining::{
    BlockHeight, GetHashrateParams, GetHashrateTool, GetMiningPoolBlocksParams,
    GetMiningPoolBlocksTool, GetMiningPoolHashrateParams, GetMiningPoolHashrateTool,
    GetMiningPoolHashratesParams, GetMiningPoolHashratesTool, GetMiningPoolParams,
    GetMiningPoolTool, GetMiningPoolsParams, GetMiningPoolsTool,
};
