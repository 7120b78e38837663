//! Mining-statistics tool definitions, one file per tool.

pub mod common;
pub mod hashrate;
pub mod pool;
pub mod pool_blocks;
pub mod pool_hashrate;
pub mod pool_hashrates;
pub mod pools;

pub use common::BlockHeight;
pub use hashrate::{GetHashrateParams, GetHashrateTool};
pub use pool::{GetMiningPoolParams, GetMiningPoolTool};
pub use pool_blocks::{GetMiningPoolBlocksParams, GetMiningPoolBlocksTool};
pub use pool_hashrate::{GetMiningPoolHashrateParams, GetMiningPoolHashrateTool};
pub use pool_hashrates::{GetMiningPoolHashratesParams, GetMiningPoolHashratesTool};
pub use pools::{GetMiningPoolsParams, GetMiningPoolsTool};
