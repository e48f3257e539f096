//! Consensus module - Subsidy curves, target arithmetic, sanity bounds, headers

mod amount;
mod block;
mod difficulty;
mod rewards;
mod target;

pub use amount::*;
pub use block::*;
pub use difficulty::*;
pub use rewards::*;
pub use target::*;
