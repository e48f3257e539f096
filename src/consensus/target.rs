//! Sanity bounds on claimed proof-of-work targets
//!
//! A constant filter applied before any claimed target reaches consensus
//! code. It is independent of live retargeting and never computed from
//! chain state.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target {target:#x} outside sane range [{min:#x}, {max:#x}]")]
    OutOfRange { target: U256, min: U256, max: U256 },
    #[error("compact target {0:#010x} is negative")]
    NegativeCompact(u32),
    #[error("compact target {0:#010x} overflows 256 bits")]
    CompactOverflow(u32),
}

/// Inclusive `[min, max]` range of acceptable targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaneTargetRange {
    pub min: U256,
    pub max: U256,
}

impl SaneTargetRange {
    pub fn new(min: U256, max: U256) -> Self {
        Self { min, max }
    }

    /// `min <= max`
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, target: U256) -> bool {
        self.min <= target && target <= self.max
    }

    /// Reject a target claimed by an untrusted peer
    pub fn check(&self, target: U256) -> Result<(), TargetError> {
        if self.contains(target) {
            Ok(())
        } else {
            Err(TargetError::OutOfRange {
                target,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Pull a locally computed target back into the range
    pub fn clamp(&self, target: U256) -> U256 {
        target.max(self.min).min(self.max)
    }
}
