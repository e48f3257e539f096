//! Block subsidy schedules
//!
//! Every network carries one `Issuance` value. The halving curve counts from
//! `height + 1`: callers pass the height of the block being built on, so the
//! first halving lands at argument `interval - 1` (the block that pays the
//! halved reward sits at height `interval`).

use serde::{Deserialize, Serialize};

/// Subsidy curve of a network, evaluated per block height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Issuance {
    /// `base_reward >> ((height + 1) / interval)`
    Halving { base_reward: u64, interval: u64 },
    /// Same reward forever
    Constant(u64),
    /// `before` until `switch_height`, then `after`
    Step {
        before: u64,
        after: u64,
        switch_height: u64,
    },
}

impl Issuance {
    /// Subsidy for a block at `height`, in base units.
    ///
    /// This is a pure function, total over every `u64` height.
    pub fn subsidy(&self, height: u64) -> u64 {
        match *self {
            Issuance::Halving {
                base_reward,
                interval,
            } => {
                if interval == 0 {
                    return base_reward;
                }
                let halvings = (height as u128 + 1) / interval as u128;
                if halvings >= 64 {
                    0
                } else {
                    base_reward >> halvings
                }
            }
            Issuance::Constant(reward) => reward,
            Issuance::Step {
                before,
                after,
                switch_height,
            } => {
                if height < switch_height {
                    before
                } else {
                    after
                }
            }
        }
    }

    /// Reward paid at height 0
    pub fn initial_reward(&self) -> u64 {
        self.subsidy(0)
    }

    pub fn halving_interval(&self) -> Option<u64> {
        match *self {
            Issuance::Halving { interval, .. } => Some(interval),
            _ => None,
        }
    }

    /// Whether the curve can be published in a registry
    pub fn is_well_formed(&self) -> bool {
        !matches!(self, Issuance::Halving { interval: 0, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COIN;

    const BITCOIN: Issuance = Issuance::Halving {
        base_reward: 50 * COIN,
        interval: 210_000,
    };

    #[test]
    fn test_first_halving_is_off_by_one() {
        assert_eq!(BITCOIN.subsidy(0), 50 * COIN);
        assert_eq!(BITCOIN.subsidy(209_998), 50 * COIN);
        assert_eq!(BITCOIN.subsidy(209_999), 25 * COIN);
        assert_eq!(BITCOIN.subsidy(210_000), 25 * COIN);
        assert_eq!(BITCOIN.subsidy(419_999), 1_250_000_000);
    }

    #[test]
    fn test_subsidy_reaches_zero() {
        assert_eq!(BITCOIN.subsidy(210_000 * 64), 0);
        assert_eq!(BITCOIN.subsidy(u64::MAX), 0);
    }

    #[test]
    fn test_constant_and_step() {
        let constant = Issuance::Constant(10 * COIN);
        assert_eq!(constant.subsidy(0), constant.subsidy(u64::MAX));

        let step = Issuance::Step {
            before: 100 * COIN,
            after: 5 * COIN,
            switch_height: 1_000,
        };
        assert_eq!(step.subsidy(999), 100 * COIN);
        assert_eq!(step.subsidy(1_000), 5 * COIN);
        assert_eq!(step.initial_reward(), 100 * COIN);
        assert_eq!(step.halving_interval(), None);
    }

    #[test]
    fn test_zero_interval_not_well_formed() {
        let broken = Issuance::Halving {
            base_reward: COIN,
            interval: 0,
        };
        assert!(!broken.is_well_formed());
        assert!(BITCOIN.is_well_formed());
    }
}
