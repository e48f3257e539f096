//! Share-chain overlay parameter record
//!
//! CHAIN_LENGTH is how many shares back a node keeps; REAL_CHAIN_LENGTH is how
//! many it uses for payouts. `real_chain_length <= chain_length` always, and
//! REAL_CHAIN_LENGTH has to change in lockstep across every implementation
//! of the overlay protocol.

use primitive_types::U256;
use serde::Serialize;
use std::sync::Arc;

use crate::network::{NetworkParams, NetworkRegistry, RegistryError};

/// Half-open range `[min, max)` of protocol versions; `max: None` is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl VersionRange {
    pub const fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, version: u32) -> bool {
        version >= self.min && self.max.map_or(true, |max| version < max)
    }
}

/// Policy for peers announcing a protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VersionCheck {
    AcceptAll,
    Ranges(&'static [VersionRange]),
}

impl VersionCheck {
    pub fn accepts(&self, version: u32) -> bool {
        match self {
            VersionCheck::AcceptAll => true,
            VersionCheck::Ranges(ranges) => ranges.iter().any(|r| r.contains(version)),
        }
    }
}

/// Static description of an overlay network
#[derive(Debug, Clone)]
pub struct OverlayDefinition {
    /// Name of the base network in the `NetworkRegistry`
    pub parent: &'static str,
    pub share_period_seconds: u64,
    pub chain_length: u64,
    pub real_chain_length: u64,
    pub target_lookbehind: u64,
    pub spread: u64,
    pub identifier: [u8; 8],
    pub prefix: [u8; 8],
    pub p2p_port: u16,
    pub worker_port: u16,
    pub min_target: U256,
    pub max_target: U256,
    pub persist: bool,
    pub bootstrap_addrs: &'static [&'static str],
    pub announce_channel: &'static str,
    pub version_check: VersionCheck,
}

/// Immutable parameters of one share-chain overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayParams {
    pub name: &'static str,
    /// Shared with the base registry, not owned
    pub parent: Arc<NetworkParams>,
    pub share_period_seconds: u64,
    pub chain_length: u64,
    pub real_chain_length: u64,
    pub target_lookbehind: u64,
    /// Parent blocks over which payouts are spread
    pub spread: u64,
    pub identifier: [u8; 8],
    pub prefix: [u8; 8],
    pub p2p_port: u16,
    pub worker_port: u16,
    pub min_target: U256,
    pub max_target: U256,
    /// Hint to the persistence layer
    pub persist: bool,
    pub bootstrap_addrs: &'static [&'static str],
    pub announce_channel: &'static str,
    pub version_check: VersionCheck,
}

impl OverlayParams {
    /// Resolve the parent and validate; an unknown parent is a definition defect
    pub fn from_definition(
        name: &'static str,
        def: OverlayDefinition,
        networks: &NetworkRegistry,
    ) -> Result<Self, RegistryError> {
        let malformed = |reason: String| RegistryError::MalformedNetworkDefinition {
            network: name.to_string(),
            reason,
        };

        let parent = networks
            .lookup(def.parent)
            .map_err(|_| malformed(format!("unknown parent network {}", def.parent)))?
            .clone();

        if def.real_chain_length > def.chain_length {
            return Err(malformed(format!(
                "real chain length {} exceeds chain length {}",
                def.real_chain_length, def.chain_length
            )));
        }
        if def.min_target > def.max_target {
            return Err(malformed("min target exceeds max target".to_string()));
        }
        if def.share_period_seconds == 0 {
            return Err(malformed("share period must be non-zero".to_string()));
        }
        if def.p2p_port == 0 || def.worker_port == 0 {
            return Err(malformed("ports must be non-zero".to_string()));
        }
        if def.bootstrap_addrs.is_empty() {
            return Err(malformed("no bootstrap addresses".to_string()));
        }

        Ok(Self {
            name,
            parent,
            share_period_seconds: def.share_period_seconds,
            chain_length: def.chain_length,
            real_chain_length: def.real_chain_length,
            target_lookbehind: def.target_lookbehind,
            spread: def.spread,
            identifier: def.identifier,
            prefix: def.prefix,
            p2p_port: def.p2p_port,
            worker_port: def.worker_port,
            min_target: def.min_target,
            max_target: def.max_target,
            persist: def.persist,
            bootstrap_addrs: def.bootstrap_addrs,
            announce_channel: def.announce_channel,
            version_check: def.version_check,
        })
    }

    pub fn accepts_version(&self, version: u32) -> bool {
        self.version_check.accepts(version)
    }

    /// Whether a share target lies within `[min_target, max_target]`
    pub fn is_valid_share_target(&self, target: U256) -> bool {
        self.min_target <= target && target <= self.max_target
    }

    /// Seconds of history kept by the share chain
    pub fn chain_duration_seconds(&self) -> u64 {
        self.chain_length.saturating_mul(self.share_period_seconds)
    }
}
