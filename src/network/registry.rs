//! Base network registry
//!
//! Built once from definitions, read-only afterwards. There is no mutation
//! API; records are shared as `Arc<NetworkParams>` so overlay records can
//! point at their parent without owning it.

use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use super::definitions;
use super::params::{NetworkDefinition, NetworkParams};

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Lookup of a name that was never registered
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    /// Construction-time defect; fatal at startup
    #[error("malformed definition for network {network}: {reason}")]
    MalformedNetworkDefinition { network: String, reason: String },
}

/// Networks sharing the same peer-protocol magic prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixCollision {
    pub prefix: [u8; 4],
    pub networks: Vec<&'static str>,
}

/// name -> `NetworkParams`
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: BTreeMap<&'static str, Arc<NetworkParams>>,
}

impl NetworkRegistry {
    /// Validate and publish every definition; any defect aborts the whole registry
    pub fn from_definitions<I>(definitions: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'static str, NetworkDefinition)>,
    {
        let mut networks = BTreeMap::new();
        for (name, def) in definitions {
            let params = NetworkParams::from_definition(name, def)?;
            if networks.insert(name, Arc::new(params)).is_some() {
                return Err(RegistryError::MalformedNetworkDefinition {
                    network: name.to_string(),
                    reason: "defined twice".to_string(),
                });
            }
        }

        let registry = Self { networks };
        for collision in registry.prefix_collisions() {
            warn!(
                prefix = %hex::encode(collision.prefix),
                networks = ?collision.networks,
                "networks share a magic prefix; peer framing cannot tell them apart"
            );
        }
        Ok(registry)
    }

    /// The networks shipped with this crate
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_definitions(definitions::builtin_networks())
    }

    pub fn lookup(&self, name: &str) -> Result<&Arc<NetworkParams>, RegistryError> {
        self.networks
            .get(name)
            .ok_or_else(|| RegistryError::UnknownNetwork(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.networks.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.networks.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<NetworkParams>> + '_ {
        self.networks.values()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Every network whose messages start with `prefix`. More than one entry
    /// means the prefix alone is ambiguous; no tie-break is applied.
    pub fn by_magic_prefix(&self, prefix: [u8; 4]) -> Vec<&Arc<NetworkParams>> {
        self.iter().filter(|n| n.magic_prefix == prefix).collect()
    }

    pub fn prefix_collisions(&self) -> Vec<PrefixCollision> {
        let mut by_prefix: BTreeMap<[u8; 4], Vec<&'static str>> = BTreeMap::new();
        for params in self.iter() {
            by_prefix.entry(params.magic_prefix).or_default().push(params.name);
        }
        by_prefix
            .into_iter()
            .filter(|(_, networks)| networks.len() > 1)
            .map(|(prefix, networks)| PrefixCollision { prefix, networks })
            .collect()
    }
}
