//! Overlay network registry

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::network::{NetworkRegistry, RegistryError};

use super::definitions;
use super::params::{OverlayDefinition, OverlayParams};

/// name -> `OverlayParams`, each bound to a parent in a `NetworkRegistry`
#[derive(Debug, Clone)]
pub struct OverlayRegistry {
    overlays: BTreeMap<&'static str, Arc<OverlayParams>>,
}

impl OverlayRegistry {
    pub fn from_definitions<I>(networks: &NetworkRegistry, definitions: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'static str, OverlayDefinition)>,
    {
        let mut overlays = BTreeMap::new();
        for (name, def) in definitions {
            let params = OverlayParams::from_definition(name, def, networks)?;
            if overlays.insert(name, Arc::new(params)).is_some() {
                return Err(RegistryError::MalformedNetworkDefinition {
                    network: name.to_string(),
                    reason: "defined twice".to_string(),
                });
            }
        }
        Ok(Self { overlays })
    }

    /// The overlays shipped with this crate, bound to `networks`
    pub fn builtin(networks: &NetworkRegistry) -> Result<Self, RegistryError> {
        Self::from_definitions(networks, definitions::builtin_overlays())
    }

    pub fn lookup(&self, name: &str) -> Result<&Arc<OverlayParams>, RegistryError> {
        self.overlays
            .get(name)
            .ok_or_else(|| RegistryError::UnknownNetwork(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.overlays.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<OverlayParams>> + '_ {
        self.overlays.values()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
