//! Both registries, built together at startup
//!
//! `Registries::builtin()` is the one initialization point. The result is
//! passed to consumers explicitly; nothing here is global.

use tracing::info;

use crate::network::{NetworkDefinition, NetworkRegistry, RegistryError};
use crate::overlay::{OverlayDefinition, OverlayRegistry};

#[derive(Debug, Clone)]
pub struct Registries {
    pub networks: NetworkRegistry,
    pub overlays: OverlayRegistry,
}

impl Registries {
    pub fn from_definitions<N, O>(networks: N, overlays: O) -> Result<Self, RegistryError>
    where
        N: IntoIterator<Item = (&'static str, NetworkDefinition)>,
        O: IntoIterator<Item = (&'static str, OverlayDefinition)>,
    {
        let networks = NetworkRegistry::from_definitions(networks)?;
        let overlays = OverlayRegistry::from_definitions(&networks, overlays)?;
        info!(
            networks = networks.len(),
            overlays = overlays.len(),
            "network registries built"
        );
        Ok(Self { networks, overlays })
    }

    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_definitions(
            crate::network::builtin_networks(),
            crate::overlay::builtin_overlays(),
        )
    }
}
