//! p2pool network registry
//!
//! Immutable per-network parameters for the base coin networks p2pool mines
//! on, the share-chain overlay parameters layered on each, and the RPC probe
//! that confirms a node really runs the network its operator claims.

pub mod address;
pub mod config;
pub mod consensus;
pub mod crypto;
pub mod network;
pub mod overlay;
pub mod registry;
pub mod rpc;

pub use network::{NetworkParams, NetworkRegistry, RegistryError};
pub use overlay::{OverlayParams, OverlayRegistry};
pub use registry::Registries;
pub use rpc::{verify, NodeRpc};

/// Unit constants
pub mod constants {
    /// Base units per coin
    pub const COIN: u64 = 100_000_000;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;
}
