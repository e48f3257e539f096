//! Overlay module - Share-chain parameters layered on a base network

mod definitions;
mod params;
mod registry;

pub use definitions::builtin_overlays;
pub use params::*;
pub use registry::*;
