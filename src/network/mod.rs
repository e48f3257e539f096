//! Base network module - Parameter records and the registry that publishes them

mod definitions;
mod params;
mod registry;

pub use definitions::builtin_networks;
pub use params::*;
pub use registry::*;
