//! Node RPC module
//!
//! The consumed RPC surface, JSON-RPC envelopes for transports, and the
//! identity verification procedure built on them.

mod client;
mod identity;
mod methods;

pub use client::*;
pub use identity::*;
pub use methods::*;
