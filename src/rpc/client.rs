//! The RPC surface consumed from a coin daemon
//!
//! The transport lives outside this crate. It only has to answer three
//! read-only calls, and it has to report "no such block" as
//! `BlockLookup::NotFound` instead of an error.

use crate::crypto::Hash256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RPC errors surfaced by a transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    /// Connection, framing or HTTP level failure
    #[error("RPC transport failure: {0}")]
    Transport(String),
    /// The node answered with an application error other than "block not found"
    #[error("RPC error {code}: {message}")]
    Remote { code: i64, message: String },
    /// The node answered with something that does not decode
    #[error("RPC response decode failure: {0}")]
    Decode(String),
}

/// Outcome of a block lookup by hash
#[derive(Debug, Clone, PartialEq)]
pub enum BlockLookup {
    Found(serde_json::Value),
    NotFound,
}

impl BlockLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, BlockLookup::Found(_))
    }
}

/// Subset of `getinfo` this crate reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub testnet: bool,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub blocks: Option<u64>,
}

impl NodeInfo {
    pub fn new(testnet: bool) -> Self {
        Self {
            testnet,
            version: None,
            blocks: None,
        }
    }
}

/// Read-only calls against a coin daemon.
///
/// Implementations must be side-effect free: the verifier may issue the
/// calls concurrently and may drop any of them mid-flight.
#[allow(async_fn_in_trait)]
pub trait NodeRpc {
    /// `getblock <hash>`
    async fn get_block(&self, hash: &Hash256) -> Result<BlockLookup, RpcError>;

    /// `help`
    async fn get_help_text(&self) -> Result<String, RpcError>;

    /// `getinfo`
    async fn get_node_info(&self) -> Result<NodeInfo, RpcError>;
}
