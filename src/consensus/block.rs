//! Block header as hashed by bitcoin-family proof-of-work
//!
//! Only the 80-byte header is modelled; transactions never pass through this
//! crate.

use serde::{Deserialize, Serialize};
use crate::crypto::{sha256d, Hash256};

/// Serialized header length
pub const HEADER_SIZE: usize = 80;

/// Block header containing all hashed fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block version
    pub version: u32,
    /// Hash of the previous block
    pub prev_hash: Hash256,
    /// Merkle root of all transactions
    pub merkle_root: Hash256,
    /// Block timestamp (seconds since Unix epoch)
    pub timestamp: u32,
    /// Target in compact representation
    pub bits: u32,
    /// Nonce used for PoW
    pub nonce: u32,
}

impl BlockHeader {
    pub fn new(
        version: u32,
        prev_hash: Hash256,
        merkle_root: Hash256,
        timestamp: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
        }
    }

    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_hash.0);
        bytes[36..68].copy_from_slice(&self.merkle_root.0);
        bytes[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Block identifier (always sha256d, whatever the proof-of-work hash is)
    pub fn hash(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }

    pub fn is_genesis(&self) -> bool {
        self.prev_hash == Hash256::zero()
    }
}
