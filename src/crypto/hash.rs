//! SHA-256 hashing and the 32-byte hash value type
//!
//! Bitcoin-family nodes store hashes in internal (little-endian) byte order
//! and print them reversed. `Hash256` keeps the internal order and only
//! reverses at the hex boundary.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash in internal byte order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The all-zero hash (previous-block field of a genesis header)
    pub const fn zero() -> Self {
        Hash256([0u8; 32])
    }

    /// Parse a hash as printed by node RPC (display order, reversed)
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        arr.reverse();
        Ok(Hash256(arr))
    }

    /// Render in display order, as node RPC expects it
    pub fn to_hex(&self) -> String {
        let mut display = self.0;
        display.reverse();
        hex::encode(display)
    }

    /// Interpret as a 256-bit little-endian integer
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash256 {
    fn default() -> Self {
        Self::zero()
    }
}

/// Single SHA-256
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice, the block hash of bitcoin-derived chains
pub fn sha256d(data: &[u8]) -> Hash256 {
    Hash256(sha256(&sha256(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256d_known_vector() {
        // sha256d("hello")
        let hash = sha256d(b"hello");
        assert_eq!(
            hex::encode(hash.0),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_hex_is_display_order() {
        let hex_str = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
        let hash = Hash256::from_hex(hex_str).unwrap();
        // Internal order ends with the leading zero bytes
        assert_eq!(hash.0[31], 0x00);
        assert_eq!(hash.0[0], 0x6f);
        assert_eq!(hash.to_hex(), hex_str);
        assert_eq!(hash.to_string(), hex_str);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(Hash256::from_hex("abcd").is_err());
        assert!(Hash256::from_hex("zz").is_err());
    }

    #[test]
    fn test_to_u256_little_endian() {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        assert_eq!(Hash256(bytes).to_u256(), U256::one());
        assert_eq!(Hash256::zero().to_u256(), U256::zero());
    }
}
