//! Pay-to-pubkey-hash address encoding
//!
//! Address format: Base58Check(version byte + hash160(pubkey)), where the
//! version byte is the network's `address_version`.

use thiserror::Error;

/// Length of a hash160 payload
pub const PUBKEY_HASH_LEN: usize = 20;

/// Address errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid base58check encoding: {0}")]
    Encoding(String),
    #[error("address version {found} does not match network version {expected}")]
    WrongVersion { found: u8, expected: u8 },
    #[error("invalid address payload length {0}")]
    InvalidLength(usize),
}

/// Encode a pubkey hash as an address for the given version byte
pub fn pubkey_hash_to_address(pubkey_hash: &[u8; PUBKEY_HASH_LEN], version: u8) -> String {
    bs58::encode(pubkey_hash)
        .with_check_version(version)
        .into_string()
}

/// Decode an address and check it belongs to the given version byte
pub fn address_to_pubkey_hash(
    address: &str,
    version: u8,
) -> Result<[u8; PUBKEY_HASH_LEN], AddressError> {
    let decoded = bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|e| AddressError::Encoding(e.to_string()))?;

    let (found, payload) = match decoded.split_first() {
        Some((found, payload)) => (*found, payload),
        None => return Err(AddressError::InvalidLength(0)),
    };
    if found != version {
        return Err(AddressError::WrongVersion {
            found,
            expected: version,
        });
    }
    if payload.len() != PUBKEY_HASH_LEN {
        return Err(AddressError::InvalidLength(payload.len()));
    }

    let mut hash = [0u8; PUBKEY_HASH_LEN];
    hash.copy_from_slice(payload);
    Ok(hash)
}
