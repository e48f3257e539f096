//! Proof-of-work hash strategies
//!
//! A network picks one strategy in its parameter record. Callers always go
//! through `NetworkParams::pow_hash` and never branch on the network name.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use super::hash::sha256d;

/// scrypt cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScryptParams {
    /// log2 of the CPU/memory cost N
    pub log_n: u8,
    /// Block size
    pub r: u32,
    /// Parallelism
    pub p: u32,
}

impl ScryptParams {
    /// N=1024, r=1, p=1 as used by litecoin and its forks
    pub const LITECOIN: ScryptParams = ScryptParams { log_n: 10, r: 1, p: 1 };

    fn to_params(self) -> Result<scrypt::Params, scrypt::errors::InvalidParams> {
        scrypt::Params::new(self.log_n, self.r, self.p, 32)
    }

    /// Whether scrypt accepts this parameter set
    pub fn is_valid(&self) -> bool {
        self.to_params().is_ok()
    }
}

/// Hash function used to test a serialized block header against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowHash {
    /// SHA-256 applied twice
    Sha256d,
    /// scrypt with the header as both password and salt
    Scrypt(ScryptParams),
}

impl PowHash {
    /// Hash a serialized header and read the digest as a little-endian integer.
    ///
    /// Total over any input length. An invalid scrypt parameter set yields
    /// `U256::MAX`, which no sane target accepts; the registry rejects such
    /// parameter sets before they are published.
    pub fn hash(&self, header: &[u8]) -> U256 {
        match self {
            PowHash::Sha256d => sha256d(header).to_u256(),
            PowHash::Scrypt(cost) => {
                let params = match cost.to_params() {
                    Ok(params) => params,
                    Err(_) => return U256::MAX,
                };
                let mut out = [0u8; 32];
                if scrypt::scrypt(header, header, &params, &mut out).is_err() {
                    return U256::MAX;
                }
                U256::from_little_endian(&out)
            }
        }
    }

    /// Whether this strategy can be evaluated at all
    pub fn is_valid(&self) -> bool {
        match self {
            PowHash::Sha256d => true,
            PowHash::Scrypt(cost) => cost.is_valid(),
        }
    }

    pub fn family_name(&self) -> &'static str {
        match self {
            PowHash::Sha256d => "sha256d",
            PowHash::Scrypt(_) => "scrypt",
        }
    }
}
