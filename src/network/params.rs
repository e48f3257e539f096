//! Per-network parameter record
//!
//! A `NetworkDefinition` is the static description of one base network. The
//! registry turns each definition into a validated, immutable
//! `NetworkParams` and assigns its name from the registry key.

use primitive_types::U256;
use serde::Serialize;

use crate::address::{self, AddressError, PUBKEY_HASH_LEN};
use crate::config::{ConfigPath, ConfigPathError};
use crate::consensus::{
    compact_to_target, parse_coin_amount, target_to_difficulty, BlockHeader, Issuance,
    SaneTargetRange, TargetError,
};
use crate::crypto::{Hash256, PowHash};
use crate::network::registry::RegistryError;
use crate::rpc::IdentityCheck;
use std::path::PathBuf;

/// Static description of a base network, as written in the built-in tables
#[derive(Debug, Clone)]
pub struct NetworkDefinition {
    pub magic_prefix: [u8; 4],
    pub p2p_port: u16,
    pub rpc_port: u16,
    pub address_version: u8,
    /// Display-order hex of a block every node of this network knows
    pub genesis_hash: Option<&'static str>,
    pub help_marker: Option<&'static str>,
    pub testnet: bool,
    pub issuance: Issuance,
    pub pow_hash: PowHash,
    pub block_period_seconds: u64,
    pub symbol: &'static str,
    pub config_path: ConfigPath,
    /// Empty string means no explorer
    pub block_explorer_url_prefix: &'static str,
    pub address_explorer_url_prefix: &'static str,
    pub tx_explorer_url_prefix: &'static str,
    pub sane_target_range: SaneTargetRange,
    pub dumb_scrypt_diff: u64,
    /// Decimal coin amount, e.g. "0.001"
    pub dust_threshold: &'static str,
}

/// Optional display-only explorer links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExplorerUrls {
    pub block: Option<&'static str>,
    pub address: Option<&'static str>,
    pub tx: Option<&'static str>,
}

impl ExplorerUrls {
    fn from_prefixes(block: &'static str, address: &'static str, tx: &'static str) -> Self {
        let non_empty = |s: &'static str| if s.is_empty() { None } else { Some(s) };
        Self {
            block: non_empty(block),
            address: non_empty(address),
            tx: non_empty(tx),
        }
    }

    pub fn block_url(&self, hash: &Hash256) -> Option<String> {
        self.block.map(|prefix| format!("{}{}", prefix, hash))
    }

    pub fn address_url(&self, address: &str) -> Option<String> {
        self.address.map(|prefix| format!("{}{}", prefix, address))
    }

    pub fn tx_url(&self, txid: &Hash256) -> Option<String> {
        self.tx.map(|prefix| format!("{}{}", prefix, txid))
    }
}

/// Immutable consensus and connectivity parameters of one base network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkParams {
    /// Registry key
    pub name: &'static str,
    pub magic_prefix: [u8; 4],
    pub p2p_port: u16,
    pub rpc_port: u16,
    pub address_version: u8,
    pub identity_check: IdentityCheck,
    pub issuance_schedule: Issuance,
    pub pow_hash: PowHash,
    pub block_period_seconds: u64,
    pub symbol: &'static str,
    pub default_config_path: ConfigPath,
    pub explorer: ExplorerUrls,
    pub sane_target_range: SaneTargetRange,
    /// Multiplier applied to difficulty when the proof-of-work hash is scrypt
    pub dumb_scrypt_diff: u64,
    /// Base units
    pub dust_threshold: u64,
}

impl NetworkParams {
    /// Validate a definition and bind it to `name`
    pub fn from_definition(
        name: &'static str,
        def: NetworkDefinition,
    ) -> Result<Self, RegistryError> {
        let malformed = |reason: String| RegistryError::MalformedNetworkDefinition {
            network: name.to_string(),
            reason,
        };

        if def.p2p_port == 0 || def.rpc_port == 0 {
            return Err(malformed("ports must be non-zero".to_string()));
        }
        if !def.sane_target_range.is_ordered() {
            return Err(malformed("sane target min exceeds max".to_string()));
        }
        if !def.issuance.is_well_formed() {
            return Err(malformed("halving interval must be non-zero".to_string()));
        }
        if !def.pow_hash.is_valid() {
            return Err(malformed("invalid proof-of-work parameters".to_string()));
        }
        if def.dumb_scrypt_diff == 0 {
            return Err(malformed("dumb scrypt difficulty must be non-zero".to_string()));
        }
        if def.block_period_seconds == 0 {
            return Err(malformed("block period must be non-zero".to_string()));
        }

        let genesis_hash = def
            .genesis_hash
            .map(Hash256::from_hex)
            .transpose()
            .map_err(|e| malformed(format!("genesis hash: {}", e)))?;
        let identity_check = IdentityCheck {
            genesis_hash,
            help_marker: def.help_marker,
            testnet: def.testnet,
        };
        if !identity_check.is_configured() {
            return Err(malformed(
                "identity check needs a genesis hash or a help marker".to_string(),
            ));
        }

        let dust_threshold = parse_coin_amount(def.dust_threshold)
            .map_err(|e| malformed(format!("dust threshold: {}", e)))?;

        Ok(Self {
            name,
            magic_prefix: def.magic_prefix,
            p2p_port: def.p2p_port,
            rpc_port: def.rpc_port,
            address_version: def.address_version,
            identity_check,
            issuance_schedule: def.issuance,
            pow_hash: def.pow_hash,
            block_period_seconds: def.block_period_seconds,
            symbol: def.symbol,
            default_config_path: def.config_path,
            explorer: ExplorerUrls::from_prefixes(
                def.block_explorer_url_prefix,
                def.address_explorer_url_prefix,
                def.tx_explorer_url_prefix,
            ),
            sane_target_range: def.sane_target_range,
            dumb_scrypt_diff: def.dumb_scrypt_diff,
            dust_threshold,
        })
    }

    pub fn is_testnet(&self) -> bool {
        self.identity_check.testnet
    }

    /// New coins paid on top of the block at `height`
    pub fn subsidy(&self, height: u64) -> u64 {
        self.issuance_schedule.subsidy(height)
    }

    /// Proof-of-work value of a serialized header
    pub fn pow_hash(&self, header: &[u8]) -> U256 {
        self.pow_hash.hash(header)
    }

    pub fn header_pow(&self, header: &BlockHeader) -> U256 {
        self.pow_hash(&header.to_bytes())
    }

    /// Whether the header's proof-of-work meets the target in its own `bits`
    pub fn check_pow(&self, header: &BlockHeader) -> Result<bool, TargetError> {
        let target = compact_to_target(header.bits)?;
        Ok(self.header_pow(header) <= target)
    }

    pub fn is_sane_target(&self, target: U256) -> bool {
        self.sane_target_range.contains(target)
    }

    /// Reject a target claimed by an untrusted peer
    pub fn check_target(&self, target: U256) -> Result<(), TargetError> {
        self.sane_target_range.check(target)
    }

    /// Difficulty scaled for display when the pow hash is memory-hard
    pub fn dumb_difficulty(&self, target: U256) -> f64 {
        target_to_difficulty(target) * self.dumb_scrypt_diff as f64
    }

    pub fn is_dust(&self, amount: u64) -> bool {
        amount < self.dust_threshold
    }

    pub fn pubkey_hash_to_address(&self, pubkey_hash: &[u8; PUBKEY_HASH_LEN]) -> String {
        address::pubkey_hash_to_address(pubkey_hash, self.address_version)
    }

    pub fn address_to_pubkey_hash(
        &self,
        address: &str,
    ) -> Result<[u8; PUBKEY_HASH_LEN], AddressError> {
        address::address_to_pubkey_hash(address, self.address_version)
    }

    /// Conventional config file location of this network's node software
    pub fn config_path(&self) -> Result<PathBuf, ConfigPathError> {
        self.default_config_path.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COIN;
    use crate::consensus::target_bound;

    fn definition() -> NetworkDefinition {
        NetworkDefinition {
            magic_prefix: [0xf9, 0xbe, 0xb4, 0xd9],
            p2p_port: 8333,
            rpc_port: 8332,
            address_version: 0,
            genesis_hash: Some("000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"),
            help_marker: None,
            testnet: false,
            issuance: Issuance::Halving {
                base_reward: 50 * COIN,
                interval: 210_000,
            },
            pow_hash: PowHash::Sha256d,
            block_period_seconds: 600,
            symbol: "BTC",
            config_path: ConfigPath::standard("Bitcoin", "Library/Application Support/Bitcoin", ".bitcoin", "bitcoin.conf"),
            block_explorer_url_prefix: "https://blockchain.info/block/",
            address_explorer_url_prefix: "",
            tx_explorer_url_prefix: "https://blockchain.info/tx/",
            sane_target_range: SaneTargetRange::new(target_bound(32, 1000), target_bound(32, 1)),
            dumb_scrypt_diff: 1,
            dust_threshold: "0.001",
        }
    }

    fn assert_malformed(def: NetworkDefinition) {
        assert!(matches!(
            NetworkParams::from_definition("test", def),
            Err(RegistryError::MalformedNetworkDefinition { .. })
        ));
    }

    #[test]
    fn test_valid_definition() {
        let params = NetworkParams::from_definition("bitcoin", definition()).unwrap();
        assert_eq!(params.name, "bitcoin");
        assert_eq!(params.dust_threshold, 100_000);
        assert!(params.identity_check.genesis_hash.is_some());
        assert!(!params.is_testnet());
    }

    #[test]
    fn test_empty_explorer_prefix_is_none() {
        let params = NetworkParams::from_definition("bitcoin", definition()).unwrap();
        assert_eq!(params.explorer.address, None);
        assert_eq!(params.explorer.address_url("1abc"), None);
        let hash = Hash256::zero();
        assert_eq!(
            params.explorer.tx_url(&hash).unwrap(),
            format!("https://blockchain.info/tx/{}", "0".repeat(64))
        );
    }

    #[test]
    fn test_fractional_dust_rejected() {
        let mut def = definition();
        def.dust_threshold = "0.000000005";
        assert_malformed(def);
    }

    #[test]
    fn test_inverted_sane_range_rejected() {
        let mut def = definition();
        def.sane_target_range = SaneTargetRange::new(U256::MAX, U256::one());
        assert_malformed(def);
    }

    #[test]
    fn test_identity_check_required() {
        let mut def = definition();
        def.genesis_hash = None;
        def.help_marker = None;
        assert_malformed(def);
    }

    #[test]
    fn test_bad_genesis_hex_rejected() {
        let mut def = definition();
        def.genesis_hash = Some("not-hex");
        assert_malformed(def);
    }

    #[test]
    fn test_zero_halving_interval_rejected() {
        let mut def = definition();
        def.issuance = Issuance::Halving {
            base_reward: COIN,
            interval: 0,
        };
        assert_malformed(def);
    }

    #[test]
    fn test_dust() {
        let params = NetworkParams::from_definition("bitcoin", definition()).unwrap();
        assert!(params.is_dust(99_999));
        assert!(!params.is_dust(100_000));
    }

    #[test]
    fn test_dumb_difficulty_scales() {
        let mut def = definition();
        def.dumb_scrypt_diff = 1 << 16;
        let scaled = NetworkParams::from_definition("scrypt", def).unwrap();
        let plain = NetworkParams::from_definition("plain", definition()).unwrap();
        let target = U256::MAX >> 40;
        let ratio = scaled.dumb_difficulty(target) / plain.dumb_difficulty(target);
        assert!((ratio - 65536.0).abs() < 1e-6);
    }
}
