//! Built-in base network table

use primitive_types::U256;

use crate::config::ConfigPath;
use crate::constants::COIN;
use crate::consensus::{target_bound, Issuance, SaneTargetRange};
use crate::crypto::{PowHash, ScryptParams};

use super::params::NetworkDefinition;

fn bitcoin() -> NetworkDefinition {
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
        config_path: ConfigPath::standard(
            "Bitcoin",
            "Library/Application Support/Bitcoin",
            ".bitcoin",
            "bitcoin.conf",
        ),
        block_explorer_url_prefix: "https://blockchain.info/block/",
        address_explorer_url_prefix: "https://blockchain.info/address/",
        tx_explorer_url_prefix: "https://blockchain.info/tx/",
        sane_target_range: SaneTargetRange::new(target_bound(32, 1000), target_bound(32, 1)),
        dumb_scrypt_diff: 1,
        dust_threshold: "0.001",
    }
}

fn bitcoin_testnet() -> NetworkDefinition {
    NetworkDefinition {
        magic_prefix: [0x0b, 0x11, 0x09, 0x07],
        p2p_port: 18333,
        rpc_port: 18332,
        address_version: 111,
        genesis_hash: None,
        help_marker: Some("bitcoinaddress"),
        testnet: true,
        issuance: Issuance::Halving {
            base_reward: 50 * COIN,
            interval: 210_000,
        },
        pow_hash: PowHash::Sha256d,
        block_period_seconds: 600,
        symbol: "tBTC",
        config_path: ConfigPath::standard(
            "Bitcoin",
            "Library/Application Support/Bitcoin",
            ".bitcoin",
            "bitcoin.conf",
        ),
        block_explorer_url_prefix: "http://blockexplorer.com/testnet/block/",
        address_explorer_url_prefix: "http://blockexplorer.com/testnet/address/",
        tx_explorer_url_prefix: "http://blockexplorer.com/testnet/tx/",
        sane_target_range: SaneTargetRange::new(target_bound(32, 1000), target_bound(32, 1)),
        dumb_scrypt_diff: 1,
        dust_threshold: "1",
    }
}

fn litecoin() -> NetworkDefinition {
    NetworkDefinition {
        magic_prefix: [0xfb, 0xc0, 0xb6, 0xdb],
        p2p_port: 9333,
        rpc_port: 9332,
        address_version: 48,
        genesis_hash: Some("12a765e31ffd4059bada1e25190f6e98c99d9714d334efa41a195a7e7e04bfe2"),
        help_marker: Some("litecoinaddress"),
        testnet: false,
        issuance: Issuance::Halving {
            base_reward: 50 * COIN,
            interval: 840_000,
        },
        pow_hash: PowHash::Scrypt(ScryptParams::LITECOIN),
        block_period_seconds: 150,
        symbol: "LTC",
        config_path: ConfigPath::standard(
            "Litecoin",
            "Library/Application Support/Litecoin",
            ".litecoin",
            "litecoin.conf",
        ),
        block_explorer_url_prefix: "http://explorer.litecoin.net/block/",
        address_explorer_url_prefix: "http://explorer.litecoin.net/address/",
        tx_explorer_url_prefix: "http://explorer.litecoin.net/tx/",
        sane_target_range: SaneTargetRange::new(
            target_bound(0, 1_000_000_000),
            target_bound(0, 1000),
        ),
        dumb_scrypt_diff: 1 << 16,
        dust_threshold: "0.03",
    }
}

fn litecoin_testnet() -> NetworkDefinition {
    NetworkDefinition {
        magic_prefix: [0xfc, 0xc1, 0xb7, 0xdc],
        p2p_port: 19333,
        rpc_port: 19332,
        address_version: 111,
        genesis_hash: None,
        help_marker: Some("getreceivedbyaddress"),
        testnet: true,
        issuance: Issuance::Halving {
            base_reward: 50 * COIN,
            interval: 840_000,
        },
        pow_hash: PowHash::Scrypt(ScryptParams::LITECOIN),
        block_period_seconds: 150,
        symbol: "tLTC",
        config_path: ConfigPath::standard(
            "Litecoin",
            "Library/Application Support/Litecoin",
            ".litecoin",
            "litecoin.conf",
        ),
        block_explorer_url_prefix: "http://nonexistent-litecoin-testnet-explorer/block/",
        address_explorer_url_prefix: "http://nonexistent-litecoin-testnet-explorer/address/",
        tx_explorer_url_prefix: "http://nonexistent-litecoin-testnet-explorer/tx/",
        sane_target_range: SaneTargetRange::new(target_bound(0, 1_000_000_000), U256::MAX),
        dumb_scrypt_diff: 1 << 16,
        dust_threshold: "1",
    }
}

fn apollocoin() -> NetworkDefinition {
    NetworkDefinition {
        magic_prefix: [0xfc, 0xc1, 0xb7, 0xdc],
        p2p_port: 55888,
        rpc_port: 31914,
        address_version: 50,
        genesis_hash: None,
        help_marker: Some("apollocoinaddress"),
        testnet: false,
        issuance: Issuance::Halving {
            base_reward: 100 * COIN,
            interval: 100_000,
        },
        pow_hash: PowHash::Scrypt(ScryptParams::LITECOIN),
        block_period_seconds: 30,
        symbol: "APOLLO",
        config_path: ConfigPath::standard(
            "Apollocoin",
            "Library/Application Support/Apollocoin",
            ".apollocoin",
            "apollocoin.conf",
        ),
        block_explorer_url_prefix: "",
        address_explorer_url_prefix: "",
        tx_explorer_url_prefix: "",
        sane_target_range: SaneTargetRange::new(target_bound(32, 1000), target_bound(20, 1)),
        dumb_scrypt_diff: 1 << 16,
        dust_threshold: "0.001",
    }
}

/// Every built-in base network, keyed by registry name
pub fn builtin_networks() -> Vec<(&'static str, NetworkDefinition)> {
    vec![
        ("bitcoin", bitcoin()),
        ("bitcoin_testnet", bitcoin_testnet()),
        ("litecoin", litecoin()),
        ("litecoin_testnet", litecoin_testnet()),
        ("apollocoin", apollocoin()),
    ]
}
