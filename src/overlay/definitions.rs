//! Built-in share-chain overlay table

use crate::consensus::target_bound;
use primitive_types::U256;

use super::params::{OverlayDefinition, VersionCheck, VersionRange};

const BITCOIN_VERSIONS: &[VersionRange] = &[
    VersionRange::new(50_700, Some(60_000)),
    VersionRange::new(60_010, Some(60_100)),
    VersionRange::new(60_400, None),
];

fn bitcoin() -> OverlayDefinition {
    OverlayDefinition {
        parent: "bitcoin",
        share_period_seconds: 30,
        chain_length: 24 * 60 * 60 / 10,
        real_chain_length: 24 * 60 * 60 / 10,
        target_lookbehind: 200,
        spread: 3,
        identifier: [0xfc, 0x70, 0x03, 0x5c, 0x7a, 0x81, 0xbc, 0x6f],
        prefix: [0x24, 0x72, 0xef, 0x18, 0x1e, 0xfc, 0xd3, 0x7b],
        p2p_port: 9333,
        worker_port: 9332,
        min_target: U256::zero(),
        max_target: target_bound(32, 1),
        persist: true,
        bootstrap_addrs: &[
            "forre.st",
            "vps.forre.st",
            "74.220.242.6:9334",
            "93.97.192.93",
            "66.90.73.83",
        ],
        announce_channel: "#p2pool",
        version_check: VersionCheck::Ranges(BITCOIN_VERSIONS),
    }
}

fn bitcoin_testnet() -> OverlayDefinition {
    OverlayDefinition {
        parent: "bitcoin_testnet",
        share_period_seconds: 30,
        chain_length: 60 * 60 / 10,
        real_chain_length: 60 * 60 / 10,
        target_lookbehind: 200,
        spread: 3,
        identifier: [0x5f, 0xc2, 0xbe, 0x2d, 0x4f, 0x0d, 0x6b, 0xfb],
        prefix: [0x3f, 0x60, 0x57, 0xa1, 0x50, 0x36, 0xf4, 0x41],
        p2p_port: 19333,
        worker_port: 19332,
        min_target: U256::zero(),
        max_target: target_bound(32, 1),
        persist: false,
        bootstrap_addrs: &["forre.st", "vps.forre.st", "liteco.in"],
        announce_channel: "#p2pool-alt",
        version_check: VersionCheck::Ranges(BITCOIN_VERSIONS),
    }
}

fn litecoin() -> OverlayDefinition {
    OverlayDefinition {
        parent: "litecoin",
        share_period_seconds: 15,
        chain_length: 24 * 60 * 60 / 10,
        real_chain_length: 24 * 60 * 60 / 10,
        target_lookbehind: 200,
        spread: 12,
        identifier: [0xe0, 0x37, 0xd5, 0xb8, 0xc6, 0x92, 0x34, 0x10],
        prefix: [0x72, 0x08, 0xc1, 0xa5, 0x3e, 0xf6, 0x29, 0xb0],
        p2p_port: 9338,
        worker_port: 9327,
        min_target: U256::zero(),
        max_target: target_bound(20, 1),
        persist: true,
        bootstrap_addrs: &["forre.st", "vps.forre.st", "liteco.in"],
        announce_channel: "#p2pool-ltc",
        version_check: VersionCheck::AcceptAll,
    }
}

fn litecoin_testnet() -> OverlayDefinition {
    OverlayDefinition {
        parent: "litecoin_testnet",
        share_period_seconds: 4,
        chain_length: 20 * 60 / 3,
        real_chain_length: 20 * 60 / 3,
        target_lookbehind: 200,
        spread: 12,
        identifier: [0xcc, 0xa5, 0xe2, 0x4e, 0xc6, 0x40, 0x8b, 0x1e],
        prefix: [0xad, 0x96, 0x14, 0xf6, 0x46, 0x6a, 0x39, 0xcf],
        p2p_port: 19338,
        worker_port: 19327,
        min_target: U256::zero(),
        max_target: target_bound(20, 1),
        persist: false,
        bootstrap_addrs: &["forre.st"],
        announce_channel: "#p2pool-alt",
        version_check: VersionCheck::AcceptAll,
    }
}

fn apollocoin() -> OverlayDefinition {
    OverlayDefinition {
        parent: "apollocoin",
        share_period_seconds: 15,
        chain_length: 24 * 60 * 60 / 10,
        real_chain_length: 12 * 60 * 60 / 10,
        target_lookbehind: 200,
        spread: 60,
        identifier: [0xfa, 0xfa, 0x64, 0x45, 0x76, 0x67, 0xee, 0xee],
        prefix: [0xfa, 0x77, 0x54, 0xee, 0x45, 0xee, 0x76, 0xfa],
        p2p_port: 7777,
        worker_port: 7778,
        min_target: U256::zero(),
        max_target: target_bound(20, 1),
        persist: true,
        bootstrap_addrs: &["birdspool.no-ip.org"],
        announce_channel: "#p2pool-alt",
        version_check: VersionCheck::AcceptAll,
    }
}

/// Every built-in overlay, keyed by registry name
pub fn builtin_overlays() -> Vec<(&'static str, OverlayDefinition)> {
    vec![
        ("bitcoin", bitcoin()),
        ("bitcoin_testnet", bitcoin_testnet()),
        ("litecoin", litecoin()),
        ("litecoin_testnet", litecoin_testnet()),
        ("apollocoin", apollocoin()),
    ]
}
