//! Property-based and scenario tests for the network registries
//!
//! Registry invariants are checked over every built-in record; identity
//! verification is driven through mock nodes defined below.

use std::cell::Cell;
use std::time::Duration;

use p2pool_nets::consensus::{parse_coin_amount, AmountError, BlockHeader, Issuance};
use p2pool_nets::crypto::Hash256;
use p2pool_nets::network::builtin_networks;
use p2pool_nets::rpc::{BlockLookup, NodeInfo, RpcError};
use p2pool_nets::{verify, NetworkRegistry, NodeRpc, Registries, RegistryError};
use primitive_types::U256;
use proptest::prelude::*;

const LITECOIN_GENESIS: &str = "12a765e31ffd4059bada1e25190f6e98c99d9714d334efa41a195a7e7e04bfe2";

fn registries() -> Registries {
    Registries::builtin().unwrap()
}

// ============================================================================
// MOCK NODES
// ============================================================================

/// Node answering every probe from fixed state
struct ScriptedNode {
    known_block: Option<Hash256>,
    help: String,
    testnet: bool,
    transport_down: bool,
    calls: Cell<u32>,
}

impl ScriptedNode {
    fn litecoin_mainnet() -> Self {
        Self {
            known_block: Some(Hash256::from_hex(LITECOIN_GENESIS).unwrap()),
            help: "getblock <hash>\nlitecoinaddress\ngetinfo\n".to_string(),
            testnet: false,
            transport_down: false,
            calls: Cell::new(0),
        }
    }

    fn tick(&self) -> Result<(), RpcError> {
        self.calls.set(self.calls.get() + 1);
        if self.transport_down {
            return Err(RpcError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

impl NodeRpc for ScriptedNode {
    async fn get_block(&self, hash: &Hash256) -> Result<BlockLookup, RpcError> {
        self.tick()?;
        if self.known_block == Some(*hash) {
            Ok(BlockLookup::Found(serde_json::json!({ "hash": hash.to_hex() })))
        } else {
            Ok(BlockLookup::NotFound)
        }
    }

    async fn get_help_text(&self) -> Result<String, RpcError> {
        self.tick()?;
        Ok(self.help.clone())
    }

    async fn get_node_info(&self) -> Result<NodeInfo, RpcError> {
        self.tick()?;
        Ok(NodeInfo::new(self.testnet))
    }
}

/// Node whose `getinfo` never answers
struct HangingNode;

impl NodeRpc for HangingNode {
    async fn get_block(&self, _hash: &Hash256) -> Result<BlockLookup, RpcError> {
        Ok(BlockLookup::NotFound)
    }

    async fn get_help_text(&self) -> Result<String, RpcError> {
        Ok(String::new())
    }

    async fn get_node_info(&self) -> Result<NodeInfo, RpcError> {
        std::future::pending::<()>().await;
        Ok(NodeInfo::new(false))
    }
}

// ============================================================================
// REGISTRY INVARIANTS
// ============================================================================

#[test]
fn test_every_overlay_respects_its_bounds() {
    let registries = registries();
    for overlay in registries.overlays.iter() {
        assert!(
            overlay.real_chain_length <= overlay.chain_length,
            "{}: real chain length exceeds chain length",
            overlay.name
        );
        assert!(overlay.min_target <= overlay.max_target, "{}", overlay.name);
        assert!(!overlay.bootstrap_addrs.is_empty(), "{}", overlay.name);
        assert!(registries.networks.contains(overlay.parent.name));
    }
}

#[test]
fn test_every_network_has_ordered_sane_range() {
    for net in registries().networks.iter() {
        assert!(net.sane_target_range.min <= net.sane_target_range.max, "{}", net.name);
        assert!(net.identity_check.is_configured(), "{}", net.name);
    }
}

#[test]
fn test_lookup_is_stable() {
    let registries = registries();
    for name in registries.networks.names() {
        let first = registries.networks.lookup(name).unwrap();
        let second = registries.networks.lookup(name).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_unknown_name_is_an_error() {
    let registries = registries();
    assert_eq!(
        registries.networks.lookup("dogecoin").unwrap_err(),
        RegistryError::UnknownNetwork("dogecoin".to_string())
    );
    assert!(registries.overlays.lookup("").is_err());
}

#[test]
fn test_shared_magic_prefix_is_reported() {
    let networks = NetworkRegistry::builtin().unwrap();
    let collisions = networks.prefix_collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].networks, vec!["apollocoin", "litecoin_testnet"]);
    assert_eq!(networks.by_magic_prefix(collisions[0].prefix).len(), 2);
}

// ============================================================================
// SUBSIDY AND TARGET SCENARIOS
// ============================================================================

#[test]
fn test_halving_straddle_on_every_network() {
    for net in registries().networks.iter() {
        if let Issuance::Halving {
            base_reward,
            interval,
        } = net.issuance_schedule
        {
            assert_eq!(net.subsidy(interval - 2), base_reward, "{}", net.name);
            assert_eq!(net.subsidy(interval - 1), base_reward / 2, "{}", net.name);
        }
    }
}

#[test]
fn test_sane_range_edges() {
    let registries = registries();
    let net = registries.networks.lookup("apollocoin").unwrap();
    let range = net.sane_target_range;
    assert!(net.is_sane_target(range.min));
    assert!(net.is_sane_target(range.max));
    assert!(net.check_target(range.max + U256::one()).is_err());
}

#[test]
fn test_fractional_dust_is_rejected() {
    assert_eq!(
        parse_coin_amount("0.000000001"),
        Err(AmountError::SubUnit("0.000000001".to_string()))
    );

    let mut defs = builtin_networks();
    defs[0].1.dust_threshold = "0.0000000015";
    let err = NetworkRegistry::from_definitions(defs).unwrap_err();
    assert!(matches!(err, RegistryError::MalformedNetworkDefinition { .. }));
}

// ============================================================================
// PROOF OF WORK
// ============================================================================

fn genesis_header(merkle_root: &str, timestamp: u32, bits: u32, nonce: u32) -> BlockHeader {
    BlockHeader::new(
        1,
        Hash256::zero(),
        Hash256::from_hex(merkle_root).unwrap(),
        timestamp,
        bits,
        nonce,
    )
}

fn bitcoin_genesis() -> BlockHeader {
    genesis_header(
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
        1231006505,
        0x1d00ffff,
        2083236893,
    )
}

fn litecoin_genesis() -> BlockHeader {
    genesis_header(
        "97ddfbbae6be97fd6cdf3e7ca13232a3afff2353e29badfab7f73011edd4ced9",
        1317972665,
        0x1e0ffff0,
        2084524493,
    )
}

#[test]
fn test_litecoin_genesis_scrypt_pow() {
    let registries = registries();
    let litecoin = registries.networks.lookup("litecoin").unwrap();
    let header = litecoin_genesis();
    assert_eq!(header.hash().to_hex(), LITECOIN_GENESIS);

    let expected = U256::from_str_radix(
        "50c34a64b415b6b15b37f2216634b5b1669cb9a2e38d76f7213b0671e00",
        16,
    )
    .unwrap();
    assert_eq!(litecoin.header_pow(&header), expected);
    assert_eq!(litecoin.check_pow(&header), Ok(true));
}

#[test]
fn test_genesis_headers_meet_their_bits() {
    let registries = registries();
    let bitcoin = registries.networks.lookup("bitcoin").unwrap();
    let litecoin = registries.networks.lookup("litecoin").unwrap();
    assert_eq!(bitcoin.header_pow(&bitcoin_genesis()), bitcoin_genesis().hash().to_u256());
    assert_eq!(bitcoin.check_pow(&bitcoin_genesis()), Ok(true));
    assert_eq!(litecoin.check_pow(&litecoin_genesis()), Ok(true));
}

#[test]
fn test_changed_nonce_misses_target() {
    let registries = registries();
    let bitcoin = registries.networks.lookup("bitcoin").unwrap();
    let litecoin = registries.networks.lookup("litecoin").unwrap();

    let mut header = bitcoin_genesis();
    header.nonce += 1;
    assert_eq!(bitcoin.check_pow(&header), Ok(false));

    let mut header = litecoin_genesis();
    header.nonce += 1;
    assert_eq!(litecoin.check_pow(&header), Ok(false));
}

// ============================================================================
// IDENTITY VERIFICATION
// ============================================================================

#[tokio::test]
async fn test_litecoin_node_verifies() {
    let registries = registries();
    let litecoin = registries.networks.lookup("litecoin").unwrap();
    let node = ScriptedNode::litecoin_mainnet();
    assert_eq!(verify(&node, litecoin).await, Ok(true));
    assert_eq!(node.calls.get(), 3);
}

#[tokio::test]
async fn test_each_failed_probe_flips_the_verdict() {
    let registries = registries();
    let litecoin = registries.networks.lookup("litecoin").unwrap();

    let mut node = ScriptedNode::litecoin_mainnet();
    node.known_block = None;
    assert_eq!(verify(&node, litecoin).await, Ok(false));

    let mut node = ScriptedNode::litecoin_mainnet();
    node.help = "getblock <hash>\nLitecoinAddress\n".to_string();
    assert_eq!(verify(&node, litecoin).await, Ok(false));

    let mut node = ScriptedNode::litecoin_mainnet();
    node.testnet = true;
    assert_eq!(verify(&node, litecoin).await, Ok(false));
}

#[tokio::test]
async fn test_mainnet_node_is_not_testnet() {
    let registries = registries();
    let testnet = registries.networks.lookup("litecoin_testnet").unwrap();
    let mut node = ScriptedNode::litecoin_mainnet();
    node.help.push_str("getreceivedbyaddress\n");
    assert_eq!(verify(&node, testnet).await, Ok(false));
    node.testnet = true;
    assert_eq!(verify(&node, testnet).await, Ok(true));
}

#[tokio::test]
async fn test_transport_failure_is_not_a_verdict() {
    let registries = registries();
    let litecoin = registries.networks.lookup("litecoin").unwrap();
    let mut node = ScriptedNode::litecoin_mainnet();
    node.transport_down = true;
    assert_eq!(
        verify(&node, litecoin).await,
        Err(RpcError::Transport("connection refused".to_string()))
    );
}

#[tokio::test]
async fn test_verification_can_be_abandoned() {
    let registries = registries();
    let bitcoin = registries.networks.lookup("bitcoin").unwrap();
    let outcome = tokio::time::timeout(Duration::from_millis(50), verify(&HangingNode, bitcoin)).await;
    assert!(outcome.is_err());
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

/// Heights before the longest built-in curve has halved to zero
const LIVE_CURVE_HEIGHTS: u64 = 64 * 840_000;

fn arb_u256() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(|bytes| U256::from_little_endian(&bytes))
}

proptest! {
    /// Subsidy never grows along an increasing height sequence
    #[test]
    fn prop_subsidy_non_increasing(
        mut heights in prop::collection::vec(0u64..LIVE_CURVE_HEIGHTS, 2..64)
    ) {
        heights.sort_unstable();
        for net in registries().networks.iter() {
            for pair in heights.windows(2) {
                prop_assert!(net.subsidy(pair[1]) <= net.subsidy(pair[0]), "{}", net.name);
            }
        }
    }

    /// Around each early halving the reward halves exactly once
    #[test]
    fn prop_subsidy_halves_at_boundaries(k in 1u64..8, offset in 0u64..3) {
        for net in registries().networks.iter() {
            if let Issuance::Halving { base_reward, interval } = net.issuance_schedule {
                let boundary = k * interval - 1;
                prop_assert_eq!(net.subsidy(boundary - 1 - offset), base_reward >> (k - 1));
                prop_assert_eq!(net.subsidy(boundary + offset), base_reward >> k);
                prop_assert!(net.subsidy(boundary) > 0);
            }
        }
    }

    /// Sanity check agrees with the inclusive range
    #[test]
    fn prop_sane_target_matches_range(target in arb_u256()) {
        for net in registries().networks.iter() {
            let range = net.sane_target_range;
            let inside = range.min <= target && target <= range.max;
            prop_assert_eq!(net.is_sane_target(target), inside);
            prop_assert_eq!(net.check_target(target).is_ok(), inside);
        }
    }

    /// Any ninth decimal digit is finer than a base unit
    #[test]
    fn prop_sub_unit_amounts_rejected(
        whole in 0u64..1_000_000u64,
        frac in 0u64..100_000_000u64,
        extra in 1u8..=9u8
    ) {
        let text = format!("{}.{:08}{}", whole, frac, extra);
        prop_assert!(matches!(parse_coin_amount(&text), Err(AmountError::SubUnit(_))));
    }

    /// Whole-unit amounts parse exactly
    #[test]
    fn prop_exact_amounts_parse(whole in 0u64..1_000_000u64, frac in 0u64..100_000_000u64) {
        let text = format!("{}.{:08}", whole, frac);
        prop_assert_eq!(parse_coin_amount(&text), Ok(whole * 100_000_000 + frac));
    }
}
