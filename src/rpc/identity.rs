//! Node identity verification
//!
//! Confirms that an RPC endpoint runs the node software of the network its
//! operator claims, in the claimed mode. Every configured probe is issued
//! concurrently; the first transport error aborts the rest and is returned
//! unchanged. Nothing is cached.

use serde::Serialize;
use tracing::debug;

use crate::crypto::Hash256;
use crate::network::NetworkParams;
use crate::rpc::client::{NodeRpc, RpcError};

/// Per-network probes run against a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityCheck {
    /// Block the node must know
    pub genesis_hash: Option<Hash256>,
    /// Case-sensitive substring the node's `help` output must contain
    pub help_marker: Option<&'static str>,
    /// Value `getinfo` must report for `testnet`
    pub testnet: bool,
}

impl IdentityCheck {
    /// At least one of genesis or marker must be present; the mode check alone proves nothing
    pub fn is_configured(&self) -> bool {
        self.genesis_hash.is_some() || self.help_marker.is_some()
    }

    /// Run the probes; `Ok(false)` is a negative identity, `Err` a transport failure
    pub async fn verify<R: NodeRpc>(&self, rpc: &R) -> Result<bool, RpcError> {
        let genesis = async {
            match self.genesis_hash {
                Some(hash) => {
                    let lookup = rpc.get_block(&hash).await?;
                    debug!(genesis = %hash, found = lookup.is_found(), "genesis probe");
                    Ok::<bool, RpcError>(lookup.is_found())
                }
                None => Ok(true),
            }
        };

        let marker = async {
            match self.help_marker {
                Some(marker) => {
                    let text = rpc.get_help_text().await?;
                    let present = text.contains(marker);
                    debug!(marker, present, "help marker probe");
                    Ok::<bool, RpcError>(present)
                }
                None => Ok(true),
            }
        };

        let mode = async {
            let info = rpc.get_node_info().await?;
            let matches = info.testnet == self.testnet;
            debug!(expected = self.testnet, reported = info.testnet, "mode probe");
            Ok::<bool, RpcError>(matches)
        };

        let (genesis_ok, marker_ok, mode_ok) = tokio::try_join!(genesis, marker, mode)?;
        Ok(genesis_ok && marker_ok && mode_ok)
    }
}

/// Decide whether `rpc` is a live node of `claimed`
pub async fn verify<R: NodeRpc>(rpc: &R, claimed: &NetworkParams) -> Result<bool, RpcError> {
    let verdict = claimed.identity_check.verify(rpc).await;
    match &verdict {
        Ok(ok) => debug!(network = claimed.name, verdict = *ok, "identity verification finished"),
        Err(e) => debug!(network = claimed.name, error = %e, "identity verification failed"),
    }
    verdict
}
