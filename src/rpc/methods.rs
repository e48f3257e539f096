//! JSON-RPC envelopes for the three identity probes
//!
//! A transport that speaks bitcoind-style JSON-RPC can build its requests
//! here and hand raw responses back for classification, so the "block not
//! found" error code is matched in exactly one place.

use crate::crypto::Hash256;
use crate::rpc::client::{BlockLookup, NodeInfo, RpcError};
use serde::{Deserialize, Serialize};

/// "Invalid address or key"; bitcoind answers `getblock` on an unknown hash with it
pub const RPC_INVALID_ADDRESS_OR_KEY: i64 = -5;

/// JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: serde_json::Value,
}

/// JSON-RPC response; bitcoind always sends both `result` and `error`, one null
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
    #[serde(default)]
    pub id: serde_json::Value,
}

/// JSON-RPC Error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

impl JsonRpcRequest {
    pub fn new(method: &str, params: serde_json::Value, id: u64) -> Self {
        Self {
            jsonrpc: "1.0".to_string(),
            method: method.to_string(),
            params,
            id: serde_json::json!(id),
        }
    }

    pub fn get_block(hash: &Hash256, id: u64) -> Self {
        Self::new("getblock", serde_json::json!([hash.to_hex()]), id)
    }

    pub fn help(id: u64) -> Self {
        Self::new("help", serde_json::json!([]), id)
    }

    pub fn get_info(id: u64) -> Self {
        Self::new("getinfo", serde_json::json!([]), id)
    }
}

impl JsonRpcResponse {
    pub fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: serde_json::Value, code: i64, message: String) -> Self {
        Self {
            result: None,
            error: Some(JsonRpcError { code, message }),
            id,
        }
    }

    /// Split into the result value or a remote error
    pub fn into_result(self) -> Result<serde_json::Value, RpcError> {
        match self.error {
            Some(JsonRpcError { code, message }) => Err(RpcError::Remote { code, message }),
            None => Ok(self.result.unwrap_or(serde_json::Value::Null)),
        }
    }
}

/// Map a `getblock` response; only the "no such block" code becomes `NotFound`
pub fn classify_get_block(response: JsonRpcResponse) -> Result<BlockLookup, RpcError> {
    match response.into_result() {
        Ok(block) => Ok(BlockLookup::Found(block)),
        Err(RpcError::Remote { code, .. }) if code == RPC_INVALID_ADDRESS_OR_KEY => {
            Ok(BlockLookup::NotFound)
        }
        Err(e) => Err(e),
    }
}

/// Extract the help text from a `help` response
pub fn parse_help(response: JsonRpcResponse) -> Result<String, RpcError> {
    match response.into_result()? {
        serde_json::Value::String(text) => Ok(text),
        other => Err(RpcError::Decode(format!("help returned non-string: {}", other))),
    }
}

/// Decode a `getinfo` response
pub fn parse_node_info(response: JsonRpcResponse) -> Result<NodeInfo, RpcError> {
    let value = response.into_result()?;
    serde_json::from_value(value).map_err(|e| RpcError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: &str) -> JsonRpcResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_get_block_request_uses_display_hex() {
        let hash = Hash256::from_hex(
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
        )
        .unwrap();
        let request = JsonRpcRequest::get_block(&hash, 7);
        assert_eq!(request.method, "getblock");
        assert_eq!(
            request.params,
            json!(["000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"])
        );
        assert_eq!(request.id, json!(7));
    }

    #[test]
    fn test_block_not_found_is_not_an_error() {
        let response = parse(r#"{"result":null,"error":{"code":-5,"message":"Block not found"},"id":1}"#);
        assert_eq!(classify_get_block(response), Ok(BlockLookup::NotFound));
    }

    #[test]
    fn test_other_errors_propagate() {
        let response = parse(r#"{"result":null,"error":{"code":-28,"message":"Loading block index..."},"id":1}"#);
        assert_eq!(
            classify_get_block(response),
            Err(RpcError::Remote {
                code: -28,
                message: "Loading block index...".to_string()
            })
        );
    }

    #[test]
    fn test_built_error_response_classifies() {
        let not_found = JsonRpcResponse::error(json!(3), RPC_INVALID_ADDRESS_OR_KEY, "Block not found".to_string());
        assert_eq!(classify_get_block(not_found), Ok(BlockLookup::NotFound));

        let warming_up = JsonRpcResponse::error(json!(4), -28, "Loading wallet...".to_string());
        assert!(matches!(parse_help(warming_up), Err(RpcError::Remote { code: -28, .. })));
    }

    #[test]
    fn test_found_block() {
        let response = parse(r#"{"result":{"height":0},"error":null,"id":1}"#);
        assert_eq!(
            classify_get_block(response),
            Ok(BlockLookup::Found(json!({"height": 0})))
        );
    }

    #[test]
    fn test_parse_help_and_info() {
        let help = JsonRpcResponse::success(json!(1), json!("getnewaddress\nlitecoinaddress"));
        assert!(parse_help(help).unwrap().contains("litecoinaddress"));

        let bad_help = JsonRpcResponse::success(json!(1), json!(42));
        assert!(matches!(parse_help(bad_help), Err(RpcError::Decode(_))));

        let info = parse(r#"{"result":{"version":80100,"testnet":true,"blocks":12},"error":null,"id":2}"#);
        let info = parse_node_info(info).unwrap();
        assert!(info.testnet);
        assert_eq!(info.blocks, Some(12));

        let missing = JsonRpcResponse::success(json!(2), json!({"version": 1}));
        assert!(matches!(parse_node_info(missing), Err(RpcError::Decode(_))));
    }
}
