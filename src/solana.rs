//! Thin Solana JSON-RPC client for wallet balance and transaction lookups.
//!
//! The chain is an external collaborator here: nothing in the CRUD paths
//! depends on it, and every call is a single JSON-RPC round trip with no
//! retries beyond reqwest defaults.

use crate::errors::{Error, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Lamports per SOL, the chain's native conversion factor.
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// JSON-RPC client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct SolanaClient {
    http: reqwest::Client,
    rpc_url: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct BalanceResult {
    value: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignatureInfo {
    signature: String,
    slot: u64,
    block_time: Option<i64>,
    err: Option<Value>,
}

/// One entry of a wallet's recent transaction history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    pub signature: String,
    pub slot: u64,
    /// Block time as a unix timestamp, when the node reports one
    pub timestamp: Option<i64>,
    /// `"success"` or `"failed"`
    pub status: &'static str,
}

impl From<SignatureInfo> for TransactionSummary {
    fn from(info: SignatureInfo) -> Self {
        Self {
            signature: info.signature,
            slot: info.slot,
            timestamp: info.block_time,
            status: if info.err.is_some() {
                "failed"
            } else {
                "success"
            },
        }
    }
}

impl SolanaClient {
    /// Creates a client for the given RPC endpoint.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            rpc_url: rpc_url.into(),
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response: RpcResponse<T> = self
            .http
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(Error::Solana {
                message: format!("RPC error {}: {}", error.code, error.message),
            });
        }

        response.result.ok_or_else(|| Error::Solana {
            message: format!("empty response from {method}"),
        })
    }

    /// Fetches a wallet's balance in SOL.
    pub async fn get_balance(&self, wallet_address: &str) -> Result<f64> {
        let result: BalanceResult = self.call("getBalance", json!([wallet_address])).await?;
        // Cast safety: lamport balances stay far below 2^53.
        #[allow(clippy::cast_precision_loss)]
        let sol = result.value as f64 / LAMPORTS_PER_SOL;
        Ok(sol)
    }

    /// Fetches a wallet's most recent transaction signatures, newest first.
    pub async fn get_transaction_history(
        &self,
        wallet_address: &str,
        limit: usize,
    ) -> Result<Vec<TransactionSummary>> {
        let infos: Vec<SignatureInfo> = self
            .call(
                "getSignaturesForAddress",
                json!([wallet_address, { "limit": limit }]),
            )
            .await?;

        Ok(infos.into_iter().map(TransactionSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_balance_response_parses() {
        let raw = r#"{"jsonrpc":"2.0","result":{"context":{"slot":1},"value":2500000000},"id":1}"#;
        let response: RpcResponse<BalanceResult> = serde_json::from_str(raw).unwrap();
        let balance = response.result.unwrap().value;
        assert_eq!(balance, 2_500_000_000);
        #[allow(clippy::cast_precision_loss)]
        let sol = balance as f64 / LAMPORTS_PER_SOL;
        assert_eq!(sol, 2.5);
    }

    #[test]
    fn test_error_response_parses() {
        let raw = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid param"},"id":1}"#;
        let response: RpcResponse<BalanceResult> = serde_json::from_str(raw).unwrap();
        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Invalid param");
    }

    #[test]
    fn test_signature_info_maps_to_summary() {
        let raw = r#"[
            {"signature":"5j7s","slot":114,"err":null,"memo":null,"blockTime":1700000000},
            {"signature":"4x2k","slot":112,"err":{"InstructionError":[0,"Custom"]},"blockTime":null}
        ]"#;
        let infos: Vec<SignatureInfo> = serde_json::from_str(raw).unwrap();
        let summaries: Vec<TransactionSummary> =
            infos.into_iter().map(TransactionSummary::from).collect();

        assert_eq!(summaries[0].status, "success");
        assert_eq!(summaries[0].timestamp, Some(1_700_000_000));
        assert_eq!(summaries[1].status, "failed");
        assert_eq!(summaries[1].slot, 112);
    }
}
