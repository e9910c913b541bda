//! Chain boundary: balance query and transfer submission.
//!
//! The app consumes exactly two things from the chain: a balance number
//! and a submission result (signature string or error). Transaction
//! construction and signing live behind the wallet provider.

use gloo_net::http::Request;
use thiserror::Error;

use crate::adapter::{self, WalletProvider};

pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

const RPC_URL: &str = "https://api.devnet.solana.com";

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("rpc request failed: {0}")]
    Rpc(String),
    #[error("malformed rpc response")]
    Response,
    #[error("{0}")]
    Provider(String),
}

/// Query the wallet's balance in SOL via JSON-RPC `getBalance`.
pub async fn fetch_balance(public_key: &str) -> Result<f64, ChainError> {
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getBalance",
        "params": [public_key],
    });

    let response = Request::post(RPC_URL)
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .map_err(|e| ChainError::Rpc(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChainError::Rpc(e.to_string()))?;

    let json: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ChainError::Rpc(e.to_string()))?;

    let lamports = json
        .get("result")
        .and_then(|r| r.get("value"))
        .and_then(|v| v.as_f64())
        .ok_or(ChainError::Response)?;

    Ok(lamports / LAMPORTS_PER_SOL)
}

/// Submit a transfer through the provider; resolves to the signature.
pub async fn submit_transfer(
    provider: &WalletProvider,
    recipient: &str,
    amount_sol: f64,
) -> Result<String, ChainError> {
    let lamports = amount_sol * LAMPORTS_PER_SOL;
    let result = provider
        .sign_and_send_transfer(recipient, lamports)
        .await
        .map_err(|e| ChainError::Provider(adapter::error_message(&e)))?;

    result
        .as_string()
        .filter(|s| !s.is_empty())
        .ok_or(ChainError::Response)
}
