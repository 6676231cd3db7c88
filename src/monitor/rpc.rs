//! RPC client interactions

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_pubkey::Pubkey;

use crate::errors::{AnalyzerError, AnalyzerResult, ErrorContext};

/// Get account info for the given address, `None` if it does not exist
pub async fn get_account_info(
    rpc_client: &RpcClient,
    address: &Pubkey,
) -> AnalyzerResult<Option<solana_account::Account>> {
    let response = rpc_client
        .get_account_with_commitment(address, rpc_client.commitment())
        .await
        .map_err(|e| {
            let context = ErrorContext {
                address: Some(address.to_string()),
                component: "monitor".to_string(),
                operation: "get_account_info".to_string(),
                details: Some(rpc_client.url()),
            };
            AnalyzerError::Rpc(format!("{}: {}", context, e))
        })?;

    Ok(response.value)
}
