//! Account fetching over RPC

mod rpc;

use log::{debug, info};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_pubkey::Pubkey;

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::AccountRecord;

/// Client side of the cluster, the only async boundary in the crate
pub struct Monitor {
    rpc_client: RpcClient,
}

impl Monitor {
    /// Create a new monitor with the given RPC URL
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc_client: RpcClient::new(rpc_url.to_string()),
        }
    }

    /// RPC endpoint this monitor talks to
    pub fn rpc_url(&self) -> String {
        self.rpc_client.url()
    }

    /// Fetch an account, `Ok(None)` when it does not exist
    pub async fn fetch_account(&self, address: &Pubkey) -> AnalyzerResult<Option<AccountRecord>> {
        debug!("Fetching account {} from {}", address, self.rpc_url());
        let account = rpc::get_account_info(&self.rpc_client, address).await?;

        match &account {
            Some(account) => info!(
                "Fetched account {} ({} bytes, owner {})",
                address,
                account.data.len(),
                account.owner
            ),
            None => debug!("Account {} does not exist", address),
        }

        Ok(account.map(AccountRecord::from))
    }

    /// Fetch an account that must exist
    pub async fn get_account(&self, address: &Pubkey) -> AnalyzerResult<AccountRecord> {
        self.fetch_account(address)
            .await?
            .ok_or_else(|| AnalyzerError::NotFound(address.to_string()))
    }
}
