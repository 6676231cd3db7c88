//! A library for classifying Solana accounts and decoding their data
//!
//! Accounts are sorted into token accounts, mints, system accounts, program
//! accounts, and custom program accounts using only their owner, data length,
//! and executable flag. Token layouts are decoded into structured fields;
//! anything else gets a bounded hex/base64 preview with address hints.

pub mod analyzer;
pub mod constants;
pub mod errors;
pub mod models;
pub mod monitor;
pub mod report;
pub mod utils;

use std::str::FromStr;

use futures::future::join_all;
use log::{debug, info, warn};
use solana_pubkey::Pubkey;

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::{AccountAnalysis, AccountRecord, Category};
use crate::monitor::Monitor;

/// Local test validator
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

/// Settings for the fetch-and-analyze entry points
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// RPC endpoint to query
    pub rpc_url: String,
    /// Fetch the mint of token accounts to compute a scaled balance
    pub resolve_mint: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            resolve_mint: false,
        }
    }
}

/// Parse a base58 account address
pub fn parse_address(address: &str) -> AnalyzerResult<Pubkey> {
    Pubkey::from_str(address)
        .map_err(|e| AnalyzerError::InvalidAddress(format!("{}: {}", address, e)))
}

/// Main entry point for analyzing a single account
pub async fn analyze_account(address: &str, config: &AnalyzerConfig) -> AnalyzerResult<AccountAnalysis> {
    let monitor = Monitor::new(&config.rpc_url);
    analyze_with_monitor(&monitor, address, config.resolve_mint).await
}

/// Analyze several accounts concurrently, keeping the input order
pub async fn analyze_accounts(
    addresses: &[String],
    config: &AnalyzerConfig,
) -> Vec<AnalyzerResult<AccountAnalysis>> {
    let monitor = Monitor::new(&config.rpc_url);
    debug!("Analyzing {} account(s) via {}", addresses.len(), monitor.rpc_url());
    join_all(
        addresses
            .iter()
            .map(|address| analyze_with_monitor(&monitor, address, config.resolve_mint)),
    )
    .await
}

/// Fetch and analyze an account through an existing monitor
pub async fn analyze_with_monitor(
    monitor: &Monitor,
    address: &str,
    resolve_mint: bool,
) -> AnalyzerResult<AccountAnalysis> {
    let pubkey = parse_address(address)?;
    let record = monitor.get_account(&pubkey).await?;
    analyze_record(monitor, address, &record, resolve_mint).await
}

/// Analyze an already fetched account, using the monitor only to resolve its mint
///
/// A failed mint lookup is logged and leaves `token_balance` unset.
pub async fn analyze_record(
    monitor: &Monitor,
    address: &str,
    record: &AccountRecord,
    resolve_mint: bool,
) -> AnalyzerResult<AccountAnalysis> {
    let mut analysis = analyzer::analyze(address, record);
    info!("Account {} is a {}", address, analysis.category());

    if resolve_mint {
        if let Some(fields) = analysis.classification.token_account() {
            let mint = fields.mint;
            let resolved = resolve_token_balance(monitor, &mint, &analysis).await;
            match resolved {
                Ok(balance) => analysis.token_balance = balance,
                Err(e) => warn!("Could not resolve mint {} for {}: {}", mint, address, e),
            }
        }
    }

    Ok(analysis)
}

async fn resolve_token_balance(
    monitor: &Monitor,
    mint: &Pubkey,
    analysis: &AccountAnalysis,
) -> AnalyzerResult<Option<models::TokenBalance>> {
    let mint_record = monitor.get_account(mint).await?;
    let mint_result = analyzer::classify_account(&mint_record);

    if mint_result.category != Category::TokenMint {
        warn!("Mint {} classified as {}, skipping balance", mint, mint_result.category);
        return Ok(None);
    }

    match (analysis.classification.token_account(), mint_result.token_mint()) {
        (Some(account), Some(mint_fields)) => Ok(Some(analyzer::token_balance(account, mint_fields)?)),
        _ => Ok(None),
    }
}

/// Version of the account analyzer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
