//! Account classification and decoding
//!
//! Everything here is pure: the functions read an [`AccountRecord`] and
//! build fresh results, so they can be called from any number of threads.

mod preview;
mod token;
#[cfg(test)]
mod tests;

use log::{debug, warn};

use crate::constants::program_ids::{SYSTEM_PROGRAM, TOKEN_PROGRAM};
use crate::constants::token::{TOKEN_ACCOUNT_SPAN, TOKEN_MINT_SPAN};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::{
    AccountAnalysis, AccountRecord, Category, ClassificationResult, DecodedData,
    TokenAccountFields, TokenBalance, TokenMintFields,
};
use crate::utils::ui_amount;

pub use self::preview::{extract_possible_pubkeys, raw_preview};
pub use self::token::{decode_token_account, decode_token_mint};

/// Determine the category of an account
///
/// First match wins, so a token-layout match takes priority over the
/// executable flag. A token-program account whose length matches neither
/// span falls through to the generic checks.
pub fn classify(record: &AccountRecord) -> Category {
    let len = record.data.len();

    if record.owner == TOKEN_PROGRAM && len == TOKEN_ACCOUNT_SPAN {
        Category::TokenAccount
    } else if record.owner == TOKEN_PROGRAM && len == TOKEN_MINT_SPAN {
        Category::TokenMint
    } else if record.owner == SYSTEM_PROGRAM && len == 0 {
        Category::SystemAccount
    } else if record.executable {
        Category::ProgramAccount
    } else {
        Category::CustomProgramAccount
    }
}

/// Classify an account and decode or preview its data
pub fn classify_account(record: &AccountRecord) -> ClassificationResult {
    let category = classify(record);
    debug!("Classified {}-byte account owned by {} as {}", record.data.len(), record.owner, category);

    let (decoded, raw_preview) = match category {
        Category::TokenAccount => (
            Some(embed(decode_token_account(&record.data).map(DecodedData::TokenAccount))),
            None,
        ),
        Category::TokenMint => (
            Some(embed(decode_token_mint(&record.data).map(DecodedData::TokenMint))),
            None,
        ),
        Category::SystemAccount | Category::ProgramAccount => (None, None),
        Category::CustomProgramAccount => (None, Some(preview::raw_preview(&record.data))),
    };

    ClassificationResult {
        category,
        decoded,
        raw_preview,
    }
}

/// Build the full report for an account
pub fn analyze(address: &str, record: &AccountRecord) -> AccountAnalysis {
    AccountAnalysis {
        address: address.to_string(),
        owner: record.owner,
        lamports: record.lamports,
        data_length: record.data.len(),
        executable: record.executable,
        rent_epoch: record.rent_epoch,
        classification: classify_account(record),
        token_balance: None,
    }
}

/// Scale a token account's raw amount by its mint's decimals
pub fn token_balance(account: &TokenAccountFields, mint: &TokenMintFields) -> AnalyzerResult<TokenBalance> {
    let raw = account.amount.parse::<u64>().map_err(|e| {
        AnalyzerError::Decode(format!("invalid token amount '{}': {}", account.amount, e))
    })?;

    Ok(TokenBalance {
        mint: account.mint,
        decimals: mint.decimals,
        ui_amount: ui_amount(raw, mint.decimals),
    })
}

fn embed(result: AnalyzerResult<DecodedData>) -> DecodedData {
    result.unwrap_or_else(|e| {
        warn!("Failed to decode token layout: {}", e);
        let error = match e {
            AnalyzerError::Decode(msg) => msg,
            other => other.to_string(),
        };
        DecodedData::Error { error }
    })
}
