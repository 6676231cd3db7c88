//! Account records and classification results

use serde::{Serialize, Deserialize};
use solana_pubkey::Pubkey;
use std::fmt;

use crate::models::preview::RawPreview;
use crate::models::token::{TokenAccountFields, TokenBalance, TokenMintFields};

/// Raw account as returned by the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Program that owns the account
    pub owner: Pubkey,
    /// Account data
    pub data: Vec<u8>,
    /// Whether the account holds a loaded program
    pub executable: bool,
    /// Balance in lamports
    pub lamports: u64,
    /// Epoch at which rent is next due
    pub rent_epoch: u64,
}

impl AccountRecord {
    /// Create a non-executable record with zero balance
    pub fn new(owner: Pubkey, data: Vec<u8>) -> Self {
        Self {
            owner,
            data,
            executable: false,
            lamports: 0,
            rent_epoch: 0,
        }
    }
}

impl From<solana_account::Account> for AccountRecord {
    fn from(account: solana_account::Account) -> Self {
        Self {
            owner: account.owner,
            data: account.data,
            executable: account.executable,
            lamports: account.lamports,
            rent_epoch: account.rent_epoch,
        }
    }
}

/// Semantic account category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Token Account")]
    TokenAccount,
    #[serde(rename = "Token Mint")]
    TokenMint,
    #[serde(rename = "System Account")]
    SystemAccount,
    #[serde(rename = "Program Account")]
    ProgramAccount,
    #[serde(rename = "Custom Program Account")]
    CustomProgramAccount,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::TokenAccount => "Token Account",
            Category::TokenMint => "Token Mint",
            Category::SystemAccount => "System Account",
            Category::ProgramAccount => "Program Account",
            Category::CustomProgramAccount => "Custom Program Account",
        };
        f.write_str(label)
    }
}

/// Structured contents of a known layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecodedData {
    TokenAccount(TokenAccountFields),
    TokenMint(TokenMintFields),
    /// The layout matched by length but a field could not be read
    Error { error: String },
}

/// Outcome of classifying a single account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "type")]
    pub category: Category,
    /// Present for token accounts and mints
    pub decoded: Option<DecodedData>,
    /// Present only for custom program accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_preview: Option<RawPreview>,
}

impl ClassificationResult {
    /// Decoded token account fields, if decoding succeeded
    pub fn token_account(&self) -> Option<&TokenAccountFields> {
        match &self.decoded {
            Some(DecodedData::TokenAccount(fields)) => Some(fields),
            _ => None,
        }
    }

    /// Decoded mint fields, if decoding succeeded
    pub fn token_mint(&self) -> Option<&TokenMintFields> {
        match &self.decoded {
            Some(DecodedData::TokenMint(fields)) => Some(fields),
            _ => None,
        }
    }

    /// Embedded decode error, if any
    pub fn decode_error(&self) -> Option<&str> {
        match &self.decoded {
            Some(DecodedData::Error { error }) => Some(error),
            _ => None,
        }
    }
}

/// Full report for one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAnalysis {
    /// Address as supplied by the caller
    pub address: String,
    #[serde(with = "crate::models::serde_pubkey")]
    pub owner: Pubkey,
    pub lamports: u64,
    pub data_length: usize,
    pub executable: bool,
    pub rent_epoch: u64,
    #[serde(flatten)]
    pub classification: ClassificationResult,
    /// Human-readable balance, filled in when the mint was resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_balance: Option<TokenBalance>,
}

impl AccountAnalysis {
    pub fn category(&self) -> Category {
        self.classification.category
    }
}
