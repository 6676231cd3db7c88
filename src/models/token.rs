//! Decoded SPL Token structures

use serde::{Serialize, Deserialize};
use solana_pubkey::Pubkey;
use std::fmt;
use std::str::FromStr;

/// Token account state byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AccountState {
    Uninitialized,
    Initialized,
    Frozen,
    /// Any byte outside the defined range, kept verbatim
    Unknown(u8),
}

impl From<u8> for AccountState {
    fn from(value: u8) -> Self {
        match value {
            0 => AccountState::Uninitialized,
            1 => AccountState::Initialized,
            2 => AccountState::Frozen,
            other => AccountState::Unknown(other),
        }
    }
}

impl From<AccountState> for u8 {
    fn from(state: AccountState) -> Self {
        match state {
            AccountState::Uninitialized => 0,
            AccountState::Initialized => 1,
            AccountState::Frozen => 2,
            AccountState::Unknown(value) => value,
        }
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountState::Uninitialized => f.write_str("Uninitialized"),
            AccountState::Initialized => f.write_str("Initialized"),
            AccountState::Frozen => f.write_str("Frozen"),
            AccountState::Unknown(value) => write!(f, "Unknown({})", value),
        }
    }
}

impl FromStr for AccountState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Uninitialized" => Ok(AccountState::Uninitialized),
            "Initialized" => Ok(AccountState::Initialized),
            "Frozen" => Ok(AccountState::Frozen),
            other => other
                .strip_prefix("Unknown(")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|value| value.parse::<u8>().ok())
                .map(AccountState::Unknown)
                .ok_or_else(|| format!("invalid account state: {}", other)),
        }
    }
}

impl From<AccountState> for String {
    fn from(state: AccountState) -> Self {
        state.to_string()
    }
}

impl TryFrom<String> for AccountState {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Fields of a 165-byte token account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAccountFields {
    #[serde(with = "crate::models::serde_pubkey")]
    pub mint: Pubkey,
    #[serde(with = "crate::models::serde_pubkey")]
    pub owner: Pubkey,
    /// Raw amount in base units, as a decimal string
    pub amount: String,
    #[serde(default, with = "crate::models::serde_pubkey::option")]
    pub delegate: Option<Pubkey>,
    /// "0" when there is no delegate
    pub delegated_amount: String,
    pub state: AccountState,
    /// Rent-exempt reserve of a wrapped SOL account
    pub is_native: Option<String>,
    #[serde(default, with = "crate::models::serde_pubkey::option")]
    pub close_authority: Option<Pubkey>,
}

/// Fields of an 82-byte mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMintFields {
    #[serde(default, with = "crate::models::serde_pubkey::option")]
    pub mint_authority: Option<Pubkey>,
    /// Total supply in base units, as a decimal string
    pub supply: String,
    pub decimals: u8,
    pub is_initialized: bool,
    #[serde(default, with = "crate::models::serde_pubkey::option")]
    pub freeze_authority: Option<Pubkey>,
}

/// Token account balance scaled by its mint's decimals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    #[serde(with = "crate::models::serde_pubkey")]
    pub mint: Pubkey,
    pub decimals: u8,
    pub ui_amount: String,
}
