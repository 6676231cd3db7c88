//! Diagnostic preview of unrecognized account data

use serde::{Serialize, Deserialize};
use solana_pubkey::Pubkey;

/// Bounded view of raw account data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPreview {
    /// Hex of the leading bytes
    pub hex: String,
    /// Base64 of the same bytes
    pub base64: String,
    /// Length of the full data, not of the preview
    pub length: usize,
    /// Aligned windows that look like addresses
    pub possible_pubkeys: Vec<PubkeyCandidate>,
}

/// A 32-byte window that parsed as an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubkeyCandidate {
    pub offset: usize,
    #[serde(with = "crate::models::serde_pubkey")]
    pub pubkey: Pubkey,
}
