//! Data models for account analysis

pub mod account;
pub mod token;
pub mod preview;
pub(crate) mod serde_pubkey;

pub use self::account::{AccountAnalysis, AccountRecord, Category, ClassificationResult, DecodedData};
pub use self::token::{AccountState, TokenAccountFields, TokenBalance, TokenMintFields};
pub use self::preview::{PubkeyCandidate, RawPreview};
