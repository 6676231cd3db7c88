//! SPL Token account and mint layouts
//!
//! Offsets follow the packed (non-padded) layout the Token program writes.
//! Optional fields are preceded by a 4-byte little-endian presence flag.

/// Size of a token account
pub const TOKEN_ACCOUNT_SPAN: usize = 165;

/// Size of a mint
pub const TOKEN_MINT_SPAN: usize = 82;

/// Token account field offsets
pub mod account {
    pub const MINT: usize = 0;
    pub const OWNER: usize = 32;
    pub const AMOUNT: usize = 64;
    pub const DELEGATE_FLAG: usize = 72;
    pub const DELEGATE: usize = 76;
    pub const STATE: usize = 108;
    pub const IS_NATIVE_FLAG: usize = 109;
    pub const IS_NATIVE: usize = 113;
    pub const DELEGATED_AMOUNT: usize = 121;
    pub const CLOSE_AUTHORITY_FLAG: usize = 129;
    pub const CLOSE_AUTHORITY: usize = 133;
}

/// Mint field offsets
pub mod mint {
    pub const MINT_AUTHORITY_FLAG: usize = 0;
    pub const MINT_AUTHORITY: usize = 4;
    pub const SUPPLY: usize = 36;
    pub const DECIMALS: usize = 44;
    pub const IS_INITIALIZED: usize = 45;
    pub const FREEZE_AUTHORITY_FLAG: usize = 46;
    pub const FREEZE_AUTHORITY: usize = 50;
}
