//! Constants used throughout the analyzer

pub mod token;

/// Well-known program ids
pub mod program_ids {
    use solana_pubkey::Pubkey;

    /// SPL Token program
    pub const TOKEN_PROGRAM: Pubkey =
        solana_pubkey::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

    /// System program (all-zero address)
    pub const SYSTEM_PROGRAM: Pubkey = solana_sdk_ids::system_program::ID;
}

/// Number of bytes rendered in a raw data preview
pub const RAW_PREVIEW_LEN: usize = 128;

/// Width of an address window when scanning raw data
pub const PUBKEY_BYTES: usize = 32;

/// Lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
