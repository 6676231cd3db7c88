//! SPL Token layout decoding
//!
//! Both decoders read fixed offsets out of the packed layout. They are
//! normally handed data whose length already matched the span, but every
//! read is bounds-checked so a short slice yields a decode error rather
//! than a panic.

use solana_pubkey::Pubkey;

use crate::constants::token::{account, mint};
use crate::constants::PUBKEY_BYTES;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::{AccountState, TokenAccountFields, TokenMintFields};

/// Decode a token account
pub fn decode_token_account(data: &[u8]) -> AnalyzerResult<TokenAccountFields> {
    let mint = read_pubkey(data, account::MINT)?;
    let owner = read_pubkey(data, account::OWNER)?;
    let amount = read_u64(data, account::AMOUNT)?;
    let delegate = read_optional_pubkey(data, account::DELEGATE_FLAG, account::DELEGATE)?;
    let state = AccountState::from(read_u8(data, account::STATE)?);

    let is_native = if read_u32(data, account::IS_NATIVE_FLAG)? != 0 {
        Some(read_u64(data, account::IS_NATIVE)?.to_string())
    } else {
        None
    };

    // Delegated amount only means something while a delegate is set
    let delegated_amount = if delegate.is_some() {
        read_u64(data, account::DELEGATED_AMOUNT)?
    } else {
        0
    };

    let close_authority = read_optional_pubkey(
        data,
        account::CLOSE_AUTHORITY_FLAG,
        account::CLOSE_AUTHORITY,
    )?;

    Ok(TokenAccountFields {
        mint,
        owner,
        amount: amount.to_string(),
        delegate,
        delegated_amount: delegated_amount.to_string(),
        state,
        is_native,
        close_authority,
    })
}

/// Decode a mint
pub fn decode_token_mint(data: &[u8]) -> AnalyzerResult<TokenMintFields> {
    let mint_authority = read_optional_pubkey(data, mint::MINT_AUTHORITY_FLAG, mint::MINT_AUTHORITY)?;
    let supply = read_u64(data, mint::SUPPLY)?;
    let decimals = read_u8(data, mint::DECIMALS)?;
    let is_initialized = read_u8(data, mint::IS_INITIALIZED)? != 0;
    let freeze_authority = read_optional_pubkey(
        data,
        mint::FREEZE_AUTHORITY_FLAG,
        mint::FREEZE_AUTHORITY,
    )?;

    Ok(TokenMintFields {
        mint_authority,
        supply: supply.to_string(),
        decimals,
        is_initialized,
        freeze_authority,
    })
}

fn field<'a>(data: &'a [u8], offset: usize, len: usize) -> AnalyzerResult<&'a [u8]> {
    data.get(offset..offset + len).ok_or_else(|| {
        AnalyzerError::Decode(format!(
            "field at offset {} ({} bytes) runs past end of data ({} bytes)",
            offset,
            len,
            data.len()
        ))
    })
}

fn read_u8(data: &[u8], offset: usize) -> AnalyzerResult<u8> {
    Ok(field(data, offset, 1)?[0])
}

fn read_u32(data: &[u8], offset: usize) -> AnalyzerResult<u32> {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(field(data, offset, 4)?);
    Ok(u32::from_le_bytes(bytes))
}

fn read_u64(data: &[u8], offset: usize) -> AnalyzerResult<u64> {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(field(data, offset, 8)?);
    Ok(u64::from_le_bytes(bytes))
}

fn read_pubkey(data: &[u8], offset: usize) -> AnalyzerResult<Pubkey> {
    Pubkey::try_from(field(data, offset, PUBKEY_BYTES)?).map_err(|e| {
        AnalyzerError::Decode(format!("invalid pubkey at offset {}: {}", offset, e))
    })
}

/// Read a pubkey preceded by a 4-byte presence flag; any non-zero flag means set
fn read_optional_pubkey(data: &[u8], flag_offset: usize, offset: usize) -> AnalyzerResult<Option<Pubkey>> {
    if read_u32(data, flag_offset)? == 0 {
        return Ok(None);
    }
    read_pubkey(data, offset).map(Some)
}
