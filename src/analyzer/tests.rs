//! Tests for the analyzer module

use super::*;
use crate::constants::token::{account, mint};
use crate::models::AccountState;
use rstest::rstest;
use solana_pubkey::Pubkey;

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_u64(data: &mut [u8], offset: usize, value: u64) {
    data[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
}

fn put_option(data: &mut [u8], flag_offset: usize, offset: usize, key: Option<Pubkey>) {
    if let Some(key) = key {
        put_u32(data, flag_offset, 1);
        data[offset..offset + 32].copy_from_slice(key.as_ref());
    }
}

/// Pack token account fields into the on-chain layout
fn encode_token_account(fields: &TokenAccountFields) -> Vec<u8> {
    let mut data = vec![0u8; TOKEN_ACCOUNT_SPAN];
    data[account::MINT..account::MINT + 32].copy_from_slice(fields.mint.as_ref());
    data[account::OWNER..account::OWNER + 32].copy_from_slice(fields.owner.as_ref());
    put_u64(&mut data, account::AMOUNT, fields.amount.parse().unwrap());
    put_option(&mut data, account::DELEGATE_FLAG, account::DELEGATE, fields.delegate);
    data[account::STATE] = u8::from(fields.state);
    if let Some(native) = &fields.is_native {
        put_u32(&mut data, account::IS_NATIVE_FLAG, 1);
        put_u64(&mut data, account::IS_NATIVE, native.parse().unwrap());
    }
    put_u64(&mut data, account::DELEGATED_AMOUNT, fields.delegated_amount.parse().unwrap());
    put_option(&mut data, account::CLOSE_AUTHORITY_FLAG, account::CLOSE_AUTHORITY, fields.close_authority);
    data
}

/// Pack mint fields into the on-chain layout
fn encode_token_mint(fields: &TokenMintFields) -> Vec<u8> {
    let mut data = vec![0u8; TOKEN_MINT_SPAN];
    put_option(&mut data, mint::MINT_AUTHORITY_FLAG, mint::MINT_AUTHORITY, fields.mint_authority);
    put_u64(&mut data, mint::SUPPLY, fields.supply.parse().unwrap());
    data[mint::DECIMALS] = fields.decimals;
    data[mint::IS_INITIALIZED] = fields.is_initialized as u8;
    put_option(&mut data, mint::FREEZE_AUTHORITY_FLAG, mint::FREEZE_AUTHORITY, fields.freeze_authority);
    data
}

fn record(owner: Pubkey, len: usize, executable: bool) -> AccountRecord {
    AccountRecord {
        executable,
        ..AccountRecord::new(owner, vec![1u8; len])
    }
}

#[rstest]
#[case(TOKEN_PROGRAM, TOKEN_ACCOUNT_SPAN, false, Category::TokenAccount)]
#[case(TOKEN_PROGRAM, TOKEN_ACCOUNT_SPAN, true, Category::TokenAccount)]
#[case(TOKEN_PROGRAM, TOKEN_MINT_SPAN, false, Category::TokenMint)]
#[case(TOKEN_PROGRAM, TOKEN_MINT_SPAN, true, Category::TokenMint)]
#[case(SYSTEM_PROGRAM, 0, false, Category::SystemAccount)]
#[case(SYSTEM_PROGRAM, 0, true, Category::SystemAccount)]
#[case(SYSTEM_PROGRAM, 8, false, Category::CustomProgramAccount)]
#[case(SYSTEM_PROGRAM, 8, true, Category::ProgramAccount)]
#[case(TOKEN_PROGRAM, 100, false, Category::CustomProgramAccount)]
#[case(TOKEN_PROGRAM, 100, true, Category::ProgramAccount)]
#[case(TOKEN_PROGRAM, 0, false, Category::CustomProgramAccount)]
fn test_classify_priority(
    #[case] owner: Pubkey,
    #[case] len: usize,
    #[case] executable: bool,
    #[case] expected: Category,
) {
    assert_eq!(classify(&record(owner, len, executable)), expected);
}

#[test]
fn test_classify_other_owners() {
    let program = Pubkey::new_unique();
    assert_eq!(classify(&record(program, 0, false)), Category::CustomProgramAccount);
    assert_eq!(classify(&record(program, 36, true)), Category::ProgramAccount);
    // Spans only count under the token program
    assert_eq!(classify(&record(program, TOKEN_ACCOUNT_SPAN, false)), Category::CustomProgramAccount);
    assert_eq!(classify(&record(program, TOKEN_MINT_SPAN, true)), Category::ProgramAccount);
}

#[test]
fn test_system_account_has_nothing_decoded() {
    let result = classify_account(&AccountRecord::new(SYSTEM_PROGRAM, Vec::new()));
    assert_eq!(result.category, Category::SystemAccount);
    assert!(result.decoded.is_none());
    assert!(result.raw_preview.is_none());
}

#[test]
fn test_program_account_has_nothing_decoded() {
    let result = classify_account(&record(Pubkey::new_unique(), 36, true));
    assert_eq!(result.category, Category::ProgramAccount);
    assert!(result.decoded.is_none());
    assert!(result.raw_preview.is_none());
}

#[test]
fn test_token_account_amount_one() {
    let mut data = vec![0u8; TOKEN_ACCOUNT_SPAN];
    data[account::MINT..account::MINT + 32].copy_from_slice(&[1u8; 32]);
    data[account::AMOUNT..account::AMOUNT + 8].copy_from_slice(&[1, 0, 0, 0, 0, 0, 0, 0]);

    let result = classify_account(&AccountRecord::new(TOKEN_PROGRAM, data));
    assert_eq!(result.category, Category::TokenAccount);

    let fields = result.token_account().expect("token account should decode");
    assert_eq!(fields.amount, "1");
    assert_eq!(fields.mint, Pubkey::new_from_array([1u8; 32]));
    assert_eq!(fields.owner, SYSTEM_PROGRAM);
    assert_eq!(fields.state, AccountState::Uninitialized);
    assert_eq!(fields.delegate, None);
    assert_eq!(fields.delegated_amount, "0");
    assert_eq!(fields.is_native, None);
    assert_eq!(fields.close_authority, None);
}

#[test]
fn test_token_account_round_trip() {
    let fields = TokenAccountFields {
        mint: Pubkey::new_unique(),
        owner: Pubkey::new_unique(),
        amount: u64::MAX.to_string(),
        delegate: Some(Pubkey::new_unique()),
        delegated_amount: "500".to_string(),
        state: AccountState::Frozen,
        is_native: Some("2039280".to_string()),
        close_authority: Some(Pubkey::new_unique()),
    };

    let data = encode_token_account(&fields);
    assert_eq!(decode_token_account(&data).unwrap(), fields);
}

#[test]
fn test_token_account_round_trip_without_options() {
    let fields = TokenAccountFields {
        mint: Pubkey::new_unique(),
        owner: Pubkey::new_unique(),
        amount: "1000000000".to_string(),
        delegate: None,
        delegated_amount: "0".to_string(),
        state: AccountState::Initialized,
        is_native: None,
        close_authority: None,
    };

    let data = encode_token_account(&fields);
    assert_eq!(decode_token_account(&data).unwrap(), fields);
}

#[test]
fn test_unset_flags_ignore_slot_contents() {
    let mut data = vec![0xffu8; TOKEN_ACCOUNT_SPAN];
    put_u32(&mut data, account::DELEGATE_FLAG, 0);
    put_u32(&mut data, account::IS_NATIVE_FLAG, 0);
    put_u32(&mut data, account::CLOSE_AUTHORITY_FLAG, 0);

    let fields = decode_token_account(&data).unwrap();
    assert_eq!(fields.delegate, None);
    assert_eq!(fields.delegated_amount, "0");
    assert_eq!(fields.is_native, None);
    assert_eq!(fields.close_authority, None);
    assert_eq!(fields.state, AccountState::Unknown(255));
}

#[test]
fn test_nonzero_flag_counts_as_present() {
    let delegate = Pubkey::new_unique();
    let mut data = vec![0u8; TOKEN_ACCOUNT_SPAN];
    put_u32(&mut data, account::DELEGATE_FLAG, 7);
    data[account::DELEGATE..account::DELEGATE + 32].copy_from_slice(delegate.as_ref());
    put_u64(&mut data, account::DELEGATED_AMOUNT, 25);

    let fields = decode_token_account(&data).unwrap();
    assert_eq!(fields.delegate, Some(delegate));
    assert_eq!(fields.delegated_amount, "25");
}

#[rstest]
#[case(3)]
#[case(17)]
#[case(255)]
fn test_unknown_state_keeps_value(#[case] byte: u8) {
    let mut data = vec![0u8; TOKEN_ACCOUNT_SPAN];
    data[account::STATE] = byte;

    let result = classify_account(&AccountRecord::new(TOKEN_PROGRAM, data));
    let fields = result.token_account().unwrap();
    assert_eq!(fields.state.to_string(), format!("Unknown({})", byte));
}

#[test]
fn test_token_mint_round_trip() {
    let fields = TokenMintFields {
        mint_authority: Some(Pubkey::new_unique()),
        supply: "18446744073709551615".to_string(),
        decimals: 9,
        is_initialized: true,
        freeze_authority: Some(Pubkey::new_unique()),
    };

    let data = encode_token_mint(&fields);
    let result = classify_account(&AccountRecord::new(TOKEN_PROGRAM, data));
    assert_eq!(result.category, Category::TokenMint);
    assert_eq!(result.token_mint(), Some(&fields));
}

#[test]
fn test_token_mint_without_authorities() {
    let fields = TokenMintFields {
        mint_authority: None,
        supply: "0".to_string(),
        decimals: 0,
        is_initialized: false,
        freeze_authority: None,
    };

    let data = encode_token_mint(&fields);
    assert_eq!(decode_token_mint(&data).unwrap(), fields);
}

#[test]
fn test_custom_account_gets_preview() {
    let key = Pubkey::new_from_array([0x5a; 32]);
    let mut data = vec![0u8; 8];
    data.extend_from_slice(key.as_ref());
    data.extend_from_slice(&[0u8; 24]);

    let result = classify_account(&AccountRecord::new(Pubkey::new_unique(), data));
    assert_eq!(result.category, Category::CustomProgramAccount);
    assert!(result.decoded.is_none());

    let preview = result.raw_preview.expect("custom accounts carry a preview");
    assert_eq!(preview.length, 64);
    assert_eq!(preview.hex.len(), 128);
    // The key straddles both windows, so neither is all zero
    assert_eq!(preview.possible_pubkeys.len(), 2);
}

#[test]
fn test_scanner_three_candidates() {
    let keys = [Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
    let data: Vec<u8> = keys.iter().flat_map(|k| k.to_bytes()).collect();
    assert_eq!(data.len(), 96);

    let candidates = extract_possible_pubkeys(&data);
    let offsets: Vec<usize> = candidates.iter().map(|c| c.offset).collect();
    assert_eq!(offsets, vec![0, 32, 64]);
    for (candidate, key) in candidates.iter().zip(keys.iter()) {
        assert_eq!(&candidate.pubkey, key);
    }
}

#[test]
fn test_scanner_no_candidates() {
    assert!(extract_possible_pubkeys(&[0u8; 96]).is_empty());
    assert!(extract_possible_pubkeys(&[0xabu8; 31]).is_empty());
    assert!(extract_possible_pubkeys(&[]).is_empty());
}

#[test]
fn test_analyze_envelope() {
    let owner = Pubkey::new_unique();
    let record = AccountRecord {
        owner,
        data: vec![9u8; 10],
        executable: false,
        lamports: 1_000_000,
        rent_epoch: 18_446_744_073_709_551_615,
    };
    let address = Pubkey::new_unique().to_string();

    let analysis = analyze(&address, &record);
    assert_eq!(analysis.address, address);
    assert_eq!(analysis.owner, owner);
    assert_eq!(analysis.lamports, 1_000_000);
    assert_eq!(analysis.data_length, 10);
    assert_eq!(analysis.rent_epoch, u64::MAX);
    assert_eq!(analysis.category(), Category::CustomProgramAccount);
    assert!(analysis.token_balance.is_none());

    // Input is untouched
    assert_eq!(record.data, vec![9u8; 10]);
}

#[test]
fn test_token_balance() {
    let account = TokenAccountFields {
        mint: Pubkey::new_unique(),
        owner: Pubkey::new_unique(),
        amount: "100000000000".to_string(),
        delegate: None,
        delegated_amount: "0".to_string(),
        state: AccountState::Initialized,
        is_native: None,
        close_authority: None,
    };
    let mint = TokenMintFields {
        mint_authority: None,
        supply: "100000000000".to_string(),
        decimals: 9,
        is_initialized: true,
        freeze_authority: None,
    };

    let balance = token_balance(&account, &mint).unwrap();
    assert_eq!(balance.mint, account.mint);
    assert_eq!(balance.decimals, 9);
    assert_eq!(balance.ui_amount, "100");

    let bad = TokenAccountFields { amount: "lots".to_string(), ..account };
    assert!(matches!(token_balance(&bad, &mint), Err(AnalyzerError::Decode(_))));
}
