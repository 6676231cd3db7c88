//! Utility functions and helpers

use crate::constants::LAMPORTS_PER_SOL;

/// Render a raw token amount with the given number of decimals
///
/// Integer arithmetic only, so large supplies keep every digit. Trailing
/// fractional zeros are dropped.
pub fn ui_amount(raw: u64, decimals: u8) -> String {
    let digits = raw.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Render a lamport balance in SOL
pub fn lamports_to_sol(lamports: u64) -> String {
    ui_amount(lamports, LAMPORTS_PER_SOL.ilog10() as u8)
}
