//! Raw data preview for accounts with no known layout

use solana_pubkey::Pubkey;

use crate::constants::{PUBKEY_BYTES, RAW_PREVIEW_LEN};
use crate::models::{PubkeyCandidate, RawPreview};

/// Build a preview of the leading bytes plus address hints from the whole buffer
pub fn raw_preview(data: &[u8]) -> RawPreview {
    let preview = &data[..data.len().min(RAW_PREVIEW_LEN)];

    RawPreview {
        hex: hex::encode(preview),
        base64: base64::encode(preview),
        length: data.len(),
        possible_pubkeys: extract_possible_pubkeys(data),
    }
}

/// Scan non-overlapping 32-byte windows for plausible addresses
///
/// All-zero windows are treated as unset space and skipped, so the system
/// program id (`11111111111111111111111111111111`) is never reported even
/// when it is embedded in the data. A trailing partial window is ignored.
pub fn extract_possible_pubkeys(data: &[u8]) -> Vec<PubkeyCandidate> {
    data.chunks_exact(PUBKEY_BYTES)
        .enumerate()
        .filter_map(|(index, window)| {
            parse_window(window).map(|pubkey| PubkeyCandidate {
                offset: index * PUBKEY_BYTES,
                pubkey,
            })
        })
        .collect()
}

/// All-zero windows are unset space, not addresses
fn parse_window(window: &[u8]) -> Option<Pubkey> {
    if window.iter().all(|&b| b == 0) {
        return None;
    }
    Pubkey::try_from(window).ok()
}
