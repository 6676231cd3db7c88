//! Serde helpers rendering public keys as base58 strings

use serde::{Deserialize, Deserializer, Serializer};
use solana_pubkey::Pubkey;
use std::str::FromStr;

pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&bs58::encode(pubkey.as_ref()).into_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
    let s = String::deserialize(deserializer)?;
    Pubkey::from_str(&s).map_err(serde::de::Error::custom)
}

/// Same as the parent module, for presence-flagged fields
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(pubkey: &Option<Pubkey>, serializer: S) -> Result<S::Ok, S::Error> {
        match pubkey {
            Some(pubkey) => super::serialize(pubkey, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Pubkey>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| Pubkey::from_str(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
