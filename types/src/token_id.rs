//! Token identifier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::TypesError;
use crate::hash::TxId;

/// Length in bytes of a token id as it appears in MINT and SEND messages.
pub const TOKEN_ID_LEN: usize = 32;

/// Identifies a token lineage.
///
/// A token id is the id of the transaction carrying the token's GENESIS
/// message. MINT and SEND messages reference it verbatim.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenId([u8; TOKEN_ID_LEN]);

impl TokenId {
    pub const ZERO: Self = Self([0u8; TOKEN_ID_LEN]);

    pub const fn new(bytes: [u8; TOKEN_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a token id from a slice, returning `None` unless it is exactly
    /// [`TOKEN_ID_LEN`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; TOKEN_ID_LEN]>::try_from(bytes).ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; TOKEN_ID_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; TOKEN_ID_LEN]
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        parse_hex32(s).map(Self)
    }
}

impl From<TxId> for TokenId {
    fn from(txid: TxId) -> Self {
        Self(*txid.as_bytes())
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

pub(crate) fn parse_hex32(s: &str) -> Result<[u8; 32], TypesError> {
    let bytes = hex::decode(s).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
    let len = bytes.len();
    <[u8; 32]>::try_from(bytes).map_err(|_| TypesError::InvalidLength {
        expected: 32,
        actual: len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let id = TokenId::new([0xab; 32]);
        let parsed = TokenId::from_hex(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn from_hex_rejects_short_input() {
        let err = TokenId::from_hex("abcd").unwrap_err();
        assert!(matches!(
            err,
            TypesError::InvalidLength {
                expected: 32,
                actual: 2
            }
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(matches!(
            TokenId::from_hex("zz"),
            Err(TypesError::InvalidHex(_))
        ));
    }

    #[test]
    fn from_slice_requires_exact_length() {
        assert!(TokenId::from_slice(&[1u8; 31]).is_none());
        assert!(TokenId::from_slice(&[1u8; 33]).is_none());
        assert_eq!(TokenId::from_slice(&[1u8; 32]), Some(TokenId::new([1u8; 32])));
    }

    #[test]
    fn genesis_txid_becomes_token_id() {
        let txid = TxId::new([7u8; 32]);
        assert_eq!(TokenId::from(txid).as_bytes(), txid.as_bytes());
    }

    #[test]
    fn serializes_as_hex_string() {
        let id = TokenId::new([0x01; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        let back: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
