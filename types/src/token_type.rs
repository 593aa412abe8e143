//! Token type (protocol version) identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypesError;

/// The token type carried in field 1 of every protocol message.
///
/// Type 1 is the fungible token. The NFT1 scheme reuses the type-1 rules
/// under two distinct type values: group tokens (0x81), whose units are
/// burned to authorize child GENESIS messages, and child tokens (0x41).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum TokenType {
    Fungible,
    Nft1Child,
    Nft1Group,
}

impl TokenType {
    pub const ALL: [TokenType; 3] = [Self::Fungible, Self::Nft1Child, Self::Nft1Group];

    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x01 => Some(Self::Fungible),
            0x41 => Some(Self::Nft1Child),
            0x81 => Some(Self::Nft1Group),
            _ => None,
        }
    }

    /// The protocol integer for this type.
    pub fn as_u16(&self) -> u16 {
        match self {
            Self::Fungible => 0x01,
            Self::Nft1Child => 0x41,
            Self::Nft1Group => 0x81,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fungible => "type1",
            Self::Nft1Child => "nft1-child",
            Self::Nft1Group => "nft1-group",
        }
    }
}

impl TryFrom<u16> for TokenType {
    type Error = TypesError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_u16(value).ok_or(TypesError::UnknownTokenType(value))
    }
}

impl From<TokenType> for u16 {
    fn from(token_type: TokenType) -> Self {
        token_type.as_u16()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x})", self.as_str(), self.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_roundtrip() {
        for token_type in TokenType::ALL {
            assert_eq!(TokenType::from_u16(token_type.as_u16()), Some(token_type));
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert_eq!(TokenType::from_u16(2), None);
        assert!(matches!(
            TokenType::try_from(0x42),
            Err(TypesError::UnknownTokenType(0x42))
        ));
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&TokenType::Nft1Group).unwrap(), "129");
        let parsed: TokenType = serde_json::from_str("65").unwrap();
        assert_eq!(parsed, TokenType::Nft1Child);
        assert!(serde_json::from_str::<TokenType>("3").is_err());
    }
}
