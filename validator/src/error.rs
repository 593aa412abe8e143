//! Reasons a token transaction is rejected or not judged.

use serde::{Deserialize, Serialize};
use slp_messages::DecodeError;
use slp_types::{TokenAmount, TokenId, TokenType};
use thiserror::Error;

/// Why a transaction is not a valid token transaction.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InvalidReason {
    #[error("message failed to decode: {0}")]
    Decode(DecodeError),

    #[error("output 0 is not a data-carrying output")]
    MissingDataOutput,

    #[error("output {vout} carries a second protocol message")]
    DuplicateMessage { vout: usize },

    #[error("mint baton output {vout} is not a value output of this {output_count}-output transaction")]
    BadBatonIndex { vout: u8, output_count: usize },

    #[error("{0} decimals exceeds the maximum of 9")]
    DecimalsOutOfRange(u8),

    #[error("no input carries minting authority for this token")]
    NoMintAuthority,

    #[error("{declared} output quantities declared for {available} token outputs")]
    OutputCountMismatch { declared: usize, available: usize },

    #[error("outputs require {required} tokens but inputs provide {available}")]
    InsufficientInputs {
        required: TokenAmount,
        available: TokenAmount,
    },

    #[error("token quantities overflow")]
    QuantityOverflow,

    #[error("input holds token type {found} but the message declares {expected}")]
    TokenTypeMismatch {
        expected: TokenType,
        found: TokenType,
    },

    #[error("NFT1 child tokens cannot be minted")]
    MintNotAllowedForNft1Child,

    #[error("NFT1 child token must have 0 decimals, got {0}")]
    Nft1ChildDecimals(u8),

    #[error("NFT1 child token cannot have a mint baton (declared on output {0})")]
    Nft1ChildBaton(u8),

    #[error("NFT1 child token must have a GENESIS quantity of 1, got {0}")]
    Nft1ChildQuantity(TokenAmount),

    #[error("expected {expected} tokens to be burned, transaction burns {actual}")]
    UnexpectedBurn {
        expected: TokenAmount,
        actual: TokenAmount,
    },
}

/// Why a transaction was not judged at all.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum UnsupportedReason {
    #[error("message not supported: {0}")]
    Decode(DecodeError),

    #[error("validator only accepts token type {enforced}, message is {found}")]
    TokenTypeNotEnforced {
        enforced: TokenType,
        found: TokenType,
    },

    #[error("validator only accepts token {expected}")]
    TokenIdFiltered {
        expected: TokenId,
        found: Option<TokenId>,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Read(String),

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("cannot serialize config: {0}")]
    Serialize(String),
}
