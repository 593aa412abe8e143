//! Decode and encode errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::MessageKind;

/// Why a payload could not be decoded into a [`crate::ProtocolMessage`].
///
/// Field indices count data pushes after OP_RETURN, the lokad id being
/// field 0.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DecodeError {
    #[error("payload is not an SLP message")]
    NotProtocolMessage,

    #[error("field {index} declares {declared} bytes but only {remaining} remain")]
    Truncated {
        index: usize,
        declared: usize,
        remaining: usize,
    },

    #[error("field {index} is malformed: {reason}")]
    MalformedField { index: usize, reason: FieldError },

    #[error(
        "wrong number of fields for {}: found {found}",
        .kind.map_or("message header", |kind| kind.as_str())
    )]
    FieldCountMismatch {
        kind: Option<MessageKind>,
        found: usize,
    },

    #[error("unsupported message kind {0:?}")]
    UnsupportedKind(String),
}

impl DecodeError {
    pub fn malformed(index: usize, reason: FieldError) -> Self {
        Self::MalformedField { index, reason }
    }

    /// `true` for a well-formed message of a kind this decoder does not
    /// implement, as opposed to a broken one.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedKind(_))
    }
}

/// Type constraint violated by a single field.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FieldError {
    #[error("OP_0 is not allowed")]
    Op0NotAllowed,

    #[error("number opcode 0x{0:02x} is not allowed")]
    NumberOpcodeNotAllowed(u8),

    #[error("non-push opcode 0x{0:02x}")]
    NonPushOpcode(u8),

    #[error("expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("token type must be 1 or 2 bytes, got {0}")]
    TokenTypeLength(usize),

    #[error("unrecognized token type 0x{0:02x}")]
    UnknownTokenType(u16),

    #[error("{0} decimals exceeds the maximum of 9")]
    DecimalsOutOfRange(u8),

    #[error("baton field must be empty or 1 byte, got {0}")]
    BatonLength(usize),

    #[error("mint baton cannot be on output {0}")]
    BatonVoutTooLow(u8),

    #[error("document hash must be empty or 32 bytes, got {0}")]
    DocumentHashLength(usize),
}

/// Why a message could not be encoded into a payload the decoder accepts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("SEND must carry at least one output quantity")]
    EmptySendOutputs,

    #[error("SEND carries {0} output quantities, at most 19 are allowed")]
    TooManySendOutputs(usize),

    #[error("{0} decimals exceeds the maximum of 9")]
    DecimalsOutOfRange(u8),

    #[error("mint baton cannot be on output {0}")]
    BatonVoutTooLow(u8),

    #[error("field of {0} bytes cannot be pushed")]
    FieldTooLarge(usize),
}
