//! SLP protocol messages.
//!
//! A message lives in the data-carrying output of a transaction as a
//! push-only OP_RETURN script. [`decode`] turns that script into a typed
//! [`ProtocolMessage`] or a [`DecodeError`]; [`encode`] does the reverse.
//! Neither knows anything about transactions.

pub mod decode;
pub mod encode;
pub mod error;
pub mod message;
pub mod script;

pub use decode::decode;
pub use encode::encode;
pub use error::{DecodeError, EncodeError, FieldError};
pub use message::{
    GenesisMessage, MessageBody, MessageKind, MintMessage, ProtocolMessage, SendMessage,
};
