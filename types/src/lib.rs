//! Fundamental types for the SLP token layer.
//!
//! Identifiers, quantities, token types, the read-only transaction view the
//! validator consumes, and the protocol constants shared across the
//! workspace.

pub mod amount;
pub mod error;
pub mod hash;
pub mod params;
pub mod token_id;
pub mod token_type;
pub mod transaction;

pub use amount::TokenAmount;
pub use error::TypesError;
pub use hash::{OutPoint, TxId};
pub use token_id::{TokenId, TOKEN_ID_LEN};
pub use token_type::TokenType;
pub use transaction::{InputTokenView, OutputKind, RawOutput, TransactionView, TxInput};
