//! Read-only view of a ledger transaction as seen by the token layer.
//!
//! The ledger's own transaction format is out of scope; callers build a
//! [`TransactionView`] from whatever representation they hold.

use serde::{Deserialize, Serialize};

use crate::amount::TokenAmount;
use crate::hash::OutPoint;
use crate::token_id::TokenId;
use crate::token_type::TokenType;

/// Classification of a transaction output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputKind {
    /// Unspendable output carrying a data payload (OP_RETURN).
    Data,
    /// Spendable output locked to an address or script.
    Value,
}

/// A transaction output exactly as observed on the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOutput {
    pub kind: OutputKind,
    /// Data payload for `Data` outputs, locking script for `Value` outputs.
    pub script: Vec<u8>,
    /// Native ledger value in base units.
    pub value: u64,
}

impl RawOutput {
    pub fn data(script: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: OutputKind::Data,
            script: script.into(),
            value: 0,
        }
    }

    pub fn value(script: impl Into<Vec<u8>>, value: u64) -> Self {
        Self {
            kind: OutputKind::Value,
            script: script.into(),
            value,
        }
    }

    pub fn is_data(&self) -> bool {
        self.kind == OutputKind::Data
    }
}

/// Token facts about a spent output, as proven by the token graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputTokenView {
    pub token_id: TokenId,
    pub token_type: TokenType,
    pub amount: TokenAmount,
    /// Whether the spent output holds the mint baton for `token_id`.
    pub is_baton: bool,
}

impl InputTokenView {
    /// An input holding `amount` tokens.
    pub fn holding(token_id: TokenId, token_type: TokenType, amount: TokenAmount) -> Self {
        Self {
            token_id,
            token_type,
            amount,
            is_baton: false,
        }
    }

    /// An input holding the mint baton.
    pub fn baton(token_id: TokenId, token_type: TokenType) -> Self {
        Self {
            token_id,
            token_type,
            amount: TokenAmount::ZERO,
            is_baton: true,
        }
    }
}

/// A transaction input. Inputs without a token annotation carry no tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub prevout: OutPoint,
    pub token: Option<InputTokenView>,
}

impl TxInput {
    pub fn plain(prevout: OutPoint) -> Self {
        Self {
            prevout,
            token: None,
        }
    }

    pub fn with_token(prevout: OutPoint, token: InputTokenView) -> Self {
        Self {
            prevout,
            token: Some(token),
        }
    }
}

/// Ordered inputs and outputs of one transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<RawOutput>,
}

impl TransactionView {
    pub fn new(inputs: Vec<TxInput>, outputs: Vec<RawOutput>) -> Self {
        Self { inputs, outputs }
    }

    /// The payload of output 0 when it is a data output; protocol messages
    /// are only ever read from there.
    pub fn protocol_payload(&self) -> Option<&[u8]> {
        self.outputs
            .first()
            .filter(|output| output.is_data())
            .map(|output| output.script.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::TxId;

    #[test]
    fn payload_comes_from_first_data_output() {
        let tx = TransactionView::new(
            vec![TxInput::plain(OutPoint::new(TxId::new([1; 32]), 0))],
            vec![RawOutput::data(vec![0x6a]), RawOutput::value(vec![0x76], 546)],
        );
        assert_eq!(tx.protocol_payload(), Some(&[0x6a][..]));
    }

    #[test]
    fn no_payload_when_first_output_holds_value() {
        let tx = TransactionView::new(
            Vec::new(),
            vec![RawOutput::value(vec![0x76], 546), RawOutput::data(vec![0x6a])],
        );
        assert_eq!(tx.protocol_payload(), None);
        assert_eq!(TransactionView::default().protocol_payload(), None);
    }
}
