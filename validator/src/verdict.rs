//! Validation outcomes.

use serde::{Deserialize, Serialize};
use slp_messages::{DecodeError, MessageKind};
use slp_types::{InputTokenView, TokenAmount, TokenId, TokenType, TxId};

use crate::error::{InvalidReason, UnsupportedReason};

/// The outcome of validating one transaction. Every call returns one of
/// these; none of them is a fault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationVerdict {
    Valid(TokenEffect),
    Invalid(InvalidReason),
    Unsupported(UnsupportedReason),
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn effect(&self) -> Option<&TokenEffect> {
        match self {
            Self::Valid(effect) => Some(effect),
            _ => None,
        }
    }

    /// Short label for logs and reports.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Valid(_) => "valid",
            Self::Invalid(_) => "invalid",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

impl From<DecodeError> for ValidationVerdict {
    /// Unimplemented message kinds are unsupported; every other decode
    /// failure makes the transaction invalid.
    fn from(err: DecodeError) -> Self {
        if err.is_unsupported() {
            Self::Unsupported(UnsupportedReason::Decode(err))
        } else {
            Self::Invalid(InvalidReason::Decode(err))
        }
    }
}

/// Which token a valid transaction acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenBinding {
    /// A GENESIS: the token id is the id of this transaction.
    NewGenesis,
    Existing(TokenId),
}

impl TokenBinding {
    /// The token id, given the id of the transaction that was validated.
    pub fn resolve(&self, txid: TxId) -> TokenId {
        match self {
            Self::NewGenesis => TokenId::from(txid),
            Self::Existing(token_id) => *token_id,
        }
    }
}

/// What one transaction output receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEffect {
    pub amount: TokenAmount,
    pub is_baton: bool,
}

/// The effect of a valid token transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEffect {
    pub token_type: TokenType,
    pub kind: MessageKind,
    pub token: TokenBinding,
    /// One entry per transaction output, in output order.
    pub outputs: Vec<OutputEffect>,
    /// Tokens of this token spent by the inputs.
    pub input_amount: TokenAmount,
    /// Tokens assigned to outputs.
    pub output_amount: TokenAmount,
    /// Tokens of this token destroyed by the transaction.
    pub burned: TokenAmount,
}

impl TokenEffect {
    pub(crate) fn new(
        token_type: TokenType,
        kind: MessageKind,
        token: TokenBinding,
        output_count: usize,
    ) -> Self {
        Self {
            token_type,
            kind,
            token,
            outputs: vec![OutputEffect::default(); output_count],
            input_amount: TokenAmount::ZERO,
            output_amount: TokenAmount::ZERO,
            burned: TokenAmount::ZERO,
        }
    }

    /// Assign `amount` to output `vout`. Returns `false`, leaving the effect
    /// untouched, when the transaction has no such output.
    pub(crate) fn credit(&mut self, vout: usize, amount: TokenAmount) -> bool {
        match self.outputs.get_mut(vout) {
            Some(output) => {
                output.amount = amount;
                true
            }
            None => false,
        }
    }

    pub(crate) fn grant_baton(&mut self, vout: usize) {
        if let Some(output) = self.outputs.get_mut(vout) {
            output.is_baton = true;
        }
    }

    /// The output that holds the mint baton after this transaction.
    pub fn baton_vout(&self) -> Option<usize> {
        self.outputs.iter().position(|output| output.is_baton)
    }

    /// The annotation a later spend of output `vout` carries, given the id
    /// of the transaction this effect belongs to. `None` for outputs that
    /// hold neither tokens nor the baton.
    pub fn annotation_for(&self, txid: TxId, vout: usize) -> Option<InputTokenView> {
        let output = self.outputs.get(vout)?;
        if output.amount.is_zero() && !output.is_baton {
            return None;
        }
        Some(InputTokenView {
            token_id: self.token.resolve(txid),
            token_type: self.token_type,
            amount: output.amount,
            is_baton: output.is_baton,
        })
    }
}
