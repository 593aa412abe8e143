//! Validation entry points.

use slp_messages::{decode, MessageBody, MessageKind, ProtocolMessage};
use slp_types::{RawOutput, TokenType, TransactionView, TxInput};

use crate::config::ValidatorConfig;
use crate::error::InvalidReason;
use crate::nft1::validate_nft1_child;
use crate::type1::validate_type1;
use crate::verdict::ValidationVerdict;

/// Judge a decoded message against the inputs and outputs of its
/// transaction.
pub fn validate(
    message: &ProtocolMessage,
    inputs: &[TxInput],
    outputs: &[RawOutput],
    config: &ValidatorConfig,
) -> ValidationVerdict {
    let verdict = judge(message, inputs, outputs, config);
    tracing::debug!(
        token_type = %message.token_type,
        kind = message.kind().as_str(),
        verdict = verdict.category(),
        inputs = inputs.len(),
        outputs = outputs.len(),
        "token transaction judged"
    );
    if let (MessageBody::Genesis(genesis), true) = (&message.body, verdict.is_valid()) {
        tracing::debug!(
            ticker = %genesis.ticker_lossy(),
            supply = %genesis.initial_quantity.display_with_decimals(genesis.decimals),
            "token created"
        );
    }
    verdict
}

/// Decode `payload` and judge the result.
pub fn validate_payload(
    payload: &[u8],
    inputs: &[TxInput],
    outputs: &[RawOutput],
    config: &ValidatorConfig,
) -> ValidationVerdict {
    match decode(payload) {
        Ok(message) => validate(&message, inputs, outputs, config),
        Err(err) => {
            tracing::trace!(error = %err, payload_len = payload.len(), "token message failed to decode");
            let verdict = ValidationVerdict::from(err);
            tracing::debug!(verdict = verdict.category(), "token transaction judged");
            verdict
        }
    }
}

/// Judge a whole transaction. The message is read from output 0.
pub fn validate_transaction(tx: &TransactionView, config: &ValidatorConfig) -> ValidationVerdict {
    match tx.protocol_payload() {
        Some(payload) => validate_payload(payload, &tx.inputs, &tx.outputs, config),
        None => {
            tracing::debug!(outputs = tx.outputs.len(), "transaction has no data output 0");
            ValidationVerdict::Invalid(InvalidReason::MissingDataOutput)
        }
    }
}

fn judge(
    message: &ProtocolMessage,
    inputs: &[TxInput],
    outputs: &[RawOutput],
    config: &ValidatorConfig,
) -> ValidationVerdict {
    if let Err(reason) = config.admits(message) {
        return ValidationVerdict::Unsupported(reason);
    }

    let result = match message.token_type {
        TokenType::Fungible | TokenType::Nft1Group => validate_type1(message, inputs, outputs),
        TokenType::Nft1Child => validate_nft1_child(message, inputs, outputs),
    };
    let effect = match result {
        Ok(effect) => effect,
        Err(reason) => return ValidationVerdict::Invalid(reason),
    };

    if let (MessageKind::Send, Some(expected)) = (effect.kind, config.expected_burn) {
        if effect.burned != expected {
            return ValidationVerdict::Invalid(InvalidReason::UnexpectedBurn {
                expected,
                actual: effect.burned,
            });
        }
    }
    ValidationVerdict::Valid(effect)
}
