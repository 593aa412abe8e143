//! Type-1 token rules.
//!
//! Fungible tokens and NFT1 group tokens follow these rules unchanged. The
//! NFT1 child rules in [`crate::nft1`] reuse the pieces below and restrict
//! them further.

use slp_messages::{decode, GenesisMessage, MessageBody, MessageKind, MintMessage, ProtocolMessage, SendMessage};
use slp_types::params::{MAX_DECIMALS, MAX_SEND_OUTPUTS, MIN_BATON_VOUT, TOKEN_OUTPUT_INDEX};
use slp_types::{InputTokenView, RawOutput, TokenAmount, TokenId, TokenType, TxInput};

use crate::error::InvalidReason;
use crate::verdict::{TokenBinding, TokenEffect};

/// Validate a fungible or NFT1 group token message.
pub fn validate_type1(
    message: &ProtocolMessage,
    inputs: &[TxInput],
    outputs: &[RawOutput],
) -> Result<TokenEffect, InvalidReason> {
    check_transaction_shape(message, inputs, outputs)?;
    match &message.body {
        MessageBody::Genesis(genesis) => validate_genesis(message.token_type, genesis, outputs),
        MessageBody::Mint(mint) => validate_mint(message.token_type, mint, inputs, outputs),
        MessageBody::Send(send) => validate_send(message.token_type, send, inputs, outputs),
    }
}

/// Checks every message kind shares: the message sits alone in output 0,
/// and inputs holding the referenced token agree on its type.
pub(crate) fn check_transaction_shape(
    message: &ProtocolMessage,
    inputs: &[TxInput],
    outputs: &[RawOutput],
) -> Result<(), InvalidReason> {
    match outputs.first() {
        Some(output) if output.is_data() => {}
        _ => return Err(InvalidReason::MissingDataOutput),
    }

    if let Some((vout, _)) = outputs
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, output)| output.is_data() && decode(&output.script).is_ok())
    {
        return Err(InvalidReason::DuplicateMessage { vout });
    }

    if let Some(token_id) = message.token_id() {
        if let Some(input) = tokens_of(inputs, token_id).find(|t| t.token_type != message.token_type) {
            return Err(InvalidReason::TokenTypeMismatch {
                expected: message.token_type,
                found: input.token_type,
            });
        }
    }
    Ok(())
}

/// Annotations of the inputs holding `token_id`.
pub(crate) fn tokens_of<'a>(
    inputs: &'a [TxInput],
    token_id: TokenId,
) -> impl Iterator<Item = &'a InputTokenView> + 'a {
    inputs
        .iter()
        .filter_map(|input| input.token.as_ref())
        .filter(move |token| token.token_id == token_id)
}

/// A baton must land on an existing value output past the token output.
pub(crate) fn check_baton_vout(vout: u8, outputs: &[RawOutput]) -> Result<(), InvalidReason> {
    let index = usize::from(vout);
    let usable = vout >= MIN_BATON_VOUT && outputs.get(index).is_some_and(|o| !o.is_data());
    if usable {
        Ok(())
    } else {
        Err(InvalidReason::BadBatonIndex {
            vout,
            output_count: outputs.len(),
        })
    }
}

/// Credit a GENESIS or MINT quantity to the token output, burning it when
/// the transaction has no such output.
fn issue(effect: &mut TokenEffect, quantity: TokenAmount) -> Result<(), InvalidReason> {
    if effect.credit(TOKEN_OUTPUT_INDEX, quantity) {
        effect.output_amount = quantity;
    } else {
        effect.burned = effect
            .burned
            .checked_add(quantity)
            .ok_or(InvalidReason::QuantityOverflow)?;
    }
    Ok(())
}

pub(crate) fn validate_genesis(
    token_type: TokenType,
    genesis: &GenesisMessage,
    outputs: &[RawOutput],
) -> Result<TokenEffect, InvalidReason> {
    if genesis.decimals > MAX_DECIMALS {
        return Err(InvalidReason::DecimalsOutOfRange(genesis.decimals));
    }
    if let Some(vout) = genesis.mint_baton_vout {
        check_baton_vout(vout, outputs)?;
    }

    let mut effect = TokenEffect::new(
        token_type,
        MessageKind::Genesis,
        TokenBinding::NewGenesis,
        outputs.len(),
    );
    issue(&mut effect, genesis.initial_quantity)?;
    if let Some(vout) = genesis.mint_baton_vout {
        effect.grant_baton(usize::from(vout));
    }
    Ok(effect)
}

pub(crate) fn validate_mint(
    token_type: TokenType,
    mint: &MintMessage,
    inputs: &[TxInput],
    outputs: &[RawOutput],
) -> Result<TokenEffect, InvalidReason> {
    if !tokens_of(inputs, mint.token_id).any(|token| token.is_baton) {
        return Err(InvalidReason::NoMintAuthority);
    }
    if let Some(vout) = mint.mint_baton_vout {
        check_baton_vout(vout, outputs)?;
    }

    let mut effect = TokenEffect::new(
        token_type,
        MessageKind::Mint,
        TokenBinding::Existing(mint.token_id),
        outputs.len(),
    );
    // A MINT carries no spent tokens forward.
    effect.input_amount = TokenAmount::checked_sum(tokens_of(inputs, mint.token_id).map(|t| t.amount))
        .ok_or(InvalidReason::QuantityOverflow)?;
    effect.burned = effect.input_amount;
    issue(&mut effect, mint.quantity)?;
    if let Some(vout) = mint.mint_baton_vout {
        effect.grant_baton(usize::from(vout));
    }
    Ok(effect)
}

pub(crate) fn validate_send(
    token_type: TokenType,
    send: &SendMessage,
    inputs: &[TxInput],
    outputs: &[RawOutput],
) -> Result<TokenEffect, InvalidReason> {
    let declared = send.output_amounts.len();
    let available = outputs.len().saturating_sub(TOKEN_OUTPUT_INDEX);
    if declared == 0 || declared > MAX_SEND_OUTPUTS || declared > available {
        return Err(InvalidReason::OutputCountMismatch {
            declared,
            available,
        });
    }

    let output_amount = TokenAmount::checked_sum(send.output_amounts.iter().copied())
        .ok_or(InvalidReason::QuantityOverflow)?;
    let input_amount = TokenAmount::checked_sum(tokens_of(inputs, send.token_id).map(|t| t.amount))
        .ok_or(InvalidReason::QuantityOverflow)?;
    let burned = input_amount
        .checked_sub(output_amount)
        .ok_or(InvalidReason::InsufficientInputs {
            required: output_amount,
            available: input_amount,
        })?;

    let mut effect = TokenEffect::new(
        token_type,
        MessageKind::Send,
        TokenBinding::Existing(send.token_id),
        outputs.len(),
    );
    for (offset, amount) in send.output_amounts.iter().enumerate() {
        effect.credit(TOKEN_OUTPUT_INDEX + offset, *amount);
    }
    effect.input_amount = input_amount;
    effect.output_amount = output_amount;
    effect.burned = burned;
    Ok(effect)
}
