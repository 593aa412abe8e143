//! NFT1 child token rules.
//!
//! A child is created by a GENESIS whose first input, and only that input,
//! spends a unit-bearing output of an NFT1 group token. It then moves with
//! ordinary SEND messages and can never be minted.

use slp_messages::{GenesisMessage, MessageBody, ProtocolMessage};
use slp_types::{RawOutput, TokenAmount, TokenType, TxInput};

use crate::error::InvalidReason;
use crate::type1::{check_transaction_shape, validate_genesis, validate_send};
use crate::verdict::TokenEffect;

/// Validate an NFT1 child token message.
pub fn validate_nft1_child(
    message: &ProtocolMessage,
    inputs: &[TxInput],
    outputs: &[RawOutput],
) -> Result<TokenEffect, InvalidReason> {
    check_transaction_shape(message, inputs, outputs)?;
    match &message.body {
        MessageBody::Genesis(genesis) => {
            check_child_genesis(genesis, inputs)?;
            validate_genesis(message.token_type, genesis, outputs)
        }
        MessageBody::Mint(_) => Err(InvalidReason::MintNotAllowedForNft1Child),
        MessageBody::Send(send) => validate_send(message.token_type, send, inputs, outputs),
    }
}

fn check_child_genesis(genesis: &GenesisMessage, inputs: &[TxInput]) -> Result<(), InvalidReason> {
    if genesis.decimals != 0 {
        return Err(InvalidReason::Nft1ChildDecimals(genesis.decimals));
    }
    if let Some(vout) = genesis.mint_baton_vout {
        return Err(InvalidReason::Nft1ChildBaton(vout));
    }
    if genesis.initial_quantity != TokenAmount::ONE {
        return Err(InvalidReason::Nft1ChildQuantity(genesis.initial_quantity));
    }

    // The group parent is spent by input 0 and nowhere else.
    let is_group_unit = |input: &TxInput| {
        input
            .token
            .is_some_and(|token| token.token_type == TokenType::Nft1Group && !token.amount.is_zero())
    };
    let parent_first = inputs.first().is_some_and(is_group_unit);
    if !parent_first || inputs.iter().filter(|input| is_group_unit(input)).count() != 1 {
        return Err(InvalidReason::NoMintAuthority);
    }
    Ok(())
}
