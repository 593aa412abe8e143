//! Payload encoding.
//!
//! Produces the canonical script for a message: OP_RETURN, the lokad id,
//! then one minimal push per field. Anything [`crate::decode`] would refuse
//! is refused here too, so a successful encode always decodes back to an
//! equal message.

use slp_types::params::{LOKAD_ID, MAX_DECIMALS, MAX_SEND_OUTPUTS, MIN_BATON_VOUT};
use slp_types::TokenType;

use crate::error::EncodeError;
use crate::message::{GenesisMessage, MessageBody, MintMessage, ProtocolMessage, SendMessage};
use crate::script::{push_data, OP_RETURN};

/// Encode a message as the script of a data-carrying output.
pub fn encode(message: &ProtocolMessage) -> Result<Vec<u8>, EncodeError> {
    let mut script = vec![OP_RETURN];
    push_data(&mut script, LOKAD_ID);
    push_token_type(&mut script, message.token_type);
    push_data(&mut script, message.kind().as_bytes());

    match &message.body {
        MessageBody::Genesis(genesis) => encode_genesis(&mut script, genesis)?,
        MessageBody::Mint(mint) => encode_mint(&mut script, mint)?,
        MessageBody::Send(send) => encode_send(&mut script, send)?,
    }
    Ok(script)
}

fn push_token_type(script: &mut Vec<u8>, token_type: TokenType) {
    match u8::try_from(token_type.as_u16()) {
        Ok(byte) => push_data(script, &[byte]),
        Err(_) => push_data(script, &token_type.as_u16().to_be_bytes()),
    }
}

fn push_field(script: &mut Vec<u8>, data: &[u8]) -> Result<(), EncodeError> {
    if u32::try_from(data.len()).is_err() {
        return Err(EncodeError::FieldTooLarge(data.len()));
    }
    push_data(script, data);
    Ok(())
}

fn push_baton(script: &mut Vec<u8>, vout: Option<u8>) -> Result<(), EncodeError> {
    match vout {
        Some(vout) if vout < MIN_BATON_VOUT => Err(EncodeError::BatonVoutTooLow(vout)),
        Some(vout) => {
            push_data(script, &[vout]);
            Ok(())
        }
        None => {
            push_data(script, &[]);
            Ok(())
        }
    }
}

fn encode_genesis(script: &mut Vec<u8>, genesis: &GenesisMessage) -> Result<(), EncodeError> {
    if genesis.decimals > MAX_DECIMALS {
        return Err(EncodeError::DecimalsOutOfRange(genesis.decimals));
    }
    push_field(script, &genesis.ticker)?;
    push_field(script, &genesis.name)?;
    push_field(script, &genesis.document_uri)?;
    match &genesis.document_hash {
        Some(hash) => push_data(script, hash),
        None => push_data(script, &[]),
    }
    push_data(script, &[genesis.decimals]);
    push_baton(script, genesis.mint_baton_vout)?;
    push_data(script, &genesis.initial_quantity.to_be_bytes());
    Ok(())
}

fn encode_mint(script: &mut Vec<u8>, mint: &MintMessage) -> Result<(), EncodeError> {
    push_data(script, mint.token_id.as_bytes());
    push_baton(script, mint.mint_baton_vout)?;
    push_data(script, &mint.quantity.to_be_bytes());
    Ok(())
}

fn encode_send(script: &mut Vec<u8>, send: &SendMessage) -> Result<(), EncodeError> {
    match send.output_amounts.len() {
        0 => return Err(EncodeError::EmptySendOutputs),
        n if n > MAX_SEND_OUTPUTS => return Err(EncodeError::TooManySendOutputs(n)),
        _ => {}
    }
    push_data(script, send.token_id.as_bytes());
    for amount in &send.output_amounts {
        push_data(script, &amount.to_be_bytes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use slp_types::{TokenAmount, TokenId};

    fn sample_genesis() -> GenesisMessage {
        GenesisMessage {
            ticker: b"TKN".to_vec(),
            name: b"Token".to_vec(),
            document_uri: Vec::new(),
            document_hash: Some([0x5a; 32]),
            decimals: 2,
            mint_baton_vout: Some(2),
            initial_quantity: TokenAmount::new(1_000_000),
        }
    }

    #[test]
    fn genesis_layout() {
        let msg = ProtocolMessage::genesis(TokenType::Fungible, sample_genesis());
        let script = encode(&msg).unwrap();
        assert_eq!(&script[..6], &[OP_RETURN, 0x04, b'S', b'L', b'P', 0x00]);
        assert_eq!(&script[6..8], &[0x01, 0x01]);
        assert_eq!(&script[8..16], b"\x07GENESIS");
        assert_eq!(decode(&script).unwrap(), msg);
    }

    #[test]
    fn nft1_group_type_is_one_byte() {
        let msg = ProtocolMessage::send(
            TokenType::Nft1Group,
            TokenId::new([3; 32]),
            vec![TokenAmount::ONE],
        );
        let script = encode(&msg).unwrap();
        assert_eq!(&script[6..8], &[0x01, 0x81]);
        assert_eq!(decode(&script).unwrap(), msg);
    }

    #[test]
    fn mint_roundtrip_without_baton() {
        let msg = ProtocolMessage::mint(
            TokenType::Fungible,
            MintMessage {
                token_id: TokenId::new([9; 32]),
                mint_baton_vout: None,
                quantity: TokenAmount::MAX,
            },
        );
        assert_eq!(decode(&encode(&msg).unwrap()).unwrap(), msg);
    }

    #[test]
    fn refuses_undecodable_messages() {
        let empty = ProtocolMessage::send(TokenType::Fungible, TokenId::ZERO, Vec::new());
        assert_eq!(encode(&empty), Err(EncodeError::EmptySendOutputs));

        let too_many =
            ProtocolMessage::send(TokenType::Fungible, TokenId::ZERO, vec![TokenAmount::ONE; 20]);
        assert_eq!(encode(&too_many), Err(EncodeError::TooManySendOutputs(20)));

        let mut genesis = sample_genesis();
        genesis.decimals = 10;
        assert_eq!(
            encode(&ProtocolMessage::genesis(TokenType::Fungible, genesis)),
            Err(EncodeError::DecimalsOutOfRange(10))
        );

        let mut genesis = sample_genesis();
        genesis.mint_baton_vout = Some(1);
        assert_eq!(
            encode(&ProtocolMessage::genesis(TokenType::Fungible, genesis)),
            Err(EncodeError::BatonVoutTooLow(1))
        );
    }
}
