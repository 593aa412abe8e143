//! Payload decoding.
//!
//! Decoding is a pure function of the payload bytes. It runs in time linear
//! in the payload length and never allocates more than the payload holds:
//! field slices borrow from the input, and the only owned copies are of
//! bytes that are actually present.

use slp_types::params::{
    AMOUNT_LEN, DOCUMENT_HASH_LEN, GENESIS_FIELD_COUNT, LOKAD_ID, MAX_DECIMALS,
    MAX_SEND_OUTPUTS, MIN_BATON_VOUT, MINT_FIELD_COUNT,
};
use slp_types::{TokenAmount, TokenId, TokenType, TOKEN_ID_LEN};

use crate::error::{DecodeError, FieldError};
use crate::message::{
    GenesisMessage, MessageBody, MessageKind, MintMessage, ProtocolMessage, SendMessage,
};
use crate::script::{PushReader, OP_RETURN};

const TOKEN_TYPE_FIELD: usize = 1;
const KIND_FIELD: usize = 2;
/// lokad id, token type, kind, token id, first quantity
const MIN_SEND_FIELD_COUNT: usize = 5;

/// Decode the complete script of a protocol-carrying output.
pub fn decode(payload: &[u8]) -> Result<ProtocolMessage, DecodeError> {
    let body = match payload.split_first() {
        Some((&OP_RETURN, body)) => body,
        _ => return Err(DecodeError::NotProtocolMessage),
    };

    let mut reader = PushReader::new(body);
    match reader.next() {
        Some(Ok(prefix)) if prefix == LOKAD_ID.as_slice() => {}
        _ => return Err(DecodeError::NotProtocolMessage),
    }

    // Every push consumes at least one byte, so this is bounded by the
    // payload length.
    let mut fields: Vec<&[u8]> = Vec::with_capacity(GENESIS_FIELD_COUNT);
    fields.push(LOKAD_ID.as_slice());
    for push in reader {
        fields.push(push?);
    }

    let Some(&type_field) = fields.get(TOKEN_TYPE_FIELD) else {
        return Err(DecodeError::FieldCountMismatch {
            kind: None,
            found: fields.len(),
        });
    };
    let token_type = parse_token_type(type_field)?;

    let Some(&kind_field) = fields.get(KIND_FIELD) else {
        return Err(DecodeError::FieldCountMismatch {
            kind: None,
            found: fields.len(),
        });
    };
    let kind = MessageKind::from_bytes(kind_field).ok_or_else(|| {
        DecodeError::UnsupportedKind(String::from_utf8_lossy(kind_field).into_owned())
    })?;

    let body = match kind {
        MessageKind::Genesis => MessageBody::Genesis(parse_genesis(&fields)?),
        MessageKind::Mint => MessageBody::Mint(parse_mint(&fields)?),
        MessageKind::Send => MessageBody::Send(parse_send(&fields)?),
    };
    Ok(ProtocolMessage { token_type, body })
}

fn parse_genesis(fields: &[&[u8]]) -> Result<GenesisMessage, DecodeError> {
    if fields.len() != GENESIS_FIELD_COUNT {
        return Err(DecodeError::FieldCountMismatch {
            kind: Some(MessageKind::Genesis),
            found: fields.len(),
        });
    }

    let document_hash = match fields[6].len() {
        0 => None,
        DOCUMENT_HASH_LEN => {
            let mut hash = [0u8; DOCUMENT_HASH_LEN];
            hash.copy_from_slice(fields[6]);
            Some(hash)
        }
        len => {
            return Err(DecodeError::malformed(
                6,
                FieldError::DocumentHashLength(len),
            ))
        }
    };

    let decimals = parse_decimals(7, fields[7])?;
    let mint_baton_vout = parse_baton_vout(8, fields[8])?;
    let initial_quantity = parse_amount(9, fields[9])?;

    Ok(GenesisMessage {
        ticker: fields[3].to_vec(),
        name: fields[4].to_vec(),
        document_uri: fields[5].to_vec(),
        document_hash,
        decimals,
        mint_baton_vout,
        initial_quantity,
    })
}

fn parse_mint(fields: &[&[u8]]) -> Result<MintMessage, DecodeError> {
    if fields.len() != MINT_FIELD_COUNT {
        return Err(DecodeError::FieldCountMismatch {
            kind: Some(MessageKind::Mint),
            found: fields.len(),
        });
    }
    Ok(MintMessage {
        token_id: parse_token_id(3, fields[3])?,
        mint_baton_vout: parse_baton_vout(4, fields[4])?,
        quantity: parse_amount(5, fields[5])?,
    })
}

fn parse_send(fields: &[&[u8]]) -> Result<SendMessage, DecodeError> {
    let amount_count = fields.len().saturating_sub(MIN_SEND_FIELD_COUNT - 1);
    if fields.len() < MIN_SEND_FIELD_COUNT || amount_count > MAX_SEND_OUTPUTS {
        return Err(DecodeError::FieldCountMismatch {
            kind: Some(MessageKind::Send),
            found: fields.len(),
        });
    }

    let token_id = parse_token_id(3, fields[3])?;
    let output_amounts = fields[4..]
        .iter()
        .enumerate()
        .map(|(offset, field)| parse_amount(4 + offset, field))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SendMessage {
        token_id,
        output_amounts,
    })
}

fn parse_token_type(field: &[u8]) -> Result<TokenType, DecodeError> {
    let value = match *field {
        [b] => u16::from(b),
        [hi, lo] => u16::from_be_bytes([hi, lo]),
        _ => {
            return Err(DecodeError::malformed(
                TOKEN_TYPE_FIELD,
                FieldError::TokenTypeLength(field.len()),
            ))
        }
    };
    TokenType::from_u16(value)
        .ok_or_else(|| DecodeError::malformed(TOKEN_TYPE_FIELD, FieldError::UnknownTokenType(value)))
}

fn parse_token_id(index: usize, field: &[u8]) -> Result<TokenId, DecodeError> {
    TokenId::from_slice(field).ok_or_else(|| {
        DecodeError::malformed(
            index,
            FieldError::WrongLength {
                expected: TOKEN_ID_LEN,
                actual: field.len(),
            },
        )
    })
}

fn parse_amount(index: usize, field: &[u8]) -> Result<TokenAmount, DecodeError> {
    let bytes: [u8; AMOUNT_LEN] = field.try_into().map_err(|_| {
        DecodeError::malformed(
            index,
            FieldError::WrongLength {
                expected: AMOUNT_LEN,
                actual: field.len(),
            },
        )
    })?;
    Ok(TokenAmount::from_be_bytes(bytes))
}

fn parse_decimals(index: usize, field: &[u8]) -> Result<u8, DecodeError> {
    let [decimals] = *field else {
        return Err(DecodeError::malformed(
            index,
            FieldError::WrongLength {
                expected: 1,
                actual: field.len(),
            },
        ));
    };
    if decimals > MAX_DECIMALS {
        return Err(DecodeError::malformed(
            index,
            FieldError::DecimalsOutOfRange(decimals),
        ));
    }
    Ok(decimals)
}

fn parse_baton_vout(index: usize, field: &[u8]) -> Result<Option<u8>, DecodeError> {
    match *field {
        [] => Ok(None),
        [vout] if vout < MIN_BATON_VOUT => Err(DecodeError::malformed(
            index,
            FieldError::BatonVoutTooLow(vout),
        )),
        [vout] => Ok(Some(vout)),
        _ => Err(DecodeError::malformed(
            index,
            FieldError::BatonLength(field.len()),
        )),
    }
}
