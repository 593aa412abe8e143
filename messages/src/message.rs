//! Typed protocol messages.

use serde::{Deserialize, Serialize};
use slp_types::{TokenAmount, TokenId, TokenType};

/// The kinds of message this decoder implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    Genesis,
    Mint,
    Send,
}

impl MessageKind {
    pub const ALL: [MessageKind; 3] = [Self::Genesis, Self::Mint, Self::Send];

    /// The field 2 bytes announcing this kind.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::Genesis => b"GENESIS",
            Self::Mint => b"MINT",
            Self::Send => b"SEND",
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_bytes() == bytes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Genesis => "GENESIS",
            Self::Mint => "MINT",
            Self::Send => "SEND",
        }
    }
}

/// Creates a new token. The token id becomes the id of the carrying
/// transaction, so it is not part of the message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisMessage {
    pub ticker: Vec<u8>,
    pub name: Vec<u8>,
    pub document_uri: Vec<u8>,
    pub document_hash: Option<[u8; 32]>,
    pub decimals: u8,
    pub mint_baton_vout: Option<u8>,
    pub initial_quantity: TokenAmount,
}

impl GenesisMessage {
    pub fn ticker_lossy(&self) -> String {
        String::from_utf8_lossy(&self.ticker).into_owned()
    }

    pub fn name_lossy(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }

    pub fn document_uri_lossy(&self) -> String {
        String::from_utf8_lossy(&self.document_uri).into_owned()
    }
}

/// Issues additional supply. A missing baton vout retires minting for good.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintMessage {
    pub token_id: TokenId,
    pub mint_baton_vout: Option<u8>,
    pub quantity: TokenAmount,
}

/// Moves tokens. `output_amounts[i]` goes to transaction output `i + 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessage {
    pub token_id: TokenId,
    pub output_amounts: Vec<TokenAmount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageBody {
    Genesis(GenesisMessage),
    Mint(MintMessage),
    Send(SendMessage),
}

/// A decoded protocol message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolMessage {
    pub token_type: TokenType,
    pub body: MessageBody,
}

impl ProtocolMessage {
    pub fn genesis(token_type: TokenType, genesis: GenesisMessage) -> Self {
        Self {
            token_type,
            body: MessageBody::Genesis(genesis),
        }
    }

    pub fn mint(token_type: TokenType, mint: MintMessage) -> Self {
        Self {
            token_type,
            body: MessageBody::Mint(mint),
        }
    }

    pub fn send(token_type: TokenType, token_id: TokenId, output_amounts: Vec<TokenAmount>) -> Self {
        Self {
            token_type,
            body: MessageBody::Send(SendMessage {
                token_id,
                output_amounts,
            }),
        }
    }

    pub fn kind(&self) -> MessageKind {
        match &self.body {
            MessageBody::Genesis(_) => MessageKind::Genesis,
            MessageBody::Mint(_) => MessageKind::Mint,
            MessageBody::Send(_) => MessageKind::Send,
        }
    }

    /// The token this message refers to; `None` for GENESIS, whose id is
    /// only known once the carrying transaction is.
    pub fn token_id(&self) -> Option<TokenId> {
        match &self.body {
            MessageBody::Genesis(_) => None,
            MessageBody::Mint(mint) => Some(mint.token_id),
            MessageBody::Send(send) => Some(send.token_id),
        }
    }

    pub fn mint_baton_vout(&self) -> Option<u8> {
        match &self.body {
            MessageBody::Genesis(genesis) => genesis.mint_baton_vout,
            MessageBody::Mint(mint) => mint.mint_baton_vout,
            MessageBody::Send(_) => None,
        }
    }
}
