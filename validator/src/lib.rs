//! Consensus validation of SLP token transactions.
//!
//! Given a protocol message and the transaction carrying it, the validator
//! decides whether the transaction is a valid token transaction and, if
//! so, which outputs receive which tokens. Inputs arrive already annotated
//! with the token state of the outputs they spend; see [`TokenGraph`].
//!
//! Fungible and NFT1 group tokens follow the type-1 rules in [`type1`].
//! NFT1 child tokens follow the stricter rules in [`nft1`].

pub mod config;
pub mod error;
pub mod graph;
pub mod nft1;
pub mod type1;
pub mod validation;
pub mod verdict;

pub use config::ValidatorConfig;
pub use error::{ConfigError, InvalidReason, UnsupportedReason};
pub use graph::{annotate_inputs, TokenGraph};
pub use nft1::validate_nft1_child;
pub use type1::validate_type1;
pub use validation::{validate, validate_payload, validate_transaction};
pub use verdict::{OutputEffect, TokenBinding, TokenEffect, ValidationVerdict};

#[cfg(test)]
pub(crate) mod test_support {
    use slp_messages::{GenesisMessage, MintMessage, ProtocolMessage};
    use slp_types::{
        InputTokenView, OutPoint, RawOutput, TokenAmount, TokenId, TokenType, TxId, TxInput,
    };

    pub const TOKEN_A: TokenId = TokenId::new([0xaa; 32]);
    pub const TOKEN_B: TokenId = TokenId::new([0xbb; 32]);

    fn prevout() -> OutPoint {
        OutPoint::new(TxId::new([0xee; 32]), 0)
    }

    pub fn plain_input() -> TxInput {
        TxInput::plain(prevout())
    }

    pub fn token_input(token_id: TokenId, token_type: TokenType, amount: u64) -> TxInput {
        TxInput::with_token(
            prevout(),
            InputTokenView::holding(token_id, token_type, TokenAmount::new(amount)),
        )
    }

    pub fn baton_input(token_id: TokenId, token_type: TokenType) -> TxInput {
        TxInput::with_token(prevout(), InputTokenView::baton(token_id, token_type))
    }

    pub fn value_output() -> RawOutput {
        RawOutput::value(vec![0x76, 0xa9], 546)
    }

    /// A data output followed by `count - 1` value outputs.
    pub fn outputs(count: usize) -> Vec<RawOutput> {
        let mut outputs = vec![RawOutput::data(vec![0x6a])];
        outputs.extend((1..count).map(|_| value_output()));
        outputs
    }

    pub fn genesis_message(
        token_type: TokenType,
        decimals: u8,
        mint_baton_vout: Option<u8>,
        quantity: u64,
    ) -> ProtocolMessage {
        ProtocolMessage::genesis(
            token_type,
            GenesisMessage {
                ticker: b"TST".to_vec(),
                name: b"Test Token".to_vec(),
                document_uri: Vec::new(),
                document_hash: None,
                decimals,
                mint_baton_vout,
                initial_quantity: TokenAmount::new(quantity),
            },
        )
    }

    pub fn mint_message(
        token_type: TokenType,
        token_id: TokenId,
        mint_baton_vout: Option<u8>,
        quantity: u64,
    ) -> ProtocolMessage {
        ProtocolMessage::mint(
            token_type,
            MintMessage {
                token_id,
                mint_baton_vout,
                quantity: TokenAmount::new(quantity),
            },
        )
    }

    pub fn send_message(token_type: TokenType, token_id: TokenId, amounts: &[u64]) -> ProtocolMessage {
        ProtocolMessage::send(
            token_type,
            token_id,
            amounts.iter().copied().map(TokenAmount::new).collect(),
        )
    }
}
