#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use slp_messages::ProtocolMessage;
use slp_types::{
    InputTokenView, OutPoint, RawOutput, TokenAmount, TokenId, TokenType, TxId, TxInput,
};
use slp_validator::{validate, ValidationVerdict, ValidatorConfig};

#[derive(Debug, Arbitrary)]
struct SendCase {
    token: [u8; 32],
    inputs: Vec<(bool, bool, u64)>,
    amounts: Vec<u64>,
    value_outputs: u8,
}

fuzz_target!(|case: SendCase| {
    let token = TokenId::new(case.token);
    let other = TokenId::new([!case.token[0]; 32]);

    let inputs: Vec<TxInput> = case
        .inputs
        .iter()
        .enumerate()
        .map(|(i, (same_token, baton, amount))| {
            let id = if *same_token { token } else { other };
            let view = InputTokenView {
                token_id: id,
                token_type: TokenType::Fungible,
                amount: TokenAmount::new(*amount),
                is_baton: *baton,
            };
            TxInput::with_token(OutPoint::new(TxId::new([0x01; 32]), i as u32), view)
        })
        .collect();

    let mut outputs = vec![RawOutput::data(vec![0x6a])];
    outputs.extend((0..case.value_outputs).map(|_| RawOutput::value(vec![0x51], 546)));

    let message = ProtocolMessage::send(
        TokenType::Fungible,
        token,
        case.amounts.iter().copied().map(TokenAmount::new).collect(),
    );

    if let ValidationVerdict::Valid(effect) = validate(&message, &inputs, &outputs, &ValidatorConfig::default()) {
        let in_total: u128 = case
            .inputs
            .iter()
            .filter(|(same_token, _, _)| *same_token)
            .map(|(_, _, amount)| u128::from(*amount))
            .sum();
        let out_total: u128 = case.amounts.iter().map(|a| u128::from(*a)).sum();

        assert!(out_total <= in_total, "send created tokens");
        assert_eq!(u128::from(effect.input_amount.raw()), in_total);
        assert_eq!(u128::from(effect.output_amount.raw()), out_total);
        assert_eq!(
            u128::from(effect.output_amount.raw()) + u128::from(effect.burned.raw()),
            in_total
        );
    }
});
