#![no_main]

use libfuzzer_sys::fuzz_target;

use slp_types::{OutPoint, RawOutput, TokenAmount, TxId, TxInput};
use slp_validator::{validate_payload, ValidationVerdict, ValidatorConfig};

// Arbitrary bytes as the data output of a one-input, two-output
// transaction whose input carries no tokens.
fuzz_target!(|data: &[u8]| {
    let inputs = [TxInput::plain(OutPoint::new(TxId::new([0xab; 32]), 0))];
    let outputs = [RawOutput::data(data.to_vec()), RawOutput::value(vec![0x51], 546)];

    match validate_payload(data, &inputs, &outputs, &ValidatorConfig::default()) {
        ValidationVerdict::Valid(effect) => {
            // Nothing came in, so nothing may go out except fresh supply.
            assert_eq!(effect.input_amount, TokenAmount::ZERO);
            if effect.kind == slp_messages::MessageKind::Send {
                assert_eq!(effect.output_amount, TokenAmount::ZERO);
            }
        }
        ValidationVerdict::Invalid(_) | ValidationVerdict::Unsupported(_) => {}
    }
});
