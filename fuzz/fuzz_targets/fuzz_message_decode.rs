#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must return, never panic.
    let Ok(message) = slp_messages::decode(data) else {
        return;
    };

    // Anything that decodes re-encodes canonically and decodes to itself.
    let encoded = slp_messages::encode(&message).expect("decoded message encodes");
    let again = slp_messages::decode(&encoded).expect("canonical encoding decodes");
    assert_eq!(again, message);
});
