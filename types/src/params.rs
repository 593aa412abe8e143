//! Protocol constants shared by the decoder and the validator.

/// Identifying prefix pushed as the first field of every message.
pub const LOKAD_ID: &[u8; 4] = b"SLP\0";

/// Largest number of decimal places a token may declare.
pub const MAX_DECIMALS: u8 = 9;

/// Largest number of output quantities a SEND may carry.
pub const MAX_SEND_OUTPUTS: usize = 19;

/// Encoded width of every quantity field.
pub const AMOUNT_LEN: usize = 8;

/// Length of a non-empty GENESIS document hash.
pub const DOCUMENT_HASH_LEN: usize = 32;

/// Total push count (including the lokad id) of a GENESIS message.
pub const GENESIS_FIELD_COUNT: usize = 10;

/// Total push count (including the lokad id) of a MINT message.
pub const MINT_FIELD_COUNT: usize = 6;

/// Output index that receives GENESIS and MINT quantities.
pub const TOKEN_OUTPUT_INDEX: usize = 1;

/// Lowest output index that may hold a mint baton. Output 0 carries the
/// message and output 1 the minted quantity.
pub const MIN_BATON_VOUT: u8 = 2;
