use proptest::prelude::*;

use slp_types::{OutPoint, TokenAmount, TokenId, TokenType, TxId};

proptest! {
    /// TokenId roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn token_id_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = TokenId::new(bytes);
        prop_assert_eq!(id.as_bytes(), &bytes);
    }

    /// TokenId::is_zero is true only for all-zero bytes.
    #[test]
    fn token_id_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let id = TokenId::new(bytes);
        prop_assert_eq!(id.is_zero(), bytes == [0u8; 32]);
    }

    /// TokenId hex roundtrip through Display and from_hex.
    #[test]
    fn token_id_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = TokenId::new(bytes);
        prop_assert_eq!(TokenId::from_hex(&id.to_string()).unwrap(), id);
    }

    /// TokenId bincode serialization roundtrip.
    #[test]
    fn token_id_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = TokenId::new(bytes);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: TokenId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// OutPoint bincode serialization roundtrip.
    #[test]
    fn outpoint_bincode_roundtrip(bytes in prop::array::uniform32(0u8..), vout in any::<u32>()) {
        let outpoint = OutPoint::new(TxId::new(bytes), vout);
        let encoded = bincode::serialize(&outpoint).unwrap();
        let decoded: OutPoint = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, outpoint);
    }

    /// TokenAmount: checked_add agrees with u128 arithmetic.
    #[test]
    fn amount_checked_add(a in any::<u64>(), b in any::<u64>()) {
        let sum = TokenAmount::new(a).checked_add(TokenAmount::new(b));
        let wide = a as u128 + b as u128;
        if wide > u64::MAX as u128 {
            prop_assert!(sum.is_none());
        } else {
            prop_assert_eq!(sum, Some(TokenAmount::new(wide as u64)));
        }
    }

    /// TokenAmount: checked_sum agrees with u128 arithmetic for any list.
    #[test]
    fn amount_checked_sum(values in prop::collection::vec(any::<u64>(), 0..20)) {
        let wide: u128 = values.iter().map(|v| *v as u128).sum();
        let sum = TokenAmount::checked_sum(values.iter().copied().map(TokenAmount::new));
        if wide > u64::MAX as u128 {
            prop_assert!(sum.is_none());
        } else {
            prop_assert_eq!(sum, Some(TokenAmount::new(wide as u64)));
        }
    }

    /// TokenAmount: checked_sub is None exactly on underflow.
    #[test]
    fn amount_checked_sub(a in any::<u64>(), b in any::<u64>()) {
        let result = TokenAmount::new(a).checked_sub(TokenAmount::new(b));
        if b > a {
            prop_assert!(result.is_none());
        } else {
            prop_assert_eq!(result, Some(TokenAmount::new(a - b)));
        }
    }

    /// TokenAmount: big-endian encoding roundtrip.
    #[test]
    fn amount_be_bytes_roundtrip(raw in any::<u64>()) {
        let amount = TokenAmount::new(raw);
        prop_assert_eq!(TokenAmount::from_be_bytes(amount.to_be_bytes()), amount);
    }

    /// TokenType: only the three protocol values are recognized.
    #[test]
    fn token_type_recognition(value in any::<u16>()) {
        let parsed = TokenType::from_u16(value);
        prop_assert_eq!(parsed.is_some(), matches!(value, 0x01 | 0x41 | 0x81));
        if let Some(token_type) = parsed {
            prop_assert_eq!(token_type.as_u16(), value);
        }
    }
}
