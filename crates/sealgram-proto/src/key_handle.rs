//! Key handle normalization
//!
//! The unsealing service returns the recovered key seed either as a
//! `0x`-prefixed address string or as an unsigned decimal rendering of the
//! same 160-bit value. Which form arrives is an external inconsistency, not
//! a protocol choice; this module absorbs it so key derivation only ever
//! sees canonical bytes.

use crate::{
    address::Address,
    errors::{ProtocolError, Result},
};

/// Convert a recovered key value into a canonical [`Address`].
///
/// Input prefixed with the hex marker is parsed and checksum-validated
/// directly. Anything else is parsed as an unsigned decimal integer,
/// rendered big-endian, and left-padded to 20 bytes.
///
/// # Errors
///
/// - `InvalidKeyHandle`: the hex form fails address validation, the decimal
///   parse fails, or the value exceeds 160 bits
pub fn normalize_key_handle(raw: &str) -> Result<Address> {
    if raw.starts_with(Address::HEX_MARKER) {
        return Address::parse(raw).map_err(|err| ProtocolError::InvalidKeyHandle {
            reason: format!("hex form rejected: {err}"),
        });
    }

    parse_decimal(raw).map(Address::from_bytes)
}

/// Parse an unsigned decimal string into 20 big-endian bytes.
///
/// Schoolbook multiply-accumulate over the byte array; a non-zero carry out
/// of the top byte means the value does not fit in 160 bits.
fn parse_decimal(input: &str) -> Result<[u8; Address::LEN]> {
    if input.is_empty() {
        return Err(ProtocolError::InvalidKeyHandle {
            reason: "empty recovered value".to_string(),
        });
    }

    let mut value = [0u8; Address::LEN];

    for byte in input.bytes() {
        if !byte.is_ascii_digit() {
            return Err(ProtocolError::InvalidKeyHandle {
                reason: format!("non-decimal digit {:?} in recovered value", char::from(byte)),
            });
        }

        // value = value * 10 + digit
        let mut carry = u16::from(byte - b'0');
        for place in value.iter_mut().rev() {
            let acc = u16::from(*place) * 10 + carry;
            *place = (acc & 0xFF) as u8;
            carry = acc >> 8;
        }

        if carry != 0 {
            return Err(ProtocolError::InvalidKeyHandle {
                reason: "recovered value exceeds 160 bits".to_string(),
            });
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Max 160-bit value: 2^160 - 1
    const MAX_DECIMAL: &str = "1461501637330902918203684832716283019655932542975";
    /// 2^160, one past the representable range
    const OVERFLOW_DECIMAL: &str = "1461501637330902918203684832716283019655932542976";

    fn address_of_u128(value: u128) -> Address {
        let mut bytes = [0u8; 20];
        bytes[4..].copy_from_slice(&value.to_be_bytes());
        Address::from_bytes(bytes)
    }

    #[test]
    fn hex_form_is_canonicalized() {
        let address = normalize_key_handle("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(address.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn decimal_form_matches_hex_form() {
        // 0x...01 == 1
        let from_decimal = normalize_key_handle("1").unwrap();
        let from_hex =
            normalize_key_handle("0x0000000000000000000000000000000000000001").unwrap();
        assert_eq!(from_decimal, from_hex);
    }

    #[test]
    fn decimal_is_left_padded() {
        let address = normalize_key_handle("255").unwrap();
        let mut expected = [0u8; 20];
        expected[19] = 0xFF;
        assert_eq!(address.into_bytes(), expected);
    }

    #[test]
    fn zero_is_representable() {
        let address = normalize_key_handle("0").unwrap();
        assert_eq!(address.into_bytes(), [0u8; 20]);
    }

    #[test]
    fn leading_zeros_are_accepted() {
        assert_eq!(
            normalize_key_handle("000255").unwrap(),
            normalize_key_handle("255").unwrap()
        );
    }

    #[test]
    fn max_160_bit_value_is_accepted() {
        let address = normalize_key_handle(MAX_DECIMAL).unwrap();
        assert_eq!(address.into_bytes(), [0xFFu8; 20]);
    }

    #[test]
    fn overflowing_value_is_rejected() {
        let result = normalize_key_handle(OVERFLOW_DECIMAL);
        assert!(matches!(result, Err(ProtocolError::InvalidKeyHandle { .. })));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        for bad in ["", "12a4", "-5", "1.5", " 42", "0b1010"] {
            let result = normalize_key_handle(bad);
            assert!(matches!(result, Err(ProtocolError::InvalidKeyHandle { .. })), "input {bad:?}");
        }
    }

    #[test]
    fn corrupted_hex_checksum_is_rejected_as_key_handle() {
        let result = normalize_key_handle("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert!(matches!(result, Err(ProtocolError::InvalidKeyHandle { .. })));
    }

    #[test]
    fn hex_form_of_wrong_length_is_rejected() {
        let result = normalize_key_handle("0x1234");
        assert!(matches!(result, Err(ProtocolError::InvalidKeyHandle { .. })));
    }

    proptest! {
        #[test]
        fn decimal_and_hex_forms_agree(value in any::<u128>()) {
            let expected = address_of_u128(value);

            let from_decimal = normalize_key_handle(&value.to_string()).unwrap();
            let from_hex =
                normalize_key_handle(&format!("0x{:040x}", value)).unwrap();

            prop_assert_eq!(from_decimal, expected);
            prop_assert_eq!(from_hex, expected);
        }
    }
}
