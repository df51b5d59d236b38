//! Decoding of the four hexadecimal digits of a `\uXXXX` escape into a UTF-16
//! code unit, and reconstruction of scalars from surrogate pairs.
//!
//! Code units are not checked for being scalars: surrogates are legitimate
//! output of [`decode_code_unit`] and are paired up by the string decoder.

#[inline]
fn hex_val(byte: u8) -> Option<u16> {
    match byte {
        b'0'..=b'9' => Some(u16::from(byte - b'0')),
        b'a'..=b'f' => Some(u16::from(byte - b'a' + 10)),
        b'A'..=b'F' => Some(u16::from(byte - b'A' + 10)),
        _ => None,
    }
}

/// Folds four ASCII hexadecimal digits (`0-9`, `A-F`, `a-f`) into a code
/// unit, or returns `None` if any of them is not a hex digit.
pub(crate) fn decode_code_unit(digits: [u8; 4]) -> Option<u16> {
    digits
        .into_iter()
        .try_fold(0_u16, |acc, byte| Some((acc << 4) | hex_val(byte)?))
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combines a high and a low surrogate into the code point they encode.
#[inline]
pub(crate) fn combine_surrogates(high: u16, low: u16) -> u32 {
    (u32::from(high) - 0xD800) * 0x400 + (u32::from(low) - 0xDC00) + 0x1_0000
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(*b"0041", 0x41)]
    #[case(*b"AbCd", 0xABCD)]
    #[case(*b"003c", 0x3C)]
    #[case(*b"ffff", 0xFFFF)]
    #[case(*b"0000", 0)]
    fn decodes_hex_digits(#[case] digits: [u8; 4], #[case] expected: u16) {
        assert_eq!(decode_code_unit(digits), Some(expected));
    }

    #[rstest]
    #[case(*b"005\"")]
    #[case(*b"G000")]
    #[case(*b"12 4")]
    #[case(*b"-001")]
    fn rejects_non_hex_digits(#[case] digits: [u8; 4]) {
        assert_eq!(decode_code_unit(digits), None);
    }

    #[test]
    fn surrogates_are_returned_as_code_units() {
        let high = decode_code_unit(*b"D801").unwrap();
        let low = decode_code_unit(*b"DC37").unwrap();
        assert!(is_high_surrogate(high));
        assert!(is_low_surrogate(low));
        assert!(!is_low_surrogate(high));
        assert_eq!(combine_surrogates(high, low), 0x10437);
        assert_eq!(combine_surrogates(0xD852, 0xDF62), 0x24B62);
    }
}
