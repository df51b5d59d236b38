//! String literal decoder.
//!
//! The decoder starts right after the opening quote. As long as it sees
//! neither a backslash nor a control character it only scans; on the closing
//! quote the whole span is decoded from the input in one go. The first
//! backslash switches to the slow path, which copies the span read so far into
//! an owned buffer and from then on appends unescaped runs and decoded escapes.
//!
//! Invalid UTF-8 in the literal is replaced with U+FFFD.

use alloc::{string::String, vec::Vec};

use bstr::{ByteSlice, ByteVec};

use super::{
    cursor::Cursor,
    escape::{combine_surrogates, decode_code_unit, is_high_surrogate, is_low_surrogate},
};
use crate::error::JsonError;

/// Decodes a string literal. The cursor's current byte must be the opening
/// quote.
pub(crate) fn parse_string(cursor: &mut Cursor<'_>) -> Result<String, JsonError> {
    let start = cursor.index() + 1;

    while let Some((byte, index)) = cursor.read() {
        match byte {
            b'"' => return Ok(cursor.slice(start..index).to_str_lossy().into_owned()),
            b'\\' => return EscapedString::new(cursor, start, index).finish(),
            0x00..=0x1F => {
                return Err(JsonError::UnescapedControlCharacterInString {
                    byte,
                    partial: partial(cursor, start, index),
                    index,
                });
            }
            _ => {}
        }
    }

    Err(JsonError::UnexpectedEndOfFile)
}

/// Raw source text of the literal from `start` through `index`.
fn partial(cursor: &Cursor<'_>, start: usize, index: usize) -> bstr::BString {
    cursor.slice(start..index + 1).into()
}

/// Slow-path state: the owned output and the start of the unescaped run not
/// yet copied into it.
struct EscapedString<'c, 'src> {
    cursor: &'c mut Cursor<'src>,
    /// Index of the first byte of the literal's content.
    start: usize,
    /// Index of the first byte of the pending unescaped run.
    run_start: usize,
    output: Vec<u8>,
}

impl<'c, 'src> EscapedString<'c, 'src> {
    fn new(cursor: &'c mut Cursor<'src>, start: usize, backslash: usize) -> Self {
        let prefix = cursor.slice(start..backslash);
        let mut output = Vec::with_capacity(prefix.len() + 16);
        output.extend_from_slice(prefix);
        Self {
            cursor,
            start,
            run_start: backslash,
            output,
        }
    }

    /// Decodes the escape whose backslash is the cursor's current byte, then
    /// keeps scanning through the closing quote.
    fn finish(mut self) -> Result<String, JsonError> {
        loop {
            self.decode_escape()?;

            loop {
                let Some((byte, index)) = self.cursor.read() else {
                    return Err(JsonError::UnexpectedEndOfFile);
                };
                match byte {
                    b'"' => {
                        self.flush(index);
                        return Ok(self.output.into_string_lossy());
                    }
                    b'\\' => {
                        self.flush(index);
                        break;
                    }
                    0x00..=0x1F => {
                        return Err(JsonError::UnescapedControlCharacterInString {
                            byte,
                            partial: partial(self.cursor, self.start, index),
                            index,
                        });
                    }
                    _ => {}
                }
            }
        }
    }

    /// Copies the pending run up to (excluding) `end` into the output.
    fn flush(&mut self, end: usize) {
        self.output
            .extend_from_slice(self.cursor.slice(self.run_start..end));
    }

    /// Decodes one escape; the cursor's current byte is the backslash.
    fn decode_escape(&mut self) -> Result<(), JsonError> {
        let Some((byte, index)) = self.cursor.read() else {
            return Err(JsonError::UnexpectedEndOfFile);
        };
        let unescaped = match byte {
            b'"' | b'\\' | b'/' => byte,
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                let scalar = self.decode_unicode_escape()?;
                let mut buf = [0_u8; 4];
                self.output
                    .extend_from_slice(scalar.encode_utf8(&mut buf).as_bytes());
                self.run_start = self.cursor.index() + 1;
                return Ok(());
            }
            _ => {
                return Err(JsonError::UnexpectedEscapedCharacter {
                    byte,
                    partial: partial(self.cursor, self.start, index),
                    index,
                });
            }
        };
        self.output.push(unescaped);
        self.run_start = index + 1;
        Ok(())
    }

    /// Reads four hex digits following `\u` and returns the code unit and the
    /// index of its last digit.
    fn read_code_unit(&mut self) -> Result<(u16, usize), JsonError> {
        let mut digits = [0_u8; 4];
        let mut first = 0;
        let mut last = 0;
        for (i, digit) in digits.iter_mut().enumerate() {
            let Some((byte, index)) = self.cursor.read() else {
                return Err(JsonError::UnexpectedEndOfFile);
            };
            if i == 0 {
                first = index;
            }
            *digit = byte;
            last = index;
        }
        let unit = decode_code_unit(digits).ok_or_else(|| JsonError::InvalidHexDigitSequence {
            digits: digits.as_slice().into(),
            index: first,
        })?;
        Ok((unit, last))
    }

    /// Decodes a `\uXXXX` escape (the `u` has been read), pairing a high
    /// surrogate with the `\uXXXX` low surrogate that must follow it.
    fn decode_unicode_escape(&mut self) -> Result<char, JsonError> {
        let (unit, last) = self.read_code_unit()?;

        if !is_high_surrogate(unit) {
            return char::from_u32(u32::from(unit)).ok_or_else(|| {
                JsonError::CouldNotCreateUnicodeScalar {
                    partial: partial(self.cursor, self.start, last),
                    index: last,
                    value: u32::from(unit),
                }
            });
        }

        let (Some((backslash, _)), Some((u, index))) = (self.cursor.read(), self.cursor.read())
        else {
            return Err(JsonError::UnexpectedEndOfFile);
        };
        if backslash != b'\\' || u != b'u' {
            return Err(JsonError::ExpectedLowSurrogate {
                partial: partial(self.cursor, self.start, index),
                index,
            });
        }

        let (low, last) = self.read_code_unit()?;
        if !is_low_surrogate(low) {
            return Err(JsonError::ExpectedLowSurrogate {
                partial: partial(self.cursor, self.start, last),
                index: last,
            });
        }

        let value = combine_surrogates(unit, low);
        char::from_u32(value).ok_or_else(|| JsonError::CouldNotCreateUnicodeScalar {
            partial: partial(self.cursor, self.start, last),
            index: last,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use rstest::rstest;

    use super::*;

    fn decode(input: &[u8]) -> Result<String, JsonError> {
        let mut cursor = Cursor::new(input);
        cursor.read();
        parse_string(&mut cursor)
    }

    #[rstest]
    #[case(br#""Hello""#, "Hello")]
    #[case(br#""""#, "")]
    #[case(br#""\\\"""#, r#"\""#)]
    #[case(br#""\u005A""#, "Z")]
    #[case(br#""a\/b\b\f\n\r\t""#, "a/b\u{8}\u{c}\n\r\t")]
    #[case(br#""\uD801\uDC37""#, "\u{10437}")]
    #[case(br#""\uD852\uDF62""#, "\u{24B62}")]
    #[case(br#""\u00e9t\u00C9""#, "étÉ")]
    #[case(br#""\u0000""#, "\u{0}")]
    #[case("\"🥑 ü\"".as_bytes(), "🥑 ü")]
    fn decodes(#[case] input: &[u8], #[case] expected: &str) {
        assert_eq!(decode(input).as_deref(), Ok(expected));
    }

    #[test]
    fn stops_at_closing_quote() {
        let mut cursor = Cursor::new(br#""ab\n" , 1"#);
        cursor.read();
        assert_eq!(parse_string(&mut cursor).as_deref(), Ok("ab\n"));
        assert_eq!(cursor.current(), Some(b'"'));
        assert_eq!(cursor.index(), 5);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode(b"\"a\xFFb\"").as_deref(), Ok("a\u{FFFD}b"));
        assert_eq!(decode(b"\"\\n\xC3\"").as_deref(), Ok("\n\u{FFFD}"));
    }

    #[test]
    fn high_surrogate_followed_by_plain_escape() {
        let input = br#""abc \uD801\u005A""#;
        assert_eq!(
            decode(input),
            Err(JsonError::ExpectedLowSurrogate {
                partial: input[1..input.len() - 1].into(),
                index: 16,
            })
        );
    }

    #[test]
    fn high_surrogate_followed_by_ascii() {
        assert_eq!(
            decode(br#""\uD801abc""#),
            Err(JsonError::ExpectedLowSurrogate {
                partial: br"\uD801ab".as_slice().into(),
                index: 8,
            })
        );
    }

    #[rstest]
    #[case(br#""\uD801""#)]
    #[case(br#""\uD801\uDC""#)]
    #[case(br#""\u00"#)]
    #[case(br#""\"#)]
    #[case(br#""\n"#)]
    fn truncated_escapes_hit_end_of_input(#[case] input: &[u8]) {
        assert_eq!(decode(input), Err(JsonError::UnexpectedEndOfFile));
    }

    #[test]
    fn incomplete_unicode_escape() {
        assert_eq!(
            decode(b"\"\\u005\""),
            Err(JsonError::InvalidHexDigitSequence {
                digits: b"005\"".as_slice().into(),
                index: 3,
            })
        );
        assert_eq!(
            decode(br#""x\uD800\uZZZZ""#),
            Err(JsonError::InvalidHexDigitSequence {
                digits: b"ZZZZ".as_slice().into(),
                index: 10,
            })
        );
    }

    #[test]
    fn lone_low_surrogate_is_not_a_scalar() {
        assert_eq!(
            decode(br#""ab\uDC00""#),
            Err(JsonError::CouldNotCreateUnicodeScalar {
                partial: br"ab\uDC00".as_slice().into(),
                index: 8,
                value: 0xDC00,
            })
        );
    }

    #[rstest]
    #[case(br#""\y""#, b'y', 2)]
    #[case(br#"" \ ""#, b' ', 3)]
    #[case(br#""\U0041""#, b'U', 2)]
    #[case(br#""ok\n\x""#, b'x', 6)]
    fn rejects_unknown_escapes(#[case] input: &[u8], #[case] byte: u8, #[case] index: usize) {
        assert_eq!(
            decode(input),
            Err(JsonError::UnexpectedEscapedCharacter {
                byte,
                partial: input[1..=index].into(),
                index,
            })
        );
    }

    #[test]
    fn rejects_every_unescaped_control_character() {
        for byte in 0_u8..0x20 {
            let input = [b'"', byte, b'"'];
            assert_eq!(
                decode(&input),
                Err(JsonError::UnescapedControlCharacterInString {
                    byte,
                    partial: [byte].as_slice().into(),
                    index: 1,
                })
            );
        }
    }

    #[test]
    fn control_characters_are_rejected_after_an_escape_too() {
        let input: Vec<u8> = b"\" \\t \n \"".to_vec();
        assert_eq!(
            decode(&input),
            Err(JsonError::UnescapedControlCharacterInString {
                byte: b'\n',
                partial: b" \\t \n".as_slice().into(),
                index: 5,
            })
        );
        assert_eq!(
            decode(b"\" \t \""),
            Err(JsonError::UnescapedControlCharacterInString {
                byte: b'\t',
                partial: b" \t".as_slice().into(),
                index: 2,
            })
        );
    }
}
