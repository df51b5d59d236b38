//! RFC 8259 number lexer.
//!
//! The lexer validates the number grammar and slices the lexeme out of the
//! input; it never converts the number to a binary representation.

use super::cursor::Cursor;
use crate::error::JsonError;

/// The last control character the lexer went past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    /// Sign and integer digits.
    Operand,
    /// After `.`.
    DecimalPoint,
    /// After `e` or `E`.
    Exponent,
    /// After the sign following the exponent marker.
    ExponentSign,
}

/// Whether `byte` ends a number without being part of it.
#[inline]
pub(crate) fn is_terminator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b',' | b']' | b'}')
}

/// Lexes a number whose first byte (`-` or a digit) is the cursor's current
/// byte.
///
/// On success the cursor's current byte is the terminator that ended the
/// number, or `None` if the input ended. The terminator is not part of the
/// returned lexeme.
pub(crate) fn lex_number<'src>(cursor: &mut Cursor<'src>) -> Result<&'src [u8], JsonError> {
    let start = cursor.index();
    let mut state = NumberState::Operand;

    // Digits seen since the last control character, and whether the integer
    // part so far is a single `0`.
    let (mut digits, mut leading_zero) = match cursor.current() {
        Some(b'0') => (1_usize, true),
        Some(b'1'..=b'9') => (1, false),
        Some(b'-') => (0, false),
        Some(byte) => {
            return Err(JsonError::UnexpectedCharacter { byte, index: start });
        }
        None => return Err(JsonError::UnexpectedEndOfFile),
    };

    while let Some((byte, index)) = cursor.read() {
        match byte {
            b'0'..=b'9' => {
                if state == NumberState::Operand {
                    if leading_zero {
                        return Err(JsonError::NumberWithLeadingZero { index });
                    }
                    leading_zero = digits == 0 && byte == b'0';
                }
                digits += 1;
            }
            b'.' => {
                if digits == 0 || state != NumberState::Operand {
                    return Err(JsonError::UnexpectedCharacter { byte, index });
                }
                state = NumberState::DecimalPoint;
                digits = 0;
            }
            b'e' | b'E' => {
                if digits == 0
                    || !matches!(state, NumberState::Operand | NumberState::DecimalPoint)
                {
                    return Err(JsonError::UnexpectedCharacter { byte, index });
                }
                state = NumberState::Exponent;
                digits = 0;
            }
            b'+' | b'-' => {
                if digits != 0 || state != NumberState::Exponent {
                    return Err(JsonError::UnexpectedCharacter { byte, index });
                }
                state = NumberState::ExponentSign;
            }
            _ if is_terminator(byte) => {
                if digits == 0 {
                    return Err(JsonError::UnexpectedCharacter { byte, index });
                }
                return Ok(cursor.slice(start..index));
            }
            _ => return Err(JsonError::UnexpectedCharacter { byte, index }),
        }
    }

    if digits == 0 {
        return Err(JsonError::UnexpectedEndOfFile);
    }
    Ok(cursor.remaining_from(start))
}

/// Checks that `lexeme` is exactly one JSON number and nothing else.
pub(crate) fn is_valid_lexeme(lexeme: &[u8]) -> bool {
    let mut cursor = Cursor::new(lexeme);
    if cursor.read().is_none() {
        return false;
    }
    matches!(lex_number(&mut cursor), Ok(lexed) if lexed.len() == lexeme.len())
}
