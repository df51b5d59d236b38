use crate::value::Value;

/// What happened after feeding one more byte into the literal matcher?
#[derive(Debug, PartialEq)]
pub(crate) enum Step {
    /// Byte matched, but the literal is not finished yet.
    NeedMore,
    /// Byte matched *and* it was the last byte of the literal.
    Done(Value),
    /// Byte did **not** match the expected byte.
    Reject,
}

/// Matches the remaining bytes of `true`, `false` or `null` after the first
/// byte has been dispatched on.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExpectedLiteralBuffer {
    remaining: &'static [u8],
    kind: LiteralKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralKind {
    Null,
    True,
    False,
}

impl ExpectedLiteralBuffer {
    /// Starts matching after the *first* byte (`n`, `t`, or `f`).
    pub(crate) fn new(first: u8) -> Option<Self> {
        let (remaining, kind): (&'static [u8], _) = match first {
            b'n' => (b"ull", LiteralKind::Null),
            b't' => (b"rue", LiteralKind::True),
            b'f' => (b"alse", LiteralKind::False),
            _ => return None,
        };
        Some(Self { remaining, kind })
    }

    /// Gives the matcher the next input byte.
    pub(crate) fn step(&mut self, byte: u8) -> Step {
        let Some((&expected, rest)) = self.remaining.split_first() else {
            return Step::Reject;
        };
        if expected != byte {
            return Step::Reject;
        }
        self.remaining = rest;
        if !rest.is_empty() {
            return Step::NeedMore;
        }
        Step::Done(match self.kind {
            LiteralKind::Null => Value::Null,
            LiteralKind::True => Value::Bool(true),
            LiteralKind::False => Value::Bool(false),
        })
    }
}
