//! Forward-only byte cursor over an immutable input buffer.
//!
//! The cursor starts before the first byte. Each [`Cursor::read`] advances by
//! exactly one byte and remembers it as the current byte; once the input is
//! exhausted the current byte becomes `None` and every further read returns
//! `None`. The read position never moves backwards.

use core::ops::Range;

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    bytes: &'src [u8],
    /// Index of the next byte `read` will return.
    next: usize,
    current: Option<u8>,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(bytes: &'src [u8]) -> Self {
        Self {
            bytes,
            next: 0,
            current: None,
        }
    }

    /// Advances one byte and returns it with its index.
    #[inline]
    pub(crate) fn read(&mut self) -> Option<(u8, usize)> {
        match self.bytes.get(self.next) {
            Some(&byte) => {
                let index = self.next;
                self.next += 1;
                self.current = Some(byte);
                Some((byte, index))
            }
            None => {
                self.next = self.bytes.len();
                self.current = None;
                None
            }
        }
    }

    /// The byte returned by the last successful `read`, or `None` once the
    /// input is exhausted.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.current
    }

    /// Index of the current byte.
    ///
    /// Only meaningful after at least one successful `read`; at the end of
    /// input this is the index of the last byte.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.next.saturating_sub(1)
    }

    /// Zero-copy view from `index` to the end of the input.
    #[inline]
    pub(crate) fn remaining_from(&self, index: usize) -> &'src [u8] {
        self.bytes.get(index..).unwrap_or_default()
    }

    /// Zero-copy sub-view of the input. Out-of-range bounds are clamped.
    #[inline]
    pub(crate) fn slice(&self, range: Range<usize>) -> &'src [u8] {
        let end = range.end.min(self.bytes.len());
        let start = range.start.min(end);
        &self.bytes[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn reads_bytes_with_indices() {
        let mut cursor = Cursor::new(b"ab");
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.read(), Some((b'a', 0)));
        assert_eq!(cursor.current(), Some(b'a'));
        assert_eq!(cursor.read(), Some((b'b', 1)));
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.read(), None);
    }

    #[test]
    fn exhausted_cursor_stays_exhausted() {
        let mut cursor = Cursor::new(b"x");
        cursor.read();
        assert_eq!(cursor.read(), None);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.read(), None);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn slices_are_views_into_the_input() {
        let input = b"\"hello\"";
        let cursor = Cursor::new(input);
        assert_eq!(cursor.slice(1..6), b"hello");
        assert_eq!(cursor.remaining_from(5), b"o\"");
        assert_eq!(cursor.remaining_from(42), b"");
        assert_eq!(cursor.slice(5..42), b"o\"");
    }

    #[test]
    fn empty_input() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.read(), None);
    }
}
