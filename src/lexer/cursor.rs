//! Code-point cursor over a UTF-8 byte buffer.
//!
//! The cursor holds the most recently decoded code point and the byte offset
//! just past it. `None` as the current code point means end of input; once
//! reached, further advances are no-ops and the offset stays put.
//!
//! # Invalid UTF-8
//!
//! A byte that does not start a valid UTF-8 sequence decodes as
//! [`char::REPLACEMENT_CHARACTER`] and is one byte wide, so every advance
//! short of end of input moves forward by at least one byte. Such a code
//! point is flagged invalid, which keeps it apart from a literal U+FFFD in
//! the input.

/// One decoded code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub ch: char,
    /// Width in bytes
    pub width: usize,
    /// `false` when `ch` stands in for an invalid byte
    pub valid: bool,
}

impl Decoded {
    const fn scalar(ch: char, width: usize) -> Self {
        Self {
            ch,
            width,
            valid: true,
        }
    }

    const INVALID: Self = Self {
        ch: char::REPLACEMENT_CHARACTER,
        width: 1,
        valid: false,
    };
}

/// Decode the code point at the start of `bytes`, or `None` when `bytes` is
/// empty.
pub fn decode(bytes: &[u8]) -> Option<Decoded> {
    let first = *bytes.first()?;
    let width = match first {
        0x00..=0x7F => return Some(Decoded::scalar(char::from(first), 1)),
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Some(Decoded::INVALID),
    };
    let decoded = bytes
        .get(..width)
        .and_then(|seq| std::str::from_utf8(seq).ok())
        .and_then(|s| s.chars().next());
    Some(decoded.map_or(Decoded::INVALID, |c| Decoded::scalar(c, width)))
}

/// Decode every code point of `bytes` under the one-byte-per-invalid rule
pub fn code_points(mut bytes: &[u8]) -> impl Iterator<Item = Decoded> + '_ {
    std::iter::from_fn(move || {
        let decoded = decode(bytes)?;
        bytes = &bytes[decoded.width..];
        Some(decoded)
    })
}

/// Text of `bytes`, one U+FFFD per invalid byte
pub fn lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => code_points(bytes).map(|d| d.ch).collect(),
    }
}

/// Lexing position over a borrowed buffer
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Byte offset just past `current`.
    pos: usize,
    /// Byte width of `current`; zero at end of input.
    width: usize,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor primed with the first code point of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        let mut cursor = Self {
            buf,
            pos: 0,
            width: 0,
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// Decode the next code point, making it current
    pub fn advance(&mut self) {
        match decode(&self.buf[self.pos..]) {
            Some(decoded) => {
                self.current = Some(decoded.ch);
                self.width = decoded.width;
                self.pos += decoded.width;
            }
            None => {
                self.current = None;
                self.width = 0;
            }
        }
    }

    /// The code point after the current one, without moving
    pub fn peek(&self) -> Option<char> {
        self.peek_decoded().map(|d| d.ch)
    }

    /// Like [`peek`](Self::peek), keeping the validity flag
    pub fn peek_decoded(&self) -> Option<Decoded> {
        decode(&self.buf[self.pos..])
    }

    /// Advance if the next code point satisfies `pred`
    pub fn advance_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Advance while the next code point satisfies `pred`
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.advance_if(&pred) {}
    }

    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Byte offset of the current code point (the buffer length at EOF)
    #[inline]
    pub fn start(&self) -> usize {
        self.pos - self.width
    }

    /// Byte offset just past the current code point
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Text of `start..end`, one U+FFFD per invalid byte
    pub fn slice(&self, start: usize, end: usize) -> String {
        lossy(&self.buf[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_is_eof() {
        let cursor = Cursor::new(b"");
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.start(), 0);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_primed_with_first_code_point() {
        let cursor = Cursor::new(b"ab");
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.start(), 0);
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn test_multi_byte_code_points() {
        let mut cursor = Cursor::new("ŧ€😀x".as_bytes());
        assert_eq!(cursor.current(), Some('ŧ'));
        assert_eq!(cursor.offset(), 2);
        cursor.advance();
        assert_eq!(cursor.current(), Some('€'));
        assert_eq!(cursor.start(), 2);
        assert_eq!(cursor.offset(), 5);
        cursor.advance();
        assert_eq!(cursor.current(), Some('😀'));
        assert_eq!(cursor.offset(), 9);
        cursor.advance();
        assert_eq!(cursor.current(), Some('x'));
        cursor.advance();
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_eof_is_stable() {
        let mut cursor = Cursor::new(b"x");
        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.start(), 1);
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_invalid_bytes_advance_one_at_a_time() {
        // lone continuation byte, truncated 3-byte sequence, overlong lead byte
        let mut cursor = Cursor::new(&[0x80, 0xE2, 0x82, b'a', 0xC0, 0xAF]);
        let mut seen = Vec::new();
        while let Some(c) = cursor.current() {
            seen.push((c, cursor.start()));
            cursor.advance();
        }
        assert_eq!(
            seen,
            vec![
                (char::REPLACEMENT_CHARACTER, 0),
                (char::REPLACEMENT_CHARACTER, 1),
                (char::REPLACEMENT_CHARACTER, 2),
                ('a', 3),
                (char::REPLACEMENT_CHARACTER, 4),
                (char::REPLACEMENT_CHARACTER, 5),
            ]
        );
    }

    #[test]
    fn test_encoded_surrogate_is_invalid() {
        assert_eq!(decode(&[0xED, 0xA0, 0x80]), Some(Decoded::INVALID));
    }

    #[test]
    fn test_literal_replacement_char_is_valid() {
        let decoded = decode("\u{FFFD}".as_bytes()).unwrap();
        assert_eq!(decoded.ch, char::REPLACEMENT_CHARACTER);
        assert_eq!(decoded.width, 3);
        assert!(decoded.valid);

        let cursor = Cursor::new(&[b'a', 0xFF]);
        assert_eq!(cursor.peek_decoded(), Some(Decoded::INVALID));
    }

    #[test]
    fn test_slice_replaces_each_invalid_byte() {
        // a truncated 3-byte sequence is two invalid bytes, not one
        let cursor = Cursor::new(&[b'a', 0xE2, 0x82, b'b']);
        assert_eq!(cursor.slice(0, 4), "a\u{FFFD}\u{FFFD}b");
        assert_eq!(lossy("ŧ".as_bytes()), "ŧ");
        assert_eq!(code_points(&[0xE2, 0x82, b'x']).count(), 3);
    }

    #[test]
    fn test_advance_while() {
        let mut cursor = Cursor::new(b"1234x");
        cursor.advance_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.current(), Some('4'));
        assert_eq!(cursor.peek(), Some('x'));
        assert!(!cursor.advance_if(|c| c.is_ascii_digit()));
        assert_eq!(cursor.slice(0, cursor.offset()), "1234");
    }
}
