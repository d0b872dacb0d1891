//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains the
//! `start`/`current` offset pair and the line counter while the scanner walks
//! the source one byte at a time. Classification is ASCII-only, so the cursor
//! never decodes UTF-8; a multi-byte character is simply several bytes that
//! fall through every recognizer.

/// A cursor over the bytes of a source string.
///
/// `start` marks the first byte of the lexeme under construction and
/// `current` the next unconsumed byte. The invariant
/// `0 <= start <= current <= len` always holds, and `line` only grows.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
///
/// assert_eq!(cursor.peek(), b'v');
/// cursor.advance();
/// assert_eq!(cursor.peek(), b'a');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the first byte of the current lexeme.
    start: usize,

    /// Byte offset of the next unconsumed byte.
    current: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`, line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> u8 {
        self.source
            .as_bytes()
            .get(self.current + offset)
            .copied()
            .unwrap_or(b'\0')
    }

    /// Returns the next unconsumed byte without consuming it.
    ///
    /// Returns `b'\0'` if at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.peek(), b'\0');
    /// ```
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(0)
    }

    /// Returns the byte after the next one, or `b'\0'` past the end.
    #[inline]
    pub fn peek_next(&self) -> u8 {
        self.byte_at(1)
    }

    /// Consumes and returns the next byte.
    ///
    /// Consuming `\n` bumps the line counter, so newlines inside string
    /// literals are counted the same way as newlines between tokens.
    /// Calling this at the end of the source is a scanner bug; in release
    /// builds it returns `b'\0'` and leaves the cursor where it is.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.advance(), b'a');
    /// assert_eq!(cursor.advance(), b'\n');
    /// assert_eq!(cursor.line(), 2);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> u8 {
        debug_assert!(!self.is_at_end(), "advance past end of source");
        let Some(&b) = self.source.as_bytes().get(self.current) else {
            return b'\0';
        };
        self.current += 1;
        if b == b'\n' {
            self.line += 1;
        }
        b
    }

    /// Consumes the next byte if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_byte(b'='));
    /// assert!(cursor.match_byte(b'='));
    /// assert!(!cursor.match_byte(b'='));
    /// ```
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Returns true if every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Starts a new lexeme at the current position.
    #[inline]
    pub fn begin_lexeme(&mut self) {
        self.start = self.current;
    }

    /// Returns the text of the lexeme under construction, `[start, current)`.
    ///
    /// Every recognizer begins and ends a lexeme on an ASCII byte, so the
    /// range always falls on `char` boundaries.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("print 1");
    /// cursor.begin_lexeme();
    /// for _ in 0..5 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.lexeme(), "print");
    /// ```
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the byte offset where the current lexeme starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte offset of the next unconsumed byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
