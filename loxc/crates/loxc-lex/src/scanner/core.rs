//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the main loop and the
//! single-byte dispatch table.

use loxc_util::{DiagnosticBuilder, DiagnosticCode, ErrorSink};

use crate::ascii::{is_alpha, is_blank, is_digit};
use crate::cursor::Cursor;
use crate::stream::TokenStream;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for Lox source text.
///
/// One scanner handles one source string. Lexical errors go to the injected
/// [`ErrorSink`] and scanning carries on with the next byte, so a single pass
/// reports every problem in the input.
///
/// # Example
///
/// ```
/// use loxc_lex::{Scanner, TokenKind};
/// use loxc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut scanner = Scanner::new("var x;", &mut handler);
///
/// assert_eq!(scanner.next_token().kind(), TokenKind::Var);
/// assert_eq!(scanner.next_token().lexeme(), "x");
/// ```
pub struct Scanner<'src, 'sink> {
    /// Byte cursor over the source.
    pub(crate) cursor: Cursor<'src>,

    /// Where lexical errors are reported.
    sink: &'sink mut dyn ErrorSink,

    /// Line on which the current lexeme starts (1-based).
    token_start_line: u32,

    /// Errors reported by this scanner.
    error_count: usize,

    /// Whether the iterator has already handed out EOF.
    finished: bool,
}

impl<'src, 'sink> Scanner<'src, 'sink> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'src str, sink: &'sink mut dyn ErrorSink) -> Self {
        Self {
            cursor: Cursor::new(source),
            sink,
            token_start_line: 1,
            error_count: 0,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, comments and erroneous bytes until a lexeme is
    /// recognized. At the end of input returns an `EOF` token, and keeps
    /// returning one on every further call.
    pub fn next_token(&mut self) -> Token {
        while !self.cursor.is_at_end() {
            self.cursor.begin_lexeme();
            self.token_start_line = self.cursor.line();

            if let Some(token) = self.scan_token() {
                return token;
            }
        }

        self.cursor.begin_lexeme();
        Token::eof(self.cursor.line())
    }

    /// Scans the whole source into a [`TokenStream`].
    pub fn scan_tokens(mut self) -> TokenStream {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let at_end = token.kind() == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                break;
            }
        }

        tracing::debug!(
            tokens = tokens.len(),
            bytes = self.cursor.source().len(),
            lines = self.cursor.line(),
            errors = self.error_count,
            "scan finished"
        );
        TokenStream::new(tokens)
    }

    /// Consumes one byte and recognizes the lexeme it starts.
    ///
    /// Returns `None` when the byte (and whatever followed it) produced no
    /// token: whitespace, a comment, an unterminated string or an error.
    fn scan_token(&mut self) -> Option<Token> {
        let c = self.cursor.advance();

        match c {
            b'(' => Some(self.make_token(TokenKind::LeftParen)),
            b')' => Some(self.make_token(TokenKind::RightParen)),
            b'{' => Some(self.make_token(TokenKind::LeftBrace)),
            b'}' => Some(self.make_token(TokenKind::RightBrace)),
            b',' => Some(self.make_token(TokenKind::Comma)),
            b'.' => Some(self.make_token(TokenKind::Dot)),
            b'-' => Some(self.make_token(TokenKind::Minus)),
            b'+' => Some(self.make_token(TokenKind::Plus)),
            b';' => Some(self.make_token(TokenKind::Semicolon)),
            b'*' => Some(self.make_token(TokenKind::Star)),
            b'!' => Some(self.lex_bang()),
            b'=' => Some(self.lex_equal()),
            b'<' => Some(self.lex_less()),
            b'>' => Some(self.lex_greater()),
            b'/' => self.lex_slash(),
            // the cursor already counted a newline
            b'\n' => None,
            c if is_blank(c) => None,
            b'"' => self.lex_string(),
            c if is_digit(c) => Some(self.lex_number()),
            c if is_alpha(c) => Some(self.lex_identifier()),
            c => {
                self.report_error(
                    format!("Unexpected character: {}", char::from(c)),
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                );
                None
            },
        }
    }

    /// Builds a token of `kind` with no literal value from the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        self.make_literal_token(kind, Literal::Null)
    }

    /// Builds a token of `kind` carrying `literal` from the current lexeme.
    pub(crate) fn make_literal_token(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::new(kind, self.cursor.lexeme(), literal, self.token_start_line)
    }

    /// Reports a lexical error on the current line.
    pub(crate) fn report_error(&mut self, message: String, code: DiagnosticCode) {
        let diagnostic = DiagnosticBuilder::error(message)
            .line(self.cursor.line())
            .code(code)
            .build();
        tracing::trace!(line = diagnostic.line, %code, message = %diagnostic.message, "lexical error");
        self.error_count += 1;
        self.sink.emit(diagnostic);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns how many errors this scanner has reported.
    pub fn error_count(&self) -> usize {
        self.error_count
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Token;

    /// Yields every token including the final `EOF`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind() == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Scanner<'_, '_> {}

/// Scans `source` into a token stream, reporting lexical errors to `sink`.
///
/// Never fails: malformed input yields fewer tokens plus diagnostics.
///
/// # Example
///
/// ```
/// use loxc_lex::scan;
/// use loxc_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = scan("print \"hi\";", &mut handler);
///
/// assert!(!handler.has_errors());
/// assert_eq!(tokens.to_string(), "PRINT print null\nSTRING \"hi\" hi\nSEMICOLON ; null\nEOF  null\n");
/// ```
pub fn scan(source: &str, sink: &mut dyn ErrorSink) -> TokenStream {
    Scanner::new(source, sink).scan_tokens()
}
