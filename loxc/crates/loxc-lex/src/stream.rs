//! The ordered output of one scan.

use std::fmt;
use std::ops::Deref;

use crate::token::{Token, TokenKind};

/// Tokens produced by one scan, in source order.
///
/// A stream always ends with exactly one `EOF` token, so it is never empty.
/// Only the scanner builds streams; consumers read them through the slice
/// API (`Deref<Target = [Token]>`) or by iterating.
///
/// # Example
///
/// ```
/// use loxc_lex::scan;
/// use loxc_lex::token::TokenKind;
/// use loxc_util::Handler;
///
/// let mut handler = Handler::new();
/// let stream = scan("1 + 2", &mut handler);
///
/// assert_eq!(stream.len(), 4);
/// assert_eq!(stream.eof().kind(), TokenKind::Eof);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(token) if token.kind() == TokenKind::Eof),
            "token stream must end with EOF"
        );
        debug_assert_eq!(
            tokens.iter().filter(|t| t.kind() == TokenKind::Eof).count(),
            1,
            "token stream must contain exactly one EOF"
        );
        Self { tokens }
    }

    /// The tokens as a slice, EOF included.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// The terminating EOF token.
    pub fn eof(&self) -> &Token {
        // `new` guarantees a trailing EOF
        &self.tokens[self.tokens.len() - 1]
    }

    /// Iterates over the kinds of all tokens, EOF included.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(Token::kind)
    }

    /// Consumes the stream, returning the tokens.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// One token per line, in the `KIND lexeme literal` dump format.
impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{}", token)?;
        }
        Ok(())
    }
}
