//! Operator lexing.
//!
//! This module handles the operators that need one byte of lookahead. The
//! leading byte has already been consumed by the dispatcher.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl Scanner<'_, '_> {
    /// Emits `double` if the next byte is `=` (consuming it), else `single`.
    fn one_or_two(&mut self, single: TokenKind, double: TokenKind) -> Token {
        let kind = if self.cursor.match_byte(b'=') { double } else { single };
        self.make_token(kind)
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.one_or_two(TokenKind::Bang, TokenKind::BangEqual)
    }

    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equal(&mut self) -> Token {
        self.one_or_two(TokenKind::Equal, TokenKind::EqualEqual)
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.one_or_two(TokenKind::Less, TokenKind::LessEqual)
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.one_or_two(TokenKind::Greater, TokenKind::GreaterEqual)
    }

    /// Lexes slash or a line comment.
    ///
    /// Handles: `/`, `//`. A comment produces no token.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_byte(b'/') {
            self.skip_line_comment();
            return None;
        }
        Some(self.make_token(TokenKind::Slash))
    }
}
