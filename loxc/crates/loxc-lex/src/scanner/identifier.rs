//! Identifier and keyword lexing.

use crate::ascii::is_alpha_numeric;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Scanner;

impl Scanner<'_, '_> {
    /// Lexes an identifier or keyword. The first letter is already consumed.
    ///
    /// Maximal munch: the whole run of letters, digits and underscores is
    /// one lexeme, which is then looked up in the keyword table.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_alpha_numeric(self.cursor.peek()) {
            self.cursor.advance();
        }

        let kind = keyword_from_ident(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
