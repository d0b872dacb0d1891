//! String literal lexing.
//!
//! Strings are delimited by double quotes, may span lines and have no escape
//! sequences: the literal value is exactly the text between the quotes.

use loxc_util::DiagnosticCode;

use crate::token::{Literal, Token, TokenKind};
use crate::Scanner;

impl Scanner<'_, '_> {
    /// Lexes a string literal. The opening quote is already consumed.
    ///
    /// # Returns
    ///
    /// `Some` STRING token whose lexeme keeps both quotes, or `None` after
    /// reporting an unterminated string on the line where input ran out.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        while self.cursor.peek() != b'"' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.report_error(
                "Unterminated string.".to_string(),
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            );
            return None;
        }

        // The closing quote.
        self.cursor.advance();

        let lexeme = self.cursor.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        Some(self.make_literal_token(TokenKind::String, Literal::String(value.to_string())))
    }
}
