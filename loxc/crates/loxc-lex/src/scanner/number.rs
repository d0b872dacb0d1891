//! Number literal lexing.
//!
//! This module handles lexing of decimal number literals.

use loxc_util::DiagnosticCode;

use crate::ascii::is_digit;
use crate::token::{Literal, Token, TokenKind};
use crate::Scanner;

impl Scanner<'_, '_> {
    /// Lexes a number literal. The first digit is already consumed.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `007`
    /// - Fraction: `3.14`
    ///
    /// A `.` only belongs to the number when a digit follows it, so `123.`
    /// scans as `123` and leaves the dot for the next token. Signs are
    /// separate MINUS tokens; there are no exponents or other bases.
    ///
    /// # Returns
    ///
    /// A NUMBER token whose literal is the value as `f64`
    pub(crate) fn lex_number(&mut self) -> Token {
        while is_digit(self.cursor.peek()) {
            self.cursor.advance();
        }

        if self.cursor.peek() == b'.' && is_digit(self.cursor.peek_next()) {
            // Consume the '.'
            self.cursor.advance();
            while is_digit(self.cursor.peek()) {
                self.cursor.advance();
            }
        }

        let text = self.cursor.lexeme();
        // Digits with at most one interior '.' always parse; the error arm
        // only guards against the recognizer above accepting more.
        let value = match text.parse::<f64>() {
            Ok(value) => value,
            Err(e) => {
                self.report_error(
                    format!("Invalid number literal '{}': {}", text, e),
                    DiagnosticCode::E_LEXER_INVALID_NUMBER,
                );
                0.0
            },
        };
        self.make_literal_token(TokenKind::Number, Literal::Number(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Literal, TokenKind};
    use crate::TokenStream;
    use loxc_util::Handler;

    fn lex_num(source: &str) -> TokenStream {
        let mut handler = Handler::new_panicking();
        crate::scan(source, &mut handler)
    }

    #[test]
    fn test_integer() {
        let tokens = lex_num("42");
        assert_eq!(tokens[0].kind(), TokenKind::Number);
        assert_eq!(tokens[0].lexeme(), "42");
        assert_eq!(tokens[0].literal(), &Literal::Number(42.0));
        assert_eq!(tokens[0].to_string(), "NUMBER 42 42");
    }

    #[test]
    fn test_fraction() {
        let tokens = lex_num("3.14");
        assert_eq!(tokens[0].lexeme(), "3.14");
        assert_eq!(tokens[0].literal().as_number(), Some(3.14));
    }

    #[test]
    fn test_leading_zeros() {
        let tokens = lex_num("007.50");
        assert_eq!(tokens[0].lexeme(), "007.50");
        assert_eq!(tokens[0].literal().as_number(), Some(7.5));
        assert_eq!(tokens[0].to_string(), "NUMBER 007.50 7.5");
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        let tokens = lex_num("123.");
        let kinds: Vec<_> = tokens.kinds().collect();
        assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
        assert_eq!(tokens[0].lexeme(), "123");
    }

    #[test]
    fn test_leading_dot_is_separate() {
        let tokens = lex_num(".5");
        let kinds: Vec<_> = tokens.kinds().collect();
        assert_eq!(kinds, vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_method_call_on_number() {
        let tokens = lex_num("1.2.3");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(lexemes, vec!["1.2", ".", "3", ""]);
    }

    #[test]
    fn test_minus_is_separate() {
        let tokens = lex_num("-7");
        let kinds: Vec<_> = tokens.kinds().collect();
        assert_eq!(kinds, vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_no_exponent() {
        let tokens = lex_num("1e5");
        let kinds: Vec<_> = tokens.kinds().collect();
        assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn test_digit_runs_never_report_invalid_number() {
        // The panicking handler fails the test on any diagnostic.
        for source in ["0", "0.0", "00000.00001", "1.2.3.4", "9999999999999999999999.5"] {
            let tokens = lex_num(source);
            assert_eq!(tokens[0].kind(), TokenKind::Number, "source {source}");
        }
    }

    #[test]
    fn test_overflowing_number_is_infinity() {
        let mut handler = Handler::new();
        let source = "9".repeat(400);
        let tokens = crate::scan(&source, &mut handler);
        assert!(!handler.has_errors());
        assert_eq!(tokens[0].lexeme().len(), 400);
        assert_eq!(tokens[0].literal().as_number(), Some(f64::INFINITY));
    }
}
