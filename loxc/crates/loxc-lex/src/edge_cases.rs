//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, Token, TokenKind};
    use loxc_util::Handler;

    fn lex_all(source: &str) -> (Vec<Token>, Vec<String>) {
        let mut handler = Handler::new();
        let tokens = scan(source, &mut handler).into_vec();
        let errors = handler.diagnostics().iter().map(|d| d.to_string()).collect();
        (tokens, errors)
    }

    fn lines(source: &str) -> Vec<String> {
        lex_all(source).0.iter().map(Token::to_string).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_bang_equal_versus_bang() {
        assert_eq!(lines("!="), vec!["BANG_EQUAL != null", "EOF  null"]);
        assert_eq!(lines("!"), vec!["BANG ! null", "EOF  null"]);
    }

    #[test]
    fn test_edge_comment_then_code() {
        let (tokens, errors) = lex_all("// c\nx");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[0].line(), 2);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_edge_trailing_dot_number() {
        assert_eq!(lines("123."), vec!["NUMBER 123 123", "DOT . null", "EOF  null"]);
    }

    #[test]
    fn test_edge_multiline_string() {
        let (tokens, errors) = lex_all("\"a\nb\"");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].to_string(), "STRING \"a\nb\" a\nb");
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].kind(), TokenKind::Eof);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_edge_keyword_prefix() {
        assert_eq!(lines("classroom"), vec!["IDENTIFIER classroom null", "EOF  null"]);
    }

    #[test]
    fn test_edge_unterminated_string() {
        let (tokens, errors) = lex_all("\"abc");
        assert_eq!(tokens.len(), 1);
        assert_eq!(errors, vec!["[line 1] Error: Unterminated string."]);
    }

    #[test]
    fn test_edge_unterminated_string_across_newline() {
        let (tokens, errors) = lex_all("\"ab\nc");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line(), 2);
        assert_eq!(errors, vec!["[line 2] Error: Unterminated string."]);
    }

    #[test]
    fn test_edge_unexpected_character_then_text() {
        let (tokens, errors) = lex_all("@abc");
        assert_eq!(errors, vec!["[line 1] Error: Unexpected character: @"]);
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme(), "abc");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(lines(""), vec!["EOF  null"]);
    }

    #[test]
    fn test_edge_only_newlines() {
        let (tokens, _) = lex_all("\n\n\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line(), 4);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let (tokens, errors) = lex_all("a\r\nb\r\n");
        assert!(errors.is_empty());
        let lines: Vec<_> = tokens.iter().map(Token::line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_slash_at_end() {
        assert_eq!(lines("/"), vec!["SLASH / null", "EOF  null"]);
    }

    #[test]
    fn test_edge_comment_without_newline() {
        assert_eq!(lines("//"), vec!["EOF  null"]);
    }

    #[test]
    fn test_edge_comment_keeps_line_count() {
        let (tokens, _) = lex_all("// one\n// two\ny");
        assert_eq!(tokens[0].line(), 3);
    }

    #[test]
    fn test_edge_divide_then_comment() {
        let (tokens, _) = lex_all("a / b // c / d");
        let kinds: Vec<_> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Slash, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (tokens, _) = lex_all(&format!("var {} = 1;", name));
        assert_eq!(tokens[1].lexeme(), name);
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(
            lines("12abc"),
            vec!["NUMBER 12 12", "IDENTIFIER abc null", "EOF  null"]
        );
    }

    #[test]
    fn test_edge_number_zero_fraction() {
        assert_eq!(lines("1.0"), vec!["NUMBER 1.0 1", "EOF  null"]);
    }

    #[test]
    fn test_edge_small_number_uses_exponent() {
        assert_eq!(lines("0.00001"), vec!["NUMBER 0.00001 1e-05", "EOF  null"]);
        assert_eq!(lines("0.0001"), vec!["NUMBER 0.0001 0.0001", "EOF  null"]);
    }

    #[test]
    fn test_edge_large_number_uses_exponent() {
        assert_eq!(
            lines("100000000000000000000"),
            vec!["NUMBER 100000000000000000000 100000000000000000000", "EOF  null"]
        );
        assert_eq!(
            lines("1000000000000000000000"),
            vec!["NUMBER 1000000000000000000000 1e+21", "EOF  null"]
        );
    }

    #[test]
    fn test_edge_string_containing_comment() {
        let (tokens, _) = lex_all("\"// not a comment\"");
        assert_eq!(tokens[0].literal().as_str(), Some("// not a comment"));
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let (tokens, _) = lex_all("\"a\"\"b\"");
        let lexemes: Vec<_> = tokens.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["\"a\"", "\"b\"", ""]);
    }

    #[test]
    fn test_edge_many_errors_one_line() {
        let (tokens, errors) = lex_all("#$%^&|?");
        assert_eq!(tokens.len(), 1);
        assert_eq!(errors.len(), 7);
        assert!(errors.iter().all(|e| e.starts_with("[line 1] Error: Unexpected character: ")));
    }

    #[test]
    fn test_edge_tab_and_carriage_return_are_blank() {
        let (tokens, errors) = lex_all("\tx\r");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 2);
    }
}
