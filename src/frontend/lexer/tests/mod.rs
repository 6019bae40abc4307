//! Lexer tests

#[cfg(test)]
mod lexer_tests {
    use crate::frontend::lexer::tokenize;
    use crate::frontend::lexer::tokens::TokenKind;
    use crate::frontend::lexer::LexError;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_class_header() {
        assert_eq!(
            kinds("class Main inherits IO {"),
            vec![
                TokenKind::KwClass,
                TokenKind::TypeId("Main".to_string()),
                TokenKind::KwInherits,
                TokenKind::TypeId("IO".to_string()),
                TokenKind::LBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            kinds("CLASS Else iF"),
            vec![
                TokenKind::KwClass,
                TokenKind::KwElse,
                TokenKind::KwIf,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_bool_literals_need_lowercase_start() {
        assert_eq!(
            kinds("true fALSE True"),
            vec![
                TokenKind::BoolLiteral(true),
                TokenKind::BoolLiteral(false),
                TokenKind::TypeId("True".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("x <- y <= z < w = v => ~ @ ."),
            vec![
                TokenKind::ObjectId("x".to_string()),
                TokenKind::Assign,
                TokenKind::ObjectId("y".to_string()),
                TokenKind::Le,
                TokenKind::ObjectId("z".to_string()),
                TokenKind::Lt,
                TokenKind::ObjectId("w".to_string()),
                TokenKind::Eq,
                TokenKind::ObjectId("v".to_string()),
                TokenKind::DArrow,
                TokenKind::Tilde,
                TokenKind::At,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("1 -- line comment\n(* outer (* inner *) still *) 2"),
            vec![
                TokenKind::IntLiteral(1),
                TokenKind::IntLiteral(2),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            kinds(r#""a\nb\tc\"d\\e\q""#),
            vec![
                TokenKind::StringLiteral("a\nb\tc\"d\\eq".to_string()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_spans_track_lines() {
        let tokens = tokenize("a\n  b").unwrap();
        assert_eq!(tokens[1].span.start.line, 2);
        assert_eq!(tokens[1].span.start.column, 3);
    }

    #[test]
    fn test_errors_are_collected() {
        let errors = tokenize("a # b $ c").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], LexError::InvalidCharacter { ch: '#', .. }));
        assert!(matches!(errors[1], LexError::InvalidCharacter { ch: '$', .. }));
    }

    #[test]
    fn test_unterminated_string() {
        let errors = tokenize("\"abc").unwrap_err();
        assert!(matches!(errors[0], LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_newline_in_string() {
        let errors = tokenize("\"ab\ncd\"").unwrap_err();
        assert!(matches!(errors[0], LexError::NewlineInString { .. }));
    }

    #[test]
    fn test_unterminated_comment() {
        let errors = tokenize("(* never closed").unwrap_err();
        assert!(matches!(errors[0], LexError::UnterminatedComment { .. }));
    }

    #[test]
    fn test_unmatched_comment_close() {
        let errors = tokenize("x *) y").unwrap_err();
        assert!(matches!(errors[0], LexError::UnmatchedCommentClose { .. }));
    }

    #[test]
    fn test_integer_out_of_range() {
        let errors = tokenize("99999999999999999999").unwrap_err();
        assert!(matches!(errors[0], LexError::IntegerOutOfRange { .. }));
    }

    #[test]
    fn test_diagnostic_code() {
        use crate::util::diagnostic::IntoDiagnostic;
        let errors = tokenize("#").unwrap_err();
        let diagnostic = errors[0].to_diagnostic();
        assert_eq!(diagnostic.code, "E0001");
        assert!(diagnostic.to_string().contains("at 1:1 to 1:2"));
    }
}
