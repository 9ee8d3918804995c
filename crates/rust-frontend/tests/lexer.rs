use expect_test::expect;
use rust_frontend::lexer::{lex_with_text, TokenKind, TokenStream, TriviaKind};
use rust_frontend::LexError;

fn non_trivia_kinds(source: &str) -> Vec<TokenKind> {
    lex_with_text(source)
        .into_iter()
        .filter(|(token, _)| !token.kind.is_trivia())
        .map(|(token, _)| token.kind)
        .collect()
}

fn dump(source: &str) -> String {
    lex_with_text(source)
        .into_iter()
        .map(|(token, text)| format!("{:?} {:?}\n", token.kind, text))
        .collect()
}

#[test]
fn tuple_index_is_not_a_float() {
    expect![[r#"
        Ident "point"
        Dot "."
        NumberLiteral "1"
    "#]]
    .assert_eq(&dump("point.1"));

    expect![[r#"
        Ident "t"
        Dot "."
        NumberLiteral "0"
        Dot "."
        NumberLiteral "1"
    "#]]
    .assert_eq(&dump("t.0.1"));
}

#[test]
fn float_pieces() {
    expect![[r#"
        NumberLiteral "1"
        Dot "."
        NumberLiteral "5e3"
        Whitespace " "
        NumberLiteral "2E-3f64"
        Whitespace " "
        NumberLiteral "0x1e"
        Minus "-"
        NumberLiteral "2"
    "#]]
    .assert_eq(&dump("1.5e3 2E-3f64 0x1e-2"));
}

#[test]
fn punctuation_is_single_characters() {
    assert_eq!(
        non_trivia_kinds("a::b -> c >>= d"),
        vec![
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Colon,
            TokenKind::Ident,
            TokenKind::Minus,
            TokenKind::Gt,
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn literals_and_lifetimes() {
    let source = r##"'a' 'static '_ b'x' "s\"q" r#"raw"# b"bytes" br"raw" c"cstr" 'outer: r#type"##;
    assert_eq!(
        non_trivia_kinds(source),
        vec![
            TokenKind::CharLiteral,
            TokenKind::Lifetime,
            TokenKind::Lifetime,
            TokenKind::ByteLiteral,
            TokenKind::StringLiteral,
            TokenKind::StringLiteral,
            TokenKind::ByteStringLiteral,
            TokenKind::ByteStringLiteral,
            TokenKind::CStringLiteral,
            TokenKind::Lifetime,
            TokenKind::Colon,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn unicode_identifiers() {
    expect![[r#"
        KwLet "let"
        Whitespace " "
        Ident "größe"
        Whitespace " "
        Eq "="
        Whitespace " "
        Ident "café"
        Dot "."
        Ident "naïve_2"
        Semicolon ";"
        Whitespace " "
        Lifetime "'état"
        Colon ":"
        Whitespace " "
        Ident "r#größe"
    "#]]
    .assert_eq(&dump("let größe = café.naïve_2; 'état: r#größe"));
}

#[test]
fn keywords_and_weak_keywords() {
    assert_eq!(
        non_trivia_kinds("pub(crate) union macro_rules self Self _"),
        vec![
            TokenKind::KwPub,
            TokenKind::LParen,
            TokenKind::KwCrate,
            TokenKind::RParen,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::KwSelfValue,
            TokenKind::KwSelfType,
            TokenKind::Underscore,
        ]
    );
}

#[test]
fn comments_are_trivia() {
    let source = "a // line\r\n/* outer /* inner */ outer */ /// doc\nb";
    let stream = TokenStream::new(source).unwrap();
    assert_eq!(stream.len(), 2);
    let kinds: Vec<_> = stream.trivia().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TriviaKind::Whitespace,
            TriviaKind::LineComment,
            TriviaKind::Newline,
            TriviaKind::BlockComment,
            TriviaKind::Whitespace,
            TriviaKind::LineComment,
            TriviaKind::Newline,
        ]
    );
    assert_eq!(stream.reconstruct(), source);
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(
        TokenStream::new("x /* never closed").unwrap_err(),
        LexError::UnterminatedBlockComment { offset: 2 }
    );
    assert_eq!(
        TokenStream::new("r#\"open\"").unwrap_err(),
        LexError::UnterminatedString { offset: 0 }
    );
    assert_eq!(
        TokenStream::new("'").unwrap_err(),
        LexError::UnterminatedChar { offset: 0 }
    );
    assert_eq!(
        TokenStream::new("let c = ' ;").unwrap_err(),
        LexError::UnterminatedChar { offset: 8 }
    );
    assert!(matches!(
        TokenStream::new("a ¤ b").unwrap_err(),
        LexError::UnexpectedCharacter { offset: 2, .. }
    ));
}
