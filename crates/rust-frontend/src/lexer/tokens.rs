//! Token definitions for Rust source text.
//!
//! This module defines all lexical tokens that can appear in Rust source code.
//! The token kinds are designed to work with both the `logos` lexer generator
//! and the `rowan` lossless syntax tree library.
//!
//! Punctuation is always lexed one character at a time. Multi-character
//! operators such as `::`, `->` or `>>=` are assembled by the grammar from
//! *joint* tokens, which keeps `Vec<Vec<u8>>` and `a >> b` unambiguous.
//! Likewise a `.` is never part of a numeric token, so `point.1` lexes as
//! `Ident Dot NumberLiteral` and the grammar decides between float literals
//! and tuple indexing.

use logos::Logos;

fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_nested_comment(lex, b"/*", b"*/")
}

fn lex_nested_comment(lex: &mut logos::Lexer<TokenKind>, open: &[u8], close: &[u8]) -> bool {
    let mut depth = 1usize;
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i + 1 < bytes.len() {
        if bytes[i] == open[0] && bytes[i + 1] == open[1] {
            depth += 1;
            i += 2;
            continue;
        }
        if bytes[i] == close[0] && bytes[i + 1] == close[1] {
            depth -= 1;
            i += 2;
            if depth == 0 {
                lex.bump(i);
                return true;
            }
            continue;
        }
        i += 1;
    }

    lex.bump(bytes.len());
    false
}

/// Scans a quoted literal body after its opening `"`, honouring `\` escapes.
fn lex_quoted(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => {
                lex.bump(i + 1);
                return true;
            }
            _ => i += 1,
        }
    }

    lex.bump(bytes.len());
    false
}

/// Scans a raw literal body; the closing quote must be followed by as many
/// `#` as the opening one.
fn lex_raw_quoted(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let hashes = lex.slice().bytes().filter(|b| *b == b'#').count();
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] == b'"' {
            let closing = bytes[i + 1..].iter().take_while(|b| **b == b'#').count();
            if closing >= hashes {
                lex.bump(i + 1 + hashes);
                return true;
            }
        }
        i += 1;
    }

    lex.bump(bytes.len());
    false
}

/// Extends a decimal number ending in an exponent marker over a signed
/// exponent, e.g. `1e-5` or `2E+10f64`.
fn lex_number(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let slice = lex.slice();
    let is_decimal = !matches!(slice.get(..2), Some("0x" | "0o" | "0b"));
    if !is_decimal || !slice.ends_with(['e', 'E']) {
        return true;
    }

    let rest = lex.remainder().as_bytes();
    if rest.len() >= 2 && matches!(rest[0], b'+' | b'-') && rest[1].is_ascii_digit() {
        let tail = rest[1..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
            .count();
        lex.bump(1 + tail);
    }
    true
}

/// All token kinds in Rust source text.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, newlines, comments) - preserved but invisible to rules
/// - Punctuation (single characters only)
/// - Strict keywords
/// - Literals and lifetimes
/// - Identifiers
/// - Special tokens (errors, EOF)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Horizontal whitespace (spaces, tabs, form feeds)
    #[regex(r"[ \t\x0B\x0C]+")]
    Whitespace,

    /// A single line terminator: `\n`, `\r` or `\r\n`
    #[regex(r"\r\n|\r|\n")]
    Newline,

    /// Line comment, including doc comments: `// ...`, `/// ...`, `//! ...`
    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    /// Block comment: `/* ... */` (supports nesting).
    #[token("/*", lex_block_comment)]
    BlockComment,

    /// `#!/usr/bin/env ...` on the first line. Never produced by logos.
    Shebang,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `@`
    #[token("@")]
    At,

    /// `#`
    #[token("#")]
    Hash,

    /// `~`
    #[token("~")]
    Tilde,

    /// `?`
    #[token("?")]
    Question,

    /// `:`
    #[token(":")]
    Colon,

    /// `$`
    #[token("$")]
    Dollar,

    /// `=`
    #[token("=")]
    Eq,

    /// `!`
    #[token("!")]
    Bang,

    /// `<`
    #[token("<")]
    Lt,

    /// `>`
    #[token(">")]
    Gt,

    /// `-`
    #[token("-")]
    Minus,

    /// `&`
    #[token("&")]
    Ampersand,

    /// `|`
    #[token("|")]
    Pipe,

    /// `+`
    #[token("+")]
    Plus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    /// `^`
    #[token("^")]
    Caret,

    /// `%`
    #[token("%")]
    Percent,

    /// `_`
    #[token("_", priority = 3)]
    Underscore,

    // =========================================================================
    // KEYWORDS - Strict
    // =========================================================================
    /// `as`
    #[token("as")]
    KwAs,

    /// `async`
    #[token("async")]
    KwAsync,

    /// `await`
    #[token("await")]
    KwAwait,

    /// `break`
    #[token("break")]
    KwBreak,

    /// `const`
    #[token("const")]
    KwConst,

    /// `continue`
    #[token("continue")]
    KwContinue,

    /// `crate`
    #[token("crate")]
    KwCrate,

    /// `dyn`
    #[token("dyn")]
    KwDyn,

    /// `else`
    #[token("else")]
    KwElse,

    /// `enum`
    #[token("enum")]
    KwEnum,

    /// `extern`
    #[token("extern")]
    KwExtern,

    /// `false`
    #[token("false")]
    KwFalse,

    /// `fn`
    #[token("fn")]
    KwFn,

    /// `for`
    #[token("for")]
    KwFor,

    /// `if`
    #[token("if")]
    KwIf,

    /// `impl`
    #[token("impl")]
    KwImpl,

    /// `in`
    #[token("in")]
    KwIn,

    /// `let`
    #[token("let")]
    KwLet,

    /// `loop`
    #[token("loop")]
    KwLoop,

    /// `match`
    #[token("match")]
    KwMatch,

    /// `mod`
    #[token("mod")]
    KwMod,

    /// `move`
    #[token("move")]
    KwMove,

    /// `mut`
    #[token("mut")]
    KwMut,

    /// `pub`
    #[token("pub")]
    KwPub,

    /// `ref`
    #[token("ref")]
    KwRef,

    /// `return`
    #[token("return")]
    KwReturn,

    /// `self`
    #[token("self")]
    KwSelfValue,

    /// `Self`
    #[token("Self")]
    KwSelfType,

    /// `static`
    #[token("static")]
    KwStatic,

    /// `struct`
    #[token("struct")]
    KwStruct,

    /// `super`
    #[token("super")]
    KwSuper,

    /// `trait`
    #[token("trait")]
    KwTrait,

    /// `true`
    #[token("true")]
    KwTrue,

    /// `type`
    #[token("type")]
    KwType,

    /// `unsafe`
    #[token("unsafe")]
    KwUnsafe,

    /// `use`
    #[token("use")]
    KwUse,

    /// `where`
    #[token("where")]
    KwWhere,

    /// `while`
    #[token("while")]
    KwWhile,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Numeric literal without a `.`: `42`, `0x2A_u8`, `4usize`, `1e-5`
    #[regex(r"[0-9][0-9a-zA-Z_]*", lex_number)]
    NumberLiteral,

    /// String literal: `"..."`, `r"..."`, `r#"..."#`
    #[token("\"", lex_quoted)]
    #[regex(r##"r#*""##, lex_raw_quoted)]
    StringLiteral,

    /// Byte string literal: `b"..."`, `br#"..."#`
    #[token("b\"", lex_quoted)]
    #[regex(r##"br#*""##, lex_raw_quoted)]
    ByteStringLiteral,

    /// C string literal: `c"..."`, `cr#"..."#`
    #[token("c\"", lex_quoted)]
    #[regex(r##"cr#*""##, lex_raw_quoted)]
    CStringLiteral,

    /// Character literal: `'a'`, `'\n'`, `'\u{1F600}'`
    #[regex(r#"'([^'\\\n\r\t]|\\[nrt\\0'"]|\\x[0-9a-fA-F][0-9a-fA-F]|\\u\{[0-9a-fA-F_]+\})'"#)]
    CharLiteral,

    /// Byte literal: `b'a'`, `b'\x7F'`
    #[regex(r#"b'([^'\\\n\r\t]|\\[nrt\\0'"]|\\x[0-9a-fA-F][0-9a-fA-F])'"#)]
    ByteLiteral,

    /// Lifetime or loop label: `'a`, `'static`, `'_`
    #[regex(r"'[\p{XID_Start}_]\p{XID_Continue}*")]
    Lifetime,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier, including raw identifiers (`r#type`) and weak keywords
    /// such as `union`, `macro_rules` and `default`
    #[regex(r"[\p{XID_Start}_]\p{XID_Continue}*")]
    #[regex(r"r#[\p{XID_Start}_]\p{XID_Continue}*")]
    Ident,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// Lexer error (unrecognized character or unterminated literal)
    Error,

    /// End of file
    #[default]
    Eof,
}

impl TokenKind {
    /// Returns true if this token is trivia (whitespace, newline, or comment).
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::Shebang
        )
    }

    /// Returns true if this token is a strict keyword.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::KwAs && self <= TokenKind::KwWhile
    }

    /// Returns true if this token is a single punctuation character.
    #[must_use]
    pub fn is_punct(self) -> bool {
        self >= TokenKind::Semicolon && self <= TokenKind::Underscore
    }

    /// Maps a punctuation character to its token kind.
    #[must_use]
    pub fn from_punct(c: char) -> Option<TokenKind> {
        let kind = match c {
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '@' => TokenKind::At,
            '#' => TokenKind::Hash,
            '~' => TokenKind::Tilde,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            '$' => TokenKind::Dollar,
            '=' => TokenKind::Eq,
            '!' => TokenKind::Bang,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '-' => TokenKind::Minus,
            '&' => TokenKind::Ampersand,
            '|' => TokenKind::Pipe,
            '+' => TokenKind::Plus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '%' => TokenKind::Percent,
            '_' => TokenKind::Underscore,
            _ => return None,
        };
        Some(kind)
    }

    /// Human readable description used in failure reports.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Shebang => "shebang",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::At => "`@`",
            TokenKind::Hash => "`#`",
            TokenKind::Tilde => "`~`",
            TokenKind::Question => "`?`",
            TokenKind::Colon => "`:`",
            TokenKind::Dollar => "`$`",
            TokenKind::Eq => "`=`",
            TokenKind::Bang => "`!`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Minus => "`-`",
            TokenKind::Ampersand => "`&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Plus => "`+`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Caret => "`^`",
            TokenKind::Percent => "`%`",
            TokenKind::Underscore => "`_`",
            TokenKind::KwAs => "`as`",
            TokenKind::KwAsync => "`async`",
            TokenKind::KwAwait => "`await`",
            TokenKind::KwBreak => "`break`",
            TokenKind::KwConst => "`const`",
            TokenKind::KwContinue => "`continue`",
            TokenKind::KwCrate => "`crate`",
            TokenKind::KwDyn => "`dyn`",
            TokenKind::KwElse => "`else`",
            TokenKind::KwEnum => "`enum`",
            TokenKind::KwExtern => "`extern`",
            TokenKind::KwFalse => "`false`",
            TokenKind::KwFn => "`fn`",
            TokenKind::KwFor => "`for`",
            TokenKind::KwIf => "`if`",
            TokenKind::KwImpl => "`impl`",
            TokenKind::KwIn => "`in`",
            TokenKind::KwLet => "`let`",
            TokenKind::KwLoop => "`loop`",
            TokenKind::KwMatch => "`match`",
            TokenKind::KwMod => "`mod`",
            TokenKind::KwMove => "`move`",
            TokenKind::KwMut => "`mut`",
            TokenKind::KwPub => "`pub`",
            TokenKind::KwRef => "`ref`",
            TokenKind::KwReturn => "`return`",
            TokenKind::KwSelfValue => "`self`",
            TokenKind::KwSelfType => "`Self`",
            TokenKind::KwStatic => "`static`",
            TokenKind::KwStruct => "`struct`",
            TokenKind::KwSuper => "`super`",
            TokenKind::KwTrait => "`trait`",
            TokenKind::KwTrue => "`true`",
            TokenKind::KwType => "`type`",
            TokenKind::KwUnsafe => "`unsafe`",
            TokenKind::KwUse => "`use`",
            TokenKind::KwWhere => "`where`",
            TokenKind::KwWhile => "`while`",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::ByteStringLiteral => "byte string literal",
            TokenKind::CStringLiteral => "C string literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::ByteLiteral => "byte literal",
            TokenKind::Lifetime => "lifetime",
            TokenKind::Ident => "identifier",
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
        }
    }
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        let mut lexer = TokenKind::lexer(input);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            tokens.push((result.unwrap_or(TokenKind::Error), lexer.slice()));
        }
        tokens
    }

    fn significant(input: &str) -> Vec<(TokenKind, &str)> {
        lex(input)
            .into_iter()
            .filter(|(kind, _)| !kind.is_trivia())
            .collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = significant("fn main self Self union r#type _ _x");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::KwFn, "fn"),
                (TokenKind::Ident, "main"),
                (TokenKind::KwSelfValue, "self"),
                (TokenKind::KwSelfType, "Self"),
                (TokenKind::Ident, "union"),
                (TokenKind::Ident, "r#type"),
                (TokenKind::Underscore, "_"),
                (TokenKind::Ident, "_x"),
            ]
        );
    }

    #[test]
    fn test_punctuation_is_single_char() {
        let kinds: Vec<_> = significant(":: -> >>= ..=")
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Colon,
                TokenKind::Colon,
                TokenKind::Minus,
                TokenKind::Gt,
                TokenKind::Gt,
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::Dot,
                TokenKind::Dot,
                TokenKind::Eq,
            ]
        );
    }

    #[test]
    fn test_numbers_never_contain_dots() {
        assert_eq!(
            significant("4.5"),
            vec![
                (TokenKind::NumberLiteral, "4"),
                (TokenKind::Dot, "."),
                (TokenKind::NumberLiteral, "5"),
            ]
        );
        assert_eq!(
            significant("0x2A_u8 4usize 1e-5 2E+10f64"),
            vec![
                (TokenKind::NumberLiteral, "0x2A_u8"),
                (TokenKind::NumberLiteral, "4usize"),
                (TokenKind::NumberLiteral, "1e-5"),
                (TokenKind::NumberLiteral, "2E+10f64"),
            ]
        );
    }

    #[test]
    fn test_hex_minus_is_not_an_exponent() {
        assert_eq!(
            significant("0xE-1"),
            vec![
                (TokenKind::NumberLiteral, "0xE"),
                (TokenKind::Minus, "-"),
                (TokenKind::NumberLiteral, "1"),
            ]
        );
    }

    #[test]
    fn test_lifetimes_and_chars() {
        assert_eq!(
            significant("'a 'static 'x' '\\n' b'z' '_"),
            vec![
                (TokenKind::Lifetime, "'a"),
                (TokenKind::Lifetime, "'static"),
                (TokenKind::CharLiteral, "'x'"),
                (TokenKind::CharLiteral, "'\\n'"),
                (TokenKind::ByteLiteral, "b'z'"),
                (TokenKind::Lifetime, "'_"),
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            significant(r#""a\"b" b"bytes" c"cstr""#),
            vec![
                (TokenKind::StringLiteral, r#""a\"b""#),
                (TokenKind::ByteStringLiteral, r#"b"bytes""#),
                (TokenKind::CStringLiteral, r#"c"cstr""#),
            ]
        );
    }

    #[test]
    fn test_raw_strings() {
        let source = r####"r"plain" r#"with "quotes""# br##"x"#y"##"####;
        assert_eq!(
            significant(source),
            vec![
                (TokenKind::StringLiteral, r#"r"plain""#),
                (TokenKind::StringLiteral, r###"r#"with "quotes""#"###),
                (TokenKind::ByteStringLiteral, r###"br##"x"#y"##"###),
            ]
        );
    }

    #[test]
    fn test_multiline_string() {
        let tokens = significant("\"line one\nline two\"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, TokenKind::StringLiteral);
    }

    #[test]
    fn test_comments() {
        let kinds: Vec<_> = lex("// line\n/// doc\n/* outer /* inner */ outer */")
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LineComment,
                TokenKind::Newline,
                TokenKind::LineComment,
                TokenKind::Newline,
                TokenKind::BlockComment,
            ]
        );
    }

    #[test]
    fn test_unterminated_literals_are_errors() {
        assert!(lex("/* never closed").iter().any(|(k, _)| *k == TokenKind::Error));
        assert!(lex("\"never closed").iter().any(|(k, _)| *k == TokenKind::Error));
        assert!(lex("r#\"never closed\"").iter().any(|(k, _)| *k == TokenKind::Error));
    }

    #[test]
    fn test_newlines_are_individual() {
        let kinds: Vec<_> = lex("\r\n\n\r").into_iter().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Newline, TokenKind::Newline, TokenKind::Newline]
        );
    }

    #[test]
    fn test_token_kind_categories() {
        assert!(TokenKind::BlockComment.is_trivia());
        assert!(TokenKind::KwWhere.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(TokenKind::Underscore.is_punct());
        assert_eq!(TokenKind::from_punct('>'), Some(TokenKind::Gt));
        assert_eq!(TokenKind::from_punct('a'), None);
    }
}
