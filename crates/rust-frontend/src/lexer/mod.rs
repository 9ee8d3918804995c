//! Lexer for Rust source text.
//!
//! This module provides a lexer that tokenizes Rust source code into a stream
//! of tokens with their positions in the source text, and a [`TokenStream`]
//! that separates significant tokens from trivia.

mod stream;
mod tokens;

pub use stream::{TokenStream, Trivia, TriviaKind};
pub use tokens::TokenKind;

use logos::Logos;
use std::collections::VecDeque;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Returns the length of the token in bytes.
    #[must_use]
    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    /// Returns true if the token has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns the raw text of the token.
    #[must_use]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.range]
    }
}

/// Lexer for Rust source code.
///
/// The lexer is an iterator over tokens, trivia included. Unrecognized
/// characters and unterminated literals are returned as `TokenKind::Error`;
/// [`TokenStream::new`] turns the first of them into a [`crate::LexError`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    pending: VecDeque<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut inner = TokenKind::lexer(source);
        let mut pending = VecDeque::new();

        let shebang = shebang_len(source);
        if shebang > 0 {
            inner.bump(shebang);
            pending.push_back(Token::new(
                TokenKind::Shebang,
                TextRange::new(0.into(), text_size(shebang)),
            ));
        }

        Self {
            inner,
            source,
            pending,
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the text of the current token.
    #[must_use]
    pub fn slice(&self) -> &'src str {
        self.inner.slice()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }

        let kind = self.inner.next()?;
        let span = self.inner.span();

        let kind = kind.unwrap_or(TokenKind::Error);
        let range = TextRange::new(text_size(span.start), text_size(span.end));

        Some(Token::new(kind, range))
    }
}

/// Length of a leading `#!` line that is not an inner attribute (`#![...]`).
fn shebang_len(source: &str) -> usize {
    let Some(rest) = source.strip_prefix("#!") else {
        return 0;
    };
    if rest.trim_start().starts_with('[') {
        return 0;
    }
    source.find('\n').unwrap_or(source.len())
}

#[allow(clippy::cast_possible_truncation)]
fn text_size(offset: usize) -> TextSize {
    TextSize::from(offset as u32)
}

/// Lex the entire source and return all tokens.
///
/// This is a convenience function for testing and simple use cases.
/// For matching, use [`TokenStream::new`] which also reports lexical errors.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| (token, token.text(source)))
        .collect()
}
