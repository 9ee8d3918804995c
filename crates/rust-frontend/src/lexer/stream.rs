//! Significant tokens with trivia on a side channel.

use text_size::{TextRange, TextSize};

use crate::error::LexError;
use crate::lexer::{Lexer, Token, TokenKind};

/// Kind of a trivia item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    /// Horizontal whitespace run.
    Whitespace,
    /// One line terminator (`\n`, `\r` or `\r\n`).
    Newline,
    /// `//` comment, doc comments included.
    LineComment,
    /// `/* */` comment, possibly nested.
    BlockComment,
    /// Leading `#!` line.
    Shebang,
}

/// Whitespace or comment between two significant tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trivia {
    /// The kind of trivia.
    pub kind: TriviaKind,
    /// The byte range of the trivia in the source text.
    pub range: TextRange,
}

impl Trivia {
    fn from_token(token: Token) -> Option<Self> {
        let kind = match token.kind {
            TokenKind::Whitespace => TriviaKind::Whitespace,
            TokenKind::Newline => TriviaKind::Newline,
            TokenKind::LineComment => TriviaKind::LineComment,
            TokenKind::BlockComment => TriviaKind::BlockComment,
            TokenKind::Shebang => TriviaKind::Shebang,
            _ => return None,
        };
        Some(Self {
            kind,
            range: token.range,
        })
    }

    /// Token kind used for this trivia in the syntax tree.
    #[must_use]
    pub fn token_kind(self) -> TokenKind {
        match self.kind {
            TriviaKind::Whitespace => TokenKind::Whitespace,
            TriviaKind::Newline => TokenKind::Newline,
            TriviaKind::LineComment => TokenKind::LineComment,
            TriviaKind::BlockComment => TokenKind::BlockComment,
            TriviaKind::Shebang => TokenKind::Shebang,
        }
    }
}

/// The lexed form of one input buffer.
///
/// Rules only ever see [`TokenStream::tokens`]; trivia is kept in offset
/// order so the original text can be rebuilt exactly.
#[derive(Debug, Clone)]
pub struct TokenStream<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    trivia: Vec<Trivia>,
}

impl<'src> TokenStream<'src> {
    /// Lexes `source`, failing on the first malformed token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] carrying the byte offset of the first
    /// unrecognized character or unterminated literal/comment.
    pub fn new(source: &'src str) -> Result<Self, LexError> {
        let mut tokens = Vec::new();
        let mut trivia = Vec::new();

        for token in Lexer::new(source) {
            if token.kind == TokenKind::Error {
                return Err(LexError::classify(token.text(source), token.range.start()));
            }
            match Trivia::from_token(token) {
                Some(item) => trivia.push(item),
                None => tokens.push(token),
            }
        }

        Ok(Self {
            source,
            tokens,
            trivia,
        })
    }

    /// Returns the source text.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Significant tokens in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Trivia in source order.
    #[must_use]
    pub fn trivia(&self) -> &[Trivia] {
        &self.trivia
    }

    /// Number of significant tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the input holds no significant token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Kind of the significant token at `pos`, or `Eof`.
    #[must_use]
    pub fn kind(&self, pos: usize) -> TokenKind {
        self.tokens.get(pos).map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Text of the significant token at `pos`, or `""` past the end.
    #[must_use]
    pub fn text(&self, pos: usize) -> &'src str {
        self.tokens.get(pos).map_or("", |t| t.text(self.source))
    }

    /// Returns true if the token at `pos` directly follows the previous
    /// significant token, with no trivia in between.
    #[must_use]
    pub fn is_joint(&self, pos: usize) -> bool {
        match (pos.checked_sub(1), self.tokens.get(pos)) {
            (Some(prev), Some(token)) => self.tokens[prev].range.end() == token.range.start(),
            _ => false,
        }
    }

    /// Byte offset where the significant token at `pos` starts; the end of
    /// input when `pos` is past the last token.
    #[must_use]
    pub fn offset(&self, pos: usize) -> TextSize {
        self.tokens
            .get(pos)
            .map_or_else(|| TextSize::of(self.source), |t| t.range.start())
    }

    /// Byte range covered by the significant tokens `start..end`.
    ///
    /// An empty token range maps to an empty text range at the start of the
    /// next token.
    #[must_use]
    pub fn text_range(&self, start: usize, end: usize) -> TextRange {
        if end <= start {
            return TextRange::empty(self.offset(start));
        }
        TextRange::new(
            self.tokens[start].range.start(),
            self.tokens[end - 1].range.end(),
        )
    }

    /// All tokens, trivia included, merged back in offset order.
    pub fn all_tokens(&self) -> impl Iterator<Item = Token> + '_ {
        let mut trivia = self.trivia.iter().copied().peekable();
        let mut tokens = self.tokens.iter().copied().peekable();
        std::iter::from_fn(move || match (trivia.peek(), tokens.peek()) {
            (Some(t), Some(tok)) if t.range.start() < tok.range.start() => {
                trivia.next().map(|t| Token::new(t.token_kind(), t.range))
            }
            (_, Some(_)) => tokens.next(),
            (Some(_), None) => trivia.next().map(|t| Token::new(t.token_kind(), t.range)),
            (None, None) => None,
        })
    }

    /// Rebuilds the source text from trivia and tokens.
    #[must_use]
    pub fn reconstruct(&self) -> String {
        self.all_tokens()
            .map(|token| token.text(self.source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_trivia_from_tokens() {
        let stream = TokenStream::new("a /* c */ b\n").unwrap();
        assert_eq!(stream.len(), 2);
        let kinds: Vec<_> = stream.trivia().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TriviaKind::Whitespace,
                TriviaKind::BlockComment,
                TriviaKind::Whitespace,
                TriviaKind::Newline
            ]
        );
    }

    #[test]
    fn test_reconstruct_is_lossless() {
        let source = "#!/bin/sh\n// c\r\nfn  f ( ) { /* a /* b */ */ }\t\n";
        let stream = TokenStream::new(source).unwrap();
        assert_eq!(stream.reconstruct(), source);
    }

    #[test]
    fn test_jointness() {
        let stream = TokenStream::new("a::b : :c").unwrap();
        assert!(!stream.is_joint(0));
        assert!(stream.is_joint(1));
        assert!(stream.is_joint(2));
        assert!(stream.is_joint(3));
        assert!(!stream.is_joint(4));
        assert!(!stream.is_joint(5));
        assert!(stream.is_joint(6));
    }

    #[test]
    fn test_offsets_past_end() {
        let stream = TokenStream::new("ab  ").unwrap();
        assert_eq!(stream.offset(1), TextSize::from(4));
        assert_eq!(stream.kind(1), TokenKind::Eof);
        assert_eq!(stream.text_range(1, 1), TextRange::empty(TextSize::from(4)));
    }

    #[test]
    fn test_errors_carry_offset() {
        let err = TokenStream::new("let s = \"open").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { offset: 8 });

        let err = TokenStream::new("a /* open").unwrap_err();
        assert_eq!(err, LexError::UnterminatedBlockComment { offset: 2 });

        let err = TokenStream::new("x \u{1F600}").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { offset: 2, .. }));
    }
}
