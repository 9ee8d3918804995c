//! Syntax tree types for Rust source text.
//!
//! This module provides the `rowan`-based syntax tree implementation,
//! including the `SyntaxKind` enum that covers both tokens and the node
//! kinds produced by named grammar rules.

use crate::grammar::RuleName;
use crate::lexer::TokenKind;
use crate::token_kinds::{for_each_rule_name, for_each_token_kind};

macro_rules! define_syntax_kind {
    ($($token:ident),* $(,)?) => {
        for_each_rule_name!(define_syntax_kind_with_nodes [$($token),*]);
    };
}

macro_rules! define_syntax_kind_with_nodes {
    ([$($token:ident),*] $($rule:ident => $name:literal),* $(,)?) => {
        /// All syntax node and token kinds.
        ///
        /// Token kinds mirror [`TokenKind`] one to one; every [`RuleName`]
        /// contributes one node kind of the same name.
        // Variants mirror lexer and rule names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            $($token,)*
            $($rule,)*
        }

        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            $(SyntaxKind::$rule,)*
        ];

        impl From<TokenKind> for SyntaxKind {
            fn from(kind: TokenKind) -> Self {
                match kind {
                    $(TokenKind::$token => SyntaxKind::$token,)*
                }
            }
        }

        impl From<RuleName> for SyntaxKind {
            fn from(rule: RuleName) -> Self {
                match rule {
                    $(RuleName::$rule => SyntaxKind::$rule,)*
                }
            }
        }

        impl SyntaxKind {
            /// The rule that produces nodes of this kind.
            #[must_use]
            pub fn rule(self) -> Option<RuleName> {
                match self {
                    $(SyntaxKind::$rule => Some(RuleName::$rule),)*
                    _ => None,
                }
            }

            /// The lexer token of this kind.
            #[must_use]
            pub fn token(self) -> Option<TokenKind> {
                match self {
                    $(SyntaxKind::$token => Some(TokenKind::$token),)*
                    _ => None,
                }
            }
        }
    };
}

for_each_token_kind!(define_syntax_kind);

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Newline | Self::LineComment | Self::BlockComment | Self::Shebang
        )
    }

    /// Returns `true` if this is a token kind (not a composite node).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Eof as u16)
    }

    /// Returns `true` if this is a composite node kind.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for Rust syntax trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RustLanguage {}

impl rowan::Language for RustLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the Rust syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<RustLanguage>;

/// A syntax token in the Rust syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<RustLanguage>;

/// A syntax element (either node or token) in the Rust syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<RustLanguage>;
