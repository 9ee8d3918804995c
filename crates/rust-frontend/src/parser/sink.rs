//! Sink for converting events into a syntax tree.
//!
//! The sink replays the event stream against the full token list (trivia
//! included) and builds a `rowan` green tree. Trivia is attached in front
//! of the next node or token; whatever is left at the end belongs to the
//! root.

use crate::lexer::Token;
use crate::parser::event::Event;
use crate::syntax::SyntaxKind;

/// Builds a syntax tree from events.
pub(crate) struct Sink<'t, 'src> {
    tokens: &'t [Token],
    source: &'src str,
    events: Vec<Event>,
    cursor: usize,
    depth: usize,
    builder: rowan::GreenNodeBuilder<'static>,
}

impl<'t, 'src> Sink<'t, 'src> {
    /// Creates a new sink. `tokens` must contain trivia as well.
    pub(crate) fn new(tokens: &'t [Token], source: &'src str, events: Vec<Event>) -> Self {
        Self {
            tokens,
            source,
            events,
            cursor: 0,
            depth: 0,
            builder: rowan::GreenNodeBuilder::new(),
        }
    }

    /// Consumes the sink and returns the green tree.
    pub(crate) fn finish(mut self) -> rowan::GreenNode {
        let events = std::mem::take(&mut self.events);
        for event in events {
            match event {
                Event::Start { kind } => {
                    if self.depth > 0 {
                        self.eat_trivia();
                    }
                    self.builder.start_node(kind.into());
                    self.depth += 1;
                }
                Event::Token => {
                    self.eat_trivia();
                    self.token();
                }
                Event::Finish => {
                    self.depth = self.depth.saturating_sub(1);
                    if self.depth == 0 {
                        self.eat_trivia();
                    }
                    self.builder.finish_node();
                }
                Event::Placeholder => {}
            }
        }

        self.builder.finish()
    }

    /// Adds trivia (whitespace, comments) to the tree.
    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() {
                break;
            }
            self.token();
        }
    }

    /// Adds the token under the cursor to the tree.
    fn token(&mut self) {
        if let Some(token) = self.tokens.get(self.cursor) {
            let kind = SyntaxKind::from(token.kind);
            self.builder.token(kind.into(), token.text(self.source));
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::syntax::SyntaxNode;

    #[test]
    fn test_trivia_placement() {
        let source = " a /* c */ b ";
        let tokens = lex(source);
        let events = vec![
            Event::start(SyntaxKind::SimplePath),
            Event::start(SyntaxKind::Identifier),
            Event::Token,
            Event::Finish,
            Event::start(SyntaxKind::Identifier),
            Event::Token,
            Event::Finish,
            Event::Finish,
        ];
        let root = SyntaxNode::new_root(Sink::new(&tokens, source, events).finish());

        assert_eq!(root.text().to_string(), source);
        let children: Vec<_> = root.children().map(|n| n.text().to_string()).collect();
        assert_eq!(children, vec!["a", "b"]);
    }
}
