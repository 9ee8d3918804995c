//! Tree events.
//!
//! Recording a match produces a flat stream of events that the sink later
//! turns into a syntax tree. Trivia never appears in the stream; the sink
//! re-attaches it from the token stream.

use drop_bomb::DropBomb;

use crate::syntax::SyntaxKind;

/// An event produced while recording a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Start a new node.
    Start {
        /// The kind of node being started.
        kind: SyntaxKind,
    },
    /// Add the next significant token to the current node.
    Token,
    /// Finish the current node.
    Finish,
    /// Reserved slot for a node that is still being matched.
    Placeholder,
}

impl Event {
    /// Creates a start event.
    #[must_use]
    pub fn start(kind: SyntaxKind) -> Self {
        Self::Start { kind }
    }
}

/// An open node in the event stream.
///
/// Must be either completed or abandoned; dropping it unresolved is a bug.
pub(crate) struct Marker {
    pos: usize,
    bomb: DropBomb,
}

impl Marker {
    pub(crate) fn start(events: &mut Vec<Event>) -> Self {
        let pos = events.len();
        events.push(Event::Placeholder);
        Self {
            pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }

    pub(crate) fn complete(mut self, events: &mut Vec<Event>, kind: SyntaxKind) {
        self.bomb.defuse();
        if let Some(slot) = events.get_mut(self.pos) {
            *slot = Event::start(kind);
        }
        events.push(Event::Finish);
    }

    pub(crate) fn abandon(mut self, events: &mut Vec<Event>) {
        self.bomb.defuse();
        events.truncate(self.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_complete() {
        let mut events = vec![Event::Token];
        let marker = Marker::start(&mut events);
        events.push(Event::Token);
        marker.complete(&mut events, SyntaxKind::Identifier);
        assert_eq!(
            events,
            vec![
                Event::Token,
                Event::start(SyntaxKind::Identifier),
                Event::Token,
                Event::Finish
            ]
        );
    }

    #[test]
    fn test_marker_abandon() {
        let mut events = vec![Event::Token];
        let marker = Marker::start(&mut events);
        events.push(Event::Token);
        marker.abandon(&mut events);
        assert_eq!(events, vec![Event::Token]);
    }
}
