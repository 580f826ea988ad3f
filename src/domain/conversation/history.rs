//! Per-session conversation history.

use serde::{Deserialize, Serialize};

use super::message::{Role, Turn};

/// Ordered record of one session's conversation turns.
///
/// Retention is capped by the engine so a chatty session cannot grow memory
/// without bound; the generative strategy only ever reads a bounded recent
/// window anyway, so trimming old turns does not change observable behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Returns all retained turns in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the number of retained turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if no turns are retained.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns the user-authored contents among the last `window` turns,
    /// oldest first.
    ///
    /// This is the context handed to the generative strategy: a bounded
    /// suffix of the conversation, filtered to what the customer said.
    pub fn recent_user_contents(&self, window: usize) -> Vec<&str> {
        let start = self.turns.len().saturating_sub(window);
        self.turns[start..]
            .iter()
            .filter(|turn| turn.role() == Role::User)
            .map(|turn| turn.content())
            .collect()
    }

    /// Drops the oldest turns until at most `max_turns` remain.
    pub fn truncate_to_recent(&mut self, max_turns: usize) {
        if self.turns.len() > max_turns {
            let excess = self.turns.len() - max_turns;
            self.turns.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(turns: &[(&str, Role)]) -> ConversationHistory {
        let mut history = ConversationHistory::new();
        for (content, role) in turns {
            history.push(Turn::new(*role, *content));
        }
        history
    }

    #[test]
    fn push_keeps_order() {
        let history = history_of(&[("hi", Role::User), ("Hello!", Role::Assistant)]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].content(), "hi");
        assert_eq!(history.turns()[1].content(), "Hello!");
    }

    #[test]
    fn recent_user_contents_filters_assistant_turns() {
        let history = history_of(&[
            ("hi", Role::User),
            ("Hello!", Role::Assistant),
            ("a burger please", Role::User),
        ]);

        let contents = history.recent_user_contents(10);
        assert_eq!(contents, vec!["hi", "a burger please"]);
    }

    #[test]
    fn recent_user_contents_respects_window() {
        let history = history_of(&[
            ("one", Role::User),
            ("r1", Role::Assistant),
            ("two", Role::User),
            ("r2", Role::Assistant),
            ("three", Role::User),
        ]);

        // Last 3 turns are [two, r2, three]; filtering leaves the user pair.
        let contents = history.recent_user_contents(3);
        assert_eq!(contents, vec!["two", "three"]);
    }

    #[test]
    fn truncate_drops_oldest_turns() {
        let mut history = history_of(&[
            ("one", Role::User),
            ("two", Role::User),
            ("three", Role::User),
        ]);

        history.truncate_to_recent(2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].content(), "two");
    }

    #[test]
    fn truncate_is_noop_under_cap() {
        let mut history = history_of(&[("one", Role::User)]);
        history.truncate_to_recent(5);
        assert_eq!(history.len(), 1);
    }
}
