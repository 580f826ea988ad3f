//! Response strategies for the dialogue engine.
//!
//! Two interchangeable implementations of [`ResponseStrategy`] exist: a
//! deterministic rule table and a generative strategy that wraps an AI
//! provider and falls back to the rule table on any backend failure. The
//! engine picks one at startup based on configuration, never per message.

mod deterministic;
mod generative;

pub use deterministic::DeterministicStrategy;
pub use generative::GenerativeStrategy;

use async_trait::async_trait;

use crate::domain::conversation::ConversationHistory;
use crate::domain::order::Order;

/// Produces the response text for one customer message, mutating the
/// session's order as a side effect.
///
/// The engine appends the user turn to `history` before calling this and
/// appends the returned text as the assistant turn afterwards.
#[async_trait]
pub trait ResponseStrategy: Send + Sync {
    /// Responds to a single message within a session.
    async fn respond(
        &self,
        order: &mut Order,
        history: &ConversationHistory,
        message: &str,
    ) -> String;
}
