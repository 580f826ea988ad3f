//! Rule-based response strategy.
//!
//! Ordered rule evaluation, first match wins:
//!
//! 1. greeting word in the message
//! 2. menu request
//! 3. menu items extracted from the message
//! 4. terminal phrase (complete the order, or prompt if it is empty)
//! 5. fixed fallback
//!
//! The precedence is behaviorally significant: a message that is both a
//! greeting and an order ("hi, I'll have a Classic Burger") gets the
//! greeting reply and adds nothing to the order.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::catalog::Catalog;
use crate::domain::conversation::{extract, ConversationHistory};
use crate::domain::order::Order;

use super::ResponseStrategy;

/// Greeting words recognized as substrings of the lowercased message.
const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Phrases that read as a menu request.
const MENU_REQUESTS: &[&str] = &["menu", "what do you have", "what can i get"];

/// Phrases signaling the customer is finished ordering.
const TERMINAL_PHRASES: &[&str] = &[
    "that's all",
    "that's it",
    "nothing else",
    "no thanks",
    "i'm done",
    "that'll be all",
    "finish",
    "complete",
];

const WELCOME: &str =
    "Hello! Welcome to NoPickles. I'm here to help you order. What would you like today?";

const NOTHING_ORDERED: &str = "You haven't ordered anything yet. What would you like?";

const FALLBACK: &str = "I'm not sure I understood that. You can tell me what you'd like to order, \
                        ask for the menu, or let me know if you're done ordering.";

/// Deterministic rule-table strategy.
///
/// Works without any external backend and doubles as the failure path for
/// the generative strategy.
#[derive(Debug, Clone)]
pub struct DeterministicStrategy {
    catalog: Arc<Catalog>,
}

impl DeterministicStrategy {
    /// Creates a strategy over the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    fn respond_sync(&self, order: &mut Order, message: &str) -> String {
        let lowered = message.to_lowercase();

        // Rule 1: greeting
        if GREETINGS.iter().any(|g| lowered.contains(g)) {
            return WELCOME.to_string();
        }

        // Rule 2: menu request
        if MENU_REQUESTS.iter().any(|m| lowered.contains(m)) {
            return format!(
                "Here's our menu:{}\n\nWhat would you like to order?",
                self.catalog.menu_text()
            );
        }

        // Rule 3: item extraction
        let lines = extract(message, &self.catalog);
        if !lines.is_empty() {
            let items_text = lines
                .iter()
                .map(|line| format!("{} ({})", line.menu_item_name(), line.unit_price()))
                .collect::<Vec<_>>()
                .join(", ");
            for line in lines {
                order.add_line(line);
            }
            return format!(
                "Great! I've added {} to your order. Your current total is {}. \
                 Would you like anything else?",
                items_text,
                order.total()
            );
        }

        // Rule 4: completion
        if TERMINAL_PHRASES.iter().any(|p| lowered.contains(p)) {
            if order.is_empty() {
                return NOTHING_ORDERED.to_string();
            }
            match order.complete() {
                Ok(()) => info!(
                    session_id = %order.session_id(),
                    total = %order.total(),
                    "order completed"
                ),
                // Repeating a terminal phrase after completion lands here;
                // the order stays completed and we just re-summarize.
                Err(error) => debug!(%error, "terminal phrase on closed order"),
            }
            return format!(
                "Perfect! Your order is complete.\n{}\n\nThank you for ordering with NoPickles!",
                order.summary_text()
            );
        }

        // Rule 5: fallback
        FALLBACK.to_string()
    }
}

#[async_trait]
impl ResponseStrategy for DeterministicStrategy {
    async fn respond(
        &self,
        order: &mut Order,
        _history: &ConversationHistory,
        message: &str,
    ) -> String {
        self.respond_sync(order, message)
    }
}
