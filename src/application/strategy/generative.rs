//! Generative response strategy.
//!
//! Builds a system prompt from the live menu and order state, hands the AI
//! provider a bounded window of recent user turns, and returns whatever the
//! model says. The generated text is never parsed for order changes;
//! instead the deterministic extractor runs against the raw message as a
//! parallel side effect, so order state stays identical to the rule-based
//! path regardless of model phrasing.
//!
//! On any provider error the strategy falls back to the full deterministic
//! rule table for that single message, with no retry. Extraction then
//! happens exactly once, inside the fallback.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::domain::catalog::Catalog;
use crate::domain::conversation::{extract, ConversationHistory};
use crate::domain::order::Order;
use crate::ports::{AiProvider, ChatMessage, CompletionRequest};

use super::deterministic::DeterministicStrategy;
use super::ResponseStrategy;

/// Strategy backed by an external text-generation provider.
pub struct GenerativeStrategy {
    catalog: Arc<Catalog>,
    provider: Arc<dyn AiProvider>,
    fallback: DeterministicStrategy,
    /// How many recent turns are scanned for user context.
    context_window: usize,
    /// Sampling temperature passed through to the provider.
    temperature: f32,
}

impl GenerativeStrategy {
    /// Creates a strategy over the given catalog and provider.
    pub fn new(
        catalog: Arc<Catalog>,
        provider: Arc<dyn AiProvider>,
        context_window: usize,
        temperature: f32,
    ) -> Self {
        let fallback = DeterministicStrategy::new(Arc::clone(&catalog));
        Self {
            catalog,
            provider,
            fallback,
            context_window,
            temperature,
        }
    }

    /// Builds the system prompt from current menu and order state.
    fn system_prompt(&self, order: &Order) -> String {
        format!(
            "You are a friendly AI assistant for NoPickles, a fast food restaurant.\n\
             Your job is to help customers order food through natural conversation.\n\
             \n\
             {menu}\n\
             \n\
             Current order for this customer:\n\
             {order_summary}\n\
             \n\
             Guidelines:\n\
             - Be friendly and conversational\n\
             - Help customers find items on the menu\n\
             - Confirm items as you add them\n\
             - Provide the running total\n\
             - When customers say they're done, summarize the order and thank them\n\
             - If they ask for something not on the menu, politely suggest alternatives\n\
             \n\
             Respond naturally to the customer's message.",
            menu = self.catalog.menu_text(),
            order_summary = order.summary_text(),
        )
    }

    /// Assembles the completion request: system prompt plus the user turns
    /// within the context window. The current message is already the last
    /// user turn in the history.
    fn build_request(&self, order: &Order, history: &ConversationHistory) -> CompletionRequest {
        let mut request = CompletionRequest::new()
            .with_system_prompt(self.system_prompt(order))
            .with_temperature(self.temperature);

        for content in history.recent_user_contents(self.context_window) {
            request.messages.push(ChatMessage::user(content));
        }
        request
    }
}

#[async_trait]
impl ResponseStrategy for GenerativeStrategy {
    async fn respond(
        &self,
        order: &mut Order,
        history: &ConversationHistory,
        message: &str,
    ) -> String {
        let request = self.build_request(order, history);

        match self.provider.complete(request).await {
            Ok(response) => {
                for line in extract(message, &self.catalog) {
                    order.add_line(line);
                }
                response.content
            }
            Err(error) => {
                warn!(
                    session_id = %order.session_id(),
                    provider = %self.provider.provider_info().name,
                    %error,
                    "generative backend failed, answering rule-based"
                );
                self.fallback.respond(order, history, message).await
            }
        }
    }
}
