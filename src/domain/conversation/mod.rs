//! Conversation state and free-text item extraction.

mod extractor;
mod history;
mod message;

pub use extractor::extract;
pub use history::ConversationHistory;
pub use message::{Role, Turn};
