//! Ports - interfaces the engine uses to talk to the outside world.

mod ai_provider;

pub use ai_provider::{
    AiError, AiProvider, ChatMessage, CompletionRequest, CompletionResponse, MessageRole,
    ProviderInfo,
};
