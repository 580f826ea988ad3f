//! Dialogue engine and in-memory session store.
//!
//! [`OrderEngine`] is the narrow boundary the hosting layer calls into:
//! message in, response text out, with the session's order and conversation
//! history mutated as a side effect. All state lives in process memory and
//! is lost on restart.
//!
//! # Concurrency
//!
//! The session map is behind an async `RwLock`; each session's state is
//! behind its own `Mutex`. Messages for different sessions proceed in
//! parallel, while read-modify-write sequences on one session's order are
//! serialized, so two concurrent messages from the same customer can never
//! interleave a total update.

use futures::FutureExt;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

use crate::adapters::ai::{OpenAiConfig, OpenAiProvider};
use crate::config::EngineConfig;
use crate::domain::catalog::{Catalog, MenuItem};
use crate::domain::conversation::{ConversationHistory, Turn};
use crate::domain::foundation::SessionId;
use crate::domain::order::Order;
use crate::ports::AiProvider;

use super::strategy::{DeterministicStrategy, GenerativeStrategy, ResponseStrategy};

/// Response used when message processing fails unexpectedly. The engine
/// never lets an internal failure escape to the hosting process.
const GENERIC_FAILURE: &str =
    "Sorry, something went wrong on our end. Could you try that again?";

/// One session's mutable state: its order and conversation history,
/// created together on the session's first message.
struct SessionState {
    order: Order,
    history: ConversationHistory,
}

/// The order-taking dialogue engine.
///
/// Construct one per process via [`OrderEngine::new`] and share it behind
/// an `Arc`; all methods take `&self`.
pub struct OrderEngine {
    catalog: Arc<Catalog>,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<SessionState>>>>,
    strategy: Arc<dyn ResponseStrategy>,
    max_retained_turns: usize,
}

impl OrderEngine {
    /// Creates an engine, selecting the response strategy from config.
    ///
    /// With an OpenAI key configured the generative strategy is used;
    /// otherwise the engine runs rule-based. The choice is made here, once,
    /// never per message.
    pub fn new(catalog: Catalog, config: &EngineConfig) -> Self {
        let catalog = Arc::new(catalog);

        let strategy: Arc<dyn ResponseStrategy> = match config.ai.openai_api_key.as_deref() {
            Some(key) if config.ai.has_openai() => {
                let provider_config = OpenAiConfig::new(key)
                    .with_model(&config.ai.model)
                    .with_timeout(config.ai.timeout());
                match OpenAiProvider::new(provider_config) {
                    Ok(provider) => {
                        info!(model = %config.ai.model, "starting with generative strategy");
                        Arc::new(GenerativeStrategy::new(
                            Arc::clone(&catalog),
                            Arc::new(provider),
                            config.context_window_turns,
                            config.ai.temperature,
                        ))
                    }
                    Err(error) => {
                        error!(%error, "could not build OpenAI provider, running rule-based");
                        Arc::new(DeterministicStrategy::new(Arc::clone(&catalog)))
                    }
                }
            }
            _ => {
                info!("no AI credential configured, starting with deterministic strategy");
                Arc::new(DeterministicStrategy::new(Arc::clone(&catalog)))
            }
        };

        Self::with_strategy(catalog, strategy, config)
    }

    /// Creates a rule-based engine regardless of AI configuration.
    pub fn deterministic(catalog: Catalog, config: &EngineConfig) -> Self {
        let catalog = Arc::new(catalog);
        let strategy = Arc::new(DeterministicStrategy::new(Arc::clone(&catalog)));
        Self::with_strategy(catalog, strategy, config)
    }

    /// Creates a generative engine over an injected provider.
    pub fn generative(
        catalog: Catalog,
        provider: Arc<dyn AiProvider>,
        config: &EngineConfig,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let strategy = Arc::new(GenerativeStrategy::new(
            Arc::clone(&catalog),
            provider,
            config.context_window_turns,
            config.ai.temperature,
        ));
        Self::with_strategy(catalog, strategy, config)
    }

    /// Creates an engine with an explicit strategy (useful in tests).
    pub fn with_strategy(
        catalog: Arc<Catalog>,
        strategy: Arc<dyn ResponseStrategy>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            catalog,
            sessions: RwLock::new(HashMap::new()),
            strategy,
            max_retained_turns: config.max_retained_turns,
        }
    }

    /// Processes one customer message and returns the response text.
    ///
    /// Never fails for well-formed input: any internal failure is logged
    /// and surfaced as a generic apology rather than propagated.
    pub async fn process_message(&self, session_id: &SessionId, message: &str) -> String {
        let work = AssertUnwindSafe(self.process_inner(session_id, message)).catch_unwind();
        match work.await {
            Ok(response) => response,
            Err(_) => {
                error!(%session_id, "message processing panicked");
                GENERIC_FAILURE.to_string()
            }
        }
    }

    async fn process_inner(&self, session_id: &SessionId, message: &str) -> String {
        let session = self.session_handle(session_id).await;
        let mut state = session.lock().await;
        let state = &mut *state;

        state.history.push(Turn::user(message));
        let response = self
            .strategy
            .respond(&mut state.order, &state.history, message)
            .await;
        state.history.push(Turn::assistant(&response));
        state.history.truncate_to_recent(self.max_retained_turns);

        response
    }

    /// Returns the session's state handle, creating order and history
    /// together on first contact.
    async fn session_handle(&self, session_id: &SessionId) -> Arc<Mutex<SessionState>> {
        if let Some(state) = self.sessions.read().await.get(session_id) {
            return Arc::clone(state);
        }

        let mut sessions = self.sessions.write().await;
        // Double-checked: another request may have created it meanwhile.
        Arc::clone(sessions.entry(session_id.clone()).or_insert_with(|| {
            info!(%session_id, "new session");
            Arc::new(Mutex::new(SessionState {
                order: Order::new(session_id.clone()),
                history: ConversationHistory::new(),
            }))
        }))
    }

    /// Returns a snapshot of the session's order, or `None` for an unknown
    /// session.
    pub async fn get_order(&self, session_id: &SessionId) -> Option<Order> {
        let handle = {
            let sessions = self.sessions.read().await;
            sessions.get(session_id).cloned()
        }?;
        let state = handle.lock().await;
        Some(state.order.clone())
    }

    /// Returns snapshots of every session's order.
    pub async fn all_orders(&self) -> HashMap<SessionId, Order> {
        let handles: Vec<(SessionId, Arc<Mutex<SessionState>>)> = {
            let sessions = self.sessions.read().await;
            sessions
                .iter()
                .map(|(id, state)| (id.clone(), Arc::clone(state)))
                .collect()
        };

        let mut orders = HashMap::with_capacity(handles.len());
        for (id, handle) in handles {
            let state = handle.lock().await;
            orders.insert(id, state.order.clone());
        }
        orders
    }

    /// Returns the full menu in catalog order.
    pub fn list_menu(&self) -> Vec<MenuItem> {
        self.catalog.items().to_vec()
    }

    /// Returns the menu items of one category; empty means the category
    /// does not exist (the hosting layer maps that to a not-found reply).
    pub fn list_menu_by_category(&self, category: &str) -> Vec<MenuItem> {
        self.catalog
            .by_category(category)
            .into_iter()
            .cloned()
            .collect()
    }
}
