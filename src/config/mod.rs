//! Engine configuration.
//!
//! Environment reading belongs to the hosting process; it deserializes or
//! assembles these structs once at startup and hands them to
//! [`crate::application::OrderEngine::new`].

mod ai;

pub use ai::AiConfig;

use serde::Deserialize;

/// Top-level engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Generative backend configuration.
    #[serde(default)]
    pub ai: AiConfig,

    /// Maximum turns retained per session before the oldest are dropped.
    #[serde(default = "default_max_retained_turns")]
    pub max_retained_turns: usize,

    /// How many recent turns feed the generative context window.
    #[serde(default = "default_context_window_turns")]
    pub context_window_turns: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            max_retained_turns: default_max_retained_turns(),
            context_window_turns: default_context_window_turns(),
        }
    }
}

fn default_max_retained_turns() -> usize {
    50
}

fn default_context_window_turns() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = EngineConfig::default();
        assert_eq!(config.max_retained_turns, 50);
        assert_eq!(config.context_window_turns, 6);
        assert!(!config.ai.has_openai());
    }

    #[test]
    fn deserializes_from_partial_json() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"max_retained_turns": 10}"#).unwrap();
        assert_eq!(config.max_retained_turns, 10);
        assert_eq!(config.context_window_turns, 6);
    }
}
