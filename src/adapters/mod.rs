//! Adapters - concrete implementations of ports.

pub mod ai;

pub use ai::{MockAiProvider, MockError, MockResponse, OpenAiConfig, OpenAiProvider};
