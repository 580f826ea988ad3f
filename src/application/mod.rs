//! Application layer - the dialogue engine and its response strategies.

mod engine;
mod strategy;

pub use engine::OrderEngine;
pub use strategy::{DeterministicStrategy, GenerativeStrategy, ResponseStrategy};
