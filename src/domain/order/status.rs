//! OrderStatus enum for tracking the order lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a customer order.
///
/// `Cancelled` is reserved: the type carries it, but no dialogue path
/// currently triggers the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order is still being taken.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::InProgress)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - InProgress -> Completed
    /// - InProgress -> Cancelled
    ///
    /// Completed and Cancelled are terminal.
    pub fn can_transition_to(&self, target: &OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            (InProgress, Completed) | (InProgress, Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}
