//! Order aggregate entity.
//!
//! One order per session, created lazily on the session's first message and
//! kept in memory for the lifetime of the process.
//!
//! # Invariants
//!
//! - `total` equals the sum of all line subtotals after every mutation;
//!   [`Order::add_line`] updates both together so there is no window where
//!   they disagree
//! - `completed_at` is set exactly once, on the transition to `Completed`
//! - completion is one-way and requires at least one line

use crate::domain::foundation::{DomainError, ErrorCode, Price, SessionId, Timestamp};
use serde::{Deserialize, Serialize};

use super::line::OrderLine;
use super::status::OrderStatus;

/// A customer order owned by exactly one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Session that owns this order.
    session_id: SessionId,

    /// Ordered lines, insertion order preserved.
    lines: Vec<OrderLine>,

    /// Running total, always the sum of line subtotals.
    total: Price,

    /// Current lifecycle status.
    status: OrderStatus,

    /// When the order was created.
    created_at: Timestamp,

    /// When the order was completed, if it has been.
    completed_at: Option<Timestamp>,
}

impl Order {
    /// Creates a new empty in-progress order for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            lines: Vec::new(),
            total: Price::zero(),
            status: OrderStatus::InProgress,
            created_at: Timestamp::now(),
            completed_at: None,
        }
    }

    /// Returns the owning session id.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the order lines in insertion order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns true if no lines have been added.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the running total.
    pub fn total(&self) -> Price {
        self.total
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns when the order was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the order was completed, if it has been.
    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Appends a line and updates the running total in the same step.
    pub fn add_line(&mut self, line: OrderLine) {
        self.total += line.subtotal();
        self.lines.push(line);
    }

    /// Marks the order completed and stamps the completion time.
    ///
    /// # Errors
    ///
    /// - `EmptyOrder` if no lines have been added
    /// - `InvalidStateTransition` if the order is not in progress
    pub fn complete(&mut self) -> Result<(), DomainError> {
        if self.lines.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyOrder,
                "Cannot complete an order with no items",
            ));
        }
        if !self.status.can_transition_to(&OrderStatus::Completed) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot complete an order that is {}", self.status),
            ));
        }

        self.status = OrderStatus::Completed;
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }

    /// Renders the order as summary text.
    ///
    /// Each line is shown as `{qty}x {name}: ${subtotal}` followed by the
    /// total; an empty order renders a fixed placeholder.
    pub fn summary_text(&self) -> String {
        if self.lines.is_empty() {
            return "No items ordered yet.".to_string();
        }

        let mut summary = String::from("Order Summary:\n");
        for line in &self.lines {
            summary.push_str(&format!(
                "  - {}x {}: {}\n",
                line.quantity(),
                line.menu_item_name(),
                line.subtotal()
            ));
        }
        summary.push_str(&format!("\nTotal: {}", self.total));
        summary
    }
}
