//! Domain layer - pure business logic with no I/O.

pub mod catalog;
pub mod conversation;
pub mod foundation;
pub mod order;
