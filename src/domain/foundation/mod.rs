//! Shared value objects and error types used across the domain.

mod errors;
mod ids;
mod price;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MessageId, SessionId};
pub use price::Price;
pub use timestamp::Timestamp;
