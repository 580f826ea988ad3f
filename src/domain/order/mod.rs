//! Order aggregate - the running record of what one session has ordered.

mod aggregate;
mod line;
mod status;

pub use aggregate::Order;
pub use line::OrderLine;
pub use status::OrderStatus;
