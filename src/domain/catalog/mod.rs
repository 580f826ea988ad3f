//! Menu catalog - the fixed collection of purchasable items.
//!
//! The catalog is built once at startup and read-only afterwards, so it is
//! safe to share across sessions without synchronization.

mod item;
mod sample;

#[allow(clippy::module_inception)]
mod catalog;

pub use catalog::Catalog;
pub use item::MenuItem;
pub use sample::sample_items;
