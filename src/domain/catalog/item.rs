//! Menu item entity.

use crate::domain::foundation::Price;
use serde::{Deserialize, Serialize};

/// A purchasable item on the menu.
///
/// # Invariants
///
/// - `id` is unique within its catalog (enforced at catalog construction)
/// - immutable once the catalog is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier within the catalog.
    id: String,

    /// Display name shown to customers.
    name: String,

    /// Category grouping (e.g. "burgers", "drinks").
    category: String,

    /// Unit price.
    price: Price,

    /// Optional marketing description.
    description: Option<String>,

    /// Whether the item can currently be ordered.
    available: bool,
}

impl MenuItem {
    /// Creates a new available menu item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            description: None,
            available: true,
        }
    }

    /// Sets the item description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Returns the item id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the unit price.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns true if the item can currently be ordered.
    pub fn is_available(&self) -> bool {
        self.available
    }
}
