//! Order line value object.

use crate::domain::catalog::MenuItem;
use crate::domain::foundation::{DomainError, Price};
use serde::{Deserialize, Serialize};

/// One line of an order: a menu item reference with quantity and pricing.
///
/// The item name and unit price are snapshotted at the time the line is
/// added; later catalog changes never retroactively alter an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Id of the menu item this line refers to.
    menu_item_id: String,

    /// Item display name at the time of the add.
    menu_item_name: String,

    /// Units ordered, always at least 1.
    quantity: u32,

    /// Unit price at the time of the add.
    unit_price: Price,

    /// quantity x unit_price, fixed at construction.
    subtotal: Price,
}

impl OrderLine {
    /// Creates a new order line.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if quantity is zero
    pub fn new(
        menu_item_id: impl Into<String>,
        menu_item_name: impl Into<String>,
        quantity: u32,
        unit_price: Price,
    ) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "quantity",
                "Quantity must be at least 1",
            ));
        }

        Ok(Self {
            menu_item_id: menu_item_id.into(),
            menu_item_name: menu_item_name.into(),
            quantity,
            unit_price,
            subtotal: unit_price.times(quantity),
        })
    }

    /// Creates a quantity-1 line snapshotting the given catalog item.
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            menu_item_id: item.id().to_string(),
            menu_item_name: item.name().to_string(),
            quantity: 1,
            unit_price: item.price(),
            subtotal: item.price(),
        }
    }

    /// Returns the referenced menu item id.
    pub fn menu_item_id(&self) -> &str {
        &self.menu_item_id
    }

    /// Returns the snapshotted item name.
    pub fn menu_item_name(&self) -> &str {
        &self.menu_item_name
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the snapshotted unit price.
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns the line subtotal.
    pub fn subtotal(&self) -> Price {
        self.subtotal
    }
}
