//! The standard NoPickles fast food menu.

use crate::domain::foundation::Price;

use super::item::MenuItem;

/// Returns the sample menu items in catalog order.
pub fn sample_items() -> Vec<MenuItem> {
    vec![
        // Burgers
        MenuItem::new("burger1", "Classic Burger", "burgers", Price::from_cents(699))
            .with_description("Beef patty with lettuce, tomato, and special sauce"),
        MenuItem::new("burger2", "Cheeseburger", "burgers", Price::from_cents(899))
            .with_description("Classic burger with melted cheese"),
        MenuItem::new("burger3", "Double Burger", "burgers", Price::from_cents(1099))
            .with_description("Two beef patties with all the fixings"),
        MenuItem::new("burger4", "Veggie Burger", "burgers", Price::from_cents(799))
            .with_description("Plant-based patty with fresh vegetables"),
        // Sides
        MenuItem::new("side1", "French Fries", "sides", Price::from_cents(349))
            .with_description("Crispy golden fries"),
        MenuItem::new("side2", "Onion Rings", "sides", Price::from_cents(449))
            .with_description("Beer-battered onion rings"),
        MenuItem::new("side3", "Side Salad", "sides", Price::from_cents(499))
            .with_description("Fresh mixed greens with dressing"),
        // Drinks
        MenuItem::new("drink1", "Small Coke", "drinks", Price::from_cents(199))
            .with_description("Coca-Cola (16oz)"),
        MenuItem::new("drink2", "Medium Coke", "drinks", Price::from_cents(249))
            .with_description("Coca-Cola (22oz)"),
        MenuItem::new("drink3", "Large Coke", "drinks", Price::from_cents(299))
            .with_description("Coca-Cola (32oz)"),
        MenuItem::new("drink4", "Bottled Water", "drinks", Price::from_cents(149))
            .with_description("Pure spring water"),
        MenuItem::new("drink5", "Milkshake", "drinks", Price::from_cents(499))
            .with_description("Chocolate, vanilla, or strawberry"),
        // Desserts
        MenuItem::new("dessert1", "Apple Pie", "desserts", Price::from_cents(299))
            .with_description("Warm apple pie"),
        MenuItem::new("dessert2", "Ice Cream Cone", "desserts", Price::from_cents(249))
            .with_description("Soft serve vanilla ice cream"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_items_have_unique_ids() {
        let items = sample_items();
        for (i, item) in items.iter().enumerate() {
            assert!(
                !items[..i].iter().any(|other| other.id() == item.id()),
                "duplicate id {}",
                item.id()
            );
        }
    }

    #[test]
    fn sample_prices_match_the_menu() {
        let items = sample_items();
        let coke = items.iter().find(|i| i.name() == "Small Coke").unwrap();
        assert_eq!(coke.price(), Price::from_cents(199));

        let burger = items.iter().find(|i| i.name() == "Classic Burger").unwrap();
        assert_eq!(burger.price(), Price::from_cents(699));
    }
}
