//! Item categories used by trait-based boosts.

use homestead_types::{FruitName, ItemCategory};

/// Field crops grown on crop plots.
pub const CROPS: [&str; 13] = [
    "Sunflower",
    "Potato",
    "Pumpkin",
    "Carrot",
    "Cabbage",
    "Beetroot",
    "Cauliflower",
    "Parsnip",
    "Eggplant",
    "Corn",
    "Radish",
    "Wheat",
    "Kale",
];

/// Stone and ores.
pub const MINERALS: [&str; 3] = ["Stone", "Iron", "Gold"];

/// Classify an inventory item by name.
pub fn item_category(name: &str) -> ItemCategory {
    if FruitName::from_item(name).is_some() {
        ItemCategory::Fruit
    } else if CROPS.contains(&name) {
        ItemCategory::Crop
    } else if name == "Wood" {
        ItemCategory::Wood
    } else if MINERALS.contains(&name) {
        ItemCategory::Mineral
    } else {
        ItemCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fruits_are_fruit() {
        for fruit in FruitName::ALL {
            assert_eq!(item_category(fruit.as_str()), ItemCategory::Fruit);
        }
    }

    #[test]
    fn other_categories() {
        assert_eq!(item_category("Kale"), ItemCategory::Crop);
        assert_eq!(item_category("Wood"), ItemCategory::Wood);
        assert_eq!(item_category("Gold"), ItemCategory::Mineral);
        assert_eq!(item_category("Axe"), ItemCategory::Other);
        assert_eq!(item_category("Apple Seed"), ItemCategory::Other);
    }
}
