//! Bonuses from placed companion buds.
//!
//! Each placed bud earns a base bonus when its type or stem matches the
//! harvested item, then its aura scales that bonus. Bonuses of all placed
//! buds are summed. Buds without coordinates are in the wallet, not on the
//! farm, and contribute nothing.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use homestead_catalog::Catalog;
use homestead_types::{Bud, BudAura, BudId, BudType, ItemCategory};

use crate::error::EventError;

use super::hundredths;

/// Scale applied to every bonus a bud contributes.
pub const fn aura_multiplier(aura: BudAura) -> Decimal {
    match aura {
        BudAura::NoAura => Decimal::ONE,
        BudAura::Basic => hundredths(105),
        BudAura::Green => hundredths(120),
        BudAura::Rare => hundredths(200),
        BudAura::Mythical => hundredths(500),
    }
}

/// Bonus a bud type grants to items of `category`.
pub const fn type_bonus(bud_type: BudType, category: ItemCategory) -> Decimal {
    match (bud_type, category) {
        (BudType::Beach, ItemCategory::Fruit)
        | (BudType::Plaza, ItemCategory::Crop)
        | (BudType::Woodlands, ItemCategory::Wood)
        | (BudType::Cave, ItemCategory::Mineral) => hundredths(20),
        _ => Decimal::ZERO,
    }
}

/// Bonus a bud stem grants to `item`.
pub fn stem_bonus(stem: &str, item: &str, category: ItemCategory) -> Decimal {
    match (stem, category) {
        ("3 Leaf Clover", ItemCategory::Crop) => hundredths(50),
        ("Diamond Gem", ItemCategory::Mineral) | ("Tree Hat", ItemCategory::Wood) => {
            hundredths(20)
        }
        ("Apple Head", ItemCategory::Fruit) if item == "Apple" => hundredths(20),
        _ => Decimal::ZERO,
    }
}

/// Aura-scaled bonus of a single bud for `item`.
pub fn bud_bonus(bud: &Bud, item: &str, category: ItemCategory) -> Result<Decimal, EventError> {
    let base = type_bonus(bud.bud_type, category)
        .checked_add(stem_bonus(&bud.stem, item, category))
        .ok_or_else(|| EventError::overflow("bud bonus overflow"))?;
    base.checked_mul(aura_multiplier(bud.aura))
        .ok_or_else(|| EventError::overflow("bud aura overflow"))
}

/// Total bonus of every placed bud for `item`.
pub fn bud_yield_bonus<C: Catalog + ?Sized>(
    buds: &BTreeMap<BudId, Bud>,
    item: &str,
    catalog: &C,
) -> Result<Decimal, EventError> {
    let category = catalog.item_category(item);
    buds.values()
        .filter(|bud| bud.is_placed())
        .try_fold(Decimal::ZERO, |total, bud| {
            let bonus = bud_bonus(bud, item, category)?;
            total
                .checked_add(bonus)
                .ok_or_else(|| EventError::overflow("bud bonus sum overflow"))
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use homestead_catalog::StaticCatalog;
    use homestead_types::{Coordinates, Extras};
    use rust_decimal_macros::dec;

    use super::*;

    fn bud(bud_type: BudType, stem: &str, aura: BudAura) -> Bud {
        Bud {
            bud_type,
            aura,
            stem: String::from(stem),
            ears: String::from("No Ears"),
            colour: String::from("Green"),
            coordinates: Some(Coordinates { x: 0, y: 0 }),
            other: Extras::new(),
        }
    }

    #[test]
    fn beach_bud_boosts_fruit() {
        let mut buds = BTreeMap::new();
        buds.insert(BudId::from("1"), bud(BudType::Beach, "Hibiscus", BudAura::NoAura));
        let bonus = bud_yield_bonus(&buds, "Blueberry", &StaticCatalog::new()).unwrap();
        assert_eq!(bonus, dec!(0.2));
    }

    #[test]
    fn beach_bud_ignores_crops() {
        let mut buds = BTreeMap::new();
        buds.insert(BudId::from("1"), bud(BudType::Beach, "Hibiscus", BudAura::NoAura));
        let bonus = bud_yield_bonus(&buds, "Sunflower", &StaticCatalog::new()).unwrap();
        assert_eq!(bonus, Decimal::ZERO);
    }

    #[test]
    fn aura_scales_bonus() {
        let mut buds = BTreeMap::new();
        buds.insert(BudId::from("1"), bud(BudType::Beach, "Hibiscus", BudAura::Green));
        let bonus = bud_yield_bonus(&buds, "Orange", &StaticCatalog::new()).unwrap();
        assert_eq!(bonus, dec!(0.24));
    }

    #[test]
    fn type_and_stem_stack_before_aura() {
        let mut buds = BTreeMap::new();
        buds.insert(BudId::from("7"), bud(BudType::Beach, "Apple Head", BudAura::Rare));
        let catalog = StaticCatalog::new();
        assert_eq!(bud_yield_bonus(&buds, "Apple", &catalog).unwrap(), dec!(0.8));
        // The stem only matches apples.
        assert_eq!(bud_yield_bonus(&buds, "Orange", &catalog).unwrap(), dec!(0.4));
    }

    #[test]
    fn bonuses_sum_across_buds() {
        let mut buds = BTreeMap::new();
        buds.insert(BudId::from("1"), bud(BudType::Beach, "Hibiscus", BudAura::NoAura));
        buds.insert(BudId::from("2"), bud(BudType::Beach, "Hibiscus", BudAura::Basic));
        buds.insert(BudId::from("3"), bud(BudType::Plaza, "3 Leaf Clover", BudAura::Mythical));
        let bonus = bud_yield_bonus(&buds, "Apple", &StaticCatalog::new()).unwrap();
        assert_eq!(bonus, dec!(0.41));
    }

    #[test]
    fn unplaced_buds_contribute_nothing() {
        let mut unplaced = bud(BudType::Beach, "Hibiscus", BudAura::Mythical);
        unplaced.coordinates = None;
        let mut buds = BTreeMap::new();
        buds.insert(BudId::from("1"), unplaced);
        let bonus = bud_yield_bonus(&buds, "Apple", &StaticCatalog::new()).unwrap();
        assert_eq!(bonus, Decimal::ZERO);
    }

    #[test]
    fn crop_and_mineral_rules() {
        assert_eq!(
            stem_bonus("3 Leaf Clover", "Kale", ItemCategory::Crop),
            dec!(0.5)
        );
        assert_eq!(type_bonus(BudType::Cave, ItemCategory::Mineral), dec!(0.2));
        assert_eq!(type_bonus(BudType::Cave, ItemCategory::Fruit), Decimal::ZERO);
    }
}
