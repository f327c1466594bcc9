//! Inventory operations on a working copy of the game state.
//!
//! Quantities are exact [`Decimal`]s. All arithmetic is checked -- no silent
//! overflows, no panics.

use rust_decimal::Decimal;

use homestead_types::Inventory;

use crate::error::EventError;

/// Quantity of `item` held, zero if absent.
pub fn count(inventory: &Inventory, item: &str) -> Decimal {
    inventory.get(item).copied().unwrap_or(Decimal::ZERO)
}

/// Check whether the inventory holds at least `amount` of `item`.
pub fn has_item(inventory: &Inventory, item: &str, amount: Decimal) -> bool {
    count(inventory, item) >= amount
}

/// Add `amount` of `item`, inserting the key on first use.
///
/// Returns the new quantity.
pub fn add_item(inventory: &mut Inventory, item: &str, amount: Decimal) -> Result<Decimal, EventError> {
    let entry = inventory.entry(String::from(item)).or_insert(Decimal::ZERO);
    *entry = entry
        .checked_add(amount)
        .ok_or_else(|| EventError::overflow("inventory quantity overflow in add_item"))?;
    Ok(*entry)
}

/// Remove `amount` of `item`.
///
/// Fails if the inventory does not hold enough. Removes the key entirely
/// once the quantity reaches zero. Returns the remaining quantity.
pub fn remove_item(
    inventory: &mut Inventory,
    item: &str,
    amount: Decimal,
) -> Result<Decimal, EventError> {
    let current = count(inventory, item);

    if current < amount {
        return Err(EventError::InsufficientItem {
            item: String::from(item),
            requested: amount,
            available: current,
        });
    }

    let remaining = current
        .checked_sub(amount)
        .ok_or_else(|| EventError::overflow("subtraction underflow in remove_item"))?;

    if remaining.is_zero() {
        inventory.remove(item);
    } else {
        inventory.insert(String::from(item), remaining);
    }

    Ok(remaining)
}
