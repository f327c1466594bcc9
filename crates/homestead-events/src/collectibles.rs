//! Ownership predicates over placed collectibles.

use homestead_types::{Collectibles, Millis};

/// Whether `name` is placed on the farm and finished building.
///
/// A collectible counts once any of its placements has `ready_at <= now`.
/// `now` is the reduction timestamp, never the wall clock, so replaying an
/// action log gives the same answer every time.
pub fn is_collectible_built(name: &str, collectibles: &Collectibles, now: Millis) -> bool {
    collectibles
        .get(name)
        .is_some_and(|placed| placed.iter().any(|item| item.ready_at <= now))
}

#[cfg(test)]
mod tests {
    use homestead_types::{Coordinates, Extras, PlacedItem, PlacementId};

    use super::*;

    fn placed(ready_at: Millis) -> PlacedItem {
        PlacedItem {
            id: PlacementId::from("1"),
            coordinates: Coordinates { x: 0, y: 0 },
            created_at: 0,
            ready_at,
            other: Extras::new(),
        }
    }

    #[test]
    fn missing_collectible_is_not_built() {
        assert!(!is_collectible_built("Lady Bug", &Collectibles::new(), 10));
    }

    #[test]
    fn empty_placement_list_is_not_built() {
        let mut collectibles = Collectibles::new();
        collectibles.insert(String::from("Lady Bug"), Vec::new());
        assert!(!is_collectible_built("Lady Bug", &collectibles, 10));
    }

    #[test]
    fn ready_boundary_is_inclusive() {
        let mut collectibles = Collectibles::new();
        collectibles.insert(String::from("Lady Bug"), vec![placed(10)]);
        assert!(!is_collectible_built("Lady Bug", &collectibles, 9));
        assert!(is_collectible_built("Lady Bug", &collectibles, 10));
    }

    #[test]
    fn any_ready_placement_counts() {
        let mut collectibles = Collectibles::new();
        collectibles.insert(String::from("Lady Bug"), vec![placed(500), placed(5)]);
        assert!(is_collectible_built("Lady Bug", &collectibles, 100));
    }
}
