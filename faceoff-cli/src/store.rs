//! JSON-file item store: the storage sink behind the voting flow.
//!
//! The whole collection lives in one JSON array. Votes are applied by
//! reloading the file, patching the two affected items, and writing the
//! array back — the per-item update semantics the core expects. Nothing
//! here guards against two processes voting at once; run one faceoff.
use faceoff_core::constants::BASELINE_RATING;
use faceoff_core::{Item, RatingUpdate};
use serde::Deserialize;
use std::path::Path;

use crate::bail;

/// A record in the seed file: identity and display fields only.
/// Ratings and counters are assigned at import.
#[derive(Deserialize)]
pub struct SeedRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, alias = "gen")]
    pub generation: u32,
}

/// Load the full collection from the store file.
pub fn load(path: &Path) -> Vec<Item> {
    let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            bail(format!(
                "No item store at {}. Run `faceoff import --seed <file>` first.",
                path.display()
            ));
        }
        bail(format!("Failed to read item store {}: {e}", path.display()))
    });
    serde_json::from_str(&content)
        .unwrap_or_else(|e| bail(format!("Malformed item store {}: {e}", path.display())))
}

/// Load the collection, keeping only the given generations.
/// An empty filter keeps everything.
pub fn load_filtered(path: &Path, gens: &[u32]) -> Vec<Item> {
    let mut items = load(path);
    if !gens.is_empty() {
        items.retain(|i| gens.contains(&i.generation));
    }
    items
}

/// Write the full collection back to the store file.
pub fn save(path: &Path, items: &[Item]) {
    let content = serde_json::to_string_pretty(items)
        .unwrap_or_else(|e| bail(format!("Failed to serialize item store: {e}")));
    std::fs::write(path, content)
        .unwrap_or_else(|e| bail(format!("Failed to write item store {}: {e}", path.display())));
}

/// Apply rating updates in place: set the new rating and bump exactly one
/// counter per update. Updates whose ID is absent are ignored.
pub fn apply_updates(items: &mut [Item], updates: &[RatingUpdate]) {
    for update in updates {
        if let Some(item) = items.iter_mut().find(|i| i.id == update.id) {
            item.elo = update.new_rating;
            if update.won {
                item.wins += 1;
            } else {
                item.losses += 1;
            }
        }
    }
}

/// Persist a decided vote: reload the full store (the voting view may be
/// generation-filtered), apply both updates, write back.
pub fn apply_vote(path: &Path, updates: &[RatingUpdate]) {
    let mut items = load(path);
    apply_updates(&mut items, updates);
    save(path, &items);
}

/// Create a store from seed records: baseline rating, zeroed counters.
pub fn seed_items(records: Vec<SeedRecord>) -> Vec<Item> {
    let mut items: Vec<Item> = Vec::with_capacity(records.len());
    for record in records {
        if items.iter().any(|i| i.id == record.id) {
            bail(format!("Duplicate item ID in seed file: {}", record.id));
        }
        items.push(Item {
            id: record.id,
            name: record.name,
            image_url: record.image_url,
            generation: record.generation,
            elo: BASELINE_RATING,
            wins: 0,
            losses: 0,
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, elo: f64, wins: u32, losses: u32) -> Item {
        Item {
            id,
            name: format!("item-{id}"),
            image_url: String::new(),
            generation: 1,
            elo,
            wins,
            losses,
        }
    }

    #[test]
    fn apply_updates_bumps_exactly_one_counter_each() {
        let mut items = vec![item(1, 400.0, 2, 2), item(2, 410.0, 1, 3), item(3, 395.0, 0, 0)];
        let updates = [
            RatingUpdate { id: 1, new_rating: 416.0, won: true },
            RatingUpdate { id: 2, new_rating: 394.0, won: false },
        ];

        apply_updates(&mut items, &updates);

        assert_eq!(items[0].elo, 416.0);
        assert_eq!((items[0].wins, items[0].losses), (3, 2));
        assert_eq!(items[1].elo, 394.0);
        assert_eq!((items[1].wins, items[1].losses), (1, 4));
        // Bystander untouched
        assert_eq!(items[2], item(3, 395.0, 0, 0));
    }

    #[test]
    fn apply_updates_ignores_unknown_ids() {
        let mut items = vec![item(1, 400.0, 0, 0)];
        apply_updates(&mut items, &[RatingUpdate { id: 99, new_rating: 500.0, won: true }]);
        assert_eq!(items[0], item(1, 400.0, 0, 0));
    }

    #[test]
    fn seeded_items_start_at_baseline_with_zero_counters() {
        let records = vec![
            SeedRecord { id: 1, name: "Bulbasaur".to_string(), image_url: String::new(), generation: 1 },
            SeedRecord { id: 152, name: "Chikorita".to_string(), image_url: String::new(), generation: 2 },
        ];
        let items = seed_items(records);
        assert_eq!(items.len(), 2);
        for item in &items {
            assert_eq!(item.elo, BASELINE_RATING);
            assert!(item.never_compared());
        }
        assert_eq!(items[1].generation, 2);
    }
}
