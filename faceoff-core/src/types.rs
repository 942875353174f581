//! Core data model: ranked items and the update instructions a vote produces.
//!
//! Items are plain records decoupled from any storage technology. The caller
//! supplies a snapshot of the collection; the core never mutates it directly.

/// A ranked entity in the voting pool.
///
/// `elo`, `wins` and `losses` are the only fields the core ever changes, and
/// only indirectly: the rating engine emits [`RatingUpdate`]s that the
/// caller's storage sink applies. The counter fields default to zero when
/// deserializing partially-seeded records, so a missing `wins` column never
/// crashes selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Caller-provided ID, stable across sessions.
    pub id: i64,
    /// Display name. Opaque to the core.
    pub name: String,
    /// Display image. Opaque to the core.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: String,
    /// Integer category tag; collections may be filtered by it before
    /// being passed in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub generation: u32,
    /// Elo-style rating. Unbounded in both directions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub elo: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub wins: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub losses: u32,
}

impl Item {
    /// Total number of matchups this item has appeared in.
    pub fn comparisons(&self) -> u32 {
        self.wins + self.losses
    }

    /// True until the item has appeared in at least one matchup.
    pub fn never_compared(&self) -> bool {
        self.comparisons() == 0
    }
}

/// Instruction for the storage sink after a vote: set `elo` to `new_rating`
/// and increment `wins` if `won`, else `losses`. Applied atomically per item;
/// no cross-item transaction is required.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingUpdate {
    pub id: i64,
    pub new_rating: f64,
    pub won: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(wins: u32, losses: u32) -> Item {
        Item {
            id: 1,
            name: "test".to_string(),
            image_url: String::new(),
            generation: 1,
            elo: 400.0,
            wins,
            losses,
        }
    }

    #[test]
    fn comparisons_sums_both_counters() {
        assert_eq!(item(3, 2).comparisons(), 5);
        assert_eq!(item(0, 0).comparisons(), 0);
    }

    #[test]
    fn never_compared_only_when_both_zero() {
        assert!(item(0, 0).never_compared());
        assert!(!item(1, 0).never_compared());
        assert!(!item(0, 1).never_compared());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partially_seeded_record_defaults_counters() {
        let raw = r#"{"id": 7, "name": "Gible"}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.elo, 0.0);
        assert_eq!(item.wins, 0);
        assert_eq!(item.losses, 0);
        assert!(item.never_compared());
    }
}
