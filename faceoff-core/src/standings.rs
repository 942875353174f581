//! Leaderboard views: standings, collection highlights, and rating tiers.
//!
//! All pure computations over a caller-supplied snapshot; nothing here
//! mutates an item or remembers anything between calls.

use std::cmp::Ordering;

use crate::types::Item;

/// Leaderboard sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortKey {
    Elo,
    WinPct,
}

/// Fraction of matchups won, in [0, 1]. Zero for a never-compared item.
pub fn win_percentage(item: &Item) -> f64 {
    let total = item.comparisons();
    if total == 0 {
        0.0
    } else {
        f64::from(item.wins) / f64::from(total)
    }
}

/// Items ordered for display. Ties keep input order (stable sort).
pub fn standings(items: &[Item], key: SortKey, descending: bool) -> Vec<&Item> {
    let mut rows: Vec<&Item> = items.iter().collect();
    rows.sort_by(|a, b| {
        let ord = match key {
            SortKey::Elo => a.elo.partial_cmp(&b.elo).unwrap_or(Ordering::Equal),
            SortKey::WinPct => win_percentage(a)
                .partial_cmp(&win_percentage(b))
                .unwrap_or(Ordering::Equal),
        };
        if descending { ord.reverse() } else { ord }
    });
    rows
}

/// Collection highlights for the summary view.
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    /// Total votes cast: every vote produces exactly one win.
    pub total_votes: u64,
    /// Highest-rated item.
    pub most_popular: &'a Item,
    /// The median item by rating.
    pub midpoint: &'a Item,
    /// Lowest-rated item.
    pub least_popular: &'a Item,
}

/// Highlights for a collection, or `None` when it is empty.
pub fn summary(items: &[Item]) -> Option<Summary<'_>> {
    if items.is_empty() {
        return None;
    }
    let ranked = standings(items, SortKey::Elo, true);
    Some(Summary {
        total_votes: items.iter().map(|i| u64::from(i.wins)).sum(),
        most_popular: ranked[0],
        midpoint: ranked[ranked.len() / 2],
        least_popular: ranked[ranked.len() - 1],
    })
}

/// One contiguous rating band of the leaderboard, best first.
#[derive(Debug, Clone)]
pub struct Tier<'a> {
    pub elo_high: f64,
    pub elo_low: f64,
    /// Best item in the band.
    pub top: &'a Item,
    /// Worst item in the band.
    pub bottom: &'a Item,
}

/// Partition the collection into `count` equal rating bands, best band
/// first. Bands are `len / count` items wide; the integer-division
/// remainder is dropped. Collections with fewer than `count` items
/// produce no tiers at all.
pub fn tiers(items: &[Item], count: usize) -> Vec<Tier<'_>> {
    if count == 0 {
        return Vec::new();
    }
    let band_size = items.len() / count;
    if band_size == 0 {
        return Vec::new();
    }

    let ranked = standings(items, SortKey::Elo, true);
    (0..count)
        .map(|t| {
            let band = &ranked[t * band_size..(t + 1) * band_size];
            Tier {
                elo_high: band[0].elo,
                elo_low: band[band.len() - 1].elo,
                top: band[0],
                bottom: band[band.len() - 1],
            }
        })
        .collect()
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
    fn win_percentage_is_zero_without_comparisons() {
        assert_eq!(win_percentage(&item(1, 400.0, 0, 0)), 0.0);
    }

    #[test]
    fn win_percentage_is_wins_over_total() {
        assert!((win_percentage(&item(1, 400.0, 3, 1)) - 0.75).abs() < 1e-12);
        assert_eq!(win_percentage(&item(1, 400.0, 0, 4)), 0.0);
        assert_eq!(win_percentage(&item(1, 400.0, 4, 0)), 1.0);
    }

    #[test]
    fn standings_sort_by_elo_descending() {
        let items = vec![item(1, 380.0, 1, 1), item(2, 450.0, 1, 1), item(3, 410.0, 1, 1)];
        let ranked = standings(&items, SortKey::Elo, true);
        let ids: Vec<i64> = ranked.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn standings_sort_by_win_percentage_ascending() {
        let items = vec![item(1, 400.0, 3, 1), item(2, 400.0, 1, 3), item(3, 400.0, 2, 2)];
        let ranked = standings(&items, SortKey::WinPct, false);
        let ids: Vec<i64> = ranked.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn summary_of_empty_collection_is_none() {
        assert!(summary(&[]).is_none());
    }

    #[test]
    fn summary_highlights_extremes_and_median() {
        let items = vec![
            item(1, 350.0, 2, 8),
            item(2, 520.0, 9, 1),
            item(3, 400.0, 5, 5),
            item(4, 430.0, 6, 4),
            item(5, 390.0, 4, 6),
        ];
        let s = summary(&items).unwrap();
        assert_eq!(s.most_popular.id, 2);
        assert_eq!(s.least_popular.id, 1);
        assert_eq!(s.midpoint.id, 3); // 520, 430, [400], 390, 350
        assert_eq!(s.total_votes, 26);
    }

    #[test]
    fn tiers_partition_best_first() {
        let items: Vec<Item> = (0..8).map(|id| item(id, 400.0 + id as f64 * 10.0, 1, 1)).collect();
        let tiers = tiers(&items, 4);
        assert_eq!(tiers.len(), 4);

        // Best band holds the two highest ratings.
        assert_eq!(tiers[0].top.id, 7);
        assert_eq!(tiers[0].bottom.id, 6);
        assert_eq!(tiers[0].elo_high, 470.0);
        assert_eq!(tiers[0].elo_low, 460.0);
        // Bands never overlap and descend monotonically.
        for pair in tiers.windows(2) {
            assert!(pair[0].elo_low > pair[1].elo_high);
        }
    }

    #[test]
    fn tiers_of_undersized_collection_are_empty() {
        let items: Vec<Item> = (0..3).map(|id| item(id, 400.0, 1, 1)).collect();
        assert!(tiers(&items, 4).is_empty());
        assert!(tiers(&items, 0).is_empty());
    }
}
