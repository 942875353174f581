//! Matchup selection: pick the next two items to put in front of a voter.
//!
//! The policy blends three goals, evaluated per call against the snapshot
//! the caller passes in:
//!
//!   1. Fairness — while two or more items have never been compared, pair
//!      only those, so every item gets an initial matchup.
//!   2. Otherwise, one uniform draw `r` picks a strategy:
//!      - r < 0.25  → underrepresented pairing (bottom decile by
//!        comparison count)
//!      - r < 0.75  → tiered pairing (a random contiguous rating band)
//!      - r >= 0.75 → pure random
//!   3. Any strategy whose candidate pool comes up short of two items falls
//!      through to pure random over the whole collection.
//!
//! Selection is stateless across calls and performs no IO. The RNG is
//! injected so each branch can be exercised deterministically in tests.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::index::sample;

use crate::constants::{
    DECILE, MAX_DIVISIONS, MIN_DIVISIONS, TIERED_BAND, UNDERREPRESENTED_BAND,
};
use crate::types::Item;

/// Selection failure: a matchup needs two distinct items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("need at least 2 items to build a matchup, found {found}")]
    InsufficientData { found: usize },
}

/// Pick two distinct items to compare next.
///
/// Errors with [`SelectError::InsufficientData`] when the collection holds
/// fewer than two items; never fails otherwise.
pub fn select<'a, R: Rng + ?Sized>(
    items: &'a [Item],
    rng: &mut R,
) -> Result<(&'a Item, &'a Item), SelectError> {
    if items.len() < 2 {
        return Err(SelectError::InsufficientData { found: items.len() });
    }

    // Fairness first: re-evaluated every call, so this branch drains
    // naturally once fewer than two uncompared items remain.
    let fresh: Vec<&Item> = items.iter().filter(|i| i.never_compared()).collect();
    if fresh.len() > 1 {
        return Ok(sample_pair(&fresh, rng));
    }

    let r = rng.random::<f64>();
    if r < UNDERREPRESENTED_BAND {
        if let Some(pair) = select_underrepresented(items, rng) {
            return Ok(pair);
        }
    } else if r < TIERED_BAND {
        if let Some(pair) = select_tiered(items, rng) {
            return Ok(pair);
        }
    }

    Ok(select_uniform(items, rng))
}

/// Underrepresented pairing: two items from the bottom decile by
/// comparison count.
///
/// Returns `None` when the decile holds fewer than two items (collections
/// under 2×[`DECILE`] items mostly land here); the caller falls back to
/// whole-collection sampling.
pub fn select_underrepresented<'a, R: Rng + ?Sized>(
    items: &'a [Item],
    rng: &mut R,
) -> Option<(&'a Item, &'a Item)> {
    let mut by_count: Vec<&Item> = items.iter().collect();
    by_count.sort_by_key(|i| i.comparisons());

    let pool = &by_count[..items.len() / DECILE];
    if pool.len() < 2 {
        return None;
    }
    Some(sample_pair(pool, rng))
}

/// Tiered pairing: two items from one contiguous rating band, to keep the
/// matchup competitive.
///
/// The division count is drawn fresh per call from
/// [`MIN_DIVISIONS`]..=[`MAX_DIVISIONS`], the collection is sorted by
/// rating, and one band is picked at random. Integer division can leave the
/// drawn band short or empty (small collections, or the trailing remainder);
/// such a band is never clamped or re-drawn. `None` sends the caller to the
/// whole-collection fallback instead.
pub fn select_tiered<'a, R: Rng + ?Sized>(
    items: &'a [Item],
    rng: &mut R,
) -> Option<(&'a Item, &'a Item)> {
    let divisions = rng.random_range(MIN_DIVISIONS..=MAX_DIVISIONS);
    let band_size = items.len() / divisions;
    if band_size < 2 {
        return None;
    }

    let mut by_elo: Vec<&Item> = items.iter().collect();
    by_elo.sort_by(|a, b| a.elo.partial_cmp(&b.elo).unwrap_or(Ordering::Equal));

    let band_index = rng.random_range(0..divisions);
    let start = band_index * band_size;
    let end = (start + band_size).min(by_elo.len());
    let band = &by_elo[start..end];
    if band.len() < 2 {
        return None;
    }
    Some(sample_pair(band, rng))
}

/// Two items uniformly at random without replacement from the whole
/// collection. The terminal fallback for every other strategy.
///
/// Panics if `items` holds fewer than two entries; [`select`] guards that.
pub fn select_uniform<'a, R: Rng + ?Sized>(items: &'a [Item], rng: &mut R) -> (&'a Item, &'a Item) {
    let picked = sample(rng, items.len(), 2);
    (&items[picked.index(0)], &items[picked.index(1)])
}

fn sample_pair<'a, R: Rng + ?Sized>(pool: &[&'a Item], rng: &mut R) -> (&'a Item, &'a Item) {
    let picked = sample(rng, pool.len(), 2);
    (pool[picked.index(0)], pool[picked.index(1)])
}
