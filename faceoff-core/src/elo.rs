//! Elo rating engine: closed-form, pure, no external state.
//!
//! One vote moves both participants' ratings by the same magnitude in
//! opposite directions; the sum of the two ratings is preserved exactly.

use crate::types::{Item, RatingUpdate};

/// Probability that the side rated `rating_a` beats the side rated
/// `rating_b`, under the standard logistic curve with a 400-point scale.
///
/// `expected_score(a, b) + expected_score(b, a) == 1` for all inputs.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / 400.0))
}

/// Compute both new ratings after a matchup.
///
/// `outcome` is the realized score for side A: 1.0 if A won, 0.0 if B won.
/// Fractional values (e.g. 0.5 for a draw) are accepted, though the voting
/// flow never produces one. `k_factor` bounds how far a single outcome can
/// move a rating.
///
/// Deterministic and total: every real-valued input is accepted.
pub fn update(rating_a: f64, rating_b: f64, outcome: f64, k_factor: f64) -> (f64, f64) {
    let expected_a = expected_score(rating_a, rating_b);
    let expected_b = expected_score(rating_b, rating_a);

    let new_rating_a = rating_a + k_factor * (outcome - expected_a);
    let new_rating_b = rating_b + k_factor * ((1.0 - outcome) - expected_b);

    (new_rating_a, new_rating_b)
}

/// Package a decided matchup into the two update instructions the storage
/// sink applies: new rating plus which counter to bump, per item.
pub fn vote(winner: &Item, loser: &Item, k_factor: f64) -> [RatingUpdate; 2] {
    let (new_winner, new_loser) = update(winner.elo, loser.elo, 1.0, k_factor);
    [
        RatingUpdate { id: winner.id, new_rating: new_winner, won: true },
        RatingUpdate { id: loser.id, new_rating: new_loser, won: false },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_K_FACTOR;

    const TOL: f64 = 1e-9;

    #[test]
    fn expected_scores_sum_to_one() {
        for (a, b) in [(400.0, 400.0), (1200.0, 800.0), (0.0, 2500.0), (-100.0, 350.5)] {
            let sum = expected_score(a, b) + expected_score(b, a);
            assert!((sum - 1.0).abs() < TOL, "expected sum 1, got {sum}");
        }
    }

    #[test]
    fn equal_ratings_expect_half_and_win_moves_half_k() {
        assert!((expected_score(400.0, 400.0) - 0.5).abs() < TOL);

        let (a, b) = update(400.0, 400.0, 1.0, DEFAULT_K_FACTOR);
        assert!((a - 400.0 - DEFAULT_K_FACTOR / 2.0).abs() < TOL);
        assert!((b - 400.0 + DEFAULT_K_FACTOR / 2.0).abs() < TOL);
    }

    #[test]
    fn evenly_matched_win_at_1200() {
        let (a, b) = update(1200.0, 1200.0, 1.0, 32.0);
        assert!((a - 1216.0).abs() < TOL);
        assert!((b - 1184.0).abs() < TOL);
    }

    #[test]
    fn favorite_gains_little_underdog_loss_costs_little() {
        // 1400 vs 1000: expected score for the favorite is 10/11 ~ 0.909,
        // so a win moves both ratings by only ~2.91 points.
        let (a, b) = update(1400.0, 1000.0, 1.0, 32.0);
        assert!((a - 1400.0 - 2.909).abs() < 0.01, "favorite gained {}", a - 1400.0);
        assert!((1000.0 - b - 2.909).abs() < 0.01);
    }

    #[test]
    fn upset_moves_ratings_sharply() {
        // Same matchup, favorite loses: the full complement of the expected
        // score, ~29.09 points each way.
        let (a, b) = update(1400.0, 1000.0, 0.0, 32.0);
        assert!((1400.0 - a - 29.09).abs() < 0.01, "favorite lost {}", 1400.0 - a);
        assert!((b - 1000.0 - 29.09).abs() < 0.01);
    }

    #[test]
    fn update_is_zero_sum() {
        for (a, b, outcome) in [(1400.0, 1000.0, 1.0), (312.5, 488.25, 0.0), (400.0, 400.0, 0.5)] {
            let (na, nb) = update(a, b, outcome, DEFAULT_K_FACTOR);
            assert!((na + nb - a - b).abs() < TOL);
        }
    }

    #[test]
    fn update_is_symmetric_under_swap() {
        let (a1, b1) = update(523.0, 391.0, 1.0, DEFAULT_K_FACTOR);
        let (b2, a2) = update(391.0, 523.0, 0.0, DEFAULT_K_FACTOR);
        assert!((a1 - a2).abs() < TOL);
        assert!((b1 - b2).abs() < TOL);
    }

    #[test]
    fn update_is_deterministic() {
        let first = update(733.125, 402.875, 1.0, 24.0);
        let second = update(733.125, 402.875, 1.0, 24.0);
        assert_eq!(first, second);
    }

    #[test]
    fn vote_packages_winner_and_loser_updates() {
        let winner = Item {
            id: 10,
            name: "a".to_string(),
            image_url: String::new(),
            generation: 1,
            elo: 400.0,
            wins: 0,
            losses: 0,
        };
        let loser = Item { id: 20, elo: 450.0, ..winner.clone() };

        let [up_w, up_l] = vote(&winner, &loser, DEFAULT_K_FACTOR);
        assert_eq!(up_w.id, 10);
        assert!(up_w.won);
        assert!(up_w.new_rating > 400.0);
        assert_eq!(up_l.id, 20);
        assert!(!up_l.won);
        assert!(up_l.new_rating < 450.0);
    }
}
