//! faceoff-core: pure-computation crowd-voting core.
//!
//! Head-to-head votes → Elo rating updates → leaderboard standings.
//! No IO, no storage, no ambient random state — just math over the item
//! snapshot the caller passes in. Bring your own store and your own RNG.
//!
//! # Quick start
//!
//! ```rust
//! use faceoff_core::{DEFAULT_K_FACTOR, Item, elo, select};
//!
//! let items = vec![
//!     Item { id: 1, name: "Bulbasaur".into(), image_url: String::new(),
//!            generation: 1, elo: 400.0, wins: 0, losses: 0 },
//!     Item { id: 4, name: "Charmander".into(), image_url: String::new(),
//!            generation: 1, elo: 400.0, wins: 0, losses: 0 },
//! ];
//!
//! let mut rng = rand::rng();
//! let (a, b) = select(&items, &mut rng).unwrap();
//!
//! // The voter picked `a`. Hand both updates to your storage sink.
//! for update in elo::vote(a, b, DEFAULT_K_FACTOR) {
//!     println!("item {} -> rating {:.1}", update.id, update.new_rating);
//! }
//! ```

pub mod constants;
pub mod elo;
pub mod select;
pub mod standings;
pub mod types;

pub use constants::{BASELINE_RATING, DEFAULT_K_FACTOR, SUMMARY_TIERS};
pub use select::{SelectError, select};
pub use standings::{SortKey, Summary, Tier, standings, summary, tiers, win_percentage};
pub use types::{Item, RatingUpdate};
