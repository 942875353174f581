//! Output formatting: terminal tables and JSON.
use faceoff_core::{Item, Summary, Tier, win_percentage};
use serde::Serialize;

/// Display names for the summary tiers, best first.
const TIER_NAMES: [&str; 4] = ["Champion", "Gold", "Silver", "Bronze"];

#[derive(Serialize)]
struct JsonRow {
    rank: usize,
    name: String,
    wins: u32,
    losses: u32,
    win_pct: f64,
    elo: f64,
}

/// Print the leaderboard as a formatted terminal table.
pub fn print_board_table(rows: &[&Item], total_items: usize) {
    // Find the widest item name for padding
    let name_width = rows.iter().map(|i| i.name.len()).max().unwrap_or(4).max(4);

    println!("   # | {:<name_width$} |  Record |  Win % |     Elo", "Name");
    println!("-----|-{}-|---------|--------|--------", "-".repeat(name_width));

    for (i, item) in rows.iter().enumerate() {
        let record = format!("{} - {}", item.wins, item.losses);
        println!(
            "{:>4} | {:<name_width$} | {:>7} | {:>5.1}% | {:>7.2}",
            i + 1,
            item.name,
            record,
            win_percentage(item) * 100.0,
            item.elo,
        );
    }

    if rows.len() < total_items {
        println!("\nShowing {} of {} items", rows.len(), total_items);
    }
}

/// Print the leaderboard as JSON.
pub fn print_board_json(rows: &[&Item]) {
    let rows: Vec<JsonRow> = rows
        .iter()
        .enumerate()
        .map(|(i, item)| JsonRow {
            rank: i + 1,
            name: item.name.clone(),
            wins: item.wins,
            losses: item.losses,
            win_pct: win_percentage(item),
            elo: item.elo,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows).unwrap());
}

/// Print collection highlights: vote total plus the extremes and the median.
pub fn print_summary(summary: &Summary, item_count: usize) {
    println!("{} votes cast across {} items\n", summary.total_votes, item_count);

    for (label, item) in [
        ("Most popular", summary.most_popular),
        ("Median", summary.midpoint),
        ("Least popular", summary.least_popular),
    ] {
        println!(
            "{label:<14} {} (elo {:.2}, {} - {})",
            item.name, item.elo, item.wins, item.losses,
        );
    }
}

/// Print the rating tiers, best first.
pub fn print_tiers(tiers: &[Tier]) {
    if tiers.is_empty() {
        return;
    }

    println!("\nMatchmaking tiers");
    for (i, tier) in tiers.iter().enumerate() {
        let name = TIER_NAMES.get(i).copied().unwrap_or("Tier");
        println!(
            "  {name:<9} elo {:.2} - {:.2}  (top: {}, bottom: {})",
            tier.elo_low, tier.elo_high, tier.top.name, tier.bottom.name,
        );
    }
}
