mod config;
mod output;
mod store;

use clap::Parser;
use faceoff_core::{DEFAULT_K_FACTOR, SUMMARY_TIERS, SortKey, elo, select, standings, summary, tiers};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "faceoff", version, about = "Crowd-voting Elo leaderboard for head-to-head matchups")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Vote on matchups interactively
    Vote(VoteArgs),
    /// Show the leaderboard
    Board(BoardArgs),
    /// Show vote totals, highlights, and rating tiers
    Summary(SummaryArgs),
    /// Create an item store from a JSON seed file
    Import(ImportArgs),
    /// Create a default config file at ~/.config/faceoff/config.toml
    Init,
}

#[derive(Parser)]
struct VoteArgs {
    /// Path to the JSON item store
    #[arg(long)]
    data: Option<PathBuf>,

    /// Only present items from this generation (repeatable)
    #[arg(long = "gen")]
    gens: Vec<u32>,

    /// K-factor: how far a single vote can move a rating
    #[arg(long)]
    k_factor: Option<f64>,

    /// Path to config file (default: ~/.config/faceoff/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct BoardArgs {
    /// Path to the JSON item store
    #[arg(long)]
    data: Option<PathBuf>,

    /// Only show items from this generation (repeatable)
    #[arg(long = "gen")]
    gens: Vec<u32>,

    /// Sort criterion: "elo" or "winpct"
    #[arg(long)]
    sort: Option<String>,

    /// Sort ascending (worst first) instead of descending
    #[arg(long)]
    asc: bool,

    /// Number of rows to show (0 = all)
    #[arg(long)]
    limit: Option<usize>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Path to config file (default: ~/.config/faceoff/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct SummaryArgs {
    /// Path to the JSON item store
    #[arg(long)]
    data: Option<PathBuf>,

    /// Only include items from this generation (repeatable)
    #[arg(long = "gen")]
    gens: Vec<u32>,

    /// Path to config file (default: ~/.config/faceoff/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct ImportArgs {
    /// JSON seed file: an array of {id, name, image_url?, generation?} records
    #[arg(long)]
    seed: PathBuf,

    /// Path for the new item store
    #[arg(long)]
    data: Option<PathBuf>,

    /// Overwrite an existing item store
    #[arg(long)]
    force: bool,

    /// Path to config file (default: ~/.config/faceoff/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Resolve the store path: --data flag wins, then config, then error.
fn resolve_data_path(flag: Option<PathBuf>, config_flag: Option<PathBuf>) -> PathBuf {
    let config_path = config_flag.unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);
    flag.or(cfg.data_path).unwrap_or_else(|| {
        bail(format!(
            "No item store specified. Pass --data or set data_path in {}",
            config_path.display()
        ));
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Vote(args) => run_vote(args),
        Commands::Board(args) => run_board(args),
        Commands::Summary(args) => run_summary(args),
        Commands::Import(args) => run_import(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default item store, K-factor, etc.");
        }
    }
}

fn run_vote(args: VoteArgs) {
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let data_path = args.data.clone().or(cfg.data_path).unwrap_or_else(|| {
        bail(format!(
            "No item store specified. Pass --data or set data_path in {}",
            config_path.display()
        ));
    });
    let k_factor = args.k_factor.or(cfg.k_factor).unwrap_or(DEFAULT_K_FACTOR);
    if k_factor <= 0.0 {
        bail("--k-factor must be positive");
    }

    let mut rng = rand::rng();
    let stdin = io::stdin();
    let mut votes_cast: usize = 0;

    println!("Pick your favorite: 1 or 2, s to skip, q to quit.\n");

    loop {
        // Reload each cycle so concurrent-ish edits and the fairness policy
        // always see fresh counters.
        let items = store::load_filtered(&data_path, &args.gens);
        let (a, b) = match select(&items, &mut rng) {
            Ok(pair) => pair,
            Err(e) => bail(e),
        };

        println!("  [1] {:<30} elo {:>7.2}  ({} - {})", a.name, a.elo, a.wins, a.losses);
        println!("  [2] {:<30} elo {:>7.2}  ({} - {})", b.name, b.elo, b.wins, b.losses);
        print!("> ");
        io::stdout().flush().unwrap_or_else(|e| bail(e));

        let line = match stdin.lock().lines().next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => bail(format!("Failed to read from stdin: {e}")),
            None => break, // EOF
        };

        match line.trim() {
            "1" => {
                store::apply_vote(&data_path, &elo::vote(a, b, k_factor));
                votes_cast += 1;
            }
            "2" => {
                store::apply_vote(&data_path, &elo::vote(b, a, k_factor));
                votes_cast += 1;
            }
            "s" | "" => {}
            "q" => break,
            other => println!("Unrecognized input \"{other}\". Use 1, 2, s, or q."),
        }
        println!();
    }

    println!("Recorded {votes_cast} votes.");
}

fn run_board(args: BoardArgs) {
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let data_path = args.data.clone().or(cfg.data_path).unwrap_or_else(|| {
        bail(format!(
            "No item store specified. Pass --data or set data_path in {}",
            config_path.display()
        ));
    });

    let sort = args.sort.or(cfg.sort);
    let key = match sort.as_deref() {
        Some("elo") | None => SortKey::Elo,
        Some("winpct") => SortKey::WinPct,
        Some(other) => bail(format!("Unknown sort \"{other}\". Use \"elo\" or \"winpct\".")),
    };

    let items = store::load_filtered(&data_path, &args.gens);
    if items.is_empty() {
        bail("Item store is empty (or the generation filter matched nothing).");
    }

    let mut ranked = standings(&items, key, !args.asc);
    let limit = args.limit.or(cfg.limit).unwrap_or(0);
    if limit > 0 {
        ranked.truncate(limit);
    }

    if args.json {
        output::print_board_json(&ranked);
    } else {
        output::print_board_table(&ranked, items.len());
    }
}

fn run_summary(args: SummaryArgs) {
    let data_path = resolve_data_path(args.data, args.config);

    let items = store::load_filtered(&data_path, &args.gens);
    let summary = summary(&items).unwrap_or_else(|| {
        bail("Item store is empty (or the generation filter matched nothing).")
    });

    output::print_summary(&summary, items.len());
    output::print_tiers(&tiers(&items, SUMMARY_TIERS));
}

fn run_import(args: ImportArgs) {
    let data_path = resolve_data_path(args.data, args.config);

    if data_path.exists() && !args.force {
        bail(format!(
            "Item store already exists at {}. Pass --force to overwrite it.",
            data_path.display()
        ));
    }

    let content = std::fs::read_to_string(&args.seed)
        .unwrap_or_else(|e| bail(format!("Failed to read seed file {}: {e}", args.seed.display())));
    let records: Vec<store::SeedRecord> = serde_json::from_str(&content)
        .unwrap_or_else(|e| bail(format!("Malformed seed file {}: {e}", args.seed.display())));

    if records.is_empty() {
        bail("Seed file contains no items.");
    }

    let items = store::seed_items(records);
    store::save(&data_path, &items);
    println!("Imported {} items to {}", items.len(), data_path.display());
}
