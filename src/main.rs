use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_grid::{PlacementStrategy, WordSearch, WordSearchConfig};

#[derive(Parser)]
struct Opts {
    /// Number of rows and columns in the grid
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// How many starting cells to try per word
    #[arg(long, value_enum, default_value_t = Strategy::Exhaustive)]
    strategy: Strategy,

    /// Seed to regenerate a grid
    #[arg(long)]
    seed: Option<u64>,

    /// Only hide words left to right or top to bottom
    #[arg(long)]
    forward_only: bool,

    /// Words to hide. A sample list is used when none are given
    words: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Single,
    Exhaustive,
}

impl From<Strategy> for PlacementStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Single => PlacementStrategy::SingleAttempt,
            Strategy::Exhaustive => PlacementStrategy::Exhaustive,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    let words = if opts.words.is_empty() {
        ["nap", "sleep", "pillow", "eggplant", "sandwich", "anklet", "rats", "skater"]
            .map(String::from)
            .to_vec()
    } else {
        opts.words
    };

    let config = WordSearchConfig {
        size: opts.size,
        words: &words,
        strategy: opts.strategy.into(),
        allow_backward_words: !opts.forward_only,
    };

    let seed = opts.seed.unwrap_or_else(rand::random);
    info!(seed, "generating grid");

    let word_search = WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed))?;

    print!("{}", word_search);

    if !word_search.unplaced_words().is_empty() {
        eprintln!("Could not fit: {}", word_search.unplaced_words().join(", "));
    }

    Ok(())
}
