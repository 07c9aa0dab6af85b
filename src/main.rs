use clap::Parser;
use gobang_ai::game::GameConfig;
use gobang_ai::player::ai::TieBreak;
use gobang_ai::selfplay::{run_selfplay, Opponent, SelfPlayConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "gobang.json";

/// Computer-versus-computer Gobang matches
#[derive(Parser, Debug)]
#[command(name = "gobang-ai", version)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 10)]
    games: usize,

    /// Board side length (odd, at least 5); overrides the config file
    #[arg(short, long)]
    size: Option<usize>,

    #[arg(long, value_enum, default_value_t = Opponent::Heuristic)]
    black: Opponent,

    #[arg(long, value_enum, default_value_t = Opponent::Heuristic)]
    white: Opponent,

    /// Tie-break strategy; overrides the config file
    #[arg(long, value_enum)]
    tie_break: Option<TieBreak>,

    /// Base RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// JSON game config (board size, AI settings); defaults to ./gobang.json if present
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let game_config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_or_default(DEFAULT_CONFIG),
    };

    let config = SelfPlayConfig {
        num_games: args.games,
        board_size: args.size.unwrap_or(game_config.board_size),
        black: args.black,
        white: args.white,
        tie_break: args.tie_break.unwrap_or(game_config.ai.tie_break),
        seed: args.seed.or(game_config.ai.seed),
    };

    let stats = run_selfplay(&config)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
