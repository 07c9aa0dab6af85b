use crate::core::{Board, Outcome, Player, PlayerId};
use crate::player::ai::{AIConfig, HeuristicAI, RandomAI, TieBreak};
use crate::player::PlayerController;
use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// Kind of computer player used on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    Heuristic,
    Random,
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub board_size: usize,
    pub black: Opponent,
    pub white: Opponent,
    pub tie_break: TieBreak,
    /// Base seed; every side of every game derives its own from it.
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            board_size: 19,
            black: Opponent::Heuristic,
            white: Opponent::Heuristic,
            tie_break: TieBreak::Legacy,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<PlayerId>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub started_at: String,
    pub total_games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub black: Opponent,
    pub white: Opponent,
    pub board_size: usize,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(config: &SelfPlayConfig) -> Self {
        Self {
            started_at: chrono::Local::now().to_rfc3339(),
            total_games: 0,
            black_wins: 0,
            white_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_time_ms: 0.0,
            black: config.black,
            white: config.white,
            board_size: config.board_size,
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(PlayerId::Black) => self.black_wins += 1,
            Some(PlayerId::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

fn make_controller(
    kind: Opponent,
    player: Player,
    tie_break: TieBreak,
    seed: Option<u64>,
) -> Box<dyn PlayerController> {
    let name = format!("{}-{:?}", player.name, kind);
    match kind {
        Opponent::Heuristic => {
            let config = AIConfig { tie_break, seed };
            Box::new(HeuristicAI::new(player, &name, &config))
        }
        Opponent::Random => Box::new(RandomAI::new(player, &name, seed)),
    }
}

/// Plays the configured number of games in parallel.
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    info!(
        games = config.num_games,
        size = config.board_size,
        black = ?config.black,
        white = ?config.white,
        "self-play started"
    );

    let results: Vec<GameResult> = (0..config.num_games)
        .into_par_iter()
        .map(|game_num| {
            let seed = config.seed.map(|s| s.wrapping_add(2 * game_num as u64));
            let mut black = make_controller(config.black, Player::black(), config.tie_break, seed);
            let mut white = make_controller(
                config.white,
                Player::white(),
                config.tie_break,
                seed.map(|s| s.wrapping_add(1)),
            );
            play_game(config.board_size, black.as_mut(), white.as_mut())
        })
        .collect::<anyhow::Result<_>>()?;

    let mut stats = SelfPlayStats::new(config);
    for result in results {
        stats.add_result(result);
    }
    info!(
        black_wins = stats.black_wins,
        white_wins = stats.white_wins,
        draws = stats.draws,
        avg_moves = stats.avg_moves,
        "self-play finished"
    );
    Ok(stats)
}

/// Plays one game to five in a row or a full board.
pub fn play_game<'a>(
    board_size: usize,
    black: &'a mut dyn PlayerController,
    white: &'a mut dyn PlayerController,
) -> anyhow::Result<GameResult> {
    let start_time = Instant::now();
    let mut board = Board::new(board_size)?;
    let mut current = PlayerId::Black;

    let winner = loop {
        let controller = match current {
            PlayerId::Black => &mut *black,
            PlayerId::White => &mut *white,
        };
        let Some(pos) = controller.choose_move(board.grid()) else {
            break None; // 盤が埋まった
        };
        let player = controller.player().clone();
        if let Outcome::Winner(p) = board.place(&player, pos)? {
            break Some(p.id);
        }
        current = current.opponent();
    };

    let result = GameResult {
        winner,
        moves: board.history().len(),
        time_ms: start_time.elapsed().as_millis(),
    };
    debug!(winner = ?result.winner, moves = result.moves, "self-play game done");
    Ok(result)
}
