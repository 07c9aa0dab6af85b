use super::config::{AIConfig, TieBreak};
use super::eval::LineEvaluator;
use super::evaluator::Evaluator;
use crate::core::{GameError, Grid, Player, Position, Stone};
use crate::player::PlayerController;
use rand::prelude::*;
use tracing::debug;

/// One-ply heuristic player: scores every empty cell and plays the best one.
pub struct HeuristicAI<E: Evaluator = LineEvaluator> {
    pub player: Player,
    pub name: String,
    evaluator: E,
    tie_break: TieBreak,
    rng: StdRng,
}

impl HeuristicAI {
    pub fn new(player: Player, name: &str, config: &AIConfig) -> Self {
        let evaluator = LineEvaluator::new(player.stone());
        Self::with_evaluator(player, name, evaluator, config)
    }
}

impl<E: Evaluator> HeuristicAI<E> {
    pub fn with_evaluator(player: Player, name: &str, evaluator: E, config: &AIConfig) -> Self {
        Self {
            player,
            name: name.to_string(),
            evaluator,
            tie_break: config.tie_break,
            rng: config
                .seed
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
        }
    }

    /// Best-scoring empty cell of `view`.
    ///
    /// The scan runs column by column; ties above zero are settled by the
    /// configured [`TieBreak`]. If every cell scores zero the first empty
    /// cell is kept, except on an empty grid where the centre is played.
    pub fn best_move(&mut self, view: &Grid) -> Result<Position, GameError> {
        if view.count(Stone::Empty) == view.size() * view.size() {
            let centre = Position::new(view.size() / 2, view.size() / 2);
            debug!(player = %self.player, position = %centre, "ai opens at centre");
            return Ok(centre);
        }

        let mut best: Option<(Position, f64)> = None;
        let mut ties = 0usize;

        for pos in view.empty_cells() {
            let score = self.evaluator.score(view, pos);
            match best {
                Some((_, best_score)) if score < best_score => {}
                Some((_, best_score)) if score == best_score && score <= 0.0 => {}
                Some((_, best_score)) if score == best_score => {
                    ties += 1;
                    if self.replaces_on_tie(ties) {
                        best = Some((pos, score));
                    }
                }
                _ => {
                    best = Some((pos, score));
                    ties = 1;
                }
            }
        }

        let (pos, score) = best.ok_or(GameError::NoLegalMove)?;
        debug!(
            player = %self.player,
            evaluator = self.evaluator.name(),
            position = %pos,
            score,
            ties,
            "ai move chosen"
        );
        Ok(pos)
    }

    // `ties` counts the held candidate plus the newly found one.
    fn replaces_on_tie(&mut self, ties: usize) -> bool {
        match self.tie_break {
            TieBreak::Legacy => self.rng.gen_bool(0.5),
            TieBreak::Uniform => self.rng.gen_range(0..ties) == 0,
        }
    }
}

impl<E: Evaluator> PlayerController for HeuristicAI<E> {
    fn choose_move(&mut self, view: &Grid) -> Option<Position> {
        self.best_move(view).ok()
    }

    fn player(&self) -> &Player {
        &self.player
    }

    fn name(&self) -> &str {
        &self.name
    }
}
