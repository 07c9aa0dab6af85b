use crate::core::{Grid, Player, Position};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

/// Plays a uniformly random empty cell.
pub struct RandomAI {
    pub player: Player,
    pub name: String,
    rng: StdRng,
}

impl RandomAI {
    pub fn new(player: Player, name: &str, seed: Option<u64>) -> Self {
        RandomAI {
            player,
            name: name.to_string(),
            rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
        }
    }
}

impl PlayerController for RandomAI {
    fn choose_move(&mut self, view: &Grid) -> Option<Position> {
        view.empty_cells().choose(&mut self.rng)
    }

    fn player(&self) -> &Player {
        &self.player
    }

    fn name(&self) -> &str {
        &self.name
    }
}
