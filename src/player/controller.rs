use crate::core::{Grid, Player, Position};

/// 自動で着手するプレイヤーのtrait
pub trait PlayerController {
    /// Pick an empty cell of `view`, or `None` when nothing can be played.
    fn choose_move(&mut self, view: &Grid) -> Option<Position>;
    fn player(&self) -> &Player;
    fn name(&self) -> &str;
}
