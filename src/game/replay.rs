use crate::core::{Board, GameError, Move, PlayerId};
use std::time::{Duration, Instant};
use tracing::debug;

/// Move-by-move review of a finished game.
///
/// Holds its own copy of the board; the history is never edited, only the
/// number of moves shown changes.
pub struct ReplayViewer {
    board: Board,
    interval: Duration,
    autoplay: bool,
    last_tick: Instant,
}

impl ReplayViewer {
    /// Opens the review positioned on the final move.
    pub fn new(board: Board, interval: Duration) -> Self {
        let mut board = board;
        let end = board.history().len();
        board.replay_to(end);
        Self {
            board,
            interval,
            autoplay: false,
            last_tick: Instant::now(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves currently shown.
    pub fn step(&self) -> usize {
        self.board.shown()
    }

    pub fn len(&self) -> usize {
        self.board.history().len()
    }

    pub fn is_empty(&self) -> bool {
        self.board.history().is_empty()
    }

    pub fn at_end(&self) -> bool {
        self.step() == self.len()
    }

    pub fn seek(&mut self, step: usize) -> Result<(), GameError> {
        if self.board.replay_to(step) {
            debug!(step, len = self.len(), "replay seek");
            Ok(())
        } else {
            Err(GameError::InvalidReplayStep {
                step,
                len: self.len(),
            })
        }
    }

    pub fn first(&mut self) {
        self.board.replay_to(0);
    }

    pub fn last(&mut self) {
        let end = self.len();
        self.board.replay_to(end);
    }

    pub fn prev(&mut self) -> bool {
        match self.step().checked_sub(1) {
            Some(step) => self.board.replay_to(step),
            None => false,
        }
    }

    pub fn next(&mut self) -> bool {
        !self.at_end() && self.board.replay_to(self.step() + 1)
    }

    /// Move shown last (highlighted by the presentation layer).
    pub fn last_move(&self) -> Option<&Move> {
        self.board.last_move()
    }

    /// 次の手番 (黒が先手)
    pub fn next_player(&self) -> PlayerId {
        self.last_move()
            .map_or(PlayerId::Black, |mv| mv.player.id.opponent())
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn toggle_autoplay(&mut self, now: Instant) -> bool {
        self.autoplay = !self.autoplay;
        self.last_tick = now;
        self.autoplay
    }

    /// Advances one move once the interval has passed. Autoplay switches
    /// itself off at the final move. Returns whether the view changed.
    pub fn poll_autoplay(&mut self, now: Instant) -> bool {
        if !self.autoplay {
            return false;
        }
        if self.at_end() {
            self.autoplay = false;
            return false;
        }
        if now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }
        self.last_tick = now;
        let moved = self.next();
        if self.at_end() {
            self.autoplay = false;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, Position, Stone};

    fn finished_board() -> Board {
        let mut board = Board::new(7).unwrap();
        let (b, w) = (Player::black(), Player::white());
        for x in 0..4 {
            board.place(&b, Position::new(x, 0)).unwrap();
            board.place(&w, Position::new(x, 1)).unwrap();
        }
        board.place(&b, Position::new(4, 0)).unwrap();
        board
    }

    #[test]
    fn test_navigation_bounds() {
        let mut viewer = ReplayViewer::new(finished_board(), Duration::from_millis(10));
        assert_eq!(viewer.len(), 9);
        assert_eq!(viewer.step(), 9);
        assert!(!viewer.next());

        viewer.first();
        assert_eq!(viewer.step(), 0);
        assert!(!viewer.prev());
        assert_eq!(viewer.last_move(), None);
        assert_eq!(viewer.next_player(), PlayerId::Black);
        assert_eq!(viewer.board().grid().count(Stone::Black), 0);

        assert!(viewer.next());
        assert!(viewer.next());
        assert_eq!(viewer.last_move().map(|m| m.position), Some(Position::new(0, 1)));
        assert_eq!(viewer.next_player(), PlayerId::Black);

        viewer.last();
        assert_eq!(viewer.step(), 9);
        assert_eq!(viewer.board().history().len(), 9);
    }

    #[test]
    fn test_seek_rejects_past_end() {
        let mut viewer = ReplayViewer::new(finished_board(), Duration::from_millis(10));
        viewer.seek(4).unwrap();
        assert_eq!(
            viewer.seek(10),
            Err(GameError::InvalidReplayStep { step: 10, len: 9 })
        );
        assert_eq!(viewer.step(), 4);
        assert_eq!(viewer.board().grid().count(Stone::White), 2);
    }

    #[test]
    fn test_autoplay_steps_and_stops() {
        let interval = Duration::from_millis(100);
        let mut viewer = ReplayViewer::new(finished_board(), interval);
        viewer.seek(7).unwrap();

        let start = Instant::now();
        assert!(viewer.toggle_autoplay(start));
        assert!(!viewer.poll_autoplay(start + Duration::from_millis(50)));
        assert!(viewer.poll_autoplay(start + interval));
        assert_eq!(viewer.step(), 8);
        assert!(viewer.poll_autoplay(start + interval * 2));
        assert_eq!(viewer.step(), 9);
        assert!(!viewer.is_autoplaying());
        assert!(!viewer.poll_autoplay(start + interval * 3));
    }
}
