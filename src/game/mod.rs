pub mod config;
pub mod replay;

pub use config::GameConfig;
pub use replay::ReplayViewer;

use crate::core::{Board, GameError, Move, Outcome, Player, PlayerId, Position};
use crate::player::ai::HeuristicAI;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won(Player),
    /// Board filled without five in a row.
    Drawn,
}

/// Wins per side, kept across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinTally {
    pub black: u32,
    pub white: u32,
}

impl WinTally {
    fn record(&mut self, winner: PlayerId) {
        match winner {
            PlayerId::Black => self.black += 1,
            PlayerId::White => self.white += 1,
        }
    }
}

/// Result of one human move and the computer's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub human: Move,
    /// Absent when the human move ended the game.
    pub reply: Option<Move>,
    pub outcome: Outcome,
}

/// Human-versus-computer session.
///
/// The board is the only record of the position; the computer reads it
/// afresh on every move, so undo and review need no extra bookkeeping.
pub struct Game {
    config: GameConfig,
    board: Board,
    ai: HeuristicAI,
    status: Status,
    tally: WinTally,
    replay: Option<ReplayViewer>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        for slot in [PlayerId::Black, PlayerId::White] {
            let found = config.player(slot).id;
            if found != slot {
                return Err(GameError::PlayerMismatch { slot, found });
            }
        }
        let board = Board::new(config.board_size)?;
        let computer = config.player(config.human.opponent()).clone();
        let ai = HeuristicAI::new(computer, "Computer", &config.ai);
        let mut game = Game {
            config,
            board,
            ai,
            status: Status::Playing,
            tally: WinTally::default(),
            replay: None,
        };
        game.open_if_computer_starts()?;
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn tally(&self) -> WinTally {
        self.tally
    }

    pub fn human(&self) -> &Player {
        self.config.player(self.config.human)
    }

    pub fn computer(&self) -> &Player {
        &self.ai.player
    }

    /// 手番 (黒が先手)
    pub fn current_player(&self) -> PlayerId {
        if self.board.history().len() % 2 == 0 {
            PlayerId::Black
        } else {
            PlayerId::White
        }
    }

    /// Plays the human move at `pos`, then the computer's reply unless the
    /// game already ended.
    pub fn play(&mut self, pos: Position) -> Result<Turn, GameError> {
        if self.replay.is_some() {
            return Err(GameError::ReplayActive);
        }
        if self.status != Status::Playing {
            return Err(GameError::GameOver);
        }

        let human = self.human().clone();
        let outcome = self.board.place(&human, pos)?;
        let human_move = Move::new(human, pos);
        self.settle(&outcome);
        if self.status != Status::Playing {
            return Ok(Turn {
                human: human_move,
                reply: None,
                outcome,
            });
        }

        let (reply, outcome) = self.computer_move()?;
        Ok(Turn {
            human: human_move,
            reply: Some(reply),
            outcome,
        })
    }

    /// Takes back the human's last move together with the computer's reply.
    pub fn undo_turn(&mut self) -> bool {
        if self.replay.is_some() || self.status != Status::Playing {
            return false;
        }
        let human = self.config.human;
        let Some(idx) = self
            .board
            .history()
            .iter()
            .rposition(|mv| mv.player.id == human)
        else {
            return false;
        };
        while self.board.history().len() > idx {
            self.board.undo();
        }
        info!(moves = idx, "turn undone");
        true
    }

    /// Starts a new game on an empty board. The win tally is kept.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.board = Board::new(self.config.board_size)?;
        self.status = Status::Playing;
        self.replay = None;
        info!(black = self.tally.black, white = self.tally.white, "new game");
        self.open_if_computer_starts()
    }

    /// Opens the review of the finished game at its final move.
    pub fn enter_replay(&mut self) -> Result<&mut ReplayViewer, GameError> {
        if self.status == Status::Playing {
            return Err(GameError::NotFinished);
        }
        let viewer = ReplayViewer::new(self.board.clone(), self.config.autoplay_interval());
        info!(moves = viewer.len(), "entering replay");
        Ok(self.replay.insert(viewer))
    }

    pub fn replay(&self) -> Option<&ReplayViewer> {
        self.replay.as_ref()
    }

    pub fn replay_mut(&mut self) -> Option<&mut ReplayViewer> {
        self.replay.as_mut()
    }

    pub fn leave_replay(&mut self) {
        self.replay = None;
    }

    fn open_if_computer_starts(&mut self) -> Result<(), GameError> {
        if self.config.human == PlayerId::White && self.board.history().is_empty() {
            self.computer_move()?;
        }
        Ok(())
    }

    fn computer_move(&mut self) -> Result<(Move, Outcome), GameError> {
        let pos = self.ai.best_move(self.board.grid())?;
        let computer = self.ai.player.clone();
        let outcome = self.board.place(&computer, pos)?;
        self.settle(&outcome);
        Ok((Move::new(computer, pos), outcome))
    }

    fn settle(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Winner(p) => {
                self.tally.record(p.id);
                self.status = Status::Won(p.clone());
            }
            Outcome::NoWinner if self.board.is_full() => {
                info!("board full, game drawn");
                self.status = Status::Drawn;
            }
            Outcome::NoWinner => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ai::AIConfig;

    fn config(size: usize) -> GameConfig {
        GameConfig {
            board_size: size,
            ai: AIConfig::seeded(11),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_turn_plays_reply() {
        let mut game = Game::new(config(19)).unwrap();
        let turn = game.play(Position::new(9, 9)).unwrap();
        assert_eq!(turn.outcome, Outcome::NoWinner);
        let reply = turn.reply.unwrap();
        assert_eq!(reply.player.id, PlayerId::White);
        assert_ne!(reply.position, Position::new(9, 9));
        assert_eq!(game.board().history().len(), 2);
        assert_eq!(game.current_player(), PlayerId::Black);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = Game::new(config(9)).unwrap();
        let turn = game.play(Position::new(4, 4)).unwrap();
        let taken = turn.reply.unwrap().position;
        assert_eq!(game.play(taken), Err(GameError::CellOccupied(taken)));
        assert!(matches!(
            game.play(Position::new(9, 9)),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(game.board().history().len(), 2);
    }

    #[test]
    fn test_undo_turn_removes_both_moves() {
        let mut game = Game::new(config(19)).unwrap();
        game.play(Position::new(9, 9)).unwrap();
        game.play(Position::new(3, 3)).unwrap();
        assert_eq!(game.board().history().len(), 4);

        assert!(game.undo_turn());
        assert_eq!(game.board().history().len(), 2);
        assert_eq!(game.board().get(Position::new(3, 3)), Some(crate::core::Stone::Empty));
        assert!(game.undo_turn());
        assert!(game.board().history().is_empty());
        assert!(!game.undo_turn());
    }

    #[test]
    fn test_computer_opens_for_white_human() {
        let cfg = GameConfig {
            human: PlayerId::White,
            ..config(9)
        };
        let mut game = Game::new(cfg).unwrap();
        assert_eq!(game.board().history().len(), 1);
        assert_eq!(game.computer().id, PlayerId::Black);
        assert_eq!(game.current_player(), PlayerId::White);
        // 先手の一手しかなければ戻せない
        assert!(!game.undo_turn());
        assert_eq!(game.board().history().len(), 1);
    }

    #[test]
    fn test_rejects_swapped_player_ids() {
        let cfg: GameConfig = serde_json::from_str(
            r#"{"board_size": 9, "black": {"id": "White", "name": "B", "color": [0, 0, 0]}}"#,
        )
        .unwrap();
        assert!(matches!(
            Game::new(cfg),
            Err(GameError::PlayerMismatch {
                slot: PlayerId::Black,
                found: PlayerId::White
            })
        ));

        let cfg = GameConfig {
            white: Player::black(),
            ..config(9)
        };
        assert!(matches!(
            Game::new(cfg),
            Err(GameError::PlayerMismatch {
                slot: PlayerId::White,
                found: PlayerId::Black
            })
        ));
    }

    #[test]
    fn test_computer_opens_at_centre() {
        for seed in 0..10 {
            let cfg = GameConfig {
                human: PlayerId::White,
                ai: AIConfig::seeded(seed),
                ..config(19)
            };
            let game = Game::new(cfg).unwrap();
            let opening = game.board().last_move().unwrap();
            assert_eq!(opening.position, Position::new(9, 9));
            assert_eq!(opening.player.id, PlayerId::Black);
        }
    }

    #[test]
    fn test_full_board_is_a_draw() {
        let mut game = Game::new(config(5)).unwrap();
        let players = [Player::black(), Player::white()];
        // 五目ができない敷き詰めを (4,4) の黒だけ残して作る
        let mut board = Board::new(5).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                if (x, y) != (4, 4) {
                    let p = &players[(x + 2 * y) / 2 % 2];
                    board.place(p, Position::new(x, y)).unwrap();
                }
            }
        }
        game.board = board;

        let turn = game.play(Position::new(4, 4)).unwrap();
        assert_eq!(turn.outcome, Outcome::NoWinner);
        assert_eq!(turn.reply, None);
        assert_eq!(*game.status(), Status::Drawn);
        assert_eq!(game.play(Position::new(0, 0)), Err(GameError::GameOver));
        assert_eq!(game.tally(), WinTally::default());
        assert!(!game.undo_turn());
        assert!(game.enter_replay().is_ok());
    }

    #[test]
    fn test_replay_only_after_game_over() {
        let mut game = Game::new(config(19)).unwrap();
        assert!(matches!(game.enter_replay(), Err(GameError::NotFinished)));
        game.play(Position::new(9, 9)).unwrap();
        assert!(game.replay().is_none());
    }
}
