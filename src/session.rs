use tracing::info;

use crate::core::{Board, MoveError, MoveResponse, UserAction};

/// What the driver should show after an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Moved(MoveResponse),
    Won,
    Restarted,
    Idle,
}

/// Owns the level rows and the board built from them, so a restart can
/// rebuild the board from scratch.
pub struct GameSession {
    rows: Vec<String>,
    board: Board,
    won: bool,
}

impl GameSession {
    pub fn new(rows: Vec<String>) -> Self {
        let board = Board::build_from_rows(&rows);
        let won = false;
        GameSession { rows, board, won }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn apply(&mut self, action: UserAction) -> Result<SessionEvent, MoveError> {
        match action {
            UserAction::Restart => {
                self.restart();
                Ok(SessionEvent::Restarted)
            }
            UserAction::Move(_) if self.won => Ok(SessionEvent::Idle),
            UserAction::Move(direction) => {
                let response = self.board.step(direction)?;
                if response.is_valid() && self.board.is_level_complete() {
                    self.won = true;
                    info!("level complete");
                    return Ok(SessionEvent::Won);
                }
                Ok(SessionEvent::Moved(response))
            }
        }
    }

    pub fn restart(&mut self) {
        self.board = Board::build_from_rows(&self.rows);
        self.won = false;
        info!("level restarted");
    }
}
