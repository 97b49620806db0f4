use tracing::debug;

use crate::core::{Board, Direction, MoveError, MoveResponse, Vec2};

impl Board {
    /// Moves the player one step by `(dx, dy)`, pushing a box if one is in the way.
    ///
    /// Only the four orthogonal unit steps are accepted. Blocked moves report
    /// [`MoveResponse::InvalidWall`] or [`MoveResponse::InvalidBox`] and change
    /// nothing.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> Result<MoveResponse, MoveError> {
        let dir = Vec2::new(dx, dy);
        if !dir.is_unit_step() {
            return Err(MoveError::NonUnitDirection { dx, dy });
        }
        let player = self.player.ok_or(MoveError::NoPlayer)?;

        let dest = player + dir;
        let response = if self.is_empty(dest) {
            self.player = Some(dest);
            MoveResponse::Valid
        } else if self.boxes.contains(&dest) {
            let beyond = dest + dir;
            if self.is_empty(beyond) {
                self.boxes.remove(&dest);
                self.boxes.insert(beyond);
                self.player = Some(dest);
                MoveResponse::Valid
            } else {
                MoveResponse::InvalidBox
            }
        } else {
            // neither empty nor a box, so a wall
            MoveResponse::InvalidWall
        };

        debug!(from = %player, to = %dest, ?response, "move");
        Ok(response)
    }

    pub fn step(&mut self, direction: Direction) -> Result<MoveResponse, MoveError> {
        let delta = direction.delta();
        self.try_move(delta.x, delta.y)
    }

    /// A coordinate is empty when it holds neither a wall nor a box. Goals and
    /// the player do not count.
    pub fn is_empty(&self, pos: Vec2) -> bool {
        !self.walls.contains(&pos) && !self.boxes.contains(&pos)
    }
}
