use std::collections::HashSet;
use std::fmt;

use crate::core::{Board, Symbol, Vec2};

impl Board {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn player(&self) -> Option<Vec2> {
        self.player
    }

    pub fn walls(&self) -> &HashSet<Vec2> {
        &self.walls
    }

    pub fn goals(&self) -> &HashSet<Vec2> {
        &self.goals
    }

    pub fn boxes(&self) -> &HashSet<Vec2> {
        &self.boxes
    }

    /// Display symbol for `(x, y)`, derived from the current sets.
    ///
    /// Goals are checked first, so a box or the player standing on a goal is
    /// reported as the combined symbol rather than the plain one.
    pub fn symbol_at(&self, x: i32, y: i32) -> Symbol {
        let pos = Vec2::new(x, y);
        let has_player = self.player == Some(pos);

        if self.goals.contains(&pos) {
            if self.boxes.contains(&pos) {
                return Symbol::BoxOnGoal;
            }
            if has_player {
                return Symbol::PlayerOnGoal;
            }
            return Symbol::Goal;
        }
        if self.boxes.contains(&pos) {
            return Symbol::Box;
        }
        if has_player {
            return Symbol::Player;
        }
        if self.walls.contains(&pos) {
            return Symbol::Wall;
        }
        Symbol::Floor
    }

    /// True when every box sits on a goal. A level with no boxes is complete.
    pub fn is_level_complete(&self) -> bool {
        self.boxes.is_subset(&self.goals)
    }

    pub fn boxes_on_goals(&self) -> usize {
        self.boxes.intersection(&self.goals).count()
    }

    /// Rendered rows, one string per board row.
    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.symbol_at(x, y).to_char()).collect())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
