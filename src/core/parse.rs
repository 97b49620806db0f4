use std::collections::HashSet;

use tracing::warn;

use crate::core::{Board, Symbol, Vec2};

impl Board {
    /// Builds a board from level rows, one row per line of the level file.
    ///
    /// Trailing whitespace (including `\r` and `\n`) is stripped from every row
    /// before columns are counted. The width is the stripped length of the
    /// first row and the height is the number of rows. Ragged rows are read as
    /// far as they go and unknown characters are floor, so parsing never fails.
    /// A level without a player symbol is accepted, but moves on it are rejected.
    pub fn build_from_rows<I, S>(rows: I) -> Board
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut walls = HashSet::new();
        let mut goals = HashSet::new();
        let mut boxes = HashSet::new();
        let mut player = None;
        let mut width = 0;
        let mut height = 0;

        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref().trim_end();
            if y == 0 {
                width = row.chars().count() as i32;
            }
            height += 1;

            for (x, ch) in row.chars().enumerate() {
                let pos = Vec2::new(x as i32, y as i32);
                match Symbol::from_char(ch) {
                    Symbol::Wall => {
                        walls.insert(pos);
                    }
                    Symbol::Box => {
                        boxes.insert(pos);
                    }
                    Symbol::BoxOnGoal => {
                        boxes.insert(pos);
                        goals.insert(pos);
                    }
                    Symbol::Player => {
                        set_player(&mut player, pos);
                    }
                    Symbol::PlayerOnGoal => {
                        set_player(&mut player, pos);
                        goals.insert(pos);
                    }
                    Symbol::Goal => {
                        goals.insert(pos);
                    }
                    Symbol::Floor => {}
                }
            }
        }

        Board {
            walls,
            goals,
            boxes,
            player,
            width,
            height,
        }
    }

    /// Builds a board from a whole level file's contents.
    pub fn from_text(text: &str) -> Board {
        Board::build_from_rows(text.lines())
    }
}

// The last player symbol in reading order wins.
fn set_player(player: &mut Option<Vec2>, pos: Vec2) {
    if let Some(previous) = player.replace(pos) {
        warn!(%previous, current = %pos, "level has more than one player symbol");
    }
}
