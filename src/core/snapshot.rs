use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{Board, Vec2};

/// Serializable view of a board, used for the `json` output mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    pub walls: Vec<Vec2>,
    pub goals: Vec<Vec2>,
    pub boxes: Vec<Vec2>,
    pub player: Option<Vec2>,
    pub complete: bool,
    pub rows: Vec<String>,
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width,
            height: self.height,
            walls: sorted(&self.walls),
            goals: sorted(&self.goals),
            boxes: sorted(&self.boxes),
            player: self.player,
            complete: self.is_level_complete(),
            rows: self.rows(),
        }
    }
}

fn sorted(set: &HashSet<Vec2>) -> Vec<Vec2> {
    let mut positions: Vec<Vec2> = set.iter().copied().collect();
    positions.sort_unstable_by_key(|p| (p.y, p.x));
    positions
}

pub fn snapshot_to_json(board: &Board) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&board.snapshot())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn snapshot_lists_positions_in_reading_order() {
        let board = Board::from_text("#####\n#@$.#\n#####");
        let snapshot = board.snapshot();

        assert_eq!(snapshot.width, 5);
        assert_eq!(snapshot.height, 3);
        assert_eq!(snapshot.boxes, vec![Vec2::new(2, 1)]);
        assert_eq!(snapshot.goals, vec![Vec2::new(3, 1)]);
        assert_eq!(snapshot.player, Some(Vec2::new(1, 1)));
        assert_eq!(snapshot.walls.len(), 12);
        assert_eq!(snapshot.walls[0], Vec2::new(0, 0));
        assert_eq!(snapshot.walls[5], Vec2::new(0, 1));
        assert!(!snapshot.complete);
        assert_eq!(snapshot.rows, vec!["#####", "#@$.#", "#####"]);
    }

    #[test]
    fn json_export_reads_back() {
        let mut board = Board::from_text("#####\n#@$.#\n#####");
        board.try_move(1, 0).unwrap();

        let json = snapshot_to_json(&board).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["complete"], serde_json::Value::Bool(true));
        assert_eq!(value["player"]["x"], 2);

        let parsed: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board.snapshot());
    }
}
