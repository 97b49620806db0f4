use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Display symbol for a single board coordinate.
///
/// The character mapping is the one used by `.xsb` level files, so a board
/// rendered with [`Symbol::to_char`] can be parsed back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Wall,
    Floor,
    Goal,
    Box,
    BoxOnGoal,
    Player,
    PlayerOnGoal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Restart,
}

/// Outcome of a move attempt. Invalid outcomes are ordinary game events and
/// leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResponse {
    Valid,
    InvalidWall,
    InvalidBox,
}

/// A Sokoban board stored as sparse coordinate sets.
///
/// Walls, goals and dimensions are fixed once parsed. Only the box set and the
/// player position change, and only through a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) walls: HashSet<Vec2>,
    pub(crate) goals: HashSet<Vec2>,
    pub(crate) boxes: HashSet<Vec2>,
    pub(crate) player: Option<Vec2>,
    pub(crate) width: i32,
    pub(crate) height: i32,
}
