use std::fmt;
use std::ops::Add;

use crate::core::{Direction, MoveResponse, Symbol, Vec2};

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Vec2 { x, y }
    }

    pub fn is_unit_step(&self) -> bool {
        matches!((self.x, self.y), (0, 1) | (0, -1) | (1, 0) | (-1, 0))
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

impl Symbol {
    /// Classifies a level-file character. Anything outside the vocabulary is floor.
    pub fn from_char(ch: char) -> Symbol {
        match ch {
            '#' => Symbol::Wall,
            '$' => Symbol::Box,
            '*' => Symbol::BoxOnGoal,
            '@' => Symbol::Player,
            '+' => Symbol::PlayerOnGoal,
            '.' => Symbol::Goal,
            _ => Symbol::Floor,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::Wall => '#',
            Symbol::Floor => '-',
            Symbol::Goal => '.',
            Symbol::Box => '$',
            Symbol::BoxOnGoal => '*',
            Symbol::Player => '@',
            Symbol::PlayerOnGoal => '+',
        }
    }
}

impl MoveResponse {
    pub fn is_valid(&self) -> bool {
        *self == MoveResponse::Valid
    }

    /// Player-facing text for the outcome.
    pub fn message(&self) -> &'static str {
        match self {
            MoveResponse::Valid => "valid",
            MoveResponse::InvalidWall => "can't push walls",
            MoveResponse::InvalidBox => "can't push this box",
        }
    }
}

impl fmt::Display for MoveResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
