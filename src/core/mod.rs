mod board;
mod error;
mod model_helpers;
mod models;
mod parse;
mod snapshot;
mod update;

pub use error::MoveError;
pub use models::{Board, Direction, MoveResponse, Symbol, UserAction, Vec2};
pub use snapshot::{BoardSnapshot, snapshot_to_json};
