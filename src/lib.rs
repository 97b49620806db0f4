//! Sokoban rules engine with a terminal front end.
//!
//! [`core`] holds the board, the level parser and the move rules. The other
//! modules drive a board from the terminal.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod level_file;
pub mod logging;
pub mod models;
pub mod session;

#[cfg(test)]
mod test;
