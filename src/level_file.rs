use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::core::Board;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a level file into rows. Line endings are left to the parser, which
/// strips them along with any other trailing whitespace.
pub fn read_level_rows(path: impl AsRef<Path>) -> Result<Vec<String>, LevelError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<String> = contents.lines().map(str::to_owned).collect();
    info!(path = %path.display(), rows = rows.len(), "loaded level file");
    Ok(rows)
}

pub fn load_board(path: impl AsRef<Path>) -> Result<Board, LevelError> {
    Ok(Board::build_from_rows(read_level_rows(path)?))
}
