use thiserror::Error;

/// Precondition violations for a move request.
///
/// A move into a wall or a blocked box is not an error; see [`crate::core::MoveResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The level was parsed without a `@` or `+` symbol.
    #[error("the level has no player")]
    NoPlayer,

    #[error("move ({dx}, {dy}) is not a single orthogonal step")]
    NonUnitDirection { dx: i32, dy: i32 },
}
