use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Rows and columns must both be positive")]
    InvalidDimensions,
    #[error("Mine count must stay below the cell count")]
    InvalidMineCount,
    #[error("Coordinates outside the board")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
