use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions must be positive")]
    InvalidDimensions,
    #[error("Malformed coordinate key")]
    InvalidCoordKey,
}

pub type Result<T> = core::result::Result<T, GameError>;
