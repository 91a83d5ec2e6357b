use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid needs at least one row and one column")]
    EmptyGrid,
    #[error("Bomb likelihood must be within [0, 1]")]
    InvalidLikelihood,
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
