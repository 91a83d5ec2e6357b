#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod flag;
mod generator;
mod grid;
mod reveal;
mod types;

/// Parameters for a freshly generated game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub bomb_likelihood: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, bomb_likelihood: f64) -> Self {
        Self {
            size,
            bomb_likelihood,
        }
    }

    pub fn new(size: Coord2, bomb_likelihood: f64) -> Result<Self> {
        if size.0 < 1 || size.1 < 1 {
            return Err(GameError::EmptyGrid);
        }
        if !(0.0..=1.0).contains(&bomb_likelihood) {
            return Err(GameError::InvalidLikelihood);
        }
        Ok(Self::new_unchecked(size, bomb_likelihood))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Answer to a single player move.
///
/// Illegal and no-op moves are ordinary results, never errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMoveResult {
    Success,
    Rejected,
    Loss,
    OutOfBounds,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Active,
    Over,
}

impl GameState {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validates_size_and_likelihood() {
        assert!(GameConfig::new((8, 8), 0.12).is_ok());
        assert_eq!(GameConfig::new((0, 8), 0.12), Err(GameError::EmptyGrid));
        assert_eq!(
            GameConfig::new((8, 8), -0.1),
            Err(GameError::InvalidLikelihood)
        );
        assert_eq!(GameConfig::new((3, 4), 0.5).unwrap().total_cells(), 12);
    }
}
