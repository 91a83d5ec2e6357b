use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Mine,
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// A single grid cell: what it hides plus what the player has done to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub revealed: bool,
    pub flagged: bool,
}

impl Cell {
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Clears the player-visible bits, keeping the kind.
    pub fn reset(&mut self) {
        self.revealed = false;
        self.flagged = false;
    }
}
