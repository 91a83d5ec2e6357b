use crate::*;
pub use random::*;

mod random;

/// Produces the mine layout of a fresh grid.
pub trait LayoutGenerator {
    fn generate(self, size: Coord2) -> Result<Grid>;
}

/// Uses a layout that was decided up front, mostly useful for tests and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedLayout<'a> {
    mines: &'a [Coord2],
}

impl<'a> FixedLayout<'a> {
    pub fn new(mines: &'a [Coord2]) -> Self {
        Self { mines }
    }
}

impl LayoutGenerator for FixedLayout<'_> {
    fn generate(self, size: Coord2) -> Result<Grid> {
        Grid::from_mine_coords(size, self.mines)
    }
}
