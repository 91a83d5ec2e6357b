use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size rectangular array of cells with bounds-checked neighbor queries.
///
/// Dimensions never change after construction, only cell contents do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// A grid of `(rows, cols)` empty cells.
    pub fn new(size: Coord2) -> Result<Self> {
        let (rows, cols) = size;
        if rows < 1 || cols < 1 {
            return Err(GameError::EmptyGrid);
        }
        Ok(Self {
            cells: Array2::from_elem(size.to_nd_index(), Cell::default()),
        })
    }

    /// A grid with mines at exactly `mine_coords`, everything else empty.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(size)?;
        for &coords in mine_coords {
            if !grid.in_bounds(coords) {
                return Err(GameError::InvalidCoords);
            }
            grid[coords].kind = CellKind::Mine;
        }
        Ok(grid)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn in_bounds(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        (0..rows).contains(&row) && (0..cols).contains(&col)
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        if self.in_bounds(coords) {
            Some(&self.cells[coords.to_nd_index()])
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        if self.in_bounds(coords) {
            Some(&mut self.cells[coords.to_nd_index()])
        } else {
            None
        }
    }

    /// The up-to-8 adjacent positions, empty when `coords` is itself outside.
    pub fn neighbors8(&self, coords: Coord2) -> Neighbors {
        self.neighbors_by(coords, &DISPLACEMENTS_8)
    }

    /// The up-to-4 orthogonal positions, empty when `coords` is itself outside.
    pub fn neighbors4(&self, coords: Coord2) -> Neighbors {
        self.neighbors_by(coords, &DISPLACEMENTS_4)
    }

    fn neighbors_by(&self, coords: Coord2, displacements: &[Coord2]) -> Neighbors {
        if !self.in_bounds(coords) {
            return Neighbors::new();
        }
        let bounds = self.size();
        displacements
            .iter()
            .filter_map(|&delta| apply_delta(coords, delta, bounds))
            .collect()
    }

    /// Number of 8-neighbors of `coords` satisfying `predicate`.
    pub fn count_matching(&self, coords: Coord2, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.neighbors8(coords)
            .into_iter()
            .filter(|&pos| predicate(&self[pos]))
            .count() as CellCount
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> CellCount {
        self.count_matching(coords, |cell| cell.is_mine())
    }

    pub fn adjacent_flags(&self, coords: Coord2) -> CellCount {
        self.count_matching(coords, |cell| cell.flagged)
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mine()).count() as CellCount
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub(crate) fn reset_cells(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        assert!(self.in_bounds(coords), "{coords:?} outside grid");
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        assert!(self.in_bounds(coords), "{coords:?} outside grid");
        &mut self.cells[coords.to_nd_index()]
    }
}
