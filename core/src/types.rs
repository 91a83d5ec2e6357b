use smallvec::SmallVec;

/// Single coordinate axis, used for row/column positions and grid dimensions.
///
/// Signed so that positions typed in by a player (including negative ones) can
/// be answered with an out-of-bounds result instead of failing to parse.
pub type Coord = i32;

/// Count type used for mine, flag and revealed-cell counters.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Up to eight in-bounds neighbor positions.
pub type Neighbors = SmallVec<[Coord2; 8]>;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Only meaningful for coordinates already checked against the grid bounds.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = if a < 0 { 0 } else { a as CellCount };
    let b = if b < 0 { 0 } else { b as CellCount };
    a.saturating_mul(b)
}

pub(crate) const DISPLACEMENTS_8: [Coord2; 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DISPLACEMENTS_4: [Coord2; 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: Coord2, bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add(dr)?;
    if next_row < 0 || next_row >= rows {
        return None;
    }

    let next_col = col.checked_add(dc)?;
    if next_col < 0 || next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}
