use crate::*;

impl Game {
    /// Sets or clears the flag on a hidden cell.
    ///
    /// Setting the value a cell already holds succeeds without touching the
    /// counter, so `flagged_count` always equals the number of flagged cells.
    pub fn set_flag(&mut self, coords: Coord2, value: bool) -> PlayerMoveResult {
        use PlayerMoveResult::*;

        let over = self.state.is_over();
        let Some(cell) = self.grid.get_mut(coords) else {
            return OutOfBounds;
        };
        if over || cell.revealed {
            return Rejected;
        }

        if cell.flagged != value {
            cell.flagged = value;
            if value {
                self.flagged_count += 1;
            } else {
                self.flagged_count -= 1;
            }
            log::debug!("Flag at {:?} set to {}", coords, value);
        }
        Success
    }
}
