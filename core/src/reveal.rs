use alloc::vec::Vec;

use crate::*;

impl Game {
    /// Reveals a single cell, cascading through cells whose adjacent mines are
    /// all accounted for by flags. Revealing an already revealed cell chords.
    pub fn reveal_cell(&mut self, coords: Coord2) -> PlayerMoveResult {
        use PlayerMoveResult::*;

        let Some(cell) = self.grid.get(coords).copied() else {
            return OutOfBounds;
        };
        if self.state.is_over() || cell.flagged {
            return Rejected;
        }

        if cell.is_mine() {
            self.grid[coords].revealed = true;
            self.end_lost(coords);
            return Loss;
        }

        log::debug!("Reveal at {:?}", coords);
        if cell.revealed {
            return self.reveal_chord(coords);
        }

        self.expand(coords);
        self.check_won();
        Success
    }

    /// Clears the neighbors of a revealed cell once as many of them are flagged
    /// as there are adjacent mines. Unflagged mines are never detonated here.
    pub fn reveal_chord(&mut self, coords: Coord2) -> PlayerMoveResult {
        use PlayerMoveResult::*;

        let Some(cell) = self.grid.get(coords).copied() else {
            return OutOfBounds;
        };
        if self.state.is_over() || !cell.revealed {
            return Rejected;
        }

        if !self.is_satisfied(coords) {
            log::trace!("Chord at {:?} skipped, flags do not match mines", coords);
            return Success;
        }

        for neighbor in self.grid.neighbors8(coords) {
            self.expand(neighbor);
        }
        self.check_won();
        Success
    }

    /// Flood expansion from `start`, 4-connected, halting on cells that touch an
    /// unaccounted mine. Each cell is revealed at most once, which bounds the
    /// work by the grid size.
    pub(crate) fn expand(&mut self, start: Coord2) {
        let mut pending: Vec<Coord2> = Vec::from([start]);

        while let Some(coords) = pending.pop() {
            let Some(cell) = self.grid.get_mut(coords) else {
                continue;
            };
            if cell.is_mine() || cell.revealed || cell.flagged {
                continue;
            }

            cell.revealed = true;
            self.revealed_count += 1;

            if !self.is_satisfied(coords) {
                log::trace!("Expanded to boundary cell {:?}", coords);
                continue;
            }

            log::trace!("Expanded through {:?}", coords);
            pending.extend(self.grid.neighbors4(coords));
        }
    }

    fn is_satisfied(&self, coords: Coord2) -> bool {
        self.grid.adjacent_flags(coords) == self.grid.adjacent_mines(coords)
    }
}
