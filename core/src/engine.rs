use serde::{Deserialize, Serialize};

use crate::*;

/// One game from first reveal to win or loss, restartable on the same layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) grid: Grid,
    pub(crate) mine_count: CellCount,
    pub(crate) flagged_count: CellCount,
    /// Safe cells revealed so far; a detonated mine is tracked in `triggered_mine`.
    pub(crate) revealed_count: CellCount,
    pub(crate) first_move: bool,
    pub(crate) state: GameState,
    pub(crate) triggered_mine: Option<Coord2>,
}

impl Game {
    /// Generates a random layout from `config`, reproducible through `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let config = GameConfig::new(config.size, config.bomb_likelihood)?;
        Self::from_generator(
            config.size,
            BernoulliGenerator::new(seed, config.bomb_likelihood),
        )
    }

    pub fn from_generator(size: Coord2, generator: impl LayoutGenerator) -> Result<Self> {
        Ok(Self::from_grid(generator.generate(size)?))
    }

    /// Starts a game on `grid`'s layout, discarding any revealed or flagged bits.
    pub fn from_grid(mut grid: Grid) -> Self {
        grid.reset_cells();
        let mine_count = grid.mine_count();
        Self {
            grid,
            mine_count,
            flagged_count: 0,
            revealed_count: 0,
            first_move: true,
            state: GameState::Active,
            triggered_mine: None,
        }
    }

    /// Clears every flag and reveal and re-arms first-move safety, keeping the layout.
    pub fn restart(&mut self) {
        self.grid.reset_cells();
        self.flagged_count = 0;
        self.revealed_count = 0;
        self.first_move = true;
        self.state = GameState::Active;
        self.triggered_mine = None;
        log::debug!("Restarted game with {} mines", self.mine_count);
    }

    /// Player reveal: the first one in a game can never hit a mine.
    pub fn reveal(&mut self, coords: Coord2) -> PlayerMoveResult {
        if self.first_move {
            self.first_move = false;
            self.defuse(coords);
        }
        self.reveal_cell(coords)
    }

    fn defuse(&mut self, coords: Coord2) {
        if let Some(cell) = self.grid.get_mut(coords) {
            if cell.is_mine() {
                cell.kind = CellKind::Empty;
                self.mine_count -= 1;
                log::debug!("First move at {:?} was a mine, cleared it", coords);
            }
        }
    }

    pub(crate) fn check_won(&mut self) {
        if !self.state.is_over() && self.is_won() {
            self.state = GameState::Over;
            log::debug!("Won with {} cells revealed", self.revealed_count);
        }
    }

    pub(crate) fn end_lost(&mut self, coords: Coord2) {
        self.triggered_mine = Some(coords);
        self.state = GameState::Over;
        log::debug!("Lost on mine at {:?}", coords);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.grid.get(coords).copied()
    }

    pub fn kind_at(&self, coords: Coord2) -> Option<CellKind> {
        self.cell(coords).map(|cell| cell.kind)
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.cell(coords).is_some_and(|cell| cell.revealed)
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.cell(coords).is_some_and(|cell| cell.flagged)
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> CellCount {
        self.grid.adjacent_mines(coords)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Every safe cell revealed, regardless of where flags are.
    pub fn is_won(&self) -> bool {
        self.triggered_mine.is_none()
            && self.revealed_count == self.grid.total_cells() - self.mine_count
    }

    pub fn is_lost(&self) -> bool {
        self.triggered_mine.is_some()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Hint counter, not a guarantee: flags on safe cells count too.
    pub fn mines_remaining(&self) -> CellCount {
        self.mine_count.saturating_sub(self.flagged_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlayerMoveResult::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::from_generator(size, FixedLayout::new(mines)).unwrap()
    }

    #[test]
    fn new_rejects_degenerate_config() {
        let config = GameConfig::new_unchecked((0, 4), 0.1);

        assert_eq!(Game::new(config, 1), Err(GameError::EmptyGrid));
    }

    #[test]
    fn new_counts_generated_mines() {
        let game = Game::new(GameConfig::new((10, 10), 0.5).unwrap(), 3).unwrap();

        assert_eq!(game.mine_count(), game.grid().mine_count());
        assert_eq!(game.state(), GameState::Active);
        assert!(game.is_first_move());
    }

    #[test]
    fn first_reveal_never_hits_mine() {
        let mut game = game((2, 2), &[(0, 0), (1, 1)]);

        assert_eq!(game.reveal((0, 0)), Success);
        assert_eq!(game.kind_at((0, 0)), Some(CellKind::Empty));
        assert_eq!(game.mine_count(), 1);
        assert!(!game.is_first_move());

        assert_eq!(game.reveal((1, 1)), Loss);
        assert!(game.is_lost());
    }

    #[test]
    fn first_move_is_spent_by_out_of_bounds_reveal() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(game.reveal((5, 5)), OutOfBounds);
        assert!(!game.is_first_move());
        assert_eq!(game.reveal((0, 0)), Loss);
    }

    #[test]
    fn loss_ends_game_and_blocks_moves() {
        let mut game = game((1, 3), &[(0, 1)]);

        assert_eq!(game.reveal_cell((0, 1)), Loss);
        assert_eq!(game.state(), GameState::Over);
        assert_eq!(game.triggered_mine(), Some((0, 1)));
        assert!(game.is_revealed((0, 1)));
        assert!(!game.is_won());

        assert_eq!(game.reveal_cell((0, 0)), Rejected);
        assert_eq!(game.set_flag((0, 2), true), Rejected);
        assert_eq!(game.revealed_count(), 0);
    }

    #[test]
    fn win_requires_every_safe_cell_not_flags() {
        let mut game = game((1, 3), &[(0, 1)]);

        assert_eq!(game.set_flag((0, 1), true), Success);
        assert!(!game.is_won());

        assert_eq!(game.reveal((0, 0)), Success);
        assert_eq!(game.state(), GameState::Active);
        assert_eq!(game.reveal((0, 2)), Success);
        assert!(game.is_won());
        assert_eq!(game.state(), GameState::Over);
    }

    #[test]
    fn restart_keeps_layout_and_resets_progress() {
        let mut game = game((2, 2), &[(1, 1)]);
        game.reveal((0, 0));
        game.set_flag((1, 1), true);
        game.reveal((1, 0));
        game.reveal((0, 1));
        assert!(game.is_won());

        game.restart();

        assert_eq!(game.state(), GameState::Active);
        assert_eq!(game.revealed_count(), 0);
        assert_eq!(game.flagged_count(), 0);
        assert_eq!(game.mine_count(), 1);
        assert!(game.is_first_move());
        assert!(!game.is_flagged((1, 1)));
        assert_eq!(game.kind_at((1, 1)), Some(CellKind::Mine));
        assert!(game.grid().positions().all(|pos| !game.is_revealed(pos)));
    }

    #[test]
    fn restart_after_loss_clears_triggered_mine() {
        let mut game = game((1, 3), &[(0, 1)]);
        assert_eq!(game.reveal((0, 0)), Success);
        assert_eq!(game.state(), GameState::Active);
        assert_eq!(game.reveal((0, 1)), Loss);

        game.restart();

        assert_eq!(game.triggered_mine(), None);
        assert!(!game.is_lost());
        assert_eq!(game.reveal((0, 0)), Success);
    }

    #[test]
    fn mines_remaining_clamps_at_zero() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(game.mines_remaining(), 1);
        game.set_flag((0, 1), true);
        game.set_flag((1, 0), true);
        assert_eq!(game.flagged_count(), 2);
        assert_eq!(game.mines_remaining(), 0);
    }

    #[test]
    fn serializes_progress() {
        let mut game = game((2, 2), &[(1, 1)]);
        game.set_flag((1, 1), true);

        let json = serde_json::to_value(&game).unwrap();

        assert_eq!(json["flagged_count"], 1);
        assert_eq!(json["state"], "Active");
        assert_eq!(json["first_move"], true);
    }
}
