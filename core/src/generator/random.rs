use super::*;

/// Per-cell Bernoulli placement: every cell independently becomes a mine when a
/// uniform draw from `[0, 1)` is at most `bomb_likelihood`.
///
/// The resulting mine count only approximates `rows * cols * bomb_likelihood`.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliGenerator {
    seed: u64,
    bomb_likelihood: f64,
}

impl BernoulliGenerator {
    pub fn new(seed: u64, bomb_likelihood: f64) -> Self {
        Self {
            seed,
            bomb_likelihood,
        }
    }
}

impl LayoutGenerator for BernoulliGenerator {
    fn generate(self, size: Coord2) -> Result<Grid> {
        use rand::prelude::*;

        if !(0.0..=1.0).contains(&self.bomb_likelihood) {
            return Err(GameError::InvalidLikelihood);
        }

        let mut grid = Grid::new(size)?;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: CellCount = 0;

        for coords in grid.positions() {
            if rng.random::<f64>() <= self.bomb_likelihood {
                grid[coords].kind = CellKind::Mine;
                mines += 1;
            }
        }

        log::debug!(
            "Generated {:?} grid with {} mines (seed {}, likelihood {})",
            size,
            mines,
            self.seed,
            self.bomb_likelihood
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let a = BernoulliGenerator::new(7, 0.3).generate((10, 10)).unwrap();
        let b = BernoulliGenerator::new(7, 0.3).generate((10, 10)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn zero_likelihood_is_practically_empty() {
        let grid = BernoulliGenerator::new(1, 0.0).generate((10, 10)).unwrap();

        assert_eq!(grid.mine_count(), 0);
    }

    #[test]
    fn full_likelihood_mines_everything() {
        let grid = BernoulliGenerator::new(1, 1.0).generate((4, 5)).unwrap();

        assert_eq!(grid.mine_count(), 20);
    }

    #[test]
    fn rejects_likelihood_outside_unit_interval() {
        assert_eq!(
            BernoulliGenerator::new(1, 1.5).generate((2, 2)),
            Err(GameError::InvalidLikelihood)
        );
        assert_eq!(
            BernoulliGenerator::new(1, f64::NAN).generate((2, 2)),
            Err(GameError::InvalidLikelihood)
        );
    }

    #[test]
    fn fixed_layout_places_given_mines() {
        let grid = FixedLayout::new(&[(0, 1)]).generate((1, 3)).unwrap();

        assert!(grid[(0, 1)].is_mine());
        assert_eq!(grid.mine_count(), 1);
    }
}
