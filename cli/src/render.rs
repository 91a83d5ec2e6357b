use std::fmt;

use bombs_core::{CellCount, Coord2, Game};
use crossterm::style::{StyledContent, Stylize};

/// What a single cell looks like to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Flag,
    Hidden,
    Mine,
    Blank,
    Number(CellCount),
}

impl Glyph {
    /// Flags always show, and once a won game is over every mine shows as one.
    /// Everything else stays hidden until revealed or the game is over.
    pub fn of(game: &Game, coords: Coord2) -> Self {
        let cell = game.grid()[coords];

        // An all-mine layout counts as won before any move, keep it hidden.
        if cell.flagged || (game.is_over() && game.is_won() && cell.is_mine()) {
            return Self::Flag;
        }
        if !game.is_over() && !cell.revealed {
            return Self::Hidden;
        }
        if cell.is_mine() {
            return Self::Mine;
        }
        match game.adjacent_mines(coords) {
            0 => Self::Blank,
            count => Self::Number(count),
        }
    }

    pub fn text(self) -> String {
        match self {
            Self::Flag => "F".to_string(),
            Self::Hidden => ".".to_string(),
            Self::Mine => "B".to_string(),
            Self::Blank => " ".to_string(),
            Self::Number(count) => count.to_string(),
        }
    }

    pub fn styled(self) -> StyledContent<String> {
        let text = self.text();
        match self {
            Self::Flag => text.bold().on_blue(),
            Self::Hidden => text.stylize(),
            Self::Mine => text.black().on_red().bold(),
            Self::Blank => text.on_white(),
            Self::Number(_) => text.black().on_yellow().bold(),
        }
    }
}

/// Grid printout with column header and row labels.
pub struct Board<'a> {
    game: &'a Game,
    color: bool,
}

impl<'a> Board<'a> {
    pub fn new(game: &'a Game, color: bool) -> Self {
        Self { game, color }
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.game.size();

        write!(f, "   ")?;
        for col in 0..cols {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{row}  ")?;
            for col in 0..cols {
                let glyph = Glyph::of(self.game, (row, col));
                if self.color {
                    write!(f, "{} ", glyph.styled())?;
                } else {
                    write!(f, "{} ", glyph.text())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
