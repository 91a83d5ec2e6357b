use std::io::{self, BufRead, Write};

use bombs_core::{Coord2, Game, PlayerMoveResult};

use crate::command::Command;
use crate::render::Board;

const HELP: &str = "\
H E L P:
(1.) Type \"flag i1 j1 i2 j2 ... in jn\" to flag the cell in the ith row (0-indexed) of the jth column (0-indexed) of the grid.
(2.) Type \"unflag i1 j1 i2 j2 ... in jn\" to unflag the cell in the ith row (0-indexed) of the jth column (0-indexed) of the grid.
(3.) Type \"reveal i1 j1 i2 j2 ... in jn\" to reveal the cell in the ith row (0-indexed) of the jth column (0-indexed) of the grid.
(4.) Type \"exit\" to exit the game.
(5.) Type \"restart\" to restart the game.
(6.) Type \"bombs_left?\" to query how many bombs haven't been flagged.
";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Drives one game from a line-oriented input to a text output.
pub struct Session {
    game: Game,
    color: bool,
}

impl Session {
    pub fn new(game: Game, color: bool) -> Self {
        Self { game, color }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self, mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "Welcome to B O M B S")?;
        self.print_board(&mut out)?;

        let mut line = String::new();
        while !self.game.is_over() {
            writeln!(out, "Please enter a command or \"help\" for a list of commands.")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::debug!("End of input");
                return Ok(());
            }
            if self.handle_line(&line, &mut out)? == Flow::Exit {
                return Ok(());
            }
        }

        if self.game.is_won() {
            writeln!(out, "You found every bomb, well done!")?;
        } else {
            writeln!(out, "B O O M! Game over.")?;
        }
        Ok(())
    }

    /// Parses and applies one input line, reprinting the board after an
    /// accepted command.
    pub fn handle_line(&mut self, line: &str, mut out: impl Write) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                log::debug!("Could not parse {:?}: {}", line.trim_end(), err);
                writeln!(out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        log::debug!("command: {:?}", command);
        let flow = self.apply(command, &mut out)?;
        if flow == Flow::Continue {
            self.print_board(&mut out)?;
        }
        Ok(flow)
    }

    pub fn apply(&mut self, command: Command, mut out: impl Write) -> io::Result<Flow> {
        match command {
            Command::Reveal(coords) => self.reveal(&coords, &mut out)?,
            Command::Flag(coords) => self.flag(&coords, true, &mut out)?,
            Command::Unflag(coords) => self.flag(&coords, false, &mut out)?,
            Command::Restart => self.game.restart(),
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => write!(out, "{HELP}")?,
            Command::BombsLeft => writeln!(
                out,
                "There are {} bombs left.",
                self.game.mines_remaining()
            )?,
        }
        Ok(Flow::Continue)
    }

    fn reveal(&mut self, coords: &[Coord2], mut out: impl Write) -> io::Result<()> {
        for &(row, col) in coords {
            match self.game.reveal((row, col)) {
                PlayerMoveResult::Success | PlayerMoveResult::Loss => {}
                PlayerMoveResult::Rejected => writeln!(
                    out,
                    "Failed revealing cell: [{row}, {col}], as you cannot reveal a flagged cell."
                )?,
                PlayerMoveResult::OutOfBounds => writeln!(
                    out,
                    "Failed revealing cell: [{row}, {col}], as it does not exist in the grid."
                )?,
            }
            if self.game.is_over() {
                break;
            }
        }
        Ok(())
    }

    fn flag(&mut self, coords: &[Coord2], value: bool, mut out: impl Write) -> io::Result<()> {
        let verb = if value { "flagging" } else { "unflagging" };
        for &(row, col) in coords {
            match self.game.set_flag((row, col), value) {
                PlayerMoveResult::Success | PlayerMoveResult::Loss => {}
                PlayerMoveResult::Rejected => writeln!(
                    out,
                    "Failed {verb} cell: [{row}, {col}], as the cell has already been revealed."
                )?,
                PlayerMoveResult::OutOfBounds => writeln!(
                    out,
                    "Failed {verb} cell: [{row}, {col}], as it does not exist in the grid."
                )?,
            }
        }
        Ok(())
    }

    fn print_board(&self, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "{}", Board::new(&self.game, self.color))
    }
}
