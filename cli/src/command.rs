use bombs_core::{Coord, Coord2};
use thiserror::Error;

/// A parsed line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Vec<Coord2>),
    Flag(Vec<Coord2>),
    Unflag(Vec<Coord2>),
    Restart,
    Exit,
    Help,
    BombsLeft,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command \"{0}\"")]
    UnknownVerb(String),
    #[error("\"{0}\" expects one or more row and column pairs")]
    MissingCoords(&'static str),
    #[error("\"{0}\" is not a valid coordinate")]
    InvalidCoord(String),
}

impl Command {
    /// Tokenizes one input line, `Ok(None)` for a blank one.
    ///
    /// Words after a verb that takes no coordinates are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb {
            "reveal" => Self::Reveal(parse_coords("reveal", words)?),
            "flag" => Self::Flag(parse_coords("flag", words)?),
            "unflag" => Self::Unflag(parse_coords("unflag", words)?),
            "restart" => Self::Restart,
            "exit" => Self::Exit,
            "help" => Self::Help,
            "bombs_left?" | "bombs_left" => Self::BombsLeft,
            other => return Err(CommandError::UnknownVerb(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_coords<'a>(
    verb: &'static str,
    words: impl Iterator<Item = &'a str>,
) -> Result<Vec<Coord2>, CommandError> {
    let values = words
        .map(|word| {
            word.parse::<Coord>()
                .map_err(|_| CommandError::InvalidCoord(word.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() || values.len() % 2 != 0 {
        return Err(CommandError::MissingCoords(verb));
    }

    Ok(values.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pairs() {
        assert_eq!(
            Command::parse("reveal 1 2 3 4"),
            Ok(Some(Command::Reveal(vec![(1, 2), (3, 4)])))
        );
        assert_eq!(
            Command::parse("  flag 0 0 "),
            Ok(Some(Command::Flag(vec![(0, 0)])))
        );
        assert_eq!(
            Command::parse("unflag -1 7"),
            Ok(Some(Command::Unflag(vec![(-1, 7)])))
        );
    }

    #[test]
    fn parses_plain_verbs() {
        assert_eq!(Command::parse("restart"), Ok(Some(Command::Restart)));
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Exit)));
        assert_eq!(Command::parse("help me"), Ok(Some(Command::Help)));
        assert_eq!(Command::parse("bombs_left?"), Ok(Some(Command::BombsLeft)));
        assert_eq!(Command::parse("bombs_left"), Ok(Some(Command::BombsLeft)));
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse(" \t "), Ok(None));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            Command::parse("dig 1 1"),
            Err(CommandError::UnknownVerb("dig".to_string()))
        );
        assert_eq!(
            Command::parse("reveal"),
            Err(CommandError::MissingCoords("reveal"))
        );
        assert_eq!(
            Command::parse("flag 1 2 3"),
            Err(CommandError::MissingCoords("flag"))
        );
        assert_eq!(
            Command::parse("reveal 1 x"),
            Err(CommandError::InvalidCoord("x".to_string()))
        );
    }
}
