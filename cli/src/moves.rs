use core::fmt;
use core::str::FromStr;
use minesweeper_core::{Coord, Point};
use thiserror::Error;

/// One scripted player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    /// `x,y`
    Uncover(Point),
    /// `f:x,y`
    Flag(Point),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("expected `x,y` or `f:x,y`, got {0:?}")]
    Malformed(String),
    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),
}

impl Move {
    pub fn point(self) -> Point {
        match self {
            Self::Uncover(point) | Self::Flag(point) => point,
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (is_flag, coords) = match s.strip_prefix("f:") {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (x, y) = coords
            .split_once(',')
            .ok_or_else(|| ParseMoveError::Malformed(s.to_owned()))?;
        let point = Point::new(parse_coord(x)?, parse_coord(y)?);

        Ok(if is_flag {
            Self::Flag(point)
        } else {
            Self::Uncover(point)
        })
    }
}

fn parse_coord(text: &str) -> Result<Coord, ParseMoveError> {
    text.trim()
        .parse()
        .map_err(|_| ParseMoveError::InvalidCoordinate(text.to_owned()))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncover(Point { x, y }) => write!(f, "{x},{y}"),
            Self::Flag(Point { x, y }) => write!(f, "f:{x},{y}"),
        }
    }
}
