use thiserror::Error;

use crate::{CellCount, Coord, Point};

/// Why a [`GameConfig`](crate::GameConfig) was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least {min}x{min}")]
    TooSmall { min: Coord },
    #[error("board needs at least one mine")]
    TooFewMines,
    #[error("at most {max} mines fit on this board")]
    TooManyMines { max: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Coordinates {point} are outside the {width}x{height} board")]
    IndexOutOfBounds {
        point: Point,
        width: Coord,
        height: Coord,
    },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
