#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use description::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod description;
mod engine;
mod error;
mod generator;
mod grid;
mod session;
mod tile;
mod types;

/// Size and difficulty of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// Smallest allowed width and height.
    pub const MIN_SIDE: Coord = 3;

    pub const BEGINNER: Self = Self::new_unchecked(9, 9, 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked(16, 16, 40);
    pub const EXPERT: Self = Self::new_unchecked(30, 16, 99);
    pub const DEFAULT: Self = Self::BEGINNER;

    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// A user-chosen board, rejected unless it is at least 3x3 with `1..width*height` mines.
    pub fn custom(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < Self::MIN_SIDE || self.height < Self::MIN_SIDE {
            return Err(ConfigError::TooSmall {
                min: Self::MIN_SIDE,
            }
            .into());
        }
        if self.mines < 1 {
            return Err(ConfigError::TooFewMines.into());
        }
        if self.mines >= self.total_tiles() {
            return Err(ConfigError::TooManyMines {
                max: self.total_tiles() - 1,
            }
            .into());
        }
        Ok(())
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn empty_tiles(&self) -> CellCount {
        self.total_tiles().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Derived status of a game, recomputed from the board after every move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of uncovering a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOutcome {
    /// Tiles uncovered at once: the size of a swept zero region, `1` for the
    /// mine that ended the game, `0` otherwise.
    pub tiles_revealed: CellCount,
    pub outcome: GameOutcome,
}

impl SelectOutcome {
    pub const fn no_change(outcome: GameOutcome) -> Self {
        Self {
            tiles_revealed: 0,
            outcome,
        }
    }

    /// Whether the move revealed enough tiles to be worth announcing.
    pub const fn should_announce(&self) -> bool {
        self.tiles_revealed > 1
    }
}

/// Outcome of cycling a tile's marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed(TileState),
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed(_))
    }
}
