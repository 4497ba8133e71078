use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// How a tile presents itself to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileDescription {
    Covered,
    UncoveredEmpty,
    /// The mine that ended the game.
    UncoveredMine,
    Mine,
    Uncovered(u8),
    Flag,
    QuestionMark,
}

impl TileDescription {
    /// `is_pressed` is true while the player holds a hidden tile down.
    pub const fn new(tile: Tile, mine_count: u8, is_pressed: bool) -> Self {
        use TileDescription::*;

        match (tile.state, tile.content) {
            (TileState::Hidden, _) if is_pressed => UncoveredEmpty,
            (TileState::Hidden, _) => Covered,
            (TileState::Exposed, TileContent::Mine) => Mine,
            (TileState::Exposed, TileContent::Empty) if mine_count == 0 => UncoveredEmpty,
            (TileState::Exposed, TileContent::Empty) => Uncovered(mine_count),
            (TileState::ExposedMine, TileContent::Mine) => UncoveredMine,
            (TileState::ExposedMine, TileContent::Empty) => UncoveredEmpty,
            (TileState::Flagged, _) => Flag,
            (TileState::QuestionMark, _) => QuestionMark,
        }
    }

    /// Accessibility text.
    pub fn label(self) -> String {
        format!("{self}")
    }

    /// Name of the sprite that draws this tile.
    pub fn image_name(self) -> Cow<'static, str> {
        use TileDescription::*;

        match self {
            Covered => "Covered".into(),
            UncoveredEmpty => "Uncovered".into(),
            Uncovered(count) => format!("{count}").into(),
            UncoveredMine => "MineClicked".into(),
            Mine => "Mine".into(),
            Flag => "Flag".into(),
            QuestionMark => "QuestionMark".into(),
        }
    }

    /// Single character used by text dumps of a board.
    pub const fn glyph(self) -> char {
        use TileDescription::*;

        match self {
            Covered => '#',
            UncoveredEmpty => '.',
            Uncovered(count) => match char::from_digit(count as u32, 10) {
                Some(digit) => digit,
                None => '?',
            },
            UncoveredMine => 'X',
            Mine => '*',
            Flag => 'F',
            QuestionMark => '?',
        }
    }
}

impl fmt::Display for TileDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TileDescription::*;

        match self {
            Covered => f.write_str("Covered"),
            UncoveredEmpty => f.write_str("Empty"),
            UncoveredMine | Mine => f.write_str("Mine"),
            Uncovered(count) => write!(f, "{count} mines nearby"),
            Flag => f.write_str("Flag"),
            QuestionMark => f.write_str("Question mark"),
        }
    }
}

impl Grid<Tile> {
    pub fn describe(&self, point: Point) -> Result<TileDescription> {
        let tile = *self.get(point)?;
        Ok(TileDescription::new(tile, self.adjacent_mines(point), false))
    }

    /// Descriptions of every tile in row-major order.
    pub fn descriptions(&self) -> Vec<TileDescription> {
        self.map(|point, &tile| TileDescription::new(tile, self.adjacent_mines(point), false))
    }

    /// Stable identifier of a tile for accessibility and UI automation.
    pub fn tile_identifier(&self, point: Point) -> Result<String> {
        let point = self.validate(point)?;
        Ok(format!("Tile {point}"))
    }
}

impl fmt::Display for Grid<Tile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.width());
        for (index, description) in self.descriptions().into_iter().enumerate() {
            write!(f, "{}", description.glyph())?;
            if (index + 1) % width == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
