use serde::{Deserialize, Serialize};

/// What is buried under a tile. Fixed when the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileContent {
    Mine,
    Empty,
}

/// Player-driven visibility of a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Hidden,
    Flagged,
    QuestionMark,
    Exposed,
    /// The mine that ended the game.
    ExposedMine,
}

impl TileState {
    pub const fn is_exposed(self) -> bool {
        matches!(self, Self::Exposed | Self::ExposedMine)
    }

    /// Flagged and question-marked tiles cannot be uncovered directly.
    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Flagged | Self::QuestionMark)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub state: TileState,
    pub content: TileContent,
}

impl Tile {
    pub const MINE: Tile = Tile::hidden(TileContent::Mine);
    pub const EMPTY: Tile = Tile::hidden(TileContent::Empty);

    pub const fn hidden(content: TileContent) -> Self {
        Self {
            state: TileState::Hidden,
            content,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.content, TileContent::Mine)
    }
}
