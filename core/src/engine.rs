use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;

use crate::*;

/// Grid of Minesweeper tiles, mutated in place by the rules below.
pub type Board = Grid<Tile>;

impl Grid<Tile> {
    /// Board with mines exactly at `mines`, every tile hidden.
    pub fn from_mine_points(width: Coord, height: Coord, mines: &[Point]) -> Result<Self> {
        let mut board = Grid::new(width, height, Tile::EMPTY);
        for &point in mines {
            board.get_mut(point)?.content = TileContent::Mine;
        }
        Ok(board)
    }

    /// Number of mines around `point`.
    pub fn mine_count(&self, point: Point) -> Result<u8> {
        let point = self.validate(point)?;
        Ok(self.adjacent_mines(point))
    }

    /// Uncovers a tile.
    ///
    /// Marked or already exposed tiles are left alone. The very first uncover
    /// of a board never hits a mine: the mine is moved to the first empty tile
    /// in row-major order. Uncovering a zero tile sweeps its whole zero region.
    pub fn select_tile(&mut self, point: Point) -> Result<SelectOutcome> {
        let point = self.validate(point)?;

        let state = self[point].state;
        if state.is_marked() || state.is_exposed() {
            log::trace!("Ignoring select at {point}, tile is {state:?}");
            return Ok(SelectOutcome::no_change(self.outcome()));
        }

        if self[point].is_mine() && self.is_untouched() {
            self.relocate_mine(point);
        }

        self[point].state = TileState::Exposed;

        let tiles_revealed = if self[point].is_mine() {
            log::debug!("Hit mine at {point}");
            self.expose_all_mines();
            self[point].state = TileState::ExposedMine;
            1
        } else if self.adjacent_mines(point) == 0 {
            self.sweep(point)
        } else {
            log::trace!("Exposed {point}");
            0
        };

        let outcome = self.outcome();
        if outcome == GameOutcome::Won {
            log::debug!("Every empty tile exposed, game won");
        }

        Ok(SelectOutcome {
            tiles_revealed,
            outcome,
        })
    }

    /// Cycles `Hidden -> Flagged -> QuestionMark -> Hidden`, other states are kept.
    pub fn flag_tile(&mut self, point: Point) -> Result<FlagOutcome> {
        use TileState::*;

        let tile = self.get_mut(point)?;
        let next = match tile.state {
            Hidden => Flagged,
            Flagged => QuestionMark,
            QuestionMark => Hidden,
            Exposed | ExposedMine => return Ok(FlagOutcome::NoChange),
        };
        tile.state = next;

        Ok(FlagOutcome::Changed(next))
    }

    pub fn outcome(&self) -> GameOutcome {
        let tiles = self.as_slice();

        if tiles.iter().any(|tile| tile.state == TileState::ExposedMine) {
            GameOutcome::Lost
        } else if tiles
            .iter()
            .filter(|tile| !tile.is_mine())
            .all(|tile| tile.state == TileState::Exposed)
        {
            GameOutcome::Won
        } else {
            GameOutcome::Running
        }
    }

    pub fn total_mine_count(&self) -> CellCount {
        self.count_tiles(|tile| tile.is_mine())
    }

    pub fn total_flagged_count(&self) -> CellCount {
        self.count_tiles(|tile| tile.state == TileState::Flagged)
    }

    pub fn exposed_count(&self) -> CellCount {
        self.count_tiles(|tile| tile.state.is_exposed())
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_remaining(&self) -> i32 {
        i32::from(self.total_mine_count()) - i32::from(self.total_flagged_count())
    }

    /// Whether nothing has been uncovered yet, markers don't count.
    pub fn is_untouched(&self) -> bool {
        !self.as_slice().iter().any(|tile| tile.state.is_exposed())
    }

    fn count_tiles(&self, predicate: impl FnMut(&Tile) -> bool) -> CellCount {
        // a board never holds more than `Coord::MAX^2` tiles
        self.count(predicate) as CellCount
    }

    pub(crate) fn adjacent_mines(&self, point: Point) -> u8 {
        // at most eight neighbors
        self.iter_neighbors(point)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    fn relocate_mine(&mut self, point: Point) {
        let Some(index) = self.as_slice().iter().position(|tile| !tile.is_mine()) else {
            log::warn!("No empty tile to move the mine at {point} to");
            return;
        };
        let dest = self.point_at(index);

        log::debug!("First uncover hit a mine, moving it from {point} to {dest}");
        self[dest].content = TileContent::Mine;
        self[point].content = TileContent::Empty;
    }

    fn expose_all_mines(&mut self) {
        for point in self.filter(|_, tile| tile.is_mine()) {
            self[point].state = TileState::Exposed;
        }
    }

    /// Exposes the zero region connected to `start` plus its numbered border.
    ///
    /// New states are written to a staged copy that replaces the board in one
    /// assignment. Returns the number of zero tiles in the region.
    fn sweep(&mut self, start: Point) -> CellCount {
        let region = self.zero_region(start);
        log::trace!("Sweeping {} zero tiles from {start}", region.len());

        let mut staged = self.clone();
        for &point in &region {
            staged[point].state = TileState::Exposed;
            for neighbor in self.iter_neighbors(point) {
                staged[neighbor].state = TileState::Exposed;
            }
        }
        *self = staged;

        region.len() as CellCount
    }

    /// Breadth-first closure of empty zero tiles reachable from `start`.
    fn zero_region(&self, start: Point) -> Vec<Point> {
        let mut seen = HashSet::new();
        seen.insert(start);
        let mut to_visit = VecDeque::from([start]);
        let mut region = Vec::new();

        while let Some(point) = to_visit.pop_front() {
            region.push(point);

            for neighbor in self.iter_neighbors(point) {
                if !seen.insert(neighbor) {
                    continue;
                }
                if !self[neighbor].is_mine() && self.adjacent_mines(neighbor) == 0 {
                    to_visit.push_back(neighbor);
                }
            }
        }

        region
    }
}
