use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Position of a tile, `x` grows to the right and `y` grows downwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// `[row, column]` index into an `Array2` of shape `(height, width)`.
    pub(crate) fn to_nd_index(self) -> [usize; 2] {
        [self.y.into(), self.x.into()]
    }
}

impl From<(Coord, Coord)> for Point {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (Coord, Coord) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major scan of the Moore neighborhood, skipping the center.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `point`, returning a value only when it remains in bounds.
fn apply_delta(point: Point, (dx, dy): (i8, i8), (width, height): (Coord, Coord)) -> Option<Point> {
    let x = point.x.checked_add_signed(dx)?;
    if x >= width {
        return None;
    }

    let y = point.y.checked_add_signed(dy)?;
    if y >= height {
        return None;
    }

    Some(Point { x, y })
}

/// Iterates the in-bounds neighbors of a point in row-major order.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Point,
    bounds: (Coord, Coord),
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Point, bounds: (Coord, Coord)) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_scan_rows_top_to_bottom() {
        let neighbors: Vec<_> = NeighborIter::new(Point::new(1, 1), (3, 3)).collect();

        assert_eq!(
            neighbors,
            [
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn neighbors_are_clipped_at_far_edges() {
        let neighbors: Vec<_> = NeighborIter::new(Point::new(4, 2), (5, 3)).collect();

        assert_eq!(
            neighbors,
            [Point::new(3, 1), Point::new(4, 1), Point::new(3, 2)]
        );
    }

    #[test]
    fn point_displays_as_pair() {
        assert_eq!(alloc::format!("{}", Point::new(3, 7)), "(3,7)");
    }
}
