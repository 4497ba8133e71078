use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Up to eight neighbors, kept inline.
pub type Neighbors<T> = SmallVec<[T; 8]>;

/// Fixed-size two-dimensional container.
///
/// Values are stored row by row, so the point `(x, y)` lives at linear index
/// `y * width + x` of [`Grid::as_slice`]. All traversals (`points`, `iter`,
/// `map`, `filter`) follow that same order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    pub fn from_fn(width: Coord, height: Coord, mut f: impl FnMut(Point) -> T) -> Self {
        let cells = Array2::from_shape_fn((usize::from(height), usize::from(width)), |(y, x)| {
            // both indices are bounded by the `Coord` dimensions above
            f(Point::new(x as Coord, y as Coord))
        });
        Self { cells }
    }

    /// Builds a grid from row-major values, `values.len()` must be `width * height`.
    pub fn from_vec(width: Coord, height: Coord, values: Vec<T>) -> Result<Self> {
        let cells = Array2::from_shape_vec((usize::from(height), usize::from(width)), values)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    pub fn width(&self) -> Coord {
        // dimensions always come from `Coord` values
        self.cells.ncols() as Coord
    }

    pub fn height(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn size(&self) -> (Coord, Coord) {
        (self.width(), self.height())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear row-major storage.
    pub fn as_slice(&self) -> &[T] {
        self.cells
            .as_slice()
            .expect("grid storage is always in standard layout")
    }

    pub fn is_in_bounds(&self, point: Point) -> bool {
        point.x < self.width() && point.y < self.height()
    }

    pub fn validate(&self, point: Point) -> Result<Point> {
        if self.is_in_bounds(point) {
            Ok(point)
        } else {
            Err(GameError::IndexOutOfBounds {
                point,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    pub fn get(&self, point: Point) -> Result<&T> {
        let point = self.validate(point)?;
        Ok(&self.cells[point.to_nd_index()])
    }

    pub fn get_mut(&mut self, point: Point) -> Result<&mut T> {
        let point = self.validate(point)?;
        Ok(&mut self.cells[point.to_nd_index()])
    }

    pub fn set(&mut self, point: Point, value: T) -> Result<()> {
        *self.get_mut(point)? = value;
        Ok(())
    }

    /// Point stored at a linear index.
    pub fn point_at(&self, index: usize) -> Point {
        let width = usize::from(self.width());
        Point::new((index % width) as Coord, (index / width) as Coord)
    }

    /// Linear index of an in-bounds point.
    pub fn index_of(&self, point: Point) -> usize {
        usize::from(point.y) * usize::from(self.width()) + usize::from(point.x)
    }

    pub fn iter_neighbors(&self, point: Point) -> NeighborIter {
        NeighborIter::new(point, self.size())
    }

    /// Points directly adjacent to `point` horizontally, vertically and diagonally.
    pub fn adjacent_points(&self, point: Point) -> Neighbors<Point> {
        self.iter_neighbors(point).collect()
    }

    /// Values directly adjacent to `point`.
    pub fn adjacent_tiles(&self, point: Point) -> Neighbors<&T> {
        self.iter_neighbors(point).map(|pos| &self[pos]).collect()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.points().zip(self.cells.iter())
    }

    pub fn map<U>(&self, mut transform: impl FnMut(Point, &T) -> U) -> Vec<U> {
        self.iter().map(|(point, value)| transform(point, value)).collect()
    }

    /// Points, in order, whose values satisfy the predicate.
    pub fn filter(&self, mut is_included: impl FnMut(Point, &T) -> bool) -> Vec<Point> {
        self.iter()
            .filter(|&(point, value)| is_included(point, value))
            .map(|(point, _)| point)
            .collect()
    }

    pub fn count(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|&value| predicate(value)).count()
    }
}

impl<T: Clone> Grid<T> {
    pub fn new(width: Coord, height: Coord, fill: T) -> Self {
        Self {
            cells: Array2::from_elem((usize::from(height), usize::from(width)), fill),
        }
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, point: Point) -> &Self::Output {
        &self.cells[point.to_nd_index()]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, point: Point) -> &mut Self::Output {
        &mut self.cells[point.to_nd_index()]
    }
}
