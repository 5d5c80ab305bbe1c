//! Grid and cell model for the maze.
//!
//! The grid is the single owner of every cell and the only authority on wall state. Cells live in
//! one row-major vector addressed by `y * width + x`, which keeps lookups constant time and turns a
//! reset into a plain overwrite of that vector.

use thiserror::Error;

/// Largest number of cells a grid may hold.
///
/// The generator reserves room for every cell of the grid in its frontier up front, so this bound is
/// also the frontier's capacity.
pub const MAX_CELLS: usize = 4096;

/// Cell at which maze generation starts and where the player enters the maze.
pub const ORIGIN: Position = Position::new(0, 0);

/// Errors raised when a grid is built with unusable dimensions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// One of the two dimensions is zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    Empty {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// The cell count is above [`MAX_CELLS`] or does not fit in a `usize`.
    #[error("a {width}x{height} grid exceeds the limit of {max} cells")]
    TooManyCells {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
        /// Largest cell count accepted.
        max: usize,
    },
}

/// One of the four sides of a cell.
///
/// The variants double as movement directions: moving towards `Top` decreases `y`, moving towards
/// `Left` decreases `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Side facing the previous row.
    Top,
    /// Side facing the next column.
    Right,
    /// Side facing the next row.
    Bottom,
    /// Side facing the previous column.
    Left,
}

impl Direction {
    /// Every direction, in wall order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

/// Column and row of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column, growing to the right.
    pub x: usize,
    /// Row, growing downwards.
    pub y: usize,
}

impl Position {
    /// Builds a position from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the position one step away in `direction`.
    ///
    /// Only underflow and overflow yield `None`; whether the result lies inside a particular grid is
    /// for that grid to decide.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Top => self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            Direction::Right => self.x.checked_add(1).map(|x| Self::new(x, self.y)),
            Direction::Bottom => self.y.checked_add(1).map(|y| Self::new(self.x, y)),
            Direction::Left => self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
        }
    }

    /// Returns the direction leading from `self` to `other` when both are orthogonally adjacent.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == Some(other))
    }
}

/// A single grid position with its four walls and its generation mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Where the cell sits in its grid.
    position: Position,
    /// Wall flags in [`Direction::ALL`] order; `true` means the wall stands.
    walls: [bool; 4],
    /// Whether the generator has already carved its way into this cell.
    visited: bool,
}

impl Cell {
    /// Builds a fully walled, unvisited cell.
    const fn new(position: Position) -> Self {
        Self {
            position,
            walls: [true; 4],
            visited: false,
        }
    }

    /// Returns the position of the cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns whether the wall on the `direction` side still stands.
    #[must_use]
    pub const fn has_wall(&self, direction: Direction) -> bool {
        let [top, right, bottom, left] = self.walls;
        match direction {
            Direction::Top => top,
            Direction::Right => right,
            Direction::Bottom => bottom,
            Direction::Left => left,
        }
    }

    /// Returns whether the generator has reached this cell.
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Knocks down the wall on the `direction` side.
    fn remove_wall(&mut self, direction: Direction) {
        let wall = match direction {
            Direction::Top => &mut self.walls[0],
            Direction::Right => &mut self.walls[1],
            Direction::Bottom => &mut self.walls[2],
            Direction::Left => &mut self.walls[3],
        };
        *wall = false;
    }
}

/// Rectangular collection of cells with their wall state.
///
/// Exactly one cell exists for every position inside `width x height`; every other position is
/// absent, which is how callers detect the border of the maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major cell storage.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a `width x height` grid of fully walled, unvisited cells.
    ///
    /// # Errors
    ///
    /// - [`DimensionError::Empty`] when either dimension is zero.
    /// - [`DimensionError::TooManyCells`] when the cell count exceeds [`MAX_CELLS`].
    pub fn new(width: usize, height: usize) -> Result<Self, DimensionError> {
        if width == 0 || height == 0 {
            return Err(DimensionError::Empty { width, height });
        }

        let count = width
            .checked_mul(height)
            .filter(|&count| count <= MAX_CELLS)
            .ok_or(DimensionError::TooManyCells {
                width,
                height,
                max: MAX_CELLS,
            })?;

        let cells = (0..count)
            .map(|index| Cell::new(Position::new(index % width, index / width)))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns whether `position` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Returns the storage index of `position`, if it lies inside the grid.
    pub(crate) const fn index_of(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.y * self.width + position.x)
        } else {
            None
        }
    }

    /// Looks up the cell at column `x` and row `y`.
    ///
    /// Out-of-range coordinates are not an error: they simply have no cell.
    #[must_use]
    pub fn lookup(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cell(Position::new(x, y))
    }

    /// Looks up the cell at `position`.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index_of(position)
            .and_then(|index| self.cells.get(index))
    }

    /// Mutable counterpart of [`Grid::cell`].
    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index_of(position)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Iterates over the in-range orthogonal neighbours of `position`.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            position
                .step(direction)
                .filter(|&next| self.contains(next))
                .map(|next| (direction, next))
        })
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Removes the pair of walls separating two adjacent cells.
    ///
    /// The side is picked from the sign of the coordinate delta between `from` and `to`, and both
    /// facing walls go at once so the two cells never disagree.
    ///
    /// # Panics
    ///
    /// Panics when `from` and `to` are not orthogonally adjacent cells of this grid. Callers only
    /// ever carve between neighbours, so this is a broken contract rather than a runtime condition.
    pub fn carve(&mut self, from: Position, to: Position) {
        let Some(direction) = from
            .direction_to(to)
            .filter(|_| self.contains(from) && self.contains(to))
        else {
            panic!("cannot carve between non-adjacent cells {from:?} and {to:?}");
        };

        if let Some(cell) = self.cell_mut(from) {
            cell.remove_wall(direction);
        }
        if let Some(cell) = self.cell_mut(to) {
            cell.remove_wall(direction.opposite());
        }
    }

    /// Marks the cell at `position` as reached by the generator.
    pub(crate) fn mark_visited(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            cell.visited = true;
        }
    }

    /// Restores every wall and clears every visited mark, keeping the allocation.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::new(cell.position);
        }
    }

    /// Counts the carved passages, i.e. adjacent cell pairs with no wall between them.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&direction| !cell.has_wall(direction))
                    .count()
            })
            .sum()
    }
}
