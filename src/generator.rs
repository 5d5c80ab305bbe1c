//! Randomized frontier-growth maze generation.
//!
//! The generator grows a carved region out of the origin the way Prim's algorithm grows a minimum
//! spanning tree, except that edges are chosen uniformly at random instead of by weight. Each step
//! does the following:
//!
//! 1. Pick a uniformly random cell from the frontier and remove it (swap-remove, order is not
//!    kept).
//! 2. Pick a uniformly random neighbour of that cell that has already been carved.
//! 3. Carve the wall between the two and mark the picked cell visited.
//! 4. Push the picked cell's unvisited neighbours that are not yet queued onto the frontier.
//!
//! The frontier empties exactly when every cell is visited. The resulting maze is a spanning tree
//! of the grid: `width * height - 1` passages and a single path between any two cells. The two
//! independent random picks are what gives the mazes their look; the result is not a uniform sample
//! over all spanning trees.

use rand::{seq::IteratorRandom as _, Rng};
use tracing::{debug, trace};

use crate::grid::{Cell, Grid, Position, ORIGIN};

/// Incremental maze generator working over a borrowed [`Grid`].
///
/// The generator never owns the grid it carves. Every operation takes the grid by reference, which
/// lets a renderer read the grid between two steps; each [`Generator::step`] is a complete carve so
/// no half-done state is ever observable.
#[derive(Clone, Debug)]
pub struct Generator {
    /// Cells adjacent to the carved region that have not been carved yet.
    frontier: Vec<Position>,
    /// Per-cell flag telling whether the cell already entered the frontier.
    enqueued: Vec<bool>,
    /// Cell carved by the latest step, while generation is still running.
    current: Option<Position>,
}

impl Generator {
    /// Starts a generation over `grid`.
    ///
    /// The grid is expected to be freshly built or reset. The origin is marked visited and its
    /// neighbours form the initial frontier.
    pub fn new(grid: &mut Grid) -> Self {
        let mut generator = Self {
            frontier: Vec::with_capacity(grid.cell_count()),
            enqueued: vec![false; grid.cell_count()],
            current: None,
        };
        generator.seed(grid);

        generator
    }

    /// Resets `grid` in place and starts generating a new maze over it.
    pub fn restart(&mut self, grid: &mut Grid) {
        grid.reset();
        self.frontier.clear();
        self.enqueued.clear();
        self.enqueued.resize(grid.cell_count(), false);
        self.current = None;
        self.seed(grid);
    }

    /// Marks the origin visited and queues its neighbours.
    fn seed(&mut self, grid: &mut Grid) {
        grid.mark_visited(ORIGIN);
        self.enqueue_neighbors(grid, ORIGIN);
        debug!(
            width = grid.width(),
            height = grid.height(),
            frontier = self.frontier.len(),
            "maze generation started"
        );
    }

    /// Returns whether the maze is finished, which is the case exactly when the frontier is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Returns the cell carved by the latest step, or `None` before the first step and once the
    /// maze is complete.
    #[must_use]
    pub const fn current(&self) -> Option<Position> {
        self.current
    }

    /// Returns how many cells are waiting in the frontier.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Returns the cells currently waiting in the frontier, in no particular order.
    #[must_use]
    pub fn frontier(&self) -> &[Position] {
        &self.frontier
    }

    /// Carves one more cell into the maze.
    ///
    /// Returns the cell that was carved, or `None` when the maze was already complete.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> Option<Position> {
        debug_assert_eq!(
            self.enqueued.len(),
            grid.cell_count(),
            "generator was seeded for a grid of another size"
        );

        if self.frontier.is_empty() {
            self.current = None;
            return None;
        }

        let picked = rng.random_range(0..self.frontier.len());
        let position = self.frontier.swap_remove(picked);

        // A cell only enters the frontier next to a visited one, so a parent always exists.
        if let Some(parent) = grid
            .neighbors(position)
            .map(|(_, next)| next)
            .filter(|&next| grid.cell(next).is_some_and(Cell::is_visited))
            .choose(rng)
        {
            grid.carve(position, parent);
            trace!(?position, ?parent, "carved passage");
        }

        grid.mark_visited(position);
        self.enqueue_neighbors(grid, position);

        if self.frontier.is_empty() {
            self.current = None;
            debug!(passages = grid.passage_count(), "maze generation complete");
        } else {
            self.current = Some(position);
        }

        Some(position)
    }

    /// Runs the generation to completion and returns the number of steps it took.
    pub fn run<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> usize {
        let mut steps = 0;
        while self.step(grid, rng).is_some() {
            steps += 1;
        }

        steps
    }

    /// Queues the unvisited neighbours of `position` that are not in the frontier yet.
    fn enqueue_neighbors(&mut self, grid: &Grid, position: Position) {
        for (_, next) in grid.neighbors(position) {
            let unvisited = grid.cell(next).is_some_and(|cell| !cell.is_visited());
            let Some(enqueued) = grid
                .index_of(next)
                .and_then(|index| self.enqueued.get_mut(index))
            else {
                continue;
            };

            if unvisited && !*enqueued {
                *enqueued = true;
                self.frontier.push(next);
            }
        }
    }
}
