//! Movement checks against the wall state of a [`Grid`].

use crate::grid::{Direction, Grid, Position};

/// Returns whether an agent standing at column `x` and row `y` may move towards `direction`.
///
/// A position outside the grid has no cell and therefore allows no movement. The destination is not
/// bounds-checked: walls are only ever carved between two cells of the grid, so an open wall always
/// leads to an existing cell.
#[must_use]
pub fn can_move(grid: &Grid, x: usize, y: usize, direction: Direction) -> bool {
    grid.lookup(x, y)
        .is_some_and(|cell| !cell.has_wall(direction))
}

/// Returns where a move from `position` towards `direction` would land, if the move is allowed.
#[must_use]
pub fn destination(grid: &Grid, position: Position, direction: Direction) -> Option<Position> {
    if can_move(grid, position.x, position.y, direction) {
        position.step(direction)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::generator::Generator;

    /// Builds a fully generated maze from a fixed seed.
    fn maze(width: usize, height: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(width, height).expect("test grid should be valid");
        let mut rng = StdRng::seed_from_u64(seed);
        let _ = Generator::new(&mut grid).run(&mut grid, &mut rng);

        grid
    }

    #[test]
    fn test_can_move_mirrors_wall_flags() {
        let grid = maze(8, 6, 5);

        for cell in grid.cells() {
            let position = cell.position();
            for direction in Direction::ALL {
                assert_eq!(
                    can_move(&grid, position.x, position.y, direction),
                    !cell.has_wall(direction)
                );
            }
        }
    }

    #[test]
    fn test_can_move_outside_grid_is_false() {
        let grid = maze(4, 4, 9);

        for direction in Direction::ALL {
            assert!(!can_move(&grid, 4, 0, direction));
            assert!(!can_move(&grid, 0, 4, direction));
            assert!(!can_move(&grid, usize::MAX, 2, direction));
        }
    }

    #[test]
    fn test_fresh_grid_blocks_every_move() {
        let grid = Grid::new(3, 3).expect("3x3 grid should be valid");

        for cell in grid.cells() {
            for direction in Direction::ALL {
                assert!(destination(&grid, cell.position(), direction).is_none());
            }
        }
    }

    #[test]
    fn test_destination_follows_carved_passage() {
        let mut grid = Grid::new(2, 2).expect("2x2 grid should be valid");
        grid.carve(Position::new(0, 0), Position::new(0, 1));

        assert_eq!(
            destination(&grid, Position::new(0, 0), Direction::Bottom),
            Some(Position::new(0, 1))
        );
        assert_eq!(
            destination(&grid, Position::new(0, 1), Direction::Top),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            destination(&grid, Position::new(0, 0), Direction::Right),
            None
        );
    }

    #[test]
    fn test_open_walls_stay_inside_grid() {
        let grid = maze(10, 7, 123);

        for cell in grid.cells() {
            for direction in Direction::ALL {
                if let Some(next) = destination(&grid, cell.position(), direction) {
                    assert!(grid.contains(next));
                }
            }
        }
    }
}
