//! Game round built on top of the maze core.
//!
//! A session owns the grid and the generator of one game, plus everything the rules need: where the
//! player stands, the cells they came through, and what is left of the time and move budgets. The
//! maze core only answers whether a move is possible; deciding what a move costs and when a round
//! is over lives here.

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng as _};
use tracing::info;

use crate::{
    generator::Generator,
    grid::{DimensionError, Direction, Grid, Position, ORIGIN},
    movement,
    types::Difficulty,
};

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The player reached the goal with moves to spare.
    Won,
    /// The move budget ran out.
    OutOfMoves,
    /// The clock ran out.
    OutOfTime,
}

impl Outcome {
    /// Returns the message announced when the round ends.
    pub(crate) const fn message(self) -> &'static str {
        match self {
            Self::Won => "Congratulations! You won!",
            Self::OutOfMoves => "Out of moves! You died!",
            Self::OutOfTime => "You are out of time! You died!",
        }
    }
}

/// State of the game currently being played.
pub(crate) struct Session {
    /// Maze being carved or played.
    grid: Grid,
    /// Generator carving [`Session::grid`].
    generator: Generator,
    /// Random source shared by every round of the session.
    rng: StdRng,
    /// Budgets of the current round.
    difficulty: Difficulty,
    /// Cell the player stands on.
    player: Position,
    /// Cells the player came through, most recent last.
    trail: Vec<Position>,
    /// Backtracking moves the player may still make.
    moves_left: u32,
    /// Time remaining on the clock.
    time_left: Duration,
    /// Result of the round, once decided.
    outcome: Option<Outcome>,
}

impl Session {
    /// Builds a session over a fresh `width x height` grid and starts carving its first maze.
    ///
    /// # Errors
    ///
    /// This function returns the [`DimensionError`] raised by [`Grid::new`].
    pub(crate) fn new(
        width: usize,
        height: usize,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<Self, DimensionError> {
        let mut grid = Grid::new(width, height)?;
        let generator = Generator::new(&mut grid);

        let mut session = Self {
            grid,
            generator,
            rng: StdRng::seed_from_u64(seed),
            difficulty,
            player: ORIGIN,
            trail: Vec::new(),
            moves_left: difficulty.move_budget(),
            time_left: difficulty.time_budget(),
            outcome: None,
        };
        session.check_outcome();

        Ok(session)
    }

    /// Starts a new round: the grid is reset in place and a new maze starts being carved.
    pub(crate) fn restart(&mut self, difficulty: Difficulty) {
        self.generator.restart(&mut self.grid);
        self.difficulty = difficulty;
        self.player = ORIGIN;
        self.trail.clear();
        self.moves_left = difficulty.move_budget();
        self.time_left = difficulty.time_budget();
        self.outcome = None;

        info!(?difficulty, "new round started");
        self.check_outcome();
    }

    /// Returns the maze.
    pub(crate) const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the generator carving the maze.
    pub(crate) const fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Returns the budgets of the current round.
    pub(crate) const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the cell the player stands on.
    pub(crate) const fn player(&self) -> Position {
        self.player
    }

    /// Returns the cell holding the treasure: the corner opposite to the entrance.
    pub(crate) const fn goal(&self) -> Position {
        Position::new(self.grid.width() - 1, self.grid.height() - 1)
    }

    /// Returns the backtracking moves left.
    pub(crate) const fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Returns the time left on the clock.
    pub(crate) const fn time_left(&self) -> Duration {
        self.time_left
    }

    /// Returns how the round ended, if it did.
    pub(crate) const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns whether the maze is still being carved.
    pub(crate) fn is_generating(&self) -> bool {
        !self.generator.is_complete()
    }

    /// Carves up to `steps` more cells, stopping early once the maze is complete.
    pub(crate) fn advance_generation(&mut self, steps: usize) {
        for _ in 0..steps {
            if self
                .generator
                .step(&mut self.grid, &mut self.rng)
                .is_none()
            {
                break;
            }
        }
        self.check_outcome();
    }

    /// Carves whatever is left of the maze at once.
    pub(crate) fn finish_generation(&mut self) {
        let _ = self.generator.run(&mut self.grid, &mut self.rng);
        self.check_outcome();
    }

    /// Runs the clock for `elapsed`.
    ///
    /// The clock only runs between the end of the generation and the end of the round.
    pub(crate) fn tick(&mut self, elapsed: Duration) {
        if self.is_generating() || self.outcome.is_some() {
            return;
        }

        self.time_left = self.time_left.saturating_sub(elapsed);
        self.check_outcome();
    }

    /// Tries to move the player one cell towards `direction`.
    ///
    /// Walking back onto the cell the player just left costs one move; any other move is free.
    /// Returns whether the player moved.
    pub(crate) fn try_move(&mut self, direction: Direction) -> bool {
        if self.is_generating() || self.outcome.is_some() {
            return false;
        }
        let Some(next) = movement::destination(&self.grid, self.player, direction) else {
            return false;
        };

        if self.trail.last() == Some(&next) {
            let _ = self.trail.pop();
            self.moves_left = self.moves_left.saturating_sub(1);
        } else {
            self.trail.push(self.player);
        }
        self.player = next;
        self.check_outcome();

        true
    }

    /// Decides the round once the maze is carved, if it is not decided yet.
    ///
    /// Running out of moves takes priority over reaching the goal, which in turn beats running out
    /// of time on the same frame.
    fn check_outcome(&mut self) {
        if self.is_generating() || self.outcome.is_some() {
            return;
        }

        let outcome = if self.moves_left == 0 {
            Outcome::OutOfMoves
        } else if self.player == self.goal() {
            Outcome::Won
        } else if self.time_left.is_zero() {
            Outcome::OutOfTime
        } else {
            return;
        };
        self.finish(outcome);
    }

    /// Records the end of the round.
    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        info!(
            ?outcome,
            moves_left = self.moves_left,
            time_left = ?self.time_left,
            "round finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a session whose maze is already fully carved.
    fn carved_session(width: usize, height: usize, difficulty: Difficulty) -> Session {
        let mut session =
            Session::new(width, height, difficulty, 17).expect("test session should be valid");
        session.finish_generation();

        session
    }

    /// Returns the directions the player can currently walk towards.
    fn open_directions(session: &Session) -> Vec<Direction> {
        let player = session.player();
        Direction::ALL
            .into_iter()
            .filter(|&direction| movement::can_move(session.grid(), player.x, player.y, direction))
            .collect()
    }

    #[test]
    fn test_new_session_starts_generating() {
        let session = Session::new(5, 4, Difficulty::Medium, 1).expect("session should be valid");

        assert!(session.is_generating());
        assert_eq!(session.player(), ORIGIN);
        assert_eq!(session.goal(), Position::new(4, 3));
        assert_eq!(session.moves_left(), 10);
        assert_eq!(session.time_left(), Duration::from_secs(30));
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_new_session_rejects_bad_dimensions() {
        assert!(Session::new(0, 4, Difficulty::Easy, 1).is_err());
        assert!(Session::new(100, 100, Difficulty::Easy, 1).is_err());
    }

    #[test]
    fn test_advance_generation_is_paced() {
        let mut session = Session::new(4, 4, Difficulty::Easy, 3).expect("session should be valid");

        session.advance_generation(5);
        assert_eq!(session.grid().passage_count(), 5);
        assert!(session.is_generating());

        session.advance_generation(usize::MAX);
        assert!(!session.is_generating());
        assert_eq!(session.grid().passage_count(), 15);
    }

    #[test]
    fn test_player_cannot_move_while_generating() {
        let mut session = Session::new(3, 3, Difficulty::Easy, 5).expect("session should be valid");

        for direction in Direction::ALL {
            assert!(!session.try_move(direction));
        }
        assert_eq!(session.player(), ORIGIN);
    }

    #[test]
    fn test_clock_waits_for_generation() {
        let mut session = Session::new(3, 3, Difficulty::Easy, 5).expect("session should be valid");

        session.tick(Duration::from_secs(10));
        assert_eq!(session.time_left(), Duration::from_secs(45));

        session.finish_generation();
        session.tick(Duration::from_secs(10));
        assert_eq!(session.time_left(), Duration::from_secs(35));
    }

    #[test]
    fn test_clock_running_out_ends_round() {
        let mut session = carved_session(3, 3, Difficulty::Difficult);

        session.tick(Duration::from_secs(19));
        assert_eq!(session.outcome(), None);

        session.tick(Duration::from_secs(5));
        assert_eq!(session.time_left(), Duration::ZERO);
        assert_eq!(session.outcome(), Some(Outcome::OutOfTime));

        let directions = open_directions(&session);
        for direction in directions {
            assert!(!session.try_move(direction));
        }
    }

    #[test]
    fn test_blocked_move_keeps_player_in_place() {
        let mut session = carved_session(6, 6, Difficulty::Easy);

        assert!(!session.try_move(Direction::Top));
        assert!(!session.try_move(Direction::Left));
        assert_eq!(session.player(), ORIGIN);
        assert_eq!(session.moves_left(), 20);
    }

    #[test]
    fn test_forward_moves_are_free_and_retracing_costs() {
        let mut session = carved_session(6, 6, Difficulty::Easy);
        let direction = *open_directions(&session)
            .first()
            .expect("origin should have an open wall");

        assert!(session.try_move(direction));
        assert_ne!(session.player(), ORIGIN);
        assert_eq!(session.moves_left(), 20);

        assert!(session.try_move(direction.opposite()));
        assert_eq!(session.player(), ORIGIN);
        assert_eq!(session.moves_left(), 19);
    }

    #[test]
    fn test_running_out_of_moves_ends_round() {
        let mut session = carved_session(6, 6, Difficulty::Difficult);
        let direction = *open_directions(&session)
            .first()
            .expect("origin should have an open wall");

        for _ in 0..5 {
            assert!(session.try_move(direction));
            assert!(session.try_move(direction.opposite()));
        }

        assert_eq!(session.moves_left(), 0);
        assert_eq!(session.outcome(), Some(Outcome::OutOfMoves));
        assert!(!session.try_move(direction));
    }

    #[test]
    fn test_reaching_goal_wins() {
        let mut session = carved_session(2, 1, Difficulty::Medium);

        assert!(session.try_move(Direction::Right));
        assert_eq!(session.player(), session.goal());
        assert_eq!(session.outcome(), Some(Outcome::Won));

        session.tick(Duration::from_secs(60));
        assert_eq!(session.outcome(), Some(Outcome::Won));
        assert_eq!(session.time_left(), Duration::from_secs(30));
    }

    #[test]
    fn test_single_cell_round_is_won() {
        let mut session = Session::new(1, 1, Difficulty::Easy, 1).expect("session should be valid");

        session.finish_generation();
        session.tick(Duration::from_millis(10));

        assert_eq!(session.player(), session.goal());
        assert_eq!(session.outcome(), Some(Outcome::Won));
        assert_eq!(session.moves_left(), 20);
        assert_eq!(session.time_left(), Duration::from_secs(45));
    }

    #[test]
    fn test_single_cell_round_is_won_after_restart() {
        let mut session = Session::new(1, 1, Difficulty::Easy, 1).expect("session should be valid");

        session.restart(Difficulty::Difficult);

        assert!(!session.is_generating());
        assert_eq!(session.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn test_restart_resets_round() {
        let mut session = carved_session(2, 1, Difficulty::Easy);
        assert!(session.try_move(Direction::Right));

        session.restart(Difficulty::Difficult);

        assert!(session.is_generating());
        assert_eq!(session.difficulty(), Difficulty::Difficult);
        assert_eq!(session.player(), ORIGIN);
        assert_eq!(session.moves_left(), 5);
        assert_eq!(session.time_left(), Duration::from_secs(20));
        assert_eq!(session.outcome(), None);
        assert_eq!(session.grid().passage_count(), 0);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Won.message(), "Congratulations! You won!");
        assert_eq!(Outcome::OutOfMoves.message(), "Out of moves! You died!");
        assert_eq!(
            Outcome::OutOfTime.message(),
            "You are out of time! You died!"
        );
    }
}
