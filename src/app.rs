//! Core application state and logic for the maze game.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::{
    animation::{CarveAnimation, FrameClock},
    cli::Cli,
    events,
    session::Session,
    types::{Difficulty, MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Game being played.
    ///
    /// This field owns the maze and the round rules. It lives for the whole run of the application
    /// and is restarted in place at the beginning of every round.
    pub(crate) session: Session,
    /// Difficulty forced from the command line.
    ///
    /// When set, starting a round skips the difficulty menu.
    pub(crate) preset: Option<Difficulty>,
    /// Pacing of the generation animation.
    pub(crate) animation: CarveAnimation,
    /// Stopwatch feeding the round clock.
    pub(crate) clock: FrameClock,
}

impl App {
    /// Creates the application from its command-line configuration.
    ///
    /// When no seed is given a random one is drawn and logged, so any maze can be played again.
    ///
    /// # Errors
    ///
    /// - [`crate::grid::DimensionError`] if the requested maze dimensions are unusable.
    pub fn new(cli: &Cli) -> Result<Self> {
        let seed = cli.seed.unwrap_or_else(rand::random);
        let difficulty = cli.difficulty.unwrap_or_default();
        let session = Session::new(cli.width, cli.height, difficulty, seed)?;

        info!(
            width = cli.width,
            height = cli.height,
            seed,
            "application started"
        );

        Ok(Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            session,
            preset: cli.difficulty,
            animation: CarveAnimation::new(Duration::from_millis(cli.carve_delay_ms)),
            clock: FrameClock::new(),
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        info!("application exited");

        Ok(())
    }

    /// Leaves the menus and starts a new round at `difficulty`.
    pub(crate) fn start_round(&mut self, difficulty: Difficulty) {
        self.session.restart(difficulty);
        self.animation.reset();
        self.clock.reset();
        self.screen = Screen::InGame;
    }

    /// Moves on from the current screen towards a new round.
    ///
    /// The difficulty menu is shown unless a difficulty was forced from the command line.
    pub(crate) fn request_round(&mut self) {
        match self.preset {
            Some(difficulty) => self.start_round(difficulty),
            None => self.screen = Screen::DifficultyMenu(self.session.difficulty()),
        }
    }

    /// Advances the in-game state by one frame.
    ///
    /// While the maze is being carved, the steps that came due since the previous frame are
    /// carved; afterwards the elapsed time runs the round clock.
    pub(crate) fn update(&mut self) {
        let elapsed = self.clock.lap();

        if self.session.is_generating() {
            let steps = self.animation.due_steps();
            self.session.advance_generation(steps);
        } else {
            self.session.tick(elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    /// Builds an application from command-line style arguments.
    fn app_from(args: &[&str]) -> App {
        let cli = Cli::parse_from(std::iter::once("mazequest").chain(args.iter().copied()));
        App::new(&cli).expect("test app should be valid")
    }

    #[test]
    fn test_new_app_starts_in_main_menu() {
        let app = app_from(&["--seed", "1"]);

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert_eq!(app.preset, None);
        assert_eq!(app.session.grid().width(), 20);
        assert_eq!(app.session.grid().height(), 10);
    }

    #[test]
    fn test_new_app_rejects_bad_dimensions() {
        let cli = Cli::parse_from(["mazequest", "--width", "0"]);

        assert!(App::new(&cli).is_err());
    }

    #[test]
    fn test_request_round_without_preset_opens_difficulty_menu() {
        let mut app = app_from(&["--seed", "1"]);

        app.request_round();

        assert_eq!(app.screen, Screen::DifficultyMenu(Difficulty::Easy));
    }

    #[test]
    fn test_request_round_with_preset_starts_game() {
        let mut app = app_from(&["--seed", "1", "--difficulty", "difficult"]);

        app.request_round();

        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(app.session.difficulty(), Difficulty::Difficult);
        assert!(app.session.is_generating());
    }

    #[test]
    fn test_update_carves_whole_maze_without_delay() {
        let mut app = app_from(&["--seed", "7", "--carve-delay-ms", "0", "--width", "5"]);
        app.start_round(Difficulty::Medium);

        app.update();

        assert!(!app.session.is_generating());
        assert_eq!(app.session.grid().passage_count(), 49);
    }

    #[test]
    fn test_update_runs_clock_after_generation() {
        let mut app = app_from(&["--seed", "7", "--carve-delay-ms", "0"]);
        app.start_round(Difficulty::Easy);
        app.update();

        std::thread::sleep(Duration::from_millis(5));
        app.update();

        assert!(app.session.time_left() < Difficulty::Easy.time_budget());
    }
}
