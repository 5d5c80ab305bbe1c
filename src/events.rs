//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    grid::Direction,
    types::{MainMenuItem, Screen},
    App,
};

/// Input polling timeout in milliseconds.
///
/// This constant bounds how long the loop waits for a key before drawing the next frame, which in
/// turn sets the frame rate of the generation animation and of the time gauge.
pub(crate) const POLL_TIMEOUT_MS: u64 = 16;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(POLL_TIMEOUT_MS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    // Update animation and clock if in-game
    if matches!(app.screen, Screen::InGame) {
        app.update();
    }

    Ok(())
}

/// Dispatches a single key press to the handler of the current screen.
///
/// Menus are driven by the vim-like keys of the original layout with the arrow keys, Enter and
/// Escape as aliases; in game the same keys steer the player.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if matches!(app.screen, Screen::InGame) {
        handle_in_game_events(app, code);
        return;
    }

    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') | KeyCode::Down => handle_down_events(app),
        KeyCode::Char('k') | KeyCode::Up => handle_up_events(app),
        KeyCode::Char('l') | KeyCode::Enter => handle_select_events(app),
        KeyCode::Char('h') | KeyCode::Esc => handle_back_events(app),
        _ => {}
    }
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus. The cursor
/// wraps around to the first entry past the last one.
pub(crate) fn handle_down_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.next()),
        Screen::DifficultyMenu(difficulty) => {
            app.screen = Screen::DifficultyMenu(difficulty.next());
        }
        Screen::HowToPlay | Screen::InGame => {}
    }
}

/// Handles 'k' key press events for upward navigation.
///
/// This function processes the 'k' key press which is used for moving up in menus. Like the 'j'
/// handler, the cursor wraps around.
pub(crate) fn handle_up_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.previous()),
        Screen::DifficultyMenu(difficulty) => {
            app.screen = Screen::DifficultyMenu(difficulty.previous());
        }
        Screen::HowToPlay | Screen::InGame => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items and moving
/// forward in the application flow, up to starting a round.
pub(crate) fn handle_select_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => app.request_round(),
        Screen::MainMenu(MainMenuItem::HowToPlay) => app.screen = Screen::HowToPlay,
        Screen::MainMenu(MainMenuItem::Quit) => app.exit = true,
        Screen::DifficultyMenu(difficulty) => app.start_round(difficulty),
        Screen::HowToPlay | Screen::InGame => {}
    }
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for moving back or returning to
/// previous screens.
pub(crate) fn handle_back_events(app: &mut App) {
    match app.screen {
        Screen::DifficultyMenu(_) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::HowToPlay => app.screen = Screen::MainMenu(MainMenuItem::HowToPlay),
        Screen::MainMenu(_) | Screen::InGame => {}
    }
}

/// Handles key presses on the in-game screen.
///
/// Arrow keys and 'h'/'j'/'k'/'l' move the player, Escape goes back to the main menu, and Enter
/// starts a new round once the current one is over.
pub(crate) fn handle_in_game_events(app: &mut App, code: KeyCode) {
    let direction = match code {
        KeyCode::Char('q') => {
            app.exit = true;
            return;
        }
        KeyCode::Esc => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
            return;
        }
        KeyCode::Enter => {
            if app.session.outcome().is_some() {
                app.request_round();
            }
            return;
        }
        KeyCode::Up | KeyCode::Char('k') => Direction::Top,
        KeyCode::Right | KeyCode::Char('l') => Direction::Right,
        KeyCode::Down | KeyCode::Char('j') => Direction::Bottom,
        KeyCode::Left | KeyCode::Char('h') => Direction::Left,
        _ => return,
    };

    let _ = app.session.try_move(direction);
}
