//! Type definitions and enums for the application state and navigation.

use std::time::Duration;

use clap::ValueEnum;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    ///
    /// This variant represents the main menu screen of the game.
    MainMenu(MainMenuItem),
    /// Difficulty selection screen.
    ///
    /// This variant represents the menu shown before a round starts, holding the difficulty the
    /// cursor currently rests on.
    DifficultyMenu(Difficulty),
    /// Rules screen.
    ///
    /// This variant represents the static screen explaining how to play.
    HowToPlay,
    /// In-game maze screen.
    ///
    /// This variant represents the screen where the maze is carved and then played.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    StartGame,
    /// "How to Play" menu option.
    HowToPlay,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Every item, in display order.
    pub(crate) const ALL: [Self; 3] = [Self::StartGame, Self::HowToPlay, Self::Quit];

    /// Returns the item below this one, wrapping around to the top.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::StartGame => Self::HowToPlay,
            Self::HowToPlay => Self::Quit,
            Self::Quit => Self::StartGame,
        }
    }

    /// Returns the item above this one, wrapping around to the bottom.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::StartGame => Self::Quit,
            Self::HowToPlay => Self::StartGame,
            Self::Quit => Self::HowToPlay,
        }
    }

    /// Returns the label shown in the menu.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::HowToPlay => "How to Play",
            Self::Quit => "Quit",
        }
    }
}

/// Time and move budgets for a round.
///
/// The move budget is spent only when the player walks back onto the cell they just came from;
/// exploring new ground is free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    /// 45 seconds and 20 moves.
    #[default]
    Easy,
    /// 30 seconds and 10 moves.
    Medium,
    /// 20 seconds and 5 moves.
    Difficult,
}

impl Difficulty {
    /// Every difficulty, in display order.
    pub(crate) const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Difficult];

    /// Returns the time the player has once the maze is carved.
    #[must_use]
    pub const fn time_budget(self) -> Duration {
        match self {
            Self::Easy => Duration::from_secs(45),
            Self::Medium => Duration::from_secs(30),
            Self::Difficult => Duration::from_secs(20),
        }
    }

    /// Returns how many backtracking moves the player may make.
    #[must_use]
    pub const fn move_budget(self) -> u32 {
        match self {
            Self::Easy => 20,
            Self::Medium => 10,
            Self::Difficult => 5,
        }
    }

    /// Returns the label shown in the difficulty menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Difficult => "Difficult",
        }
    }

    /// Returns the difficulty below this one in the menu, wrapping around to the top.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Difficult,
            Self::Difficult => Self::Easy,
        }
    }

    /// Returns the difficulty above this one in the menu, wrapping around to the bottom.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Easy => Self::Difficult,
            Self::Medium => Self::Easy,
            Self::Difficult => Self::Medium,
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration.
    ///
    /// This variant represents the main menu in the game.
    MainMenu(u8),
    /// Difficulty menu configuration.
    ///
    /// This variant represents the difficulty menu in the game.
    DifficultyMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::DifficultyMenu(_) => "Difficulty",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::DifficultyMenu(value) => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::StartGame);
        let difficulty_menu = Screen::DifficultyMenu(Difficulty::Medium);

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::StartGame));
        assert_ne!(main_menu, Screen::MainMenu(MainMenuItem::Quit));
        assert_ne!(difficulty_menu, Screen::DifficultyMenu(Difficulty::Easy));
        assert_ne!(Screen::HowToPlay, Screen::InGame);
    }

    #[test]
    fn test_main_menu_navigation_wraps() {
        for item in MainMenuItem::ALL {
            assert_eq!(item.next().previous(), item);
        }

        assert_eq!(MainMenuItem::StartGame.next(), MainMenuItem::HowToPlay);
        assert_eq!(MainMenuItem::Quit.next(), MainMenuItem::StartGame);
        assert_eq!(MainMenuItem::StartGame.previous(), MainMenuItem::Quit);
    }

    #[test]
    fn test_main_menu_labels() {
        let labels: Vec<&str> = MainMenuItem::ALL.into_iter().map(MainMenuItem::label).collect();

        assert_eq!(labels, vec!["Start Game", "How to Play", "Quit"]);
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.time_budget(), Duration::from_secs(45));
        assert_eq!(Difficulty::Easy.move_budget(), 20);
        assert_eq!(Difficulty::Medium.time_budget(), Duration::from_secs(30));
        assert_eq!(Difficulty::Medium.move_budget(), 10);
        assert_eq!(Difficulty::Difficult.time_budget(), Duration::from_secs(20));
        assert_eq!(Difficulty::Difficult.move_budget(), 5);
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_navigation_wraps() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.previous().next(), difficulty);
        }

        assert_eq!(Difficulty::Difficult.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.previous(), Difficulty::Difficult);
    }

    #[test]
    fn test_difficulty_parses_from_cli_value() {
        let parsed = Difficulty::from_str("difficult", true).expect("value should parse");

        assert_eq!(parsed, Difficulty::Difficult);
        assert!(Difficulty::from_str("impossible", true).is_err());
    }

    #[test]
    fn test_menu_type_repr() {
        let main_menu = MenuType::MainMenu(3);
        let difficulty_menu = MenuType::DifficultyMenu(3);

        assert_eq!(main_menu.repr(), "Main Menu");
        assert_eq!(difficulty_menu.repr(), "Difficulty");
    }

    #[test]
    fn test_menu_type_value() {
        let main_menu = MenuType::MainMenu(3);
        let difficulty_menu = MenuType::DifficultyMenu(2);

        assert_eq!(main_menu.value(), 3);
        assert_eq!(difficulty_menu.value(), 2);
    }
}
