//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event processing
//! for the TUI application.

use crate::{QuizError, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::str::FromStr;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Main menu with Jugar and Estadísticas
    #[default]
    MainMenu,
    /// True/false question screen
    Question,
    /// Cumulative statistics
    Statistics,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::MainMenu, Screen::Question, Screen::Statistics];

    /// Route id of the screen
    pub fn route(&self) -> &'static str {
        match self {
            Screen::MainMenu => "MainMenu",
            Screen::Question => "question",
            Screen::Statistics => "statistics",
        }
    }

    /// Screen for an exact, case-sensitive route id
    pub fn from_route(route: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.route() == route)
            .ok_or_else(|| QuizError::UnknownRoute(route.to_string()))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Screen {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_route(s)
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Screen navigator
#[derive(Debug)]
pub struct Navigator {
    current: Screen,
    previous: Option<Screen>,
    should_quit: bool,
}

impl Navigator {
    /// Create a navigator starting at the main menu
    pub fn new() -> Self {
        Self::starting_at(Screen::MainMenu)
    }

    pub fn starting_at(screen: Screen) -> Self {
        Self {
            current: screen,
            previous: None,
            should_quit: false,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn previous(&self) -> Option<Screen> {
        self.previous
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move to `screen`; returns false if it is already current
    pub fn go_to(&mut self, screen: Screen) -> bool {
        if screen == self.current {
            return false;
        }
        self.previous = Some(self.current);
        self.current = screen;
        true
    }

    /// Return to the previous screen, or the main menu if there is none.
    /// Going back from the main menu quits.
    pub fn go_back(&mut self) {
        match self.previous.take() {
            Some(prev) => self.current = prev,
            None if self.current == Screen::MainMenu => self.should_quit = true,
            None => self.current = Screen::MainMenu,
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigator_creation() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), Screen::MainMenu);
        assert!(!navigator.should_quit());
        assert!(navigator.previous().is_none());
    }

    #[test]
    fn test_go_to() {
        let mut navigator = Navigator::new();

        assert!(navigator.go_to(Screen::Question));
        assert_eq!(navigator.current(), Screen::Question);
        assert_eq!(navigator.previous(), Some(Screen::MainMenu));

        assert!(navigator.go_to(Screen::Statistics));
        assert_eq!(navigator.current(), Screen::Statistics);
        assert_eq!(navigator.previous(), Some(Screen::Question));

        // same screen is a no-op
        assert!(!navigator.go_to(Screen::Statistics));
        assert_eq!(navigator.previous(), Some(Screen::Question));
    }

    #[test]
    fn test_go_back() {
        let mut navigator = Navigator::new();
        navigator.go_to(Screen::Statistics);
        navigator.go_back();
        assert_eq!(navigator.current(), Screen::MainMenu);
        assert!(navigator.previous().is_none());
        assert!(!navigator.should_quit());

        // back from the main menu with no history quits
        navigator.go_back();
        assert!(navigator.should_quit());
    }

    #[test]
    fn test_go_back_without_history_returns_to_menu() {
        let mut navigator = Navigator::starting_at(Screen::Statistics);
        navigator.go_back();
        assert_eq!(navigator.current(), Screen::MainMenu);
        assert!(!navigator.should_quit());
    }

    #[test]
    fn test_routes() {
        assert_eq!(Screen::MainMenu.route(), "MainMenu");
        assert_eq!(Screen::Question.route(), "question");
        assert_eq!(Screen::Statistics.route(), "statistics");

        for screen in Screen::ALL {
            assert_eq!(Screen::from_route(screen.route()).unwrap(), screen);
            assert_eq!(screen.to_string().parse::<Screen>().unwrap(), screen);
        }
    }

    #[test]
    fn test_routes_are_case_sensitive() {
        assert!(matches!(
            Screen::from_route("mainmenu"),
            Err(QuizError::UnknownRoute(_))
        ));
        assert!(Screen::from_route("Question").is_err());
        assert!(Screen::from_route(" statistics").is_err());
        assert!(Screen::from_route("").is_err());
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            NavigationAction::Right
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE)),
            NavigationAction::None
        );
    }
}
