//! Main application controller
//!
//! Owns the navigator, the screens and the statistics store, and ties the
//! question session lifecycle to navigation: entering the question screen
//! starts a fresh session, leaving it records the session outcome.

use crate::{
    app::{
        screens::{MenuScreen, QuestionScreen, StatisticsScreen},
        state::{NavigationAction, Navigator, Screen},
        tui::Tui,
    },
    config::QuizConfig,
    models::QuestionSet,
    stats::StatisticsStore,
    Result,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use tracing::{debug, info, warn};

/// TUI application controller
pub struct App {
    config: QuizConfig,
    navigator: Navigator,
    statistics: StatisticsStore,
    questions: QuestionSet,
    menu_screen: MenuScreen,
    /// Present only while the question screen is shown
    question_screen: Option<QuestionScreen>,
    statistics_screen: StatisticsScreen,
}

impl App {
    /// Create the application, opening the configured start screen
    pub fn new(config: QuizConfig, statistics: StatisticsStore) -> Result<Self> {
        let start = config.start_screen()?;
        let mut app = Self {
            config,
            navigator: Navigator::starting_at(start),
            statistics,
            questions: QuestionSet::builtin(),
            menu_screen: MenuScreen::new(),
            question_screen: None,
            statistics_screen: StatisticsScreen::new(),
        };
        app.enter(start);
        Ok(app)
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn should_quit(&self) -> bool {
        self.navigator.should_quit()
    }

    pub fn statistics(&self) -> &StatisticsStore {
        &self.statistics
    }

    pub fn question_screen(&self) -> Option<&QuestionScreen> {
        self.question_screen.as_ref()
    }

    pub fn question_screen_mut(&mut self) -> Option<&mut QuestionScreen> {
        self.question_screen.as_mut()
    }

    pub fn statistics_screen(&self) -> &StatisticsScreen {
        &self.statistics_screen
    }

    /// Navigate to `screen`
    pub fn go_to(&mut self, screen: Screen) {
        let from = self.navigator.current();
        if self.navigator.go_to(screen) {
            self.leave(from);
            self.enter(screen);
        }
    }

    /// Navigate back; quits when there is nowhere to go
    pub fn go_back(&mut self) {
        let from = self.navigator.current();
        self.navigator.go_back();
        if self.navigator.should_quit() {
            self.shutdown();
            return;
        }
        let to = self.navigator.current();
        if to != from {
            info!(from = %from, to = %to, "navigate back");
            self.leave(from);
            self.enter(to);
        }
    }

    /// Quit, closing the open screen first
    pub fn quit(&mut self) {
        self.navigator.quit();
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.close_question_screen();
    }

    fn enter(&mut self, screen: Screen) {
        info!(screen = %screen, "enter screen");
        match screen {
            Screen::MainMenu => {}
            Screen::Question => {
                self.question_screen = Some(QuestionScreen::new(self.questions));
            }
            Screen::Statistics => self.statistics_screen.refresh(&self.statistics),
        }
    }

    fn leave(&mut self, screen: Screen) {
        if screen == Screen::Question {
            self.close_question_screen();
        }
    }

    fn close_question_screen(&mut self) {
        let Some(screen) = self.question_screen.take() else {
            return;
        };
        match screen.close(&self.statistics, self.config.exit_recording) {
            Ok(Some(stats)) => debug!(
                correct = stats.correct,
                incorrect = stats.incorrect,
                total = stats.total,
                "session outcome recorded"
            ),
            Ok(None) => debug!("session ended without an answer, nothing recorded"),
            Err(err) => warn!(error = %err, "session outcome was not recorded"),
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = Navigator::key_to_navigation(key);

        // Global key handling
        match action {
            NavigationAction::Quit => {
                self.quit();
                return;
            }
            NavigationAction::Back => {
                self.go_back();
                return;
            }
            _ => {}
        }

        match self.navigator.current() {
            Screen::MainMenu => self.handle_menu_key(action),
            Screen::Question => self.handle_question_key(key, action),
            Screen::Statistics => self.handle_statistics_key(key, action),
        }
    }

    fn handle_menu_key(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.menu_screen.select_previous(),
            NavigationAction::Down => self.menu_screen.select_next(),
            NavigationAction::Select => {
                let target = self.menu_screen.selected_item().target();
                self.go_to(target);
            }
            _ => {}
        }
    }

    fn handle_question_key(&mut self, key: KeyEvent, action: NavigationAction) {
        match key.code {
            KeyCode::Char('m') | KeyCode::Char('M') => return self.go_to(Screen::MainMenu),
            KeyCode::Char('s') | KeyCode::Char('S') => return self.go_to(Screen::Statistics),
            _ => {}
        }

        let Some(screen) = self.question_screen.as_mut() else {
            return;
        };
        match (key.code, action) {
            (KeyCode::Char('t') | KeyCode::Char('T'), _) => {
                screen.select(true);
            }
            (KeyCode::Char('f') | KeyCode::Char('F'), _) => {
                screen.select(false);
            }
            (KeyCode::Char('r') | KeyCode::Char('R'), _) => screen.session_mut().random(),
            (_, NavigationAction::Up | NavigationAction::Down) => screen.toggle_focus(),
            (_, NavigationAction::Select) => {
                screen.select_focused();
            }
            (_, NavigationAction::Left) => screen.session_mut().prev(),
            (_, NavigationAction::Right) => screen.session_mut().next(),
            _ => {}
        }
    }

    fn handle_statistics_key(&mut self, key: KeyEvent, action: NavigationAction) {
        if action == NavigationAction::Select || matches!(key.code, KeyCode::Char('m' | 'M')) {
            self.go_to(Screen::MainMenu);
        }
    }

    /// Draw the current screen
    pub fn draw(&mut self, f: &mut Frame) {
        match self.navigator.current() {
            Screen::MainMenu => self.menu_screen.render(f),
            Screen::Question => {
                if let Some(screen) = &self.question_screen {
                    screen.render(f);
                }
            }
            Screen::Statistics => self.statistics_screen.render(f),
        }
    }

    /// Run the main application loop until the user quits
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        while !self.should_quit() {
            tui.draw(|f| self.draw(f))?;
            if let Some(key) = tui.next_key()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExitRecording;
    use crate::models::Statistics;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app_with(config: QuizConfig) -> App {
        App::new(config, StatisticsStore::in_memory()).unwrap()
    }

    fn stats(app: &App) -> Statistics {
        app.statistics().read().unwrap()
    }

    #[test]
    fn test_starts_at_main_menu() {
        let app = app_with(QuizConfig::default());
        assert_eq!(app.current_screen(), Screen::MainMenu);
        assert!(app.question_screen().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_configured_start_screen() {
        let app = app_with(QuizConfig::default().with_start_screen(Screen::Question));
        assert_eq!(app.current_screen(), Screen::Question);
        assert!(app.question_screen().is_some());
    }

    #[test]
    fn test_correct_answer_recorded_on_exit() {
        let mut app = app_with(QuizConfig::default());
        app.go_to(Screen::Question);
        let correct = app.question_screen_mut().unwrap().select(true);
        assert!(correct);
        assert_eq!(stats(&app), Statistics::default());

        app.go_to(Screen::MainMenu);
        assert_eq!(stats(&app), Statistics::new(1, 0));
        assert!(app.question_screen().is_none());
    }

    #[test]
    fn test_statistics_screen_includes_flushed_outcome() {
        let mut app = app_with(QuizConfig::default());
        app.go_to(Screen::Question);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.current_screen(), Screen::Statistics);
        assert_eq!(*app.statistics_screen().statistics(), Statistics::new(0, 1));
    }

    #[test]
    fn test_unanswered_exit_records_default_outcome() {
        let mut app = app_with(QuizConfig::default());
        app.go_to(Screen::Question);
        app.go_to(Screen::MainMenu);
        assert_eq!(stats(&app), Statistics::new(0, 1));
    }

    #[test]
    fn test_unanswered_exit_answered_only() {
        let mut app =
            app_with(QuizConfig::default().with_exit_recording(ExitRecording::AnsweredOnly));
        app.go_to(Screen::Question);
        app.go_to(Screen::MainMenu);
        assert_eq!(stats(&app), Statistics::default());
    }

    #[test]
    fn test_each_visit_records_once() {
        let mut app = app_with(QuizConfig::default());
        for _ in 0..3 {
            app.go_to(Screen::Question);
            press(&mut app, KeyCode::Char('t'));
            press(&mut app, KeyCode::Char('f'));
            press(&mut app, KeyCode::Char('t'));
            app.go_to(Screen::MainMenu);
        }
        assert_eq!(stats(&app), Statistics::new(3, 0));
    }

    #[test]
    fn test_new_visit_starts_fresh_session() {
        let mut app = app_with(QuizConfig::default());
        app.go_to(Screen::Question);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.question_screen().unwrap().session().current_index(), 2);

        app.go_to(Screen::MainMenu);
        app.go_to(Screen::Question);
        let session = app.question_screen().unwrap().session();
        assert_eq!(session.current_index(), 0);
        assert!(!session.has_answered());
    }

    #[test]
    fn test_question_keys() {
        let mut app = app_with(QuizConfig::default());
        app.go_to(Screen::Question);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.question_screen().unwrap().session().current_index(), 4);

        press(&mut app, KeyCode::Down);
        assert!(!app.question_screen().unwrap().focused_answer());
        press(&mut app, KeyCode::Enter);
        // "¿La luna es un planeta?" is false
        assert!(app.question_screen().unwrap().session().last_outcome_correct());

        press(&mut app, KeyCode::Char('r'));
        let session = app.question_screen().unwrap().session();
        assert!(session.current_index() < 5);
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn test_menu_keys() {
        let mut app = app_with(QuizConfig::default());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), Screen::Statistics);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), Screen::MainMenu);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), Screen::Question);
    }

    #[test]
    fn test_back_from_question_records() {
        let mut app = app_with(QuizConfig::default());
        app.go_to(Screen::Question);
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.current_screen(), Screen::MainMenu);
        assert_eq!(stats(&app), Statistics::new(1, 0));

        // back from the main menu quits
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_flushes_open_session() {
        let mut app = app_with(QuizConfig::default());
        app.go_to(Screen::Question);
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('q'));

        assert!(app.should_quit());
        assert!(app.question_screen().is_none());
        assert_eq!(stats(&app), Statistics::new(1, 0));
    }
}
