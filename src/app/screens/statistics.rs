//! Statistics screen implementation
//!
//! Displays the persisted Aciertos/Fallos/Total counters.

use crate::error::user_friendly_message;
use crate::models::Statistics;
use crate::stats::StatisticsStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::warn;

/// Statistics screen component
#[derive(Debug, Default)]
pub struct StatisticsScreen {
    statistics: Statistics,
    error: Option<String>,
}

impl StatisticsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the counters from `store`
    pub fn refresh(&mut self, store: &StatisticsStore) {
        match store.read() {
            Ok(statistics) => {
                self.statistics = statistics;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "failed to read statistics");
                self.statistics = Statistics::default();
                self.error = Some(user_friendly_message(&err));
            }
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Render the statistics screen
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Counters
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        let title = Paragraph::new("Estadísticas")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        self.render_counters(f, chunks[1]);

        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", key),
            Span::raw(" Menú Principal  "),
            Span::styled("Q", key),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[2]);
    }

    fn render_counters(&self, f: &mut Frame, area: Rect) {
        let lines = match &self.error {
            Some(message) => vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))],
            None => vec![
                Line::from(vec![
                    Span::raw("Aciertos: "),
                    Span::styled(
                        self.statistics.correct.to_string(),
                        Style::default().fg(Color::Green),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("Fallos: "),
                    Span::styled(
                        self.statistics.incorrect.to_string(),
                        Style::default().fg(Color::Red),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("Total: "),
                    Span::styled(
                        self.statistics.total.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
            ],
        };

        let counters = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(counters, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::persistence::Preferences;
    use crate::{QuizError, Result};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(screen: &StatisticsScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_refresh_and_render() {
        let store = StatisticsStore::in_memory();
        store.record(true).unwrap();
        store.record(true).unwrap();
        store.record(false).unwrap();

        let mut screen = StatisticsScreen::new();
        screen.refresh(&store);
        assert_eq!(*screen.statistics(), Statistics::new(2, 1));
        assert!(screen.error().is_none());

        let text = rendered_text(&screen);
        assert!(text.contains("Estadísticas"));
        assert!(text.contains("Aciertos: 2"));
        assert!(text.contains("Fallos: 1"));
        assert!(text.contains("Total: 3"));
    }

    #[test]
    fn test_fresh_store_shows_zeros() {
        let mut screen = StatisticsScreen::new();
        screen.refresh(&StatisticsStore::in_memory());
        let text = rendered_text(&screen);
        assert!(text.contains("Aciertos: 0"));
        assert!(text.contains("Total: 0"));
    }

    #[test]
    fn test_read_failure_shows_message() {
        struct Broken;
        impl Preferences for Broken {
            fn get_int(&self, _key: &str, _default: u64) -> Result<u64> {
                Err(QuizError::PersistenceError("corrupt".to_string()))
            }
            fn put_ints(&mut self, _entries: &[(&str, u64)]) -> Result<()> {
                Ok(())
            }
        }

        let mut screen = StatisticsScreen::new();
        screen.refresh(&StatisticsStore::new(Broken));
        assert!(screen.error().is_some());
        assert_eq!(*screen.statistics(), Statistics::default());
    }
}
