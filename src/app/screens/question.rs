//! Question screen implementation
//!
//! Shows the current question with TRUE/FALSE answers and the PREV, NEXT
//! and RANDOM controls. The screen owns a `QuizSession` for as long as it
//! is open; closing it consumes the screen and records the outcome.

use crate::config::ExitRecording;
use crate::models::{AnswerState, QuestionSet, QuizSession, Statistics};
use crate::stats::StatisticsStore;
use crate::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const CORRECT_MESSAGE: &str = "¡Correcto!";
pub const INCORRECT_MESSAGE: &str = "Incorrecto";

/// Question screen component
#[derive(Debug)]
pub struct QuestionScreen {
    session: QuizSession,
    focused_answer: bool,
}

impl QuestionScreen {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            session: QuizSession::new(questions),
            focused_answer: true,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    /// Answer button that Enter would press
    pub fn focused_answer(&self) -> bool {
        self.focused_answer
    }

    pub fn toggle_focus(&mut self) {
        self.focused_answer = !self.focused_answer;
    }

    pub fn select(&mut self, answer: bool) -> bool {
        self.focused_answer = answer;
        self.session.select(answer)
    }

    pub fn select_focused(&mut self) -> bool {
        self.select(self.focused_answer)
    }

    /// Leave the screen, recording the session outcome per `policy`
    pub fn close(self, store: &StatisticsStore, policy: ExitRecording) -> Result<Option<Statistics>> {
        match self.session.outcome_on_exit(policy) {
            Some(is_correct) => store.record(is_correct).map(Some),
            None => Ok(None),
        }
    }

    /// Render the question screen
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress
                Constraint::Min(3),    // Image placeholder
                Constraint::Length(4), // Question text
                Constraint::Length(3), // TRUE
                Constraint::Length(3), // FALSE
                Constraint::Length(1), // Result message
                Constraint::Length(3), // Controls
            ])
            .split(f.size());

        self.render_title(f, chunks[0]);
        self.render_image(f, chunks[1]);
        self.render_text(f, chunks[2]);
        self.render_answer(f, chunks[3], true);
        self.render_answer(f, chunks[4], false);
        self.render_message(f, chunks[5]);
        Self::render_controls(f, chunks[6]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(format!(
            "Pregunta {}/{}",
            self.session.current_index() + 1,
            self.session.question_count()
        ))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_image(&self, f: &mut Frame, area: Rect) {
        let image = Paragraph::new(format!("[{}]", self.session.current_question().image))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(image, area);
    }

    fn render_text(&self, f: &mut Frame, area: Rect) {
        let text = Paragraph::new(self.session.current_question().text)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(text, area);
    }

    fn render_answer(&self, f: &mut Frame, area: Rect, answer: bool) {
        let label = if answer { "TRUE" } else { "FALSE" };
        let style = match self.session.state() {
            AnswerState::AnswerShown {
                answer: chosen,
                correct,
            } if chosen == answer => {
                let color = if correct { Color::Green } else { Color::Red };
                Style::default().bg(color).fg(Color::White)
            }
            _ => Style::default().fg(Color::Cyan),
        };
        let border = if self.focused_answer == answer {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(button, area);
    }

    fn render_message(&self, f: &mut Frame, area: Rect) {
        if let AnswerState::AnswerShown { correct, .. } = self.session.state() {
            let (message, color) = if correct {
                (CORRECT_MESSAGE, Color::Green)
            } else {
                (INCORRECT_MESSAGE, Color::Red)
            };
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
        }
    }

    fn render_controls(f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("T/F", key),
            Span::raw(" Answer  "),
            Span::styled("←", key),
            Span::raw(" PREV  "),
            Span::styled("→", key),
            Span::raw(" NEXT  "),
            Span::styled("R", key),
            Span::raw(" RANDOM  "),
            Span::styled("M", key),
            Span::raw(" Menú Principal  "),
            Span::styled("S", key),
            Span::raw(" Estadísticas"),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(help, area);
    }
}

impl Default for QuestionScreen {
    fn default() -> Self {
        Self::new(QuestionSet::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(screen: &QuestionScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
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
    fn test_focus_and_select() {
        let mut screen = QuestionScreen::default();
        assert!(screen.focused_answer());

        screen.toggle_focus();
        assert!(!screen.focused_answer());
        // "¿Es el cielo azul?" is true
        assert!(!screen.select_focused());

        assert!(screen.select(true));
        assert!(screen.focused_answer());
        assert!(screen.session().last_outcome_correct());
    }

    #[test]
    fn test_close_records_once() {
        let store = StatisticsStore::in_memory();
        let mut screen = QuestionScreen::default();
        screen.select(true);

        let stats = screen.close(&store, ExitRecording::LastOutcome).unwrap();
        assert_eq!(stats, Some(Statistics::new(1, 0)));
        assert_eq!(store.read().unwrap(), Statistics::new(1, 0));
    }

    #[test]
    fn test_close_unanswered() {
        let store = StatisticsStore::in_memory();

        QuestionScreen::default()
            .close(&store, ExitRecording::AnsweredOnly)
            .unwrap();
        assert_eq!(store.read().unwrap(), Statistics::default());

        QuestionScreen::default()
            .close(&store, ExitRecording::LastOutcome)
            .unwrap();
        assert_eq!(store.read().unwrap(), Statistics::new(0, 1));
    }

    #[test]
    fn test_render_question() {
        let mut screen = QuestionScreen::default();
        let text = rendered_text(&screen);
        assert!(text.contains("Pregunta 1/5"));
        assert!(text.contains("¿Es el cielo azul?"));
        assert!(text.contains("[image1]"));
        assert!(text.contains("TRUE"));
        assert!(text.contains("FALSE"));
        assert!(!text.contains(CORRECT_MESSAGE));

        screen.select(true);
        assert!(rendered_text(&screen).contains(CORRECT_MESSAGE));

        screen.session_mut().next();
        screen.select(true);
        let text = rendered_text(&screen);
        assert!(text.contains("Pregunta 2/5"));
        assert!(text.contains(INCORRECT_MESSAGE));
    }
}
