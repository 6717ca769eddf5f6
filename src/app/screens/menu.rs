//! Main menu screen
//!
//! Lets the player start the quiz or look at the statistics.

use crate::app::state::Screen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Statistics,
}

impl MenuItem {
    pub fn all() -> [Self; 2] {
        [Self::Play, Self::Statistics]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Play => "Jugar",
            Self::Statistics => "Estadísticas",
        }
    }

    /// Screen opened by this entry
    pub fn target(&self) -> Screen {
        match self {
            Self::Play => Screen::Question,
            Self::Statistics => Screen::Statistics,
        }
    }
}

/// Main menu component
#[derive(Debug)]
pub struct MenuScreen {
    selected_index: usize,
    list_state: ListState,
}

impl MenuScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::all()[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        let len = MenuItem::all().len();
        self.selected_index = (self.selected_index + len - 1) % len;
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % MenuItem::all().len();
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the main menu
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(4),    // Menu entries
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new("Menú Principal")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, chunks[0]);

        self.render_menu(f, chunks[1]);
        Self::render_help(f, chunks[2]);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = MenuItem::all()
            .iter()
            .map(|item| ListItem::new(item.label()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", key),
            Span::raw(" Navigate  "),
            Span::styled("Enter", key),
            Span::raw(" Select  "),
            Span::styled("Q", key),
            Span::raw(" Quit"),
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

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
