use crate::constants::NOT_FOUND_TITLE;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Static page shown for any path other than the map
#[derive(Default)]
pub struct NotFoundComponent {
    path: String,
}

impl NotFoundComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Component for NotFoundComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Back to the map
            KeyCode::Enter | KeyCode::Backspace => Action::Navigate("/".to_string()),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                NOT_FOUND_TITLE,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(self.path.clone(), Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to return to the map",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center).block(block), rect);
    }
}
