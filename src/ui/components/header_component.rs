use crate::constants::SEARCH_PLACEHOLDER;
use crate::icons::IconService;
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Search bar across the top of the screen
pub struct HeaderComponent {
    pub input: TextInput,
    editing: bool,
    /// Term of the last submitted search, shown while not editing
    active_term: Option<String>,
    pub icons: IconService,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            editing: false,
            active_term: None,
            icons: IconService::default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn search_term(&self) -> &str {
        self.input.value()
    }

    fn start_editing(&mut self) {
        self.editing = true;
    }

    fn stop_editing(&mut self) {
        self.editing = false;
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.editing {
            return match key.code {
                KeyCode::Enter => {
                    self.stop_editing();
                    Action::SearchResources(self.input.value().trim().to_string())
                }
                KeyCode::Esc => {
                    self.stop_editing();
                    Action::None
                }
                _ => {
                    self.input.handle_key(key);
                    Action::None
                }
            };
        }

        match key.code {
            KeyCode::Char('/') => {
                self.start_editing();
                Action::None
            }
            KeyCode::Char('d') => Action::GetDirections,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::SearchResources(term) => {
                self.active_term = (!term.is_empty()).then(|| term.clone());
            }
            // A category or the full list replaces any search results
            Action::FilterResources { filter: Some(_), .. } | Action::ShowAllResources => {
                self.active_term = None;
                self.input.clear();
            }
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.editing { Color::Yellow } else { Color::Gray };

        let content = if self.editing {
            Line::from(vec![
                Span::raw(format!("{} ", self.icons.search())),
                Span::styled(self.input.value().to_string(), Style::default().fg(Color::White)),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ])
        } else if let Some(term) = &self.active_term {
            Line::from(vec![
                Span::raw(format!("{} ", self.icons.search())),
                Span::styled(term.clone(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            ])
        } else {
            Line::from(Span::styled(
                format!("{} {}", self.icons.search(), SEARCH_PLACEHOLDER),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} Beachcomber ", self.icons.map_title()))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(border_color));

        f.render_widget(Paragraph::new(content).block(block), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_search_submits_trimmed_term() {
        let mut header = HeaderComponent::new();
        header.handle_key_events(key(KeyCode::Char('/')));
        assert!(header.is_editing());

        for c in " reef ".chars() {
            header.handle_key_events(key(KeyCode::Char(c)));
        }
        match header.handle_key_events(key(KeyCode::Enter)) {
            Action::SearchResources(term) => assert_eq!(term, "reef"),
            other => panic!("expected search, got {:?}", other),
        }
        assert!(!header.is_editing());
    }

    #[test]
    fn test_directions_only_outside_editing() {
        let mut header = HeaderComponent::new();
        assert!(matches!(header.handle_key_events(key(KeyCode::Char('d'))), Action::GetDirections));

        header.handle_key_events(key(KeyCode::Char('/')));
        assert!(matches!(header.handle_key_events(key(KeyCode::Char('d'))), Action::None));
        assert_eq!(header.search_term(), "d");
    }

    #[test]
    fn test_escape_cancels_editing() {
        let mut header = HeaderComponent::new();
        header.handle_key_events(key(KeyCode::Char('/')));
        assert!(matches!(header.handle_key_events(key(KeyCode::Esc)), Action::None));
        assert!(!header.is_editing());
    }
}
