use crate::entities::CategoryFilter;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Footer with one button per category
pub struct CategoryBarComponent {
    active: Option<CategoryFilter>,
    extended: bool,
    pub icons: IconService,
}

impl Default for CategoryBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryBarComponent {
    pub fn new() -> Self {
        Self {
            active: None,
            extended: false,
            icons: IconService::default(),
        }
    }

    pub fn active(&self) -> Option<CategoryFilter> {
        self.active
    }

    /// Whether the footer is extended to reveal the resource cards
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    fn filter_for_key(c: char) -> Option<CategoryFilter> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        CategoryFilter::ALL.get(index as usize).copied()
    }

    fn render_button(&self, f: &mut Frame, rect: Rect, index: usize, filter: CategoryFilter) {
        let is_active = self.active == Some(filter);
        let (fg, modifier) = if is_active {
            (Color::Yellow, Modifier::BOLD)
        } else {
            (Color::Gray, Modifier::empty())
        };

        let line = Line::from(vec![
            Span::styled(format!("{} ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{} ", self.icons.category(filter))),
            Span::styled(filter.title(), Style::default().fg(fg).add_modifier(modifier)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(fg));

        f.render_widget(Paragraph::new(line).alignment(Alignment::Center).block(block), rect);
    }
}

impl Component for CategoryBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('0') => Action::ShowAllResources,
            KeyCode::Char('x') => Action::ToggleListing,
            KeyCode::Char(c) => match Self::filter_for_key(c) {
                Some(filter) => Action::CategorySelected(filter),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::FilterResources { filter, .. } => self.active = *filter,
            Action::ToggleListing => self.extended = !self.extended,
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rect);

        for (index, filter) in CategoryFilter::ALL.into_iter().enumerate() {
            self.render_button(f, chunks[index], index, filter);
        }
    }
}
