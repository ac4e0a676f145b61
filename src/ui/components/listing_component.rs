use crate::constants::DEFAULT_MEDIA_BASE_URL;
use crate::entities::Resource;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 28;

/// Horizontal strip of resource cards for the current view
pub struct ListingComponent {
    resources: Vec<Resource>,
    view_label: String,
    /// Index of the leftmost visible card
    offset: usize,
    extended: bool,
    highlighted_id: Option<String>,
    /// Term of a search whose results have not arrived yet
    pending_search: Option<String>,
    media_base_url: String,
    pub icons: IconService,
}

impl Default for ListingComponent {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_BASE_URL)
    }
}

impl ListingComponent {
    pub fn new(media_base_url: &str) -> Self {
        Self {
            resources: Vec::new(),
            view_label: "All".to_string(),
            offset: 0,
            extended: false,
            highlighted_id: None,
            pending_search: None,
            media_base_url: media_base_url.to_string(),
            icons: IconService::default(),
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn view_label(&self) -> &str {
        &self.view_label
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn set_resources(&mut self, label: &str, resources: Vec<Resource>) {
        self.view_label = label.to_string();
        self.resources = resources;
        self.offset = 0;
    }

    fn scroll_left(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    fn scroll_right(&mut self) {
        if self.offset + 1 < self.resources.len() {
            self.offset += 1;
        }
    }

    /// Name and media URL lines of one card
    pub fn card_lines(&self, resource: &Resource) -> Vec<Line<'static>> {
        let image_line = match resource.image_url(&self.media_base_url) {
            Some(url) => Line::from(vec![
                Span::raw(format!("{} ", self.icons.image())),
                Span::styled(url, Style::default().fg(Color::Blue)),
            ]),
            None => Line::from(Span::styled("no image", Style::default().fg(Color::DarkGray))),
        };

        vec![
            Line::from(Span::styled(
                resource.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            image_line,
        ]
    }

    fn render_card(&self, f: &mut Frame, rect: Rect, resource: &Resource) {
        let highlighted = self.highlighted_id.as_deref() == Some(resource.id.as_str());
        let border_color = if highlighted { Color::Yellow } else { Color::Gray };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color));

        let card = Paragraph::new(self.card_lines(resource))
            .block(block)
            .wrap(Wrap { trim: true });

        f.render_widget(card, rect);
    }
}

impl Component for ListingComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.extended {
            return Action::None;
        }

        match key.code {
            KeyCode::Left => {
                self.scroll_left();
                Action::None
            }
            KeyCode::Right => {
                self.scroll_right();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::SearchResources(term) => {
                self.pending_search = (!term.is_empty()).then(|| term.clone());
            }
            Action::FilterResources { filter, resources } => {
                let label = match (filter, self.pending_search.take()) {
                    (Some(filter), _) => filter.title().to_string(),
                    (None, Some(term)) => format!("Search: {}", term),
                    (None, None) => "All".to_string(),
                };
                self.set_resources(&label, resources.clone());
            }
            Action::ToggleListing => self.extended = !self.extended,
            Action::MarkerSelected(id) => {
                self.highlighted_id = id.clone();
                if let Some(index) = id
                    .as_deref()
                    .and_then(|id| self.resources.iter().position(|r| r.id == id))
                {
                    self.offset = index;
                }
            }
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(
            " {} {} ({}) ",
            self.icons.listing_title(),
            self.view_label,
            self.resources.len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if self.resources.is_empty() {
            let empty = Paragraph::new("Nothing to show").style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, inner);
            return;
        }

        let per_row = LayoutManager::cards_per_row(inner.width, CARD_WIDTH);
        let visible: Vec<&Resource> = self.resources.iter().skip(self.offset).take(per_row).collect();
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CARD_WIDTH); per_row])
            .split(inner);

        for (slot, resource) in slots.iter().zip(visible) {
            self.render_card(f, *slot, resource);
        }
    }
}
