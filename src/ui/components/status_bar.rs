//! Status bar component

use crate::constants::STATUS_HINTS;
use crate::ui::app_component::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for the current state, most urgent first
    pub fn status_text(state: &AppState) -> String {
        if state.loading {
            "Loading resources...".to_string()
        } else if let Some(error) = &state.error_message {
            format!("{} • r: retry", error)
        } else if let Some(info) = &state.info_message {
            info.clone()
        } else {
            STATUS_HINTS.to_string()
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let status_color = if state.loading {
            Color::Yellow
        } else if state.error_message.is_some() {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(Self::status_text(state))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
