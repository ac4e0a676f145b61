//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the header search bar, borders included
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the category button bar, borders included
pub const CATEGORY_BAR_HEIGHT: u16 = 3;
/// Height of the card strip when the footer is extended
pub const LISTING_HEIGHT: u16 = 7;

/// Screen regions of the main view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppAreas {
    pub header: Rect,
    pub body: Rect,
    pub listing: Option<Rect>,
    pub category_bar: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Header, map body, optional listing, category bar and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect, show_listing: bool) -> AppAreas {
        let listing_height = if show_listing { LISTING_HEIGHT } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(listing_height),
                Constraint::Length(CATEGORY_BAR_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        AppAreas {
            header: chunks[0],
            body: chunks[1],
            listing: show_listing.then_some(chunks[2]),
            category_bar: chunks[3],
            status: chunks[4],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Number of fixed-width cards that fit in a strip
    #[must_use]
    pub fn cards_per_row(width: u16, card_width: u16) -> usize {
        if card_width == 0 {
            return 0;
        }
        usize::from((width / card_width).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_without_listing() {
        let areas = LayoutManager::main_layout(Rect::new(0, 0, 80, 24), false);
        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.status.y, 23);
        assert!(areas.listing.is_none());
        assert_eq!(areas.body.height, 24 - HEADER_HEIGHT - CATEGORY_BAR_HEIGHT - 1);
    }

    #[test]
    fn test_main_layout_with_listing() {
        let areas = LayoutManager::main_layout(Rect::new(0, 0, 80, 24), true);
        let listing = areas.listing.unwrap_or_default();
        assert_eq!(listing.height, LISTING_HEIGHT);
        assert_eq!(listing.y + listing.height, areas.category_bar.y);
    }

    #[test]
    fn test_cards_per_row() {
        assert_eq!(LayoutManager::cards_per_row(80, 26), 3);
        assert_eq!(LayoutManager::cards_per_row(10, 26), 1);
        assert_eq!(LayoutManager::cards_per_row(80, 0), 0);
    }
}
