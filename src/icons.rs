//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use crate::entities::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Category button icons
#[derive(Debug, Clone)]
pub struct CategoryIcons {
    pub stays: &'static str,
    pub attractions: &'static str,
    pub services: &'static str,
    pub more: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub map_title: &'static str,
    pub listing_title: &'static str,
    pub search: &'static str,
    pub directions: &'static str,
    pub image: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

/// Map marker glyphs
#[derive(Debug, Clone)]
pub struct MarkerIcons {
    pub marker: &'static str,
    pub selected: &'static str,
    pub loading: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub category: CategoryIcons,
    pub ui: UiIcons,
    pub marker: MarkerIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            category: CategoryIcons {
                stays: "🏨",
                attractions: "🏝️",
                services: "🔧",
                more: "➕",
            },
            ui: UiIcons {
                map_title: "🗺️",
                listing_title: "📋",
                search: "🔍",
                directions: "🧭",
                image: "🖼️",
                error: "❌",
                info: "💡",
            },
            marker: MarkerIcons {
                marker: "📍",
                selected: "📌",
                loading: "🔄",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            category: CategoryIcons {
                stays: "⌂",
                attractions: "★",
                services: "⚙",
                more: "…",
            },
            ui: UiIcons {
                map_title: "◈",
                listing_title: "▤",
                search: "⌕",
                directions: "➤",
                image: "▣",
                error: "✗",
                info: "ⓘ",
            },
            marker: MarkerIcons {
                marker: "●",
                selected: "◉",
                loading: "⟳",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            category: CategoryIcons {
                stays: "H",
                attractions: "A",
                services: "S",
                more: "+",
            },
            ui: UiIcons {
                map_title: "#",
                listing_title: "=",
                search: "?",
                directions: ">",
                image: "[img]",
                error: "X",
                info: "i",
            },
            marker: MarkerIcons {
                marker: "o",
                selected: "@",
                loading: "...",
            },
        }
    }

    /// Icon for a category filter button
    #[must_use]
    pub fn category(&self, filter: CategoryFilter) -> &'static str {
        let icons = self.icons().category;
        match filter {
            CategoryFilter::Accomodation => icons.stays,
            CategoryFilter::Attraction => icons.attractions,
            CategoryFilter::Services => icons.services,
            CategoryFilter::More => icons.more,
        }
    }

    #[must_use]
    pub fn marker(&self) -> &'static str {
        self.icons().marker.marker
    }

    #[must_use]
    pub fn selected_marker(&self) -> &'static str {
        self.icons().marker.selected
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().marker.loading
    }

    #[must_use]
    pub fn map_title(&self) -> &'static str {
        self.icons().ui.map_title
    }

    #[must_use]
    pub fn listing_title(&self) -> &'static str {
        self.icons().ui.listing_title
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().ui.search
    }

    #[must_use]
    pub fn directions(&self) -> &'static str {
        self.icons().ui.directions
    }

    #[must_use]
    pub fn image(&self) -> &'static str {
        self.icons().ui.image
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_category_icons_per_theme() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.category(CategoryFilter::Accomodation), "H");
        assert_eq!(service.category(CategoryFilter::More), "+");

        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.category(CategoryFilter::Attraction), "🏝️");
    }

    #[test]
    fn test_marker_icons() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.marker(), "●");
        assert_eq!(service.selected_marker(), "◉");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
