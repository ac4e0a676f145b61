use beachcomber::entities::CategoryFilter;
use beachcomber::icons::*;

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_cycle_returns_to_start() {
    let mut service = IconService::default();
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Unicode);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Emoji);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.marker(), "o");
    assert_eq!(service.selected_marker(), "@");
    assert_eq!(service.category(CategoryFilter::Accomodation), "H");
    assert_eq!(service.category(CategoryFilter::More), "+");
}

#[test]
fn test_emoji_icons() {
    let service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.marker(), "📍");
    assert_eq!(service.selected_marker(), "📌");
    assert_eq!(service.category(CategoryFilter::Accomodation), "🏨");
}

#[test]
fn test_every_category_has_an_icon() {
    for theme in [IconTheme::Ascii, IconTheme::Unicode, IconTheme::Emoji] {
        let service = IconService::new(theme);
        for filter in CategoryFilter::ALL {
            assert!(!service.category(filter).is_empty(), "{:?} missing icon for {}", theme, filter);
        }
    }
}
