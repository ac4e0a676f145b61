use async_trait::async_trait;
use beachcomber::api::{parse_resources, ApiError, FetchOutcome, ResourceSource};
use beachcomber::config::Config;
use beachcomber::entities::CategoryFilter;
use beachcomber::icons::IconService;
use beachcomber::logger::Logger;
use beachcomber::router::Route;
use beachcomber::ui::app_component::{AppComponent, AppState};
use beachcomber::ui::core::{Component, DialogType, EventType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const TREASURE_BEACH: &str = r#"[
    {"id": "1", "name": "Beach Bar", "category": "Accomodation", "latitude": 17.8871, "longitude": -77.7639},
    {"id": "2", "name": "Reef Tour", "category": "Attraction", "latitude": 17.8860, "longitude": -77.7650,
     "description": "Glass-bottom boat"},
    {"id": "3", "name": "Laundromat", "category": "Services", "latitude": 17.8880, "longitude": -77.7620},
    {"id": "4", "name": "Art Studio", "category": "Culture", "latitude": 17.8890, "longitude": -77.7610}
]"#;

/// Serves a fixed body and counts how often it was asked
struct FakeSource {
    body: &'static str,
    calls: AtomicUsize,
}

impl FakeSource {
    fn new(body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            body,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ResourceSource for FakeSource {
    fn describe(&self) -> String {
        "fake".to_string()
    }

    async fn fetch_resources(&self) -> Result<FetchOutcome, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        parse_resources(self.body)
    }
}

/// Answers only after a delay, so keys can arrive while the fetch is in flight
struct SlowSource {
    delay: Duration,
}

#[async_trait]
impl ResourceSource for SlowSource {
    fn describe(&self) -> String {
        "slow".to_string()
    }

    async fn fetch_resources(&self) -> Result<FetchOutcome, ApiError> {
        tokio::time::sleep(self.delay).await;
        parse_resources(TREASURE_BEACH)
    }
}

struct FailingSource {
    calls: AtomicUsize,
}

#[async_trait]
impl ResourceSource for FailingSource {
    fn describe(&self) -> String {
        "failing".to_string()
    }

    async fn fetch_resources(&self) -> Result<FetchOutcome, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ApiError::Status(503))
    }
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn app_with(source: Arc<dyn ResourceSource>) -> AppComponent {
    AppComponent::new(&Config::default(), source, Logger::new())
}

async fn wait_for_fetch(app: &mut AppComponent) {
    for _ in 0..200 {
        app.drain_background_actions().await;
        if !app.is_fetching() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("fetch did not complete");
}

fn screen_text(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(!state.loading, "Default AppState should not be loading");
    assert!(state.error_message.is_none(), "Default AppState should have no error message");
    assert_eq!(state.route, Route::Explore);
    assert_eq!(state.view_label(), "All");
}

#[tokio::test]
async fn test_mount_fetches_and_shows_markers() {
    let source = FakeSource::new(TREASURE_BEACH);
    let mut app = app_with(source.clone());

    app.start("/");
    assert!(app.map().is_mounted());
    assert!(app.is_fetching());
    assert!(app.state().loading);

    wait_for_fetch(&mut app).await;

    assert!(!app.state().loading);
    assert_eq!(app.state().store.len(), 4);
    assert_eq!(app.map().marker_count(), 4);
    assert_eq!(app.listing().resources().len(), 4);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_category_key_filters_markers_and_cards() {
    let mut app = app_with(FakeSource::new(TREASURE_BEACH));
    app.start("/");
    wait_for_fetch(&mut app).await;

    app.handle_event(key(KeyCode::Char('4'))).await.unwrap();

    assert_eq!(app.state().active_filter, Some(CategoryFilter::More));
    assert_eq!(app.category_bar().active(), Some(CategoryFilter::More));
    assert_eq!(app.map().marker_count(), 1);
    assert_eq!(app.listing().resources().len(), 1);
    assert_eq!(app.listing().resources()[0].name, "Art Studio");

    app.handle_event(key(KeyCode::Char('1'))).await.unwrap();
    assert_eq!(app.map().marker_count(), 1);
    assert_eq!(app.listing().resources()[0].name, "Beach Bar");

    // Back to everything
    app.handle_event(key(KeyCode::Char('0'))).await.unwrap();
    assert_eq!(app.state().active_filter, None);
    assert_eq!(app.map().marker_count(), 4);
}

#[tokio::test]
async fn test_search_narrows_the_view() {
    let mut app = app_with(FakeSource::new(TREASURE_BEACH));
    app.start("/");
    wait_for_fetch(&mut app).await;

    app.handle_event(key(KeyCode::Char('/'))).await.unwrap();
    assert!(app.header().is_editing());

    for c in "boat".chars() {
        app.handle_event(key(KeyCode::Char(c))).await.unwrap();
    }
    // Typing must not trigger category shortcuts or quit
    assert!(!app.should_quit());
    assert_eq!(app.map().marker_count(), 4);

    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    assert!(!app.header().is_editing());
    assert_eq!(app.map().marker_count(), 1);
    assert_eq!(app.listing().resources()[0].name, "Reef Tour");
    assert_eq!(app.listing().view_label(), "Search: boat");
}

#[tokio::test]
async fn test_zero_resources_means_zero_markers() {
    let mut app = app_with(FakeSource::new("[]"));
    app.start("/");
    wait_for_fetch(&mut app).await;

    assert!(app.state().store.is_loaded());
    assert_eq!(app.map().marker_count(), 0);
    assert!(!app.state().fetch_failed);
    assert!(app.state().error_message.is_none());
    assert!(!app.is_dialog_visible());
}

#[tokio::test]
async fn test_skipped_records_open_info_dialog() {
    let mut app = app_with(FakeSource::new(
        r#"[
            {"id": "1", "name": "Good", "latitude": 17.88, "longitude": -77.76},
            {"id": "2", "name": "Bad", "latitude": "north", "longitude": -77.76}
        ]"#,
    ));
    app.start("/");
    wait_for_fetch(&mut app).await;

    assert_eq!(app.map().marker_count(), 1);
    assert_eq!(app.state().skipped_records.len(), 1);
    assert!(matches!(app.dialog_type(), Some(DialogType::Info(_))));

    app.handle_event(key(KeyCode::Char('x'))).await.unwrap();
    assert!(!app.is_dialog_visible());
}

#[tokio::test]
async fn test_failed_fetch_shows_error_and_retries() {
    let source = Arc::new(FailingSource {
        calls: AtomicUsize::new(0),
    });
    let mut app = app_with(source.clone());
    app.start("/");
    wait_for_fetch(&mut app).await;

    assert!(app.state().fetch_failed);
    assert!(app.state().error_message.is_some());
    assert!(matches!(app.dialog_type(), Some(DialogType::Error(_))));
    assert_eq!(app.map().marker_count(), 0);

    // Retry from the error dialog
    app.handle_event(key(KeyCode::Char('r'))).await.unwrap();
    assert!(app.is_fetching());
    wait_for_fetch(&mut app).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_unknown_path_shows_not_found_then_returns_to_map() {
    let source = FakeSource::new(TREASURE_BEACH);
    let mut app = app_with(source.clone());

    app.start("/foo");
    assert_eq!(app.state().route, Route::NotFound("/foo".to_string()));
    assert!(!app.map().is_mounted());
    assert!(!app.is_fetching());
    assert!(screen_text(&mut app).contains("404"));

    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.state().route, Route::Explore);
    assert!(app.map().is_mounted());

    wait_for_fetch(&mut app).await;
    assert_eq!(app.map().marker_count(), 4);
}

#[tokio::test]
async fn test_goto_dialog_navigates() {
    let mut app = app_with(FakeSource::new(TREASURE_BEACH));
    app.start("/");
    wait_for_fetch(&mut app).await;

    app.handle_event(key(KeyCode::Char(':'))).await.unwrap();
    assert!(matches!(app.dialog_type(), Some(DialogType::GoTo)));

    for c in "nowhere".chars() {
        app.handle_event(key(KeyCode::Char(c))).await.unwrap();
    }
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    assert_eq!(app.state().route, Route::NotFound("/nowhere".to_string()));
    assert_eq!(app.router().current_path(), "/nowhere");
}

#[tokio::test]
async fn test_remount_does_not_refetch() {
    let source = FakeSource::new(TREASURE_BEACH);
    let mut app = app_with(source.clone());
    app.start("/");
    wait_for_fetch(&mut app).await;

    app.start("/elsewhere");
    app.start("/");
    assert!(!app.is_fetching());
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.map().marker_count(), 4);
}

#[tokio::test]
async fn test_tab_selects_marker_and_highlights_card() {
    let mut app = app_with(FakeSource::new(TREASURE_BEACH));
    app.start("/");
    wait_for_fetch(&mut app).await;

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    let selected = app.map().selected_marker().map(|m| m.popup.title.clone());
    assert_eq!(selected.as_deref(), Some("Beach Bar"));

    // Selection survives a filter that keeps the marker
    app.handle_event(key(KeyCode::Char('1'))).await.unwrap();
    assert_eq!(
        app.map().selected_marker().map(|m| m.resource_id.as_str()),
        Some("1")
    );

    // and is dropped by one that removes it
    app.handle_event(key(KeyCode::Char('2'))).await.unwrap();
    assert!(app.map().selected_marker().is_none());
}

#[tokio::test]
async fn test_global_keys() {
    let mut app = app_with(FakeSource::new(TREASURE_BEACH));
    app.start("/");
    wait_for_fetch(&mut app).await;

    app.handle_event(key(KeyCode::Char('?'))).await.unwrap();
    assert!(matches!(app.dialog_type(), Some(DialogType::Help)));
    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    assert!(!app.is_dialog_visible());

    app.handle_event(key(KeyCode::Char('x'))).await.unwrap();
    assert!(app.category_bar().is_extended());

    app.handle_event(key(KeyCode::Char('q'))).await.unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_render_explore_screen() {
    let mut app = app_with(FakeSource::new(TREASURE_BEACH));
    app.start("/");
    wait_for_fetch(&mut app).await;

    let text = screen_text(&mut app);
    assert!(text.contains("Beachcomber"));
    assert!(text.contains("Stays"));
    assert!(text.contains("OpenStreetMap"));
}

#[tokio::test]
async fn test_keys_before_load_do_not_outlive_the_fetch() {
    let mut app = app_with(Arc::new(SlowSource {
        delay: Duration::from_millis(50),
    }));
    app.start("/");
    assert!(app.is_fetching());

    // A category press with nothing loaded explains itself and changes nothing
    app.handle_event(key(KeyCode::Char('4'))).await.unwrap();
    assert_eq!(app.state().info_message.as_deref(), Some("❌ No resources loaded yet"));
    assert_eq!(app.category_bar().active(), None);
    assert_eq!(app.state().active_filter, None);

    // A search submitted while loading matches nothing yet
    app.handle_event(key(KeyCode::Char('/'))).await.unwrap();
    for c in "boat".chars() {
        app.handle_event(key(KeyCode::Char(c))).await.unwrap();
    }
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.listing().view_label(), "Search: boat");

    wait_for_fetch(&mut app).await;

    // Every component agrees on the unfiltered view
    assert_eq!(app.state().active_filter, None);
    assert_eq!(app.category_bar().active(), None);
    assert_eq!(app.header().search_term(), "");
    assert_eq!(app.listing().view_label(), "All");
    assert_eq!(app.listing().resources().len(), 4);
    assert_eq!(app.map().marker_count(), 4);
}

#[tokio::test]
async fn test_directions_logs_selected_marker() {
    let mut app = app_with(FakeSource::new(TREASURE_BEACH));
    app.start("/");
    wait_for_fetch(&mut app).await;

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    app.handle_event(key(KeyCode::Char('d'))).await.unwrap();

    let expected = format!(
        "Directions: {} requested to 'Beach Bar'",
        IconService::new(Config::default().ui.icon_theme).directions()
    );
    let logs = app.logger().get_logs();
    assert!(
        logs.iter().any(|line| line.contains(&expected)),
        "missing directions line in {:?}",
        logs
    );
}
