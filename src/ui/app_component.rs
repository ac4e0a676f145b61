use crate::api::{ResourceSource, SkippedRecord};
use crate::config::{Config, MapConfig};
use crate::constants::{ERROR_FETCH_FAILED, ERROR_NO_RESOURCES_LOADED, SUCCESS_RESOURCES_LOADED};
use crate::entities::{CategoryFilter, Resource};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::router::{Route, Router};
use crate::store::ResourceStore;
use crate::ui::components::{
    CategoryBarComponent, DialogComponent, HeaderComponent, ListingComponent, MapComponent, NotFoundComponent,
    StatusBar,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Upper bound on follow-up actions produced while handling one action
const MAX_ACTION_HOPS: usize = 8;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: ResourceStore,
    pub route: Route,
    /// Category of the current derived view; `None` means all resources or search results
    pub active_filter: Option<CategoryFilter>,
    pub loading: bool,
    pub fetch_failed: bool,
    pub skipped_records: Vec<SkippedRecord>,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

impl AppState {
    /// Label of the current view as shown to the user
    pub fn view_label(&self) -> &'static str {
        self.active_filter.map_or("All", |filter| filter.title())
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    header: HeaderComponent,
    map: MapComponent,
    category_bar: CategoryBarComponent,
    listing: ListingComponent,
    not_found: NotFoundComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    router: Router,
    map_config: MapConfig,
    mouse_enabled: bool,

    // Services
    source: Arc<dyn ResourceSource>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,

    // Simple UI state
    should_quit: bool,
    active_fetch_task: Option<TaskId>,
}

impl AppComponent {
    pub fn new(config: &Config, source: Arc<dyn ResourceSource>, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            header: HeaderComponent::new(),
            map: MapComponent::new(),
            category_bar: CategoryBarComponent::new(),
            listing: ListingComponent::new(&config.ui.media_base_url),
            not_found: NotFoundComponent::new(),
            dialog,
            state: AppState::default(),
            router: Router::new(),
            map_config: config.map.clone(),
            mouse_enabled: config.ui.mouse_enabled,
            source,
            task_manager,
            background_action_rx,
            logger,
            icons: IconService::new(config.ui.icon_theme),
            should_quit: false,
            active_fetch_task: None,
        };
        app.apply_icon_theme();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn map(&self) -> &MapComponent {
        &self.map
    }

    pub fn listing(&self) -> &ListingComponent {
        &self.listing
    }

    pub fn category_bar(&self) -> &CategoryBarComponent {
        &self.category_bar
    }

    pub fn header(&self) -> &HeaderComponent {
        &self.header
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Check if the resource fetch is running
    pub fn is_fetching(&self) -> bool {
        self.active_fetch_task.is_some()
    }

    /// Resolve the start path and mount whatever it points at
    pub fn start(&mut self, path: &str) {
        self.logger.log(format!("AppComponent: Starting at '{}'", path));
        self.navigate(path);
    }

    fn navigate(&mut self, path: &str) {
        let route = self.router.navigate(path);
        self.logger
            .log(format!("Navigation: '{}' resolved to {}", self.router.current_path(), route.name()));

        match &route {
            Route::Explore => {
                if self.map.mount(&self.map_config) {
                    self.logger.log("Map: Mounted".to_string());
                    // Resources may have arrived while another route was showing
                    if self.state.store.is_loaded() {
                        if let Some(view) = self.map.view_mut() {
                            view.show_resources(self.state.store.resources());
                        }
                    }
                }
                self.schedule_fetch();
            }
            Route::NotFound(path) => self.not_found.set_path(path),
        }

        self.state.route = route;
    }

    /// Start the fetch unless resources are loaded or a fetch is already running
    fn schedule_fetch(&mut self) {
        if self.state.store.is_loaded() {
            self.logger.log("Fetch: Resources already loaded, skipping".to_string());
            return;
        }
        if self.active_fetch_task.is_some() {
            self.logger.log("Fetch: Already in progress, ignoring".to_string());
            return;
        }

        self.logger
            .log(format!("Fetch: Requesting resources from {}", self.source.describe()));
        self.state.loading = true;
        self.state.fetch_failed = false;
        self.state.clear_messages();
        self.map.set_loading(true);
        self.active_fetch_task = Some(self.task_manager.spawn_fetch(Arc::clone(&self.source)));
    }

    fn apply_icon_theme(&mut self) {
        self.header.icons = self.icons.clone();
        self.map.icons = self.icons.clone();
        self.category_bar.icons = self.icons.clone();
        self.listing.icons = self.icons.clone();
        self.dialog.set_icons(self.icons.clone());
    }

    fn filter_action(&self, filter: Option<CategoryFilter>, resources: Vec<Resource>) -> Action {
        self.logger.log(format!(
            "Filter: {} -> {} resources",
            filter.map_or("All", |f| f.label()),
            resources.len()
        ));
        Action::FilterResources { filter, resources }
    }

    fn skipped_summary(skipped: &[SkippedRecord]) -> String {
        let mut message = format!("{} record(s) could not be shown:", skipped.len());
        for record in skipped {
            message.push_str(&format!("\n#{}: {}", record.index, record.reason));
        }
        message
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char(':') => {
                self.logger.log("Global key: ':' - opening go-to dialog".to_string());
                Action::ShowDialog(DialogType::GoTo)
            }
            KeyCode::Char('i') => {
                self.logger.log("Global key: 'i' - cycling icon theme".to_string());
                Action::CycleIconTheme
            }
            KeyCode::Char('r') => {
                if self.state.fetch_failed {
                    self.logger.log("Global key: 'r' - retrying fetch".to_string());
                    Action::FetchResources
                } else {
                    Action::None
                }
            }
            KeyCode::Esc => {
                if self.state.error_message.is_some() || self.state.info_message.is_some() {
                    self.state.clear_messages();
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Route a key to the first component that turns it into an action
    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        // The search bar swallows every key while editing
        if self.header.is_editing() {
            return self.header.handle_key_events(key);
        }
        // Ctrl+C must not reach components that bind plain 'c'
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_global_key(key);
        }

        let action = match self.state.route {
            Route::Explore => {
                let map_action = self.map.handle_key_events(key);
                if !matches!(map_action, Action::None) {
                    map_action
                } else {
                    let category_action = self.category_bar.handle_key_events(key);
                    if !matches!(category_action, Action::None) {
                        category_action
                    } else {
                        let listing_action = self.listing.handle_key_events(key);
                        if !matches!(listing_action, Action::None) {
                            listing_action
                        } else {
                            self.header.handle_key_events(key)
                        }
                    }
                }
            }
            Route::NotFound(_) => self.not_found.handle_key_events(key),
        };

        if matches!(action, Action::None) && !self.header.is_editing() {
            // Finally try global keys
            self.handle_global_key(key)
        } else {
            action
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Navigate(path) => {
                self.navigate(&path);
                Action::None
            }
            Action::FetchResources => {
                self.schedule_fetch();
                Action::None
            }
            Action::ResourcesLoaded(outcome) => {
                self.active_fetch_task = None;
                self.state.loading = false;
                self.state.fetch_failed = false;
                self.map.set_loading(false);

                let count = outcome.resources.len();
                self.state.store.replace(outcome.resources);
                self.state.skipped_records = outcome.skipped;
                self.state.active_filter = None;
                self.logger.log(format!(
                    "Fetch: Loaded {} resources, skipped {}",
                    count,
                    self.state.skipped_records.len()
                ));

                if let Some(view) = self.map.view_mut() {
                    view.show_resources(self.state.store.resources());
                }

                // Fresh data resets any category or search picked while loading
                self.update(Action::ShowAllResources);
                let all = self.state.store.resources().to_vec();
                self.update(Action::FilterResources { filter: None, resources: all });

                if self.state.skipped_records.is_empty() {
                    self.state.info_message = Some(format!("{} ({})", SUCCESS_RESOURCES_LOADED, count));
                    Action::None
                } else {
                    Action::ShowDialog(DialogType::Info(Self::skipped_summary(&self.state.skipped_records)))
                }
            }
            Action::FetchFailed(error) => {
                self.logger.log(format!("Fetch: Failed with error: {}", error));
                self.active_fetch_task = None;
                self.state.loading = false;
                self.state.fetch_failed = true;
                self.map.set_loading(false);

                let message = format!("{}: {}", ERROR_FETCH_FAILED, error);
                self.state.error_message = Some(message.clone());
                Action::ShowDialog(DialogType::Error(message))
            }
            Action::CategorySelected(filter) => {
                if !self.state.store.is_loaded() {
                    self.logger
                        .log(format!("Filter: {} ignored, nothing loaded yet", filter.label()));
                    self.state.info_message = Some(ERROR_NO_RESOURCES_LOADED.to_string());
                    return Action::None;
                }
                let resources = self.state.store.filter_by_category(filter);
                self.filter_action(Some(filter), resources)
            }
            Action::ShowAllResources => {
                let resources = self.state.store.resources().to_vec();
                self.filter_action(None, resources)
            }
            Action::SearchResources(term) => {
                let resources = self.state.store.search(&term);
                self.logger
                    .log(format!("Search: '{}' matched {} resources", term, resources.len()));
                self.filter_action(None, resources)
            }
            Action::FilterResources { filter, resources } => {
                // Components have already consumed the subset
                self.state.active_filter = filter;
                self.state.info_message = Some(format!("{}: {} resources", self.state.view_label(), resources.len()));
                Action::None
            }
            Action::GetDirections => {
                match self.map.selected_marker() {
                    Some(marker) => self.logger.log(format!(
                        "Directions: {} requested to '{}' at {}",
                        self.icons.directions(),
                        marker.popup.title,
                        marker.position
                    )),
                    None => self.logger.log("Directions: requested with no marker selected".to_string()),
                }
                Action::None
            }
            Action::MarkerSelected(id) => {
                if let Some(resource) = id.as_deref().and_then(|id| self.state.store.get(id)) {
                    self.logger.log(format!("Map: Selected '{}'", resource.name));
                }
                Action::None
            }
            Action::ToggleListing => {
                self.logger.log(format!(
                    "Footer: {}",
                    if self.category_bar.is_extended() { "extended" } else { "collapsed" }
                ));
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.apply_icon_theme();
                self.logger.log(format!("Icons: Theme is now {:?}", self.icons.theme()));
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                Action::None
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog".to_string());
                Action::None
            }
            Action::None => Action::None,
        }
    }

    /// Run an action through the components and the app, following up on whatever it produces
    pub async fn dispatch(&mut self, action: Action) {
        let mut action = action;
        for _ in 0..MAX_ACTION_HOPS {
            if matches!(action, Action::None) {
                return;
            }
            let processed = self.update(action);
            action = self.handle_app_action(processed).await;
        }
        if !matches!(action, Action::None) {
            self.logger
                .log(format!("Dispatch: Dropping action after {} hops: {:?}", MAX_ACTION_HOPS, action));
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: Received {}", action_name(&action)));
            actions.push(action);
        }

        // Clean up finished tasks
        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            self.logger
                .log(format!("Background: Cleaned up {} finished tasks", finished.len()));
        }

        actions
    }

    /// Apply every pending background action. Returns whether anything changed.
    pub async fn drain_background_actions(&mut self) -> bool {
        let actions = self.process_background_actions();
        let changed = !actions.is_empty();
        for action in actions {
            self.dispatch(action).await;
        }
        changed
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => {
                if self.mouse_enabled && !self.dialog.is_visible() && self.state.route == Route::Explore {
                    self.map.handle_mouse(mouse)
                } else {
                    Action::None
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action).await;
        Ok(())
    }
}

/// Short name of an action for logs, without its payload
fn action_name(action: &Action) -> String {
    match action {
        Action::ResourcesLoaded(outcome) => format!(
            "ResourcesLoaded({} resources, {} skipped)",
            outcome.resources.len(),
            outcome.skipped.len()
        ),
        Action::FilterResources { filter, resources } => {
            format!("FilterResources({:?}, {} resources)", filter, resources.len())
        }
        other => format!("{:?}", other),
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.header.update(action);
        let action = self.map.update(action);
        let action = self.category_bar.update(action);
        self.listing.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect, self.category_bar.is_extended());

        self.header.render(f, areas.header);
        match self.state.route {
            Route::Explore => self.map.render(f, areas.body),
            Route::NotFound(_) => self.not_found.render(f, areas.body),
        }
        if let Some(listing_area) = areas.listing {
            self.listing.render(f, listing_area);
        }
        self.category_bar.render(f, areas.category_bar);
        StatusBar::render(f, areas.status, &self.state);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
