//! Modal dialog component.
//!
//! Hosts every overlay the application shows: info and error messages,
//! the help and logs panels, and the "go to path" prompt. While a dialog is
//! visible it receives all key events before anything else.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE_SIZE: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input: TextInput,
    pub icons: IconService,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input: TextInput::new(),
            icons: IconService::default(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: Logger::new(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input.clear();
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }

    /// Shared scrolling keys. Returns `true` if the key scrolled.
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => self.scroll_by(PAGE_SIZE as isize),
            KeyCode::Home => self.scroll_to(0),
            // Clamped to the content length at render time
            KeyCode::End => self.scroll_to(usize::MAX),
            _ => return false,
        }
        true
    }

    fn submit_goto(&mut self) -> Action {
        let path = self.input.value().trim().to_string();
        self.clear_dialog();
        if path.is_empty() {
            Action::None
        } else {
            Action::Navigate(path)
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            Some(DialogType::Error(_)) => {
                if self.handle_scroll_key(key) {
                    return Action::None;
                }
                if key.code == KeyCode::Char('r') {
                    self.clear_dialog();
                    return Action::FetchResources;
                }
                Action::HideDialog
            }
            Some(DialogType::Info(_)) => {
                if self.handle_scroll_key(key) {
                    Action::None
                } else {
                    Action::HideDialog
                }
            }
            Some(DialogType::GoTo) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.submit_goto(),
                _ => {
                    self.input.handle_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                if matches!(dialog_type, DialogType::GoTo) {
                    self.input.set("/");
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::Info(message) => system_dialogs::render_info_dialog(
                f,
                rect,
                &self.icons,
                &message,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Error(message) => system_dialogs::render_error_dialog(
                f,
                rect,
                &self.icons,
                &message,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, &mut self.scroll_offset, &mut self.scrollbar_state)
            }
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.logger,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::GoTo => system_dialogs::render_goto_dialog(f, rect, &self.icons, self.input.value()),
        }
    }
}
