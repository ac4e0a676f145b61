//! Map widget: draws the viewport, its markers and the open popup on a canvas.

use crate::config::MapConfig;
use crate::constants::{PAN_STEP_FRACTION, TILE_SIZE_PX};
use crate::icons::IconService;
use crate::map::{MapView, Marker, Viewport};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker as CanvasMarker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, BorderType, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};

/// Cell area assumed before the first render
const DEFAULT_AREA: (u16, u16) = (80, 24);

pub struct MapComponent {
    view: Option<MapView>,
    loading: bool,
    /// Inner size of the last render, in cells
    last_area: (u16, u16),
    pub icons: IconService,
}

impl Default for MapComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MapComponent {
    pub fn new() -> Self {
        Self {
            view: None,
            loading: false,
            last_area: DEFAULT_AREA,
            icons: IconService::default(),
        }
    }

    /// Mount the map view once. Later calls keep the existing view and markers.
    pub fn mount(&mut self, config: &MapConfig) -> bool {
        if self.view.is_some() {
            return false;
        }
        let view = MapView::mount(config);
        log_visible_tiles(&view, self.last_area);
        self.view = Some(view);
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&MapView> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut MapView> {
        self.view.as_mut()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn marker_count(&self) -> usize {
        self.view.as_ref().map_or(0, |view| view.markers().len())
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        self.view.as_ref().and_then(MapView::selected_marker)
    }

    fn pan(&mut self, dx: f64, dy: f64) {
        let (cols, rows) = self.last_area;
        if let Some(view) = self.view.as_mut() {
            view.viewport.pan(dx, dy, cols, rows);
            log_visible_tiles(view, self.last_area);
        }
    }

    fn zoom(&mut self, zoom_in: bool) {
        if let Some(view) = self.view.as_mut() {
            let changed = if zoom_in {
                view.viewport.zoom_in()
            } else {
                view.viewport.zoom_out()
            };
            if changed {
                log_visible_tiles(view, self.last_area);
            }
        }
    }

    /// Scroll wheel zooms the map
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.zoom(true),
            MouseEventKind::ScrollDown => self.zoom(false),
            _ => {}
        }
        Action::None
    }

    fn draw_grid(ctx: &mut Context, viewport: &Viewport, half_w: f64, half_h: f64) {
        let (cx, cy) = viewport.project(&viewport.center);
        let grid_style = Color::DarkGray;

        // Tile boundaries in canvas coordinates (centre at the origin, y up)
        let first_x = ((cx - half_w) / TILE_SIZE_PX).ceil() * TILE_SIZE_PX;
        let mut x = first_x;
        while x <= cx + half_w {
            ctx.draw(&CanvasLine::new(x - cx, -half_h, x - cx, half_h, grid_style));
            x += TILE_SIZE_PX;
        }

        let first_y = ((cy - half_h) / TILE_SIZE_PX).ceil() * TILE_SIZE_PX;
        let mut y = first_y;
        while y <= cy + half_h {
            ctx.draw(&CanvasLine::new(-half_w, cy - y, half_w, cy - y, grid_style));
            y += TILE_SIZE_PX;
        }
    }

    fn render_popup(&self, f: &mut Frame, area: Rect, view: &MapView) {
        let Some(popup) = view.open_popup() else {
            return;
        };

        let width = area.width.min(40);
        let height = area.height.min(6);
        let popup_area = Rect::new(area.x + 1, area.y + 1, width.saturating_sub(2), height);
        f.render_widget(Clear, popup_area);

        let body = if popup.body.is_empty() {
            Line::from(Span::styled("No description", Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(popup.body.clone())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} {} ", self.icons.selected_marker(), popup.title))
            .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(
            Paragraph::new(body)
                .block(block)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: true }),
            popup_area,
        );
    }
}

/// Log the tiles a real slippy map would request for this viewport
fn log_visible_tiles(view: &MapView, (cols, rows): (u16, u16)) {
    let urls = view.visible_tile_urls(cols, rows);
    log::debug!(
        "Viewport {} z{} covers {} tiles",
        view.viewport.center,
        view.viewport.zoom,
        urls.len()
    );
    for url in urls {
        log::trace!("tile {}", url);
    }
}

impl Component for MapComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(view) = self.view.as_mut() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Tab => {
                let id = view.select_next().map(|m| m.resource_id.clone());
                Action::MarkerSelected(id)
            }
            KeyCode::BackTab => {
                let id = view.select_previous().map(|m| m.resource_id.clone());
                Action::MarkerSelected(id)
            }
            KeyCode::Enter => {
                view.toggle_popup();
                Action::None
            }
            KeyCode::Char('c') => {
                if view.recenter_on_selected() {
                    log_visible_tiles(view, self.last_area);
                }
                Action::None
            }
            KeyCode::Char('h') => {
                self.pan(-PAN_STEP_FRACTION, 0.0);
                Action::None
            }
            KeyCode::Char('l') => {
                self.pan(PAN_STEP_FRACTION, 0.0);
                Action::None
            }
            KeyCode::Char('k') => {
                self.pan(0.0, PAN_STEP_FRACTION);
                Action::None
            }
            KeyCode::Char('j') => {
                self.pan(0.0, -PAN_STEP_FRACTION);
                Action::None
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.zoom(true);
                Action::None
            }
            KeyCode::Char('-') => {
                self.zoom(false);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::FilterResources { resources, .. } = &action {
            if let Some(view) = self.view.as_mut() {
                view.update_markers(resources);
            }
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(view) = self.view.as_ref() else {
            return;
        };

        let status = if self.loading {
            format!(" {} loading ", self.icons.loading())
        } else {
            format!(" {} markers ", view.markers().len())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(
                " {} {} z{} ",
                self.icons.map_title(),
                view.viewport.center,
                view.viewport.zoom
            ))
            .title_bottom(Line::from(status).alignment(Alignment::Right))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Gray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if inner.width == 0 || inner.height < 2 {
            return;
        }

        // Last row is reserved for the attribution
        let canvas_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
        let attribution_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        self.last_area = (canvas_area.width, canvas_area.height);

        let (w, h) = Viewport::span_px(canvas_area.width, canvas_area.height);
        let (half_w, half_h) = (w / 2.0, h / 2.0);
        let selected = view.selected_index();
        let marker_glyph = self.icons.marker();
        let selected_glyph = self.icons.selected_marker();

        let canvas = Canvas::default()
            .marker(CanvasMarker::Braille)
            .x_bounds([-half_w, half_w])
            .y_bounds([-half_h, half_h])
            .paint(|ctx| {
                Self::draw_grid(ctx, &view.viewport, half_w, half_h);
                ctx.layer();

                for (index, marker) in view.markers().iter().enumerate() {
                    let (x, y) = view.viewport.to_canvas(&marker.position);
                    if x.abs() > half_w || y.abs() > half_h {
                        continue;
                    }
                    let span = if Some(index) == selected {
                        Span::styled(
                            selected_glyph,
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(marker_glyph, Style::default().fg(Color::Red))
                    };
                    ctx.print(x, y, span);
                }
            });
        f.render_widget(canvas, canvas_area);

        f.render_widget(
            Paragraph::new(view.tiles().attribution().to_string())
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            attribution_area,
        );

        self.render_popup(f, canvas_area, view);
    }
}
