//! Top-level view: routes input to the focused component and assembles the
//! frame from the sidebar, the content pane, and the hints row.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use lookout_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::components::{Component, NavListComponent, PageViewComponent};
use super::layout::MainLayout;
use crate::app::{App, Focus};
use crate::theme;

/// Routes events between the two panes and renders the whole frame.
#[derive(Debug, Default)]
pub struct MainView {
    nav_view: NavListComponent,
    page_view: PageViewComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global keys first (quit, pane switch, theme), then the focused pane.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return vec![Effect::Quit],
            KeyCode::Tab | KeyCode::BackTab => {
                app.focus = match app.focus {
                    Focus::Nav => Focus::Page,
                    Focus::Page => Focus::Nav,
                };
                return Vec::new();
            }
            KeyCode::Char('t') => {
                app.cycle_theme();
                return Vec::new();
            }
            _ => {}
        }

        match app.focus {
            Focus::Nav => self.nav_view.handle_key_events(app, key),
            Focus::Page => self.page_view.handle_key_events(app, key),
        }
    }

    /// Wheel scrolling always drives the content pane; clicks are routed by
    /// position and move focus to the pane under the cursor.
    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => self.page_view.handle_mouse_events(app, mouse),
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position {
                    x: mouse.column,
                    y: mouse.row,
                };
                if app.nav.last_area.contains(position) {
                    app.focus = Focus::Nav;
                    self.nav_view.handle_mouse_events(app, mouse)
                } else if app.page.last_area.contains(position) {
                    app.focus = Focus::Page;
                    self.page_view.handle_mouse_events(app, mouse)
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    /// Forwards an application message to the reducer.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let areas = MainLayout::responsive_layout(area);
        self.nav_view.render(frame, areas[0], app);
        self.page_view.render(frame, areas[1], app);
        self.render_hints(frame, areas[2], app);
    }

    /// Hints for the focused pane plus the global bindings, and the current
    /// scroll position on the right.
    fn render_hints(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.ctx.theme;
        let mut spans: Vec<Span> = match app.focus {
            Focus::Nav => self.nav_view.get_hint_spans(app),
            Focus::Page => self.page_view.get_hint_spans(app),
        };
        spans.extend(theme::build_hint_spans(theme, &[(" Tab", " Switch pane "), (" t", " Theme "), (" q", " Quit ")]));

        let total_rows = app.page.layout.rows.len();
        if total_rows > 0 {
            let position = format!(" {}/{} ", app.page.scroll + 1, total_rows);
            spans.push(Span::styled(position, theme.text_secondary_style()));
        }

        if app.ctx.debug_enabled {
            let marker = format!(" active={:?} nav={:?} ", app.page.active, app.nav.active);
            spans.push(Span::styled(marker, theme.text_muted_style()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
