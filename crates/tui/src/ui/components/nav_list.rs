//! Navigation sidebar component.
//!
//! Renders one entry per page section, in registry order, and reports nav
//! activation (Enter or mouse click) as `Effect::ScrollToSection`. The entry
//! marked active by the tracker is highlighted; a separate keyboard cursor
//! drives selection. The component never scrolls the page itself; that is
//! the runtime's job when it executes the effect.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use lookout_types::Effect;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{Component, find_target_index_by_mouse_position};
use crate::app::{App, Focus};
use crate::theme;
use lookout_util::text::truncate_to_width;

/// Marker glyph prefixed to the entry of the active section.
const ACTIVE_MARKER: &str = "▌ ";

/// Navigation sidebar listing the page's sections.
#[derive(Debug)]
pub struct NavListComponent {
    /// Title for the surrounding block.
    pub title: Option<String>,
}

impl Default for NavListComponent {
    fn default() -> Self {
        Self {
            title: Some("Contents".to_string()),
        }
    }
}

impl Component for NavListComponent {
    /// Cursor movement plus Enter-to-activate. Activation emits the target
    /// section id; the cursor itself never changes the active marker.
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let count = app.nav.entries.len();
        if count == 0 {
            return Vec::new();
        }

        match key.code {
            KeyCode::Up => {
                app.nav.selected = if app.nav.selected == 0 { count - 1 } else { app.nav.selected - 1 };
            }
            KeyCode::Down => {
                app.nav.selected = (app.nav.selected + 1) % count;
            }
            KeyCode::Home => app.nav.selected = 0,
            KeyCode::End => app.nav.selected = count - 1,
            KeyCode::Enter => {
                if let Some(entry) = app.nav.entries.get(app.nav.selected) {
                    return vec![Effect::ScrollToSection(entry.target_id.clone())];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    /// A left click on an entry moves the cursor there and activates it.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }

        let maybe_index =
            find_target_index_by_mouse_position(&app.nav.last_area, &app.nav.per_item_areas, mouse.column, mouse.row);

        if let Some(index) = maybe_index
            && let Some(entry) = app.nav.entries.get(index)
        {
            app.nav.selected = index;
            return vec![Effect::ScrollToSection(entry.target_id.clone())];
        }
        Vec::new()
    }

    /// Renders the entry list and records per-row areas for hit testing.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.ctx.theme.clone();
        let focused = app.focus == Focus::Nav;

        let block = theme::block(&theme, self.title.as_deref(), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        app.nav.last_area = area;

        let mut item_areas = Vec::with_capacity(app.nav.entries.len());
        let visible_rows = inner.height as usize;
        // The marker gutter is two columns wide whether or not it is drawn.
        let label_width = inner.width.saturating_sub(2).max(1) as usize;

        for (index, entry) in app.nav.entries.iter().enumerate().take(visible_rows) {
            let row_area = Rect {
                x: inner.x,
                y: inner.y + index as u16,
                width: inner.width,
                height: 1,
            };

            let is_active = app.nav.active == Some(index);
            let is_cursor = focused && app.nav.selected == index;

            let marker = if is_active { ACTIVE_MARKER } else { "  " };
            let mut label_style = if is_active {
                theme.accent_style().add_modifier(Modifier::BOLD)
            } else {
                theme.text_primary_style()
            };
            if is_cursor {
                label_style = theme.selection_style().add_modifier(Modifier::BOLD);
            }

            let label = truncate_to_width(&entry.label, label_width);
            let line = Line::from(vec![Span::styled(marker, theme.accent_style()), Span::styled(label, label_style)]);
            frame.render_widget(Paragraph::new(line), row_area);
            item_areas.push(row_area);
        }

        app.nav.per_item_areas = item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        theme::build_hint_spans(&app.ctx.theme, &[(" ↑/↓", " Select "), (" Enter", " Go to section ")])
    }
}
