//! Content pane component.
//!
//! Renders the composed page rows for the current scroll offset and handles
//! scrolling input (arrow keys, paging, mouse wheel). The heading of the
//! active section is highlighted to mirror the sidebar marker.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use lookout_engine::RowKind;
use lookout_types::Effect;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use super::Component;
use crate::app::{App, Focus};
use crate::theme;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// Scrollable content pane showing the composed page.
#[derive(Debug, Default)]
pub struct PageViewComponent;

impl Component for PageViewComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let page_step = app.page.viewport_height.saturating_sub(1).max(1) as isize;
        match key.code {
            KeyCode::Up => app.scroll_by(-1),
            KeyCode::Down => app.scroll_by(1),
            KeyCode::PageUp => app.scroll_by(-page_step),
            KeyCode::PageDown => app.scroll_by(page_step),
            KeyCode::Home => app.scroll_to(0),
            KeyCode::End => {
                let bottom = app.page.layout.max_scroll(app.page.viewport_height);
                app.scroll_to(bottom);
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => app.scroll_by(WHEEL_STEP),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.ctx.theme.clone();
        let focused = app.focus == Focus::Page;

        let title = app.page.document.title.clone().unwrap_or_else(|| "Page".to_string());
        let block = theme::block(&theme, Some(title.as_str()), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        app.page.last_area = area;
        // Keep the scroll clamp in step with what is actually visible.
        app.page.viewport_height = inner.height.max(1) as usize;

        let rows = &app.page.layout.rows;
        if rows.is_empty() {
            let placeholder = Paragraph::new(Line::from(Span::styled("(no sections)", theme.text_muted_style())));
            frame.render_widget(placeholder, inner);
            return;
        }

        let start = app.page.scroll.min(app.page.layout.max_scroll(app.page.viewport_height));
        let end = (start + app.page.viewport_height).min(rows.len());

        let mut lines: Vec<Line> = Vec::with_capacity(end - start);
        for row in &rows[start..end] {
            let line = match row.kind {
                RowKind::Title => Line::from(Span::styled(
                    row.text.clone(),
                    theme.accent_style().add_modifier(Modifier::BOLD),
                )),
                RowKind::Heading(section_index) => {
                    let is_active = app.page.active == Some(section_index);
                    if is_active {
                        Line::from(vec![
                            Span::styled("▌ ", theme.accent_style()),
                            Span::styled(row.text.clone(), theme.selection_style().add_modifier(Modifier::BOLD)),
                        ])
                    } else {
                        Line::from(vec![
                            Span::styled("  ", theme.text_primary_style()),
                            Span::styled(row.text.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD)),
                        ])
                    }
                }
                RowKind::Body => Line::from(Span::styled(row.text.clone(), theme.text_primary_style())),
                RowKind::Blank => Line::from(""),
            };
            lines.push(line);
        }

        frame.render_widget(Paragraph::new(Text::from(lines)).style(theme.panel_style()), inner);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        theme::build_hint_spans(&app.ctx.theme, &[(" ↑/↓ PgUp/PgDn", " Scroll "), (" Home/End", " Jump ")])
    }
}
