//! Component system for the Lookout TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while integrating with the application through a consistent
//! interface: they receive `&mut App`, report side effects as `Effect`s, and
//! never execute those effects themselves.

use crossterm::event::{KeyEvent, MouseEvent};
use lookout_types::Effect;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::Span;

use crate::app::App;

pub mod nav_list;
pub mod page_view;

pub use nav_list::NavListComponent;
pub use page_view::PageViewComponent;

/// A trait representing a UI component with its own behavior.
///
/// Components handle localized events, update state on `App`, and render
/// themselves into a provided `Rect`, reporting side effects back to the
/// runtime via `Effect`s.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and recording hit-test geometry on state.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);

    /// Key-binding hints shown in the bottom row while this component has
    /// focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}

/// Resolves a mouse position to an item index using the recorded container
/// and per-item areas. Returns `None` when the position misses the
/// container or falls between items.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, items: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position { x, y };
    if !container.contains(position) {
        return None;
    }
    items.iter().position(|item| item.contains(position))
}
