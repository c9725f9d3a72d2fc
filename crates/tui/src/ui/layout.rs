//! Layout system for the Lookout TUI.
//!
//! Defines the main application layout: a fixed-width navigation sidebar, a
//! content pane filling the remainder, and a single hints row at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width on regular terminals.
pub const NAV_WIDTH: u16 = 24;

/// Sidebar width once the terminal is wide enough to spare it.
pub const WIDE_NAV_WIDTH: u16 = 32;

/// Total width at which the wider sidebar kicks in.
pub const WIDE_BREAKPOINT: u16 = 120;

pub(crate) struct MainLayout;

impl MainLayout {
    /// Splits the screen into `[sidebar, content, hints]` areas.
    ///
    /// The sidebar widens on large terminals; the hints row is always a
    /// single line pinned to the bottom.
    pub fn responsive_layout(size: Rect) -> Vec<Rect> {
        let nav_width = if size.width >= WIDE_BREAKPOINT { WIDE_NAV_WIDTH } else { NAV_WIDTH };

        let vertical = Layout::vertical([
            Constraint::Min(1),    // sidebar + content
            Constraint::Length(1), // hints row
        ])
        .split(size);

        let columns = Layout::horizontal([
            Constraint::Length(nav_width), // navigation sidebar
            Constraint::Min(1),            // content pane
        ])
        .split(vertical[0]);

        vec![columns[0], columns[1], vertical[1]]
    }

    /// Inner text dimensions of the content pane (block borders excluded)
    /// for a terminal of `size`.
    ///
    /// `App` composes the page at this width and clamps scrolling to this
    /// height, so state updates and rendering agree on geometry.
    pub fn content_inner_size(size: Rect) -> (usize, usize) {
        let areas = Self::responsive_layout(size);
        let content = areas[1];
        let width = content.width.saturating_sub(2).max(1) as usize;
        let height = content.height.saturating_sub(2).max(1) as usize;
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_sidebar_content_and_hints() {
        let areas = MainLayout::responsive_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.len(), 3);
        assert_eq!(areas[0].width, NAV_WIDTH);
        assert_eq!(areas[1].width, 80 - NAV_WIDTH);
        assert_eq!(areas[2].height, 1);
    }

    #[test]
    fn wide_terminals_get_the_wider_sidebar() {
        let areas = MainLayout::responsive_layout(Rect::new(0, 0, WIDE_BREAKPOINT, 40));
        assert_eq!(areas[0].width, WIDE_NAV_WIDTH);
    }

    #[test]
    fn content_inner_size_accounts_for_borders_and_hints() {
        let (width, height) = MainLayout::content_inner_size(Rect::new(0, 0, 80, 24));
        assert_eq!(width, (80 - NAV_WIDTH - 2) as usize);
        assert_eq!(height, (24 - 1 - 2) as usize);
    }

    #[test]
    fn tiny_terminals_never_collapse_to_zero() {
        let (width, height) = MainLayout::content_inner_size(Rect::new(0, 0, 2, 2));
        assert!(width >= 1);
        assert!(height >= 1);
    }
}
