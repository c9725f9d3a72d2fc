//! Application state and logic for the Lookout TUI.
//!
//! `App` is the central state container: the composed page, the derived
//! navigation entries, scroll position, active-section markers, and focus.
//! Components mutate it through event handlers and the `update` reducer;
//! rendering only reads it.

use std::sync::Arc;

use lookout_engine::{PageLayout, ScrollAnimation, active_section};
use lookout_types::{Effect, Msg, NavEntry, PageDocument};
use lookout_util::preferences::UserPreferences;
use ratatui::layout::Rect;

use crate::theme::Theme;
use crate::ui::layout::MainLayout;

/// Content width used before the first resize message arrives.
const DEFAULT_COMPOSE_WIDTH: usize = 80;

/// Viewport height used before the first resize message arrives.
const DEFAULT_VIEWPORT_HEIGHT: usize = 24;

/// Which pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Navigation sidebar.
    #[default]
    Nav,
    /// Page content pane.
    Page,
}

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects like the active theme and the preferences
/// store, avoiding threading multiple references through components.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active theme; swapped in place by the theme toggle.
    pub theme: Theme,
    /// Preference persistence (theme id, smooth-scroll toggle).
    pub preferences: Arc<UserPreferences>,
    /// Whether nav activation animates; resolved once at startup from the
    /// CLI flag and preferences.
    pub smooth_scroll: bool,
    /// Global debug flag (from env).
    pub debug_enabled: bool,
}

impl SharedCtx {
    pub fn new(theme: Theme, preferences: Arc<UserPreferences>, smooth_scroll: bool) -> Self {
        let debug_enabled = std::env::var("DEBUG")
            .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
            .unwrap_or(false);
        Self {
            theme,
            preferences,
            smooth_scroll,
            debug_enabled,
        }
    }
}

/// State for the scrollable content pane.
#[derive(Debug)]
pub struct PageState {
    /// The loaded document; composition source of truth.
    pub document: PageDocument,
    /// Rows and section registry composed at the current content width.
    pub layout: PageLayout,
    /// Current scroll offset (row index of the first visible row).
    pub scroll: usize,
    /// Rows visible in the content pane.
    pub viewport_height: usize,
    /// Index of the active section in the registry, if any.
    pub active: Option<usize>,
    /// In-flight nav-activation scroll transition.
    pub animation: Option<ScrollAnimation>,
    /// Last rendered area; used for mouse routing.
    pub last_area: Rect,
}

/// State for the navigation sidebar.
#[derive(Debug, Default)]
pub struct NavState {
    /// Generated entries, one per section, registry order.
    pub entries: Vec<NavEntry>,
    /// Index of the entry marked active by the tracker, if any.
    pub active: Option<usize>,
    /// Keyboard cursor position.
    pub selected: usize,
    /// Last rendered area; used for mouse routing and hit testing.
    pub last_area: Rect,
    /// Last computed per-entry row areas for hit testing.
    pub per_item_areas: Vec<Rect>,
}

/// The main application state containing all UI data.
#[derive(Debug)]
pub struct App {
    /// Shared, cross-cutting context (theme, preferences).
    pub ctx: SharedCtx,
    /// Content pane state.
    pub page: PageState,
    /// Navigation sidebar state.
    pub nav: NavState,
    /// Which pane receives keyboard input.
    pub focus: Focus,
}

impl App {
    /// Creates the application state from a loaded document.
    ///
    /// Composes the initial layout, builds the nav entries, and runs the
    /// first tracker pass so the active markers are established before any
    /// user input. The real terminal size arrives as a `Msg::Resize`
    /// immediately after.
    pub fn new(document: PageDocument, ctx: SharedCtx) -> Self {
        let layout = PageLayout::compose(&document, DEFAULT_COMPOSE_WIDTH);
        let mut app = Self {
            ctx,
            page: PageState {
                document,
                layout,
                scroll: 0,
                viewport_height: DEFAULT_VIEWPORT_HEIGHT,
                active: None,
                animation: None,
                last_area: Rect::default(),
            },
            nav: NavState::default(),
            focus: Focus::default(),
        };
        app.rebuild_nav();
        app.apply_active_markers();
        app
    }

    /// Processes an application message, returning any follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                if let Some(animation) = self.page.animation.as_mut() {
                    self.page.scroll = animation.advance();
                    if animation.is_finished() {
                        self.page.animation = None;
                    }
                    self.apply_active_markers();
                }
            }
            Msg::Resize(width, height) => self.handle_resize(*width, *height),
        }
        Vec::new()
    }

    /// Whether a scroll transition is currently live (drives fast ticking).
    pub fn is_animating(&self) -> bool {
        self.page.animation.is_some()
    }

    /// Recomposes the layout for a new terminal size.
    ///
    /// Section offsets are derived state: the registry is rebuilt from
    /// scratch at the new content width, the nav entries are regenerated,
    /// the scroll offset is clamped, and the tracker reruns. Any in-flight
    /// animation is dropped since its target offset no longer exists.
    fn handle_resize(&mut self, width: u16, height: u16) {
        let size = Rect::new(0, 0, width, height);
        let (content_width, content_height) = MainLayout::content_inner_size(size);
        self.page.layout = PageLayout::compose(&self.page.document, content_width);
        self.page.viewport_height = content_height;
        self.page.animation = None;
        self.page.scroll = self.page.scroll.min(self.page.layout.max_scroll(content_height));
        self.rebuild_nav();
        self.apply_active_markers();
    }

    /// Regenerates nav entries from the current registry, preserving the
    /// cursor where possible.
    fn rebuild_nav(&mut self) {
        self.nav.entries = self.page.layout.registry.iter().map(NavEntry::for_section).collect();
        if self.nav.entries.is_empty() {
            self.nav.selected = 0;
        } else if self.nav.selected >= self.nav.entries.len() {
            self.nav.selected = self.nav.entries.len() - 1;
        }
    }

    /// Reruns the tracker and applies the result as presentation markers.
    ///
    /// Clear-then-set: both markers drop unconditionally before the new one
    /// lands, so at most one section and one nav entry are ever marked no
    /// matter how often this runs.
    pub fn apply_active_markers(&mut self) {
        self.page.active = None;
        self.nav.active = None;

        let Some(index) = active_section(&self.page.layout.registry, self.page.scroll) else {
            return;
        };
        self.page.active = Some(index);
        let target_id = &self.page.layout.registry[index].id;
        self.nav.active = self.nav.entries.iter().position(|entry| entry.target_id == *target_id);
    }

    /// Jumps the content pane to `offset` (clamped), cancelling any
    /// transition.
    pub fn scroll_to(&mut self, offset: usize) {
        self.page.animation = None;
        self.page.scroll = offset.min(self.page.layout.max_scroll(self.page.viewport_height));
        self.apply_active_markers();
    }

    /// Scrolls the content pane by `delta` rows. A manual scroll always
    /// cancels a live transition.
    pub fn scroll_by(&mut self, delta: isize) {
        self.page.animation = None;
        let max = self.page.layout.max_scroll(self.page.viewport_height);
        let next = (self.page.scroll as isize + delta).clamp(0, max as isize) as usize;
        self.page.scroll = next;
        self.apply_active_markers();
    }

    /// Starts (or replaces) a scroll transition to the section with the
    /// given id. An unknown id is a recoverable lookup miss: logged at
    /// debug level and otherwise ignored.
    pub fn start_scroll_to_section(&mut self, target_id: &str) {
        let Some(descriptor) = self.page.layout.descriptor_by_id(target_id) else {
            tracing::debug!(target_id, "nav target not present in the current layout");
            return;
        };
        let target = descriptor.top.min(self.page.layout.max_scroll(self.page.viewport_height));

        if !self.ctx.smooth_scroll {
            self.scroll_to(target);
            return;
        }
        self.page.animation = Some(ScrollAnimation::new(self.page.scroll, target));
    }

    /// Swaps to the next theme and persists the choice.
    pub fn cycle_theme(&mut self) {
        self.ctx.theme = self.ctx.theme.next();
        if let Err(error) = self.ctx.preferences.set_preferred_theme(Some(self.ctx.theme.id.to_string())) {
            tracing::warn!("failed to persist theme preference: {error}");
        }
    }
}
