//! Page composition and scroll tracking for the Lookout viewer.
//!
//! The engine owns everything that does not need a live terminal: loading
//! and validating page manifests, composing a document into rows at a given
//! width, deciding which section is active for a scroll offset, and stepping
//! the eased scroll animation. The TUI crate is a thin adapter that feeds
//! scroll positions in and applies the results as presentation markers.

pub mod animate;
pub mod document;
pub mod layout;
pub mod tracker;

pub use animate::{SCROLL_ANIMATION_FRAMES, ScrollAnimation};
pub use document::load_page_from_file;
pub use layout::{PageLayout, Row, RowKind};
pub use tracker::{SCROLL_PROBE_MARGIN, active_section};
