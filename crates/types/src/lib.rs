//! Shared type definitions for the Lookout page viewer.
//!
//! This crate holds the authored page-manifest schema, the derived
//! section/navigation types, and the `Msg`/`Effect` enums exchanged between
//! the TUI components and the runtime. Keeping these in one leaf crate lets
//! the engine stay free of UI concerns and the UI free of parsing concerns.

use serde::{Deserialize, Serialize};

/// A single authored section of a page manifest.
///
/// Sections are the unit the navigation sidebar is built from: each one
/// contributes exactly one nav entry, in authoring order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDefinition {
    /// Unique identifier for the section. Must be non-empty after trimming;
    /// uniqueness is enforced by the document loader.
    pub id: String,
    /// Display label shown in the navigation sidebar and as the section
    /// heading in the content pane.
    pub label: String,
    /// Free-form body text. Wrapped to the content width at render time.
    #[serde(default)]
    pub body: String,
}

/// A page manifest: an optional title plus an ordered list of sections.
///
/// Authoring order is significant and preserved everywhere downstream: it
/// defines nav order and the tracker's tie-break order. An empty section
/// list is valid input, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDocument {
    /// Optional page title rendered as a banner above the first section.
    #[serde(default)]
    pub title: Option<String>,
    /// Sections in authoring order.
    #[serde(default)]
    pub sections: Vec<SectionDefinition>,
}

/// A section as placed by the layout composer.
///
/// `top` is the row offset of the section heading within the composed row
/// buffer. Descriptors are a per-layout snapshot: a resize discards and
/// recomputes the whole registry, so `top` never goes stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Section id, copied from the authored definition.
    pub id: String,
    /// Display label, copied from the authored definition.
    pub label: String,
    /// Row offset of the heading within the composed buffer. Strictly
    /// increasing across the registry.
    pub top: usize,
}

/// A generated navigation entry, one per section descriptor, same order.
///
/// Entries carry the target id so activation and active-state lookup resolve
/// by id against the registry rather than through a separate index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Display label for the sidebar row.
    pub label: String,
    /// Id of the section this entry navigates to.
    pub target_id: String,
}

impl NavEntry {
    /// Builds the nav entry for a placed section.
    pub fn for_section(section: &SectionDescriptor) -> Self {
        Self {
            label: section.label.clone(),
            target_id: section.id.clone(),
        }
    }
}

/// Messages that drive application state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic tick; advances the scroll animation when one is live.
    Tick,
    /// Terminal resized to (width, height).
    Resize(u16, u16),
}

/// Side effects reported by components for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Scroll the content pane to the section with the given id. Unknown
    /// ids are a recoverable lookup miss handled as a no-op.
    ScrollToSection(String),
    /// Exit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yaml_manifest() {
        let raw = r#"
title: "Landing Page"
sections:
  - id: "section1"
    label: "Section 1"
    body: "First section body."
  - id: "section2"
    label: "Section 2"
"#;
        let document: PageDocument = serde_yaml::from_str(raw).expect("parse yaml manifest");
        assert_eq!(document.title.as_deref(), Some("Landing Page"));
        assert_eq!(document.sections.len(), 2);
        assert_eq!(document.sections[0].id, "section1");
        assert_eq!(document.sections[1].body, "");
    }

    #[test]
    fn yaml_and_json_manifests_agree() {
        let yaml = r#"
title: "Tour"
sections:
  - id: "intro"
    label: "Introduction"
    body: "Hello."
"#;
        let json = r#"{
            "title": "Tour",
            "sections": [
                {"id": "intro", "label": "Introduction", "body": "Hello."}
            ]
        }"#;
        let from_yaml: PageDocument = serde_yaml::from_str(yaml).expect("parse yaml");
        let from_json: PageDocument = serde_json::from_str(json).expect("parse json");
        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn missing_sections_defaults_to_empty() {
        let document: PageDocument = serde_yaml::from_str("title: \"Bare\"").expect("parse");
        assert!(document.sections.is_empty());
    }

    #[test]
    fn nav_entry_mirrors_descriptor() {
        let descriptor = SectionDescriptor {
            id: "features".into(),
            label: "Features".into(),
            top: 12,
        };
        let entry = NavEntry::for_section(&descriptor);
        assert_eq!(entry.label, "Features");
        assert_eq!(entry.target_id, "features");
    }
}
