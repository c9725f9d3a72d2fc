//! Page manifest loading and validation.
//!
//! Manifests are authored in YAML or JSON using the schema in
//! [`lookout_types`]. Loading preserves authoring order; validation rejects
//! blank and duplicate section ids so every nav entry resolves to exactly
//! one section.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use lookout_types::PageDocument;

/// Loads and validates a page manifest from `path`.
///
/// The format is picked by extension: `.json` parses as JSON, everything
/// else as YAML. An empty `sections` list is accepted; the viewer renders
/// an empty page and an empty sidebar.
pub fn load_page_from_file(path: impl AsRef<Path>) -> Result<PageDocument> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read page manifest '{}'", path.display()))?;

    let is_json = path.extension().and_then(|ext| ext.to_str()).is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let document: PageDocument = if is_json {
        serde_json::from_str(&raw).with_context(|| format!("failed to parse JSON page manifest '{}'", path.display()))?
    } else {
        serde_yaml::from_str(&raw).with_context(|| format!("failed to parse YAML page manifest '{}'", path.display()))?
    };

    validate_document(&document)?;
    tracing::debug!(sections = document.sections.len(), path = %path.display(), "loaded page manifest");
    Ok(document)
}

/// Validates section ids: non-empty after trimming and unique across the
/// document.
pub fn validate_document(document: &PageDocument) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (index, section) in document.sections.iter().enumerate() {
        let id = section.id.trim();
        if id.is_empty() {
            bail!("section {} ('{}') has an empty id", index + 1, section.label);
        }
        if !seen.insert(id) {
            bail!("duplicate section id detected: '{id}'");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write manifest");
        path
    }

    #[test]
    fn loads_yaml_manifest_in_authoring_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_manifest(
            &dir,
            "page.yaml",
            r#"
title: "Landing Page"
sections:
  - id: "section1"
    label: "Section 1"
    body: "First."
  - id: "section2"
    label: "Section 2"
    body: "Second."
"#,
        );

        let document = load_page_from_file(&path).expect("load yaml manifest");
        assert_eq!(document.title.as_deref(), Some("Landing Page"));
        let ids: Vec<&str> = document.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["section1", "section2"]);
    }

    #[test]
    fn loads_json_manifest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_manifest(
            &dir,
            "page.json",
            r#"{"title": "Tour", "sections": [{"id": "intro", "label": "Intro", "body": ""}]}"#,
        );

        let document = load_page_from_file(&path).expect("load json manifest");
        assert_eq!(document.sections.len(), 1);
        assert_eq!(document.sections[0].id, "intro");
    }

    #[test]
    fn rejects_duplicate_section_ids() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_manifest(
            &dir,
            "dupes.yaml",
            r#"
sections:
  - id: "a"
    label: "First"
  - id: "a"
    label: "Second"
"#,
        );

        let error = load_page_from_file(&path).expect_err("expected duplicate id error");
        assert!(error.to_string().contains("duplicate section id detected: 'a'"));
    }

    #[test]
    fn rejects_blank_section_ids() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_manifest(
            &dir,
            "blank.yaml",
            r#"
sections:
  - id: "   "
    label: "Nameless"
"#,
        );

        let error = load_page_from_file(&path).expect_err("expected blank id error");
        assert!(error.to_string().contains("has an empty id"));
    }

    #[test]
    fn accepts_empty_section_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_manifest(&dir, "empty.yaml", "title: \"Nothing here\"\nsections: []\n");

        let document = load_page_from_file(&path).expect("load empty manifest");
        assert!(document.sections.is_empty());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = load_page_from_file("/definitely/not/here.yaml").expect_err("expected read error");
        assert!(error.to_string().contains("/definitely/not/here.yaml"));
    }
}
