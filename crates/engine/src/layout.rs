//! Layout composition: flattening a page document into terminal rows.
//!
//! Composition is the only place section offsets come from. The registry is
//! derived state, recomputed from scratch whenever the content width
//! changes, so offsets always agree with the rows actually on screen.

use lookout_types::{PageDocument, SectionDescriptor};

/// What a composed row contains; drives styling in the content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Page title banner.
    Title,
    /// Section heading; the payload is the index into the registry.
    Heading(usize),
    /// Wrapped body text.
    Body,
    /// Spacer between sections.
    Blank,
}

/// A single composed terminal row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub kind: RowKind,
}

impl Row {
    fn blank() -> Self {
        Self {
            text: String::new(),
            kind: RowKind::Blank,
        }
    }
}

/// A page flattened to rows at a fixed content width, plus the section
/// registry placing each heading within those rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Composed rows, top to bottom.
    pub rows: Vec<Row>,
    /// One descriptor per section, document order, `top` strictly increasing.
    pub registry: Vec<SectionDescriptor>,
}

impl PageLayout {
    /// Composes `document` at `width` columns.
    ///
    /// Every section contributes at least its heading row, so registry
    /// offsets are strictly increasing regardless of body content. A width
    /// of zero degenerates to one column rather than failing.
    pub fn compose(document: &PageDocument, width: usize) -> Self {
        let width = width.max(1);
        let mut rows: Vec<Row> = Vec::new();
        let mut registry: Vec<SectionDescriptor> = Vec::new();

        if let Some(title) = document.title.as_deref() {
            for line in textwrap::wrap(title, width) {
                rows.push(Row {
                    text: line.into_owned(),
                    kind: RowKind::Title,
                });
            }
            rows.push(Row::blank());
        }

        for (index, section) in document.sections.iter().enumerate() {
            if index > 0 {
                rows.push(Row::blank());
            }

            registry.push(SectionDescriptor {
                id: section.id.clone(),
                label: section.label.clone(),
                top: rows.len(),
            });
            rows.push(Row {
                text: section.label.clone(),
                kind: RowKind::Heading(index),
            });

            for paragraph in section.body.lines() {
                if paragraph.trim().is_empty() {
                    rows.push(Row::blank());
                    continue;
                }
                for line in textwrap::wrap(paragraph, width) {
                    rows.push(Row {
                        text: line.into_owned(),
                        kind: RowKind::Body,
                    });
                }
            }
        }

        Self { rows, registry }
    }

    /// Largest valid scroll offset for a viewport of `viewport_height` rows.
    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.rows.len().saturating_sub(viewport_height.max(1))
    }

    /// Resolves a section descriptor by id. A miss means the id is not part
    /// of the current layout and callers treat it as a no-op.
    pub fn descriptor_by_id(&self, id: &str) -> Option<&SectionDescriptor> {
        self.registry.iter().find(|section| section.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookout_types::SectionDefinition;

    fn section(id: &str, label: &str, body: &str) -> SectionDefinition {
        SectionDefinition {
            id: id.into(),
            label: label.into(),
            body: body.into(),
        }
    }

    fn sample_document() -> PageDocument {
        PageDocument {
            title: Some("Landing Page".into()),
            sections: vec![
                section("s1", "Section 1", "A body that is long enough to wrap when the width is small."),
                section("s2", "Section 2", "Short body."),
                section("s3", "Section 3", ""),
            ],
        }
    }

    #[test]
    fn registry_preserves_document_order() {
        let layout = PageLayout::compose(&sample_document(), 40);
        let ids: Vec<&str> = layout.registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2", "s3"]);
    }

    #[test]
    fn offsets_are_strictly_increasing() {
        let layout = PageLayout::compose(&sample_document(), 40);
        for pair in layout.registry.windows(2) {
            assert!(pair[0].top < pair[1].top, "{:?} not strictly increasing", pair);
        }
    }

    #[test]
    fn heading_rows_sit_at_registry_offsets() {
        let layout = PageLayout::compose(&sample_document(), 40);
        for (index, descriptor) in layout.registry.iter().enumerate() {
            let row = &layout.rows[descriptor.top];
            assert_eq!(row.kind, RowKind::Heading(index));
            assert_eq!(row.text, descriptor.label);
        }
    }

    #[test]
    fn narrower_width_pushes_later_sections_down() {
        let document = sample_document();
        let wide = PageLayout::compose(&document, 80);
        let narrow = PageLayout::compose(&document, 20);
        // Wrapping at 20 columns produces more body rows for s1, so s2's
        // heading lands further down; it never moves up.
        assert!(narrow.registry[1].top > wide.registry[1].top);
        assert!(narrow.registry[2].top > wide.registry[2].top);
    }

    #[test]
    fn empty_document_composes_to_nothing() {
        let layout = PageLayout::compose(&PageDocument::default(), 80);
        assert!(layout.rows.is_empty());
        assert!(layout.registry.is_empty());
        assert_eq!(layout.max_scroll(24), 0);
    }

    #[test]
    fn zero_width_degenerates_to_one_column() {
        let layout = PageLayout::compose(&sample_document(), 0);
        assert!(!layout.rows.is_empty());
    }

    #[test]
    fn descriptor_lookup_by_id() {
        let layout = PageLayout::compose(&sample_document(), 40);
        assert_eq!(layout.descriptor_by_id("s2").map(|s| s.label.as_str()), Some("Section 2"));
        assert!(layout.descriptor_by_id("missing").is_none());
    }

    #[test]
    fn max_scroll_clamps_to_zero_for_tall_viewports() {
        let layout = PageLayout::compose(&sample_document(), 40);
        assert_eq!(layout.max_scroll(10_000), 0);
        assert!(layout.max_scroll(4) > 0);
    }
}
