//! Active-section tracking.
//!
//! The tracker is a pure function from (registry, scroll offset) to an
//! optional active index. It owns no state and touches no terminal, so the
//! decision logic is testable without a running UI; the TUI applies the
//! result as presentation markers.

use lookout_types::SectionDescriptor;

/// Rows of lead-in applied to the probe so a section reads as active
/// slightly before its heading reaches the exact viewport top.
pub const SCROLL_PROBE_MARGIN: usize = 2;

/// Returns the index of the section active at `scroll_top`, if any.
///
/// The probe sits `SCROLL_PROBE_MARGIN` rows below the scroll offset, and a
/// section qualifies when its heading has passed within a further margin of
/// the probe. The active section is the last qualifying one in document
/// order. Offsets are strictly increasing (a composer guarantee), so
/// `partition_point` finds the last-qualifying index directly.
///
/// No qualifying section (scroll above the first heading, or an empty
/// registry) yields `None`. A scroll past the last heading keeps the last
/// section active, since its qualifying condition remains true.
pub fn active_section(registry: &[SectionDescriptor], scroll_top: usize) -> Option<usize> {
    let probe = scroll_top + SCROLL_PROBE_MARGIN;
    let qualifying = registry.partition_point(|section| section.top <= probe + SCROLL_PROBE_MARGIN);
    qualifying.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(tops: &[usize]) -> Vec<SectionDescriptor> {
        tops.iter()
            .enumerate()
            .map(|(index, &top)| SectionDescriptor {
                id: format!("s{index}"),
                label: format!("Section {index}"),
                top,
            })
            .collect()
    }

    #[test]
    fn empty_registry_is_never_active() {
        assert_eq!(active_section(&[], 0), None);
        assert_eq!(active_section(&[], 10_000), None);
    }

    #[test]
    fn scroll_above_first_heading_selects_none() {
        let sections = registry(&[10, 500, 1200]);
        assert_eq!(active_section(&sections, 0), None);
        assert_eq!(active_section(&sections, 5), None);
    }

    #[test]
    fn monotonic_sweep_selects_last_qualifying() {
        let sections = registry(&[0, 500, 1200]);
        assert_eq!(active_section(&sections, 0), Some(0));
        assert_eq!(active_section(&sections, 520), Some(1));
        assert_eq!(active_section(&sections, 5000), Some(2));
    }

    #[test]
    fn middle_section_wins_between_neighbors() {
        let sections = registry(&[0, 800, 1600]);
        assert_eq!(active_section(&sections, 850), Some(1));
    }

    #[test]
    fn margin_triggers_slightly_before_the_heading() {
        let sections = registry(&[0, 100]);
        // Heading at 100 qualifies once the probe plus margin reaches it.
        let lead_in = 2 * SCROLL_PROBE_MARGIN;
        assert_eq!(active_section(&sections, 100 - lead_in - 1), Some(0));
        assert_eq!(active_section(&sections, 100 - lead_in), Some(1));
    }

    #[test]
    fn sticky_at_the_end() {
        let sections = registry(&[0, 40, 90]);
        assert_eq!(active_section(&sections, 90), Some(2));
        assert_eq!(active_section(&sections, usize::MAX - 2 * SCROLL_PROBE_MARGIN), Some(2));
    }

    #[test]
    fn repeated_invocation_is_idempotent() {
        let sections = registry(&[0, 800, 1600]);
        let first = active_section(&sections, 850);
        let second = active_section(&sections, 850);
        assert_eq!(first, second);
    }
}
