use crate::nav::Section;

/// Distance in CSS pixels from the top of the viewport to the probe line.
pub const PROBE_LINE_PX: f64 = 200.0;

/// Vertical extent of a section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn straddles(&self, probe: f64) -> bool {
        self.top <= probe && probe <= self.bottom
    }
}

/// Source of section boxes. The browser implementation reads
/// `getBoundingClientRect`; tests supply fixed layouts.
pub trait SectionGeometry {
    /// `None` when the section is not currently laid out.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

impl<F> SectionGeometry for F
where
    F: Fn(Section) -> Option<SectionBounds>,
{
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self(section)
    }
}

/// First section in document order whose box straddles the probe line.
pub fn locate(geometry: &impl SectionGeometry, probe: f64) -> Option<Section> {
    Section::ALL.into_iter().find(|&section| {
        geometry
            .bounds(section)
            .is_some_and(|b| b.straddles(probe))
    })
}

/// Owner of the active-section value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSectionTracker {
    active: Section,
    probe: f64,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(PROBE_LINE_PX)
    }
}

impl ActiveSectionTracker {
    pub fn new(probe: f64) -> Self {
        Self {
            active: Section::default(),
            probe,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn probe(&self) -> f64 {
        self.probe
    }

    /// Re-evaluate against the current layout. Returns the new section only
    /// when it changed; a probe that hits nothing keeps the last value.
    pub fn update(&mut self, geometry: &impl SectionGeometry) -> Option<Section> {
        let found = locate(geometry, self.probe)?;
        if found == self.active {
            return None;
        }
        log::debug!("active section {} -> {}", self.active, found);
        self.active = found;
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stacks the sections back to back, each `height` tall, scrolled by `scroll_y`.
    fn stacked(height: f64, scroll_y: f64) -> impl Fn(Section) -> Option<SectionBounds> {
        move |section| {
            let i = Section::ALL.iter().position(|s| *s == section)? as f64;
            let top = i * height - scroll_y;
            Some(SectionBounds::new(top, top + height))
        }
    }

    #[test]
    fn test_defaults_to_home() {
        let tracker = ActiveSectionTracker::default();
        assert_eq!(tracker.active(), Section::Home);
        assert_eq!(tracker.probe(), PROBE_LINE_PX);
    }

    #[test]
    fn test_each_section_becomes_active() {
        let height = 900.0;
        let mut tracker = ActiveSectionTracker::default();
        for (i, section) in Section::ALL.into_iter().enumerate() {
            // place the probe 50px into the section
            let scroll_y = i as f64 * height - PROBE_LINE_PX + 50.0;
            tracker.update(&stacked(height, scroll_y));
            assert_eq!(tracker.active(), section);
        }
    }

    #[test]
    fn test_update_reports_changes_only() {
        let mut tracker = ActiveSectionTracker::default();
        assert_eq!(tracker.update(&stacked(900.0, 0.0)), None);
        assert_eq!(
            tracker.update(&stacked(900.0, 1000.0)),
            Some(Section::About)
        );
        assert_eq!(tracker.update(&stacked(900.0, 1100.0)), None);
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_no_hit_keeps_last_value() {
        let mut tracker = ActiveSectionTracker::default();
        tracker.update(&stacked(900.0, 4600.0));
        assert_eq!(tracker.active(), Section::Contact);

        // scrolled past the end: every box is above the probe
        tracker.update(&stacked(900.0, 10_000.0));
        assert_eq!(tracker.active(), Section::Contact);

        // nothing laid out at all
        tracker.update(&|_: Section| -> Option<SectionBounds> { None });
        assert_eq!(tracker.active(), Section::Contact);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let at_top = |section: Section| match section {
            Section::Skills => Some(SectionBounds::new(PROBE_LINE_PX, 900.0)),
            _ => None,
        };
        assert_eq!(locate(&at_top, PROBE_LINE_PX), Some(Section::Skills));

        let at_bottom = |section: Section| match section {
            Section::Skills => Some(SectionBounds::new(-500.0, PROBE_LINE_PX)),
            _ => None,
        };
        assert_eq!(locate(&at_bottom, PROBE_LINE_PX), Some(Section::Skills));
    }

    #[test]
    fn test_overlap_prefers_document_order() {
        let overlapping = |section: Section| match section {
            Section::Experience | Section::Projects => Some(SectionBounds::new(0.0, 400.0)),
            _ => None,
        };
        assert_eq!(locate(&overlapping, PROBE_LINE_PX), Some(Section::Projects));
    }
}
