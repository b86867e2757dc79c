use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

use crate::{
    nav::Section,
    tracker::{ActiveSectionTracker, SectionBounds, SectionGeometry},
};

/// Read side of the active section, shared with the navbar.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSection(pub ReadSignal<Section>);

pub fn use_active_section() -> ReadSignal<Section> {
    expect_context::<ActiveSection>().0
}

/// Reads section boxes from the live document.
struct DocumentGeometry;

impl SectionGeometry for DocumentGeometry {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let rect = document()
            .get_element_by_id(section.id())?
            .get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }
}

/// Subscribes once to scroll and resize for the whole page and provides the
/// resulting [`ActiveSection`] as context.
pub fn provide_active_section() {
    let tracker = StoredValue::new(ActiveSectionTracker::default());
    let (active, set_active) = signal(Section::default());
    provide_context(ActiveSection(active));

    let recompute = move || {
        let Some(mut current) = tracker.try_get_value() else {
            return;
        };
        if let Some(section) = current.update(&DocumentGeometry) {
            tracker.set_value(current);
            set_active.set(section);
        }
    };

    // initial evaluation once the sections are mounted
    Effect::new(move |_| recompute());

    let passive = || UseEventListenerOptions::default().passive(true);
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| recompute(),
        passive(),
    );
    let _ = use_event_listener_with_options(
        use_window(),
        ev::resize,
        move |_| recompute(),
        passive(),
    );
}
