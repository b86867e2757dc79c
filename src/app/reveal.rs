use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_prefers_reduced_motion,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use crate::reveal::{observer_root_margin, Pose, RevealLatch, RevealSpec, Sighting};

#[derive(Debug, Clone, Copy)]
struct RevealGroupContext {
    pose: Signal<Pose>,
    spec: RevealSpec,
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

/// Runs `f` after the next two frames, so a freshly applied hidden pose is
/// painted before anything transitions out of it.
fn after_paint(f: impl FnOnce() + 'static) {
    request_animation_frame(move || request_animation_frame(f));
}

/// Arms a latch after hydration and fires it the first time `target` reaches
/// the trigger line. The observer is released once it fires, or when the
/// owning scope is disposed.
fn use_scroll_reveal(target: NodeRef<html::Div>) -> Signal<Pose> {
    let (latch, set_latch) = signal(RevealLatch::default());
    let reduced_motion = use_prefers_reduced_motion();

    Effect::new(move |_| {
        if target.get().is_none() || reduced_motion.get_untracked() {
            return;
        }
        set_latch.update(|l| {
            l.arm();
        });
        // blocks that are already past the line when armed
        after_paint(move || {
            let Some(Some(el)) = target.try_get_untracked() else {
                return;
            };
            let top = el.get_bounding_client_rect().top();
            set_latch.try_update(|l| l.observe(top, viewport_height()));
        });
    });

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let Some(entry) = entries.last() else {
                return;
            };
            let sighting = Sighting {
                intersecting: entry.is_intersecting(),
                element_top: entry.bounding_client_rect().top(),
                viewport_height: viewport_height(),
            };
            set_latch.try_update(|l| l.sight(sighting));
        },
        UseIntersectionObserverOptions::default()
            .root_margin(observer_root_margin())
            .thresholds(vec![0.0]),
    );

    Effect::new(move |_| {
        if latch.with(RevealLatch::has_fired) {
            stop();
        }
    });

    Signal::derive(move || latch.get().pose())
}

/// Plays once right after hydration instead of waiting for scroll. The server
/// renders these blocks hidden already; `.mount-reveal` in the stylesheet
/// shows them if the script never runs.
pub fn use_mount_reveal() -> Signal<Pose> {
    let (latch, set_latch) = signal(RevealLatch::armed());
    let reduced_motion = use_prefers_reduced_motion();

    Effect::new(move |_| {
        if reduced_motion.get_untracked() {
            set_latch.update(|l| {
                l.fire();
            });
            return;
        }
        after_paint(move || {
            set_latch.try_update(RevealLatch::fire);
        });
    });

    Signal::derive(move || latch.get().pose())
}

/// A single block that fades and slides in when scrolled to.
#[component]
pub fn Reveal(
    spec: RevealSpec,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let pose = use_scroll_reveal(target);
    view! {
        <div node_ref=target class=class style=move || spec.style(pose.get(), 0)>
            {children()}
        </div>
    }
}

/// A list container. Its [`RevealItem`] children reveal together when the
/// container is scrolled to, each delayed by `spec.stagger` more than the last.
#[component]
pub fn RevealGroup(
    spec: RevealSpec,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let pose = use_scroll_reveal(target);
    provide_context(RevealGroupContext { pose, spec });
    view! {
        <div node_ref=target class=class>
            {children()}
        </div>
    }
}

#[component]
pub fn RevealItem(
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let RevealGroupContext { pose, spec } = expect_context::<RevealGroupContext>();
    view! {
        <div class=class style=move || spec.style(pose.get(), index)>
            {children()}
        </div>
    }
}
