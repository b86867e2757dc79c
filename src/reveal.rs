//! One-shot entrance animations.
//!
//! A block starts in its natural pose (what the server renders), is put into
//! the hidden pose once the browser arms it, and moves to the revealed pose
//! exactly once when its top edge reaches the trigger line. The tween itself
//! is a CSS transition generated from a [`RevealSpec`].

/// Fraction of the viewport height, measured from the top, that a block's top
/// edge has to reach before it reveals.
pub const TRIGGER_LINE: f64 = 0.8;

/// Starting offset of a block relative to its resting place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Slide up from this many pixels below.
    Rise(f64),
    /// Grow from this scale factor.
    Grow(f64),
}

impl Motion {
    fn start_transform(self) -> String {
        match self {
            Motion::Rise(px) => format!("translateY({px}px)"),
            Motion::Grow(scale) => format!("scale({scale})"),
        }
    }
}

/// Timing of a reveal. Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub duration: f64,
    pub motion: Motion,
    pub delay: f64,
    pub stagger: f64,
}

impl RevealSpec {
    pub const fn new(duration: f64, motion: Motion) -> Self {
        Self {
            duration,
            motion,
            delay: 0.0,
            stagger: 0.0,
        }
    }

    pub const fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub const fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    /// Start delay of the `index`th child of a staggered list.
    pub fn item_delay(&self, index: usize) -> f64 {
        self.delay + self.stagger * index as f64
    }

    /// Inline style for `pose`, for the `index`th item (0 for single blocks).
    pub fn style(&self, pose: Pose, index: usize) -> String {
        match pose {
            Pose::Natural => String::new(),
            Pose::Hidden => format!(
                "opacity: 0; transform: {};",
                self.motion.start_transform()
            ),
            Pose::Revealed => {
                let duration = millis(self.duration);
                let delay = millis(self.item_delay(index));
                format!(
                    "opacity: 1; transform: none; transition: opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms;"
                )
            }
        }
    }
}

fn millis(secs: f64) -> u64 {
    (secs * 1000.0).round().max(0.0) as u64
}

pub const SECTION_TITLE: RevealSpec = RevealSpec::new(0.8, Motion::Rise(40.0));
pub const ABOUT_CONTENT: RevealSpec = RevealSpec::new(0.8, Motion::Rise(40.0)).with_delay(0.2);
pub const PROJECT_CARDS: RevealSpec = RevealSpec::new(0.6, Motion::Rise(40.0)).with_stagger(0.1);
pub const SKILL_CARDS: RevealSpec = RevealSpec::new(0.6, Motion::Rise(40.0)).with_stagger(0.05);
pub const EXPERIENCE_ITEMS: RevealSpec =
    RevealSpec::new(0.6, Motion::Rise(40.0)).with_stagger(0.2);
pub const CONTACT_FORM: RevealSpec = RevealSpec::new(0.8, Motion::Rise(40.0)).with_delay(0.2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pose {
    #[default]
    Natural,
    Hidden,
    Revealed,
}

/// True once a block whose top edge sits `element_top` px below the viewport
/// top has reached the trigger line. Blocks already above the viewport count.
pub fn crossed_trigger_line(element_top: f64, viewport_height: f64) -> bool {
    element_top <= viewport_height * TRIGGER_LINE
}

/// How far above the viewport the scroll observer's root reaches.
pub const OBSERVER_REACH_PX: u32 = 100_000;

/// Root margin for the scroll observer. The root runs from far above the
/// viewport down to the trigger line, so a block that jumps from below the
/// line to above the viewport in one frame still starts intersecting.
pub fn observer_root_margin() -> String {
    let below = ((1.0 - TRIGGER_LINE) * 100.0).round();
    format!("{OBSERVER_REACH_PX}px 0px -{below}% 0px")
}

/// One observer report for a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub intersecting: bool,
    pub element_top: f64,
    pub viewport_height: f64,
}

impl Sighting {
    pub fn reaches_trigger(&self) -> bool {
        self.intersecting || crossed_trigger_line(self.element_top, self.viewport_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LatchState {
    #[default]
    Unarmed,
    Armed,
    Fired,
}

/// Fires at most once per page load and is never re-armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    state: LatchState,
}

impl RevealLatch {
    /// A latch that starts hidden, for blocks the server already renders in
    /// their hidden pose.
    pub const fn armed() -> Self {
        Self {
            state: LatchState::Armed,
        }
    }

    /// Hides the block until it fires. Only an unarmed latch can be armed.
    pub fn arm(&mut self) -> bool {
        if self.state != LatchState::Unarmed {
            return false;
        }
        self.state = LatchState::Armed;
        true
    }

    /// Fires unconditionally if armed.
    pub fn fire(&mut self) -> bool {
        if self.state != LatchState::Armed {
            return false;
        }
        self.state = LatchState::Fired;
        true
    }

    /// Fires if armed and the block has reached the trigger line.
    pub fn observe(&mut self, element_top: f64, viewport_height: f64) -> bool {
        crossed_trigger_line(element_top, viewport_height) && self.fire()
    }

    /// Fires if armed and the observer saw the block at or past the trigger line.
    pub fn sight(&mut self, sighting: Sighting) -> bool {
        sighting.reaches_trigger() && self.fire()
    }

    pub fn has_fired(&self) -> bool {
        self.state == LatchState::Fired
    }

    pub fn pose(&self) -> Pose {
        match self.state {
            LatchState::Unarmed => Pose::Natural,
            LatchState::Armed => Pose::Hidden,
            LatchState::Fired => Pose::Revealed,
        }
    }
}

/// Sequences reveals back to back. Each step may overlap the end of the
/// previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<RevealSpec>,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `spec`, starting `overlap` seconds before the timeline's
    /// current end (never before zero).
    pub fn then(mut self, spec: RevealSpec, overlap: f64) -> Self {
        let start = (self.end - overlap).max(0.0);
        self.end = self.end.max(start + spec.duration);
        self.steps.push(spec.with_delay(start + spec.delay));
        self
    }

    pub fn steps(&self) -> &[RevealSpec] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<RevealSpec> {
        self.steps.get(index).copied()
    }

    pub fn duration(&self) -> f64 {
        self.end
    }
}

pub mod hero {
    use super::{Motion, RevealSpec, Timeline};

    /// Name, subtitle, portrait, then the call-to-action buttons.
    pub fn timeline() -> Timeline {
        Timeline::new()
            .then(RevealSpec::new(1.0, Motion::Rise(50.0)), 0.0)
            .then(RevealSpec::new(0.8, Motion::Rise(30.0)), 0.5)
            .then(RevealSpec::new(0.8, Motion::Grow(0.9)), 0.5)
            .then(RevealSpec::new(0.6, Motion::Rise(20.0)), 0.4)
    }

    /// The four steps of [`timeline`] in order.
    pub fn steps() -> [RevealSpec; 4] {
        let tl = timeline();
        std::array::from_fn(|i| tl.steps()[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.pose(), Pose::Natural);
        assert!(latch.arm());
        assert_eq!(latch.pose(), Pose::Hidden);

        // below the trigger line
        assert!(!latch.observe(900.0, 1000.0));
        assert!(latch.observe(700.0, 1000.0));
        assert_eq!(latch.pose(), Pose::Revealed);

        // scrolling away and back never re-arms
        assert!(!latch.observe(1500.0, 1000.0));
        assert!(!latch.observe(100.0, 1000.0));
        assert!(!latch.arm());
        assert_eq!(latch.pose(), Pose::Revealed);
    }

    #[test]
    fn test_unarmed_latch_stays_visible() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(0.0, 1000.0));
        assert!(!latch.fire());
        assert_eq!(latch.pose(), Pose::Natural);
        assert_eq!(SECTION_TITLE.style(latch.pose(), 0), "");
    }

    #[test]
    fn test_scroll_jump_past_trigger_reveals() {
        let mut latch = RevealLatch::default();
        latch.arm();
        // below the line: the observer reports it as outside its root
        let below = Sighting {
            intersecting: false,
            element_top: 1500.0,
            viewport_height: 1000.0,
        };
        assert!(!latch.sight(below));
        assert_eq!(latch.pose(), Pose::Hidden);

        // one frame later the block is already above the viewport
        let past = Sighting {
            intersecting: true,
            element_top: -1500.0,
            viewport_height: 1000.0,
        };
        assert!(latch.sight(past));
        assert_eq!(latch.pose(), Pose::Revealed);
    }

    #[test]
    fn test_first_sighting_above_viewport_reveals() {
        let mut latch = RevealLatch::default();
        latch.arm();
        // the window height couldn't be read, the top edge still decides
        let sighting = Sighting {
            intersecting: false,
            element_top: -3000.0,
            viewport_height: 0.0,
        };
        assert!(sighting.reaches_trigger());
        assert!(latch.sight(sighting));
        assert!(latch.has_fired());
    }

    #[test]
    fn test_observer_root_covers_everything_above_trigger() {
        assert_eq!(observer_root_margin(), "100000px 0px -20% 0px");
    }

    #[test]
    fn test_prearmed_latch_starts_hidden() {
        let mut latch = RevealLatch::armed();
        assert_eq!(latch.pose(), Pose::Hidden);
        assert!(!latch.arm());
        assert!(latch.fire());
        assert_eq!(latch.pose(), Pose::Revealed);
        for step in hero::steps() {
            assert!(step.style(Pose::Hidden, 0).starts_with("opacity: 0;"));
        }
    }

    #[test]
    fn test_block_above_viewport_reveals() {
        assert!(crossed_trigger_line(-2000.0, 800.0));
        assert!(crossed_trigger_line(640.0, 800.0));
        assert!(!crossed_trigger_line(641.0, 800.0));
    }

    #[test]
    fn test_stagger_delays() {
        assert!(close(PROJECT_CARDS.item_delay(0), 0.0));
        assert!(close(PROJECT_CARDS.item_delay(3), 0.3));
        assert!(close(SKILL_CARDS.item_delay(5), 0.25));
        assert!(close(ABOUT_CONTENT.item_delay(0), 0.2));
    }

    #[test]
    fn test_styles() {
        assert_eq!(
            SECTION_TITLE.style(Pose::Hidden, 0),
            "opacity: 0; transform: translateY(40px);"
        );
        assert_eq!(
            EXPERIENCE_ITEMS.style(Pose::Revealed, 1),
            "opacity: 1; transform: none; transition: opacity 600ms ease-out 200ms, transform 600ms ease-out 200ms;"
        );
        let grow = RevealSpec::new(0.8, Motion::Grow(0.9));
        assert_eq!(
            grow.style(Pose::Hidden, 0),
            "opacity: 0; transform: scale(0.9);"
        );
    }

    #[test]
    fn test_hero_timeline_overlaps() {
        let tl = hero::timeline();
        let starts = tl.steps().iter().map(|s| s.delay).collect::<Vec<_>>();
        let expected = [0.0, 0.5, 0.8, 1.2];
        assert_eq!(starts.len(), expected.len());
        for (got, want) in starts.iter().zip(expected) {
            assert!(close(*got, want), "{got} != {want}");
        }
        assert!(close(tl.duration(), 1.8));
        assert_eq!(tl.step(2).unwrap().motion, Motion::Grow(0.9));
        assert!(tl.step(4).is_none());
        assert_eq!(hero::steps().to_vec(), tl.steps().to_vec());
    }

    #[test]
    fn test_timeline_never_starts_before_zero() {
        let tl = Timeline::new().then(SECTION_TITLE, 5.0);
        assert!(close(tl.steps()[0].delay, 0.0));
        assert!(close(tl.duration(), 0.8));
    }
}
