use crate::config;

use super::binding::ViewportMotion;
use super::ease::Ease;
use super::value::{Lerp, VisualState};

// Absorbs float error when `now - start` lands a hair under `duration`.
const SETTLE_EPSILON: f64 = 1e-9;

/// What starts a reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First time the element becomes visible.
    #[default]
    Viewport,
    /// As soon as the element is mounted.
    Mount,
}

/// One-shot transition from `initial` to `target`. Reveals never replay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub initial: VisualState,
    pub target: VisualState,
    /// Seconds.
    pub duration: f64,
    /// Seconds between the trigger and the start of the transition.
    pub delay: f64,
    pub ease: Ease,
    /// Visible ratio the element has to exceed to trigger.
    pub threshold: f64,
    pub trigger: RevealTrigger,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self::fade_in_up()
    }
}

impl RevealSpec {
    pub const fn new(initial: VisualState) -> Self {
        Self {
            initial,
            target: VisualState::SETTLED,
            duration: config::REVEAL_DURATION,
            delay: 0.0,
            ease: Ease::EaseOut,
            threshold: 0.0,
            trigger: RevealTrigger::Viewport,
        }
    }

    pub const fn fade_in_up() -> Self {
        Self::rise(60.0)
    }

    pub const fn fade_in_left() -> Self {
        Self::new(VisualState::hidden().with_offset(-60.0, 0.0))
    }

    pub const fn fade_in_right() -> Self {
        Self::new(VisualState::hidden().with_offset(60.0, 0.0))
    }

    /// Fades in while moving up from `dy` pixels below.
    pub const fn rise(dy: f64) -> Self {
        Self::new(VisualState::hidden().with_offset(0.0, dy))
    }

    /// Fades in while growing from `scale`.
    pub const fn scale_in(scale: f64) -> Self {
        Self::new(VisualState::hidden().with_scale(scale, scale))
    }

    /// Horizontal wipe, used for heading underlines.
    pub const fn underline() -> Self {
        Self::new(VisualState::SETTLED.with_scale(0.0, 1.0))
    }

    pub const fn fade() -> Self {
        Self::new(VisualState::hidden())
    }

    /// Slides down from above without fading.
    pub const fn drop_in() -> Self {
        Self::new(VisualState::SETTLED.with_offset(0.0, -100.0))
    }

    pub const fn with_duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    pub const fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    #[cfg(test)]
    pub const fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    #[cfg(test)]
    pub const fn with_threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    pub const fn with_target(self, target: VisualState) -> Self {
        Self { target, ..self }
    }

    pub const fn on_mount(self) -> Self {
        Self {
            trigger: RevealTrigger::Mount,
            ..self
        }
    }

    /// Delay with negative or non-finite values treated as zero.
    pub fn start_delay(&self) -> f64 {
        non_negative(self.delay)
    }

    pub fn transition_duration(&self) -> f64 {
        non_negative(self.duration)
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    Unobserved,
    /// Triggered; the transition runs from `start` (which may still be in
    /// the future while the delay elapses).
    Animating { start: f64 },
    Settled,
    Disposed,
}

/// State machine behind a single reveal:
/// `Unobserved -> Animating -> Settled`, with `Disposed` reachable from
/// every state.
#[derive(Clone, Debug)]
pub struct Reveal {
    spec: RevealSpec,
    phase: RevealPhase,
    last: VisualState,
}

impl Reveal {
    pub fn new(spec: RevealSpec) -> Self {
        Self {
            spec,
            phase: RevealPhase::Unobserved,
            last: spec.initial,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// When the transition starts (or started), once triggered.
    #[cfg(test)]
    pub fn start_time(&self) -> Option<f64> {
        match self.phase {
            RevealPhase::Animating { start } => Some(start),
            _ => None,
        }
    }
}

impl ViewportMotion for Reveal {
    type Frame = VisualState;

    fn threshold(&self) -> f64 {
        self.spec.threshold
    }

    fn trigger(&self) -> RevealTrigger {
        self.spec.trigger
    }

    fn start(&mut self, now: f64) -> bool {
        if self.phase != RevealPhase::Unobserved {
            return false;
        }
        self.phase = RevealPhase::Animating {
            start: now + self.spec.start_delay(),
        };
        true
    }

    fn sample(&mut self, now: f64) -> VisualState {
        let state = match self.phase {
            RevealPhase::Unobserved => self.spec.initial,
            RevealPhase::Animating { start } => {
                let elapsed = now - start;
                let duration = self.spec.transition_duration();
                if elapsed < 0.0 {
                    self.spec.initial
                } else if elapsed + SETTLE_EPSILON >= duration {
                    self.phase = RevealPhase::Settled;
                    self.spec.target
                } else {
                    let t = self.spec.ease.apply(elapsed / duration);
                    VisualState::lerp(&self.spec.initial, &self.spec.target, t)
                }
            }
            RevealPhase::Settled => self.spec.target,
            RevealPhase::Disposed => self.last,
        };
        self.last = state;
        state
    }

    fn settle(&mut self) {
        if self.phase != RevealPhase::Disposed {
            self.phase = RevealPhase::Settled;
        }
    }

    fn is_settled(&self) -> bool {
        self.phase == RevealPhase::Settled
    }

    fn dispose(&mut self) {
        self.phase = RevealPhase::Disposed;
    }
}
