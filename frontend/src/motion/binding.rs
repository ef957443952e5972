use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::reveal::RevealTrigger;
use super::sensor::{Clock, FrameScheduler, IntersectionSensor, MotionContext, Subscription};

/// A one-shot animation gated on viewport visibility. Implemented by single
/// reveals and by stagger groups.
pub trait ViewportMotion {
    type Frame: Clone + 'static;

    fn threshold(&self) -> f64;

    fn trigger(&self) -> RevealTrigger;

    /// Starts the transition at `now` if it has not been started yet.
    /// Returns whether this call started it.
    fn start(&mut self, now: f64) -> bool;

    /// Current frame. Moves to the settled state once the transition is over.
    fn sample(&mut self, now: f64) -> Self::Frame;

    /// Skips straight to the settled state.
    fn settle(&mut self);

    fn is_settled(&self) -> bool;

    fn dispose(&mut self);

    /// Feeds a visibility ratio. Returns whether it started the transition.
    fn on_intersection(&mut self, ratio: f64, now: f64) -> bool {
        ratio > self.threshold() && self.start(now)
    }
}

struct Inner<M: ViewportMotion> {
    motion: M,
    clock: Rc<dyn Clock>,
    frames: Rc<dyn FrameScheduler>,
    render: Rc<dyn Fn(M::Frame)>,
    sensor: Option<Box<dyn Subscription>>,
    frame_loop: Option<Box<dyn Subscription>>,
}

/// Ties a [`ViewportMotion`] to a target: listens for the first visibility
/// signal, runs frames until the motion settles, then lets go of the sensor.
/// Dropping the binding releases everything it holds.
pub struct ViewportBinding<M: ViewportMotion> {
    inner: Rc<RefCell<Inner<M>>>,
}

impl<M: ViewportMotion + 'static> ViewportBinding<M> {
    pub fn bind<T: ?Sized>(
        ctx: &MotionContext,
        sensor: &dyn IntersectionSensor<T>,
        target: &T,
        motion: M,
        render: impl Fn(M::Frame) + 'static,
    ) -> Self {
        let trigger = motion.trigger();
        let threshold = motion.threshold();
        let inner = Rc::new(RefCell::new(Inner {
            motion,
            clock: ctx.clock.clone(),
            frames: ctx.frames.clone(),
            render: Rc::new(render),
            sensor: None,
            frame_loop: None,
        }));

        match trigger {
            RevealTrigger::Mount => {
                let now = ctx.now();
                let started = inner.borrow_mut().motion.start(now);
                if started {
                    run_frames(&inner);
                }
            }
            RevealTrigger::Viewport => {
                let weak = Rc::downgrade(&inner);
                let observed = sensor.observe(
                    target,
                    threshold,
                    Box::new(move |ratio| on_signal(&weak, ratio)),
                );
                match observed {
                    Ok(subscription) => inner.borrow_mut().sensor = Some(subscription),
                    Err(err) => {
                        warn!("viewport sensor unavailable, showing content as is: {err}");
                        settle_now(&inner);
                    }
                }
            }
        }

        Self { inner }
    }

    #[cfg(test)]
    pub fn is_settled(&self) -> bool {
        self.inner.borrow().motion.is_settled()
    }

    /// Whether the binding still listens for visibility changes.
    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.inner.borrow().sensor.is_some()
    }

    #[cfg(test)]
    pub fn with_motion<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        f(&self.inner.borrow().motion)
    }

    /// Cancels the transition and releases the sensor and frame loop. Safe
    /// to call any number of times.
    pub fn dispose(&self) {
        let (sensor, frame_loop) = {
            let mut inner = self.inner.borrow_mut();
            inner.motion.dispose();
            (inner.sensor.take(), inner.frame_loop.take())
        };
        for mut subscription in sensor.into_iter().chain(frame_loop) {
            subscription.cancel();
        }
    }
}

impl<M: ViewportMotion> Drop for ViewportBinding<M> {
    fn drop(&mut self) {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            return;
        };
        inner.motion.dispose();
        let sensor = inner.sensor.take();
        let frame_loop = inner.frame_loop.take();
        drop(inner);
        for mut subscription in sensor.into_iter().chain(frame_loop) {
            subscription.cancel();
        }
    }
}

fn on_signal<M: ViewportMotion + 'static>(weak: &Weak<RefCell<Inner<M>>>, ratio: f64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let started = {
        let mut guard = inner.borrow_mut();
        let now = guard.clock.now();
        guard.motion.on_intersection(ratio, now)
    };
    if started {
        debug!("reveal triggered at ratio {ratio:.2}");
        run_frames(&inner);
    }
}

fn run_frames<M: ViewportMotion + 'static>(inner: &Rc<RefCell<Inner<M>>>) {
    let weak = Rc::downgrade(inner);
    let frames = inner.borrow().frames.clone();
    let requested = frames.request_frames(Box::new(move || match weak.upgrade() {
        Some(inner) => step(&inner),
        None => false,
    }));
    match requested {
        Ok(frame_loop) => inner.borrow_mut().frame_loop = Some(frame_loop),
        Err(err) => {
            warn!("animation frames unavailable, skipping transition: {err}");
            settle_now(inner);
        }
    }
}

/// One frame. Returns whether more frames are needed.
fn step<M: ViewportMotion>(inner: &Rc<RefCell<Inner<M>>>) -> bool {
    let (frame, settled, render, sensor) = {
        let mut guard = inner.borrow_mut();
        let now = guard.clock.now();
        let frame = guard.motion.sample(now);
        let settled = guard.motion.is_settled();
        let sensor = if settled { guard.sensor.take() } else { None };
        (frame, settled, guard.render.clone(), sensor)
    };
    if let Some(mut sensor) = sensor {
        sensor.cancel();
        debug!("reveal settled, sensor released");
    }
    // Rendering may re-enter the component tree, so no borrow is held here.
    render(frame);
    !settled
}

fn settle_now<M: ViewportMotion>(inner: &Rc<RefCell<Inner<M>>>) {
    let (frame, render) = {
        let mut guard = inner.borrow_mut();
        guard.motion.settle();
        let now = guard.clock.now();
        (guard.motion.sample(now), guard.render.clone())
    };
    render(frame);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::motion::ease::Ease;
    use crate::motion::reveal::{Reveal, RevealPhase, RevealSpec};
    use crate::motion::testing::{ManualClock, ManualFrames, ManualSensor};
    use crate::motion::value::VisualState;

    struct Harness {
        clock: ManualClock,
        frames: ManualFrames,
        sensor: ManualSensor,
        rendered: Rc<RefCell<Vec<VisualState>>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                clock: ManualClock::default(),
                frames: ManualFrames::default(),
                sensor: ManualSensor::default(),
                rendered: Rc::default(),
            }
        }

        fn ctx(&self) -> MotionContext {
            MotionContext::new(Rc::new(self.clock.clone()), Rc::new(self.frames.clone()))
        }

        fn bind(&self, spec: RevealSpec) -> ViewportBinding<Reveal> {
            let rendered = self.rendered.clone();
            ViewportBinding::bind(
                &self.ctx(),
                &self.sensor,
                "card",
                Reveal::new(spec),
                move |state| rendered.borrow_mut().push(state),
            )
        }

        fn last(&self) -> Option<VisualState> {
            self.rendered.borrow().last().copied()
        }
    }

    fn spec() -> RevealSpec {
        RevealSpec::fade_in_up().with_ease(Ease::Linear)
    }

    #[test]
    fn waits_for_the_sensor_before_animating() {
        let h = Harness::new();
        let binding = h.bind(spec());
        assert!(binding.is_observing());
        assert_eq!(h.sensor.active(), 1);

        h.frames.step();
        assert_eq!(h.frames.active(), 0);
        assert!(h.rendered.borrow().is_empty());
    }

    #[test]
    fn observes_with_the_spec_threshold() {
        let h = Harness::new();
        let _binding = h.bind(spec().with_threshold(0.25));
        assert_eq!(h.sensor.threshold_of("card"), Some(0.25));

        h.sensor.deliver("card", 0.2);
        assert_eq!(h.frames.active(), 0);
        h.sensor.deliver("card", 0.3);
        assert_eq!(h.frames.active(), 1);
    }

    #[test]
    fn runs_to_settled_then_releases_the_sensor() {
        let h = Harness::new();
        let binding = h.bind(spec());

        h.clock.set(1.0);
        h.sensor.deliver("card", 0.2);
        assert_eq!(h.frames.active(), 1);

        h.clock.set(1.3);
        h.frames.step();
        let mid = h.last().unwrap();
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!(binding.is_observing());

        h.clock.set(1.7);
        h.frames.step();
        assert_eq!(h.last(), Some(VisualState::SETTLED));
        assert!(binding.is_settled());
        assert!(!binding.is_observing());
        assert_eq!(h.sensor.active(), 0);
        assert_eq!(h.frames.active(), 0);
    }

    #[test]
    fn settled_binding_ignores_redelivered_signals() {
        let h = Harness::new();
        let binding = h.bind(spec());
        h.sensor.deliver("card", 1.0);
        h.clock.set(1.0);
        h.frames.step();
        assert!(binding.is_settled());
        let renders = h.rendered.borrow().len();

        h.sensor.deliver("card", 0.0);
        h.sensor.deliver("card", 1.0);
        h.frames.step();
        assert_eq!(h.rendered.borrow().len(), renders);
        assert_eq!(h.last(), Some(VisualState::SETTLED));
    }

    #[test]
    fn mount_trigger_skips_the_sensor() {
        let h = Harness::new();
        let binding = h.bind(spec().on_mount());
        assert_eq!(h.sensor.active(), 0);
        assert_eq!(h.frames.active(), 1);

        h.clock.set(0.6);
        h.frames.step();
        assert!(binding.is_settled());
    }

    #[test]
    fn drop_mid_transition_cancels_everything() {
        let h = Harness::new();
        let binding = h.bind(spec());
        h.sensor.deliver("card", 1.0);
        h.clock.set(0.1);
        h.frames.step();
        assert_eq!(h.frames.active(), 1);

        drop(binding);
        assert_eq!(h.frames.active(), 0);
        assert_eq!(h.sensor.active(), 0);

        let renders = h.rendered.borrow().len();
        h.sensor.deliver("card", 1.0);
        h.frames.step();
        assert_eq!(h.rendered.borrow().len(), renders);
    }

    #[test]
    fn dispose_is_idempotent() {
        let h = Harness::new();
        let binding = h.bind(spec());
        binding.dispose();
        binding.dispose();
        assert_eq!(binding.with_motion(|m| m.phase()), RevealPhase::Disposed);
        assert_eq!(h.sensor.active(), 0);
        drop(binding);
    }

    #[test]
    fn sensor_failure_shows_content_settled() {
        let h = Harness::new();
        h.sensor.fail_next();
        let binding = h.bind(spec());
        assert!(binding.is_settled());
        assert_eq!(h.last(), Some(VisualState::SETTLED));
    }

    #[test]
    fn frame_failure_shows_content_settled() {
        let h = Harness::new();
        h.frames.fail_next();
        let binding = h.bind(spec());
        h.sensor.deliver("card", 1.0);
        assert!(binding.is_settled());
        assert_eq!(h.last(), Some(VisualState::SETTLED));
    }
}
