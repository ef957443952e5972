use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::ease::Ease;
use super::sensor::{Clock, MotionContext, Subscription};
use super::value::{Lerp, Pose};

const GOLDEN_RATIO_FRACTION: f64 = 0.618_033_988_749_895;

/// A keyframe loop that repeats forever, independent of scroll and
/// visibility. Keyframes are spread evenly from the start to the end of a
/// cycle; each cycle restarts at the first one.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientMotionSpec {
    pub keyframes: Vec<Pose>,
    /// Seconds per cycle.
    pub cycle_duration: f64,
    /// Seconds the loop is advanced by, so instances do not pulse together.
    pub phase_offset: f64,
    /// Curve applied within each keyframe segment.
    pub ease: Ease,
}

impl AmbientMotionSpec {
    pub fn new(keyframes: impl Into<Vec<Pose>>, cycle_duration: f64) -> Self {
        Self {
            keyframes: keyframes.into(),
            cycle_duration,
            phase_offset: 0.0,
            ease: Ease::EaseInOut,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_phase_offset(mut self, phase_offset: f64) -> Self {
        self.phase_offset = phase_offset;
        self
    }

    /// Phase for the `index`-th instance of this loop on the page.
    pub fn for_instance(self, index: usize) -> Self {
        let phase = phase_for_index(index, self.cycle_duration);
        self.with_phase_offset(phase)
    }

    pub fn rest_pose(&self) -> Pose {
        self.keyframes.first().copied().unwrap_or_default()
    }

    /// Pose `elapsed` seconds after the loop started.
    pub fn sample(&self, elapsed: f64) -> Pose {
        let keys = &self.keyframes;
        let cycle = self.cycle_duration;
        if keys.len() < 2 || !(cycle > 0.0) || !cycle.is_finite() || !elapsed.is_finite() {
            return self.rest_pose();
        }
        let local = (elapsed + self.phase_offset).rem_euclid(cycle) / cycle;
        let segments = (keys.len() - 1) as f64;
        let position = local * segments;
        let i = (position.floor() as usize).min(keys.len() - 2);
        let t = self.ease.apply(position - i as f64);
        Pose::lerp(&keys[i], &keys[i + 1], t)
    }
}

/// Deterministic phase offset in `[0, cycle)`. Consecutive indices land far
/// apart and no two indices share a phase.
pub fn phase_for_index(index: usize, cycle: f64) -> f64 {
    if !(cycle > 0.0) || !cycle.is_finite() {
        return 0.0;
    }
    (index as f64 * GOLDEN_RATIO_FRACTION).fract() * cycle
}

/// Where a floating background particle sits and how long its loop takes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticlePlacement {
    /// Percent of the viewport width.
    pub left: f64,
    /// Percent of the viewport height.
    pub top: f64,
    pub cycle_duration: f64,
}

impl ParticlePlacement {
    /// Seeded by `seed` and `index` so every render places particle `index`
    /// at the same spot.
    pub fn for_index(seed: u64, index: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed ^ (index as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            cycle_duration: 10.0 + 2.0 * index as f64,
        }
    }

    pub fn field(seed: u64, count: usize) -> Vec<Self> {
        (0..count).map(|i| Self::for_index(seed, i)).collect()
    }
}

struct LoopState {
    spec: AmbientMotionSpec,
    started_at: f64,
    clock: Rc<dyn Clock>,
    render: Rc<dyn Fn(Pose)>,
    frames: Option<Box<dyn Subscription>>,
    last: Pose,
    stopped: bool,
}

/// Owner of a running loop. Stopping is idempotent; dropping stops.
pub struct LoopHandle {
    state: Rc<RefCell<LoopState>>,
}

/// Starts `spec` and renders a pose every frame until the handle stops.
pub fn start_loop(
    ctx: &MotionContext,
    spec: AmbientMotionSpec,
    render: impl Fn(Pose) + 'static,
) -> LoopHandle {
    let rest = spec.rest_pose();
    let state = Rc::new(RefCell::new(LoopState {
        spec,
        started_at: ctx.now(),
        clock: ctx.clock.clone(),
        render: Rc::new(render),
        frames: None,
        last: rest,
        stopped: false,
    }));

    let weak = Rc::downgrade(&state);
    match ctx.frames.request_frames(Box::new(move || frame(&weak))) {
        Ok(frames) => state.borrow_mut().frames = Some(frames),
        Err(err) => {
            warn!("animation frames unavailable, loop stays at rest: {err}");
            state.borrow_mut().stopped = true;
        }
    }
    LoopHandle { state }
}

fn frame(weak: &Weak<RefCell<LoopState>>) -> bool {
    let Some(state) = weak.upgrade() else {
        return false;
    };
    let (pose, render) = {
        let mut guard = state.borrow_mut();
        if guard.stopped {
            return false;
        }
        let elapsed = guard.clock.now() - guard.started_at;
        let pose = guard.spec.sample(elapsed);
        guard.last = pose;
        (pose, guard.render.clone())
    };
    render(pose);
    true
}

impl LoopHandle {
    /// Stops the loop where it is. Safe to call repeatedly, including after
    /// the element is gone.
    pub fn stop(&self) {
        let (frames, last) = {
            let Ok(mut guard) = self.state.try_borrow_mut() else {
                return;
            };
            if guard.stopped && guard.frames.is_none() {
                return;
            }
            guard.stopped = true;
            (guard.frames.take(), guard.last)
        };
        if let Some(mut frames) = frames {
            frames.cancel();
            debug!("ambient loop stopped at {last:?}");
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        !self.state.borrow().stopped
    }

    /// Last rendered pose; the rest pose before the first frame.
    #[cfg(test)]
    pub fn current(&self) -> Pose {
        self.state.borrow().last
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::motion::testing::{ManualClock, ManualFrames};
    use crate::motion::value::Vec2;

    fn drift() -> AmbientMotionSpec {
        AmbientMotionSpec::new(
            [Pose::at(0.0, 0.0), Pose::at(100.0, -100.0), Pose::at(0.0, 0.0)],
            10.0,
        )
        .with_ease(Ease::Linear)
    }

    #[test]
    fn samples_evenly_spaced_keyframes() {
        let spec = drift();
        assert_eq!(spec.sample(0.0).offset, Vec2::ZERO);
        assert_eq!(spec.sample(5.0).offset, Vec2::new(100.0, -100.0));
        assert_eq!(spec.sample(2.5).offset, Vec2::new(50.0, -50.0));
        assert_eq!(spec.sample(7.5).offset, Vec2::new(50.0, -50.0));
    }

    #[test]
    fn wraps_every_cycle() {
        let spec = drift();
        for elapsed in [1.0, 3.3, 8.9] {
            let a = spec.sample(elapsed);
            let b = spec.sample(elapsed + 10.0);
            let c = spec.sample(elapsed + 30.0);
            assert!((a.offset.x - b.offset.x).abs() < 1e-9);
            assert!((a.offset.x - c.offset.x).abs() < 1e-9);
        }
    }

    #[test]
    fn phase_offset_advances_the_loop() {
        let shifted = drift().with_phase_offset(5.0);
        assert_eq!(shifted.sample(0.0).offset, Vec2::new(100.0, -100.0));
    }

    #[test]
    fn rotation_runs_a_full_turn() {
        let ring = AmbientMotionSpec::new([Pose::REST, Pose::REST.rotated(360.0)], 8.0)
            .with_ease(Ease::Linear);
        assert_eq!(ring.sample(2.0).rotate, 90.0);
        assert_eq!(ring.sample(8.0).rotate, 0.0);
    }

    #[test]
    fn degenerate_specs_rest() {
        let single = AmbientMotionSpec::new([Pose::REST.scaled(1.5)], 3.0);
        assert_eq!(single.sample(1.0).scale, 1.5);

        let empty = AmbientMotionSpec::new(Vec::new(), 3.0);
        assert_eq!(empty.sample(1.0), Pose::REST);

        let frozen = AmbientMotionSpec::new(drift().keyframes, 0.0);
        assert_eq!(frozen.sample(4.0), Pose::at(0.0, 0.0));
        assert_eq!(drift().sample(f64::INFINITY), Pose::at(0.0, 0.0));
    }

    #[test]
    fn distinct_instances_get_distinct_phases() {
        let phases: Vec<f64> = (0..50).map(|i| phase_for_index(i, 4.0)).collect();
        for (i, a) in phases.iter().enumerate() {
            assert!((0.0..4.0).contains(a));
            for b in &phases[i + 1..] {
                assert!((a - b).abs() > 1e-6);
            }
        }
        assert_eq!(phase_for_index(3, 4.0), phase_for_index(3, 4.0));
        assert_eq!(phase_for_index(3, 0.0), 0.0);
    }

    #[test]
    fn particle_placement_is_reproducible() {
        let first = ParticlePlacement::field(42, 20);
        let second = ParticlePlacement::field(42, 20);
        assert_eq!(first, second);
        for (i, p) in first.iter().enumerate() {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert_eq!(p.cycle_duration, 10.0 + 2.0 * i as f64);
        }
        assert_ne!(first[0], first[1]);
    }

    fn harness() -> (ManualClock, ManualFrames, MotionContext, Rc<RefCell<Vec<Pose>>>) {
        let clock = ManualClock::default();
        let frames = ManualFrames::default();
        let ctx = MotionContext::new(Rc::new(clock.clone()), Rc::new(frames.clone()));
        (clock, frames, ctx, Rc::default())
    }

    #[test]
    fn loop_renders_every_frame_until_stopped() {
        let (clock, frames, ctx, rendered) = harness();
        let sink = rendered.clone();
        let handle = start_loop(&ctx, drift(), move |pose| sink.borrow_mut().push(pose));
        assert!(handle.is_running());

        for _ in 0..4 {
            clock.advance(1.25);
            frames.step();
        }
        assert_eq!(rendered.borrow().len(), 4);
        assert_eq!(handle.current().offset, Vec2::new(100.0, -100.0));

        handle.stop();
        frames.steps(3);
        assert_eq!(rendered.borrow().len(), 4);
        assert_eq!(frames.active(), 0);
    }

    #[test]
    fn stop_twice_leaves_a_stable_pose() {
        let (clock, frames, ctx, _) = harness();
        let handle = start_loop(&ctx, drift(), |_| {});
        clock.set(2.5);
        frames.step();
        let pose = handle.current();

        handle.stop();
        handle.stop();
        assert!(!handle.is_running());
        clock.set(9.0);
        frames.step();
        assert_eq!(handle.current(), pose);
    }

    #[test]
    fn dropping_the_handle_stops_the_loop() {
        let (_, frames, ctx, rendered) = harness();
        let sink = rendered.clone();
        let handle = start_loop(&ctx, drift(), move |pose| sink.borrow_mut().push(pose));
        drop(handle);
        frames.step();
        assert!(rendered.borrow().is_empty());
        assert_eq!(frames.active(), 0);
    }

    #[test]
    fn frame_failure_leaves_loop_at_rest() {
        let (_, frames, ctx, _) = harness();
        frames.fail_next();
        let handle = start_loop(&ctx, drift().with_phase_offset(3.0), |_| {});
        assert!(!handle.is_running());
        assert_eq!(handle.current(), Pose::at(0.0, 0.0));
        handle.stop();
    }
}
