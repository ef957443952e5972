//! Hand-driven stand-ins for the browser capabilities.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::sensor::{Clock, FrameScheduler, IntersectionSensor, Subscription};
use crate::error::DomError;

#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

struct Flag(Rc<Cell<bool>>);

impl Subscription for Flag {
    fn cancel(&mut self) {
        self.0.set(false);
    }
}

impl Drop for Flag {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct FrameLoop {
    on_frame: Option<Box<dyn FnMut() -> bool>>,
    active: Rc<Cell<bool>>,
}

/// Frame source that only advances when `step` is called.
#[derive(Clone, Default)]
pub struct ManualFrames {
    loops: Rc<RefCell<Vec<FrameLoop>>>,
    fail_next: Rc<Cell<bool>>,
}

impl ManualFrames {
    /// Runs one frame of every active loop.
    pub fn step(&self) {
        let count = self.loops.borrow().len();
        for i in 0..count {
            let on_frame = {
                let mut loops = self.loops.borrow_mut();
                if !loops[i].active.get() {
                    continue;
                }
                loops[i].on_frame.take()
            };
            let Some(mut on_frame) = on_frame else {
                continue;
            };
            let keep = on_frame();
            let mut loops = self.loops.borrow_mut();
            if keep && loops[i].active.get() {
                loops[i].on_frame = Some(on_frame);
            } else {
                loops[i].active.set(false);
            }
        }
    }

    pub fn steps(&self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn active(&self) -> usize {
        self.loops
            .borrow()
            .iter()
            .filter(|l| l.active.get())
            .count()
    }

    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frames(
        &self,
        on_frame: Box<dyn FnMut() -> bool>,
    ) -> Result<Box<dyn Subscription>, DomError> {
        if self.fail_next.replace(false) {
            return Err(DomError::Js("requestAnimationFrame unavailable".into()));
        }
        let active = Rc::new(Cell::new(true));
        self.loops.borrow_mut().push(FrameLoop {
            on_frame: Some(on_frame),
            active: active.clone(),
        });
        Ok(Box::new(Flag(active)))
    }
}

struct Watcher {
    target: String,
    threshold: f64,
    on_change: Option<Box<dyn FnMut(f64)>>,
    active: Rc<Cell<bool>>,
}

/// Intersection sensor keyed by target name; signals are delivered by hand.
#[derive(Clone, Default)]
pub struct ManualSensor {
    watchers: Rc<RefCell<Vec<Watcher>>>,
    fail_next: Rc<Cell<bool>>,
}

impl ManualSensor {
    /// Delivers `ratio` to every active watcher of `target`.
    pub fn deliver(&self, target: &str, ratio: f64) {
        let count = self.watchers.borrow().len();
        for i in 0..count {
            let on_change = {
                let mut watchers = self.watchers.borrow_mut();
                let watcher = &mut watchers[i];
                if watcher.target != target || !watcher.active.get() {
                    continue;
                }
                watcher.on_change.take()
            };
            if let Some(mut on_change) = on_change {
                on_change(ratio);
                self.watchers.borrow_mut()[i].on_change = Some(on_change);
            }
        }
    }

    pub fn active(&self) -> usize {
        self.watchers
            .borrow()
            .iter()
            .filter(|w| w.active.get())
            .count()
    }

    pub fn threshold_of(&self, target: &str) -> Option<f64> {
        self.watchers
            .borrow()
            .iter()
            .find(|w| w.target == target)
            .map(|w| w.threshold)
    }

    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }
}

impl IntersectionSensor<str> for ManualSensor {
    fn observe(
        &self,
        target: &str,
        threshold: f64,
        on_change: Box<dyn FnMut(f64)>,
    ) -> Result<Box<dyn Subscription>, DomError> {
        if self.fail_next.replace(false) {
            return Err(DomError::Js("IntersectionObserver unavailable".into()));
        }
        let active = Rc::new(Cell::new(true));
        self.watchers.borrow_mut().push(Watcher {
            target: target.to_string(),
            threshold,
            on_change: Some(on_change),
            active: active.clone(),
        });
        Ok(Box::new(Flag(active)))
    }
}
