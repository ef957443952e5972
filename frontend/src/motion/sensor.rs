//! Capabilities the motion layer needs from its host. The browser versions
//! live in `crate::dom`; tests drive the same code with the manual fakes in
//! `motion::testing`.

use std::rc::Rc;

use crate::error::DomError;

/// Monotonic-enough wall clock, in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// A registration that can be released. `cancel` must be idempotent, and
/// implementations cancel on drop.
pub trait Subscription {
    fn cancel(&mut self);
}

/// Per-frame callbacks.
pub trait FrameScheduler {
    /// Calls `on_frame` once per frame, starting with the next one, for as
    /// long as it returns `true`. Never calls it synchronously from here.
    fn request_frames(
        &self,
        on_frame: Box<dyn FnMut() -> bool>,
    ) -> Result<Box<dyn Subscription>, DomError>;
}

/// Viewport intersection signal for a target.
pub trait IntersectionSensor<T: ?Sized> {
    /// Reports the visible ratio of `target` (0.0 to 1.0) each time it
    /// crosses `threshold`. Never calls `on_change` synchronously from here.
    fn observe(
        &self,
        target: &T,
        threshold: f64,
        on_change: Box<dyn FnMut(f64)>,
    ) -> Result<Box<dyn Subscription>, DomError>;
}

/// Clock and frame source shared by every binding on a page.
#[derive(Clone)]
pub struct MotionContext {
    pub clock: Rc<dyn Clock>,
    pub frames: Rc<dyn FrameScheduler>,
}

impl MotionContext {
    pub fn new(clock: Rc<dyn Clock>, frames: Rc<dyn FrameScheduler>) -> Self {
        Self { clock, frames }
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }
}
