//! Browser implementations of the motion and navigation capabilities.

mod frames;
mod links;
mod navigation;
mod viewport;

use std::rc::Rc;

use crate::motion::MotionContext;

pub use frames::{AnimationFrames, PerformanceClock};
pub use links::open_external;
pub use navigation::scroll_to;
pub use viewport::DomIntersectionSensor;

/// Clock and frame source backed by the window.
pub fn motion_context() -> MotionContext {
    MotionContext::new(Rc::new(PerformanceClock::new()), Rc::new(AnimationFrames))
}
