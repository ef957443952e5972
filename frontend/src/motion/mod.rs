//! Scroll- and time-driven motion: one-shot reveals, stagger groups,
//! parallax mapping and ambient loops. Nothing in here touches the DOM; the
//! host supplies a [`MotionContext`] and an [`IntersectionSensor`].

pub mod ambient;
pub mod binding;
pub mod ease;
pub mod parallax;
pub mod reveal;
pub mod sensor;
pub mod stagger;
pub mod value;

#[cfg(test)]
pub mod testing;

pub use ambient::{start_loop, AmbientMotionSpec, ParticlePlacement};
pub use binding::ViewportBinding;
pub use ease::Ease;
pub use parallax::ParallaxBinding;
pub use reveal::{Reveal, RevealSpec, RevealTrigger};
pub use sensor::MotionContext;
pub use stagger::{stagger, StaggerGroup, StaggerPlan};
pub use value::{Pose, VisualState};
