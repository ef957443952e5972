//! Yew wrappers that put the motion layer on the page.

mod ambient;
mod parallax;
mod reveal;
mod stagger;

pub use ambient::Ambient;
pub use parallax::Parallax;
pub use reveal::Reveal;
pub use stagger::Stagger;
