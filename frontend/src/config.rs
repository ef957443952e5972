use log::Level;

use crate::motion::ParallaxBinding;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Motion lifecycle logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Seconds for card and button reveals.
pub const REVEAL_DURATION: f64 = 0.6;
/// Seconds for section headings, hero lines and the footer.
pub const HEADING_DURATION: f64 = 0.8;
/// Delay of a heading's underline behind the heading itself.
pub const UNDERLINE_DELAY: f64 = 0.3;

pub const CARD_STAGGER: f64 = 0.1;
pub const STEP_STAGGER: f64 = 0.2;
pub const NAV_STAGGER: f64 = 0.1;
pub const NAV_BASE_DELAY: f64 = 0.3;

pub const HERO_PARALLAX: ParallaxBinding = ParallaxBinding::new((0.0, 300.0), (0.0, -50.0));
pub const CTA_PARALLAX: ParallaxBinding = ParallaxBinding::new((0.0, 300.0), (0.0, -100.0));

pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_SEED: u64 = 0x0b40_4e55_2025;
