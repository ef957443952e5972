use std::fmt::Write;

/// Linear interpolation between two animatable values.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl<T: Lerp + Clone> Lerp for Option<T> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Some(a), Some(b)) => Some(T::lerp(a, b, t)),
            (Some(a), None) => Some(a.clone()),
            (None, b) => b.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(f64::lerp(&a.x, &b.x, t), f64::lerp(&a.y, &b.y, t))
    }
}

/// The properties a reveal animates: translation in pixels, per-axis scale
/// and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub offset: Vec2,
    pub scale: Vec2,
    pub opacity: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::SETTLED
    }
}

impl VisualState {
    /// Resting state every reveal settles into.
    pub const SETTLED: Self = Self {
        offset: Vec2::ZERO,
        scale: Vec2::ONE,
        opacity: 1.0,
    };

    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::SETTLED
        }
    }

    pub const fn with_offset(self, dx: f64, dy: f64) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            ..self
        }
    }

    pub const fn with_scale(self, sx: f64, sy: f64) -> Self {
        Self {
            scale: Vec2::new(sx, sy),
            ..self
        }
    }

    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// Inline style declarations for this state.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}, {});",
            css_num(self.opacity),
            css_num(self.offset.x),
            css_num(self.offset.y),
            css_num(self.scale.x),
            css_num(self.scale.y),
        )
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            offset: Vec2::lerp(&a.offset, &b.offset, t),
            scale: Vec2::lerp(&a.scale, &b.scale, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

/// White text-shadow halo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub radius: f64,
    pub alpha: f64,
}

impl Lerp for Glow {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            radius: f64::lerp(&a.radius, &b.radius, t),
            alpha: f64::lerp(&a.alpha, &b.alpha, t),
        }
    }
}

/// One keyframe of an ambient loop. `opacity` and `glow` are only written
/// when set, so loops leave the element's own styling alone otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub offset: Vec2,
    pub scale: f64,
    pub rotate: f64,
    pub opacity: Option<f64>,
    pub glow: Option<Glow>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    pub const REST: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        rotate: 0.0,
        opacity: None,
        glow: None,
    };

    pub const fn at(dx: f64, dy: f64) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            ..Self::REST
        }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn rotated(self, degrees: f64) -> Self {
        Self {
            rotate: degrees,
            ..self
        }
    }

    pub const fn faded(self, opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            ..self
        }
    }

    pub const fn glowing(self, radius: f64, alpha: f64) -> Self {
        Self {
            glow: Some(Glow { radius, alpha }),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!(
            "transform: translate({}px, {}px) scale({}) rotate({}deg);",
            css_num(self.offset.x),
            css_num(self.offset.y),
            css_num(self.scale),
            css_num(self.rotate),
        );
        if let Some(opacity) = self.opacity {
            let _ = write!(css, " opacity: {};", css_num(opacity));
        }
        if let Some(glow) = self.glow {
            let _ = write!(
                css,
                " text-shadow: 0 0 {}px rgba(255, 255, 255, {});",
                css_num(glow.radius),
                css_num(glow.alpha)
            );
        }
        css
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            offset: Vec2::lerp(&a.offset, &b.offset, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            rotate: f64::lerp(&a.rotate, &b.rotate, t),
            opacity: Option::lerp(&a.opacity, &b.opacity, t),
            glow: Option::lerp(&a.glow, &b.glow, t),
        }
    }
}

// Three decimals is below a device pixel and keeps style strings short.
fn css_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_state_lerp_hits_endpoints_and_midpoint() {
        let from = VisualState::hidden().with_offset(0.0, 60.0);
        let to = VisualState::SETTLED;
        assert_eq!(VisualState::lerp(&from, &to, 0.0), from);
        assert_eq!(VisualState::lerp(&from, &to, 1.0), to);

        let mid = VisualState::lerp(&from, &to, 0.5);
        assert_eq!(mid.offset, Vec2::new(0.0, 30.0));
        assert_eq!(mid.opacity, 0.5);
    }

    #[test]
    fn visual_state_css() {
        let css = VisualState::hidden().with_offset(-60.0, 0.0).to_css();
        assert_eq!(
            css,
            "opacity: 0; transform: translate(-60px, 0px) scale(1, 1);"
        );
    }

    #[test]
    fn pose_css_only_writes_driven_properties() {
        let plain = Pose::at(10.0, -5.5).scaled(1.25).to_css();
        assert_eq!(
            plain,
            "transform: translate(10px, -5.5px) scale(1.25) rotate(0deg);"
        );

        let glowing = Pose::REST.faded(0.3).glowing(20.0, 0.8).to_css();
        assert!(glowing.contains("opacity: 0.3;"));
        assert!(glowing.contains("text-shadow: 0 0 20px rgba(255, 255, 255, 0.8);"));
    }

    #[test]
    fn optional_channels_lerp_only_when_both_present() {
        let a = Pose::REST.faded(0.1);
        let b = Pose::REST.faded(0.3);
        let mid = Pose::lerp(&a, &b, 0.5).opacity.unwrap();
        assert!((mid - 0.2).abs() < 1e-12);
        assert_eq!(Pose::lerp(&a, &Pose::REST, 0.5).opacity, Some(0.1));
        assert_eq!(Pose::lerp(&Pose::REST, &Pose::REST, 0.5).glow, None);
    }

    #[test]
    fn css_numbers_are_rounded() {
        assert_eq!(css_num(0.123456), "0.123");
        assert_eq!(css_num(-0.0001), "0");
        assert_eq!(css_num(2.0), "2");
    }
}
