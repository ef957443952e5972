/// Timing curves, named after the CSS keywords they stand in for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Fast start, long settle (cubic). Used by one-shot reveals.
    EaseOut,
    /// Symmetric slow-fast-slow (quadratic). Used between ambient keyframes.
    EaseInOut,
}

impl Ease {
    /// Eased progress for `t`; `t` is clamped to `[0, 1]` and NaN counts as 0.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::EaseOut => 1.0 - (1.0 - t).powi(3),
            Ease::EaseInOut if t < 0.5 => 2.0 * t * t,
            Ease::EaseInOut => 1.0 - 2.0 * (1.0 - t) * (1.0 - t),
        }
    }
}
