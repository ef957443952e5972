/// Maps vertical scroll offset onto a decoration layer's offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxBinding {
    /// Scroll range `(min, max)` in pixels.
    pub input: (f64, f64),
    /// Layer offset range `(at min, at max)` in pixels.
    pub output: (f64, f64),
}

impl ParallaxBinding {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Linear inside the input range, clamped to the output bounds outside
    /// it. Degenerate input ranges and non-finite offsets give `output.0`.
    pub fn project(&self, scroll_offset: f64) -> f64 {
        let (in_min, in_max) = self.input;
        let (out_min, out_max) = self.output;
        let span = in_max - in_min;
        if span == 0.0 || !span.is_finite() || !scroll_offset.is_finite() {
            return out_min;
        }
        let (lo, hi) = if in_min <= in_max {
            (in_min, in_max)
        } else {
            (in_max, in_min)
        };
        let clamped = scroll_offset.clamp(lo, hi);
        out_min + (clamped - in_min) / span * (out_max - out_min)
    }
}

/// Free-function form of [`ParallaxBinding::project`].
pub fn project(scroll_offset: f64, binding: &ParallaxBinding) -> f64 {
    binding.project(scroll_offset)
}
