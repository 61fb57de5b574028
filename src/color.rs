use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

/// Blue used for the grid, links and particles.
pub const ACCENT: Rgb = Rgb(59, 130, 246);

/// Shape colours, drawn uniformly at spawn.
pub const SHAPE_PALETTE: [Rgb; 4] = [
    Rgb(59, 130, 246),
    Rgb(99, 102, 241),
    Rgb(139, 92, 246),
    Rgb(79, 70, 229),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

/// Formats as a CSS `rgba(...)` string; alpha is clamped to `[0, 1]`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb(r, g, b) = self.rgb;
        let a = if self.alpha.is_finite() {
            self.alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        write!(f, "rgba({r}, {g}, {b}, {a})")
    }
}
