/// A position in canvas (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Current drawable surface size. Source of truth for spawn, reflection and
/// wrap bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Negative or non-finite dimensions collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: clean(width),
            height: clean(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_dimensions_collapse_to_zero() {
        let v = Viewport::new(-3.0, f64::NAN);
        assert_eq!(v, Viewport::new(0.0, 0.0));
        assert!(v.is_empty());
    }

    #[test]
    fn contains_is_inclusive_of_edges() {
        let v = Viewport::new(800.0, 600.0);
        assert!(v.contains(Point::new(0.0, 600.0)));
        assert!(!v.contains(Point::new(800.1, 10.0)));
    }
}
