use crate::viewport::{Point, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Reference grid for `viewport`: vertical lines at `x = 0, s, 2s, ...` below
/// the width, then horizontal lines the same way down the height.
pub fn grid_lines(viewport: Viewport, spacing: f64) -> impl Iterator<Item = Segment> {
    let Viewport { width, height } = viewport;
    let steps = move |extent: f64| -> usize {
        if spacing > 0.0 && extent > 0.0 {
            (extent / spacing).ceil() as usize
        } else {
            0
        }
    };

    let vertical = (0..steps(width))
        .map(move |i| i as f64 * spacing)
        .filter(move |&x| x < width)
        .map(move |x| Segment {
            from: Point::new(x, 0.0),
            to: Point::new(x, height),
        });
    let horizontal = (0..steps(height))
        .map(move |i| i as f64 * spacing)
        .filter(move |&y| y < height)
        .map(move |y| Segment {
            from: Point::new(0.0, y),
            to: Point::new(width, y),
        });
    vertical.chain(horizontal)
}
