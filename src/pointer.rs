use crate::viewport::Point;

/// Latest known pointer position. Written by input events between frames,
/// read once per frame by the particle field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Inactive,
    At(Point),
}

impl PointerState {
    pub fn at(x: f64, y: f64) -> Self {
        PointerState::At(Point::new(x, y))
    }

    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerState::Inactive => None,
            PointerState::At(p) => Some(p),
        }
    }
}
