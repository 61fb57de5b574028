use std::f64::consts::TAU;

use rand::Rng;

use crate::color::{Rgb, SHAPE_PALETTE};
use crate::settings::BackdropSettings;
use crate::spread;
use crate::viewport::{Point, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Hexagon,
    Triangle,
    Diamond,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Hexagon,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
        ShapeKind::Circle,
    ];

    /// Builds the drawable outline for a shape of this kind.
    ///
    /// Triangles get a 1.1x radius so they read about as large as the other
    /// polygons; circles use 0.6x so they do not dominate.
    pub fn outline(self, center: Point, size: f64, rotation: f64) -> Outline {
        match self {
            ShapeKind::Hexagon => regular_polygon(center, size, 6, rotation),
            ShapeKind::Triangle => regular_polygon(center, size * 1.1, 3, rotation),
            ShapeKind::Diamond => regular_polygon(center, size, 4, rotation),
            ShapeKind::Circle => Outline::Circle {
                center,
                radius: size * 0.6,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Polygon(Vec<Point>),
    Circle { center: Point, radius: f64 },
}

/// Vertex `i` sits at angle `TAU * i / sides + rotation`.
pub fn regular_polygon(center: Point, radius: f64, sides: usize, rotation: f64) -> Outline {
    let step = TAU / sides as f64;
    let vertices = (0..sides)
        .map(|i| {
            let angle = step * i as f64 + rotation;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect();
    Outline::Polygon(vertices)
}

/// A slowly drifting, spinning, breathing decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub position: Point,
    pub size: f64,
    pub rotation: f64,
    pub spin: f64,
    pub drift: Point,
    pub kind: ShapeKind,
    pub color: Rgb,
    pub opacity: f64,
    pub phase: f64,
}

impl Shape {
    /// Base opacity plus a small sine pulse driven by the shared clock.
    pub fn alpha(&self, clock: f64, settings: &BackdropSettings) -> f64 {
        let pulse = (clock * settings.pulse_rate + self.phase).sin() * settings.pulse_amplitude;
        (self.opacity + pulse).max(0.0)
    }

    pub fn outline(&self) -> Outline {
        self.kind.outline(self.position, self.size, self.rotation)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShapeField {
    shapes: Vec<Shape>,
    clock: f64,
}

impl ShapeField {
    pub fn spawn<R: Rng>(viewport: Viewport, settings: &BackdropSettings, rng: &mut R) -> Self {
        let shapes = (0..settings.shape_count)
            .map(|_| Shape {
                position: Point::new(
                    spread(rng, 0.0, viewport.width),
                    spread(rng, 0.0, viewport.height),
                ),
                size: spread(rng, settings.shape_min_size, settings.shape_max_size),
                rotation: spread(rng, 0.0, TAU),
                spin: spread(rng, -settings.spin_rate * 0.5, settings.spin_rate * 0.5),
                drift: Point::new(
                    spread(rng, -settings.drift_x * 0.5, settings.drift_x * 0.5),
                    spread(rng, -settings.drift_y * 0.5, settings.drift_y * 0.5),
                ),
                kind: ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())],
                color: SHAPE_PALETTE[rng.gen_range(0..SHAPE_PALETTE.len())],
                opacity: spread(rng, settings.shape_min_opacity, settings.shape_max_opacity),
                phase: spread(rng, 0.0, TAU),
            })
            .collect();
        Self { shapes, clock: 0.0 }
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes, clock: 0.0 }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shared pulse clock; only ever increases.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn advance(&mut self, viewport: Viewport, settings: &BackdropSettings) {
        self.clock += settings.time_step;
        for shape in &mut self.shapes {
            shape.position.x += shape.drift.x;
            shape.position.y += shape.drift.y;
            shape.rotation += shape.spin;
            shape.position.x = wrap(shape.position.x, shape.size, viewport.width);
            shape.position.y = wrap(shape.position.y, shape.size, viewport.height);
        }
    }
}

/// Keeps `value` inside `[-margin, extent + margin]` by teleporting it to the
/// opposite edge once it leaves.
pub fn wrap(value: f64, margin: f64, extent: f64) -> f64 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices(outline: Outline) -> Vec<Point> {
        match outline {
            Outline::Polygon(v) => v,
            Outline::Circle { .. } => panic!("expected polygon"),
        }
    }

    #[test]
    fn polygon_vertex_counts() {
        let c = Point::new(0.0, 0.0);
        assert_eq!(vertices(ShapeKind::Hexagon.outline(c, 10.0, 0.0)).len(), 6);
        assert_eq!(vertices(ShapeKind::Triangle.outline(c, 10.0, 0.0)).len(), 3);
        assert_eq!(vertices(ShapeKind::Diamond.outline(c, 10.0, 0.0)).len(), 4);
    }

    #[test]
    fn triangle_radius_is_enlarged() {
        let c = Point::new(5.0, 5.0);
        for v in vertices(ShapeKind::Triangle.outline(c, 10.0, 0.3)) {
            assert!((v.distance(c) - 11.0).abs() < 1e-9);
        }
    }

    #[test]
    fn circle_is_not_a_polygon() {
        let c = Point::new(1.0, 2.0);
        assert_eq!(
            ShapeKind::Circle.outline(c, 50.0, 1.0),
            Outline::Circle { center: c, radius: 30.0 }
        );
    }

    #[test]
    fn first_vertex_follows_rotation() {
        let v = vertices(ShapeKind::Diamond.outline(Point::default(), 2.0, TAU / 4.0));
        assert!(v[0].x.abs() < 1e-9);
        assert!((v[0].y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn wrap_both_edges() {
        assert_eq!(wrap(-31.0, 30.0, 800.0), 830.0);
        assert_eq!(wrap(831.0, 30.0, 800.0), -30.0);
        assert_eq!(wrap(830.0, 30.0, 800.0), 830.0);
        assert_eq!(wrap(-30.0, 30.0, 800.0), -30.0);
    }
}
