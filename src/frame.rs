use crate::color::{Rgba, ACCENT};
use crate::grid::{grid_lines, Segment};
use crate::mesh::links;
use crate::scene::Scene;
use crate::shapes::Outline;
use crate::viewport::{Point, Viewport};

const GRID_LINE_WIDTH: f64 = 1.0;
const LINK_LINE_WIDTH: f64 = 1.0;
const SHAPE_LINE_WIDTH: f64 = 1.2;
/// Gradient fill alpha at the centre, relative to the shape's alpha.
const GLOW_CENTER_GAIN: f64 = 1.5;
/// Gradient fades out at this multiple of the shape size.
const GLOW_REACH: f64 = 1.4;
const OUTLINE_GAIN: f64 = 2.0;

/// Radial fill plus outline stroke for one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: Point,
    /// Radius at which the fill reaches full transparency
    pub reach: f64,
    /// Fill colour at the centre
    pub inner: Rgba,
    pub stroke: Rgba,
    pub line_width: f64,
}

/// Minimal drawing API the frame needs. The browser implementation sits on a
/// canvas 2D context.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn stroke_line(&mut self, segment: Segment, color: Rgba, width: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
    fn glow_outline(&mut self, outline: &Outline, glow: &Glow);
}

/// Draws the scene back to front: grid, shapes, links, particles.
pub fn draw_frame<S: Surface + ?Sized>(scene: &Scene, surface: &mut S) {
    let settings = scene.settings();
    let viewport = scene.viewport();

    surface.clear(viewport);

    let grid_color = ACCENT.with_alpha(settings.grid_opacity);
    for segment in grid_lines(viewport, settings.grid_spacing) {
        surface.stroke_line(segment, grid_color, GRID_LINE_WIDTH);
    }

    let clock = scene.shapes().clock();
    for shape in scene.shapes().shapes() {
        let alpha = shape.alpha(clock, settings);
        let glow = Glow {
            center: shape.position,
            reach: shape.size * GLOW_REACH,
            inner: shape.color.with_alpha(alpha * GLOW_CENTER_GAIN),
            stroke: shape.color.with_alpha(alpha * OUTLINE_GAIN),
            line_width: SHAPE_LINE_WIDTH,
        };
        surface.glow_outline(&shape.outline(), &glow);
    }

    let particles = scene.particles().particles();
    for link in links(particles, settings.connection_distance) {
        let segment = Segment {
            from: particles[link.a].position,
            to: particles[link.b].position,
        };
        let color = ACCENT.with_alpha(link.proximity * settings.link_opacity);
        surface.stroke_line(segment, color, LINK_LINE_WIDTH);
    }

    let dot = ACCENT.with_alpha(settings.particle_opacity);
    for p in particles {
        surface.fill_circle(p.position, p.radius, dot);
    }
}
