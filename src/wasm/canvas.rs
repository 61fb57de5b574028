use web_sys::CanvasRenderingContext2d;

use crate::color::Rgba;
use crate::frame::{Glow, Surface};
use crate::grid::Segment;
use crate::shapes::Outline;
use crate::viewport::{Point, Viewport};

/// [`Surface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn trace(&self, outline: &Outline) {
        self.ctx.begin_path();
        match outline {
            Outline::Polygon(vertices) => {
                let mut points = vertices.iter();
                if let Some(first) = points.next() {
                    self.ctx.move_to(first.x, first.y);
                }
                for p in points {
                    self.ctx.line_to(p.x, p.y);
                }
            }
            Outline::Circle { center, radius } => {
                self.ctx
                    .arc(center.x, center.y, *radius, 0.0, std::f64::consts::TAU)
                    .ok();
            }
        }
        self.ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn stroke_line(&mut self, segment: Segment, color: Rgba, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(segment.from.x, segment.from.y);
        self.ctx.line_to(segment.to.x, segment.to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .ok();
        self.ctx.fill();
    }

    fn glow_outline(&mut self, outline: &Outline, glow: &Glow) {
        self.trace(outline);

        let Point { x, y } = glow.center;
        match self.ctx.create_radial_gradient(x, y, 0.0, x, y, glow.reach) {
            Ok(gradient) => {
                let transparent = glow.inner.rgb.with_alpha(0.0);
                gradient.add_color_stop(0.0, &glow.inner.to_string()).ok();
                gradient.add_color_stop(1.0, &transparent.to_string()).ok();
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                self.ctx.fill();
            }
            Err(e) => log::debug!("skipping shape fill: {:?}", e),
        }

        self.ctx.set_stroke_style_str(&glow.stroke.to_string());
        self.ctx.set_line_width(glow.line_width);
        self.ctx.stroke();
    }
}
