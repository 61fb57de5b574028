use rand::Rng;

use crate::pointer::PointerState;
use crate::settings::BackdropSettings;
use crate::spread;
use crate::viewport::{Point, Viewport};

/// A drifting point of the connectivity mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub radius: f64,
}

impl Particle {
    pub fn speed(&self) -> f64 {
        self.velocity.distance(Point::default())
    }
}

/// Fixed-size particle population, regenerated wholesale on resize.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawns `settings.particle_count` particles uniformly inside `viewport`.
    pub fn spawn<R: Rng>(viewport: Viewport, settings: &BackdropSettings, rng: &mut R) -> Self {
        let half_speed = settings.particle_speed * 0.5;
        let particles = (0..settings.particle_count)
            .map(|_| Particle {
                position: Point::new(
                    spread(rng, 0.0, viewport.width),
                    spread(rng, 0.0, viewport.height),
                ),
                velocity: Point::new(
                    spread(rng, -half_speed, half_speed),
                    spread(rng, -half_speed, half_speed),
                ),
                radius: spread(
                    rng,
                    settings.particle_min_radius,
                    settings.particle_max_radius,
                ),
            })
            .collect();
        Self { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn advance(&mut self, viewport: Viewport, pointer: PointerState, settings: &BackdropSettings) {
        for p in &mut self.particles {
            advance_particle(p, viewport, pointer, settings);
        }
    }
}

/// One frame for one particle: pointer attraction, integration, damping and
/// wall reflection, in that order.
///
/// Reflection only flips the velocity sign. The position is left where it
/// landed, so a fast particle may sit just outside the viewport for a frame.
pub fn advance_particle(
    p: &mut Particle,
    viewport: Viewport,
    pointer: PointerState,
    settings: &BackdropSettings,
) {
    if let Some(target) = pointer.position() {
        let dx = target.x - p.position.x;
        let dy = target.y - p.position.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let reach = settings.attraction_radius;
        if distance > 0.0 && distance < reach {
            let force = (reach - distance) / reach * settings.attraction_gain;
            p.velocity.x += dx / distance * force;
            p.velocity.y += dy / distance * force;
        }
    }

    p.position.x += p.velocity.x;
    p.position.y += p.velocity.y;

    p.velocity.x *= settings.damping;
    p.velocity.y *= settings.damping;

    if p.position.x < 0.0 || p.position.x > viewport.width {
        p.velocity.x = -p.velocity.x;
    }
    if p.position.y < 0.0 || p.position.y > viewport.height {
        p.velocity.y = -p.velocity.y;
    }
}
