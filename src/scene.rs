use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::particles::ParticleField;
use crate::pointer::PointerState;
use crate::settings::BackdropSettings;
use crate::shapes::ShapeField;
use crate::viewport::Viewport;

/// All mutable backdrop state, owned by whoever drives the frames.
///
/// Input handlers only call [`Scene::set_pointer`] and [`Scene::resize`];
/// [`Scene::tick`] is the only thing that moves the simulation forward.
pub struct Scene {
    settings: BackdropSettings,
    viewport: Viewport,
    pointer: PointerState,
    particles: ParticleField,
    shapes: ShapeField,
    rng: StdRng,
}

impl Scene {
    /// Empty 0x0 scene; nothing is spawned until the first [`Scene::resize`].
    pub fn new(settings: BackdropSettings, seed: u64) -> Self {
        Self {
            settings: settings.sanitized(),
            viewport: Viewport::default(),
            pointer: PointerState::Inactive,
            particles: ParticleField::default(),
            shapes: ShapeField::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Adopts the new size and regenerates both populations from scratch.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        self.particles = ParticleField::spawn(self.viewport, &self.settings, &mut self.rng);
        self.shapes = ShapeField::spawn(self.viewport, &self.settings, &mut self.rng);
        log::debug!(
            "backdrop regenerated for {}x{}: {} particles, {} shapes",
            self.viewport.width,
            self.viewport.height,
            self.particles.len(),
            self.shapes.len()
        );
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    /// Advances one frame: shapes first, then particles.
    pub fn tick(&mut self) {
        self.shapes.advance(self.viewport, &self.settings);
        self.particles
            .advance(self.viewport, self.pointer, &self.settings);
    }

    pub fn settings(&self) -> &BackdropSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn shapes(&self) -> &ShapeField {
        &self.shapes
    }
}
