use serde::Deserialize;

/// Smallest grid cell that is still drawn; `grid_spacing = 0` turns the grid off.
pub const MIN_GRID_SPACING: f64 = 8.0;
/// Link detection is a full pairwise scan, so the population stays small.
pub const MAX_PARTICLES: usize = 1_000;
pub const MAX_SHAPES: usize = 200;

/// Tunables for every layer of the backdrop.
///
/// Missing keys in a TOML document fall back to the defaults below, so a page
/// only needs to spell out what it wants to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropSettings {
    /// Particles spawned per regeneration
    pub particle_count: usize,
    /// Initial velocity components are drawn from `±particle_speed / 2`
    pub particle_speed: f64,
    pub particle_min_radius: f64,
    pub particle_max_radius: f64,
    pub particle_opacity: f64,
    /// Pointer influence radius in pixels
    pub attraction_radius: f64,
    /// Impulse applied at zero distance, per frame
    pub attraction_gain: f64,
    /// Per-frame velocity multiplier
    pub damping: f64,
    /// Particles closer than this are linked
    pub connection_distance: f64,
    /// Link opacity at proximity 1
    pub link_opacity: f64,

    pub shape_count: usize,
    pub shape_min_size: f64,
    pub shape_max_size: f64,
    /// Rotation rates are drawn from `±spin_rate / 2` radians per frame
    pub spin_rate: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub shape_min_opacity: f64,
    pub shape_max_opacity: f64,
    /// Clock increment per frame
    pub time_step: f64,
    /// Clock multiplier inside the pulse sine
    pub pulse_rate: f64,
    pub pulse_amplitude: f64,

    pub grid_spacing: f64,
    pub grid_opacity: f64,
}

impl Default for BackdropSettings {
    fn default() -> Self {
        Self {
            particle_count: 100,
            particle_speed: 0.4,
            particle_min_radius: 0.5,
            particle_max_radius: 3.0,
            particle_opacity: 0.4,
            attraction_radius: 250.0,
            attraction_gain: 0.04,
            damping: 0.995,
            connection_distance: 180.0,
            link_opacity: 0.25,

            shape_count: 12,
            shape_min_size: 30.0,
            shape_max_size: 100.0,
            spin_rate: 0.006,
            drift_x: 0.25,
            drift_y: 0.15,
            shape_min_opacity: 0.03,
            shape_max_opacity: 0.10,
            time_step: 0.01,
            pulse_rate: 2.0,
            pulse_amplitude: 0.015,

            grid_spacing: 80.0,
            grid_opacity: 0.025,
        }
    }
}

impl BackdropSettings {
    /// Parses a (possibly partial) TOML document and sanitizes the result.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        let settings: BackdropSettings = toml::from_str(source)?;
        Ok(settings.sanitized())
    }

    /// Pulls out-of-range values back into something the simulation can run
    /// with every frame: non-negative magnitudes, ordered ranges, positive
    /// radii, a damping factor in `[0, 1]`, capped populations and a grid
    /// that is either off or at least [`MIN_GRID_SPACING`] wide.
    pub fn sanitized(mut self) -> Self {
        let non_neg = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };

        self.particle_count = self.particle_count.min(MAX_PARTICLES);
        self.shape_count = self.shape_count.min(MAX_SHAPES);

        self.particle_speed = non_neg(self.particle_speed);
        self.particle_min_radius = non_neg(self.particle_min_radius).max(0.1);
        self.particle_max_radius = non_neg(self.particle_max_radius);
        if self.particle_max_radius < self.particle_min_radius {
            self.particle_max_radius = self.particle_min_radius;
        }
        self.attraction_radius = non_neg(self.attraction_radius);
        self.attraction_gain = non_neg(self.attraction_gain);
        self.damping = if self.damping.is_finite() {
            self.damping.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.connection_distance = non_neg(self.connection_distance);

        self.shape_min_size = non_neg(self.shape_min_size);
        self.shape_max_size = non_neg(self.shape_max_size).max(self.shape_min_size);
        self.spin_rate = non_neg(self.spin_rate);
        self.drift_x = non_neg(self.drift_x);
        self.drift_y = non_neg(self.drift_y);
        self.shape_min_opacity = non_neg(self.shape_min_opacity);
        self.shape_max_opacity = non_neg(self.shape_max_opacity).max(self.shape_min_opacity);
        self.time_step = non_neg(self.time_step);
        self.pulse_amplitude = non_neg(self.pulse_amplitude);

        self.grid_spacing = match non_neg(self.grid_spacing) {
            s if s > 0.0 => s.max(MIN_GRID_SPACING),
            _ => 0.0,
        };
        self
    }
}
