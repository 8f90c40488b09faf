//! Auto-orbit camera path constants.

/// Orbit around the scene origin with a breathing zoom and a vertical bob
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    /// Orbit radius before the zoom offset is applied
    pub base_radius: f32,

    /// Mean camera height
    pub height: f32,

    /// Angular speed around Y (radians per second)
    pub orbit_speed: f32,

    /// Angular speed of the zoom oscillation
    pub zoom_speed: f32,

    /// Angular speed of the vertical bob
    pub vertical_speed: f32,

    /// Peak vertical bob (world units, ±)
    pub vertical_amplitude: f32,

    /// Lower bound of the zoom span
    pub min_radius: f32,

    /// Upper bound of the zoom span
    pub max_radius: f32,

    /// Point the camera always faces
    pub look_at: [f32; 3],
}

impl Default for OrbitPath {
    fn default() -> Self {
        Self {
            base_radius: 12.0,
            height: 8.0,
            orbit_speed: 0.3,
            zoom_speed: 0.2,
            vertical_speed: 0.5,
            vertical_amplitude: 3.0,
            min_radius: 10.0,
            max_radius: 40.0,
            look_at: [0.0, 0.0, 0.0],
        }
    }
}

impl OrbitPath {
    /// Half the zoom span; the orbit radius swings ± this around `base_radius`
    pub fn zoom_amplitude(&self) -> f32 {
        (self.max_radius - self.min_radius) / 2.0
    }
}
