//! Hexagonal point field and its per-frame wave evaluation.

mod frame;
mod layout;
mod system;
mod waves;

use glam::{Vec2, Vec3};
use serde::Serialize;

// Re-export public types
pub use frame::{evaluate_frame, evaluate_frame_into, FrameOutput};
pub use layout::{build_point_field, hexagon_vertices, point_in_polygon, HEXAGON_SIDES};
pub use system::WaveFieldSystem;
pub use waves::{displacement, evaluate_point, rotation, PointTransform};

/// How a sample point was generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// Placed along hexagon edge `edge` at sample index `slot`
    Edge { edge: usize, slot: usize },
    /// Grid fill inside the hexagon
    Interior,
}

/// One fixed location of the field.
///
/// Fields are private so the polar coordinates can never disagree with the
/// base position; the builder is the only constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    base: Vec3,
    distance_from_center: f32,
    angle_from_center: f32,
    kind: PointKind,
}

impl SamplePoint {
    fn new(x: f32, z: f32, kind: PointKind) -> Self {
        Self {
            base: Vec3::new(x, 0.0, z),
            distance_from_center: (x * x + z * z).sqrt(),
            angle_from_center: z.atan2(x),
            kind,
        }
    }

    /// Rest position on the ground plane (y = 0)
    pub fn base(&self) -> Vec3 {
        self.base
    }

    pub fn base_x(&self) -> f32 {
        self.base.x
    }

    pub fn base_z(&self) -> f32 {
        self.base.z
    }

    /// Planar (x, z) position
    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.base.x, self.base.z)
    }

    pub fn distance_from_center(&self) -> f32 {
        self.distance_from_center
    }

    /// `atan2(z, x)`, in (-π, π]
    pub fn angle_from_center(&self) -> f32 {
        self.angle_from_center
    }

    pub fn kind(&self) -> PointKind {
        self.kind
    }

    pub fn is_edge(&self) -> bool {
        matches!(self.kind, PointKind::Edge { .. })
    }
}
