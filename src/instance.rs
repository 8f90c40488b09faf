//! GPU-ready per-point instance records.

use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::field::PointTransform;

/// Sphere radius used to draw each point
pub const POINT_RADIUS: f32 = 0.05;

/// Instance data for one sphere (position + XYZ Euler rotation)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

impl From<&PointTransform> for PointInstance {
    fn from(t: &PointTransform) -> Self {
        Self {
            position: t.position.to_array(),
            rotation: t.rotation.to_array(),
        }
    }
}

impl PointInstance {
    /// Model matrix for a sphere of radius `scale`
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        let [rx, ry, rz] = self.rotation;
        Mat4::from_scale_rotation_translation(
            Vec3::splat(scale),
            Quat::from_euler(EulerRot::XYZ, rx, ry, rz),
            Vec3::from_array(self.position),
        )
    }
}

/// Raw bytes for a vertex/instance buffer upload
pub fn instance_bytes(instances: &[PointInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
