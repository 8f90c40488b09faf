//! Auto-orbiting camera path around the field.

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::params::{OrbitPath, RenderConfig};

/// Camera eye and look-at target for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Right-handed view matrix; falls back to +Z as up when looking straight down
    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.look_at - self.position;
        let straight_down =
            forward.cross(Vec3::Y).length_squared() <= f32::EPSILON * forward.length_squared();
        let up = if straight_down {
            Vec3::Z
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(self.position, self.look_at, up)
    }
}

/// Camera system following an orbit path
#[derive(Debug, Clone, Default)]
pub struct CameraSystem {
    path: OrbitPath,
}

impl CameraSystem {
    /// Create new camera system with specified orbit
    pub fn new(path: OrbitPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &OrbitPath {
        &self.path
    }

    /// Compute camera position and look-at target for given time
    ///
    /// # Arguments
    /// * `time_s` - Elapsed time in seconds
    ///
    /// # Returns
    /// Tuple of (eye_position, target_position)
    pub fn compute_position_and_target(&self, time_s: f32) -> (Vec3, Vec3) {
        let p = &self.path;

        // Radius breathes between close-up and wide shots
        let zoom_offset = (time_s * p.zoom_speed).sin() * p.zoom_amplitude();
        let radius = p.base_radius + zoom_offset;

        let x = (time_s * p.orbit_speed).cos() * radius;
        let z = (time_s * p.orbit_speed).sin() * radius;
        let y = p.height + (time_s * p.vertical_speed).sin() * p.vertical_amplitude;

        (Vec3::new(x, y, z), Vec3::from_array(p.look_at))
    }

    pub fn pose(&self, time_s: f32) -> CameraPose {
        let (position, look_at) = self.compute_position_and_target(time_s);
        CameraPose { position, look_at }
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(
        &self,
        time_s: f32,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let pose = self.pose(time_s);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        (proj * pose.view_matrix(), pose.position)
    }
}
