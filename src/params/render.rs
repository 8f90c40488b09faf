//! Rendering and headless recording configuration.

use std::path::PathBuf;

/// Viewport and projection settings handed to the external renderer
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    /// 50° keeps the whole hexagon in frame at the closest zoom
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    /// Spheres have radius 0.05, so a larger near plane clips them up close
    pub near_plane: f32,

    /// Far clipping plane (world units)
    /// Orbit radius peaks at 27, leaving plenty of depth range
    pub far_plane: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 50.0, // Moderate perspective for a close orbit
            near_plane: 0.1,
            far_plane: 1000.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

/// Fixed-rate frame clock for headless runs
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to step through (seconds)
    pub duration_secs: f32,

    /// Frame rate (FPS)
    /// 60 matches a typical display refresh, so frame times line up
    /// with what an interactive renderer would sample
    pub fps: u32,

    /// JSON-lines output file; `None` logs a summary instead
    pub output: Option<PathBuf>,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            fps: 60,
            output: None,
        }
    }

    /// Total number of frames to evaluate
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Elapsed time of frame `index`; frame 0 is at t = 0
    pub fn frame_time(&self, index: usize) -> f32 {
        index as f32 / self.fps as f32
    }
}
