//! Parameter definitions with documented semantics.
//!
//! Everything the core reads is passed in explicitly:
//! - Wave layers and presets (per frame, owned by the caller)
//! - Hexagon layout (build time)
//! - Camera orbit constants and viewport settings

mod camera;
mod field;
mod render;
mod wave;

// Re-export all types
pub use camera::OrbitPath;
pub use field::{FieldLayout, MAX_CIRCLES_PER_EDGE, MAX_GRID_STEPS, MIN_SEPARATION_FACTOR};
pub use render::{RecordingConfig, RenderConfig};
pub use wave::{Preset, WaveLayer, WaveParams};
