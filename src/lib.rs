//! Hexwave library - animated hexagonal wave field
//!
//! Builds a fixed set of sample points filling a hexagon and evaluates,
//! per frame, each point's wave displacement and spin plus an orbiting
//! camera. Rendering is left to the caller.

pub mod camera;
pub mod cli;
pub mod error;
pub mod field;
pub mod instance;
pub mod params;

pub use error::{Error, Result};
pub use field::{build_point_field, evaluate_frame, FrameOutput, PointKind, SamplePoint};
