//! Whole-frame evaluation: every point plus the camera, or nothing.

use log::trace;
use serde::Serialize;

use super::waves::{evaluate_point, PointTransform};
use super::SamplePoint;
use crate::camera::{CameraPose, CameraSystem};
use crate::error::{ensure_finite, Error, Result};
use crate::params::WaveParams;

/// Everything the renderer needs for one instant.
///
/// `transforms[i]` belongs to `points[i]` of the slice that was evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    pub time_s: f32,
    pub transforms: Vec<PointTransform>,
    pub camera: CameraPose,
}

impl FrameOutput {
    /// Lowest and highest displaced point, `None` for an empty field
    pub fn height_range(&self) -> Option<(f32, f32)> {
        height_range(&self.transforms)
    }
}

pub(crate) fn height_range(transforms: &[PointTransform]) -> Option<(f32, f32)> {
    transforms.iter().map(|t| t.position.y).fold(None, |acc, y| {
        Some(match acc {
            None => (y, y),
            Some((lo, hi)) => (lo.min(y), hi.max(y)),
        })
    })
}

/// Evaluate the field and the camera at `time_s`.
///
/// Stateless: the same `(time_s, points, params)` always yields the same
/// output. Fails with `InvalidInput` if the time or any parameter is NaN or
/// infinite, or if finite inputs overflow to a non-finite transform.
pub fn evaluate_frame(
    time_s: f32,
    points: &[SamplePoint],
    params: &WaveParams,
) -> Result<FrameOutput> {
    let mut transforms = Vec::with_capacity(points.len());
    let camera = evaluate_frame_into(time_s, points, params, &mut transforms)?;
    Ok(FrameOutput {
        time_s,
        transforms,
        camera,
    })
}

/// Like [`evaluate_frame`], but writes the transforms into a caller-owned buffer.
///
/// `out` is replaced so that `out[i]` belongs to `points[i]`.
/// On error it is left untouched.
pub fn evaluate_frame_into(
    time_s: f32,
    points: &[SamplePoint],
    params: &WaveParams,
    out: &mut Vec<PointTransform>,
) -> Result<CameraPose> {
    ensure_finite("time_s", time_s)?;
    params.validate()?;

    let mut scratch = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let transform = evaluate_point(time_s, point, params);
        if !(transform.position.is_finite() && transform.rotation.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "point {} at t={} overflowed to position {} rotation {}; \
                 speed or amplitude too large",
                index, time_s, transform.position, transform.rotation
            )));
        }
        scratch.push(transform);
    }

    let camera = CameraSystem::default().pose(time_s);
    if !(camera.position.is_finite() && camera.look_at.is_finite()) {
        return Err(Error::InvalidInput(format!(
            "camera at t={} overflowed to {}",
            time_s, camera.position
        )));
    }

    *out = scratch;
    trace!("Evaluated {} points at t={:.3}s", points.len(), time_s);

    Ok(camera)
}
