//! Stateful wrapper owning a point field and its per-frame buffers.

use log::debug;

use super::frame::{evaluate_frame_into, height_range};
use super::layout::build_point_field;
use super::waves::PointTransform;
use super::SamplePoint;
use crate::camera::CameraPose;
use crate::error::Result;
use crate::instance::PointInstance;
use crate::params::{FieldLayout, WaveParams};

/// High-level wave field with its per-frame output buffers.
///
/// The buffers are only storage: every [`WaveFieldSystem::update`] recomputes
/// them from scratch for the given time and parameters.
pub struct WaveFieldSystem {
    layout: FieldLayout,
    points: Vec<SamplePoint>,
    transforms: Vec<PointTransform>,
    instances: Vec<PointInstance>,
}

impl WaveFieldSystem {
    /// Build the point field for `layout`
    pub fn new(layout: FieldLayout) -> Result<Self> {
        let points = build_point_field(&layout)?;
        Ok(Self {
            layout,
            transforms: Vec::with_capacity(points.len()),
            instances: Vec::with_capacity(points.len()),
            points,
        })
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Transforms from the last successful update, parallel to [`Self::points`]
    pub fn transforms(&self) -> &[PointTransform] {
        &self.transforms
    }

    /// Instance records from the last successful update, parallel to [`Self::points`]
    pub fn instances(&self) -> &[PointInstance] {
        &self.instances
    }

    /// Rebuild the point field if `layout` differs from the current one.
    ///
    /// Returns whether a rebuild happened. An invalid layout leaves the
    /// current field in place. Output buffers are cleared on rebuild since
    /// their indices no longer line up with the new points.
    pub fn set_layout(&mut self, layout: FieldLayout) -> Result<bool> {
        if layout == self.layout {
            return Ok(false);
        }

        let points = build_point_field(&layout)?;
        debug!(
            "Rebuilt field: {} -> {} points",
            self.points.len(),
            points.len()
        );
        self.layout = layout;
        self.points = points;
        self.transforms.clear();
        self.instances.clear();
        Ok(true)
    }

    /// Evaluate the field at `time_s` and refresh the output buffers
    ///
    /// # Returns
    /// Camera pose for the same instant
    pub fn update(&mut self, time_s: f32, params: &WaveParams) -> Result<CameraPose> {
        let camera = evaluate_frame_into(time_s, &self.points, params, &mut self.transforms)?;

        self.instances.clear();
        self.instances.extend(self.transforms.iter().map(PointInstance::from));

        Ok(camera)
    }

    /// Lowest and highest point after the last update
    pub fn height_range(&self) -> Option<(f32, f32)> {
        height_range(&self.transforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::evaluate_frame;
    use crate::params::Preset;

    #[test]
    fn test_update_matches_pure_evaluation() {
        let mut system = WaveFieldSystem::new(FieldLayout::default()).unwrap();
        let params = WaveParams::preset(Preset::Honeycomb);

        // Advance through a few frames first; the result must not depend on history
        for frame in 0..10 {
            system.update(frame as f32 / 60.0, &params).unwrap();
        }
        let camera = system.update(4.0, &params).unwrap();

        let expected = evaluate_frame(4.0, system.points(), &params).unwrap();
        assert_eq!(system.transforms(), expected.transforms.as_slice());
        assert_eq!(camera, expected.camera);
        assert_eq!(system.instances().len(), system.points().len());
        assert_eq!(
            system.instances()[3],
            PointInstance::from(&expected.transforms[3])
        );
        assert_eq!(system.height_range(), expected.height_range());
    }

    #[test]
    fn test_failed_update_keeps_previous_frame() {
        let mut system = WaveFieldSystem::new(FieldLayout::default()).unwrap();
        let params = WaveParams::default();
        system.update(1.0, &params).unwrap();
        let before = system.instances().to_vec();

        let mut bad = params;
        bad.rotation_speed = f32::NAN;
        assert!(system.update(2.0, &bad).is_err());
        assert_eq!(system.instances(), before.as_slice());
    }

    #[test]
    fn test_set_layout_rebuilds_only_on_change() {
        let mut system = WaveFieldSystem::new(FieldLayout::default()).unwrap();
        system.update(0.0, &WaveParams::default()).unwrap();
        let initial_count = system.points().len();

        assert!(!system.set_layout(FieldLayout::default()).unwrap());
        assert_eq!(system.transforms().len(), initial_count);

        let bigger = FieldLayout::with_spacing(5.0, 10, 0.16);
        assert!(system.set_layout(bigger).unwrap());
        assert!(system.points().len() > initial_count);
        assert!(system.transforms().is_empty());
        assert_eq!(system.layout(), &bigger);
    }

    #[test]
    fn test_invalid_layout_keeps_current_field() {
        let mut system = WaveFieldSystem::new(FieldLayout::default()).unwrap();
        let count = system.points().len();

        let degenerate = FieldLayout {
            circles_per_edge: 1,
            ..FieldLayout::default()
        };
        assert!(system.set_layout(degenerate).is_err());
        assert_eq!(system.points().len(), count);
        assert_eq!(system.layout(), &FieldLayout::default());
    }
}
