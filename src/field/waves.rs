//! Per-point displacement and orientation as pure functions of time.

use glam::Vec3;
use serde::Serialize;

use super::SamplePoint;
use crate::params::WaveParams;

/// Angular twist added to the tertiary layer's phase
const TERTIARY_TWIST: f32 = 1.5;

// Fixed six-fold term: sin(t * 1.6 + angle * 6) * 0.3
const HEXAGON_SPEED: f32 = 1.6;
const HEXAGON_SYMMETRY: f32 = 6.0;
const HEXAGON_AMPLITUDE: f32 = 0.3;

// Fixed concentric term: sin(t * 2.2 + distance * 3) * 0.2
const CONCENTRIC_SPEED: f32 = 2.2;
const CONCENTRIC_FREQUENCY: f32 = 3.0;
const CONCENTRIC_AMPLITUDE: f32 = 0.2;

/// Position and Euler rotation (radians, XYZ) of one point for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Summed height of the four configurable layers and the two fixed terms
pub fn displacement(time_s: f32, point: &SamplePoint, params: &WaveParams) -> f32 {
    let d = point.distance_from_center();
    let a = point.angle_from_center();

    let primary = params.primary.phase(time_s, d).sin() * params.primary.amplitude;
    let secondary = params.secondary.phase(time_s, a).cos() * params.secondary.amplitude;
    let tertiary =
        (params.tertiary.phase(time_s, d) + a * TERTIARY_TWIST).sin() * params.tertiary.amplitude;
    let ripple = params.ripple.phase(time_s, d).sin() * params.ripple.amplitude;

    let hexagon = (time_s * HEXAGON_SPEED + a * HEXAGON_SYMMETRY).sin() * HEXAGON_AMPLITUDE;
    let concentric =
        (time_s * CONCENTRIC_SPEED + d * CONCENTRIC_FREQUENCY).sin() * CONCENTRIC_AMPLITUDE;

    primary + secondary + tertiary + ripple + hexagon + concentric
}

/// Euler angles (x, y, z): steady spin around Y with small wobbles on X and Z
pub fn rotation(time_s: f32, point: &SamplePoint, params: &WaveParams) -> Vec3 {
    let d = point.distance_from_center();
    let a = point.angle_from_center();

    let rot_y = time_s * params.rotation_speed + a * 0.5;
    let rot_x = (time_s * 0.7 + d * 0.9).sin() * 0.12;
    let rot_z = (time_s * 0.5 + a * 6.0).sin() * 0.06;

    Vec3::new(rot_x, rot_y, rot_z)
}

/// Transform of `point` at `time_s`, recomputed from scratch
#[inline]
pub fn evaluate_point(time_s: f32, point: &SamplePoint, params: &WaveParams) -> PointTransform {
    let base = point.base();
    PointTransform {
        position: Vec3::new(base.x, displacement(time_s, point, params), base.z),
        rotation: rotation(time_s, point, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PointKind;
    use crate::params::WaveLayer;

    fn silent() -> WaveParams {
        let layer = WaveLayer::new(1.0, 0.0, 1.0);
        WaveParams {
            primary: layer,
            secondary: layer,
            tertiary: layer,
            ripple: layer,
            rotation_speed: 0.0,
        }
    }

    #[test]
    fn test_zero_amplitude_leaves_only_fixed_terms() {
        let params = silent();
        let point = SamplePoint::new(1.2, -0.7, PointKind::Interior);
        let d = point.distance_from_center();
        let a = point.angle_from_center();

        let t = 0.0;
        let expected = (a * 6.0).sin() * 0.3 + (d * 3.0).sin() * 0.2;
        assert!((displacement(t, &point, &params) - expected).abs() < 1e-6);

        let t = 2.0;
        let expected = (t * 1.6 + a * 6.0).sin() * 0.3 + (t * 2.2 + d * 3.0).sin() * 0.2;
        assert!((displacement(t, &point, &params) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_center_is_flat_at_t0_without_layers() {
        let origin = SamplePoint::new(0.0, 0.0, PointKind::Interior);
        assert_eq!(displacement(0.0, &origin, &silent()), 0.0);
        assert_eq!(rotation(0.0, &origin, &silent()), Vec3::ZERO);
    }

    #[test]
    fn test_layers_sum() {
        let point = SamplePoint::new(0.5, 1.5, PointKind::Interior);
        let d = point.distance_from_center();
        let a = point.angle_from_center();
        let params = WaveParams::default();
        let t = 3.25;

        let p = params.primary;
        let s = params.secondary;
        let te = params.tertiary;
        let r = params.ripple;
        let expected = (t * p.speed + d * p.frequency).sin() * p.amplitude
            + (t * s.speed + a * s.frequency).cos() * s.amplitude
            + (t * te.speed + d * te.frequency + a * 1.5).sin() * te.amplitude
            + (t * r.speed + d * r.frequency).sin() * r.amplitude
            + (t * 1.6 + a * 6.0).sin() * 0.3
            + (t * 2.2 + d * 3.0).sin() * 0.2;

        assert!((displacement(t, &point, &params) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_secondary_is_cosine() {
        // Only the secondary layer is active; at the origin and t = 0 its phase is 0
        let mut params = silent();
        params.secondary = WaveLayer::new(1.0, 0.5, 2.0);
        let point = SamplePoint::new(0.0, 0.0, PointKind::Interior);
        assert!((displacement(0.0, &point, &params) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_rotation_formula() {
        let point = SamplePoint::new(-1.0, 2.0, PointKind::Interior);
        let d = point.distance_from_center();
        let a = point.angle_from_center();
        let params = WaveParams::default();
        let t = 1.75;

        let rot = rotation(t, &point, &params);
        assert!((rot.y - (t * 0.3 + a * 0.5)).abs() < 1e-6);
        assert!((rot.x - (t * 0.7 + d * 0.9).sin() * 0.12).abs() < 1e-6);
        assert!((rot.z - (t * 0.5 + a * 6.0).sin() * 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_position_keeps_base_xz() {
        let point = SamplePoint::new(2.0, -1.0, PointKind::Edge { edge: 3, slot: 1 });
        let out = evaluate_point(4.0, &point, &WaveParams::default());
        assert_eq!(out.position.x, 2.0);
        assert_eq!(out.position.z, -1.0);
        assert_eq!(out.position.y, displacement(4.0, &point, &WaveParams::default()));
    }
}
