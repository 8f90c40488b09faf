//! Geometry of the sampled hexagon.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Exclusion radius around edge points, as a fraction of the interior spacing
pub const MIN_SEPARATION_FACTOR: f32 = 0.65;

/// Upper bound on edge samples per side
pub const MAX_CIRCLES_PER_EDGE: usize = 4096;

/// Upper bound on `radius / interior_spacing`
/// Keeps the interior walk at most (2 * 1024 + 1)^2 grid candidates
pub const MAX_GRID_STEPS: f32 = 1024.0;

/// Inputs to the point field builder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLayout {
    /// Circumradius of the hexagon (world units)
    pub radius: f32,

    /// Samples placed along each of the six edges, endpoints included
    pub circles_per_edge: usize,

    /// Pitch of the square grid used for the interior fill
    pub interior_spacing: f32,

    /// Interior points closer than this to any edge point are dropped
    pub min_separation: f32,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self::with_spacing(3.5, 8, 0.16)
    }
}

impl FieldLayout {
    /// Layout whose edge exclusion radius follows the interior spacing
    pub fn with_spacing(radius: f32, circles_per_edge: usize, spacing: f32) -> Self {
        Self {
            radius,
            circles_per_edge,
            interior_spacing: spacing,
            min_separation: spacing * MIN_SEPARATION_FACTOR,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_CIRCLES_PER_EDGE).contains(&self.circles_per_edge) {
            return Err(Error::InvalidConfiguration(format!(
                "circles_per_edge must be between 2 and {}, got {}",
                MAX_CIRCLES_PER_EDGE, self.circles_per_edge
            )));
        }
        for (name, value) in [
            ("radius", self.radius),
            ("interior_spacing", self.interior_spacing),
            ("min_separation", self.min_separation),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfiguration(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }

        let steps = self.radius / self.interior_spacing;
        if !(steps.is_finite() && steps <= MAX_GRID_STEPS) {
            return Err(Error::InvalidConfiguration(format!(
                "radius / interior_spacing must be at most {}, got {}",
                MAX_GRID_STEPS, steps
            )));
        }
        Ok(())
    }

    /// Half-width of the interior grid walk, in grid steps
    pub(crate) fn grid_steps(&self) -> i64 {
        (self.radius / self.interior_spacing).ceil() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = FieldLayout::default();
        assert_eq!(layout.radius, 3.5);
        assert_eq!(layout.circles_per_edge, 8);
        assert_eq!(layout.interior_spacing, 0.16);
        assert!((layout.min_separation - 0.104).abs() < 1e-6);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_partial_layout_json() {
        let layout: FieldLayout = serde_json::from_str(r#"{ "radius": 5.0 }"#).unwrap();
        assert_eq!(layout.radius, 5.0);
        assert_eq!(layout.circles_per_edge, 8);
        assert_eq!(layout.interior_spacing, 0.16);
    }

    #[test]
    fn test_degenerate_edge_sampling_rejected() {
        for circles in [0, 1] {
            let layout = FieldLayout {
                circles_per_edge: circles,
                ..FieldLayout::default()
            };
            assert!(matches!(
                layout.validate(),
                Err(Error::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_non_positive_geometry_rejected() {
        let bad = [
            FieldLayout {
                radius: 0.0,
                ..FieldLayout::default()
            },
            FieldLayout {
                interior_spacing: -0.1,
                ..FieldLayout::default()
            },
            FieldLayout {
                min_separation: f32::NAN,
                ..FieldLayout::default()
            },
        ];
        for layout in bad {
            assert!(layout.validate().is_err(), "{:?}", layout);
        }
    }

    #[test]
    fn test_oversized_edge_sampling_rejected() {
        let at_cap = FieldLayout {
            circles_per_edge: MAX_CIRCLES_PER_EDGE,
            ..FieldLayout::default()
        };
        assert!(at_cap.validate().is_ok());

        for circles in [MAX_CIRCLES_PER_EDGE + 1, usize::MAX / 4, usize::MAX] {
            let layout = FieldLayout {
                circles_per_edge: circles,
                ..FieldLayout::default()
            };
            assert!(matches!(
                layout.validate(),
                Err(Error::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_unbounded_grid_rejected() {
        let tiny_spacing = FieldLayout::with_spacing(3.5, 8, 1e-40);
        assert!(matches!(
            tiny_spacing.validate(),
            Err(Error::InvalidConfiguration(_))
        ));

        let huge_radius = FieldLayout::with_spacing(f32::MAX, 8, 0.16);
        assert!(huge_radius.validate().is_err());

        let at_cap = FieldLayout::with_spacing(MAX_GRID_STEPS, 8, 1.0);
        assert!(at_cap.validate().is_ok());
        assert_eq!(at_cap.grid_steps(), 1024);
        assert_eq!(FieldLayout::default().grid_steps(), 22);
    }
}
