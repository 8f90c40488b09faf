//! Wave layer parameters, presets and slider metadata.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Error, Result};

/// One sinusoidal contribution to the field height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveLayer {
    /// Temporal speed (radians per second)
    pub speed: f32,

    /// Peak displacement (world units)
    pub amplitude: f32,

    /// Spatial frequency (radians per unit of distance or angle)
    pub frequency: f32,
}

impl WaveLayer {
    pub const fn new(speed: f32, amplitude: f32, frequency: f32) -> Self {
        Self {
            speed,
            amplitude,
            frequency,
        }
    }

    /// Phase of this layer at time `time_s` for spatial coordinate `coord`
    #[inline]
    pub fn phase(&self, time_s: f32, coord: f32) -> f32 {
        time_s * self.speed + coord * self.frequency
    }
}

/// The thirteen scalars read by the evaluator every frame.
///
/// Owned by the surrounding application, which may change any field between
/// two frames. The evaluator reads it fresh each call and caches nothing.
///
/// Missing layers in a parameter file fall back to [`WaveParams::default`];
/// a layer that is present must carry all three of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveParams {
    /// Radial wave, phase driven by distance from center
    pub primary: WaveLayer,

    /// Angular wave (cosine), phase driven by angle from center
    pub secondary: WaveLayer,

    /// Spiral wave, distance-driven with a fixed angular twist
    pub tertiary: WaveLayer,

    /// Fast radial ripple
    pub ripple: WaveLayer,

    /// Spin of every point around Y (radians per second)
    pub rotation_speed: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            primary: WaveLayer::new(1.5, 0.8, 1.2),
            secondary: WaveLayer::new(2.0, 0.4, 2.0),
            tertiary: WaveLayer::new(0.8, 0.3, 0.6),
            ripple: WaveLayer::new(3.0, 0.2, 2.0),
            rotation_speed: 0.3,
        }
    }
}

impl WaveParams {
    /// Flat parameter names, in display order
    pub const NAMES: [&'static str; 13] = [
        "primarySpeed",
        "primaryAmplitude",
        "primaryFrequency",
        "secondarySpeed",
        "secondaryAmplitude",
        "secondaryFrequency",
        "tertiarySpeed",
        "tertiaryAmplitude",
        "tertiaryFrequency",
        "rippleSpeed",
        "rippleAmplitude",
        "rippleFrequency",
        "rotationSpeed",
    ];

    /// Parameter set for a named preset
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Default => Self::default(),
            Preset::Honeycomb => Self {
                primary: WaveLayer::new(1.2, 0.6, 2.0),
                secondary: WaveLayer::new(1.8, 0.4, 6.0),
                tertiary: WaveLayer::new(0.9, 0.3, 1.5),
                ripple: WaveLayer::new(3.5, 0.25, 2.5),
                rotation_speed: 0.2,
            },
            Preset::Flowing => Self {
                primary: WaveLayer::new(2.0, 1.0, 0.8),
                secondary: WaveLayer::new(1.5, 0.6, 3.0),
                tertiary: WaveLayer::new(1.2, 0.4, 0.9),
                ripple: WaveLayer::new(2.8, 0.3, 1.8),
                rotation_speed: 0.4,
            },
            Preset::Geometric => Self {
                primary: WaveLayer::new(1.0, 0.5, 1.5),
                secondary: WaveLayer::new(3.0, 0.8, 6.0),
                tertiary: WaveLayer::new(0.6, 0.2, 0.5),
                ripple: WaveLayer::new(4.0, 0.15, 3.0),
                rotation_speed: 0.1,
            },
            Preset::Organic => Self {
                primary: WaveLayer::new(0.8, 1.2, 0.6),
                secondary: WaveLayer::new(1.3, 0.5, 2.5),
                tertiary: WaveLayer::new(1.8, 0.7, 1.2),
                ripple: WaveLayer::new(2.5, 0.4, 1.5),
                rotation_speed: 0.6,
            },
        }
    }

    /// Load a parameter file (JSON, camelCase keys) and validate it
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    /// Every field must be a finite real number; ranges are not enforced here
    pub fn validate(&self) -> Result<()> {
        for name in Self::NAMES {
            if let Some(value) = self.get(name) {
                ensure_finite(name, value)?;
            }
        }
        Ok(())
    }

    /// Read a parameter by its flat name
    pub fn get(&self, name: &str) -> Option<f32> {
        let mut copy = *self;
        copy.field_mut(name).map(|v| *v)
    }

    /// Write a parameter by its flat name
    pub fn set(&mut self, name: &str, value: f32) -> Result<()> {
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::InvalidInput(format!(
                "unknown parameter '{}'",
                name
            ))),
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut f32> {
        let field = match name {
            "primarySpeed" => &mut self.primary.speed,
            "primaryAmplitude" => &mut self.primary.amplitude,
            "primaryFrequency" => &mut self.primary.frequency,
            "secondarySpeed" => &mut self.secondary.speed,
            "secondaryAmplitude" => &mut self.secondary.amplitude,
            "secondaryFrequency" => &mut self.secondary.frequency,
            "tertiarySpeed" => &mut self.tertiary.speed,
            "tertiaryAmplitude" => &mut self.tertiary.amplitude,
            "tertiaryFrequency" => &mut self.tertiary.frequency,
            "rippleSpeed" => &mut self.ripple.speed,
            "rippleAmplitude" => &mut self.ripple.amplitude,
            "rippleFrequency" => &mut self.ripple.frequency,
            "rotationSpeed" => &mut self.rotation_speed,
            _ => return None,
        };
        Some(field)
    }

    /// Slider range the control panel offers for a parameter
    pub fn slider_range(name: &str) -> Option<RangeInclusive<f32>> {
        let range = match name {
            "primarySpeed" | "secondarySpeed" | "tertiarySpeed" => 0.1..=5.0,
            "rippleSpeed" => 0.1..=8.0,
            "rotationSpeed" => 0.1..=2.0,
            "primaryAmplitude" | "secondaryAmplitude" => 0.0..=2.0,
            "tertiaryAmplitude" => 0.0..=1.5,
            "rippleAmplitude" => 0.0..=1.0,
            "primaryFrequency" => 0.1..=4.0,
            "secondaryFrequency" => 0.1..=8.0,
            "tertiaryFrequency" => 0.1..=3.0,
            "rippleFrequency" => 0.1..=6.0,
            _ => return None,
        };
        Some(range)
    }

    /// Clamp every parameter into its slider range.
    ///
    /// Returns the number of fields that changed. Non-finite values are left
    /// alone so that [`WaveParams::validate`] still reports them.
    pub fn clamp_to_slider_ranges(&mut self) -> usize {
        let mut changed = 0;
        for name in Self::NAMES {
            let Some(range) = Self::slider_range(name) else {
                continue;
            };
            let Some(slot) = self.field_mut(name) else {
                continue;
            };
            if !slot.is_finite() {
                continue;
            }
            let clamped = slot.clamp(*range.start(), *range.end());
            if clamped != *slot {
                warn!("{} = {} clamped to {}", name, slot, clamped);
                *slot = clamped;
                changed += 1;
            }
        }
        changed
    }
}

/// Named parameter presets from the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Default,
    Honeycomb,
    Flowing,
    Geometric,
    Organic,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Default,
        Preset::Honeycomb,
        Preset::Flowing,
        Preset::Geometric,
        Preset::Organic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Honeycomb => "honeycomb",
            Preset::Flowing => "flowing",
            Preset::Geometric => "geometric",
            Preset::Organic => "organic",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| Error::InvalidInput(format!("unknown preset '{}'", s)))
    }
}
