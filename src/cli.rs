//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::error::{Error, Result};
use crate::params::{FieldLayout, Preset, RecordingConfig, WaveParams, MIN_SEPARATION_FACTOR};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "hexwave")]
#[command(about = "Headless driver for the hexagonal wave field", long_about = None)]
pub struct Args {
    /// Parameter preset: default, honeycomb, flowing, geometric, organic
    #[arg(long, value_name = "PRESET", default_value = "default")]
    pub preset: String,

    /// JSON parameter file (replaces the preset)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Override one parameter, e.g. --set primarySpeed=2.5 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub overrides: Vec<String>,

    /// Clamp parameters into the control panel's slider ranges
    #[arg(long)]
    pub clamp: bool,

    /// Seconds of animation to evaluate
    #[arg(long, value_name = "SECONDS", default_value = "10")]
    pub duration: f32,

    /// Evaluation rate (frames per second)
    #[arg(long, default_value = "60")]
    pub fps: u32,

    /// Write one JSON line per frame to this file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the point field as JSON and exit
    #[arg(long)]
    pub dump_field: bool,

    /// Hexagon circumradius
    #[arg(long, default_value = "3.5")]
    pub radius: f32,

    /// Samples per hexagon edge, corners included
    #[arg(long, default_value = "8")]
    pub circles_per_edge: usize,

    /// Interior grid pitch
    #[arg(long, default_value = "0.16")]
    pub spacing: f32,

    /// Interior/edge exclusion radius (default: 0.65 x spacing)
    #[arg(long, value_name = "DISTANCE")]
    pub min_separation: Option<f32>,
}

impl Args {
    /// Resolve preset, parameter file, overrides and clamping into one set
    pub fn wave_params(&self) -> Result<WaveParams> {
        let mut params = match &self.params {
            Some(path) => {
                info!("Parameters: {}", path.display());
                WaveParams::from_json_file(path)?
            }
            None => {
                let preset: Preset = self.preset.parse()?;
                info!("Parameters: preset '{}'", preset);
                WaveParams::preset(preset)
            }
        };

        for raw in &self.overrides {
            let (name, value) = parse_override(raw)?;
            params.set(name, value)?;
        }

        if self.clamp {
            let changed = params.clamp_to_slider_ranges();
            if changed > 0 {
                info!("Clamped {} parameter(s) to slider ranges", changed);
            }
        }

        params.validate()?;
        Ok(params)
    }

    /// Hexagon layout from the geometry flags
    pub fn field_layout(&self) -> FieldLayout {
        FieldLayout {
            radius: self.radius,
            circles_per_edge: self.circles_per_edge,
            interior_spacing: self.spacing,
            min_separation: self
                .min_separation
                .unwrap_or(self.spacing * MIN_SEPARATION_FACTOR),
        }
    }

    /// Frame clock for the headless run
    pub fn recording_config(&self) -> Result<RecordingConfig> {
        if self.fps == 0 {
            return Err(Error::InvalidConfiguration("fps must be > 0".to_string()));
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "duration must be a non-negative number of seconds, got {}",
                self.duration
            )));
        }

        let mut config = RecordingConfig::new(self.duration);
        config.fps = self.fps;
        config.output = self.output.clone();
        Ok(config)
    }
}

/// Split `name=value` into its parts
fn parse_override(raw: &str) -> Result<(&str, f32)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| Error::InvalidInput(format!("expected NAME=VALUE, got '{}'", raw)))?;
    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|e| Error::InvalidInput(format!("bad value for {}: {}", name.trim(), e)))?;
    Ok((name.trim(), value))
}
