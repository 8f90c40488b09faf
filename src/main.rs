//! Hexwave - headless driver for the hexagonal wave field
//!
//! Steps a fixed-rate clock through the animation and either writes every
//! frame as a JSON line or logs a once-per-second summary.

use std::fs::File;
use std::io::{BufWriter, Write};

use clap::Parser;
use log::info;
use serde::Serialize;

use hexwave::camera::CameraPose;
use hexwave::cli::Args;
use hexwave::field::{PointTransform, WaveFieldSystem};

/// One line of the frame log
#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: usize,
    time_s: f32,
    camera: CameraPose,
    points: &'a [PointTransform],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("hexwave=info"))
        .init();

    let args = Args::parse();

    let params = args.wave_params()?;
    let mut field = WaveFieldSystem::new(args.field_layout())?;
    let edge_count = field.points().iter().filter(|p| p.is_edge()).count();
    info!(
        "Field: {} points ({} edge, {} interior)",
        field.points().len(),
        edge_count,
        field.points().len() - edge_count
    );

    if args.dump_field {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, field.points())?;
        writeln!(out)?;
        return Ok(());
    }

    let recording = args.recording_config()?;
    let mut writer = match &recording.output {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    let total_frames = recording.total_frames();
    info!(
        "Evaluating {} frames ({}s @ {} fps)",
        total_frames, recording.duration_secs, recording.fps
    );

    for frame in 0..total_frames {
        let time_s = recording.frame_time(frame);
        let camera = field.update(time_s, &params)?;

        if let Some(w) = writer.as_mut() {
            let record = FrameRecord {
                frame,
                time_s,
                camera,
                points: field.transforms(),
            };
            serde_json::to_writer(&mut *w, &record)?;
            writeln!(w)?;
        } else if frame % recording.fps as usize == 0 {
            let (lo, hi) = field.height_range().unwrap_or((0.0, 0.0));
            let eye = camera.position;
            info!(
                "t={:6.2}s  camera=({:6.2}, {:5.2}, {:6.2})  height=[{:+.3}, {:+.3}]",
                time_s, eye.x, eye.y, eye.z, lo, hi
            );
        }
    }

    if let (Some(mut w), Some(path)) = (writer, &recording.output) {
        w.flush()?;
        info!("Wrote {} frames to {}", total_frames, path.display());
    }

    Ok(())
}
