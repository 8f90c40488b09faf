//! Point field builder: hexagon edge sampling plus interior grid fill.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use log::debug;

use super::{PointKind, SamplePoint};
use crate::error::Result;
use crate::params::FieldLayout;

pub const HEXAGON_SIDES: usize = 6;

/// Corners of a regular hexagon in the XZ plane (`Vec2::y` holds world Z).
///
/// Vertex 0 sits at angle -π/2 ("top" when viewed from above), the rest
/// follow at increasing angle.
pub fn hexagon_vertices(radius: f32) -> [Vec2; HEXAGON_SIDES] {
    std::array::from_fn(|i| {
        let angle = (i as f32 * 2.0 * PI) / HEXAGON_SIDES as f32 - FRAC_PI_2;
        Vec2::new(angle.cos() * radius, angle.sin() * radius)
    })
}

/// Even-odd ray casting test.
///
/// An edge counts as crossed when its endpoints lie strictly on opposite
/// sides of `p.y` (`(a.y > p.y) != (b.y > p.y)`) and the crossing lies
/// strictly to the right of `p`. For an axis-aligned box this makes the
/// left and bottom boundaries inside and the right and top boundaries
/// outside.
pub fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };

    let mut inside = false;
    let mut prev = last;
    for &curr in polygon {
        if (curr.y > p.y) != (prev.y > p.y)
            && p.x < (prev.x - curr.x) * (p.y - curr.y) / (prev.y - curr.y) + curr.x
        {
            inside = !inside;
        }
        prev = curr;
    }
    inside
}

/// Build the ordered sample set for `layout`.
///
/// Edge points come first, edge by edge, each edge sampled from its start
/// vertex to its end vertex inclusive, so every corner appears twice. Grid
/// points follow in x-major order. The result depends only on `layout`.
pub fn build_point_field(layout: &FieldLayout) -> Result<Vec<SamplePoint>> {
    layout.validate()?;

    let vertices = hexagon_vertices(layout.radius);
    let per_edge = layout.circles_per_edge;
    let last_slot = (per_edge - 1) as f32;

    let mut points = Vec::with_capacity(HEXAGON_SIDES * per_edge);
    for edge in 0..HEXAGON_SIDES {
        let start = vertices[edge];
        let end = vertices[(edge + 1) % HEXAGON_SIDES];
        for slot in 0..per_edge {
            let t = slot as f32 / last_slot;
            // Weighted form keeps both endpoints bit-exact
            let p = start * (1.0 - t) + end * t;
            points.push(SamplePoint::new(p.x, p.y, PointKind::Edge { edge, slot }));
        }
    }
    let edge_count = points.len();

    let spacing = layout.interior_spacing;
    let steps = layout.grid_steps();
    for i in -steps..=steps {
        for j in -steps..=steps {
            let p = Vec2::new(i as f32 * spacing, j as f32 * spacing);
            if !point_in_polygon(p, &vertices) {
                continue;
            }

            let clear = points[..edge_count]
                .iter()
                .all(|e| e.planar().distance(p) >= layout.min_separation);
            if clear {
                points.push(SamplePoint::new(p.x, p.y, PointKind::Interior));
            }
        }
    }

    debug!(
        "Built point field: {} edge + {} interior points (radius {}, spacing {})",
        edge_count,
        points.len() - edge_count,
        layout.radius,
        spacing
    );

    Ok(points)
}
