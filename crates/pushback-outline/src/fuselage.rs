//! Fuselage outline extraction.
//!
//! The fuselage body is stored as a point cloud of cross-section rings
//! (`s_dim` rings along the body, `r_dim` points per ring). One point per
//! ring is kept: the one furthest from the centerline.

use pushback_core::{OutlineError, Point2D};

use crate::format::FormatTables;
use crate::props::PropertyReader;

/// Initial per-ring winner; any real point is wider
const SEED: Point2D = Point2D::new(-1e10, 0.0);

/// Read one representative point per fuselage ring
///
/// The widest point of each ring wins. On the first ring a candidate must
/// also lie further forward than the held winner, and on the last ring
/// further aft, so the ends of the silhouette reach toward nose and tail.
/// Longitudinal coordinates are relative to `z_ref` after adding the part's
/// own base offset.
pub fn extract_fuselage(
    props: &PropertyReader<'_>,
    tables: &FormatTables,
    ring_count: usize,
    z_ref: f64,
) -> Result<Vec<Point2D>, OutlineError> {
    if ring_count == 0 {
        return Ok(Vec::new());
    }
    let part = tables.fuselage_part;

    let part_z = props.try_feet(&tables.part_offset_key(), 0.0).unwrap_or(0.0);
    let z_ref = z_ref - part_z;
    let r_dim = props.read_int(&format!("_{}/_r_dim", part))?.max(0);

    // The ring count comes from the file; make sure the rings exist before
    // reserving room for them
    if r_dim > 0 {
        props.read_str(&format!("_{}/_geo_xyz/{},0,0", part, ring_count - 1))?;
    }
    let mut points = Vec::new();
    points
        .try_reserve_exact(ring_count)
        .map_err(|_| OutlineError::TooManyPoints { points: ring_count })?;
    for s in 0..ring_count {
        let first = s == 0;
        let last = s + 1 == ring_count;
        let mut winner = SEED;

        for r in 0..r_dim {
            let candidate = Point2D::new(
                props.read_feet(&format!("_{}/_geo_xyz/{},{},0", part, s, r), 0.0)?,
                props.read_feet(&format!("_{}/_geo_xyz/{},{},2", part, s, r), z_ref)?,
            );
            if candidate.x > winner.x
                && (!first || candidate.y < winner.y)
                && (!last || candidate.y > winner.y)
            {
                winner = candidate;
            }
        }
        if winner == SEED {
            tracing::warn!("No usable point on fuselage ring {} of {}", s, ring_count);
        }
        points.push(winner);
    }
    Ok(points)
}
