//! Outline assembly.
//!
//! The outline is a single point list holding three groups, fuselage rings,
//! main wing loop and stabilizer loop, separated by pen-up markers.

use std::path::Path as FsPath;

use lyon::math::point;
use lyon::path::Path;
use pushback_acf::AcfFile;
use pushback_core::{OutlineError, Point2D};
use serde::{Deserialize, Serialize};

use crate::filter::filter_valid_segments;
use crate::format::FormatTables;
use crate::fuselage::extract_fuselage;
use crate::props::{lenient_int, PropertyReader};
use crate::segments::SegmentIds;
use crate::wing::extract_wing_chain;

const CG_Z_KEY: &str = "acf/_cgZ";
const SIZE_X_KEY: &str = "acf/_size_x";
const SIZE_Z_KEY: &str = "acf/_size_z";

/// One element of an outline point list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutlineVertex {
    /// A drawable vertex
    Point(Point2D),
    /// Lift the pen: the next point starts a new sub-path
    PenUp,
}

impl OutlineVertex {
    pub fn point(&self) -> Option<Point2D> {
        match self {
            Self::Point(p) => Some(*p),
            Self::PenUp => None,
        }
    }

    pub fn is_pen_up(&self) -> bool {
        matches!(self, Self::PenUp)
    }
}

/// Top-down silhouette of an aircraft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Fuselage, pen-up, main wing, pen-up, stabilizer
    pub points: Vec<OutlineVertex>,
    /// Chord-center tip of the outermost wing found
    pub wingtip: Point2D,
    /// Meters
    pub semispan: f64,
    /// Meters
    pub length: f64,
}

impl Outline {
    /// Number of entries in `points`, pen-ups included
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Drawable vertices, skipping pen-ups
    pub fn vertices(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.points.iter().filter_map(OutlineVertex::point)
    }

    /// The point groups between pen-ups; empty groups are kept
    pub fn sub_paths(&self) -> Vec<Vec<Point2D>> {
        self.points
            .split(OutlineVertex::is_pen_up)
            .map(|group| group.iter().filter_map(OutlineVertex::point).collect())
            .collect()
    }

    /// Bounding box of all vertices as `(min_x, min_y, max_x, max_y)`
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.vertices().fold(None, |acc, p| {
            Some(match acc {
                None => (p.x, p.y, p.x, p.y),
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
                }
            })
        })
    }

    /// Build a `lyon` path with one sub-path per group
    ///
    /// The fuselage group is left open; wing loops are closed.
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        for (index, group) in self.sub_paths().into_iter().enumerate() {
            let mut iter = group.into_iter();
            let Some(first) = iter.next() else {
                continue;
            };
            builder.begin(point(first.x as f32, first.y as f32));
            for p in iter {
                builder.line_to(point(p.x as f32, p.y as f32));
            }
            builder.end(index > 0);
        }
        builder.build()
    }
}

/// Read an aircraft file and build its outline
pub fn build_outline(path: impl AsRef<FsPath>) -> Result<Outline, OutlineError> {
    let path = path.as_ref();
    let acf = AcfFile::read(path)?;
    let outline = build_outline_from_store(&acf)?;
    tracing::info!(
        "Outline of {}: {} points, semispan {:.2} m, length {:.2} m",
        path.display(),
        outline.point_count(),
        outline.semispan,
        outline.length
    );
    Ok(outline)
}

/// Build the outline of an already-parsed aircraft file
pub fn build_outline_from_store(acf: &AcfFile) -> Result<Outline, OutlineError> {
    let props = PropertyReader::new(acf);
    let tables = FormatTables::for_version(acf.version());

    // Some models ship without a fuselage body and fake it with wing segments
    let ring_count = props
        .find(&tables.ring_count_key())
        .map(lenient_int)
        .unwrap_or(0)
        .max(0) as usize;
    let z_ref = props.read_feet(CG_Z_KEY, 0.0)?;

    let mut main_wing = SegmentIds::new(tables.main_wing_ids)?;
    let mut stab = SegmentIds::new(tables.stab_ids)?;
    let n_main = filter_valid_segments(&props, &tables, &mut main_wing);
    let n_stab = filter_valid_segments(&props, &tables, &mut stab);
    tracing::debug!(
        "acf version {} ({}): {} fuselage rings, {} main wing and {} stabilizer segments",
        acf.version(),
        tables.family,
        ring_count,
        n_main,
        n_stab
    );

    let fuselage = extract_fuselage(&props, &tables, ring_count, z_ref)?;
    debug_assert_eq!(fuselage.len(), ring_count);

    let capacity = ring_count + 4 * n_main + 4 * n_stab + 2;
    let mut points = Vec::new();
    points
        .try_reserve_exact(capacity)
        .map_err(|_| OutlineError::TooManyPoints { points: capacity })?;
    let mut wingtip = Point2D::zero();

    points.extend(fuselage.into_iter().map(OutlineVertex::Point));
    points.push(OutlineVertex::PenUp);
    let main = extract_wing_chain(&props, &tables, &main_wing, z_ref, &mut wingtip)?;
    points.extend(main.into_iter().map(OutlineVertex::Point));
    points.push(OutlineVertex::PenUp);
    let tail = extract_wing_chain(&props, &tables, &stab, z_ref, &mut wingtip)?;
    points.extend(tail.into_iter().map(OutlineVertex::Point));
    debug_assert_eq!(points.len(), capacity);

    let (semispan, length) = if acf.contains(SIZE_X_KEY) {
        (
            props.read_feet(SIZE_X_KEY, 0.0)?,
            props.read_feet(SIZE_Z_KEY, 0.0)?,
        )
    } else {
        // Newer files dropped the size properties
        estimate_dimensions(&points)
    };

    Ok(Outline {
        points,
        wingtip,
        semispan,
        length,
    })
}

/// Extent of the vertices along each axis, as `(x, y)`
///
/// Maxima start at zero, so the extent always reaches the datum.
fn estimate_dimensions(points: &[OutlineVertex]) -> (f64, f64) {
    let mut x_dim = (f64::INFINITY, 0.0_f64);
    let mut y_dim = (f64::INFINITY, 0.0_f64);

    for p in points.iter().filter_map(OutlineVertex::point) {
        x_dim = (x_dim.0.min(p.x), x_dim.1.max(p.x));
        y_dim = (y_dim.0.min(p.y), y_dim.1.max(p.y));
    }
    ((x_dim.1 - x_dim.0).max(0.0), (y_dim.1 - y_dim.0).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_dimensions_ignores_pen_up() {
        let points = [
            OutlineVertex::Point(Point2D::new(1.0, -4.0)),
            OutlineVertex::PenUp,
            OutlineVertex::Point(Point2D::new(6.0, 2.0)),
        ];
        assert_eq!(estimate_dimensions(&points), (5.0, 6.0));
    }

    #[test]
    fn test_estimate_dimensions_reaches_datum() {
        // all points left of and ahead of the datum: maxima stay at zero
        let points = [
            OutlineVertex::Point(Point2D::new(-3.0, -4.0)),
            OutlineVertex::Point(Point2D::new(-1.0, -1.0)),
        ];
        assert_eq!(estimate_dimensions(&points), (3.0, 4.0));
        assert_eq!(estimate_dimensions(&[OutlineVertex::PenUp]), (0.0, 0.0));
    }

    #[test]
    fn test_sub_paths_and_path() {
        let outline = Outline {
            points: vec![
                OutlineVertex::PenUp,
                OutlineVertex::Point(Point2D::new(0.0, 0.0)),
                OutlineVertex::Point(Point2D::new(1.0, 0.0)),
                OutlineVertex::Point(Point2D::new(1.0, 1.0)),
                OutlineVertex::PenUp,
            ],
            wingtip: Point2D::new(1.0, 0.5),
            semispan: 1.0,
            length: 1.0,
        };
        let groups = outline.sub_paths();
        assert_eq!(groups.len(), 3);
        assert!(groups[0].is_empty());
        assert_eq!(groups[1].len(), 3);
        assert!(groups[2].is_empty());
        assert_eq!(outline.vertices().count(), 3);
        assert_eq!(outline.bounds(), Some((0.0, 0.0, 1.0, 1.0)));

        let path = outline.to_path();
        let bb = lyon::algorithms::aabb::bounding_box(path.iter());
        assert_eq!((bb.min.x, bb.max.y), (0.0, 1.0));
    }

    #[test]
    fn test_vertex_serialization_shape() {
        let json = serde_json::to_string(&OutlineVertex::PenUp).unwrap();
        assert_eq!(json, r#"{"kind":"pen_up"}"#);
        let json = serde_json::to_string(&OutlineVertex::Point(Point2D::new(1.0, 2.0))).unwrap();
        assert_eq!(json, r#"{"kind":"point","x":1.0,"y":2.0}"#);
    }
}
