//! Wing planform outlines.
//!
//! A wing segment is described by its root position, semispan length, sweep,
//! dihedral and root/tip chords. Its top-down outline is a quadrilateral:
//! the leading edge sits 25% of the chord ahead of the chord-center line and
//! the trailing edge 75% behind it.

use nalgebra::{Rotation2, Vector2};
use pushback_core::{OutlineError, Point2D};
use smallvec::SmallVec;

use crate::format::{wing_key, FormatTables};
use crate::props::PropertyReader;

/// Fraction of the chord ahead of the chord-center line
const LEADING_EDGE_FRACTION: f64 = 0.25;
/// Fraction of the chord behind the chord-center line
const TRAILING_EDGE_FRACTION: f64 = 0.75;

/// Which edges of a segment outline to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingOutlineKind {
    /// Leading edge root, leading edge tip
    LeadingEdge,
    /// Trailing edge tip, trailing edge root
    TrailingEdge,
    /// Leading edge root, leading edge tip, trailing edge tip, trailing edge root
    Full,
}

/// Geometry of one wing segment, lengths in meters and angles in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingSegment {
    pub sweep_deg: f64,
    pub semilen: f64,
    pub dihedral_deg: f64,
    pub root_chord: f64,
    pub tip_chord: f64,
    /// Chord-center point of the root, relative to the reference datum
    pub root: Point2D,
}

/// Outline points of one segment plus its chord-center tip
#[derive(Debug, Clone, PartialEq)]
pub struct WingSegmentOutline {
    pub points: SmallVec<[Point2D; 4]>,
    pub tip: Point2D,
}

impl WingSegment {
    /// Read segment `segment` from the property store
    pub fn read(
        props: &PropertyReader<'_>,
        tables: &FormatTables,
        segment: i32,
        z_ref: f64,
    ) -> Result<Self, OutlineError> {
        Ok(Self {
            sweep_deg: props.read_float(&wing_key(segment, "_sweep_design"))?,
            semilen: props.read_feet(&wing_key(segment, "_semilen_SEG"), 0.0)?,
            dihedral_deg: props.read_float(&wing_key(segment, "_dihed_design"))?,
            root_chord: props.read_feet(&wing_key(segment, "_Croot"), 0.0)?,
            tip_chord: props.read_feet(&wing_key(segment, "_Ctip"), 0.0)?,
            root: Point2D::new(
                props.read_feet(&tables.root_x_key(segment), 0.0)?,
                props.read_feet(&tables.root_y_key(segment), z_ref)?,
            ),
        })
    }

    /// Chord-center point of the tip
    ///
    /// Sweep rotates the span vector aft; dihedral only shortens its
    /// lateral projection.
    pub fn tip(&self) -> Point2D {
        let span = rotate_right(Vector2::new(self.semilen, 0.0), -self.sweep_deg);
        let mut tip = self.root + Point2D::new(span.x, span.y);
        tip.x = (tip.x - self.root.x) * self.dihedral_deg.to_radians().cos() + self.root.x;
        tip
    }

    pub fn outline(&self, kind: WingOutlineKind) -> WingSegmentOutline {
        let tip = self.tip();
        let mut points = SmallVec::new();

        if matches!(kind, WingOutlineKind::LeadingEdge | WingOutlineKind::Full) {
            points.push(self.root.offset_y(-self.root_chord * LEADING_EDGE_FRACTION));
            points.push(tip.offset_y(-self.tip_chord * LEADING_EDGE_FRACTION));
        }
        if matches!(kind, WingOutlineKind::TrailingEdge | WingOutlineKind::Full) {
            points.push(tip.offset_y(self.tip_chord * TRAILING_EDGE_FRACTION));
            points.push(self.root.offset_y(self.root_chord * TRAILING_EDGE_FRACTION));
        }
        WingSegmentOutline { points, tip }
    }
}

/// Rotate `v` clockwise by `angle_deg`
fn rotate_right(v: Vector2<f64>, angle_deg: f64) -> Vector2<f64> {
    Rotation2::new(-angle_deg.to_radians()) * v
}

/// Read one segment and emit the requested part of its outline
pub fn extract_wing_segment(
    props: &PropertyReader<'_>,
    tables: &FormatTables,
    segment: i32,
    z_ref: f64,
    kind: WingOutlineKind,
) -> Result<WingSegmentOutline, OutlineError> {
    Ok(WingSegment::read(props, tables, segment, z_ref)?.outline(kind))
}

/// Outline of a multi-segment wing as one closed loop
///
/// `segments` are ordered root to tip. The loop runs along the leading edge
/// from root to tip, around the outermost segment, and back along the
/// trailing edge, giving `4 * segments.len()` points. The outermost tip
/// replaces `wingtip` only if it lies further from the centerline, so one
/// accumulator can be shared between the main wing and the stabilizer.
pub fn extract_wing_chain(
    props: &PropertyReader<'_>,
    tables: &FormatTables,
    segments: &[i32],
    z_ref: f64,
    wingtip: &mut Point2D,
) -> Result<Vec<Point2D>, OutlineError> {
    let wings = segments
        .iter()
        .map(|&id| WingSegment::read(props, tables, id, z_ref))
        .collect::<Result<Vec<_>, _>>()?;

    let mut points = Vec::with_capacity(wings.len() * 4);
    if let Some((outer, inner)) = wings.split_last() {
        for wing in inner {
            points.extend(wing.outline(WingOutlineKind::LeadingEdge).points);
        }
        let full = outer.outline(WingOutlineKind::Full);
        points.extend(full.points);
        if wingtip.x < full.tip.x {
            *wingtip = full.tip;
        }
        for wing in inner.iter().rev() {
            points.extend(wing.outline(WingOutlineKind::TrailingEdge).points);
        }
    }
    Ok(points)
}
