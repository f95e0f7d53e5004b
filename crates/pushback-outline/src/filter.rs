//! Segment filter.
//!
//! Aircraft models do not use every wing segment slot. Unused slots have a
//! zero root chord; some models also leave stray segments whose root sits
//! inboard of the previous one.

use crate::format::{wing_key, FormatTables};
use crate::props::PropertyReader;
use crate::segments::SegmentIds;

/// Drop segments that are unused or out of order, returning how many remain
///
/// A segment is kept if its root chord is non-zero and its root arm is not
/// inboard of the previously kept segment. Segments with missing properties
/// are dropped as well.
pub fn filter_valid_segments(
    props: &PropertyReader<'_>,
    tables: &FormatTables,
    segments: &mut SegmentIds,
) -> usize {
    let mut prev_arm = 0.0;

    segments.retain(|id| {
        let Some(root_chord) = props.try_feet(&wing_key(id, "_Croot"), 0.0) else {
            tracing::debug!("Wing segment {} has no root chord, skipping", id);
            return false;
        };
        let Some(arm) = props.try_feet(&tables.root_x_key(id), 0.0) else {
            tracing::debug!("Wing segment {} has no root position, skipping", id);
            return false;
        };
        if root_chord == 0.0 || arm < prev_arm {
            tracing::trace!(
                "Wing segment {} unused (chord {:.3}, arm {:.3} < {:.3})",
                id,
                root_chord,
                arm,
                prev_arm
            );
            return false;
        }
        prev_arm = arm;
        true
    });
    segments.len()
}
