//! Bounded wing segment ID lists.

use std::ops::Deref;

use pushback_core::OutlineError;
use smallvec::SmallVec;

/// Maximum number of segments in one wing chain
pub const MAX_SEGMENTS: usize = 4;

/// Ordered wing segment IDs, root to tip, at most [`MAX_SEGMENTS`] long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentIds(SmallVec<[i32; MAX_SEGMENTS]>);

impl SegmentIds {
    pub fn new(ids: &[i32]) -> Result<Self, OutlineError> {
        if ids.len() > MAX_SEGMENTS {
            return Err(OutlineError::TooManySegments {
                len: ids.len(),
                max: MAX_SEGMENTS,
            });
        }
        Ok(Self(SmallVec::from_slice(ids)))
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Keep only the IDs accepted by `keep`, visiting root to tip
    pub fn retain(&mut self, mut keep: impl FnMut(i32) -> bool) {
        self.0.retain(|id| keep(*id));
    }
}

impl Deref for SegmentIds {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.0
    }
}

impl TryFrom<&[i32]> for SegmentIds {
    type Error = OutlineError;

    fn try_from(ids: &[i32]) -> Result<Self, Self::Error> {
        Self::new(ids)
    }
}
