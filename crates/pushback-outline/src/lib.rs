//! # Pushback Outline
//!
//! Derives a 2D top-down silhouette of an aircraft from its `.acf`
//! description: fuselage, main wing and stabilizer, plus summary dimensions.
//!
//! ## Pipeline
//!
//! ```text
//! build_outline
//!   ├── FormatTables (key names and default segment IDs per format version)
//!   ├── filter_valid_segments (drop unused or mis-ordered wing segments)
//!   ├── extract_fuselage (widest point per fuselage ring)
//!   └── extract_wing_chain (main wing, then stabilizer)
//!         └── extract_wing_segment (planform corners of one segment)
//! ```
//!
//! Groups in the resulting point list are separated by
//! [`OutlineVertex::PenUp`] markers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pushback_outline::build_outline;
//!
//! let outline = build_outline("Aircraft/B738/b738.acf")?;
//! println!("{} points, semispan {:.1} m", outline.point_count(), outline.semispan);
//! ```

pub mod filter;
pub mod format;
pub mod fuselage;
pub mod outline;
pub mod props;
pub mod segments;
pub mod wing;

pub use filter::filter_valid_segments;
pub use format::{FormatFamily, FormatTables, MODERN_FORMAT_VERSION};
pub use fuselage::extract_fuselage;
pub use outline::{build_outline, build_outline_from_store, Outline, OutlineVertex};
pub use props::{lenient_float, lenient_int, PropertyReader};
pub use segments::{SegmentIds, MAX_SEGMENTS};
pub use wing::{
    extract_wing_chain, extract_wing_segment, WingOutlineKind, WingSegment, WingSegmentOutline,
};

pub use pushback_core::{OutlineError, Point2D};
