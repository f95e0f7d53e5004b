//! Format-version adapter.
//!
//! Aircraft files come in two incompatible key-naming schemes. Version 1200
//! introduced `_body` parts, `_part_x`/`_part_z` wing roots and a new wing
//! numbering; older files use `_part/56` and `_crib_*_arm` keys.

use std::fmt;

/// First file version using the modern key scheme
pub const MODERN_FORMAT_VERSION: i32 = 1200;

/// Main wing segment IDs, root to tip, for modern files
const MAIN_WING_IDS_MODERN: [i32; 4] = [1, 3, 5, 7];
/// Main wing segment IDs, root to tip, for legacy files
const MAIN_WING_IDS_LEGACY: [i32; 4] = [9, 11, 13, 15];
const STAB_IDS_MODERN: [i32; 1] = [9];
const STAB_IDS_LEGACY: [i32; 1] = [17];

/// Key-naming scheme of an aircraft file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
    /// Files older than version 1200
    Legacy,
    /// Version 1200 and anything newer
    Modern,
}

impl FormatFamily {
    pub fn from_version(version: i32) -> Self {
        if version >= MODERN_FORMAT_VERSION {
            Self::Modern
        } else {
            Self::Legacy
        }
    }
}

impl fmt::Display for FormatFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Modern => write!(f, "modern"),
        }
    }
}

/// Property names and default segment tables for one format family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTables {
    pub family: FormatFamily,
    /// Part name of the fuselage body, e.g. `body/0`
    pub fuselage_part: &'static str,
    /// Wing property holding the lateral root position
    pub root_x_suffix: &'static str,
    /// Wing property holding the longitudinal root position
    pub root_y_suffix: &'static str,
    /// Main wing candidates, root to tip
    pub main_wing_ids: &'static [i32],
    /// Stabilizer candidates, root to tip
    pub stab_ids: &'static [i32],
}

impl FormatTables {
    /// Select the tables for a file version
    ///
    /// Unknown future versions get the modern tables.
    pub fn for_version(version: i32) -> Self {
        match FormatFamily::from_version(version) {
            FormatFamily::Modern => Self {
                family: FormatFamily::Modern,
                fuselage_part: "body/0",
                root_x_suffix: "_part_x",
                root_y_suffix: "_part_z",
                main_wing_ids: &MAIN_WING_IDS_MODERN,
                stab_ids: &STAB_IDS_MODERN,
            },
            FormatFamily::Legacy => Self {
                family: FormatFamily::Legacy,
                fuselage_part: "part/56",
                root_x_suffix: "_crib_x_arm/0",
                root_y_suffix: "_crib_z_arm/0",
                main_wing_ids: &MAIN_WING_IDS_LEGACY,
                stab_ids: &STAB_IDS_LEGACY,
            },
        }
    }

    /// Number of longitudinal fuselage rings
    pub fn ring_count_key(&self) -> String {
        format!("_{}/_s_dim", self.fuselage_part)
    }

    /// Longitudinal base offset of the fuselage part
    pub fn part_offset_key(&self) -> String {
        format!("_{}/_part_z", self.fuselage_part)
    }

    pub fn root_x_key(&self, segment: i32) -> String {
        wing_key(segment, self.root_x_suffix)
    }

    pub fn root_y_key(&self, segment: i32) -> String {
        wing_key(segment, self.root_y_suffix)
    }
}

/// Key of a per-segment wing property, e.g. `_wing/3/_Croot`
pub fn wing_key(segment: i32, property: &str) -> String {
    format!("_wing/{}/{}", segment, property)
}
