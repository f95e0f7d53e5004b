mod common;

use common::*;
use proptest::prelude::*;
use pushback_acf::AcfFile;
use pushback_core::Point2D;
use pushback_outline::{
    extract_wing_chain, extract_wing_segment, filter_valid_segments, FormatTables,
    PropertyReader, SegmentIds, WingOutlineKind,
};

const IDS: [i32; 4] = [1, 3, 5, 7];

fn chord() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.5f64..40.0]
}

proptest! {
    #[test]
    fn filter_is_idempotent(segments in prop::collection::vec((chord(), -10.0f64..100.0), 0..=4)) {
        let mut props = Props::new();
        for (id, (croot, x)) in IDS.iter().zip(&segments) {
            prop(&mut props, &format!("_wing/{id}/_Croot"), croot);
            prop(&mut props, &format!("_wing/{id}/_part_x"), x);
        }
        let acf = AcfFile::from_properties(1200, props);
        let reader = PropertyReader::new(&acf);
        let tables = FormatTables::for_version(1200);

        let mut once = SegmentIds::new(&IDS[..segments.len()]).unwrap();
        let n = filter_valid_segments(&reader, &tables, &mut once);
        let mut twice = once.clone();
        let m = filter_valid_segments(&reader, &tables, &mut twice);

        prop_assert_eq!(n, m);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn zero_chord_is_always_dropped(x in -10.0f64..100.0) {
        let mut props = Props::new();
        prop(&mut props, "_wing/1/_Croot", 0.0);
        prop(&mut props, "_wing/1/_part_x", x);
        let acf = AcfFile::from_properties(1200, props);

        let mut ids = SegmentIds::new(&[1]).unwrap();
        let n = filter_valid_segments(
            &PropertyReader::new(&acf),
            &FormatTables::for_version(1200),
            &mut ids,
        );
        prop_assert_eq!(n, 0);
    }

    #[test]
    fn wing_chain_is_a_closed_loop(
        params in prop::collection::vec(
            (0.5f64..30.0, 0.5f64..20.0, 1.0f64..80.0, -40.0f64..40.0, -15.0f64..15.0),
            1..=4,
        ),
    ) {
        let version = 1200;
        let mut props = Props::new();
        let mut x = 2.0;
        for (id, &(croot, ctip, semilen, sweep, dihed)) in IDS.iter().zip(&params) {
            wing_props(&mut props, version, &WingSpec { id: *id, croot, ctip, semilen, sweep, dihed, x, z: 5.0 });
            x += semilen;
        }
        let acf = AcfFile::from_properties(version, props);
        let reader = PropertyReader::new(&acf);
        let tables = FormatTables::for_version(version);
        let ids = &IDS[..params.len()];
        let n = ids.len();

        let mut tip = Point2D::zero();
        let points = extract_wing_chain(&reader, &tables, ids, 1.0, &mut tip).unwrap();
        prop_assert_eq!(points.len(), 4 * n);

        // leading edge root to tip, then trailing edge tip to root
        let mut leading = Vec::new();
        let mut trailing = Vec::new();
        for (i, &id) in ids.iter().enumerate() {
            let seg = extract_wing_segment(&reader, &tables, id, 1.0, WingOutlineKind::Full).unwrap();
            leading.extend_from_slice(&seg.points[..2]);
            trailing.splice(0..0, seg.points[2..].iter().copied());
            if i + 1 == n {
                prop_assert_eq!(tip, seg.tip);
            }
        }
        prop_assert_eq!(leading.len(), 2 * n);
        prop_assert_eq!(trailing.len(), 2 * n);
        prop_assert_eq!(&points[..2 * n], leading.as_slice());
        prop_assert_eq!(&points[2 * n..], trailing.as_slice());
    }
}
