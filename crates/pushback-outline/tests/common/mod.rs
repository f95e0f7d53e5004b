#![allow(dead_code)]

use pushback_core::Point2D;

pub const FT: f64 = 0.3048;

/// Wing segment parameters in file units (feet, degrees)
#[derive(Debug, Clone, Copy)]
pub struct WingSpec {
    pub id: i32,
    pub croot: f64,
    pub ctip: f64,
    pub semilen: f64,
    pub sweep: f64,
    pub dihed: f64,
    pub x: f64,
    pub z: f64,
}

pub type Props = Vec<(String, String)>;

pub fn prop(props: &mut Props, key: &str, value: impl ToString) {
    props.push((key.to_string(), value.to_string()));
}

pub fn wing_props(props: &mut Props, version: i32, w: &WingSpec) {
    let (x_key, z_key) = if version >= 1200 {
        ("_part_x", "_part_z")
    } else {
        ("_crib_x_arm/0", "_crib_z_arm/0")
    };
    let id = w.id;
    prop(props, &format!("_wing/{id}/_Croot"), w.croot);
    prop(props, &format!("_wing/{id}/_Ctip"), w.ctip);
    prop(props, &format!("_wing/{id}/_semilen_SEG"), w.semilen);
    prop(props, &format!("_wing/{id}/_sweep_design"), w.sweep);
    prop(props, &format!("_wing/{id}/_dihed_design"), w.dihed);
    prop(props, &format!("_wing/{id}/{x_key}"), w.x);
    prop(props, &format!("_wing/{id}/{z_key}"), w.z);
}

/// Fuselage rings as (x, z) pairs in feet, `rings[s][r]`
pub fn fuselage_props(props: &mut Props, part: &str, rings: &[&[(f64, f64)]]) {
    prop(props, &format!("_{part}/_s_dim"), rings.len());
    prop(props, &format!("_{part}/_r_dim"), rings.first().map_or(0, |r| r.len()));
    for (s, ring) in rings.iter().enumerate() {
        for (r, (x, z)) in ring.iter().enumerate() {
            prop(props, &format!("_{part}/_geo_xyz/{s},{r},0"), x);
            prop(props, &format!("_{part}/_geo_xyz/{s},{r},1"), 0.0);
            prop(props, &format!("_{part}/_geo_xyz/{s},{r},2"), z);
        }
    }
}

pub const RINGS: [&[(f64, f64)]; 3] = [
    &[(1.0, 2.0), (0.5, 1.0)],
    &[(4.0, 10.0), (5.0, 12.0)],
    &[(2.0, 30.0), (3.0, 20.0)],
];

pub const MAIN_ROOT: WingSpec = WingSpec {
    id: 1,
    croot: 10.0,
    ctip: 6.0,
    semilen: 20.0,
    sweep: 0.0,
    dihed: 0.0,
    x: 2.0,
    z: 10.0,
};

pub const MAIN_OUTER: WingSpec = WingSpec {
    id: 3,
    croot: 6.0,
    ctip: 3.0,
    semilen: 30.0,
    sweep: 30.0,
    dihed: 0.0,
    x: 22.0,
    z: 10.0,
};

pub const STAB: WingSpec = WingSpec {
    id: 9,
    croot: 5.0,
    ctip: 3.0,
    semilen: 10.0,
    sweep: 10.0,
    dihed: 45.0,
    x: 1.0,
    z: 60.0,
};

/// Version 1200 aircraft: 3 fuselage rings, two valid main wing segments
/// (5 is unused, 7 sits inboard of 3) and one stabilizer
pub fn modern_aircraft() -> Props {
    let mut props = Props::new();
    prop(&mut props, "acf/_cgZ", 10.0);
    fuselage_props(&mut props, "body/0", &RINGS);
    wing_props(&mut props, 1200, &MAIN_ROOT);
    wing_props(&mut props, 1200, &MAIN_OUTER);
    wing_props(
        &mut props,
        1200,
        &WingSpec {
            id: 5,
            croot: 0.0,
            x: 30.0,
            ..MAIN_OUTER
        },
    );
    wing_props(
        &mut props,
        1200,
        &WingSpec {
            id: 7,
            croot: 4.0,
            x: 1.0,
            ..MAIN_OUTER
        },
    );
    wing_props(&mut props, 1200, &STAB);
    props
}

pub fn without(mut props: Props, key: &str) -> Props {
    props.retain(|(k, _)| k != key);
    props
}

pub fn acf_text(version: i32, props: &Props) -> String {
    let mut text = format!("I\n{version} version\nACF\nPROPERTIES_BEGIN\n");
    for (key, value) in props {
        text.push_str(&format!("P {key} {value}\n"));
    }
    text.push_str("PROPERTIES_END\n");
    text
}

/// Hand-computed segment outline: [lead root, lead tip, trail tip, trail root] and tip
pub fn expected_segment(w: &WingSpec, z_ref: f64) -> ([Point2D; 4], Point2D) {
    let root = Point2D::new(w.x * FT, w.z * FT - z_ref);
    let len = w.semilen * FT;
    let sweep = w.sweep.to_radians();
    let tip = Point2D::new(
        root.x + len * sweep.cos() * w.dihed.to_radians().cos(),
        root.y + len * sweep.sin(),
    );
    let (croot, ctip) = (w.croot * FT, w.ctip * FT);
    (
        [
            Point2D::new(root.x, root.y - 0.25 * croot),
            Point2D::new(tip.x, tip.y - 0.25 * ctip),
            Point2D::new(tip.x, tip.y + 0.75 * ctip),
            Point2D::new(root.x, root.y + 0.75 * croot),
        ],
        tip,
    )
}

pub fn assert_close(actual: Point2D, expected: Point2D) {
    assert!(
        actual.distance_to(&expected) < 1e-9,
        "{:?} != {:?}",
        actual,
        expected
    );
}
