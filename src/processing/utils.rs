use std::sync::LazyLock;
use regex::Regex;

use crate::math::{cross, normalize, sub, Vec3};

pub static PLANE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([\d\.\-eE]+)\s+([\d\.\-eE]+)\s+([\d\.\-eE]+)\)").expect("Invalid Regex")
});

/// Extracts 3 plane points from the VMF string "(x y z) (x y z) (x y z)"
pub fn parse_plane_points(plane_str: &str) -> Option<[Vec3; 3]> {
    let mut points = Vec::with_capacity(3);

    for cap in PLANE_RE.captures_iter(plane_str) {
        let x = cap[1].parse::<f32>().ok()?;
        let y = cap[2].parse::<f32>().ok()?;
        let z = cap[3].parse::<f32>().ok()?;
        points.push([x, y, z]);
    }

    match points.as_slice() {
        [a, b, c] => Some([*a, *b, *c]),
        _ => None,
    }
}

/// Calculates the normal to a boundary given three points
pub fn calc_face_normal(p: [Vec3; 3]) -> Vec3 {
    let v1 = sub(p[1], p[0]);
    let v2 = sub(p[2], p[0]);
    normalize(cross(v1, v2))
}
