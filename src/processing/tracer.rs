use crate::ao::{LineTest, Probe};
use crate::math::{dot, length, sub, Vec3, AABB};
use crate::processing::geometry::{BrushWorld, ConvexBrush};

const EPSILON: f32 = 0.001;

/// Finds where the segment from `start` to `end` first enters solid geometry.
/// A start point already inside a brush reports a hit at fraction 0.
pub fn trace_line_frac(start: Vec3, end: Vec3, brushes: &[ConvexBrush]) -> Probe {
    let diff = sub(end, start);
    let dist = length(diff);

    // Degenerate segment, nothing to hit
    if dist < EPSILON {
        return Probe::Clear;
    }

    let dir = [diff[0] / dist, diff[1] / dist, diff[2] / dist];
    let segment_bounds = AABB::from_segment(start, end);
    let mut closest_t: Option<f32> = None;

    for brush in brushes.iter() {
        // Broad Phase AABB Check
        if !segment_bounds.intersects(&brush.bounds) || !ray_aabb_intersect(start, dir, dist, &brush.bounds) {
            continue;
        }

        let max_dist = closest_t.unwrap_or(dist);
        if let Some(t_near) = intersect_brush(start, dir, max_dist, brush) {
            closest_t = Some(t_near);
            if t_near <= 0.0 {
                break; // Can't get any closer than the start
            }
        }
    }

    match closest_t {
        Some(t) => Probe::Solid { frac: (t / dist).clamp(0.0, 1.0) },
        None => Probe::Clear,
    }
}

/// Checks whether the path from `start` to `end` is blocked by the `brushes` geometry.
pub fn is_occluded(start: Vec3, end: Vec3, brushes: &[ConvexBrush]) -> bool {
    matches!(trace_line_frac(start, end, brushes), Probe::Solid { .. })
}

impl LineTest for BrushWorld {
    fn test_line_frac(&self, start: Vec3, end: Vec3) -> Probe {
        trace_line_frac(start, end, self)
    }
}

fn ray_aabb_intersect(origin: Vec3, dir: Vec3, max_dist: f32, aabb: &AABB) -> bool {
    let mut tmin = 0.0_f32;
    let mut tmax = max_dist;
    for i in 0..3 {
        if dir[i].abs() < 1e-6 {
            if origin[i] < aabb.min[i] - EPSILON || origin[i] > aabb.max[i] + EPSILON { return false; }
        } else {
            let ood = 1.0 / dir[i];
            let mut t1 = (aabb.min[i] - origin[i]) * ood;
            let mut t2 = (aabb.max[i] - origin[i]) * ood;
            if t1 > t2 { std::mem::swap(&mut t1, &mut t2); }
            tmin = tmin.max(t1 - EPSILON);
            tmax = tmax.min(t2 + EPSILON);
            if tmin > tmax { return false; }
        }
    }
    true
}

/// Slab test against a convex brush. Returns the entering distance, clamped at 0 when the ray starts inside
fn intersect_brush(origin: Vec3, dir: Vec3, max_dist: f32, brush: &ConvexBrush) -> Option<f32> {
    let mut t_near = f32::MIN;
    let mut t_far = max_dist;

    for plane in brush.planes.iter() {
        let numer = -(dot(plane.normal, origin) + plane.dist);
        let denom = dot(plane.normal, dir);

        if denom.abs() < 1e-6 {
            // Parallel and in front of this plane: the ray never gets inside
            if numer < 0.0 { return None; }
        } else {
            let t = numer / denom;
            if denom < 0.0 {
                t_near = t_near.max(t);
            } else {
                t_far = t_far.min(t);
            }
            if t_near > t_far || t_far < 0.0 { return None; }
        }
    }

    // Ensure the exit point is in front of the ray start
    if t_near < t_far - EPSILON && t_far > EPSILON && t_near < max_dist {
        return Some(t_near.max(0.0));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cube sized from -size to +size on all axes
    fn create_test_cube(size: f32) -> ConvexBrush {
        ConvexBrush::cuboid(0, [-size, -size, -size], [size, size, size])
    }

    fn expect_frac(probe: Probe, expected: f32) {
        match probe {
            Probe::Solid { frac } => assert!((frac - expected).abs() < 1e-4, "frac {} != {}", frac, expected),
            Probe::Clear => panic!("Expected a hit at {}, got Clear", expected),
        }
    }

    #[test]
    fn test_direct_hit() {
        let world = vec![create_test_cube(10.0)];

        // Ray through the cube: from -20 to +20 along X
        let start = [-20.0, 0.0, 0.0];
        let end = [20.0, 0.0, 0.0];

        assert!(is_occluded(start, end, &world), "Ray through cube center should be occluded");
        // Enters at x = -10, a quarter of the way
        expect_frac(trace_line_frac(start, end, &world), 0.25);
    }

    #[test]
    fn test_miss_side() {
        let world = vec![create_test_cube(10.0)];

        // Ray from the side: from -20 to +20, but Y=15 (misses the cube)
        let start = [-20.0, 15.0, 0.0];
        let end = [20.0, 15.0, 0.0];

        assert!(!is_occluded(start, end, &world), "Ray passing by the side should NOT be occluded");
    }

    #[test]
    fn test_short_ray_before() {
        let world = vec![create_test_cube(10.0)];

        // Wall starts at X=-10. Ray from -30 to -15.
        let start = [-30.0, 0.0, 0.0];
        let end = [-15.0, 0.0, 0.0];

        assert_eq!(trace_line_frac(start, end, &world), Probe::Clear, "Short ray before wall should NOT be occluded");
    }

    #[test]
    fn test_inside_out() {
        let world = vec![create_test_cube(10.0)];

        // Starting in solid counts as blocked right at the start
        let start = [0.0, 0.0, 0.0];
        let end = [20.0, 0.0, 0.0];

        expect_frac(trace_line_frac(start, end, &world), 0.0);
    }

    #[test]
    fn test_grazing_miss() {
        let world = vec![create_test_cube(10.0)];

        // Ray runs parallel to the face, but slightly above
        let start = [-20.0, 10.1, 0.0];
        let end = [20.0, 10.1, 0.0];

        assert!(!is_occluded(start, end, &world), "Grazing ray should miss");
    }

    #[test]
    fn test_ray_starts_on_surface_and_goes_away() {
        let world = vec![create_test_cube(10.0)];

        // Ray starts on the surface (X=-10) and goes outward (towards -X)
        let start = [-10.0, 0.0, 0.0];
        let end = [-20.0, 0.0, 0.0];

        assert!(!is_occluded(start, end, &world), "Ray starting on surface and moving away should NOT be occluded");
    }

    #[test]
    fn test_closest_brush_wins() {
        let world = vec![
            ConvexBrush::cuboid(1, [30.0, -5.0, -5.0], [40.0, 5.0, 5.0]),
            ConvexBrush::cuboid(2, [10.0, -5.0, -5.0], [20.0, 5.0, 5.0]),
        ];

        // Far brush listed first, near one at x = 10 must still win
        expect_frac(trace_line_frac([0.0, 0.0, 0.0], [50.0, 0.0, 0.0], &world), 0.2);
    }

    #[test]
    fn test_brush_world_line_test() {
        let world = BrushWorld(vec![create_test_cube(10.0)]);
        expect_frac(world.test_line_frac([0.0, 0.0, 30.0], [0.0, 0.0, -10.0]), 0.5);
        assert_eq!(world.test_line_frac([0.0, 0.0, 30.0], [0.0, 0.0, 30.0]), Probe::Clear);
    }
}
