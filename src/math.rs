pub type Vec3 = [f32; 3];

#[derive(Debug, Clone, Copy)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
    pub center: Vec3,
}

impl Default for AABB {
    fn default() -> Self {
        Self::new()
    }
}

impl AABB {
    pub fn new() -> Self {
        Self {
            min: [f32::MAX, f32::MAX, f32::MAX],
            max: [f32::MIN, f32::MIN, f32::MIN],
            center: [0.0; 3],
        }
    }

    pub fn extend(&mut self, p: Vec3) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
            self.center[i] = (self.min[i] + self.max[i]) * 0.5;
        }
    }

    /// Bounds of a single segment, used to cull brushes before the slab test
    pub fn from_segment(a: Vec3, b: Vec3) -> Self {
        let mut aabb = Self::new();
        aabb.extend(a);
        aabb.extend(b);
        aabb
    }

    pub fn intersects(&self, other: &AABB) -> bool {
        self.min[0] <= other.max[0] && self.max[0] >= other.min[0] &&
        self.min[1] <= other.max[1] && self.max[1] >= other.min[1] &&
        self.min[2] <= other.max[2] && self.max[2] >= other.min[2]
    }
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn mul(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn length(a: Vec3) -> f32 {
    dot(a, a).sqrt()
}

pub fn normalize(a: Vec3) -> Vec3 {
    let len = length(a);
    if len == 0.0 {
        [0.0, 0.0, 0.0]
    } else {
        [a[0] / len, a[1] / len, a[2] / len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        assert_eq!(normalize([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        let n = normalize([3.0, 0.0, 4.0]);
        assert!((length(n) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_aabb_overlap() {
        let a = AABB::from_segment([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
        let b = AABB::from_segment([5.0, 5.0, 5.0], [20.0, 20.0, 20.0]);
        let c = AABB::from_segment([11.0, 0.0, 0.0], [12.0, 1.0, 1.0]);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert_eq!(a.center, [5.0, 5.0, 5.0]);
    }
}
