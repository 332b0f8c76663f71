use crate::math::{add, cross, mul, normalize, Vec3};

// Past this the normal is too close to the Y helper for a stable cross product
const HELPER_SWITCH_THRESHOLD: f32 = 0.999;

/// Orthonormal basis anchored at a surface normal.
/// Rotates kernel directions from hemisphere space (+Z up) into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentFrame {
    pub tangent: Vec3,
    pub bitangent: Vec3,
    pub normal: Vec3,
}

impl TangentFrame {
    /// Builds the frame by crossing the normal with a fixed helper axis.
    ///
    /// This is the cheap "arbitrary perpendicular" trick: the tangent's
    /// rotation around the normal is whatever falls out of the helper, which is
    /// fine for AO since the integral is isotropic around the normal.
    /// Degeneracy is only guarded by a threshold on the Y coordinate, not by a
    /// true parallelism test. Baked output depends on this exact construction.
    pub fn from_normal(normal: Vec3) -> Self {
        let helper = if normal[1].abs() < HELPER_SWITCH_THRESHOLD {
            [0.0, 1.0, 0.0]
        } else {
            [0.0, 0.0, 1.0]
        };

        let tangent = normalize(cross(helper, normal));
        let bitangent = cross(normal, tangent);

        Self { tangent, bitangent, normal }
    }

    /// Matrix-vector product with the basis vectors as columns
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        add(
            add(mul(self.tangent, local[0]), mul(self.bitangent, local[1])),
            mul(self.normal, local[2]),
        )
    }
}
