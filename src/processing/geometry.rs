use crate::{math::{dot, mul, Vec3, AABB}, processing::utils};
use derive_more::Deref;
use log::{debug, warn};
use vmf_forge::prelude::Solid;

// Materials that never stop light. Sky is its own content type for the light tracer, so it does not occlude AO either
const NON_SOLID_MATERIALS: [&str; 10] = [
    "glass",
    "tools/toolstrigger",
    "tools/toolsclip",
    "tools/toolsplayerclip",
    "tools/toolsnpcclip",
    "tools/toolsskip",
    "tools/toolshint",
    "tools/toolsareaportal",
    "tools/toolsoccluder",
    "tools/toolsskybox",
];

#[derive(Debug, Clone)]
pub struct Plane {
    /// Points out of the brush
    pub normal: Vec3,
    pub dist: f32,
    pub material: String,
}

impl Plane {
    pub fn new(normal: Vec3, dist: f32) -> Self {
        Self {
            normal,
            dist,
            material: String::from("default"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvexBrush {
    pub id: u64,
    pub planes: Vec<Plane>,
    pub bounds: AABB,
}

impl ConvexBrush {
    /// Converts a VMF Solid into a mathematical ConvexBrush
    pub fn from_vmf_solid(solid: &Solid) -> Option<Self> {
        let mut planes = Vec::with_capacity(solid.sides.len());
        let mut aabb = AABB::new();

        // Displacements are surfaces, not volumes; the brush behind them carries no light blocking we can trust
        if solid.sides.iter().any(|s| s.dispinfo.is_some()) {
            debug!("Solid ID {}: skipped displacement brush", solid.id);
            return None;
        }

        for side in &solid.sides {
            let points = match utils::parse_plane_points(&side.plane) {
                Some(pts) => pts,
                None => {
                    warn!("Solid ID {}: Malformed plane definition found. Side plane: '{}'", solid.id, side.plane);
                    continue;
                }
            };

            // VMF plane points sit on brush corners, close enough for a broad phase box
            for p in points {
                aabb.extend(p);
            }

            // VMF winding gives inward normals
            let n = mul(utils::calc_face_normal(points), -1.0);
            let d = -dot(n, points[0]);

            planes.push(Plane {
                normal: n,
                dist: d,
                material: side.material.clone(),
            });
        }

        if planes.is_empty() {
            warn!("Solid ID {} was skipped because it contains no valid planes.", solid.id);
            return None;
        }

        debug!("Created ConvexBrush for solid ID {} with {} planes. AABB: min={:?}, max={:?}", solid.id, planes.len(), aabb.min, aabb.max);
        Some(ConvexBrush {
            id: solid.id,
            planes,
            bounds: aabb,
        })
    }

    /// Axis aligned box brush, handy for hand built scenes
    pub fn cuboid(id: u64, min: Vec3, max: Vec3) -> Self {
        let planes = vec![
            Plane::new([1.0, 0.0, 0.0], -max[0]),
            Plane::new([-1.0, 0.0, 0.0], min[0]),
            Plane::new([0.0, 1.0, 0.0], -max[1]),
            Plane::new([0.0, -1.0, 0.0], min[1]),
            Plane::new([0.0, 0.0, 1.0], -max[2]),
            Plane::new([0.0, 0.0, -1.0], min[2]),
        ];
        let mut bounds = AABB::new();
        bounds.extend(min);
        bounds.extend(max);

        ConvexBrush { id, planes, bounds }
    }

    /// False for glass and tool brushes that light passes through
    pub fn blocks_light(&self) -> bool {
        !self.planes.iter().any(|plane| {
            let mat_lower = plane.material.to_lowercase();
            NON_SOLID_MATERIALS.iter().any(|m| mat_lower.contains(m))
        })
    }
}

/// Every brush that can occlude a sample
#[derive(Debug, Clone, Default, Deref)]
pub struct BrushWorld(pub Vec<ConvexBrush>);
