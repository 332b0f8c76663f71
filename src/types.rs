use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// One surface sample to shade, as read from the points file
#[derive(Debug, Clone, Deserialize)]
pub struct SamplePoint {
    pub pos: Vec3,
    /// Outward surface normal, normalized on load
    pub normal: Vec3,
    /// Already computed lighting at this point, if the caller wants it blended
    #[serde(default)]
    pub light: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub pos: Vec3,
    pub normal: Vec3,
    pub ao: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lit: Option<f32>,
}
