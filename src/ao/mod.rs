//! Ambient occlusion sampler used to darken baked lighting in corners and crevices.
//!
//! For each sample point the fixed hemisphere [`kernel`] is rotated onto the
//! surface normal, every direction is probed up to `depth` units against the
//! scene, and the mean fractional hit distance is shaped into a factor in
//! `[0, 1]` (1 = unoccluded). Sampling only reads its [`AoConfig`], so one
//! sampler can be shared by any number of threads once it is built.

use crate::math::{add, mul, Vec3};

pub mod config;
pub mod frame;
pub mod kernel;
pub mod probe;

pub use config::AoConfig;
pub use frame::TangentFrame;
pub use kernel::{KERNEL, KERNEL_SAMPLES};
pub use probe::{LineTest, Probe};

/// Light value one fully unoccluded sample maps to in [`BlendMode::Preview`]
pub const PREVIEW_LIGHT: f32 = 128.0;

/// Signature of an operator that composites an AO factor (`src`) with lighting (`dest`)
pub type BlendFn = fn(f32, f32) -> f32;

pub struct AoSampler<'w, G: LineTest + ?Sized> {
    config: AoConfig,
    geometry: &'w G,
}

impl<'w, G: LineTest + ?Sized> AoSampler<'w, G> {
    pub fn new(config: AoConfig, geometry: &'w G) -> Self {
        Self { config, geometry }
    }

    pub fn config(&self) -> &AoConfig {
        &self.config
    }

    /// AO factor at `position` for the outward unit `normal`.
    /// 1.0 means nothing within `depth` units, 0.0 means fully occluded.
    pub fn sample(&self, position: Vec3, normal: Vec3) -> f32 {
        let mean = self.mean_occlusion(position, normal, KERNEL.iter());
        shape_response(mean, &self.config)
    }

    /// Average fractional hit distance over `directions` (local hemisphere space)
    fn mean_occlusion<'k>(
        &self,
        position: Vec3,
        normal: Vec3,
        directions: impl Iterator<Item = &'k Vec3>,
    ) -> f32 {
        let frame = TangentFrame::from_normal(normal);
        let mut acc = 0.0;
        let mut count = 0usize;

        for dir in directions {
            let end = add(position, mul(frame.to_world(*dir), self.config.depth()));
            acc += self.geometry.test_line_frac(position, end).occlusion();
            count += 1;
        }

        acc / count as f32
    }
}

/// Turns the mean occlusion into the final factor: `1 - clamp(mean^gamma * scale)`.
///
/// A mean of exactly zero stays zero even with `gamma == 0`, so an open sample
/// is never darkened. Any other mean with `gamma == 0` goes straight to `scale`.
pub fn shape_response(mean: f32, config: &AoConfig) -> f32 {
    let curved = if mean == 0.0 { 0.0 } else { mean.powf(config.gamma()) };
    let occlusion = curved * config.scale();
    1.0 - occlusion.clamp(0.0, 1.0)
}

/// Darkens `dest` by the AO factor `src`.
///
/// Plain multiplication: `src == 1` leaves lighting untouched and the result
/// falls off linearly towards black. Overlay-style modes were tried and gave
/// results too hard to control.
pub fn blend(src: f32, dest: f32) -> f32 {
    dest * src
}

/// Visualizes AO alone, discarding the lighting
pub fn blend_preview(src: f32, _dest: f32) -> f32 {
    src * PREVIEW_LIGHT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Multiply,
    /// Debug view: the AO factor replaces lighting, scaled to a mid-grey light level
    Preview,
}

impl BlendMode {
    pub fn function(self) -> BlendFn {
        match self {
            BlendMode::Multiply => blend,
            BlendMode::Preview => blend_preview,
        }
    }

    pub fn apply(self, src: f32, dest: f32) -> f32 {
        (self.function())(src, dest)
    }
}
