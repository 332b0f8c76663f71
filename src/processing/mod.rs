use anyhow::Context;
use geometry::{BrushWorld, ConvexBrush};
use log::{debug, info, warn};
use std::path::Path;
use vmf_forge::prelude::VmfFile;
use crate::ao::{AoSampler, BlendMode, LineTest};
use crate::math::{length, normalize};
use crate::types::{SamplePoint, SampleReport};

pub mod geometry;
pub mod tracer;
pub mod utils;

/// Builds the collision world from VMF solids and func_details
pub fn build_collision_world(vmf: &VmfFile) -> BrushWorld {
    debug!("Building collision world...");
    let mut brushes = Vec::new();
    let mut skipped = 0;

    let mut push_solid = |brush: ConvexBrush| {
        if brush.blocks_light() {
            brushes.push(brush);
        } else {
            debug!("Ignoring brush #{}: non-solid material", brush.id);
            skipped += 1;
        }
    };

    // World Solids (worldspawn)
    debug!("Processing {} world solids...", vmf.world.solids.len());
    for solid in &vmf.world.solids {
        if let Some(brush) = ConvexBrush::from_vmf_solid(solid) {
            push_solid(brush);
        }
    }

    // Func Detail, any other brush entity moves or can be toggled at runtime
    for ent in vmf.entities.iter() {
        let classname = ent.classname().unwrap_or("");
        if classname != "func_detail" {
            continue;
        }
        debug!("Found collidable entity: class='{}', targetname='{}'", classname, ent.targetname().unwrap_or("N/A"));
        if let Some(solids) = &ent.solids {
            for solid in solids {
                if let Some(brush) = ConvexBrush::from_vmf_solid(solid) {
                    push_solid(brush);
                }
            }
        }
    }

    info!("Built collision world with {} brushes ({} non-solid skipped).", brushes.len(), skipped);
    BrushWorld(brushes)
}

/// Opens and parses a VMF, then builds its collision world
pub fn load_collision_world(path: &Path) -> anyhow::Result<BrushWorld> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open VMF {:?}", path))?;
    let vmf = VmfFile::parse_file(&mut file)
        .with_context(|| format!("Failed to parse VMF {:?}", path))?;
    Ok(build_collision_world(&vmf))
}

/// Reads sample points from a JSON array and normalizes their normals
pub fn load_points(path: &Path) -> anyhow::Result<Vec<SamplePoint>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sample points {:?}", path))?;
    let mut points: Vec<SamplePoint> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse sample points {:?}", path))?;

    for (i, point) in points.iter_mut().enumerate() {
        if length(point.normal) == 0.0 {
            warn!("Sample #{} at {:?} has a zero normal, its AO will be meaningless", i, point.pos);
        } else {
            point.normal = normalize(point.normal);
        }
    }

    Ok(points)
}

/// Samples AO for every point and blends it into the point's lighting, if any
pub fn bake_points<G: LineTest + ?Sized>(
    sampler: &AoSampler<'_, G>,
    points: &[SamplePoint],
    mode: BlendMode,
) -> Vec<SampleReport> {
    let reports: Vec<SampleReport> = points.iter()
        .map(|point| {
            let ao = sampler.sample(point.pos, point.normal);
            let lit = match mode {
                BlendMode::Multiply => point.light.map(|light| mode.apply(ao, light)),
                BlendMode::Preview => Some(mode.apply(ao, point.light.unwrap_or(0.0))),
            };
            debug!("  - {:?} n={:?} -> ao {:.4}", point.pos, point.normal, ao);
            SampleReport { pos: point.pos, normal: point.normal, ao, lit }
        })
        .collect();

    if !reports.is_empty() {
        let (min, max, sum) = reports.iter().fold((f32::MAX, f32::MIN, 0.0), |(min, max, sum), r| {
            (min.min(r.ao), max.max(r.ao), sum + r.ao)
        });
        info!("Sampled {} points. AO min {:.3} | avg {:.3} | max {:.3}", reports.len(), min, sum / reports.len() as f32, max);
    } else {
        warn!("No sample points given, nothing to bake.");
    }

    reports
}
