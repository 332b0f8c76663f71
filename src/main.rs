use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use simplelog::{LevelFilter, SimpleLogger};
use std::path::PathBuf;
use hlrad_ao::*;
use hlrad_ao::ao::{AoConfig, AoSampler, BlendMode};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input VMF file providing the occluding geometry
    #[arg(short, long)]
    input: PathBuf,

    /// JSON array of sample points: [{ "pos": [x, y, z], "normal": [x, y, z], "light": 200.0 }]
    #[arg(short, long)]
    points: PathBuf,

    /// Where to write the JSON results. Defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with AO settings ({ "depth", "scale", "gamma" })
    #[arg(long)]
    config: Option<PathBuf>,

    /// Probe length in map units (overrides the config file)
    #[arg(long)]
    depth: Option<f32>,

    /// AO strength multiplier (overrides the config file)
    #[arg(long)]
    scale: Option<f32>,

    /// Response curve exponent (overrides the config file)
    #[arg(long)]
    gamma: Option<f32>,

    /// Output the AO term alone instead of darkening the given lighting
    #[arg(long, default_value_t = false)]
    preview: bool,

    /// Verbose info for debugging
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;
    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", args.input);
    }
    if !args.points.exists() {
        anyhow::bail!("Points file does not exist: {:?}", args.points);
    }

    let config = resolve_config(args)?;
    info!("AO depth {} | scale {} | gamma {}", config.depth(), config.scale(), config.gamma());

    let world = processing::load_collision_world(&args.input)?;

    let points = processing::load_points(&args.points)?;
    info!("Loaded {} sample points", points.len());

    let mode = if args.preview { BlendMode::Preview } else { BlendMode::Multiply };
    let sampler = AoSampler::new(config, &world);
    let reports = processing::bake_points(&sampler, &points, mode);

    let json = serde_json::to_string_pretty(&reports)?;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            info!("Saved AO results to: {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Defaults, then the config file, then individual flags
fn resolve_config(args: &Args) -> anyhow::Result<AoConfig> {
    let mut config = match &args.config {
        Some(path) => AoConfig::load(path)?,
        None => AoConfig::default(),
    };

    if let Some(depth) = args.depth {
        config.set_depth(depth);
    }
    if let Some(scale) = args.scale {
        config.set_scale(scale);
    }
    if let Some(gamma) = args.gamma {
        config.set_gamma(gamma);
    }
    debug!("Resolved AO config: {}", serde_json::to_string(&config)?);

    Ok(config)
}

fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let config = simplelog::ConfigBuilder::default()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if simplelog::TermLogger::init(level, config.clone(), simplelog::TerminalMode::Stderr, simplelog::ColorChoice::Auto).is_err() {
        SimpleLogger::init(level, config)?;
    }

    Ok(())
}
