//! Gem preview application
//!
//! Renders the gem material onto a sphere and writes one PNG per frame, for
//! checking presets and config files without a GPU renderer.

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, Command};
use gem_shader::foundation::logging;
use gem_shader::prelude::*;
use image::RgbaImage;
use std::path::PathBuf;

mod sphere;
use sphere::{compose_rgba, sample_sphere};

const DEFAULT_OUTPUT_DIR: &str = "preview";

#[derive(Debug)]
struct PreviewOptions {
    config_path: Option<PathBuf>,
    preset: Option<String>,
    size: u32,
    start_time: f32,
    frames: u32,
    fps: f32,
    output_dir: PathBuf,
}

fn parse_args() -> PreviewOptions {
    let matches = Command::new("gem_preview")
        .about("Renders the procedural gem material onto a sphere and saves PNG frames")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Shading config file (.toml or .ron)"),
        )
        .arg(
            Arg::new("preset")
                .short('p')
                .long("preset")
                .value_name("NAME")
                .conflicts_with("config")
                .help("Material preset: ruby, emerald, sapphire or amethyst"),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .value_name("PIXELS")
                .value_parser(value_parser!(u32).range(1..=8192))
                .default_value("256")
                .help("Image width and height"),
        )
        .arg(
            Arg::new("time")
                .short('t')
                .long("time")
                .value_name("SECONDS")
                .value_parser(value_parser!(f32))
                .allow_negative_numbers(true)
                .default_value("0")
                .help("Time of the first frame"),
        )
        .arg(
            Arg::new("frames")
                .short('n')
                .long("frames")
                .value_name("COUNT")
                .value_parser(value_parser!(u32).range(1..))
                .default_value("1")
                .help("Number of frames to render"),
        )
        .arg(
            Arg::new("fps")
                .long("fps")
                .value_name("RATE")
                .value_parser(value_parser!(f32))
                .default_value("24")
                .help("Frame rate used to space frame times"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_OUTPUT_DIR)
                .help("Output directory for frames"),
        )
        .get_matches();

    PreviewOptions {
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        preset: matches.get_one::<String>("preset").cloned(),
        size: *matches.get_one::<u32>("size").unwrap_or(&256),
        start_time: *matches.get_one::<f32>("time").unwrap_or(&0.0),
        frames: *matches.get_one::<u32>("frames").unwrap_or(&1),
        fps: *matches.get_one::<f32>("fps").unwrap_or(&24.0),
        output_dir: matches
            .get_one::<PathBuf>("output")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    }
}

fn resolve_config(options: &PreviewOptions) -> Result<(ShadingConfig, String)> {
    if let Some(path) = &options.config_path {
        let config = ShadingConfig::load_validated(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        return Ok((config, path.display().to_string()));
    }

    let name = options.preset.as_deref().unwrap_or("ruby");
    let Some(builder) = GemMaterialBuilder::preset(name) else {
        bail!(
            "Unknown preset '{}', expected one of: {}",
            name,
            GemMaterialBuilder::PRESET_NAMES.join(", ")
        );
    };
    let material = builder.build()?;
    let label = material.display_name().to_string();
    Ok((ShadingConfig::new(material.constants), label))
}

fn render_frame(config: &ShadingConfig, size: u32, time: f32) -> Result<RgbaImage> {
    let samples = sample_sphere(size, time);
    let surfaces = evaluate_batch(&samples.inputs, &config.material, &config.batch);
    let rgba = compose_rgba(&samples, &surfaces);
    RgbaImage::from_raw(size, size, rgba).context("Pixel buffer does not match image size")
}

fn main() -> Result<()> {
    let options = parse_args();
    if !(options.fps.is_finite() && options.fps > 0.0) {
        bail!("--fps must be a positive number, got {}", options.fps);
    }

    let (config, label) = resolve_config(&options)?;
    logging::init_with_level(&config.log_level);
    log::info!("Rendering '{}' at {}x{}", label, options.size, options.size);
    log::debug!("Preview options: {:?}", options);

    std::fs::create_dir_all(&options.output_dir).with_context(|| {
        format!("Failed to create output directory {}", options.output_dir.display())
    })?;

    for frame in 0..options.frames {
        let time = options.start_time + frame as f32 / options.fps;
        let image = render_frame(&config, options.size, time)?;

        let path = options.output_dir.join(format!("gem_{frame:04}.png"));
        image
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Frame {} (t = {:.3}s) -> {}", frame, time, path.display());
    }

    Ok(())
}
