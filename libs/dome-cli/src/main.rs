//! # Dome CLI
//!
//! Runs the dome pipeline once and writes the result.
//!
//! ```text
//! dome-cli --settings dome.txt --frequency 4 --solid icosa --output dome.obj
//! RUST_LOG=debug dome-cli --output dome.json --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::constants::ExportConfig;
use geodesic_dome::export::write_obj;
use geodesic_dome::{draw, BaseSolid, DomeConfig};
use glam::DVec3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum CliSolid {
    Tetra,
    Octa,
    Icosa,
}

impl From<CliSolid> for BaseSolid {
    fn from(value: CliSolid) -> Self {
        match value {
            CliSolid::Tetra => BaseSolid::Tetrahedron,
            CliSolid::Octa => BaseSolid::Octahedron,
            CliSolid::Icosa => BaseSolid::Icosahedron,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OutputFormat {
    /// Colored triangle mesh
    Obj,
    /// Full dome geometry
    Json,
}

/// Geodesic dome generator
#[derive(Parser, Debug)]
#[command(name = "dome-cli", version, about)]
struct Cli {
    /// Settings file in `key:value` format
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Subdivision frequency
    #[arg(long)]
    frequency: Option<u32>,

    /// Base solid to subdivide
    #[arg(long, value_enum)]
    solid: Option<CliSolid>,

    /// Radius along every axis
    #[arg(long)]
    radius: Option<f64>,

    /// Dome fraction as `NUM/DEN`
    #[arg(long, value_name = "NUM/DEN", value_parser = parse_fraction)]
    fraction: Option<(u32, u32)>,

    /// Emit the tessellated faces
    #[arg(long)]
    faces: bool,

    /// Level the lowest ring of nodes
    #[arg(long)]
    flatten_base: bool,

    /// Output file
    #[arg(long, short, value_name = "FILE")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Obj)]
    format: OutputFormat,

    /// Also write the effective settings to this file
    #[arg(long, value_name = "FILE")]
    save_settings: Option<PathBuf>,
}

fn parse_fraction(text: &str) -> Result<(u32, u32), String> {
    let (num, den) = text
        .split_once('/')
        .ok_or_else(|| format!("expected NUM/DEN, got `{text}`"))?;
    let num = num.trim().parse().map_err(|_| format!("bad numerator `{num}`"))?;
    let den = den.trim().parse().map_err(|_| format!("bad denominator `{den}`"))?;
    Ok((num, den))
}

impl Cli {
    /// Settings file (or defaults) with the command-line overrides applied.
    fn dome_config(&self) -> Result<DomeConfig> {
        let mut config = match &self.settings {
            Some(path) => dome_settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => DomeConfig::default(),
        };
        if let Some(frequency) = self.frequency {
            config.frequency = frequency;
        }
        if let Some(solid) = self.solid {
            config.solid = solid.into();
        }
        if let Some(radius) = self.radius {
            config.radii = DVec3::splat(radius);
        }
        if let Some((num, den)) = self.fraction {
            config.fraction_num = num;
            config.fraction_den = den;
        }
        config.draw_faces |= self.faces;
        config.flatten_base |= self.flatten_base;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = cli.dome_config()?;
    if let Some(path) = &cli.save_settings {
        dome_settings::save(&config, path)
            .with_context(|| format!("saving settings to {}", path.display()))?;
    }

    let dome = draw(&config)?;
    for class in &dome.classes {
        log::info!("strut {}: {:.3} x {}", class.label, class.length, class.count);
    }

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let mut out = BufWriter::new(file);
    match cli.format {
        OutputFormat::Obj => write_obj(&dome.to_mesh(ExportConfig::default()), &mut out)?,
        OutputFormat::Json => serde_json::to_writer_pretty(&mut out, &dome)?,
    }
    out.flush()?;

    log::info!("wrote {}", cli.output.display());
    Ok(())
}
