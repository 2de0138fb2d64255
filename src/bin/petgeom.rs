// ----- Imports -----------------------------------------------------------------------------------------
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use petgeom::{
    config::read_config_file,
    isotope::Isotope,
    BaseGeometry, DerivedGeometry,
};

/// Command line interface for `petgeom` executable
#[derive(clap::Parser, Debug, Clone)]
#[clap(
    name = "petgeom",
    about = "Derive scatter grids, LUT steps, TOF bins and affine from PET scanner constants",
)]
struct Cli {
    /// TOML file with base scanner constants [default: Siemens mMR]
    config_file: Option<PathBuf>,

    /// Override the isotope given in the config file
    #[clap(short, long)]
    isotope: Option<Isotope>,

    /// Override the mu-map scatter grid scale factor
    #[clap(long)]
    mu_scale: Option<f64>,

    /// Override the emission scatter grid scale factor
    #[clap(long)]
    emission_scale: Option<f64>,

    /// Print the derived geometry as JSON
    #[clap(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let mut base = match &args.config_file {
        Some(path) => read_config_file(path)?,
        None       => BaseGeometry::mmr(),
    };
    if let Some(isotope) = args.isotope        { base.isotope = isotope }
    if let Some(s)       = args.mu_scale       { base.scatter.mu_scale = s }
    if let Some(s)       = args.emission_scale { base.scatter.emission_scale = s }

    let geometry = DerivedGeometry::derive(&base)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&geometry)?);
    } else {
        report(&geometry);
    }
    Ok(())
}

fn report(g: &DerivedGeometry) {
    let grid = |name: &str, dims: [usize; 3], spacing: [f64; 3]| {
        println!("{name:>16}: {dims:?} voxels (z, y, x) of {spacing:?} cm");
    };
    let native = &g.base.native_grid;
    grid("native"       , native.dims.to_array()         , native.spacing.to_array());
    grid("mu-map scatter", g.mu_grid.dims.to_array()      , g.mu_grid.spacing.to_array());
    grid("emission scat.", g.emission_grid.dims.to_array(), g.emission_grid.spacing.to_array());
    println!();
    println!("effective ring radius: {} cm (squared {}, inverse {})",
             g.ring.effective_radius, g.ring.effective_radius_squared, g.ring.inverse_effective_radius);
    println!("crystal pitch        : {} rad", g.ring.crystal_pitch);
    println!("scatter cosine LUT   : {} samples from {}, step {} (inverse {})",
             g.scatter.cos_samples, g.scatter.cos_cutoff, g.scatter.cos_step, g.scatter.inverse_cos_step);
    println!("scatter rings        : {} at {:?}", g.scatter_rings.count, g.scatter_rings.indices);
    println!("TOF bin              : {} ps = {} cm (inverse {})",
             g.tof.bin_width, g.tof.bin_distance, g.tof.inverse_bin_distance);
    println!("sinograms            : {} angles x {} bins, {} sinograms in span {}",
             g.sinogram.angles, g.sinogram.bins, g.sinogram.sinos, g.sinogram.span);
    println!("isotope              : {} (half-life {} s)", g.decay.isotope, g.decay.half_life);
    println!();
    println!("affine (voxel -> mm):");
    for row in g.affine.rows() {
        println!("  {:>12.6} {:>12.6} {:>12.6} {:>12.6}", row[0], row[1], row[2], row[3]);
    }
}
