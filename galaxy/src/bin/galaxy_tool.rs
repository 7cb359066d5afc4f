//! Command line driver: generate a spiral galaxy and save it as a PNG.
//!
//! # Usage
//!
//! ```bash
//! # Default galaxy (1000 stars, 3 arms) with a fresh random seed
//! cargo run --release --bin galaxy_tool
//!
//! # Reproduce a specific galaxy
//! cargo run --release --bin galaxy_tool -- --seed 1 --star-count 10000 \
//!     --arm-count 5 --radius 30.0 --spin-factor 0.05 --arm-radius 10.0
//! ```
//!
//! The seed in use is always printed, so any image can be regenerated
//! exactly by passing it back with `--seed`.

use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

use galaxy::{generate, render, GalaxyParameters};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a procedural spiral galaxy to a PNG image")]
struct Args {
    /// Total number of stars to place across all arms
    #[arg(long, default_value_t = 1000)]
    star_count: u32,

    /// Number of spiral arms
    #[arg(long, default_value_t = 3)]
    arm_count: u32,

    /// Galaxy radius controlling radial spread
    #[arg(long, default_value_t = 100.0)]
    radius: f64,

    /// Lateral spread (thickness) of each arm
    #[arg(long, default_value_t = 10.0)]
    arm_radius: f64,

    /// How strongly distance from the center bends each arm
    #[arg(long, default_value_t = 0.001)]
    spin_factor: f64,

    /// Pixels per coordinate unit; also the star disc diameter
    #[arg(long, default_value_t = 3)]
    scale: u32,

    /// RNG seed; when omitted a fresh seed is drawn and printed
    #[arg(long)]
    seed: Option<u64>,

    /// Output path; defaults to galaxy<seed>.png
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    println!("Seed: {}", seed);

    let params = GalaxyParameters::new(
        args.star_count,
        args.arm_count,
        args.radius,
        args.spin_factor,
        args.arm_radius,
    )?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let stars = generate(&mut rng, &params)?;
    info!("generated {} stars", stars.len());

    let image = render(args.scale, &stars)?;
    info!("canvas size {}x{}", image.width(), image.height());

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("galaxy{}.png", seed)));
    image.save(&output)?;
    println!("Saved to {}", output.display());

    Ok(())
}
