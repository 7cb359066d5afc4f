//! Procedural spiral galaxy star fields.
//!
//! Two operations make up the public surface: [`generate`] turns a seeded
//! random source and a set of shape parameters into an ordered sequence of
//! 3D star positions, and [`render`] projects such a sequence onto an RGB
//! canvas. The generator never touches ambient randomness; callers own the
//! RNG, so reseeding an equivalent RNG reproduces a bit-identical field.
//!
//! # Example
//!
//! ```
//! use galaxy::{generate, render, GalaxyParameters};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let params = GalaxyParameters::new(1000, 3, 100.0, 0.001, 10.0)?;
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let stars = generate(&mut rng, &params)?;
//! let image = render(3, &stars)?;
//!
//! assert_eq!(stars.len(), 999); // 1000 rounds down to 333 stars per arm
//! assert!(image.width() > 0);
//! # Ok::<(), galaxy::GalaxyError>(())
//! ```

use thiserror::Error;

/// Errors raised by parameter validation and rasterization.
///
/// Every failure is deterministic and raised before any work happens; the
/// same invalid input always fails the same way, with no partial output.
#[derive(Debug, Error, PartialEq)]
pub enum GalaxyError {
    #[error("star count must be positive, was {0}")]
    NonPositiveStarCount(u32),

    #[error("arm count must be positive, was {0}")]
    NonPositiveArmCount(u32),

    #[error("galaxy radius must be positive and finite, was {0}")]
    NonPositiveRadius(f64),

    #[error("arm radius must be positive and finite, was {0}")]
    NonPositiveArmRadius(f64),

    #[error("spin factor must be non-negative and finite, was {0}")]
    NegativeSpinFactor(f64),

    #[error("render scale must be positive")]
    ZeroScale,
}

pub mod generator;
pub mod geometry;
pub mod params;
pub mod raster;

// Re-export key functionality for easier access
pub use generator::generate;
pub use params::GalaxyParameters;
pub use raster::render;
