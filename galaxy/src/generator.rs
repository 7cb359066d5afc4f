//! Two-phase spiral star field generation.
//!
//! Phase one scatters stars along straight arms with exponential draws and
//! rotates each arm into place around the z-axis. Phase two spins every
//! star by an angle proportional to its distance from the center, bending
//! the straight arms into logarithmic-spiral-like curves.

use log::debug;
use nalgebra::Vector3;
use rand::Rng;
use rand_distr::{Distribution, Exp};
use std::f64::consts::TAU;

use crate::geometry::z_rotation;
use crate::params::GalaxyParameters;
use crate::GalaxyError;

/// Generate the star positions of a spiral galaxy.
///
/// Draws `arm_count * (star_count / arm_count)` stars from `rng` and
/// returns them arm by arm, arm 0 first, in generation order. The caller
/// owns the RNG: reseeding an equivalent RNG and calling again with equal
/// parameters reproduces the exact same sequence.
///
/// # Arguments
/// * `rng` - Random source consumed for the duration of this call
/// * `params` - Validated shape parameters
///
/// # Returns
/// The star positions, or the validation error if `params` is invalid.
/// No partial output is ever produced.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GalaxyParameters,
) -> Result<Vec<Vector3<f64>>, GalaxyError> {
    params.validate()?;

    let stars = place_arm_stars(rng, params);
    let spun = spin_stars(&stars, params.spin_factor);

    debug!(
        "generated {} stars across {} arms",
        spun.len(),
        params.arm_count
    );
    Ok(spun)
}

/// Phase one: scatter stars along each arm and rotate the arms into place.
fn place_arm_stars<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GalaxyParameters,
) -> Vec<Vector3<f64>> {
    let radians_per_arm = TAU / f64::from(params.arm_count);
    let arm_step = z_rotation(radians_per_arm);

    // Exp is parameterized by rate; the draws are specified by mean.
    let radial = Exp::new(1.0 / params.radius).unwrap();
    let lateral = Exp::new(1.0 / params.arm_radius).unwrap();

    let stars_per_arm = params.stars_per_arm();
    let mut stars = Vec::with_capacity(params.generated_count());
    for arm in 0..params.arm_count {
        for _ in 0..stars_per_arm {
            let x = radial.sample(rng);
            // Difference of two exponential draws: a signed, Laplace-shaped
            // lateral spread centered on the arm's centerline.
            let y = lateral.sample(rng) - lateral.sample(rng);
            let mut star = Vector3::new(x, y, 0.0);

            // The arm offset is the single-arm step applied `arm` times,
            // keeping consecutive arms exactly one step apart.
            for _ in 0..arm {
                star = arm_step * star;
            }
            stars.push(star);
        }
    }
    stars
}

/// Phase two: rotate every star by `distance_from_origin * spin_factor`.
///
/// Order and length are preserved; stars farther out spin more, which is
/// what curves the arms.
fn spin_stars(stars: &[Vector3<f64>], spin_factor: f64) -> Vec<Vector3<f64>> {
    stars
        .iter()
        .map(|star| {
            let angle = star.norm() * spin_factor;
            z_rotation(angle) * star
        })
        .collect()
}
