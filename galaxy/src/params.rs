//! Shape parameters for star field generation.

use crate::GalaxyError;

/// Value bundle describing the shape of a generated galaxy.
///
/// Construct through [`GalaxyParameters::new`] to get every field checked
/// up front. The generator re-validates before drawing anything, so an
/// invalid bundle can never produce partial output.
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyParameters {
    /// Total number of stars requested across all arms
    pub star_count: u32,

    /// Number of spiral arms
    pub arm_count: u32,

    /// Mean radial spread of stars along an arm
    pub radius: f64,

    /// How strongly distance from the center bends angular position
    pub spin_factor: f64,

    /// Mean lateral spread across an arm's centerline
    pub arm_radius: f64,
}

impl GalaxyParameters {
    /// Create a validated parameter bundle.
    ///
    /// # Arguments
    /// * `star_count` - Total stars across all arms, must be positive
    /// * `arm_count` - Number of spiral arms, must be positive
    /// * `radius` - Radial spread, must be positive and finite
    /// * `spin_factor` - Arm bend strength, must be non-negative and finite
    /// * `arm_radius` - Lateral arm spread, must be positive and finite
    ///
    /// # Returns
    /// The bundle, or the error naming the first rejected parameter.
    pub fn new(
        star_count: u32,
        arm_count: u32,
        radius: f64,
        spin_factor: f64,
        arm_radius: f64,
    ) -> Result<Self, GalaxyError> {
        let params = Self {
            star_count,
            arm_count,
            radius,
            spin_factor,
            arm_radius,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every field against its invariant.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if self.star_count == 0 {
            return Err(GalaxyError::NonPositiveStarCount(self.star_count));
        }
        if self.arm_count == 0 {
            return Err(GalaxyError::NonPositiveArmCount(self.arm_count));
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(GalaxyError::NonPositiveRadius(self.radius));
        }
        if !(self.arm_radius > 0.0 && self.arm_radius.is_finite()) {
            return Err(GalaxyError::NonPositiveArmRadius(self.arm_radius));
        }
        if !(self.spin_factor >= 0.0 && self.spin_factor.is_finite()) {
            return Err(GalaxyError::NegativeSpinFactor(self.spin_factor));
        }
        Ok(())
    }

    /// Stars placed on each arm.
    ///
    /// Remainder stars beyond an even split across arms are dropped, so the
    /// generated total is `arm_count * stars_per_arm`, which may be less
    /// than `star_count`.
    pub fn stars_per_arm(&self) -> u32 {
        self.star_count / self.arm_count
    }

    /// Total number of stars the generator will emit.
    pub fn generated_count(&self) -> usize {
        (self.stars_per_arm() * self.arm_count) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let params = GalaxyParameters::new(1000, 3, 100.0, 0.001, 10.0).unwrap();
        assert_eq!(params.stars_per_arm(), 333);
        assert_eq!(params.generated_count(), 999);
    }

    #[test]
    fn test_even_split_keeps_every_star() {
        let params = GalaxyParameters::new(1200, 4, 50.0, 0.0, 5.0).unwrap();
        assert_eq!(params.generated_count(), 1200);
    }

    #[test]
    fn test_zero_star_count_rejected() {
        let err = GalaxyParameters::new(0, 3, 100.0, 0.0, 10.0).unwrap_err();
        assert_eq!(err, GalaxyError::NonPositiveStarCount(0));
    }

    #[test]
    fn test_zero_arm_count_rejected() {
        let err = GalaxyParameters::new(10, 0, 100.0, 0.0, 10.0).unwrap_err();
        assert_eq!(err, GalaxyError::NonPositiveArmCount(0));
    }

    #[test]
    fn test_bad_radii_rejected() {
        assert!(matches!(
            GalaxyParameters::new(10, 2, 0.0, 0.0, 10.0),
            Err(GalaxyError::NonPositiveRadius(_))
        ));
        assert!(matches!(
            GalaxyParameters::new(10, 2, f64::NAN, 0.0, 10.0),
            Err(GalaxyError::NonPositiveRadius(_))
        ));
        assert!(matches!(
            GalaxyParameters::new(10, 2, 100.0, 0.0, -1.0),
            Err(GalaxyError::NonPositiveArmRadius(_))
        ));
    }

    #[test]
    fn test_negative_spin_rejected() {
        assert!(matches!(
            GalaxyParameters::new(10, 2, 100.0, -0.5, 10.0),
            Err(GalaxyError::NegativeSpinFactor(_))
        ));
    }

    #[test]
    fn test_zero_spin_allowed() {
        assert!(GalaxyParameters::new(10, 2, 100.0, 0.0, 10.0).is_ok());
    }
}
