//! Planar rotation primitives for star placement.
//!
//! Star positions live in the z = 0 plane but are carried as 3D vectors
//! because every transform in the generator is a rotation about the z-axis.

use nalgebra::{Rotation3, Vector3};

/// Build the right-handed active rotation about the z-axis by `angle` radians.
///
/// Applying the result to a vector rotates the vector itself, not the
/// coordinate frame.
pub fn z_rotation(angle: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle)
}

/// Angle of a point's (x, y) projection in radians, in (-π, π].
pub fn planar_angle(point: &Vector3<f64>) -> f64 {
    point.y.atan2(point.x)
}
