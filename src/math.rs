//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

/// A 3x3 color matrix, stored in a homogeneous transform.
pub type Transform = Transform3D<f64>;

type Vector = Vector3D<f64>;

/// Build a [`Transform`] from the 9 coefficients of a 3x3 color matrix,
/// given in column-major order.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: f64,
    m12: f64,
    m13: f64,
    m21: f64,
    m22: f64,
    m23: f64,
    m31: f64,
    m32: f64,
    m33: f64,
) -> Transform {
    Transform3D::new(
        m11, m12, m13, 0.0, m21, m22, m23, 0.0, m31, m32, m33, 0.0, 0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, x: f64, y: f64, z: f64) -> [f64; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

/// Normalize a hue into the `[0, 360)` range.
pub fn normalize_hue(hue: f64) -> f64 {
    hue.rem_euclid(360.0)
}

/// Check whether a value is close enough to zero to be treated as zero.
pub fn almost_zero(value: f64) -> bool {
    value.abs() < 1.0e-9
}

/// The signed, shortest-path rotation from `hue` toward the `pole` hue,
/// clamped to at most `degrees` so the rotation can not overshoot the pole.
pub fn step_toward(hue: f64, pole: f64, degrees: f64) -> f64 {
    let delta = (pole - hue + 540.0).rem_euclid(360.0) - 180.0;
    delta.signum() * degrees.min(delta.abs())
}
