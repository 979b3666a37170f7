//! Inertial/body rotation matrices
//!
//! Builds the 3x3 direction-cosine matrix from an [`Orientation`] and applies
//! it to vectors. Matrices are never cached; orientation changes every tick.

use super::Orientation;
use crate::{Mat3, Vec3};

/// Rotation matrix inertial → body
///
/// For q = [w, x, y, z]:
/// ```text
/// [1-2(y²+z²)   2(xy-wz)     2(xz+wy)  ]
/// [2(xy+wz)     1-2(x²+z²)   2(yz-wx)  ]
/// [2(xz-wy)     2(yz+wx)     1-2(x²+y²)]
/// ```
///
/// Row k is body axis k expressed in inertial coordinates.
pub fn rotation_inertial_to_body(q: &Orientation) -> Mat3 {
    let (w, x, y, z) = (q.w(), q.x(), q.y(), q.z());

    Mat3::new(
        1.0 - 2.0 * (y * y + z * z), 2.0 * (x * y - w * z), 2.0 * (x * z + w * y),
        2.0 * (x * y + w * z), 1.0 - 2.0 * (x * x + z * z), 2.0 * (y * z - w * x),
        2.0 * (x * z - w * y), 2.0 * (y * z + w * x), 1.0 - 2.0 * (x * x + y * y),
    )
}

/// Rotation matrix body → inertial
///
/// Exact transpose of [`rotation_inertial_to_body`].
pub fn rotation_body_to_inertial(q: &Orientation) -> Mat3 {
    rotation_inertial_to_body(q).transpose()
}

/// Apply a rotation matrix to a vector
///
/// v' = R * v
pub fn apply(r: &Mat3, v: &Vec3) -> Vec3 {
    r * v
}
