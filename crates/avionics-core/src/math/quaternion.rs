//! Orientation quaternion
//!
//! The host supplies attitude as a quaternion `[w, x, y, z]` that rotates
//! inertial-frame vectors into the body frame. [`Orientation`] is that
//! quaternion after its norm has been checked against
//! [`ORIENTATION_TOLERANCE`](crate::ORIENTATION_TOLERANCE), so every
//! downstream rotation can assume a (near-)unit input.

use nalgebra::{Quaternion, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::error::{AvionicsError, Result};
use crate::ORIENTATION_TOLERANCE;

/// Validated orientation quaternion (inertial → body)
///
/// Quaternions within tolerance are scaled to unit norm so the rotation
/// matrices built from them stay orthonormal.
/// Serialized as a `[w, x, y, z]` array and re-validated on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct Orientation(Quaternion<f64>);

impl Orientation {
    /// Create an orientation, rejecting quaternions whose norm is not within
    /// tolerance of 1 and normalizing the rest
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Result<Self> {
        let q = Quaternion::new(w, x, y, z);
        let norm = q.norm();

        if !norm.is_finite() || (norm - 1.0).abs() > ORIENTATION_TOLERANCE {
            return Err(AvionicsError::InvalidOrientation { norm });
        }

        Ok(Self(q / norm))
    }

    /// Create an orientation from a quaternion of any non-zero norm
    ///
    /// For hosts that do not guarantee unit quaternions.
    pub fn normalized(w: f64, x: f64, y: f64, z: f64) -> Result<Self> {
        let q = Quaternion::new(w, x, y, z);
        let norm = q.norm();

        if !norm.is_finite() || norm < f64::EPSILON {
            return Err(AvionicsError::InvalidOrientation { norm });
        }

        Ok(Self(q / norm))
    }

    /// Create an orientation from a host array `[w, x, y, z]`
    pub fn from_slice(components: &[f64]) -> Result<Self> {
        match *components {
            [w, x, y, z] => Self::new(w, x, y, z),
            _ => Err(AvionicsError::InvalidDimension {
                expected: 4,
                got: components.len(),
            }),
        }
    }

    /// Identity orientation (body axes aligned with inertial axes)
    pub fn identity() -> Self {
        Self(Quaternion::identity())
    }

    pub fn w(&self) -> f64 {
        self.0.w
    }

    pub fn x(&self) -> f64 {
        self.0.i
    }

    pub fn y(&self) -> f64 {
        self.0.j
    }

    pub fn z(&self) -> f64 {
        self.0.k
    }

    /// Underlying quaternion
    pub fn quaternion(&self) -> &Quaternion<f64> {
        &self.0
    }

    /// Quaternion norm
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<UnitQuaternion<f64>> for Orientation {
    fn from(q: UnitQuaternion<f64>) -> Self {
        Self(q.into_inner())
    }
}

impl TryFrom<Quaternion<f64>> for Orientation {
    type Error = AvionicsError;

    fn try_from(q: Quaternion<f64>) -> Result<Self> {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl TryFrom<[f64; 4]> for Orientation {
    type Error = AvionicsError;

    fn try_from([w, x, y, z]: [f64; 4]) -> Result<Self> {
        Self::new(w, x, y, z)
    }
}

impl From<Orientation> for [f64; 4] {
    fn from(q: Orientation) -> Self {
        [q.w(), q.x(), q.y(), q.z()]
    }
}
