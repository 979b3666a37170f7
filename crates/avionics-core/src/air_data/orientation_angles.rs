//! Nose and velocity-vector angles
//!
//! Inertial axes: x east, y up, z north. Pitch is elevation above the x-z
//! plane, azimuth is measured from +z towards +x and wrapped into [0, 360).
//!
//! The nose direction is the forward row of the inertial → body matrix,
//! i.e. the body forward axis in inertial coordinates. Pitch and azimuth are
//! taken from that vector, so [`unit_vector_from_angles`] reproduces it.

use serde::{Deserialize, Serialize};

use crate::config::BodyAxes;
use crate::math::{asin_deg_clamped, atan2_deg, rotation_inertial_to_body, wrap_azimuth, Orientation};
use crate::Vec3;

/// Nose-axis attitude angles [deg]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NoseAngles {
    pub pitch: f64,
    pub roll: f64,
    pub azimuth: f64,
}

/// Velocity-vector angles [deg]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityVectorAngles {
    pub pitch: f64,
    pub azimuth: f64,
}

/// Body forward axis expressed in the inertial frame
pub fn nose_vector(q: &Orientation, axes: BodyAxes) -> Vec3 {
    rotation_inertial_to_body(q).row(axes.forward()).transpose()
}

/// Nose pitch, roll and azimuth [deg]
///
/// With [`BodyAxes::YUpZForward`]:
/// ```text
/// pitch   = asin(R[2,1])
/// roll    = atan2(R[0,1], R[1,1])
/// azimuth = atan2(R[2,0], R[2,2])
/// ```
pub fn nose_vector_angles(q: &Orientation, axes: BodyAxes) -> NoseAngles {
    let r = rotation_inertial_to_body(q);
    let (forward, up, lateral) = (axes.forward(), axes.up(), axes.lateral());

    NoseAngles {
        pitch: asin_deg_clamped(r[(forward, 1)]),
        roll: atan2_deg(r[(lateral, 1)], r[(up, 1)]),
        azimuth: wrap_azimuth(atan2_deg(r[(forward, 0)], r[(forward, 2)])),
    }
}

/// Velocity-vector pitch and azimuth [deg]
///
/// A zero vector yields (0, 0); a vertical vector has azimuth 0.
pub fn velocity_vector_angles(v_inertial: &Vec3) -> VelocityVectorAngles {
    let horizontal = (v_inertial.x * v_inertial.x + v_inertial.z * v_inertial.z).sqrt();
    if horizontal == 0.0 {
        return VelocityVectorAngles {
            pitch: if v_inertial.y == 0.0 { 0.0 } else { atan2_deg(v_inertial.y, 0.0) },
            azimuth: 0.0,
        };
    }

    VelocityVectorAngles {
        pitch: atan2_deg(v_inertial.y, horizontal),
        azimuth: wrap_azimuth(atan2_deg(v_inertial.x, v_inertial.z)),
    }
}

/// Unit direction vector for a pitch/azimuth pair [deg]
///
/// x = cos(p)·sin(a), y = sin(p), z = cos(p)·cos(a)
pub fn unit_vector_from_angles(pitch_deg: f64, azimuth_deg: f64) -> Vec3 {
    let pitch = pitch_deg.to_radians();
    let azimuth = azimuth_deg.to_radians();

    Vec3::new(
        pitch.cos() * azimuth.sin(),
        pitch.sin(),
        pitch.cos() * azimuth.cos(),
    )
    .normalize()
}
