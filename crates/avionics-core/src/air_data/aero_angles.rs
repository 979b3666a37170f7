//! Angle of attack and sideslip
//!
//! Both angles come from the velocity expressed in body axes. The axis
//! pairing and the AoA sign/bias follow [`AvionicsConfig`]; with the default
//! [`BodyAxes::YUpZForward`](crate::BodyAxes::YUpZForward) and 1° bias:
//!
//! ```text
//! α = -atan2(v_b.y, v_b.z) + 1°
//! β = asin(v_b.x / |v_b|)
//! ```
//!
//! These are host-convention formulas, not a general aerodynamic definition.
//! A zero body velocity yields 0 for both angles.

use serde::{Deserialize, Serialize};

use crate::config::AvionicsConfig;
use crate::math::{asin_deg_clamped, atan2_deg, to_body, Orientation};
use crate::Vec3;

/// Angle of attack and sideslip [deg]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AeroAngles {
    /// Angle of attack α [deg]
    pub angle_of_attack: f64,
    /// Sideslip angle β [deg]
    pub sideslip: f64,
}

impl AeroAngles {
    /// Compute both angles from an already-transformed body velocity
    pub fn from_body_velocity(v_body: &Vec3, config: &AvionicsConfig) -> Self {
        Self {
            angle_of_attack: angle_of_attack_body(v_body, config),
            sideslip: sideslip_angle_body(v_body, config),
        }
    }
}

/// Angle of attack [deg] from orientation and inertial velocity
pub fn angle_of_attack(q: &Orientation, v_inertial: &Vec3, config: &AvionicsConfig) -> f64 {
    angle_of_attack_body(&to_body(q, v_inertial), config)
}

/// Sideslip angle [deg] from orientation and inertial velocity
pub fn sideslip_angle(q: &Orientation, v_inertial: &Vec3, config: &AvionicsConfig) -> f64 {
    sideslip_angle_body(&to_body(q, v_inertial), config)
}

/// Angle of attack [deg] from body velocity
pub fn angle_of_attack_body(v_body: &Vec3, config: &AvionicsConfig) -> f64 {
    if v_body.iter().all(|c| *c == 0.0) {
        return 0.0;
    }

    let axes = config.body_axes;
    let (up, forward) = (v_body[axes.up()], v_body[axes.forward()]);

    // Signed zeros would turn atan2(±0, -0) into ±180
    let incidence = if up == 0.0 && forward == 0.0 {
        0.0
    } else {
        atan2_deg(up, forward)
    };

    axes.aoa_sign() * incidence + config.aoa_bias_deg
}

/// Sideslip angle [deg] from body velocity
pub fn sideslip_angle_body(v_body: &Vec3, config: &AvionicsConfig) -> f64 {
    let largest = v_body.amax();
    if largest == 0.0 {
        return 0.0;
    }

    // Scale to the largest component first so tiny speeds do not underflow
    let scaled = v_body / largest;
    asin_deg_clamped(scaled[config.body_axes.lateral()] / scaled.norm())
}
