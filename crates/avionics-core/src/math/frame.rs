//! Frame transforms between inertial and body axes

use super::{apply, rotation_body_to_inertial, rotation_inertial_to_body, Orientation};
use crate::Vec3;

/// Express an inertial-frame vector in the body frame
///
/// v_body = R(q) * v_inertial
pub fn to_body(q: &Orientation, v_inertial: &Vec3) -> Vec3 {
    apply(&rotation_inertial_to_body(q), v_inertial)
}

/// Express a body-frame vector in the inertial frame
///
/// v_inertial = R(q)^T * v_body
pub fn to_inertial(q: &Orientation, v_body: &Vec3) -> Vec3 {
    apply(&rotation_body_to_inertial(q), v_body)
}
