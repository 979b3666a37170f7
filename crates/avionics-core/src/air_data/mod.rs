//! Air data and attitude angles
//!
//! - Angle of attack and sideslip from body-frame velocity
//! - Nose-axis pitch/roll/azimuth and velocity-vector pitch/azimuth
//! - Unit pointing vectors reconstructed from pitch/azimuth pairs

pub mod aero_angles;
pub mod orientation_angles;

pub use aero_angles::*;
pub use orientation_angles::*;
