//! State estimation for the avionics engine
//!
//! - Finite-difference g-loading from consecutive inertial velocities

pub mod g_load;

pub use g_load::*;
