//! Mathematical utilities for the avionics engine
//!
//! Implements the validated orientation quaternion, inertial/body rotation
//! matrices, frame transforms, and degree/azimuth helpers.

pub mod quaternion;
pub mod rotation;
pub mod frame;
pub mod angles;

pub use quaternion::*;
pub use rotation::*;
pub use frame::*;
pub use angles::*;
