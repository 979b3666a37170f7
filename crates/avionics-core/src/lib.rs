//! # Avionics Core
//!
//! Flight-dynamics derivation engine.
//!
//! Turns the raw rigid-body state a flight-dynamics host hands over each tick
//! (inertial position, orientation quaternion, inertial velocity) into the
//! quantities a pilot or an autopilot reads: airspeed, angle of attack,
//! sideslip, g-loading, nose and velocity-vector angles, and unit pointing
//! vectors.
//!
//! ## Modules
//!
//! - [`math`]: Orientation quaternion, rotation matrices, frame transforms
//! - [`air_data`]: Angle of attack, sideslip, nose and velocity-vector angles
//! - [`estimation`]: Finite-difference g-loading estimator
//! - [`flight_data`]: Per-tick composition into a [`DerivedFlightState`]
//! - [`config`]: Axis conventions and physical constants
//!
//! ## Frames
//!
//! Inertial vectors use the host's axes: x east, y up, z north. The
//! orientation quaternion maps inertial vectors into the body frame. Which
//! body axis is "forward" and which is "up" is an explicit
//! [`config::BodyAxes`] choice, and the direction gravity points along is
//! [`config::InertialAxis`].

pub mod math;
pub mod air_data;
pub mod estimation;
pub mod flight_data;
pub mod config;
pub mod error;

pub use config::{AvionicsConfig, BodyAxes, InertialAxis};
pub use error::{AvionicsError, Result};
pub use estimation::{GLoadEstimator, LoadFactors};
pub use flight_data::{DerivedFlightState, FlightData, KinematicSample};
pub use math::Orientation;

// Common type aliases
use nalgebra::{Matrix3, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f64>;

/// Standard gravity [m/s²]
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Metres per second to knots
pub const MPS_TO_KNOTS: f64 = 1.94384;

/// Maximum allowed deviation of a quaternion norm from 1
pub const ORIENTATION_TOLERANCE: f64 = 1e-3;
