//! G-loading estimator
//!
//! Differentiates consecutive inertial velocities, removes gravity and
//! expresses the resulting specific force in body axes:
//!
//! ```text
//! a   = (v_k - v_{k-1}) / dt
//! f   = a - g_inertial
//! f_b = R(q) * f
//! n   = [f_b.x / g, f_b.y / g, -f_b.z / g]
//! ```
//!
//! The z load factor is sign-flipped so a pull-up reads positive. One
//! estimator tracks exactly one vehicle; give every vehicle its own.

use serde::{Deserialize, Serialize};

use crate::config::{AvionicsConfig, InertialAxis};
use crate::error::{AvionicsError, Result};
use crate::math::{to_body, Orientation};
use crate::Vec3;

/// Body-axis load factors [g]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadFactors {
    pub n_x: f64,
    pub n_y: f64,
    pub n_z: f64,
    /// Magnitude of the load factor vector
    pub total: f64,
}

impl LoadFactors {
    /// Load factors from a body-frame specific force
    pub fn from_specific_force(f_body: &Vec3, gravity: f64) -> Self {
        let n_x = f_body.x / gravity;
        let n_y = f_body.y / gravity;
        let n_z = -f_body.z / gravity;

        Self {
            n_x,
            n_y,
            n_z,
            total: (n_x * n_x + n_y * n_y + n_z * n_z).sqrt(),
        }
    }

    pub fn as_vector(&self) -> Vec3 {
        Vec3::new(self.n_x, self.n_y, self.n_z)
    }
}

/// Estimator state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GLoadState {
    /// No previous sample; the next update only primes
    #[default]
    Uninitialized,
    /// Previous inertial velocity available
    Primed { previous_velocity: Vec3 },
}

/// Finite-difference g-loading estimator
#[derive(Debug, Clone)]
pub struct GLoadEstimator {
    /// Gravity magnitude [m/s²]
    gravity: f64,
    /// Gravity vector in the inertial frame [m/s²]
    gravity_inertial: Vec3,
    state: GLoadState,
    last_estimate: Option<LoadFactors>,
}

impl GLoadEstimator {
    /// Create an estimator for the given gravity magnitude and down axis
    pub fn new(gravity: f64, down_axis: InertialAxis) -> Self {
        Self {
            gravity,
            gravity_inertial: down_axis.unit_vector() * gravity,
            state: GLoadState::Uninitialized,
            last_estimate: None,
        }
    }

    pub fn from_config(config: &AvionicsConfig) -> Self {
        Self::new(config.gravity, config.down_axis)
    }

    /// Forget the previous sample
    pub fn reset(&mut self) {
        log::debug!("[GLoad] Reset, next update will only prime");
        self.state = GLoadState::Uninitialized;
        self.last_estimate = None;
    }

    /// Feed one sample
    ///
    /// `dt` must be the true time elapsed since the previous call [s].
    /// Returns `None` on the first call after construction or [`reset`](Self::reset).
    pub fn update(
        &mut self,
        q: &Orientation,
        v_inertial: &Vec3,
        dt: f64,
    ) -> Result<Option<LoadFactors>> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(AvionicsError::InvalidTimeStep(dt));
        }

        let estimate = match self.state {
            GLoadState::Uninitialized => {
                log::debug!("[GLoad] Primed with first velocity sample");
                None
            }
            GLoadState::Primed { previous_velocity } => {
                let a_inertial = (v_inertial - previous_velocity) / dt;
                let f_inertial = a_inertial - self.gravity_inertial;
                let f_body = to_body(q, &f_inertial);

                let factors = LoadFactors::from_specific_force(&f_body, self.gravity);
                log::trace!(
                    "[GLoad] n = [{:.3}, {:.3}, {:.3}], total {:.3} g (dt {:.4} s)",
                    factors.n_x,
                    factors.n_y,
                    factors.n_z,
                    factors.total,
                    dt
                );
                Some(factors)
            }
        };

        self.state = GLoadState::Primed {
            previous_velocity: *v_inertial,
        };
        self.last_estimate = estimate;

        Ok(estimate)
    }

    pub fn state(&self) -> &GLoadState {
        &self.state
    }

    pub fn is_primed(&self) -> bool {
        matches!(self.state, GLoadState::Primed { .. })
    }

    /// Previous inertial velocity, if primed
    pub fn previous_velocity(&self) -> Option<Vec3> {
        match self.state {
            GLoadState::Primed { previous_velocity } => Some(previous_velocity),
            GLoadState::Uninitialized => None,
        }
    }

    /// Estimate produced by the most recent update
    pub fn last_estimate(&self) -> Option<LoadFactors> {
        self.last_estimate
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

impl Default for GLoadEstimator {
    fn default() -> Self {
        Self::from_config(&AvionicsConfig::default())
    }
}
