//! Avionics configuration
//!
//! Hosts disagree on axis conventions, so the body-axis pairing used for air
//! data angles and the inertial "down" axis used for gravity are explicit
//! settings rather than constants baked into the formulas.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AvionicsError, Result};
use crate::{Vec3, STANDARD_GRAVITY};

/// Avionics configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvionicsConfig {
    /// Gravity magnitude [m/s²]
    pub gravity: f64,
    /// Body-axis convention for angle of attack, sideslip and nose angles
    pub body_axes: BodyAxes,
    /// Constant offset added to the angle of attack [deg]
    pub aoa_bias_deg: f64,
    /// Inertial axis gravity points along
    pub down_axis: InertialAxis,
}

impl Default for AvionicsConfig {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            body_axes: BodyAxes::YUpZForward,
            aoa_bias_deg: 1.0,
            down_axis: InertialAxis::PosZ,
        }
    }
}

impl AvionicsConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(AvionicsError::InvalidConfig(format!(
                "gravity must be finite and positive, got {}",
                self.gravity
            )));
        }
        if !self.aoa_bias_deg.is_finite() {
            return Err(AvionicsError::InvalidConfig(format!(
                "aoa_bias_deg must be finite, got {}",
                self.aoa_bias_deg
            )));
        }
        Ok(())
    }

    /// Parse and validate a YAML configuration
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Gravity vector in the inertial frame
    pub fn gravity_inertial(&self) -> Vec3 {
        self.down_axis.unit_vector() * self.gravity
    }
}

/// Body-axis convention
///
/// Names which body axis points forward (out of the nose) and which points
/// up (out of the canopy). The remaining axis is lateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyAxes {
    /// Lateral x, up y, forward z
    ///
    /// AoA = -atan2(v.y, v.z) + bias
    YUpZForward,
    /// Forward x, lateral y, up z
    ///
    /// AoA = atan2(v.z, v.x) + bias
    ZUpXForward,
}

impl BodyAxes {
    /// Index of the forward body axis
    pub fn forward(self) -> usize {
        match self {
            BodyAxes::YUpZForward => 2,
            BodyAxes::ZUpXForward => 0,
        }
    }

    /// Index of the up body axis
    pub fn up(self) -> usize {
        match self {
            BodyAxes::YUpZForward => 1,
            BodyAxes::ZUpXForward => 2,
        }
    }

    /// Index of the lateral body axis
    pub fn lateral(self) -> usize {
        match self {
            BodyAxes::YUpZForward => 0,
            BodyAxes::ZUpXForward => 1,
        }
    }

    /// Sign applied to atan2(up, forward) when forming the angle of attack
    pub fn aoa_sign(self) -> f64 {
        match self {
            BodyAxes::YUpZForward => -1.0,
            BodyAxes::ZUpXForward => 1.0,
        }
    }
}

/// Signed inertial axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InertialAxis {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl InertialAxis {
    /// Unit vector along this axis
    pub fn unit_vector(self) -> Vec3 {
        match self {
            InertialAxis::PosX => Vec3::x(),
            InertialAxis::NegX => -Vec3::x(),
            InertialAxis::PosY => Vec3::y(),
            InertialAxis::NegY => -Vec3::y(),
            InertialAxis::PosZ => Vec3::z(),
            InertialAxis::NegZ => -Vec3::z(),
        }
    }
}
