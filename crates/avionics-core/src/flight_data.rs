//! Per-tick flight data
//!
//! Composes the frame transform, air data angles, attitude angles and the
//! g-load estimator into one [`DerivedFlightState`] per [`KinematicSample`].

use serde::{Deserialize, Serialize};

use crate::air_data::{
    nose_vector_angles, unit_vector_from_angles, velocity_vector_angles, AeroAngles, NoseAngles,
    VelocityVectorAngles,
};
use crate::config::AvionicsConfig;
use crate::error::{AvionicsError, Result};
use crate::estimation::{GLoadEstimator, LoadFactors};
use crate::math::{to_body, Orientation};
use crate::{Vec3, MPS_TO_KNOTS};

/// Rigid-body state supplied by the host for one tick
///
/// Position and velocity are always finite; deserialization goes through
/// [`KinematicSample::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawKinematicSample")]
pub struct KinematicSample {
    position: Vec3,
    orientation: Orientation,
    velocity: Vec3,
}

#[derive(Deserialize)]
struct RawKinematicSample {
    position: Vec3,
    orientation: Orientation,
    velocity: Vec3,
}

impl TryFrom<RawKinematicSample> for KinematicSample {
    type Error = AvionicsError;

    fn try_from(raw: RawKinematicSample) -> Result<Self> {
        Self::new(raw.position, raw.orientation, raw.velocity)
    }
}

impl KinematicSample {
    pub fn new(position: Vec3, orientation: Orientation, velocity: Vec3) -> Result<Self> {
        if !position.iter().all(|c| c.is_finite()) {
            return Err(AvionicsError::NonFiniteVector("position"));
        }
        if !velocity.iter().all(|c| c.is_finite()) {
            return Err(AvionicsError::NonFiniteVector("velocity"));
        }

        Ok(Self {
            position,
            orientation,
            velocity,
        })
    }

    /// Build a sample from host arrays: position `[x, y, z]`, quaternion
    /// `[w, x, y, z]`, velocity `[x, y, z]`
    pub fn from_slices(position: &[f64], quaternion: &[f64], velocity: &[f64]) -> Result<Self> {
        Self::new(
            vector_from_slice(position)?,
            Orientation::from_slice(quaternion)?,
            vector_from_slice(velocity)?,
        )
    }

    /// Inertial position
    pub fn position(&self) -> &Vec3 {
        &self.position
    }

    /// Orientation (inertial → body)
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Inertial velocity
    pub fn velocity(&self) -> &Vec3 {
        &self.velocity
    }
}

fn vector_from_slice(components: &[f64]) -> Result<Vec3> {
    match *components {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(AvionicsError::InvalidDimension {
            expected: 3,
            got: components.len(),
        }),
    }
}

/// Derived quantities for one tick
///
/// Angles in degrees, load factors in g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFlightState {
    /// Inertial position the state was derived at
    pub position: Vec3,
    /// Speed in the host's native units
    pub airspeed_native: f64,
    /// Speed in knots (native assumed m/s)
    pub airspeed_knots: f64,
    /// Velocity in body axes
    pub body_velocity: Vec3,
    pub angle_of_attack: f64,
    pub sideslip: f64,
    pub nose: NoseAngles,
    pub velocity_vector: VelocityVectorAngles,
    /// Unit vector along the nose
    pub nose_unit: Vec3,
    /// Unit vector along the velocity
    pub velocity_unit: Vec3,
    /// `None` on the first tick after construction or reset
    pub load_factors: Option<LoadFactors>,
}

/// Straight segment from a start point along a unit direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointingLine {
    pub start: Vec3,
    pub end: Vec3,
}

/// Point `distance` along `unit` from `origin`
pub fn project_along(origin: &Vec3, unit: &Vec3, distance: f64) -> Vec3 {
    origin + unit * distance
}

impl DerivedFlightState {
    /// Nose and velocity-vector lines of the given length, starting at the
    /// vehicle position
    pub fn pointing_lines(&self, distance: f64) -> (PointingLine, PointingLine) {
        let nose = PointingLine {
            start: self.position,
            end: project_along(&self.position, &self.nose_unit, distance),
        };
        let velocity = PointingLine {
            start: self.position,
            end: project_along(&self.position, &self.velocity_unit, distance),
        };
        (nose, velocity)
    }
}

/// Derive the full flight state for one sample
///
/// Order: frame transform, air data angles, attitude angles, g-load update.
/// The estimator is the only state carried between ticks.
pub fn derive_flight_state(
    sample: &KinematicSample,
    estimator: &mut GLoadEstimator,
    dt: f64,
    config: &AvionicsConfig,
) -> Result<DerivedFlightState> {
    let q = sample.orientation();
    let v = sample.velocity();

    let body_velocity = to_body(q, v);
    let aero = AeroAngles::from_body_velocity(&body_velocity, config);

    let nose = nose_vector_angles(q, config.body_axes);
    let velocity_vector = velocity_vector_angles(v);

    let load_factors = estimator.update(q, v, dt)?;

    let airspeed_native = v.norm();

    Ok(DerivedFlightState {
        position: *sample.position(),
        airspeed_native,
        airspeed_knots: airspeed_native * MPS_TO_KNOTS,
        body_velocity,
        angle_of_attack: aero.angle_of_attack,
        sideslip: aero.sideslip,
        nose,
        velocity_vector,
        nose_unit: unit_vector_from_angles(nose.pitch, nose.azimuth),
        velocity_unit: unit_vector_from_angles(velocity_vector.pitch, velocity_vector.azimuth),
        load_factors,
    })
}

/// Flight data context for one vehicle
///
/// Owns the configuration and that vehicle's g-load estimator.
#[derive(Debug, Clone)]
pub struct FlightData {
    config: AvionicsConfig,
    estimator: GLoadEstimator,
}

impl FlightData {
    pub fn new(config: AvionicsConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "[FlightData] New context: g = {}, body axes {:?}, down {:?}",
            config.gravity,
            config.body_axes,
            config.down_axis
        );

        Ok(Self {
            estimator: GLoadEstimator::from_config(&config),
            config,
        })
    }

    /// Derive this tick's flight state
    ///
    /// `dt` is the time elapsed since the previous call [s].
    pub fn update(&mut self, sample: &KinematicSample, dt: f64) -> Result<DerivedFlightState> {
        derive_flight_state(sample, &mut self.estimator, dt, &self.config).map_err(|e| {
            log::warn!("[FlightData] Tick rejected: {}", e);
            e
        })
    }

    /// Drop the carried g-load sample
    pub fn reset(&mut self) {
        log::debug!("[FlightData] Reset");
        self.estimator.reset();
    }

    pub fn config(&self) -> &AvionicsConfig {
        &self.config
    }

    pub fn estimator(&self) -> &GLoadEstimator {
        &self.estimator
    }
}

impl Default for FlightData {
    fn default() -> Self {
        let config = AvionicsConfig::default();
        Self {
            estimator: GLoadEstimator::from_config(&config),
            config,
        }
    }
}
