//! Flight Dynamics Validation Tests
//!
//! End-to-end checks of the derivation engine:
//! 1. Frame transforms round-trip and rotation matrices transpose exactly
//! 2. Degenerate inputs produce defined values, never NaN
//! 3. Air data angles are independent of speed
//! 4. G-loading follows the finite-difference formula tick by tick
//! 5. Per-vehicle contexts do not share state

use approx::assert_relative_eq;
use nalgebra::{Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;

use avionics_core::air_data::{
    angle_of_attack, nose_vector, nose_vector_angles, sideslip_angle, unit_vector_from_angles,
    velocity_vector_angles,
};
use avionics_core::math::{rotation_body_to_inertial, rotation_inertial_to_body, to_body, to_inertial};
use avionics_core::{
    AvionicsConfig, AvionicsError, BodyAxes, FlightData, GLoadEstimator, InertialAxis,
    KinematicSample, Orientation, STANDARD_GRAVITY,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Axis/angle grid covering small, large and near-gimbal rotations
fn orientation_grid() -> Vec<Orientation> {
    let axes = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(-2.0, 0.5, 1.5),
        Vector3::new(0.3, -0.8, -0.6),
    ];
    let angles = [0.0, 0.01, 0.5, -1.3, PI / 2.0, -PI / 2.0 + 1e-6, 3.0];

    axes.iter()
        .flat_map(|axis| {
            angles.iter().map(move |&angle| {
                Orientation::from(UnitQuaternion::from_axis_angle(&Unit::new_normalize(*axis), angle))
            })
        })
        .collect()
}

fn vector_grid() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(0.0, 0.0, 100.0),
        Vector3::new(250.0, -12.0, 3.0),
        Vector3::new(-1e-3, 2e-3, 5e-4),
        Vector3::new(1e4, 1e4, -1e4),
        Vector3::new(-33.3, 71.0, -0.2),
    ]
}

mod frame_transform_tests {
    use super::*;

    #[test]
    fn test_round_trip_all_orientations() {
        for q in orientation_grid() {
            for v in vector_grid() {
                let back = to_inertial(&q, &to_body(&q, &v));
                for i in 0..3 {
                    assert_relative_eq!(back[i], v[i], epsilon = 1e-9 * v.norm(), max_relative = 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_body_to_inertial_is_exact_transpose() {
        for q in orientation_grid() {
            let r = rotation_inertial_to_body(&q);
            let rt = rotation_body_to_inertial(&q);

            for i in 0..3 {
                for j in 0..3 {
                    assert_relative_eq!(rt[(i, j)], r[(j, i)], epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_identity_scenario() {
        let v = Vector3::new(0.0, 0.0, 100.0);
        let config = AvionicsConfig::default();
        let q = Orientation::identity();

        assert_relative_eq!(to_body(&q, &v), v, epsilon = 1e-12);
        assert_relative_eq!(angle_of_attack(&q, &v, &config), config.aoa_bias_deg, epsilon = 1e-12);
        assert_eq!(sideslip_angle(&q, &v, &config), 0.0);
    }

    #[test]
    fn test_non_unit_orientation_rejected() {
        assert!(matches!(
            Orientation::new(0.9, 0.0, 0.0, 0.0),
            Err(AvionicsError::InvalidOrientation { .. })
        ));
    }

    #[test]
    fn test_near_unit_orientation_round_trips() {
        let c = 1.0009 / 2.0_f64.sqrt();
        let q = Orientation::new(c, c, 0.0, 0.0).unwrap();
        let v = Vector3::new(10.0, 20.0, 30.0);

        let back = to_inertial(&q, &to_body(&q, &v));
        assert_relative_eq!(back, v, max_relative = 1e-6);

        for axes in [BodyAxes::YUpZForward, BodyAxes::ZUpXForward] {
            let nose = nose_vector(&q, axes);
            let angles = nose_vector_angles(&q, axes);

            assert_relative_eq!(nose.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(unit_vector_from_angles(angles.pitch, angles.azimuth), nose, epsilon = 1e-6);
        }
    }
}

mod degenerate_input_tests {
    use super::*;

    #[test]
    fn test_zero_velocity_angles_are_zero() {
        let config = AvionicsConfig::default();
        for q in orientation_grid() {
            assert_eq!(sideslip_angle(&q, &Vector3::zeros(), &config), 0.0);
            assert_eq!(angle_of_attack(&q, &Vector3::zeros(), &config), 0.0);
        }
    }

    #[test]
    fn test_zero_velocity_vector_angles() {
        let angles = velocity_vector_angles(&Vector3::zeros());
        assert_eq!(angles.pitch, 0.0);
        assert_eq!(angles.azimuth, 0.0);

        assert_relative_eq!(
            unit_vector_from_angles(0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_nose_angles_finite_everywhere() {
        for axes in [BodyAxes::YUpZForward, BodyAxes::ZUpXForward] {
            for q in orientation_grid() {
                let angles = nose_vector_angles(&q, axes);
                assert!(angles.pitch.is_finite());
                assert!(angles.roll.is_finite());
                assert!(angles.azimuth.is_finite());
                assert!((0.0..360.0).contains(&angles.azimuth));
            }
        }
    }

    #[test]
    fn test_zero_velocity_snapshot() {
        let mut flight_data = FlightData::default();
        let sample = KinematicSample::new(Vector3::zeros(), Orientation::identity(), Vector3::zeros()).unwrap();

        let state = flight_data.update(&sample, 0.02).unwrap();
        assert_eq!(state.airspeed_native, 0.0);
        assert_eq!(state.angle_of_attack, 0.0);
        assert_eq!(state.sideslip, 0.0);
        assert!(state.velocity_unit.iter().all(|c| c.is_finite()));
    }
}

mod air_data_tests {
    use super::*;

    #[test]
    fn test_angles_invariant_under_positive_scaling() {
        for axes in [BodyAxes::YUpZForward, BodyAxes::ZUpXForward] {
            let config = AvionicsConfig {
                body_axes: axes,
                ..AvionicsConfig::default()
            };

            for q in orientation_grid() {
                for v in vector_grid() {
                    let alpha = angle_of_attack(&q, &v, &config);
                    let beta = sideslip_angle(&q, &v, &config);

                    for scale in [1e-200, 1e-4, 0.3, 7.0, 1e3] {
                        let scaled = v * scale;
                        assert_relative_eq!(angle_of_attack(&q, &scaled, &config), alpha, epsilon = 1e-8);
                        assert_relative_eq!(sideslip_angle(&q, &scaled, &config), beta, epsilon = 1e-8);
                    }
                }
            }
        }
    }

    #[test]
    fn test_nose_vector_round_trip() {
        for axes in [BodyAxes::YUpZForward, BodyAxes::ZUpXForward] {
            for q in orientation_grid() {
                let angles = nose_vector_angles(&q, axes);
                let rebuilt = unit_vector_from_angles(angles.pitch, angles.azimuth);

                assert_relative_eq!(rebuilt, nose_vector(&q, axes), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_velocity_vector_round_trip() {
        for v in vector_grid() {
            let angles = velocity_vector_angles(&v);
            let rebuilt = unit_vector_from_angles(angles.pitch, angles.azimuth);

            assert_relative_eq!(rebuilt, v.normalize(), epsilon = 1e-9);
        }
    }
}

mod g_load_tests {
    use super::*;

    #[test]
    fn test_first_call_after_construction_and_reset() {
        let mut estimator = GLoadEstimator::default();
        let q = Orientation::identity();
        let v = Vector3::new(0.0, 0.0, 100.0);

        assert!(estimator.update(&q, &v, 0.02).unwrap().is_none());
        assert!(estimator.update(&q, &v, 0.02).unwrap().is_some());

        estimator.reset();
        assert!(estimator.update(&q, &v, 0.02).unwrap().is_none());
    }

    #[test]
    fn test_constant_velocity_reflects_gravity_only() {
        for q in orientation_grid() {
            let mut estimator = GLoadEstimator::default();
            let v = Vector3::new(12.0, -3.0, 150.0);

            estimator.update(&q, &v, 0.02).unwrap();
            let n = estimator.update(&q, &v, 0.37).unwrap().unwrap();

            let gravity_body = to_body(&q, &Vector3::new(0.0, 0.0, STANDARD_GRAVITY));
            assert_relative_eq!(n.n_x, -gravity_body.x / STANDARD_GRAVITY, epsilon = 1e-9);
            assert_relative_eq!(n.n_y, -gravity_body.y / STANDARD_GRAVITY, epsilon = 1e-9);
            assert_relative_eq!(n.n_z, gravity_body.z / STANDARD_GRAVITY, epsilon = 1e-9);
            assert_relative_eq!(n.total, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_forward_acceleration_scenario() {
        init_logging();
        let mut estimator = GLoadEstimator::new(STANDARD_GRAVITY, InertialAxis::PosZ);
        let q = Orientation::identity();

        assert!(estimator.update(&q, &Vector3::zeros(), 1.0).unwrap().is_none());
        let n = estimator.update(&q, &Vector3::new(10.0, 0.0, 0.0), 1.0).unwrap().unwrap();

        // a = (10, 0, 0), f = a - (0, 0, g) = (10, 0, -g)
        let expected_nx = 10.0 / STANDARD_GRAVITY;
        assert_relative_eq!(n.n_x, expected_nx, epsilon = 1e-4);
        assert_relative_eq!(n.n_y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(n.n_z, 1.0, epsilon = 1e-4);
        assert_relative_eq!(n.total, (expected_nx * expected_nx + 1.0).sqrt(), epsilon = 1e-4);
    }

    #[test]
    fn test_y_up_host_reads_one_g_in_level_flight() {
        // Hosts with y up put gravity along -y; the body up axis is y
        let mut estimator = GLoadEstimator::new(STANDARD_GRAVITY, InertialAxis::NegY);
        let q = Orientation::identity();
        let v = Vector3::new(0.0, 0.0, 120.0);

        estimator.update(&q, &v, 0.02).unwrap();
        let n = estimator.update(&q, &v, 0.02).unwrap().unwrap();

        assert_relative_eq!(n.n_y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_variable_time_step() {
        let mut estimator = GLoadEstimator::default();
        let q = Orientation::identity();

        estimator.update(&q, &Vector3::zeros(), 0.02).unwrap();
        let a = estimator.update(&q, &Vector3::new(1.0, 0.0, 0.0), 0.5).unwrap().unwrap();
        let b = estimator.update(&q, &Vector3::new(2.0, 0.0, 0.0), 0.25).unwrap().unwrap();

        assert_relative_eq!(a.n_x, 2.0 / STANDARD_GRAVITY, epsilon = 1e-12);
        assert_relative_eq!(b.n_x, 4.0 / STANDARD_GRAVITY, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_time_step() {
        let mut estimator = GLoadEstimator::default();
        assert!(matches!(
            estimator.update(&Orientation::identity(), &Vector3::zeros(), -1.0),
            Err(AvionicsError::InvalidTimeStep(dt)) if dt == -1.0
        ));
    }
}

mod flight_data_tests {
    use super::*;

    #[test]
    fn test_independent_vehicles() {
        init_logging();
        let mut lead = FlightData::default();
        let mut wingman = FlightData::default();
        let q = Orientation::identity();

        let cruise = KinematicSample::new(Vector3::zeros(), q, Vector3::new(0.0, 0.0, 100.0)).unwrap();
        let accel = KinematicSample::new(Vector3::zeros(), q, Vector3::new(9.80665, 0.0, 100.0)).unwrap();

        lead.update(&cruise, 1.0).unwrap();
        wingman.update(&cruise, 1.0).unwrap();

        let lead_state = lead.update(&cruise, 1.0).unwrap();
        let wingman_state = wingman.update(&accel, 1.0).unwrap();

        assert_relative_eq!(lead_state.load_factors.unwrap().n_x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(wingman_state.load_factors.unwrap().n_x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_snapshot_is_deterministic_apart_from_g_load() {
        let q = Orientation::from(UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3));
        let sample = KinematicSample::new(Vector3::new(10.0, 500.0, -20.0), q, Vector3::new(30.0, 5.0, 90.0)).unwrap();

        let mut a = FlightData::default();
        let mut b = FlightData::default();
        let first = a.update(&sample, 0.02).unwrap();
        let other = b.update(&sample, 0.02).unwrap();

        assert_eq!(first, other);
        assert_relative_eq!(first.airspeed_knots, first.airspeed_native * 1.94384, epsilon = 1e-12);
        assert_relative_eq!(first.nose_unit.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(first.velocity_unit, sample.velocity().normalize(), epsilon = 1e-9);
        assert_relative_eq!(first.nose_unit, nose_vector(&q, BodyAxes::YUpZForward), epsilon = 1e-9);
    }

    #[test]
    fn test_sample_round_trips_through_yaml() {
        let sample = KinematicSample::from_slices(&[1.0, 2.0, 3.0], &[1.0, 0.0, 0.0, 0.0], &[0.0, 0.0, 50.0]).unwrap();

        let text = serde_yaml::to_string(&sample).unwrap();
        let parsed: KinematicSample = serde_yaml::from_str(&text).unwrap();

        assert_eq!(parsed, sample);
    }
}
