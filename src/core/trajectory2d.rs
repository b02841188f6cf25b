use tracing::debug;

use crate::core::error::{TrajectoryError, TrajectoryResult};
use crate::core::params::LaunchParameters2D;
use crate::core::sampling::sample_times;
use crate::core::trajectory::{Sample, Trajectory, TrajectorySummary};
use crate::core::vector::Point2;

pub fn velocity_components(params: &LaunchParameters2D) -> Point2 {
    let theta = params.angle_deg.to_radians();
    Point2::new(
        params.speed_mps * theta.cos(),
        params.speed_mps * theta.sin(),
    )
}

pub fn position_at_time(params: &LaunchParameters2D, time_s: f64) -> Point2 {
    let velocity = velocity_components(params);
    Point2::new(
        velocity.x * time_s,
        (velocity.y * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s),
    )
}

/// Time until the projectile is back at launch height, `2 v0 sin(theta) / g`.
///
/// Negative when the launch points below the horizon or gravity is negative;
/// the value is returned as is.
pub fn flight_time(params: &LaunchParameters2D) -> TrajectoryResult<f64> {
    if params.gravity_mps2 == 0.0 {
        return Err(TrajectoryError::InvalidConfiguration(
            "zero gravity in 2D mode".to_string(),
        ));
    }
    let vy = velocity_components(params).y;
    Ok((2.0 * vy) / params.gravity_mps2)
}

/// Closed-form range `v0^2 sin(2 theta) / g` and apex height `(v0 sin(theta))^2 / 2g`.
pub fn analytical_extrema(params: &LaunchParameters2D) -> TrajectoryResult<(f64, f64)> {
    let g = params.gravity_mps2;
    if g == 0.0 {
        return Err(TrajectoryError::InvalidConfiguration(
            "zero gravity in 2D mode".to_string(),
        ));
    }
    let theta = params.angle_deg.to_radians();
    let v0 = params.speed_mps;
    let range = (v0 * v0 * (2.0 * theta).sin()) / g;
    let vy = v0 * theta.sin();
    let apex_height = (vy * vy) / (2.0 * g);
    Ok((range, apex_height))
}

/// Samples a planar flight from launch to return at launch height.
///
/// The summary reports the closed-form range and apex height. Its
/// `apex_position` pairs the x of the highest *sampled* point with the
/// closed-form apex height, so the marker sits on the analytical apex line
/// above the sampled peak.
pub fn compute_trajectory_2d(
    params: &LaunchParameters2D,
) -> TrajectoryResult<(Trajectory<Point2>, TrajectorySummary<Point2>)> {
    let time_of_flight_s = flight_time(params)?;
    let (range_m, apex_height_m) = analytical_extrema(params)?;

    let samples = sample_times(time_of_flight_s, params.sample_count)
        .into_iter()
        .map(|time_s| Sample {
            time_s,
            position: position_at_time(params, time_s),
        })
        .collect();
    let trajectory = Trajectory::from_samples(samples);

    let apex_x = trajectory
        .apex_index()
        .map_or(0.0, |idx| trajectory[idx].position.x);

    debug!(
        speed_mps = params.speed_mps,
        angle_deg = params.angle_deg,
        time_of_flight_s,
        range_m,
        apex_height_m,
        samples = trajectory.len(),
        "computed planar trajectory"
    );

    let summary = TrajectorySummary {
        time_of_flight_s,
        range_m,
        apex_height_m,
        apex_position: Point2::new(apex_x, apex_height_m),
        landing_position: Point2::new(range_m, 0.0),
    };
    Ok((trajectory, summary))
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::{compute_trajectory_2d, flight_time, position_at_time};
    use crate::core::error::TrajectoryError;
    use crate::core::params::LaunchParameters2D;
    use crate::core::vector::Point2;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn samples(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero sample count")
    }

    #[test]
    fn computes_known_range_for_flat_ground() {
        let (trajectory, summary) = compute_trajectory_2d(&LaunchParameters2D::new(10.0, 45.0))
            .expect("calculation should succeed");

        assert_close(summary.time_of_flight_s, 1.4416, 0.001);
        assert_close(summary.range_m, 10.1937, 0.001);
        assert_close(summary.apex_height_m, 2.5484, 0.001);
        assert_eq!(trajectory.len(), 500);
        assert_eq!(summary.landing_position, Point2::new(summary.range_m, 0.0));
    }

    #[test]
    fn spans_launch_to_landing() {
        let params = LaunchParameters2D::new(20.0, 30.0);
        let (trajectory, summary) = compute_trajectory_2d(&params).expect("valid launch");

        let first = trajectory.first().expect("non-empty");
        let last = trajectory.last().expect("non-empty");
        assert_eq!(first.time_s, 0.0);
        assert_eq!(first.position, Point2::ORIGIN);
        assert_eq!(last.time_s, summary.time_of_flight_s);
        assert_close(last.position.x, summary.range_m, 1e-9);
        assert_close(last.position.y, 0.0, 1e-9);
    }

    #[test]
    fn vertical_launch_from_reference_example() {
        let (trajectory, summary) =
            compute_trajectory_2d(&LaunchParameters2D::new(10.0, 90.0)).expect("valid launch");

        assert_close(summary.apex_height_m, 100.0 / (2.0 * 9.81), 1e-9);
        assert_close(summary.range_m, 0.0, 1e-12);
        assert!(trajectory.iter().all(|s| s.position.x.abs() < 1e-12));
    }

    #[test]
    fn apex_marker_uses_sampled_x_and_analytical_height() {
        // Even sample count: no sample lands exactly on the vertex.
        let params = LaunchParameters2D::new(15.0, 60.0).with_sample_count(samples(8));
        let (trajectory, summary) = compute_trajectory_2d(&params).expect("valid launch");

        let mut sampled_peak = &trajectory[0];
        for sample in &trajectory {
            if sample.position.y > sampled_peak.position.y {
                sampled_peak = sample;
            }
        }
        assert_eq!(summary.apex_position.x, sampled_peak.position.x);
        assert_eq!(summary.apex_position.y, summary.apex_height_m);
        assert!(sampled_peak.position.y < summary.apex_height_m);
    }

    #[test]
    fn single_sample_is_origin() {
        let params = LaunchParameters2D::new(12.0, 40.0).with_sample_count(samples(1));
        let (trajectory, _) = compute_trajectory_2d(&params).expect("valid launch");

        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory[0].time_s, 0.0);
        assert_eq!(trajectory[0].position, Point2::ORIGIN);
    }

    #[test]
    fn rejects_zero_gravity() {
        let params = LaunchParameters2D::new(10.0, 90.0).with_gravity(0.0);
        let err = compute_trajectory_2d(&params).expect_err("zero gravity should fail");

        assert!(matches!(err, TrajectoryError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("zero gravity"));
    }

    #[test]
    fn downward_launch_runs_time_backwards() {
        let params = LaunchParameters2D::new(10.0, 210.0).with_sample_count(samples(11));
        let (trajectory, summary) = compute_trajectory_2d(&params).expect("valid launch");

        assert!(summary.time_of_flight_s < 0.0);
        assert!(
            trajectory
                .samples()
                .windows(2)
                .all(|pair| pair[1].time_s < pair[0].time_s)
        );
        assert_eq!(
            trajectory.last().map(|s| s.time_s),
            Some(summary.time_of_flight_s)
        );
    }

    #[test]
    fn negative_speed_is_not_rejected() {
        let params = LaunchParameters2D::new(-10.0, 45.0);
        let (_, summary) = compute_trajectory_2d(&params).expect("negative speed passes through");

        assert!(summary.time_of_flight_s < 0.0);
        assert_close(
            summary.range_m,
            compute_trajectory_2d(&LaunchParameters2D::new(10.0, 45.0))
                .expect("valid launch")
                .1
                .range_m,
            1e-12,
        );
    }

    #[test]
    fn position_follows_closed_form() {
        let params = LaunchParameters2D::new(10.0, 45.0);
        let t = flight_time(&params).expect("valid launch") / 2.0;
        let p = position_at_time(&params, t);

        let v = 10.0 * 45.0f64.to_radians().sin();
        assert_close(p.x, 10.0 * 45.0f64.to_radians().cos() * t, 1e-12);
        assert_close(p.y, v * t - 0.5 * 9.81 * t * t, 1e-12);
    }
}
