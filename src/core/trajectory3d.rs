use tracing::{debug, trace};

use crate::core::constants::{MAGNUS_COEFFICIENT, ZERO_GRAVITY_FLIGHT_TIME_S};
use crate::core::params::LaunchParameters3D;
use crate::core::sampling::sample_times;
use crate::core::trajectory::{Sample, Trajectory, TrajectorySummary};
use crate::core::vector::{Point2, Point3};

pub fn velocity_components(params: &LaunchParameters3D) -> Point3 {
    let elevation = params.elevation_deg.to_radians();
    let azimuth = params.azimuth_deg.to_radians();
    let horizontal_speed = params.speed_mps * elevation.cos();
    Point3::new(
        horizontal_speed * azimuth.cos(),
        horizontal_speed * azimuth.sin(),
        params.speed_mps * elevation.sin(),
    )
}

/// Constant lateral acceleration standing in for the Magnus force.
///
/// Points 90 degrees counter-clockwise from the horizontal launch velocity with
/// magnitude `k * spin * |v_xy|`. Zero when the launch has no horizontal
/// component. It is evaluated once at launch and not updated along the path.
pub fn magnus_acceleration(velocity: Point3, spin: f64) -> Point2 {
    let horizontal = velocity.horizontal();
    let magnitude = MAGNUS_COEFFICIENT * spin * horizontal.norm();
    horizontal.perpendicular_unit().scale(magnitude)
}

/// Time to return to ground level; falls back to a fixed duration without gravity.
pub fn flight_time(params: &LaunchParameters3D) -> f64 {
    if params.gravity_mps2 == 0.0 {
        return ZERO_GRAVITY_FLIGHT_TIME_S;
    }
    (2.0 * velocity_components(params).z) / params.gravity_mps2
}

pub fn position_at_time(
    velocity: Point3,
    lateral_accel: Point2,
    gravity_mps2: f64,
    time_s: f64,
) -> Point3 {
    let half_t2 = 0.5 * time_s * time_s;
    Point3::new(
        (velocity.x * time_s) + (lateral_accel.x * half_t2),
        (velocity.y * time_s) + (lateral_accel.y * half_t2),
        (velocity.z * time_s) - (gravity_mps2 * half_t2),
    )
}

/// Samples a spatial flight and keeps only the points at or above ground.
///
/// The ground filter is applied sample by sample, so a flight that dips below
/// and comes back keeps both above-ground stretches.
pub fn compute_trajectory_3d(
    params: &LaunchParameters3D,
) -> (Trajectory<Point3>, TrajectorySummary<Point3>) {
    let velocity = velocity_components(params);
    let lateral_accel = magnus_acceleration(velocity, params.spin);
    let total_time_s = flight_time(params);
    trace!(
        ax = lateral_accel.x,
        ay = lateral_accel.y,
        spin = params.spin,
        "magnus acceleration"
    );

    let samples: Vec<_> = sample_times(total_time_s, params.sample_count)
        .into_iter()
        .map(|time_s| Sample {
            time_s,
            position: position_at_time(velocity, lateral_accel, params.gravity_mps2, time_s),
        })
        .filter(|sample| sample.position.z >= 0.0)
        .collect();
    let trajectory = Trajectory::from_samples(samples);
    let summary = summarize(&trajectory);

    debug!(
        speed_mps = params.speed_mps,
        elevation_deg = params.elevation_deg,
        azimuth_deg = params.azimuth_deg,
        total_time_s,
        requested = params.sample_count.get(),
        retained = trajectory.len(),
        range_m = summary.range_m,
        "computed spatial trajectory"
    );

    (trajectory, summary)
}

fn summarize(trajectory: &Trajectory<Point3>) -> TrajectorySummary<Point3> {
    let (Some(first), Some(last), Some(apex_idx)) =
        (trajectory.first(), trajectory.last(), trajectory.apex_index())
    else {
        return TrajectorySummary {
            time_of_flight_s: 0.0,
            range_m: 0.0,
            apex_height_m: 0.0,
            apex_position: Point3::ORIGIN,
            landing_position: Point3::ORIGIN,
        };
    };
    let apex = trajectory[apex_idx].position;

    TrajectorySummary {
        time_of_flight_s: last.time_s,
        range_m: first
            .position
            .horizontal()
            .distance(last.position.horizontal()),
        apex_height_m: apex.z,
        apex_position: apex,
        landing_position: last.position,
    }
}
