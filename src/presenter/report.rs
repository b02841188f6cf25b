use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::core::params::{LaunchParameters2D, LaunchParameters3D};
use crate::core::trajectory::{Trajectory, TrajectorySummary};
use crate::core::vector::{Point2, Point3};
use crate::presenter::PresenterResult;

/// JSON document printed by the CLI.
#[derive(Debug, Serialize)]
pub struct FlightReport<'a, L, P> {
    pub generated_at: String,
    pub parameters: &'a L,
    pub summary: &'a TrajectorySummary<P>,
    pub sample_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<&'a Trajectory<P>>,
}

impl<'a, L, P> FlightReport<'a, L, P> {
    pub fn new(
        generated_at: DateTime<Utc>,
        parameters: &'a L,
        trajectory: &'a Trajectory<P>,
        summary: &'a TrajectorySummary<P>,
        include_samples: bool,
    ) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            parameters,
            summary,
            sample_count: trajectory.len(),
            samples: include_samples.then_some(trajectory),
        }
    }
}

impl<L: Serialize, P: Serialize> FlightReport<'_, L, P> {
    pub fn to_json(&self) -> PresenterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn planar_table(params: &LaunchParameters2D, summary: &TrajectorySummary<Point2>) -> String {
    format!(
        "PLANAR TRAJECTORY\n\
         Launch: {:.2} m/s at {:.2} deg, g = {:.2} m/s^2, {} samples\n\
         Time of flight: {:.4} s\n\
         Range: {:.4} m\n\
         Max height: {:.4} m\n\
         Apex marker: ({:.4}, {:.4}) m\n\
         Landing point: ({:.4}, {:.4}) m\n",
        params.speed_mps,
        params.angle_deg,
        params.gravity_mps2,
        params.sample_count,
        summary.time_of_flight_s,
        summary.range_m,
        summary.apex_height_m,
        summary.apex_position.x,
        summary.apex_position.y,
        summary.landing_position.x,
        summary.landing_position.y,
    )
}

pub fn spatial_table(
    params: &LaunchParameters3D,
    trajectory: &Trajectory<Point3>,
    summary: &TrajectorySummary<Point3>,
) -> String {
    format!(
        "SPATIAL TRAJECTORY\n\
         Launch: {:.2} m/s, elevation {:.2} deg, azimuth {:.2} deg, spin {:.2}, g = {:.2} m/s^2\n\
         Samples above ground: {} of {}\n\
         Time of flight: {:.4} s\n\
         Range: {:.4} m\n\
         Max height: {:.4} m\n\
         Apex: ({:.4}, {:.4}, {:.4}) m\n\
         Landing point: ({:.4}, {:.4}, {:.4}) m\n",
        params.speed_mps,
        params.elevation_deg,
        params.azimuth_deg,
        params.spin,
        params.gravity_mps2,
        trajectory.len(),
        params.sample_count,
        summary.time_of_flight_s,
        summary.range_m,
        summary.apex_height_m,
        summary.apex_position.x,
        summary.apex_position.y,
        summary.apex_position.z,
        summary.landing_position.x,
        summary.landing_position.y,
        summary.landing_position.z,
    )
}

pub fn planar_samples_table(trajectory: &Trajectory<Point2>) -> String {
    let mut out = format!("{:>10} {:>12} {:>12}\n", "t (s)", "x (m)", "y (m)");
    for sample in trajectory {
        out.push_str(&format!(
            "{:>10.4} {:>12.4} {:>12.4}\n",
            sample.time_s, sample.position.x, sample.position.y
        ));
    }
    out
}

pub fn spatial_samples_table(trajectory: &Trajectory<Point3>) -> String {
    let mut out = format!(
        "{:>10} {:>12} {:>12} {:>12}\n",
        "t (s)", "x (m)", "y (m)", "z (m)"
    );
    for sample in trajectory {
        out.push_str(&format!(
            "{:>10.4} {:>12.4} {:>12.4} {:>12.4}\n",
            sample.time_s, sample.position.x, sample.position.y, sample.position.z
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use chrono::{TimeZone, Utc};

    use super::{FlightReport, planar_samples_table, planar_table, spatial_table};
    use crate::core::params::{LaunchParameters2D, LaunchParameters3D};
    use crate::core::trajectory2d::compute_trajectory_2d;
    use crate::core::trajectory3d::compute_trajectory_3d;

    #[test]
    fn planar_table_lists_key_quantities() {
        let params = LaunchParameters2D::new(10.0, 45.0);
        let (_, summary) = compute_trajectory_2d(&params).expect("valid launch");
        let table = planar_table(&params, &summary);

        assert!(table.contains("Time of flight: 1.4416 s"));
        assert!(table.contains("Range: 10.1937 m"));
        assert!(table.contains("Max height: 2.5484 m"));
    }

    #[test]
    fn summary_tables_put_one_field_per_line() {
        let params = LaunchParameters2D::new(10.0, 45.0);
        let (_, summary) = compute_trajectory_2d(&params).expect("valid launch");
        let planar = planar_table(&params, &summary);
        let lines: Vec<&str> = planar.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "PLANAR TRAJECTORY");
        assert!(lines[1].starts_with("Launch: 10.00 m/s at 45.00 deg"));
        assert!(lines[6].starts_with("Landing point: (10.1937, 0.0000) m"));

        let params = LaunchParameters3D::new(25.0, 45.0, 30.0);
        let (trajectory, summary) = compute_trajectory_3d(&params);
        let spatial = spatial_table(&params, &trajectory, &summary);
        assert_eq!(spatial.lines().count(), 8);
        assert!(spatial.lines().all(|line| line == line.trim_start()));
    }

    #[test]
    fn spatial_table_reports_retained_samples() {
        let params = LaunchParameters3D::new(25.0, 45.0, 30.0).with_spin(20.0);
        let (trajectory, summary) = compute_trajectory_3d(&params);
        let table = spatial_table(&params, &trajectory, &summary);

        assert!(table.contains(&format!("Samples above ground: {} of 500", trajectory.len())));
        assert!(table.contains("spin 20.00"));
    }

    #[test]
    fn sample_table_has_one_row_per_sample() {
        let params = LaunchParameters2D::new(10.0, 45.0)
            .with_sample_count(NonZeroUsize::new(4).expect("non-zero"));
        let (trajectory, _) = compute_trajectory_2d(&params).expect("valid launch");

        assert_eq!(planar_samples_table(&trajectory).lines().count(), 5);
    }

    #[test]
    fn json_report_omits_samples_unless_asked() {
        let params = LaunchParameters2D::new(10.0, 45.0)
            .with_sample_count(NonZeroUsize::new(3).expect("non-zero"));
        let (trajectory, summary) = compute_trajectory_2d(&params).expect("valid launch");
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        let brief = FlightReport::new(at, &params, &trajectory, &summary, false)
            .to_json()
            .expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&brief).expect("valid json");
        assert_eq!(value["generated_at"], "2026-01-02T03:04:05Z");
        assert_eq!(value["sample_count"], 3);
        assert_eq!(value["parameters"]["angle_deg"], 45.0);
        assert!(value.get("samples").is_none());

        let full = FlightReport::new(at, &params, &trajectory, &summary, true)
            .to_json()
            .expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&full).expect("valid json");
        assert_eq!(value["samples"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["samples"][0]["time_s"], 0.0);
    }
}
