use std::ops::Range;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::core::params::{LaunchParameters2D, LaunchParameters3D};
use crate::core::trajectory::{Trajectory, TrajectorySummary};
use crate::core::vector::{Point2, Point3};
use crate::core::window::PlotWindow;
use crate::presenter::{PresenterError, PresenterResult};

const CHART_SIZE: (u32, u32) = (960, 720);
const MARKER_RADIUS: i32 = 5;
const DASH_SIZE: i32 = 8;
const DASH_GAP: i32 = 6;
const CAPTION_FONT: (&str, u32) = ("sans-serif", 24);

/// File name used by `--plot-auto`, e.g. `trajectory-2d-20260102-030405.svg`.
pub fn auto_file_name(dimension: &str, now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "trajectory-{dimension}-{}.svg",
        now.format("%Y%m%d-%H%M%S")
    ))
}

fn render_err<E: std::fmt::Display>(err: E) -> PresenterError {
    PresenterError::Render(err.to_string())
}

/// Planar chart: sampled curve, guide lines at the closed-form apex
/// height and range, and markers at the landing point and apex marker.
pub fn planar_svg(
    params: &LaunchParameters2D,
    trajectory: &Trajectory<Point2>,
    summary: &TrajectorySummary<Point2>,
) -> PresenterResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw_planar(&root, params, trajectory, summary)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

fn draw_planar(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    params: &LaunchParameters2D,
    trajectory: &Trajectory<Point2>,
    summary: &TrajectorySummary<Point2>,
) -> PresenterResult<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let window = PlotWindow::fixed_ratio(
        trajectory
            .positions()
            .chain([summary.apex_position, summary.landing_position]),
    );
    let mut chart = ChartBuilder::on(root)
        .caption("Projectile motion in 2D", CAPTION_FONT)
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(window.min_x..window.max_x, window.min_y..window.max_y)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            trajectory.positions().map(|p| (p.x, p.y)),
            BLUE.stroke_width(2),
        ))
        .map_err(render_err)?
        .label(format!(
            "Trajectory (v0={} m/s, angle={} deg)",
            params.speed_mps, params.angle_deg
        ))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    let apex_y = summary.apex_height_m;
    chart
        .draw_series(DashedLineSeries::new(
            [(window.min_x, apex_y), (window.max_x, apex_y)],
            DASH_SIZE,
            DASH_GAP,
            RED.mix(0.6).into(),
        ))
        .map_err(render_err)?
        .label(format!("Max height: {apex_y:.2} m"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    let range_x = summary.range_m;
    chart
        .draw_series(DashedLineSeries::new(
            [(range_x, window.min_y), (range_x, window.max_y)],
            DASH_SIZE,
            DASH_GAP,
            GREEN.mix(0.6).into(),
        ))
        .map_err(render_err)?
        .label(format!("Range: {range_x:.2} m"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    let landing = summary.landing_position;
    let apex = summary.apex_position;
    chart
        .draw_series([
            Circle::new((landing.x, landing.y), MARKER_RADIUS, GREEN.filled()),
            Circle::new((apex.x, apex.y), MARKER_RADIUS, RED.filled()),
        ])
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;
    Ok(())
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (mut lo, mut hi) = (0.0f64, 0.0f64);
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    let pad = ((hi - lo) * 0.08).max(0.5);
    (lo - pad)..(hi + pad)
}

/// Perspective chart of a spatial flight with apex and landing markers.
///
/// Plotters draws its second 3D axis vertically, so positions are passed as
/// `(x, height, lateral)`.
pub fn spatial_svg(
    params: &LaunchParameters3D,
    trajectory: &Trajectory<Point3>,
    summary: &TrajectorySummary<Point3>,
) -> PresenterResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw_spatial(&root, params, trajectory, summary)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

fn draw_spatial(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    params: &LaunchParameters3D,
    trajectory: &Trajectory<Point3>,
    summary: &TrajectorySummary<Point3>,
) -> PresenterResult<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let x_range = padded_range(trajectory.positions().map(|p| p.x));
    let lateral_range = padded_range(trajectory.positions().map(|p| p.y));
    let height_range = padded_range(trajectory.positions().map(|p| p.z));

    let caption = format!(
        "Projectile motion in 3D (v0={} m/s, elev={} deg, azim={} deg, spin={})",
        params.speed_mps, params.elevation_deg, params.azimuth_deg, params.spin
    );
    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 20))
        .margin(16)
        .build_cartesian_3d(x_range, height_range, lateral_range)
        .map_err(render_err)?;
    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.3;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.12))
        .max_light_lines(3)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            trajectory.positions().map(|p| (p.x, p.z, p.y)),
            BLUE.stroke_width(2),
        ))
        .map_err(render_err)?;

    let apex = summary.apex_position;
    let landing = summary.landing_position;
    chart
        .draw_series([
            Circle::new((apex.x, apex.z, apex.y), MARKER_RADIUS, RED.filled()),
            Circle::new(
                (landing.x, landing.z, landing.y),
                MARKER_RADIUS,
                GREEN.filled(),
            ),
        ])
        .map_err(render_err)?;
    Ok(())
}

pub fn write_planar_svg(
    path: &Path,
    params: &LaunchParameters2D,
    trajectory: &Trajectory<Point2>,
    summary: &TrajectorySummary<Point2>,
) -> PresenterResult<()> {
    let svg = planar_svg(params, trajectory, summary)?;
    std::fs::write(path, svg)?;
    info!(path = %path.display(), "wrote planar chart");
    Ok(())
}

pub fn write_spatial_svg(
    path: &Path,
    params: &LaunchParameters3D,
    trajectory: &Trajectory<Point3>,
    summary: &TrajectorySummary<Point3>,
) -> PresenterResult<()> {
    let svg = spatial_svg(params, trajectory, summary)?;
    std::fs::write(path, svg)?;
    info!(path = %path.display(), "wrote spatial chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::{auto_file_name, padded_range, planar_svg, spatial_svg};
    use crate::core::params::{LaunchParameters2D, LaunchParameters3D};
    use crate::core::trajectory2d::compute_trajectory_2d;
    use crate::core::trajectory3d::compute_trajectory_3d;

    #[test]
    #[ignore = "text layout needs a system sans-serif font"]
    fn planar_chart_carries_labels() {
        let params = LaunchParameters2D::new(10.0, 90.0);
        let (trajectory, summary) = compute_trajectory_2d(&params).expect("valid launch");
        let svg = planar_svg(&params, &trajectory, &summary).expect("renders");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Distance (m)"));
        assert!(svg.contains("Height (m)"));
        assert!(svg.contains("Max height: 5.10 m"));
    }

    #[test]
    #[ignore = "text layout needs a system sans-serif font"]
    fn spatial_chart_renders() {
        let params = LaunchParameters3D::new(25.0, 45.0, 30.0).with_spin(20.0);
        let (trajectory, summary) = compute_trajectory_3d(&params);
        let svg = spatial_svg(&params, &trajectory, &summary).expect("renders");

        assert!(svg.contains("Projectile motion in 3D"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn auto_name_is_timestamped() {
        let now = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            auto_file_name("3d", now).to_string_lossy(),
            "trajectory-3d-20260102-030405.svg"
        );
    }

    #[test]
    fn padded_range_is_never_empty() {
        let range = padded_range([0.0, 0.0].into_iter());
        assert!(range.start < range.end);
        let range = padded_range([f64::NAN, 3.0].into_iter());
        assert!(range.start < 0.0 && range.end > 3.0);
    }
}
