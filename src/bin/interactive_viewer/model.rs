use parabolic_flight::core::window::PlotWindow;
use parabolic_flight::{Point2, compute_trajectory_2d, compute_trajectory_3d};

use crate::state::ViewerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ViewMode {
    Planar,
    Spatial,
}

impl ViewMode {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Planar => "2D",
            Self::Spatial => "3D",
        }
    }

    pub(crate) fn file_tag(self) -> &'static str {
        match self {
            Self::Planar => "2d",
            Self::Spatial => "3d",
        }
    }
}

/// Closed-form apex height and range drawn as guide lines in 2D.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Guides {
    pub(crate) apex_height_m: f64,
    pub(crate) range_m: f64,
}

/// Everything one frame needs to draw, in world coordinates.
///
/// `side_path` is (downrange distance, height). In 3D the downrange distance
/// is the horizontal distance from the launch point and `ground_track` holds
/// the (x, y) footprint.
pub(crate) struct SceneView {
    pub(crate) side_path: Vec<Point2>,
    pub(crate) ground_track: Vec<Point2>,
    pub(crate) apex: Point2,
    pub(crate) landing: Point2,
    pub(crate) guides: Option<Guides>,
    pub(crate) window: PlotWindow,
    pub(crate) readout: String,
    pub(crate) error: Option<String>,
}

impl SceneView {
    fn failed(message: String) -> Self {
        Self {
            side_path: Vec::new(),
            ground_track: Vec::new(),
            apex: Point2::ORIGIN,
            landing: Point2::ORIGIN,
            guides: None,
            window: PlotWindow::fixed_ratio([Point2::ORIGIN]),
            readout: String::new(),
            error: Some(message),
        }
    }
}

pub(crate) fn build_scene(mode: ViewMode, config: &ViewerConfig) -> SceneView {
    match mode {
        ViewMode::Planar => planar_scene(config),
        ViewMode::Spatial => spatial_scene(config),
    }
}

fn planar_scene(config: &ViewerConfig) -> SceneView {
    let params = config.planar();
    let (trajectory, summary) = match compute_trajectory_2d(&params) {
        Ok(result) => result,
        Err(err) => return SceneView::failed(err.to_string()),
    };

    let side_path: Vec<Point2> = trajectory.positions().collect();
    let window = PlotWindow::fixed_ratio(
        side_path
            .iter()
            .copied()
            .chain([summary.apex_position, summary.landing_position]),
    );
    SceneView {
        side_path,
        ground_track: Vec::new(),
        apex: summary.apex_position,
        landing: summary.landing_position,
        guides: Some(Guides {
            apex_height_m: summary.apex_height_m,
            range_m: summary.range_m,
        }),
        window,
        readout: format!(
            "Flight {:.2} s | Range {:.2} m | Max height {:.2} m | {} samples",
            summary.time_of_flight_s,
            summary.range_m,
            summary.apex_height_m,
            trajectory.len()
        ),
        error: None,
    }
}

fn spatial_scene(config: &ViewerConfig) -> SceneView {
    let params = config.spatial();
    let (trajectory, summary) = compute_trajectory_3d(&params);

    let side_path: Vec<Point2> = trajectory
        .positions()
        .map(|p| Point2::new(p.horizontal().norm(), p.z))
        .collect();
    let ground_track = trajectory.positions().map(|p| p.horizontal()).collect();
    let apex = summary.apex_position;
    let landing = summary.landing_position;
    let apex = Point2::new(apex.horizontal().norm(), apex.z);
    let landing = Point2::new(landing.horizontal().norm(), landing.z);
    let window = PlotWindow::fixed_ratio(side_path.iter().copied());

    SceneView {
        side_path,
        ground_track,
        apex,
        landing,
        guides: None,
        window,
        readout: format!(
            "Flight {:.2} s | Range {:.2} m | Max height {:.2} m | {} of {} samples above ground",
            summary.time_of_flight_s,
            summary.range_m,
            summary.apex_height_m,
            trajectory.len(),
            params.sample_count
        ),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewMode, build_scene};
    use crate::state::ViewerConfig;

    #[test]
    fn planar_zero_gravity_shows_error_instead_of_curve() {
        let config = ViewerConfig {
            gravity_mps2: 0.0,
            ..ViewerConfig::new()
        };
        let scene = build_scene(ViewMode::Planar, &config);

        assert!(scene.side_path.is_empty());
        assert!(scene.guides.is_none());
        assert!(
            scene
                .error
                .as_deref()
                .is_some_and(|e| e.contains("zero gravity"))
        );
    }

    #[test]
    fn spatial_scene_has_matching_views() {
        let scene = build_scene(ViewMode::Spatial, &ViewerConfig::new());

        assert!(scene.error.is_none());
        assert!(scene.guides.is_none());
        assert_eq!(scene.side_path.len(), scene.ground_track.len());
        assert!(scene.side_path.iter().all(|p| p.y >= 0.0 && p.x >= 0.0));
    }

    #[test]
    fn planar_scene_carries_guides() {
        let scene = build_scene(ViewMode::Planar, &ViewerConfig::new());
        let guides = scene.guides.expect("planar guides");

        assert_eq!(scene.landing.x, guides.range_m);
        assert_eq!(scene.apex.y, guides.apex_height_m);
        assert_eq!(scene.side_path.len(), 500);
    }
}
