use std::num::NonZeroUsize;

use parabolic_flight::core::constants::{DEFAULT_GRAVITY_MPS2, DEFAULT_SAMPLE_COUNT};
use parabolic_flight::{LaunchParameters2D, LaunchParameters3D};

use crate::model::ViewMode;

/// Slider-backed launch settings. macroquad sliders edit `f32`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ViewerConfig {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) elevation_deg: f32,
    pub(crate) azimuth_deg: f32,
    pub(crate) spin: f32,
    pub(crate) gravity_mps2: f32,
    pub(crate) samples: f32,
}

impl ViewerConfig {
    pub(crate) fn new() -> Self {
        Self {
            speed_mps: 25.0,
            angle_deg: 45.0,
            elevation_deg: 45.0,
            azimuth_deg: 30.0,
            spin: 20.0,
            gravity_mps2: DEFAULT_GRAVITY_MPS2 as f32,
            samples: DEFAULT_SAMPLE_COUNT.get() as f32,
        }
    }

    fn sample_count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.samples.round() as usize).unwrap_or(NonZeroUsize::MIN)
    }

    pub(crate) fn planar(&self) -> LaunchParameters2D {
        LaunchParameters2D::new(f64::from(self.speed_mps), f64::from(self.angle_deg))
            .with_gravity(f64::from(self.gravity_mps2))
            .with_sample_count(self.sample_count())
    }

    pub(crate) fn spatial(&self) -> LaunchParameters3D {
        LaunchParameters3D::new(
            f64::from(self.speed_mps),
            f64::from(self.elevation_deg),
            f64::from(self.azimuth_deg),
        )
        .with_spin(f64::from(self.spin))
        .with_gravity(f64::from(self.gravity_mps2))
        .with_sample_count(self.sample_count())
    }
}

pub(crate) struct ViewerState {
    pub(crate) mode: ViewMode,
    pub(crate) config: ViewerConfig,
    pub(crate) show_guides: bool,
    pub(crate) show_inset: bool,
    pub(crate) status_line: String,
}

impl ViewerState {
    pub(crate) fn new() -> Self {
        Self {
            mode: ViewMode::Planar,
            config: ViewerConfig::new(),
            show_guides: true,
            show_inset: true,
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.config = ViewerConfig::new();
        self.status_line = "Reset".to_string();
    }

    pub(crate) fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::Planar => ViewMode::Spatial,
            ViewMode::Spatial => ViewMode::Planar,
        };
        self.status_line = format!("Switched to {}", self.mode.label());
    }
}
