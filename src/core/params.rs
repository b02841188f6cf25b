use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_GRAVITY_MPS2, DEFAULT_SAMPLE_COUNT};

/// Planar launch: speed and angle above the horizontal.
///
/// Nothing is validated here. Negative speeds, angles outside `[0, 360)` and
/// non-positive gravity are all passed through to the kinematics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchParameters2D {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
    pub sample_count: NonZeroUsize,
}

impl LaunchParameters2D {
    pub const fn new(speed_mps: f64, angle_deg: f64) -> Self {
        Self {
            speed_mps,
            angle_deg,
            gravity_mps2: DEFAULT_GRAVITY_MPS2,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    pub const fn with_gravity(self, gravity_mps2: f64) -> Self {
        Self {
            gravity_mps2,
            ..self
        }
    }

    pub const fn with_sample_count(self, sample_count: NonZeroUsize) -> Self {
        Self {
            sample_count,
            ..self
        }
    }
}

/// Spatial launch. Elevation is measured from the ground plane, azimuth from
/// +x towards +y, and `spin` scales the lateral Magnus acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchParameters3D {
    pub speed_mps: f64,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub spin: f64,
    pub gravity_mps2: f64,
    pub sample_count: NonZeroUsize,
}

impl LaunchParameters3D {
    pub const fn new(speed_mps: f64, elevation_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            speed_mps,
            elevation_deg,
            azimuth_deg,
            spin: 0.0,
            gravity_mps2: DEFAULT_GRAVITY_MPS2,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    pub const fn with_spin(self, spin: f64) -> Self {
        Self { spin, ..self }
    }

    pub const fn with_gravity(self, gravity_mps2: f64) -> Self {
        Self {
            gravity_mps2,
            ..self
        }
    }

    pub const fn with_sample_count(self, sample_count: NonZeroUsize) -> Self {
        Self {
            sample_count,
            ..self
        }
    }
}
