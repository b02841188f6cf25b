//! Closed-form projectile trajectories.
//!
//! [`core`] holds the pure kinematics: [`compute_trajectory_2d`] for planar
//! launches and [`compute_trajectory_3d`] for launches with azimuth and spin.
//! [`presenter`] turns their output into reports and charts.

pub mod core;
pub mod presenter;

pub use crate::core::error::{TrajectoryError, TrajectoryResult};
pub use crate::core::params::{LaunchParameters2D, LaunchParameters3D};
pub use crate::core::trajectory::{Sample, Trajectory, TrajectorySummary};
pub use crate::core::trajectory2d::compute_trajectory_2d;
pub use crate::core::trajectory3d::compute_trajectory_3d;
pub use crate::core::vector::{Point2, Point3};
