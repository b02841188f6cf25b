use std::num::NonZeroUsize;

pub const DEFAULT_GRAVITY_MPS2: f64 = 9.81;

pub const DEFAULT_SAMPLE_COUNT: NonZeroUsize = match NonZeroUsize::new(500) {
    Some(count) => count,
    None => unreachable!(),
};

/// Lateral acceleration per unit of spin and horizontal speed.
pub const MAGNUS_COEFFICIENT: f64 = 0.03;

/// Flight duration used by the 3D model when gravity is zero.
pub const ZERO_GRAVITY_FLIGHT_TIME_S: f64 = 2.0;
