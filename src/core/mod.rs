pub mod constants;
pub mod error;
pub mod params;
pub mod sampling;
pub mod trajectory;
pub mod trajectory2d;
pub mod trajectory3d;
pub mod vector;
pub mod window;
