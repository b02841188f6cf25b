use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Unit vector rotated 90 degrees counter-clockwise, or zero for a zero vector.
    pub fn perpendicular_unit(self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return Self::ORIGIN;
        }
        Self::new(-self.y / norm, self.x / norm)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Projection onto the ground (x-y) plane.
    pub const fn horizontal(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Height coordinate of a position, used for apex search and ground checks.
pub trait Height: Copy {
    fn height(&self) -> f64;
}

impl Height for Point2 {
    fn height(&self) -> f64 {
        self.y
    }
}

impl Height for Point3 {
    fn height(&self) -> f64 {
        self.z
    }
}
