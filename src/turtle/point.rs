use std::fmt;

/// A position in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Largest per-coordinate difference to `other`.
    #[must_use]
    pub fn distance_max(self, other: Self) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {:.6}, {:.6})", self.x, self.y)
    }
}

/// A position in space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Orthographic projection onto the XY plane.
    #[must_use]
    pub const fn project_xy(self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Largest per-coordinate difference to `other`.
    #[must_use]
    pub fn distance_max(self, other: Self) -> f64 {
        (self.x - other.x).abs()
                          .max((self.y - other.y).abs())
                          .max((self.z - other.z).abs())
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}
