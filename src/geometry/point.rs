use std::ops::{Add, Sub};

/// A 2-D point.
///
/// Points are either in path-space (user units as written in the path data)
/// or percentage-space (0..=100 after normalization); a single collection
/// never mixes the two.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflection of `other` about this point.
    pub fn reflect(&self, other: Self) -> Self {
        Self::new(2. * self.x - other.x, 2. * self.y - other.y)
    }

    pub fn distance(&self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
