//! Cartesian coordinate type for the emulation arena.
//!
//! Scenario scripts place nodes on a flat metre-scaled plane (`position =
//! "40,50,0"` style), so positions are plain 3-D Euclidean points.  `f64`
//! keeps segment interpolation exact enough that a station revisiting a
//! waypoint boundary lands on precisely the configured coordinate.

/// A position in the emulation arena, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to `other`, in metres.
    #[inline]
    pub fn distance(self, other: Point3) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Linear blend between `self` and `other` at fraction `f ∈ [0, 1]`.
    ///
    /// `f = 0` returns `self`, `f = 1` returns `other`.  Callers are
    /// responsible for clamping; out-of-range fractions extrapolate.
    #[inline]
    pub fn lerp(self, other: Point3, f: f64) -> Point3 {
        Point3 {
            x: self.x + (other.x - self.x) * f,
            y: self.y + (other.y - self.y) * f,
            z: self.z + (other.z - self.z) * f,
        }
    }
}

impl From<[f64; 3]> for Point3 {
    #[inline]
    fn from(p: [f64; 3]) -> Self {
        Point3::new(p[0], p[1], p[2])
    }
}

impl From<Point3> for [f64; 3] {
    #[inline]
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}
