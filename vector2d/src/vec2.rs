use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Mul, Neg, Sub};

/// An immutable 2D vector, used interchangeably as a point or a displacement.
///
/// Plain value type: every operation returns a new `Vec2`, nothing mutates
/// its inputs, and no state is kept between calls. Equality is exact and
/// coordinate-wise; callers that need a tolerance apply their own.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new Vec2.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Component-wise sum of two vectors.
    #[inline]
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference, `self - other`.
    #[inline]
    pub fn subtract(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    /// Alias for [`Vec2::subtract`].
    #[inline]
    pub fn sub(self, other: Vec2) -> Vec2 {
        self.subtract(other)
    }

    /// Multiplies both components by `factor`. A factor of 0 collapses to
    /// the origin, 1 is the identity, and a negative factor reflects through
    /// the origin.
    #[inline]
    pub fn scale(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    /// Rotates the point `angle` radians counter-clockwise about the
    /// coordinate origin.
    #[inline]
    pub fn rotate(self, angle: f64) -> Vec2 {
        self.rotate_about(angle, Vec2::ZERO)
    }

    /// Rotates the point `angle` radians counter-clockwise about `origin`:
    /// the point is translated so the pivot sits at the origin, run through
    /// the standard 2D rotation matrix, and translated back.
    pub fn rotate_about(self, angle: f64, origin: Vec2) -> Vec2 {
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        let (sin, cos) = angle.sin_cos();
        Vec2::new(
            origin.x + dx * cos - dy * sin,
            origin.y + dy * cos + dx * sin,
        )
    }

    /// Heading angle of the vector, in radians.
    ///
    /// Computed as `atan(x / y)` with a half-plane correction: `PI` is added
    /// when `y > 0`. This is a two-branch convention, not a four-quadrant
    /// `atan2`, and callers depend on it for rotation handles, so it stays
    /// as-is. At `y == 0` the division produces an infinity (or NaN for the
    /// zero vector) that flows through `atan` untrapped.
    #[inline]
    pub fn direction(self) -> f64 {
        let a = (self.x / self.y).atan();
        if self.y > 0.0 {
            a + PI
        } else {
            a
        }
    }

    /// Euclidean length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Alias for [`Vec2::length`].
    #[inline]
    pub fn len(self) -> f64 {
        self.length()
    }
}

// Standard operators mirroring add / subtract / scale / negation
impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}
