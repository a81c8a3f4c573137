//! Plane geometry: `Vec2`, world `Bounds`, and the pixel/unit `UnitScale`.
//!
//! The world uses orthographic units with the origin at the top-left corner,
//! `x` growing right and `y` growing down.  All math is single precision;
//! positions never exceed a few dozen units.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D vector used for positions, velocities, and displacements.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same value on both axes.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Unit vector pointing at `radians` (`0` points along `+x`).
    #[inline]
    pub fn from_angle(radians: f32) -> Self {
        Self { x: radians.cos(), y: radians.sin() }
    }

    /// Angle of this vector in radians, `atan2(y, x)`.  The zero vector maps
    /// to `0`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f32 {
        (other - self).length_squared()
    }

    /// Unit-length copy, or `ZERO` for the zero vector.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { Self::ZERO }
    }

    /// Component-wise product.
    #[inline]
    pub fn scale(self, other: Vec2) -> Self {
        Self { x: self.x * other.x, y: self.y * other.y }
    }

    /// Linear blend `self + (to - self) * t`.  `t` is not clamped; callers
    /// pass `rate * dt`, which stays well below 1 at interactive frame rates.
    #[inline]
    pub fn lerp(self, to: Vec2, t: f32) -> Self {
        self + (to - self) * t
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The world rectangle `[0, width] × [0, height]`.  Agents that leave it on
/// one side re-enter on the opposite side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width:  f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` for strictly positive, finite dimensions.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Half-open containment: `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

impl Default for Bounds {
    /// A 16:9 viewport ten units tall.
    fn default() -> Self {
        Self { width: 1280.0 / 720.0 * 10.0, height: 10.0 }
    }
}

// ── UnitScale ─────────────────────────────────────────────────────────────────

/// Converts sprite pixel dimensions to world units.
///
/// Sprites are authored for a reference screen height; dividing that height
/// by the orthographic viewport height gives the number of pixels per unit.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitScale {
    pub pixels_per_unit: f32,
}

impl UnitScale {
    /// `reference_height_px / ortho_height` pixels per unit.
    pub fn from_viewport(reference_height_px: f32, ortho_height: f32) -> Self {
        Self { pixels_per_unit: reference_height_px / ortho_height }
    }

    #[inline]
    pub fn pixels_to_units(&self, px: f32) -> f32 {
        px / self.pixels_per_unit
    }
}

impl Default for UnitScale {
    /// 1080 px reference height over a 10-unit tall viewport.
    fn default() -> Self {
        Self::from_viewport(1080.0, 10.0)
    }
}
