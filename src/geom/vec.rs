// Copyright 2016-2018 Matthew D. Michelotti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Shorthand for `Vec2::new(x, y)`.
#[inline]
pub fn v2(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

/// A 2D point or direction.
///
/// There are two flavors of operations.
/// The plain methods (`perp`, `rotate`, `normalize`, ...) and the arithmetic
/// operators return a new value and leave `self` alone.
/// The `_mut` methods change `self` in place and return `&mut Vec2`,
/// so they can be chained like `offset.copy_from(b).sub_mut(a)`.
///
/// Equality is exact float equality.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Vec2 {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Vec2 {
    /// Constructs a new vector.
    #[inline]
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::default()
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length.
    #[inline]
    pub fn len_sq(&self) -> f64 {
        self.dot(*self)
    }

    /// Length.
    #[inline]
    pub fn len(&self) -> f64 {
        self.len_sq().sqrt()
    }

    /// Returns the vector rotated 90 degrees clockwise.
    pub fn perp(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    /// Returns the vector rotated counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Returns a unit vector in the same direction.
    ///
    /// The zero vector is returned unchanged.
    pub fn normalize(self) -> Vec2 {
        let len = self.len();
        if len > 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            self
        }
    }

    /// Scales both coordinates by `factor`.
    pub fn scale(self, factor: f64) -> Vec2 {
        self.scale_xy(factor, factor)
    }

    /// Scales each coordinate by its own factor.
    pub fn scale_xy(self, sx: f64, sy: f64) -> Vec2 {
        Vec2::new(self.x * sx, self.y * sy)
    }

    /// Projection of `self` onto `other`.
    pub fn project(self, other: Vec2) -> Vec2 {
        other * (self.dot(other) / other.len_sq())
    }

    /// Projection of `self` onto the unit vector `other`.
    ///
    /// `other` is trusted to have length 1.
    pub fn project_n(self, other: Vec2) -> Vec2 {
        other * self.dot(other)
    }

    /// Reflection of `self` across the line spanned by `axis`.
    pub fn reflect(self, axis: Vec2) -> Vec2 {
        self.project(axis) * 2.0 - self
    }

    /// Reflection of `self` across the line spanned by the unit vector `axis`.
    pub fn reflect_n(self, axis: Vec2) -> Vec2 {
        self.project_n(axis) * 2.0 - self
    }

    // in-place variants

    /// Overwrites `self` with `other`.
    #[inline]
    pub fn copy_from(&mut self, other: Vec2) -> &mut Vec2 {
        *self = other;
        self
    }

    pub fn perp_mut(&mut self) -> &mut Vec2 {
        *self = self.perp();
        self
    }

    pub fn rotate_mut(&mut self, angle: f64) -> &mut Vec2 {
        *self = self.rotate(angle);
        self
    }

    pub fn reverse_mut(&mut self) -> &mut Vec2 {
        *self = -*self;
        self
    }

    pub fn normalize_mut(&mut self) -> &mut Vec2 {
        *self = self.normalize();
        self
    }

    pub fn add_mut(&mut self, other: Vec2) -> &mut Vec2 {
        *self += other;
        self
    }

    pub fn sub_mut(&mut self, other: Vec2) -> &mut Vec2 {
        *self -= other;
        self
    }

    pub fn scale_mut(&mut self, factor: f64) -> &mut Vec2 {
        *self *= factor;
        self
    }

    pub fn scale_xy_mut(&mut self, sx: f64, sy: f64) -> &mut Vec2 {
        *self = self.scale_xy(sx, sy);
        self
    }

    pub fn project_mut(&mut self, other: Vec2) -> &mut Vec2 {
        *self = self.project(other);
        self
    }

    pub fn project_n_mut(&mut self, other: Vec2) -> &mut Vec2 {
        *self = self.project_n(other);
        self
    }

    pub fn reflect_mut(&mut self, axis: Vec2) -> &mut Vec2 {
        *self = self.reflect(axis);
        self
    }

    pub fn reflect_n_mut(&mut self, axis: Vec2) -> &mut Vec2 {
        *self = self.reflect_n(axis);
        self
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_perp_is_clockwise() {
        assert_eq!(v2(1.0, 0.0).perp(), v2(0.0, -1.0));
        assert_eq!(v2(0.0, 1.0).perp(), v2(1.0, 0.0));
    }

    #[test]
    fn test_rotate_is_counter_clockwise() {
        let rotated = v2(1.0, 0.0).rotate(FRAC_PI_2);
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(Vec2::zero().normalize(), Vec2::zero());
        let mut v = Vec2::zero();
        v.normalize_mut();
        assert_eq!(v, Vec2::zero());
        assert_eq!(v2(3.0, 4.0).normalize(), v2(0.6, 0.8));
    }

    #[test]
    fn test_scale() {
        assert_eq!(v2(2.0, 3.0).scale(2.0), v2(4.0, 6.0));
        assert_eq!(v2(2.0, 3.0).scale_xy(2.0, -1.0), v2(4.0, -3.0));
    }

    #[test]
    fn test_project() {
        assert_eq!(v2(3.0, 4.0).project(v2(2.0, 0.0)), v2(3.0, 0.0));
        assert_eq!(v2(3.0, 4.0).project_n(v2(0.0, 1.0)), v2(0.0, 4.0));
    }

    #[test]
    fn test_reflect() {
        assert_eq!(v2(1.0, 1.0).reflect(v2(5.0, 0.0)), v2(1.0, -1.0));
        assert_eq!(v2(1.0, 1.0).reflect_n(v2(0.0, 1.0)), v2(-1.0, 1.0));
    }

    #[test]
    fn test_len() {
        assert_eq!(v2(3.0, 4.0).len_sq(), 25.0);
        assert_eq!(v2(3.0, 4.0).len(), 5.0);
        assert_eq!(v2(3.0, 4.0).dot(v2(-1.0, 2.0)), 5.0);
    }

    #[test]
    fn test_chained_mutation() {
        let mut v = v2(0.0, 0.0);
        v.copy_from(v2(5.0, 7.0))
            .sub_mut(v2(1.0, 1.0))
            .add_mut(v2(0.0, 2.0))
            .scale_mut(0.5)
            .reverse_mut();
        assert_eq!(v, v2(-2.0, -4.0));
        v.perp_mut().scale_xy_mut(1.0, 2.0);
        assert_eq!(v, v2(-4.0, 4.0));
    }

    #[test]
    fn test_clone_does_not_alias() {
        let a = v2(1.0, 2.0);
        let mut b = a;
        b.add_mut(v2(1.0, 1.0));
        assert_eq!(a, v2(1.0, 2.0));
        assert_eq!(b, v2(2.0, 3.0));
    }
}
