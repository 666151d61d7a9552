//! Vector2D capability: x/y pairs with vector and complex arithmetic.
//!
//! Purpose
//! - Give every `(x, y)`-shaped value type the same arithmetic by
//!   implementing three accessors (`x`, `y`, `from_xy`).
//! - Keep vector-by-vector multiplication unambiguous: `complex_mul` (also the
//!   `*` operator on this crate's types) and `elementwise_mul` are separate.
//!
//! Conventions
//! - `polar` angles are radians, counter-clockwise from +x.
//! - Division by zero is not trapped; results are `inf`/`NaN`.
//!
//! Code cross-refs: `ops` (std::ops impls), `conform` (implementations for
//! `Point`, `Size`, `Vector`, `UnitPoint`, nalgebra `Vector2`/`Point2`).

mod conform;
mod ops;

use crate::field::Field;
use crate::log::debug;
use crate::types::Point;

/// A value with `x`/`y` coordinates over a common field.
///
/// Implementors provide `x`, `y` and `from_xy`; every other method is derived
/// from those three and should not be overridden.
pub trait Vector2D: Copy + Sized {
    type Field: Field;

    fn x(&self) -> Self::Field;
    fn y(&self) -> Self::Field;
    fn from_xy(x: Self::Field, y: Self::Field) -> Self;

    /// Build from up to two components, padding missing ones with zero.
    ///
    /// `[]` → `(0, 0)`, `[v]` → `(v, 0)`. Components past the second are
    /// ignored.
    fn from_components(components: &[Self::Field]) -> Self {
        let zero = <Self::Field as Field>::ZERO;
        let x = components.first().copied().unwrap_or(zero);
        let y = components.get(1).copied().unwrap_or(zero);
        Self::from_xy(x, y)
    }

    /// Basis vector `(1, 0)`; also the complex unit `1 + 0i`.
    #[inline]
    fn i() -> Self {
        Self::from_xy(<Self::Field as Field>::ONE, <Self::Field as Field>::ZERO)
    }
    /// Basis vector `(0, 1)`.
    #[inline]
    fn j() -> Self {
        Self::from_xy(<Self::Field as Field>::ZERO, <Self::Field as Field>::ONE)
    }

    // Linear combinations.

    #[inline]
    fn plus(self, v: Self) -> Self {
        Self::from_xy(self.x() + v.x(), self.y() + v.y())
    }
    #[inline]
    fn negated(self) -> Self {
        Self::from_xy(-self.x(), -self.y())
    }
    /// `u - v`, defined as `u + (-v)`.
    #[inline]
    fn minus(self, v: Self) -> Self {
        self.plus(v.negated())
    }

    // Scalar multiplication.

    /// `a * v`; scalar multiplication commutes, so this is also `v * a`.
    #[inline]
    fn scaled(self, a: Self::Field) -> Self {
        Self::from_xy(a * self.x(), a * self.y())
    }
    #[inline]
    fn divided_by(self, a: Self::Field) -> Self {
        if a == <Self::Field as Field>::ZERO {
            debug!(?a, "vector divided by zero; components become inf/NaN");
        }
        Self::from_xy(self.x() / a, self.y() / a)
    }

    // Products.

    /// 2D cross product (determinant of `[u v]`): `u.x v.y - u.y v.x`.
    #[inline]
    fn cross(self, v: Self) -> Self::Field {
        self.x() * v.y() - self.y() * v.x()
    }
    #[inline]
    fn dot(self, v: Self) -> Self::Field {
        self.x() * v.x() + self.y() * v.y()
    }

    /// Complex product treating `(x, y)` as `x + yi`:
    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`.
    #[inline]
    fn complex_mul(self, v: Self) -> Self {
        let (a, b, c, d) = (self.x(), self.y(), v.x(), v.y());
        Self::from_xy(a * c - b * d, a * d + b * c)
    }
    /// `u = u * v` (complex).
    #[inline]
    fn complex_mul_assign(&mut self, v: Self) {
        *self = self.complex_mul(v);
    }

    /// Non-proportional scale: `[a, b] ∘ [c, d] = [ac, bd]`.
    #[inline]
    fn elementwise_mul(self, v: Self) -> Self {
        Self::from_xy(self.x() * v.x(), self.y() * v.y())
    }

    // Polar form.

    /// `(r cos a, r sin a)` with `a` in radians.
    #[inline]
    fn polar(r: Self::Field, angle: Self::Field) -> Self {
        Self::from_xy(r * angle.cos(), r * angle.sin())
    }
    /// Euclidean length.
    #[inline]
    fn magnitude(self) -> Self::Field {
        self.x().hypot(self.y())
    }
    /// Angle from +x in `(-π, π]`; inverse of `polar` up to `2π`.
    #[inline]
    fn angle(self) -> Self::Field {
        self.y().atan2(self.x())
    }

    // Reinterpretation.

    /// The same coordinates as a plain `Point`.
    #[inline]
    fn point(self) -> Point<Self::Field> {
        Point::new(self.x(), self.y())
    }
    /// Reinterpret as another conforming family with the same field.
    ///
    /// ```
    /// use vector2d::prelude::*;
    /// let s: Size<f64> = Point::new(1.0, 2.0).cast();
    /// assert_eq!(s, Size::new(1.0, 2.0));
    /// ```
    #[inline]
    fn cast<V: Vector2D<Field = Self::Field>>(self) -> V {
        V::from_xy(self.x(), self.y())
    }

    /// Componentwise `|a - b| <= eps`. NaN never compares equal.
    #[inline]
    fn approx_eq(self, other: Self, eps: Self::Field) -> bool {
        (self.x() - other.x()).abs() <= eps && (self.y() - other.y()).abs() <= eps
    }
    /// `approx_eq` with the field's default tolerance (`crate::cfg`).
    #[inline]
    fn is_close(self, other: Self) -> bool {
        self.approx_eq(other, <Self::Field as Field>::APPROX_EPS)
    }
}
