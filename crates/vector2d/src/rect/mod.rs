//! Rectangular capability: geometry derived from `origin + size`.
//!
//! Purpose
//! - Any value exposing an `origin` point and a `size` gets bounds, anchor
//!   points, corners, aspect ratio and the bounding/inscribed squares.
//!
//! Conventions
//! - Screen coordinates: Y grows downward, so `min_y` is the top edge.
//! - `size` may be negative on either axis (a flipped rectangle). Bounds are
//!   reported unordered by `bounds_x`/`bounds_y` and ordered by `min_*`/`max_*`.
//! - `mid_x`/`mid_y` are `origin + size / 2`, not `(min + max) / 2`.
//! - `width`/`height` are absolute values; all lengths are non-negative.
//! - Nothing is validated. A flat rectangle gives `aspect_ratio = inf`, a
//!   point-sized one gives `NaN`.

mod conform;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::field::Field;
use crate::log::debug;
use crate::types::{Point, Rect, Size, UnitPoint};

/// A value with an origin and a (possibly negative) size.
pub trait Rectangular {
    type Field: Field;

    fn origin(&self) -> Point<Self::Field>;
    fn size(&self) -> Size<Self::Field>;

    // Bounds.

    /// `(origin.x, origin.x + size.width)`, in storage order.
    #[inline]
    fn bounds_x(&self) -> (Self::Field, Self::Field) {
        let x1 = self.origin().x;
        (x1, x1 + self.size().width)
    }
    /// `(origin.y, origin.y + size.height)`, in storage order.
    #[inline]
    fn bounds_y(&self) -> (Self::Field, Self::Field) {
        let y1 = self.origin().y;
        (y1, y1 + self.size().height)
    }

    // Ordered coordinates.

    #[inline]
    fn min_x(&self) -> Self::Field {
        let (a, b) = self.bounds_x();
        a.min(b)
    }
    #[inline]
    fn max_x(&self) -> Self::Field {
        let (a, b) = self.bounds_x();
        a.max(b)
    }
    #[inline]
    fn mid_x(&self) -> Self::Field {
        self.origin().x + self.size().width / <Self::Field as Field>::TWO
    }
    #[inline]
    fn min_y(&self) -> Self::Field {
        let (a, b) = self.bounds_y();
        a.min(b)
    }
    #[inline]
    fn max_y(&self) -> Self::Field {
        let (a, b) = self.bounds_y();
        a.max(b)
    }
    #[inline]
    fn mid_y(&self) -> Self::Field {
        self.origin().y + self.size().height / <Self::Field as Field>::TWO
    }

    // Anchors.

    fn top(&self) -> Point<Self::Field> {
        Point::new(self.mid_x(), self.min_y())
    }
    fn bottom(&self) -> Point<Self::Field> {
        Point::new(self.mid_x(), self.max_y())
    }
    fn left(&self) -> Point<Self::Field> {
        Point::new(self.min_x(), self.mid_y())
    }
    fn right(&self) -> Point<Self::Field> {
        Point::new(self.max_x(), self.mid_y())
    }
    fn center(&self) -> Point<Self::Field> {
        Point::new(self.mid_x(), self.mid_y())
    }
    fn top_left(&self) -> Point<Self::Field> {
        Point::new(self.min_x(), self.min_y())
    }
    fn top_right(&self) -> Point<Self::Field> {
        Point::new(self.max_x(), self.min_y())
    }
    fn bottom_left(&self) -> Point<Self::Field> {
        Point::new(self.min_x(), self.max_y())
    }
    fn bottom_right(&self) -> Point<Self::Field> {
        Point::new(self.max_x(), self.max_y())
    }

    /// `[bottom_left, bottom_right, top_right, top_left]`; callers rely on
    /// this exact order.
    fn corners(&self) -> [Point<Self::Field>; 4] {
        [
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
        ]
    }

    /// Point at relative position `(s, t)`, walking from `top_left` by the
    /// absolute width/height.
    ///
    /// `(0, 0)` is `top_left`, `(1, 1)` is `bottom_right`. Values outside
    /// `[0, 1]` extrapolate.
    #[inline]
    fn point_at(&self, s: Self::Field, t: Self::Field) -> Point<Self::Field> {
        Point::new(
            self.min_x() + s * self.width(),
            self.min_y() + t * self.height(),
        )
    }
    /// `point_at` driven by a unit point, e.g. `UnitPoint::BOTTOM_TRAILING`.
    #[inline]
    fn point_at_unit(&self, unit: UnitPoint<Self::Field>) -> Point<Self::Field> {
        self.point_at(unit.x, unit.y)
    }

    // Lengths.

    #[inline]
    fn width(&self) -> Self::Field {
        self.size().width.abs()
    }
    #[inline]
    fn height(&self) -> Self::Field {
        self.size().height.abs()
    }
    #[inline]
    fn min_side(&self) -> Self::Field {
        self.width().min(self.height())
    }
    #[inline]
    fn max_side(&self) -> Self::Field {
        self.width().max(self.height())
    }
    /// `|width / height|`; `inf` for a flat shape, `NaN` for a point.
    fn aspect_ratio(&self) -> Self::Field {
        let (w, h) = (self.width(), self.height());
        if h == <Self::Field as Field>::ZERO {
            debug!(?w, ?h, "aspect ratio of a zero-height shape");
        }
        (w / h).abs()
    }

    // Squares.

    /// Origin `(0, 0)`, size `(1, 1)`.
    fn unit_square() -> Rect<Self::Field>
    where
        Self: Sized,
    {
        let (zero, one) = (<Self::Field as Field>::ZERO, <Self::Field as Field>::ONE);
        Rect::from_xywh(zero, zero, one, one)
    }

    /// The shape as a plain `Rect`, size sign preserved.
    #[inline]
    fn rect(&self) -> Rect<Self::Field> {
        Rect::new(self.origin(), self.size())
    }

    /// Smallest square containing the shape, sharing its center.
    fn bounding_square(&self) -> Rect<Self::Field> {
        let side = self.max_side();
        let d = side / <Self::Field as Field>::TWO;
        Rect::from_xywh(self.mid_x() - d, self.mid_y() - d, side, side)
    }

    /// Largest square inside the shape, sharing its center.
    fn inscribed_square(&self) -> Rect<Self::Field> {
        let side = self.min_side();
        let d = side / <Self::Field as Field>::TWO;
        Rect::from_xywh(self.mid_x() - d, self.mid_y() - d, side, side)
    }

    /// Uniformly random point of the shape (`point_at` with `s, t ∈ [0, 1)`).
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<Self::Field>
    where
        Standard: Distribution<Self::Field>,
    {
        let s = rng.gen();
        let t = rng.gen();
        self.point_at(s, t)
    }
}

#[cfg(test)]
mod tests;
