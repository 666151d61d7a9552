//! `Rectangular` implementations.
//!
//! - `Rect`: as stored.
//! - `Size`: anchored at the origin.
//! - `Point`, `UnitPoint`: a zero-size shape located at the point.

use super::Rectangular;
use crate::field::Field;
use crate::types::{Point, Rect, Size, UnitPoint};

impl<F: Field> Rectangular for Rect<F> {
    type Field = F;

    #[inline]
    fn origin(&self) -> Point<F> {
        self.origin
    }
    #[inline]
    fn size(&self) -> Size<F> {
        self.size
    }
}

impl<F: Field> Rectangular for Size<F> {
    type Field = F;

    #[inline]
    fn origin(&self) -> Point<F> {
        Point::ZERO
    }
    #[inline]
    fn size(&self) -> Size<F> {
        *self
    }
}

impl<F: Field> Rectangular for Point<F> {
    type Field = F;

    #[inline]
    fn origin(&self) -> Point<F> {
        *self
    }
    #[inline]
    fn size(&self) -> Size<F> {
        Size::ZERO
    }
}

impl<F: Field> Rectangular for UnitPoint<F> {
    type Field = F;

    #[inline]
    fn origin(&self) -> Point<F> {
        Point::new(self.x, self.y)
    }
    #[inline]
    fn size(&self) -> Size<F> {
        Size::ZERO
    }
}
