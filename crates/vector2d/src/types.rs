//! Plain planar value types.
//!
//! These are minimal data carriers: they store coordinates and nothing else.
//! All geometry comes from the `Vector2D` and `Rectangular` capabilities
//! implemented in `crate::vector` and `crate::rect`.

use crate::field::Field;

/// A location `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
}

impl<F: Field> Point<F> {
    pub const ZERO: Self = Self {
        x: F::ZERO,
        y: F::ZERO,
    };

    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }
}

/// An extent `(width, height)`. Components may be negative (flipped extent).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size<F> {
    pub width: F,
    pub height: F,
}

impl<F: Field> Size<F> {
    pub const ZERO: Self = Self {
        width: F::ZERO,
        height: F::ZERO,
    };

    #[inline]
    pub fn new(width: F, height: F) -> Self {
        Self { width, height }
    }
}

/// A displacement `(dx, dy)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector<F> {
    pub dx: F,
    pub dy: F,
}

impl<F: Field> Vector<F> {
    pub const ZERO: Self = Self {
        dx: F::ZERO,
        dy: F::ZERO,
    };

    #[inline]
    pub fn new(dx: F, dy: F) -> Self {
        Self { dx, dy }
    }
}

/// A point whose coordinates are conventionally in `[0, 1]`.
///
/// Used as a relative position inside a rectangle; see
/// `Rectangular::point_at_unit`. Nothing clamps the coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitPoint<F> {
    pub x: F,
    pub y: F,
}

impl<F: Field> UnitPoint<F> {
    pub const ZERO: Self = Self {
        x: F::ZERO,
        y: F::ZERO,
    };

    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    // Named anchors, Y grows downward: "top" is y = 0.
    pub const TOP_LEADING: Self = Self {
        x: F::ZERO,
        y: F::ZERO,
    };
    pub const TOP: Self = Self {
        x: F::HALF,
        y: F::ZERO,
    };
    pub const TOP_TRAILING: Self = Self {
        x: F::ONE,
        y: F::ZERO,
    };
    pub const LEADING: Self = Self {
        x: F::ZERO,
        y: F::HALF,
    };
    pub const CENTER: Self = Self {
        x: F::HALF,
        y: F::HALF,
    };
    pub const TRAILING: Self = Self {
        x: F::ONE,
        y: F::HALF,
    };
    pub const BOTTOM_LEADING: Self = Self {
        x: F::ZERO,
        y: F::ONE,
    };
    pub const BOTTOM: Self = Self {
        x: F::HALF,
        y: F::ONE,
    };
    pub const BOTTOM_TRAILING: Self = Self {
        x: F::ONE,
        y: F::ONE,
    };
}

/// Axis-aligned rectangle stored as `origin + size`.
///
/// Invariants:
/// - None on the sign of `size`; a negative component describes a rectangle
///   extending left/up from `origin`. Derived bounds are always ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect<F> {
    pub origin: Point<F>,
    pub size: Size<F>,
}

impl<F: Field> Rect<F> {
    #[inline]
    pub fn new(origin: Point<F>, size: Size<F>) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn from_xywh(x: F, y: F, width: F, height: F) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }
}
