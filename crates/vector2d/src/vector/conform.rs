//! `Vector2D` implementations and cross-family conversions.

use nalgebra::{Point2, Vector2};

use super::Vector2D;
use crate::field::Field;
use crate::types::{Point, Size, UnitPoint, Vector};

macro_rules! impl_vector2d {
    ($ty:ident { $x:ident, $y:ident }) => {
        impl<F: Field> Vector2D for $ty<F> {
            type Field = F;

            #[inline]
            fn x(&self) -> F {
                self.$x
            }
            #[inline]
            fn y(&self) -> F {
                self.$y
            }
            #[inline]
            fn from_xy(x: F, y: F) -> Self {
                Self { $x: x, $y: y }
            }
        }

        impl<F: Field> From<[F; 2]> for $ty<F> {
            #[inline]
            fn from([x, y]: [F; 2]) -> Self {
                <Self as Vector2D>::from_xy(x, y)
            }
        }

        impl<F: Field> From<(F, F)> for $ty<F> {
            #[inline]
            fn from((x, y): (F, F)) -> Self {
                <Self as Vector2D>::from_xy(x, y)
            }
        }
    };
}

impl_vector2d!(Point { x, y });
impl_vector2d!(Size { width, height });
impl_vector2d!(Vector { dx, dy });
impl_vector2d!(UnitPoint { x, y });

// Reinterpretation between families keeps the coordinates untouched.
macro_rules! impl_cast_from {
    ($($from:ident => $to:ident),+ $(,)?) => {
        $(
            impl<F: Field> From<$from<F>> for $to<F> {
                #[inline]
                fn from(v: $from<F>) -> Self {
                    v.cast()
                }
            }
        )+
    };
}

impl_cast_from!(
    Point => Size,
    Point => Vector,
    Point => UnitPoint,
    Size => Point,
    Size => Vector,
    Size => UnitPoint,
    Vector => Point,
    Vector => Size,
    Vector => UnitPoint,
    UnitPoint => Point,
    UnitPoint => Size,
    UnitPoint => Vector,
);

impl<F: Field> Vector2D for Vector2<F> {
    type Field = F;

    #[inline]
    fn x(&self) -> F {
        self.x
    }
    #[inline]
    fn y(&self) -> F {
        self.y
    }
    #[inline]
    fn from_xy(x: F, y: F) -> Self {
        Vector2::new(x, y)
    }
}

impl<F: Field> Vector2D for Point2<F> {
    type Field = F;

    #[inline]
    fn x(&self) -> F {
        self.x
    }
    #[inline]
    fn y(&self) -> F {
        self.y
    }
    #[inline]
    fn from_xy(x: F, y: F) -> Self {
        Point2::new(x, y)
    }
}
