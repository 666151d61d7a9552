//! `std::ops` for the crate's own value types.
//!
//! Every operator delegates to the named `Vector2D` method, so the operator
//! and method forms cannot drift apart. Vector-by-vector `*` is complex
//! multiplication; use `Vector2D::elementwise_mul` for the componentwise
//! product.

use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Vector2D;
use crate::field::Field;
use crate::types::{Point, Size, UnitPoint, Vector};

macro_rules! impl_vector_ops {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<F: Field> Add for $ty<F> {
                type Output = Self;
                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self.plus(rhs)
                }
            }
            impl<F: Field> AddAssign for $ty<F> {
                #[inline]
                fn add_assign(&mut self, rhs: Self) {
                    *self = self.plus(rhs);
                }
            }
            impl<F: Field> Sub for $ty<F> {
                type Output = Self;
                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self.minus(rhs)
                }
            }
            impl<F: Field> SubAssign for $ty<F> {
                #[inline]
                fn sub_assign(&mut self, rhs: Self) {
                    *self = self.minus(rhs);
                }
            }
            impl<F: Field> Neg for $ty<F> {
                type Output = Self;
                #[inline]
                fn neg(self) -> Self {
                    self.negated()
                }
            }
            impl<F: Field> Mul<F> for $ty<F> {
                type Output = Self;
                #[inline]
                fn mul(self, a: F) -> Self {
                    self.scaled(a)
                }
            }
            impl<F: Field> Div<F> for $ty<F> {
                type Output = Self;
                #[inline]
                fn div(self, a: F) -> Self {
                    self.divided_by(a)
                }
            }
            impl<F: Field> Mul for $ty<F> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self.complex_mul(rhs)
                }
            }
            impl<F: Field> MulAssign for $ty<F> {
                #[inline]
                fn mul_assign(&mut self, rhs: Self) {
                    self.complex_mul_assign(rhs);
                }
            }
            impl Mul<$ty<f32>> for f32 {
                type Output = $ty<f32>;
                #[inline]
                fn mul(self, v: $ty<f32>) -> $ty<f32> {
                    v.scaled(self)
                }
            }
            impl Mul<$ty<f64>> for f64 {
                type Output = $ty<f64>;
                #[inline]
                fn mul(self, v: $ty<f64>) -> $ty<f64> {
                    v.scaled(self)
                }
            }
        )+
    };
}

impl_vector_ops!(Point, Size, Vector, UnitPoint);
