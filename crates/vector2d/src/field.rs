//! Scalar field for coordinates.
//!
//! `Field` is the floating-point scalar every capability is generic over. It
//! is implemented for `f32` and `f64` only; the operations simply forward to
//! the inherent float methods, so NaN/inf behave exactly as in std.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::cfg::{APPROX_EPS_F32, APPROX_EPS_F64};

/// A floating-point scalar usable as a coordinate.
///
/// Requirements
/// - Closed under `+ - * /` and negation.
/// - Ordered via `PartialOrd` (NaN compares false, as usual).
/// - Provides the handful of transcendental functions the capabilities need.
pub trait Field:
    Copy
    + Default
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `1 + 1`, used for halving.
    const TWO: Self;
    /// `1 / 2`.
    const HALF: Self;
    /// Default absolute tolerance for approximate comparisons.
    const APPROX_EPS: Self;

    fn abs(self) -> Self;
    /// Minimum; if one side is NaN the other is returned.
    fn min(self, other: Self) -> Self;
    /// Maximum; if one side is NaN the other is returned.
    fn max(self, other: Self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    /// `sqrt(self² + other²)` without intermediate overflow.
    fn hypot(self, other: Self) -> Self;
    /// Four-quadrant arctangent of `self / other`, in radians.
    fn atan2(self, other: Self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
}

macro_rules! impl_field {
    ($($t:ty => $eps:expr),+ $(,)?) => {
        $(
            impl Field for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const TWO: Self = 2.0;
                const HALF: Self = 0.5;
                const APPROX_EPS: Self = $eps;

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
                #[inline]
                fn min(self, other: Self) -> Self {
                    <$t>::min(self, other)
                }
                #[inline]
                fn max(self, other: Self) -> Self {
                    <$t>::max(self, other)
                }
                #[inline]
                fn sin(self) -> Self {
                    <$t>::sin(self)
                }
                #[inline]
                fn cos(self) -> Self {
                    <$t>::cos(self)
                }
                #[inline]
                fn hypot(self, other: Self) -> Self {
                    <$t>::hypot(self, other)
                }
                #[inline]
                fn atan2(self, other: Self) -> Self {
                    <$t>::atan2(self, other)
                }
                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }
                #[inline]
                fn is_infinite(self) -> bool {
                    <$t>::is_infinite(self)
                }
            }
        )+
    };
}

impl_field!(f32 => APPROX_EPS_F32, f64 => APPROX_EPS_F64);
