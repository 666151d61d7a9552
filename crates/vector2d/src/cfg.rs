//! Tolerance defaults (internal policy).
//!
//! Policy
//! - Fixed constants, no runtime configuration. Callers that need a different
//!   tolerance pass it explicitly to `Vector2D::approx_eq`.

/// Absolute tolerance used by `Vector2D::is_close` for `f64` fields.
pub const APPROX_EPS_F64: f64 = 1e-9;
/// Absolute tolerance used by `Vector2D::is_close` for `f32` fields.
pub const APPROX_EPS_F32: f32 = 1e-5;
