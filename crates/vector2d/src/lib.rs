//! Planar geometry capabilities for point/size/rect-like value types.
//!
//! Purpose
//! - `Vector2D`: anything with `x`, `y` and a two-argument constructor gets
//!   vector arithmetic, dot/cross products, complex multiplication and polar
//!   construction for free.
//! - `Rectangular`: anything with an `origin` and a `size` gets bounds, anchor
//!   points, corners, aspect ratio and the bounding/inscribed squares.
//!
//! Conventions
//! - Everything is a pure function of `Copy` values; nothing is cached and
//!   nothing fails. Degenerate inputs propagate `inf`/`NaN` per IEEE-754.
//! - `Rectangular` uses screen coordinates (Y grows downward, `min_y` is the
//!   top). `Vector2D::polar` uses the mathematical convention (angles
//!   counter-clockwise from +x). The two capabilities do not share an axis
//!   convention.
//!
//! Code cross-refs: `field::Field`, `types::{Point,Size,Vector,UnitPoint,Rect}`.

pub mod cfg;
pub mod field;
mod log;
pub mod rect;
pub mod types;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use field::Field;
pub use rect::Rectangular;
pub use types::{Point, Rect, Size, UnitPoint, Vector};
pub use vector::Vector2D;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::field::Field;
    pub use crate::rect::Rectangular;
    pub use crate::types::{Point, Rect, Size, UnitPoint, Vector};
    pub use crate::vector::Vector2D;
}
