//! Pure units and integer geometry for Lineal
//!
//! This crate contains the density-independent length unit, the density used
//! to convert it into pixels, and the integer pixel geometry that layout
//! results are expressed in.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{IntOffset, IntRect, IntSize};
    pub use crate::unit::{Density, Dp};
}
