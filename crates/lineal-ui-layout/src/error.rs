//! Precondition errors raised while building layout inputs

use crate::alignment_line::AlignmentLine;
use thiserror::Error;

/// A malformed layout input.
///
/// These describe bugs in the caller's tree construction, not transient
/// failures. The panicking constructors use the same messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid {axis} constraints: min {min} exceeds max {max}")]
    MinExceedsMax {
        axis: &'static str,
        min: i32,
        max: i32,
    },
    #[error("invalid {axis} constraints: bounds must be non-negative (min {min}, max {max})")]
    NegativeBound {
        axis: &'static str,
        min: i32,
        max: i32,
    },
    #[error("invalid {axis} constraints: min cannot be infinite")]
    InfiniteMin { axis: &'static str },
    #[error("invalid weight {0}; must be greater than zero")]
    InvalidWeight(f32),
    #[error("{container} children cannot align by {line:?}: the line must run along the main axis")]
    MismatchedAlignmentLine {
        line: AlignmentLine,
        container: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
