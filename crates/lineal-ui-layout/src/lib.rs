//! Layout contracts & row/column policies for Lineal

mod alignment;
mod alignment_line;
mod arrangement;
mod axis;
mod constraints;
mod cross_axis_alignment;
mod error;
mod intrinsics;
mod measurable;
mod orientation_constraints;
mod row_column;
mod scope;

pub use alignment::*;
pub use alignment_line::*;
pub use arrangement::*;
pub use axis::*;
pub use constraints::*;
pub use cross_axis_alignment::*;
pub use error::LayoutError;
pub use intrinsics::*;
pub use measurable::*;
pub use orientation_constraints::*;
pub use row_column::*;
pub use scope::*;

pub mod prelude {
    pub use crate::alignment::{HorizontalAlignment, VerticalAlignment};
    pub use crate::arrangement::Arrangement;
    pub use crate::axis::LayoutDirection;
    pub use crate::constraints::Constraints;
    pub use crate::cross_axis_alignment::CrossAxisAlignment;
    pub use crate::measurable::{LayoutContext, Measurable, MeasurePolicy, MeasureScope, Placeable};
    pub use crate::row_column::{RowColumnMeasurePolicy, SizeMode};
    pub use crate::scope::{ColumnScope, ColumnScopeImpl, RowScope, RowScopeImpl};
}
