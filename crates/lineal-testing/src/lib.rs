//! Testing utilities and layout tree harness for Lineal

pub mod assertions;
mod leaf;
mod tree;

pub use assertions::*;
pub use leaf::Leaf;
pub use tree::{LayoutTree, SizeSpec};

pub mod prelude {
    pub use crate::assertions;
    pub use crate::leaf::Leaf;
    pub use crate::tree::{LayoutTree, SizeSpec};
}
