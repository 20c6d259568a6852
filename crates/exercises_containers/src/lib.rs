//! Container exercises.

pub mod bst;
pub mod stack;

pub use bst::BinarySearchTree;
pub use stack::{MAX_CAPACITY, Stack, StackError};
