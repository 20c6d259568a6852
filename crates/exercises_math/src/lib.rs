//! Math exercises.

#[macro_use]
mod macros;

pub mod power;
pub mod quaternion;
pub mod shape;

pub use power::{PowerSequence, powers};
pub use quaternion::Quaternion;
pub use shape::Shape;
