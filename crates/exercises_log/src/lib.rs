//! Logging.

mod macros;

pub use log::{debug, info, trace};
