//! Text exercises.

pub mod phrase;
pub mod search;

pub use phrase::{PhraseBuilder, say, say_word};
pub use search::{first_then_apply, first_then_lower_case};
