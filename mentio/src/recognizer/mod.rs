//! Entity recognition: the recognizer seam and the default pattern-based
//! implementation.
//!
//! A [`Recognizer`] turns raw text into an ordered sequence of
//! [`EntityMention`]s. The instance is built once at process startup and is
//! safe for unsynchronized concurrent reads; implementations must not carry
//! state between calls.

mod config;
mod lexicon;
mod pattern;
mod traits;
mod types;

pub use config::*;
pub use pattern::*;
pub use traits::*;
pub use types::*;
