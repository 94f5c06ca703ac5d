//! Typing-test building blocks around the autocorrect core.
//!
//! Paragraph selection, accuracy and speed scoring, and the bookkeeping for
//! multiplayer races.

pub mod metrics;
pub mod paragraphs;
pub mod race;

pub use metrics::*;
pub use paragraphs::*;
pub use race::*;
