//! # Typist
//!
//! Closest-match autocorrect for typed words, with the typing-test tooling
//! built around it.
//!
//! ## Features
//!
//! - Pluggable distance functions with an early-exit edit budget
//! - Deterministic closest-match lookup over an ordered word list
//! - Optional parallel candidate scoring
//! - Typing speed, accuracy and race bookkeeping

pub mod cli;
pub mod error;
pub mod spelling;
pub mod typing;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
