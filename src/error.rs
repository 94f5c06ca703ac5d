//! Error types for the Typist library.
//!
//! The autocorrect core is total and never fails. Errors only arise in the
//! surrounding tool: reading word lists and paragraphs, parsing
//! configuration, and validating typing-race data. All of them are
//! represented by the [`TypistError`] enum.
//!
//! # Examples
//!
//! ```
//! use typist::error::{TypistError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TypistError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Typist operations.
#[derive(Error, Debug)]
pub enum TypistError {
    /// I/O errors (word lists, paragraph files, stdin/stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument passed by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Inconsistent typing-race data
    #[error("Game error: {0}")]
    Game(String),
}

/// Result type alias for operations that may fail with TypistError.
pub type Result<T> = std::result::Result<T, TypistError>;

impl TypistError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TypistError::InvalidArgument(msg.into())
    }

    /// Create a new game error.
    pub fn game<S: Into<String>>(msg: S) -> Self {
        TypistError::Game(msg.into())
    }
}
