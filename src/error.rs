//! Error types.
//!
//! Parsing and serialization are total: malformed lines are skipped and a
//! missing source file is treated as an empty document, so neither operation
//! can fail. Errors exist only at the edges:
//!
//! - **I/O**: reading a path or writer-backed output failing mid-write
//! - **Extraction**: `TryFrom` conversions from a [`Value`](crate::Value)
//!   of the wrong shape

use std::fmt;
use thiserror::Error;

/// Errors produced at the crate's I/O and extraction boundaries.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used for value extraction mismatches
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
