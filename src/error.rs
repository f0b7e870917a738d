//! # Error Types
//!
//! This module defines custom error types for the evolutionary regression
//! crate. It provides specific error variants for the failure scenarios that
//! can occur while loading a dataset, configuring a search, or running the
//! evolution process.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evoline::error::{RegressionError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use evoline::error::{Result, ResultExt};
//!
//! fn parse_seed(raw: &str) -> Result<u64> {
//!     raw.parse::<u64>().context("invalid seed")
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evoline::error::{OptionExt, RegressionError};
//!
//! fn first_score(scores: &[f64]) -> evoline::error::Result<f64> {
//!     scores.first().copied().ok_or_else_regression(||
//!         RegressionError::EmptyPopulation
//!     )
//! }
//! ```
//!
//! Using the `?` operator with automatic error conversion:
//!
//! ```rust
//! use evoline::error::Result;
//! use std::fs::File;
//! use std::io::Read;
//!
//! fn read_raw_dataset(path: &str) -> Result<String> {
//!     let mut file = File::open(path)?; // io::Error automatically converts to RegressionError
//!     let mut contents = String::new();
//!     file.read_to_string(&mut contents)?;
//!     Ok(contents)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in the evolutionary regression crate.
///
/// Dataset loading produces `Io` and `Parse` errors before any search logic
/// runs; `Configuration` covers parameter validation; the remaining variants
/// cover failures of the search itself.
#[derive(Error, Debug)]
pub enum RegressionError {
    /// Error that occurs when the dataset source cannot be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error that occurs when a dataset line does not contain exactly two
    /// numeric tokens.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error that occurs when an invalid search configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation produces a non-finite score.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for evolutionary regression operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `RegressionError`.
///
/// ## Examples
///
/// ```rust
/// use evoline::error::{RegressionError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Extension trait for Result to add context to errors.
///
/// This trait provides a convenient way to add context to errors when
/// converting from one error type to `RegressionError`.
///
/// ## Examples
///
/// ```rust
/// use evoline::error::ResultExt;
///
/// fn parse_count(raw: &str) -> evoline::error::Result<usize> {
///     raw.parse::<usize>().context("invalid count")
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// This method converts the error to a `RegressionError` with the provided context.
    ///
    /// ## Arguments
    ///
    /// * `context` - A string providing context for the error.
    ///
    /// ## Returns
    ///
    /// A `Result<T, RegressionError>` with the original value or a contextualized error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| RegressionError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use evoline::error::{OptionExt, RegressionError};
///
/// fn smallest(values: &[f64]) -> evoline::error::Result<f64> {
///     values
///         .iter()
///         .copied()
///         .reduce(f64::min)
///         .ok_or_else_regression(|| RegressionError::EmptyPopulation)
/// }
/// ```
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    ///
    /// ## Arguments
    ///
    /// * `err_fn` - A closure that returns a `RegressionError`.
    ///
    /// ## Returns
    ///
    /// A `Result<T, RegressionError>` with the original value or the generated error.
    fn ok_or_else_regression<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> RegressionError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_regression<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> RegressionError,
    {
        self.ok_or_else(err_fn)
    }
}
