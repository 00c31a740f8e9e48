//! Core value and error types.
//!
//! This module provides:
//! - `numeric`: The tagged scalar handed to distributions as a positional parameter
//! - `error`: Structured error types for numeric reads
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Numeric`] from `numeric`
//! - [`NumericError`] from `error`

pub mod error;
pub mod numeric;

// Re-export commonly used types at module level
pub use error::NumericError;
pub use numeric::Numeric;
