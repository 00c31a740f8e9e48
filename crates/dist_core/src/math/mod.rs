//! Mathematical utilities.
//!
//! This module provides:
//! - `special`: Standard normal density, cumulative distribution function and
//!   its inverse, generic over `T: Float`

pub mod special;

pub use special::{standard_normal_cdf, standard_normal_inverse_cdf, standard_normal_pdf};
