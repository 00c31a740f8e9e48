//! # dist_core: Numerical Foundation for Distribution Evaluation
//!
//! ## Layer 1 (Foundation) Role
//!
//! dist_core serves as the bottom layer of the workspace, providing:
//! - The generic numeric value passed positionally to distributions (`types::numeric`)
//! - Error types for numeric reads: `NumericError` (`types::error`)
//! - Standard normal special functions: density, CDF and inverse CDF (`math::special`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use dist_core::math::special::{standard_normal_cdf, standard_normal_inverse_cdf};
//! use dist_core::types::Numeric;
//!
//! let p = Numeric::Real(0.975).as_prob().unwrap();
//! let z = standard_normal_inverse_cdf(p);
//! assert!((z - 1.959964).abs() < 1e-5);
//! assert!((standard_normal_cdf(z) - p).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Numeric` and `NumericError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
