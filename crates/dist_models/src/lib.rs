//! # dist_models (L2: Distribution Models)
//!
//! Probability distributions evaluated over positional parameter vectors.
//!
//! This crate provides:
//! - The Normal distribution, typed ([`distributions::NormalDistribution`]) and
//!   positional ([`distributions::normal`])
//! - Help metadata for UI display ([`distributions::Description`])
//! - Mode-token and distribution-name dispatch ([`distributions::Mode`],
//!   [`distributions::DistributionKind`])
//!
//! ## Design Principles
//!
//! - **Validate before computing**: parameters are checked up front, no partial results
//! - **Enum-based dispatch**: static dispatch over distribution kinds and modes
//! - **Pure functions**: no state is retained between calls
//!
//! ## Usage Examples
//!
//! ```rust
//! use dist_core::types::Numeric;
//! use dist_models::distributions::normal;
//!
//! let params = [Numeric::Real(0.975), Numeric::Real(0.0), Numeric::Real(1.0)];
//! let z = normal::quantile(&params).unwrap();
//! assert!((z.as_real().unwrap() - 1.959964).abs() < 1e-5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
