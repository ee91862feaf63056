//! DNA Workbench - Sequence Checking Utilities
//!
//! A Rust application for quick DNA sequence checks: strand
//! complementarity proofreading, restriction-site finding, and logistic
//! population growth projection.

pub mod analysis;

pub use analysis::*;
