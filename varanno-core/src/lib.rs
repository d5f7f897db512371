//! # Core models for varanno
//!
//! Shared building blocks for the reference indexing and annotation crates:
//!
//! - [`models::Interval`]: a closed, 1-based genomic interval
//! - [`models::Variant`]: one row of an intersected variant table
//! - [`models::ProteinRegion`]: a coding region (gene + protein product)
//! - [`utils`]: gz-aware readers and writers used by every tool
//!
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::*;
