//! # Core data model for nucmap.
//!
//! Everything downstream of nucmap speaks in terms of the types defined here:
//!
//! - [`models::GenomicInterval`]: a 1-based, inclusive interval on a named reference.
//! - [`models::ReadCollection`]: reads grouped by reference name, ordered lexicographically.
//! - [`models::CoverageSignal`] and [`models::RatioSignal`]: dense per-position signals.
//!
//! Read collections and signals are immutable once built. Anything that transforms
//! them produces a new object.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-expose the common types
pub use errors::*;
pub use models::*;
