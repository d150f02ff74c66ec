//! # Config Crate
//!
//! Centralized configuration constants for the triangular mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_SUBDIVISIONS, MAX_VERTICES};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! let n = DEFAULT_SUBDIVISIONS as usize;
//! assert!((n + 1) * (n + 2) / 2 <= MAX_VERTICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
