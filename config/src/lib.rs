//! # Config Crate
//!
//! Centralized configuration constants for the part generators.
//! Magic numbers shared between the geometry tree, the unit helpers and the
//! part recipes live here so every crate agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS, MM_PER_INCH};
//!
//! assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
//!
//! let three_inches_mm = 3.0 * MM_PER_INCH;
//! assert!((three_inches_mm - 76.2).abs() < 1e-9);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **OpenSCAD Compatible**: Output defaults match what OpenSCAD accepts
//! - **Deterministic**: Nothing here depends on time or machine state

pub mod constants;

#[cfg(test)]
mod tests;
