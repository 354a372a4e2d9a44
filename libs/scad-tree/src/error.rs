//! # Geometry Errors
//!
//! Error types for tree construction and serialization.

use std::path::PathBuf;

use config::constants::MIN_SEGMENTS;
use thiserror::Error;

use crate::geometry::BooleanOp;

/// Errors raised while building or writing a geometry tree.
///
/// Construction is all-or-nothing: a constructor that fails returns no node.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A length or vector component is non-finite or out of range.
    #[error("Invalid dimension `{name}`: {value}")]
    InvalidDimension {
        /// Parameter that failed validation.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Too few facets to approximate a circle.
    #[error("Invalid segment count: {0} (must be >= {min})", min = MIN_SEGMENTS)]
    InvalidSegmentCount(u32),

    /// Boolean operation given no children.
    #[error("{0}() requires at least one child")]
    EmptyOperation(BooleanOp),

    /// Difference given a base but nothing to subtract.
    #[error("difference() requires a base and at least one subtrahend")]
    MissingBase,

    /// Output file could not be written.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl GeometryError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(name: &'static str, value: f64) -> Self {
        Self::InvalidDimension { name, value }
    }
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
