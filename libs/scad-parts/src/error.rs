//! # Part Errors
//!
//! Error types for part recipes.

use scad_tree::GeometryError;
use thiserror::Error;

/// Errors that can occur while building or saving a part.
#[derive(Debug, Error)]
pub enum PartError {
    /// Tree construction or file output failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Recipe parameters are inconsistent with each other.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl PartError {
    /// Creates an invalid parameter error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for part recipes.
pub type PartResult<T> = std::result::Result<T, PartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_errors_pass_through() {
        let err: PartError = GeometryError::MissingBase.into();
        assert_eq!(err.to_string(), GeometryError::MissingBase.to_string());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = PartError::invalid("peg_count", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `peg_count`: must be at least 1"
        );
    }
}
