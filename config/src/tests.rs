//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_segments_forms_a_polygon() {
    assert_eq!(MIN_SEGMENTS, 3, "a triangle is the smallest closed polygon");
}

#[test]
fn test_default_segments_is_smooth_enough() {
    assert!(
        DEFAULT_SEGMENTS >= 16,
        "DEFAULT_SEGMENTS should give visibly round holes"
    );
}

// =============================================================================
// SERIALIZATION TESTS
// =============================================================================

#[test]
fn test_min_decimal_places_meets_machining_tolerance() {
    // 1e-6 mm is far below any printer or router resolution
    assert!(MIN_DECIMAL_PLACES >= 6);
}

#[test]
fn test_scad_extension_has_no_dot() {
    assert!(!SCAD_EXTENSION.starts_with('.'));
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[test]
fn test_mm_per_inch_is_exact() {
    assert_eq!(MM_PER_INCH, 25.4);
}

#[test]
fn test_scale_ratios() {
    assert_eq!(N_SCALE_RATIO, 160.0);
    assert_eq!(HO_SCALE_RATIO, 87.0);
    assert!(HO_SCALE_RATIO < N_SCALE_RATIO, "HO models are larger than N");
}

// =============================================================================
// OUTPUT TESTS
// =============================================================================

#[test]
fn test_output_defaults() {
    assert_eq!(OUTPUT_DIR_ENV, "SCAD_DIRECTORY");
    assert_eq!(DEFAULT_OUTPUT_DIR, ".");
}
