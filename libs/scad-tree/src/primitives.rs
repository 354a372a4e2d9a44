//! # Primitive Factory
//!
//! Constructors for leaf shapes.
//!
//! ## Primitives
//!
//! - `cube(size, center)` - Box
//! - `cylinder(radius, height, center, segments)` - Cylinder along +z
//! - `sphere(radius, segments)` - Sphere
//! - `text(string, halign, valign)` - 2D text outline
//!
//! Every constructor validates its inputs and either returns a complete node
//! or an error; there is no clamping.
//!
//! ## Example
//!
//! ```rust
//! use scad_tree::primitives::{cube, cylinder};
//!
//! let plate = cube([40.0, 20.0, 2.0], false).unwrap();
//! let post = cylinder(2.5, 10.0, false, 32).unwrap();
//! assert!(plate.is_primitive() && post.is_primitive());
//! ```

use config::constants::MIN_SEGMENTS;
use glam::DVec3;

use crate::error::{GeometryError, Result};
use crate::geometry::{GeometryNode, HAlign, Primitive, VAlign};

// =============================================================================
// VALIDATION
// =============================================================================

/// Rejects non-finite and non-positive lengths.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid_dimension(name, value))
    }
}

/// Rejects vectors with a NaN or infinite component.
pub(crate) fn ensure_finite(name: &'static str, value: DVec3) -> Result<[f64; 3]> {
    match value.to_array().into_iter().find(|c| !c.is_finite()) {
        Some(bad) => Err(GeometryError::invalid_dimension(name, bad)),
        None => Ok(value.to_array()),
    }
}

pub(crate) fn ensure_segments(segments: u32) -> Result<u32> {
    if segments < MIN_SEGMENTS {
        return Err(GeometryError::InvalidSegmentCount(segments));
    }
    Ok(segments)
}

// =============================================================================
// 3D PRIMITIVES
// =============================================================================

/// Box with edge lengths `size`.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// cube([x, y, z], center=false);
/// ```
///
/// Fails with `InvalidDimension` if any edge is not a positive finite number.
pub fn cube(size: impl Into<DVec3>, center: bool) -> Result<GeometryNode> {
    let size = size.into();
    let [x, y, z] = size.to_array();
    Ok(Primitive::Cube {
        size: [
            ensure_positive("size.x", x)?,
            ensure_positive("size.y", y)?,
            ensure_positive("size.z", z)?,
        ],
        center,
    }
    .into())
}

/// Box centered on x and y whose bottom face rests on z = 0.
///
/// Built as a centered cube lifted by half its height, so the tree keeps both
/// nodes.
pub fn grounded_cube(size: impl Into<DVec3>) -> Result<GeometryNode> {
    let size = size.into();
    cube(size, true)?.up(size.z / 2.0)
}

/// Cylinder of `radius` rising `height` along +z.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// cylinder(r=5, h=10, center=false, $fn=32);
/// ```
///
/// Fails with `InvalidDimension` for a non-positive radius or height and with
/// `InvalidSegmentCount` below three segments.
pub fn cylinder(radius: f64, height: f64, center: bool, segments: u32) -> Result<GeometryNode> {
    Ok(Primitive::Cylinder {
        radius: ensure_positive("radius", radius)?,
        height: ensure_positive("height", height)?,
        center,
        segments: ensure_segments(segments)?,
    }
    .into())
}

/// Sphere of `radius` at the origin.
pub fn sphere(radius: f64, segments: u32) -> Result<GeometryNode> {
    Ok(Primitive::Sphere {
        radius: ensure_positive("radius", radius)?,
        segments: ensure_segments(segments)?,
    }
    .into())
}

// =============================================================================
// 2D PRIMITIVES
// =============================================================================

/// Planar text outline. An empty string is legal and has no extent.
///
/// Wrap the result in [`GeometryNode::linear_extrude`] to get a solid.
pub fn text(content: impl Into<String>, halign: HAlign, valign: VAlign) -> GeometryNode {
    Primitive::Text {
        text: content.into(),
        halign,
        valign,
    }
    .into()
}

// =============================================================================
// TESTS
// =============================================================================
