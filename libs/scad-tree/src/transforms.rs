//! # Transform Wrapper
//!
//! Wrappers that place a single child.
//!
//! ## Transforms
//!
//! - `translate([x, y, z])` - Move geometry
//! - `rotate([x, y, z])` / `rotate(a, v)` - Rotate geometry
//! - `scale([x, y, z])` - Scale geometry
//! - `mirror([x, y, z])` - Reflect geometry
//! - `linear_extrude(height)` - Lift 2D geometry into a solid
//!
//! Wrapping never touches the child. Repeated translations stay as nested
//! nodes; nothing here folds `translate(a) translate(b)` into one.
//!
//! ## Example
//!
//! ```rust
//! use scad_tree::primitives::cube;
//!
//! let moved = cube([1.0, 1.0, 1.0], false)
//!     .and_then(|c| c.right(10.0))
//!     .and_then(|c| c.rotate([0.0, 0.0, 45.0]))
//!     .unwrap();
//! assert_eq!(moved.children().len(), 1);
//! ```

use std::sync::Arc;

use glam::DVec3;

use crate::error::{GeometryError, Result};
use crate::geometry::{GeometryNode, Rotation, Transform};
use crate::primitives::{ensure_finite, ensure_positive};

fn wrap(transform: Transform, child: impl Into<Arc<GeometryNode>>) -> GeometryNode {
    GeometryNode::Transform {
        transform,
        child: child.into(),
    }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Move `child` by `offset`.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// translate([x, y, z]) child;
/// ```
pub fn translate(
    offset: impl Into<DVec3>,
    child: impl Into<Arc<GeometryNode>>,
) -> Result<GeometryNode> {
    let offset = ensure_finite("offset", offset.into())?;
    Ok(wrap(Transform::Translate { offset }, child))
}

/// Rotate `child` about x, then y, then z by `angles` degrees.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// rotate([x, y, z]) child;
/// ```
pub fn rotate(
    angles: impl Into<DVec3>,
    child: impl Into<Arc<GeometryNode>>,
) -> Result<GeometryNode> {
    let angles = ensure_finite("angles", angles.into())?;
    Ok(wrap(Transform::Rotate(Rotation::Euler(angles)), child))
}

/// Rotate `child` by `angle` degrees about `axis` (right-handed).
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// rotate(a=90, v=[0, 1, 0]) child;
/// ```
pub fn rotate_about(
    angle: f64,
    axis: impl Into<DVec3>,
    child: impl Into<Arc<GeometryNode>>,
) -> Result<GeometryNode> {
    if !angle.is_finite() {
        return Err(GeometryError::invalid_dimension("angle", angle));
    }
    let axis = ensure_finite("axis", axis.into())?;
    Ok(wrap(Transform::Rotate(Rotation::AxisAngle { angle, axis }), child))
}

/// Scale `child` per axis. Zero factors are accepted.
pub fn scale(
    factors: impl Into<DVec3>,
    child: impl Into<Arc<GeometryNode>>,
) -> Result<GeometryNode> {
    let factors = ensure_finite("factors", factors.into())?;
    Ok(wrap(Transform::Scale { factors }, child))
}

/// Reflect `child` across the plane through the origin normal to `normal`.
pub fn mirror(
    normal: impl Into<DVec3>,
    child: impl Into<Arc<GeometryNode>>,
) -> Result<GeometryNode> {
    let normal = ensure_finite("normal", normal.into())?;
    Ok(wrap(Transform::Mirror { normal }, child))
}

/// Sweep a 2D `child` up to `height`.
pub fn linear_extrude(
    height: f64,
    center: bool,
    child: impl Into<Arc<GeometryNode>>,
) -> Result<GeometryNode> {
    let height = ensure_positive("height", height)?;
    Ok(wrap(Transform::LinearExtrude { height, center }, child))
}

// =============================================================================
// NODE METHODS
// =============================================================================

impl GeometryNode {
    /// See [`translate`].
    pub fn translate(self, offset: impl Into<DVec3>) -> Result<GeometryNode> {
        translate(offset, self)
    }

    /// See [`rotate`].
    pub fn rotate(self, angles: impl Into<DVec3>) -> Result<GeometryNode> {
        rotate(angles, self)
    }

    /// See [`rotate_about`].
    pub fn rotate_about(self, angle: f64, axis: impl Into<DVec3>) -> Result<GeometryNode> {
        rotate_about(angle, axis, self)
    }

    /// See [`scale`].
    pub fn scale(self, factors: impl Into<DVec3>) -> Result<GeometryNode> {
        scale(factors, self)
    }

    /// See [`mirror`].
    pub fn mirror(self, normal: impl Into<DVec3>) -> Result<GeometryNode> {
        mirror(normal, self)
    }

    /// See [`linear_extrude`].
    pub fn linear_extrude(self, height: f64, center: bool) -> Result<GeometryNode> {
        linear_extrude(height, center, self)
    }

    // -------------------------------------------------------------------------
    // Directional shorthands: one translate along a single axis.
    // -------------------------------------------------------------------------

    /// Move along +z.
    pub fn up(self, distance: f64) -> Result<GeometryNode> {
        self.translate([0.0, 0.0, distance])
    }

    /// Move along -z.
    pub fn down(self, distance: f64) -> Result<GeometryNode> {
        self.translate([0.0, 0.0, -distance])
    }

    /// Move along +x.
    pub fn right(self, distance: f64) -> Result<GeometryNode> {
        self.translate([distance, 0.0, 0.0])
    }

    /// Move along -x.
    pub fn left(self, distance: f64) -> Result<GeometryNode> {
        self.translate([-distance, 0.0, 0.0])
    }

    /// Move along +y.
    pub fn forward(self, distance: f64) -> Result<GeometryNode> {
        self.translate([0.0, distance, 0.0])
    }

    /// Move along -y.
    pub fn back(self, distance: f64) -> Result<GeometryNode> {
        self.translate([0.0, -distance, 0.0])
    }
}

// =============================================================================
// TESTS
// =============================================================================
