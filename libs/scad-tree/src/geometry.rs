//! # Geometry Types
//!
//! The immutable geometry tree handed to the serializer.
//!
//! A tree is built bottom-up: every child exists before its parent, so cycles
//! cannot occur. Children sit behind [`Arc`] so one subtree can be placed under
//! several transforms without copying it.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::decode::{RawNode, RawPrimitive, RawTransform};

// =============================================================================
// GEOMETRY NODE
// =============================================================================

/// A node in the geometry tree.
///
/// All values are concrete numbers in millimeters and degrees. Deserializing
/// applies the same checks as the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode")]
pub enum GeometryNode {
    /// Leaf shape with no substructure.
    Primitive(Primitive),

    /// Single child repositioned, reoriented, rescaled or extruded.
    Transform {
        /// What to apply.
        transform: Transform,
        /// Wrapped subtree.
        child: Arc<GeometryNode>,
    },

    /// Ordered children combined by a boolean operation.
    Boolean {
        /// Combination rule.
        op: BooleanOp,
        /// Operands. For [`BooleanOp::Difference`] the first is the base.
        children: Vec<Arc<GeometryNode>>,
    },
}

impl GeometryNode {
    /// Direct children in order. Primitives have none.
    pub fn children(&self) -> &[Arc<GeometryNode>] {
        match self {
            Self::Primitive(_) => &[],
            Self::Transform { child, .. } => std::slice::from_ref(child),
            Self::Boolean { children, .. } => children,
        }
    }

    /// The primitive if this node is a leaf.
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Self::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// Check if this node is a leaf.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Check if this subtree is planar.
    ///
    /// Extrusion lifts a planar child into a solid; every other wrapper keeps
    /// the dimensionality of what it wraps. Booleans follow their first child.
    pub fn is_2d(&self) -> bool {
        match self {
            Self::Primitive(p) => p.is_2d(),
            Self::Transform {
                transform: Transform::LinearExtrude { .. },
                ..
            } => false,
            Self::Transform { child, .. } => child.is_2d(),
            Self::Boolean { children, .. } => children.first().is_some_and(|c| c.is_2d()),
        }
    }
}

impl From<Primitive> for GeometryNode {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

// =============================================================================
// PRIMITIVES
// =============================================================================

/// Leaf shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPrimitive")]
pub enum Primitive {
    /// Axis-aligned box.
    ///
    /// ```text
    /// cube([x, y, z], center=false);
    /// ```
    Cube {
        /// Edge lengths as [x, y, z].
        size: [f64; 3],
        /// Whether centered at origin rather than sitting in the +x+y+z octant.
        center: bool,
    },

    /// Cylinder along +z.
    ///
    /// ```text
    /// cylinder(r=5, h=10, center=false, $fn=32);
    /// ```
    Cylinder {
        /// Radius.
        radius: f64,
        /// Height.
        height: f64,
        /// Whether centered on z rather than starting at z = 0.
        center: bool,
        /// Facets approximating the circumference ($fn).
        segments: u32,
    },

    /// Sphere at the origin.
    Sphere {
        /// Radius.
        radius: f64,
        /// Facets per great circle ($fn).
        segments: u32,
    },

    /// 2D text outline.
    Text {
        /// Content. May be empty.
        text: String,
        /// Horizontal anchor.
        halign: HAlign,
        /// Vertical anchor.
        valign: VAlign,
    },
}

impl Primitive {
    /// Check if this is a 2D shape.
    pub fn is_2d(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HAlign {
    /// Text starts at the origin.
    #[default]
    Left,
    /// Text is centered on the origin.
    Center,
    /// Text ends at the origin.
    Right,
}

impl HAlign {
    /// OpenSCAD spelling.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical text anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VAlign {
    /// Top of the glyphs at the origin.
    Top,
    /// Glyphs centered on the origin.
    Center,
    /// Baseline at the origin.
    #[default]
    Baseline,
    /// Lowest descender at the origin.
    Bottom,
}

impl VAlign {
    /// OpenSCAD spelling.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Baseline => "baseline",
            Self::Bottom => "bottom",
        }
    }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Single-child wrappers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTransform")]
pub enum Transform {
    /// Move by an offset.
    Translate {
        /// Offset [x, y, z].
        offset: [f64; 3],
    },

    /// Active right-handed rotation, in degrees.
    Rotate(Rotation),

    /// Per-axis scale. Zero factors are allowed and flatten the child.
    Scale {
        /// Factors [x, y, z].
        factors: [f64; 3],
    },

    /// Reflect across the plane through the origin with this normal.
    Mirror {
        /// Plane normal.
        normal: [f64; 3],
    },

    /// Sweep a 2D child along +z.
    LinearExtrude {
        /// Extrusion height.
        height: f64,
        /// Whether centered on z.
        center: bool,
    },
}

impl Transform {
    /// OpenSCAD module name.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Translate { .. } => "translate",
            Self::Rotate(_) => "rotate",
            Self::Scale { .. } => "scale",
            Self::Mirror { .. } => "mirror",
            Self::LinearExtrude { .. } => "linear_extrude",
        }
    }
}

/// Rotation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Rotation {
    /// Rotate about x, then y, then z, by the given degrees.
    Euler([f64; 3]),
    /// Rotate by `angle` degrees about `axis`.
    AxisAngle {
        /// Degrees.
        angle: f64,
        /// Axis vector; need not be normalized.
        axis: [f64; 3],
    },
}

// =============================================================================
// BOOLEANS
// =============================================================================

/// Boolean combination rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanOp {
    /// Everything covered by any child.
    Union,
    /// First child minus every later child.
    Difference,
    /// Only the region covered by all children.
    Intersection,
}

impl BooleanOp {
    /// OpenSCAD module name.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
        }
    }
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// =============================================================================
// TESTS
// =============================================================================
