//! # Checked Deserialization
//!
//! Wire shapes for the geometry types. Deserializing goes through these and
//! then through the same checks the constructors apply, so a decoded tree
//! holds exactly what [`crate::primitives`], [`crate::transforms`] and
//! [`crate::boolean`] could have built.

use std::sync::Arc;

use glam::DVec3;
use serde::Deserialize;

use crate::boolean::{difference, intersection, union};
use crate::error::{GeometryError, Result};
use crate::geometry::{BooleanOp, GeometryNode, HAlign, Primitive, Rotation, Transform, VAlign};
use crate::primitives::{ensure_finite, ensure_positive, ensure_segments};

// =============================================================================
// NODES
// =============================================================================

#[derive(Deserialize)]
#[serde(rename = "GeometryNode")]
pub(crate) enum RawNode {
    Primitive(Primitive),
    Transform {
        transform: Transform,
        child: Arc<GeometryNode>,
    },
    Boolean {
        op: BooleanOp,
        children: Vec<Arc<GeometryNode>>,
    },
}

impl TryFrom<RawNode> for GeometryNode {
    type Error = GeometryError;

    fn try_from(raw: RawNode) -> Result<Self> {
        match raw {
            RawNode::Primitive(primitive) => Ok(Self::Primitive(primitive)),
            RawNode::Transform { transform, child } => Ok(Self::Transform { transform, child }),
            RawNode::Boolean { op, children } => match op {
                BooleanOp::Union => union(children),
                BooleanOp::Difference => difference(children),
                BooleanOp::Intersection => intersection(children),
            },
        }
    }
}

// =============================================================================
// PRIMITIVES
// =============================================================================

#[derive(Deserialize)]
#[serde(rename = "Primitive")]
pub(crate) enum RawPrimitive {
    Cube {
        size: [f64; 3],
        center: bool,
    },
    Cylinder {
        radius: f64,
        height: f64,
        center: bool,
        segments: u32,
    },
    Sphere {
        radius: f64,
        segments: u32,
    },
    Text {
        text: String,
        halign: HAlign,
        valign: VAlign,
    },
}

impl TryFrom<RawPrimitive> for Primitive {
    type Error = GeometryError;

    fn try_from(raw: RawPrimitive) -> Result<Self> {
        Ok(match raw {
            RawPrimitive::Cube {
                size: [x, y, z],
                center,
            } => Self::Cube {
                size: [
                    ensure_positive("size.x", x)?,
                    ensure_positive("size.y", y)?,
                    ensure_positive("size.z", z)?,
                ],
                center,
            },
            RawPrimitive::Cylinder {
                radius,
                height,
                center,
                segments,
            } => Self::Cylinder {
                radius: ensure_positive("radius", radius)?,
                height: ensure_positive("height", height)?,
                center,
                segments: ensure_segments(segments)?,
            },
            RawPrimitive::Sphere { radius, segments } => Self::Sphere {
                radius: ensure_positive("radius", radius)?,
                segments: ensure_segments(segments)?,
            },
            RawPrimitive::Text {
                text,
                halign,
                valign,
            } => Self::Text {
                text,
                halign,
                valign,
            },
        })
    }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

#[derive(Deserialize)]
#[serde(rename = "Transform")]
pub(crate) enum RawTransform {
    Translate { offset: [f64; 3] },
    Rotate(Rotation),
    Scale { factors: [f64; 3] },
    Mirror { normal: [f64; 3] },
    LinearExtrude { height: f64, center: bool },
}

impl TryFrom<RawTransform> for Transform {
    type Error = GeometryError;

    fn try_from(raw: RawTransform) -> Result<Self> {
        let finite = |name, v: [f64; 3]| ensure_finite(name, DVec3::from_array(v));
        Ok(match raw {
            RawTransform::Translate { offset } => Self::Translate {
                offset: finite("offset", offset)?,
            },
            RawTransform::Rotate(Rotation::Euler(angles)) => {
                Self::Rotate(Rotation::Euler(finite("angles", angles)?))
            }
            RawTransform::Rotate(Rotation::AxisAngle { angle, axis }) => {
                if !angle.is_finite() {
                    return Err(GeometryError::invalid_dimension("angle", angle));
                }
                Self::Rotate(Rotation::AxisAngle {
                    angle,
                    axis: finite("axis", axis)?,
                })
            }
            RawTransform::Scale { factors } => Self::Scale {
                factors: finite("factors", factors)?,
            },
            RawTransform::Mirror { normal } => Self::Mirror {
                normal: finite("normal", normal)?,
            },
            RawTransform::LinearExtrude { height, center } => Self::LinearExtrude {
                height: ensure_positive("height", height)?,
                center,
            },
        })
    }
}
