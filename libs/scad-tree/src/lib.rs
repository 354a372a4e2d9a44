//! # SCAD Tree
//!
//! Immutable constructive solid geometry trees and their OpenSCAD rendering.
//!
//! ## Architecture
//!
//! ```text
//! primitives ─┐
//! transforms ─┼─► GeometryNode ─► serializer ─► part.scad
//! boolean ────┘
//! ```
//!
//! Trees are assembled bottom-up from validated constructors, handed to the
//! serializer once, then dropped. Nodes are never mutated after creation.
//!
//! ## Example
//!
//! ```rust
//! use scad_tree::{cylinder, difference, GeometryError};
//!
//! fn washer(outer: f64, inner: f64, thickness: f64) -> Result<scad_tree::GeometryNode, GeometryError> {
//!     let body = cylinder(outer / 2.0, thickness, false, 32)?;
//!     let hole = cylinder(inner / 2.0, 2.0 * thickness, false, 32)?.down(thickness / 2.0)?;
//!     difference([body, hole])
//! }
//!
//! let source = washer(10.0, 4.0, 2.75).unwrap().to_string();
//! assert!(source.starts_with("difference() {"));
//! ```

#![warn(missing_docs)]

pub mod boolean;
mod decode;
pub mod error;
pub mod geometry;
pub mod primitives;
pub mod serializer;
pub mod transforms;
pub mod visitor;

// Re-export public API
pub use boolean::{difference, intersection, union};
pub use error::{GeometryError, Result};
pub use geometry::{BooleanOp, GeometryNode, HAlign, Primitive, Rotation, Transform, VAlign};
pub use primitives::{cube, cylinder, grounded_cube, sphere, text};
pub use serializer::{render, write_scad};
pub use transforms::{linear_extrude, mirror, rotate, rotate_about, scale, translate};
pub use visitor::{walk, GeometryVisitor, TreeStats};
