//! # Serializer
//!
//! Renders a geometry tree as OpenSCAD source.
//!
//! ## Output Shape
//!
//! ```text
//! difference() {
//!     cylinder(r=5, h=2.75, center=false, $fn=32);
//!     translate([0, 0, -1.375]) {
//!         cylinder(r=2, h=5.5, center=false, $fn=32);
//!     }
//! }
//! ```
//!
//! Nodes are emitted depth-first, pre-order: the keyword of an operation comes
//! first, followed by a braced block holding its children in stored order.
//! Output depends only on the tree and the [`RenderConfig`], so rendering the
//! same tree twice yields identical bytes.

mod number;

use std::fmt;
use std::io::Write;
use std::path::Path;

use config::constants::RenderConfig;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{GeometryNode, Primitive, Rotation, Transform};
use crate::visitor::{walk, GeometryVisitor};

pub use number::{format_number, format_vector, quote};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Render `root` to OpenSCAD source.
///
/// ## Example
///
/// ```rust
/// use config::constants::RenderConfig;
/// use scad_tree::{primitives::cylinder, serializer::render};
///
/// let post = cylinder(5.0, 10.0, false, 16).unwrap();
/// let source = render(&post, &RenderConfig::default());
/// assert_eq!(source, "cylinder(r=5, h=10, center=false, $fn=16);\n");
/// ```
pub fn render(root: &GeometryNode, config: &RenderConfig) -> String {
    let mut writer = ScadWriter {
        config,
        out: String::new(),
    };
    writer.header();
    walk(root, &mut writer);
    writer.out
}

/// Render `root` and write it to `path`.
///
/// The source is written to a temporary file beside `path` and renamed over
/// it, so `path` holds either its previous contents or the complete new
/// source. A missing or read-only parent directory fails with
/// [`GeometryError::Io`]; parent directories are never created.
pub fn write_scad(root: &GeometryNode, path: impl AsRef<Path>, config: &RenderConfig) -> Result<()> {
    let path = path.as_ref();
    let source = render(root, config);
    let io_error = |source: std::io::Error| GeometryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Dropping the temp file on an early return deletes it.
    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(source.as_bytes()).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|err| io_error(err.error))?;

    debug!(path = %path.display(), bytes = source.len(), "wrote scad file");
    Ok(())
}

impl fmt::Display for GeometryNode {
    /// Renders with [`RenderConfig::default`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderConfig::default()))
    }
}

// =============================================================================
// WRITER
// =============================================================================

struct ScadWriter<'a> {
    config: &'a RenderConfig,
    out: String,
}

impl ScadWriter<'_> {
    fn header(&mut self) {
        let Some(header) = &self.config.header else {
            return;
        };
        for line in header.lines() {
            if line.is_empty() {
                self.out.push_str("//\n");
            } else {
                self.out.push_str("// ");
                self.out.push_str(line);
                self.out.push('\n');
            }
        }
        self.out.push('\n');
    }

    fn indent(&mut self, depth: usize) {
        let width = depth * self.config.indent;
        self.out.extend(std::iter::repeat(' ').take(width));
    }

    fn num(&self, value: f64) -> String {
        format_number(value, self.config.decimal_places)
    }

    fn vec3(&self, values: &[f64; 3]) -> String {
        format_vector(values, self.config.decimal_places)
    }

    fn primitive(&self, primitive: &Primitive) -> String {
        match primitive {
            Primitive::Cube { size, center } => {
                format!("cube({}, center={center})", self.vec3(size))
            }
            Primitive::Cylinder {
                radius,
                height,
                center,
                segments,
            } => format!(
                "cylinder(r={}, h={}, center={center}, $fn={segments})",
                self.num(*radius),
                self.num(*height)
            ),
            Primitive::Sphere { radius, segments } => {
                format!("sphere(r={}, $fn={segments})", self.num(*radius))
            }
            Primitive::Text {
                text,
                halign,
                valign,
            } => format!(
                "text({}, halign={}, valign={})",
                quote(text),
                quote(halign.keyword()),
                quote(valign.keyword())
            ),
        }
    }

    fn transform(&self, transform: &Transform) -> String {
        let keyword = transform.keyword();
        match transform {
            Transform::Translate { offset } => format!("{keyword}({})", self.vec3(offset)),
            Transform::Rotate(Rotation::Euler(angles)) => {
                format!("{keyword}({})", self.vec3(angles))
            }
            Transform::Rotate(Rotation::AxisAngle { angle, axis }) => {
                format!("{keyword}(a={}, v={})", self.num(*angle), self.vec3(axis))
            }
            Transform::Scale { factors } => format!("{keyword}({})", self.vec3(factors)),
            Transform::Mirror { normal } => format!("{keyword}({})", self.vec3(normal)),
            Transform::LinearExtrude { height, center } => {
                format!("{keyword}(height={}, center={center})", self.num(*height))
            }
        }
    }
}

impl GeometryVisitor for ScadWriter<'_> {
    fn enter(&mut self, node: &GeometryNode, depth: usize) {
        self.indent(depth);
        let line = match node {
            GeometryNode::Primitive(p) => format!("{};\n", self.primitive(p)),
            GeometryNode::Transform { transform, .. } => {
                format!("{} {{\n", self.transform(transform))
            }
            GeometryNode::Boolean { op, .. } => format!("{}() {{\n", op.keyword()),
        };
        self.out.push_str(&line);
    }

    fn leave(&mut self, node: &GeometryNode, depth: usize) {
        if node.is_primitive() {
            return;
        }
        self.indent(depth);
        self.out.push_str("}\n");
    }
}

#[cfg(test)]
mod tests;
