//! # Keystone Jack Mount
//!
//! Snap-in frame for a standard keystone jack, plus the matching cutout for a
//! panel. The frame stands on z = 0 with its opening facing +z.

use std::sync::Arc;

use glam::DVec2;
use scad_tree::{grounded_cube, translate, union, GeometryNode};
use scad_units::mm;

use crate::error::PartResult;

/// Keystone frame dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeystoneParams {
    /// Frame wall thickness.
    pub thickness: f64,
    /// Jack body width.
    pub width: f64,
    /// Jack face opening along y.
    pub opening: f64,
    /// Distance between the clasp lips.
    pub clasp_opening: f64,
    pub bottom_shelf_length: f64,
    pub top_shelf_length: f64,
    pub clasp_depth: f64,
    /// Jack body depth along z.
    pub depth: f64,
}

impl Default for KeystoneParams {
    fn default() -> Self {
        Self {
            thickness: mm(1.5).to_mm(),
            width: mm(15.4).to_mm(),
            opening: mm(18.6).to_mm(),
            clasp_opening: mm(22.0).to_mm(),
            bottom_shelf_length: mm(1.7).to_mm(),
            top_shelf_length: mm(4.0).to_mm(),
            clasp_depth: mm(1.0).to_mm(),
            depth: mm(6.6).to_mm(),
        }
    }
}

impl KeystoneParams {
    /// Depth from the face to the clasp.
    pub fn reach(&self) -> f64 {
        self.depth - self.clasp_depth
    }

    /// Overall inside length along y.
    pub fn length(&self) -> f64 {
        self.opening + self.bottom_shelf_length + self.top_shelf_length
    }

    pub fn clasp_length(&self) -> f64 {
        (self.length() - self.clasp_opening) / 2.0
    }

    fn outer_width(&self) -> f64 {
        self.width + 2.0 * self.thickness
    }
}

/// Complete keystone frame.
pub fn keystone(params: &KeystoneParams) -> PartResult<GeometryNode> {
    Ok(union([
        keystone_box(params)?,
        bottom_shelf(params)?,
        top_shelf(params)?,
        clasps(params)?,
    ])?)
}

/// Solid to subtract from a panel before adding a [`keystone`] in its place.
pub fn keystone_hole(params: &KeystoneParams) -> PartResult<GeometryNode> {
    let t = params.thickness;
    Ok(grounded_cube([
        params.width + t,
        params.length() + t,
        params.depth + 3.0 * t,
    ])?
    .down(t / 2.0)?)
}

/// Cut a keystone opening into `face` at each placement and fill it with a
/// frame.
///
/// Placements are `(x, elevation)` pairs; elevation is measured from the
/// bottom edge of a face `height` tall centered on the origin.
pub fn add_keystones(
    face: GeometryNode,
    placements: &[DVec2],
    height: f64,
    params: &KeystoneParams,
) -> PartResult<GeometryNode> {
    let jack = Arc::new(keystone(params)?);
    let hole = Arc::new(keystone_hole(params)?);

    placements.iter().try_fold(face, |face, placement| {
        let offset = [placement.x, placement.y - height / 2.0, 0.0];
        let cut = translate(offset, Arc::clone(&hole))?;
        let frame = translate(offset, Arc::clone(&jack))?;
        Ok(face.difference(cut).union(frame))
    })
}

fn keystone_box(params: &KeystoneParams) -> PartResult<GeometryNode> {
    let t = params.thickness;
    let outer = grounded_cube([
        params.outer_width(),
        params.length() + 2.0 * t,
        params.depth + 2.0 * t,
    ])?;
    let inner = grounded_cube([params.width, params.length(), params.depth + 4.0 * t])?.down(t)?;
    Ok(outer.difference(inner))
}

fn bottom_shelf(params: &KeystoneParams) -> PartResult<GeometryNode> {
    let t = params.thickness;
    Ok(grounded_cube([
        params.outer_width(),
        params.bottom_shelf_length + t,
        t,
    ])?
    .back((params.length() - params.bottom_shelf_length) / 2.0)?)
}

fn top_shelf(params: &KeystoneParams) -> PartResult<GeometryNode> {
    let t = params.thickness;
    Ok(grounded_cube([
        params.outer_width(),
        params.top_shelf_length + t,
        t,
    ])?
    .forward((params.length() - params.top_shelf_length) / 2.0)?)
}

fn clasps(params: &KeystoneParams) -> PartResult<GeometryNode> {
    let t = params.thickness;
    let clasp = Arc::new(
        grounded_cube([
            params.outer_width(),
            params.clasp_length() + t,
            params.clasp_depth,
        ])?
        .up(t + params.reach() + t)?,
    );
    let offset = (params.length() - params.clasp_length()) / 2.0;
    let back = translate([0.0, -offset, 0.0], Arc::clone(&clasp))?;
    let front = translate([0.0, offset, 0.0], clasp)?;
    Ok(back.union(front))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scad_tree::TreeStats;

    #[test]
    fn test_derived_dimensions() {
        let params = KeystoneParams::default();
        assert_relative_eq!(params.length(), 24.3, epsilon = 1e-9);
        assert_relative_eq!(params.clasp_length(), 1.15, epsilon = 1e-9);
        assert_relative_eq!(params.reach(), 5.6, epsilon = 1e-9);
    }

    #[test]
    fn test_keystone_parts() {
        let frame = keystone(&KeystoneParams::default()).unwrap();
        assert_eq!(frame.children().len(), 4);
        // box (outer, inner), two shelves, two clasps
        assert_eq!(TreeStats::of(&frame).primitives, 6);
    }

    #[test]
    fn test_add_keystones_cuts_then_fills() {
        let params = KeystoneParams::default();
        let face = grounded_cube([60.0, 60.0, 2.0]).unwrap();
        let placements = [DVec2::new(-10.0, 30.0), DVec2::new(10.0, 30.0)];

        let panel = add_keystones(face, &placements, 60.0, &params).unwrap();

        let source = panel.to_string();
        assert!(source.starts_with("union() {"));
        assert_eq!(source.matches("difference() {").count(), 2 + 2);
        assert!(source.contains("translate([-10, 0, 0])"));
        assert!(source.contains("translate([10, 0, 0])"));
    }

    #[test]
    fn test_no_placements_keeps_face() {
        let face = grounded_cube([10.0, 10.0, 1.0]).unwrap();
        let panel = add_keystones(face.clone(), &[], 10.0, &KeystoneParams::default()).unwrap();
        assert_eq!(panel, face);
    }
}
