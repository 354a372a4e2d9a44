//! # Switch Buttons
//!
//! Caps that press onto a panel switch stem. The peaked cap is a cylinder
//! topped with a hexagonal ridge, printed upside down so the ridge needs no
//! support.

use config::constants::DEFAULT_SEGMENTS;
use scad_tree::{cylinder, GeometryNode};
use scad_units::mm;

use crate::error::{PartError, PartResult};

/// Facets of the ridge prism.
const RIDGE_SEGMENTS: u32 = 6;

/// Button dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonParams {
    pub base_diameter: f64,
    pub base_height: f64,
    /// Stem hole.
    pub hole_diameter: f64,
    pub hole_height: f64,
    /// Depth of the retaining collar below the hole mouth.
    pub collar_depth: f64,
    /// How much narrower the collar opening is than the hole.
    pub collar_clearance: f64,
    pub collar_thickness: f64,
    pub segments: u32,
}

impl Default for ButtonParams {
    fn default() -> Self {
        Self {
            base_diameter: mm(10.0).to_mm(),
            base_height: mm(12.0).to_mm(),
            hole_diameter: mm(5.0).to_mm(),
            hole_height: mm(7.0).to_mm(),
            collar_depth: mm(4.7).to_mm(),
            collar_clearance: mm(0.8).to_mm(),
            collar_thickness: mm(1.0).to_mm(),
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl ButtonParams {
    /// Collar center above the hole's mid-plane.
    pub fn collar_height(&self) -> f64 {
        self.hole_height - self.collar_depth
    }

    pub fn collar_diameter(&self) -> f64 {
        self.hole_diameter - self.collar_clearance
    }

    /// Height of the ridge peak above the base top.
    fn peak(&self) -> f64 {
        self.base_diameter * 3.0_f64.sqrt() / 4.0
    }
}

/// Ridged cap flipped peak-down, resting on z = 0.
pub fn peaked_button(params: &ButtonParams) -> PartResult<GeometryNode> {
    if params.hole_diameter >= params.base_diameter {
        return Err(PartError::invalid(
            "hole_diameter",
            format!(
                "{} must be smaller than base_diameter {}",
                params.hole_diameter, params.base_diameter
            ),
        ));
    }
    let radius = params.base_diameter / 2.0;
    let base = cylinder(radius, params.base_height, false, params.segments)?;
    let ridge = cylinder(radius, params.base_diameter, true, RIDGE_SEGMENTS)?
        .rotate([90.0, 0.0, 0.0])?
        .up(params.base_height)?;

    Ok(base
        .union(ridge)
        .difference(mounting_hole(params)?)
        .rotate([180.0, 0.0, 0.0])?
        .up(params.base_height + params.peak())?)
}

/// Stem hole with a ring left standing inside it to grip the stem.
fn mounting_hole(params: &ButtonParams) -> PartResult<GeometryNode> {
    let hole = cylinder(
        params.hole_diameter / 2.0,
        2.0 * params.hole_height,
        true,
        params.segments,
    )?;
    let collar = cylinder(
        params.base_diameter / 2.0,
        params.collar_thickness,
        true,
        params.segments,
    )?
    .difference(cylinder(
        params.collar_diameter() / 2.0,
        2.0 * params.base_height,
        true,
        params.segments,
    )?);
    Ok(hole.difference(collar.up(params.collar_height())?))
}
