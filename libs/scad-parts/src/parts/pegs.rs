//! # Pegboard Pegs
//!
//! Pegs that hang a holder on 1/4" pegboard, and a strip holding several.
//!
//! A peg rises from the holder's back face: `thickness` through the holder,
//! `clearance` across the gap, then `overreach` into the pegboard hole.

use std::sync::Arc;

use scad_tree::{cube, cylinder, translate, union, GeometryNode};
use scad_units::inches;

use crate::error::{PartError, PartResult};

const PEG_SEGMENTS: u32 = 16;
/// Diamond-shaped catch bump.
const CATCH_SEGMENTS: u32 = 4;
const CATCH_SQUASH: f64 = 0.4;

/// Peg dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PegParams {
    pub diameter: f64,
    /// Holder wall the peg passes through.
    pub thickness: f64,
    /// Gap between holder and pegboard face.
    pub clearance: f64,
    /// Length inside the pegboard; `None` means one diameter.
    pub overreach: Option<f64>,
}

impl Default for PegParams {
    fn default() -> Self {
        let holder_thickness = inches(0.06);
        Self {
            diameter: inches(0.245).to_mm(),
            thickness: holder_thickness.to_mm(),
            clearance: (inches(0.25) + holder_thickness).to_mm(),
            overreach: None,
        }
    }
}

impl PegParams {
    pub fn overreach(&self) -> f64 {
        self.overreach.unwrap_or(self.diameter)
    }

    pub fn height(&self) -> f64 {
        self.thickness + self.clearance + self.overreach()
    }
}

/// Plain round peg.
pub fn solid_peg(params: &PegParams) -> PartResult<GeometryNode> {
    Ok(cylinder(
        0.5 * params.diameter,
        params.height(),
        false,
        PEG_SEGMENTS,
    )?)
}

/// Peg with a square cross hole for a linch pin just past the clearance gap.
///
/// `hole_size` defaults to half the smaller of diameter and overreach.
pub fn linch_pin_peg(params: &PegParams, hole_size: Option<f64>) -> PartResult<GeometryNode> {
    let peg = solid_peg(params)?;
    let hole_size = hole_size.unwrap_or(0.5 * params.diameter.min(params.overreach()));
    let hole_displacement = params.thickness + params.clearance + 0.5 * hole_size;
    let hole = cube([hole_size, hole_size, 2.0 * params.diameter], true)?
        .rotate([90.0, 0.0, 0.0])?
        .up(hole_displacement)?;
    Ok(peg.difference(hole))
}

/// Peg split by a slot with two squashed bumps that snap behind the board.
///
/// `slot_width` defaults to 0.4 of the smaller of diameter and overreach.
/// `slot_clearance`, the solid length below the slot, defaults to the holder
/// thickness.
pub fn slot_peg_with_catch(
    params: &PegParams,
    slot_width: Option<f64>,
    slot_clearance: Option<f64>,
) -> PartResult<GeometryNode> {
    let peg = solid_peg(params)?;
    let slot_width = slot_width.unwrap_or(0.4 * params.diameter.min(params.overreach()));
    let slot_clearance = slot_clearance.unwrap_or(params.thickness);

    let hole_height = params.clearance + params.overreach();
    let hole_displacement = slot_clearance + params.thickness + 0.5 * hole_height;
    let round_hole_bottom = cylinder(0.5 * slot_width, 2.0 * params.diameter, true, PEG_SEGMENTS)?
        .back(0.5 * hole_height)?;
    let hole_cutout = cube([slot_width, hole_height, 2.0 * params.diameter], true)?;
    let hole = hole_cutout
        .union(round_hole_bottom)
        .rotate([90.0, 0.0, 0.0])?
        .up(hole_displacement)?;

    let catch_height = params.clearance + params.thickness + 0.5 * params.diameter;
    let catch_offset = 0.5 * params.diameter;
    let catch = Arc::new(
        cylinder(0.5 * params.diameter, 0.5 * slot_width, true, CATCH_SEGMENTS)?
            .rotate([90.0, 0.0, 0.0])?
            .up(catch_height)?
            .scale([CATCH_SQUASH, 1.0, 1.0])?,
    );

    let body = union([
        Arc::new(peg),
        Arc::new(translate([-catch_offset, 0.0, 0.0], Arc::clone(&catch))?),
        Arc::new(translate([catch_offset, 0.0, 0.0], catch)?),
    ])?;
    Ok(body.difference(hole))
}

/// Strip holding evenly spaced pegs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PegHolderParams {
    pub peg_count: usize,
    pub peg_spacing: f64,
    /// Strip material beyond the outer pegs.
    pub margin: f64,
    pub thickness: f64,
}

impl Default for PegHolderParams {
    fn default() -> Self {
        Self {
            peg_count: 3,
            peg_spacing: inches(1.0).to_mm(),
            margin: inches(0.245).to_mm(),
            thickness: inches(0.06).to_mm(),
        }
    }
}

/// Flat strip along y with `peg` repeated at each pegboard hole.
pub fn peg_holder(peg: GeometryNode, params: &PegHolderParams) -> PartResult<GeometryNode> {
    if params.peg_count == 0 {
        return Err(PartError::invalid("peg_count", "must be at least 1"));
    }
    let width = 2.0 * params.margin;
    let length = width + (params.peg_count - 1) as f64 * params.peg_spacing;
    let base = cube([width, length, params.thickness], true)?.up(0.5 * params.thickness)?;

    let peg = Arc::new(peg);
    let peg_offset = params.margin - 0.5 * length;
    let pegs = (0..params.peg_count)
        .map(|i| {
            let y = peg_offset + i as f64 * params.peg_spacing;
            translate([0.0, y, 0.0], Arc::clone(&peg))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(base.union(union(pegs)?))
}
