//! # Toothpaste Key
//!
//! Slotted key for rolling up a tube. The tube end goes through the slot in
//! the shaft; the oval handle carries raised lettering on its top face.

use scad_tree::{cube, cylinder, text, union, GeometryNode, HAlign, VAlign};
use scad_units::mm;

use crate::error::{PartError, PartResult};

const TIP_SEGMENTS: u32 = 16;
const HANDLE_SEGMENTS: u32 = 32;

/// Key dimensions in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct ToothpasteKeyParams {
    /// Handle width across the short axis; the long axis is 1.5x this.
    pub handle_diameter: f64,
    /// Shaft width and overall key height.
    pub thickness: f64,
    pub slot_width: f64,
    pub slot_length: f64,
    /// Handle edge to rounded tip.
    pub shaft_length: f64,
    /// Line pitch of the lettering before it is scaled down.
    pub letter_height: f64,
    /// How far the lettering stands proud of the handle.
    pub lettering_rise: f64,
    /// Lettering, top line first.
    pub lines: Vec<String>,
}

impl Default for ToothpasteKeyParams {
    fn default() -> Self {
        Self {
            handle_diameter: mm(33.0).to_mm(),
            thickness: mm(9.0).to_mm(),
            slot_width: mm(2.5).to_mm(),
            slot_length: mm(65.0).to_mm(),
            shaft_length: mm(65.0 + 4.5).to_mm(),
            letter_height: mm(11.0).to_mm(),
            lettering_rise: mm(1.0).to_mm(),
            lines: vec!["LeRoy".into(), "Dental".into()],
        }
    }
}

/// Key lying flat on z = 0 with the shaft pointing along +x.
pub fn toothpaste_key(params: &ToothpasteKeyParams) -> PartResult<GeometryNode> {
    let body = key_shaft(params)?.back(1.0)?.union(key_handle(params)?);
    Ok(body
        .union(key_lettering(params)?)
        .up(params.thickness / 2.0)?
        .rotate_about(-90.0, [0.0, 0.0, 1.0])?)
}

/// Slotted shaft with a round tip, running from the origin along +y.
fn key_shaft(params: &ToothpasteKeyParams) -> PartResult<GeometryNode> {
    let t = params.thickness;
    let trunk_length = params.shaft_length - t / 2.0;
    if trunk_length <= 0.0 {
        return Err(PartError::invalid(
            "shaft_length",
            format!("{} leaves no room for the tip", params.shaft_length),
        ));
    }

    let trunk = cube([t, trunk_length, t], true)?.back(trunk_length / 2.0)?;
    let tip = cylinder(t / 2.0, t, true, TIP_SEGMENTS)?;
    let slot = cube([params.slot_width, params.slot_length, 2.0 * t], true)?
        .back(params.slot_length / 2.0)?;
    Ok(trunk.union(tip).difference(slot).forward(trunk_length)?)
}

/// Oval handle below the origin.
fn key_handle(params: &ToothpasteKeyParams) -> PartResult<GeometryNode> {
    let radius = params.handle_diameter / 2.0;
    Ok(cylinder(radius, params.thickness, true, HANDLE_SEGMENTS)?
        .scale([1.5, 1.0, 1.0])?
        .back(radius)?)
}

/// Centered text block sunk into the top of the handle.
fn key_lettering(params: &ToothpasteKeyParams) -> PartResult<GeometryNode> {
    if params.lines.is_empty() {
        return Err(PartError::invalid("lines", "at least one line is required"));
    }
    let middle = (params.lines.len() - 1) as f64 / 2.0;
    let rows = params
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| -> scad_tree::Result<GeometryNode> {
            text(line.as_str(), HAlign::Center, VAlign::Center)
                .forward((middle - i as f64) * params.letter_height)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rise = params.lettering_rise;
    Ok(union(rows)?
        .scale([0.8, 0.8, 1.0])?
        .linear_extrude(2.0 * rise, false)?
        .up(params.thickness / 2.0 - rise)?
        .back(params.handle_diameter / 2.0)?)
}
