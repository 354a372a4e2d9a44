//! # Cups
//!
//! Open cylindrical cups, a squashed cup that holds a battery pack and a
//! drinking cup lid with a sip notch.

use config::constants::DEFAULT_SEGMENTS;
use scad_tree::{cylinder, GeometryNode};
use scad_units::mm;

use crate::error::{PartError, PartResult};

/// Cup dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CupParams {
    /// Inside diameter.
    pub diameter: f64,
    pub height: f64,
    /// Wall and floor thickness.
    pub thickness: f64,
    pub segments: u32,
}

impl Default for CupParams {
    fn default() -> Self {
        Self {
            diameter: mm(36.0).to_mm(),
            height: mm(39.0).to_mm(),
            thickness: mm(2.0).to_mm(),
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Solid cylinder with the inside hollowed from `thickness` up.
pub fn cup(params: &CupParams) -> PartResult<GeometryNode> {
    if params.thickness >= params.height {
        return Err(PartError::invalid(
            "thickness",
            format!("{} leaves no room inside a {} tall cup", params.thickness, params.height),
        ));
    }
    let radius = params.diameter / 2.0;
    let outer = cylinder(radius + params.thickness, params.height, false, params.segments)?;
    let inner = cylinder(radius, params.height, false, params.segments)?.up(params.thickness)?;
    Ok(outer.difference(inner))
}

/// Default cup squashed along y to an oval 31 mm deep.
pub fn battery_cup() -> PartResult<GeometryNode> {
    let params = CupParams::default();
    let squish = mm(31.0).to_mm() / params.diameter;
    Ok(cup(&params)?.scale([1.0, squish, 1.0])?)
}

/// Shallow lid for a cup of inside `diameter`, with a notch in the rim.
pub fn coffee_cover(diameter: f64) -> PartResult<GeometryNode> {
    let params = CupParams {
        diameter,
        height: mm(19.0).to_mm(),
        thickness: mm(2.0).to_mm(),
        segments: 96,
    };
    let notch = cylinder(mm(12.0).to_mm(), mm(10.0).to_mm(), false, DEFAULT_SEGMENTS)?
        .rotate([-90.0, 0.0, 0.0])?
        .up(params.height)?
        .forward(diameter / 2.0 - mm(5.0).to_mm())?;
    Ok(cup(&params)?.difference(notch))
}
