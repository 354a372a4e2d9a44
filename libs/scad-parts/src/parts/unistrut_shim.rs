//! # Unistrut Shims
//!
//! Spacer that clips into the open side of a strut channel. A flat bar of the
//! shim thickness sits outside the channel and a diamond ridge keys into the
//! slot.

use std::f64::consts::FRAC_1_SQRT_2;

use scad_tree::{cube, GeometryNode};
use scad_units::inches;

use crate::error::PartResult;

/// Shim dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnistrutShimParams {
    /// Bar thickness along x.
    pub thickness: f64,
    /// Extent along z.
    pub length: f64,
    /// Outside width of the channel.
    pub channel_width: f64,
    /// Width of the channel opening.
    pub channel_slot: f64,
}

impl Default for UnistrutShimParams {
    fn default() -> Self {
        Self::with_thickness(inches(2.0 / 16.0).to_mm())
    }
}

impl UnistrutShimParams {
    pub fn with_thickness(thickness: f64) -> Self {
        let channel_width = inches(1.75).to_mm();
        Self {
            thickness,
            length: channel_width,
            channel_width,
            channel_slot: inches(1.135).to_mm(),
        }
    }

    /// 1/16" shim.
    pub fn sixteenth() -> Self {
        Self::with_thickness(inches(1.0 / 16.0).to_mm())
    }

    /// 2/16" shim.
    pub fn eighth() -> Self {
        Self::default()
    }

    /// 4/16" shim.
    pub fn quarter() -> Self {
        Self::with_thickness(inches(4.0 / 16.0).to_mm())
    }

    /// Side of the square whose diagonal spans the slot.
    fn key_width(&self) -> f64 {
        self.channel_slot * FRAC_1_SQRT_2
    }
}

/// Bar plus slot key, with a second key trimming the part that would reach
/// past the bar. Stands on z = 0.
pub fn unistrut_shim(params: &UnistrutShimParams) -> PartResult<GeometryNode> {
    let bar = cube(
        [params.thickness, params.channel_width, params.length],
        true,
    )?
    .left(params.thickness / 2.0)?;
    let trim = v_channel(params, 1.1 * params.length)?.left(params.thickness)?;

    Ok(bar
        .union(v_channel(params, params.length)?)
        .difference(trim)
        .up(params.length / 2.0)?)
}

fn v_channel(params: &UnistrutShimParams, length: f64) -> PartResult<GeometryNode> {
    let side = params.key_width();
    Ok(cube([side, side, length], true)?.rotate([0.0, 0.0, 45.0])?)
}
