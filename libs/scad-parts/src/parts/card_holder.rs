//! # Index Card Holder
//!
//! Open-top box for 3x5 index cards that hangs from pegboard. Peg holes are
//! cut through the bottom, back and both sides so the box can be mounted in
//! any orientation, and finger notches are cut into the front and back walls.

use std::sync::Arc;

use scad_tree::{cube, translate, union, GeometryNode};
use scad_units::inches;

use crate::error::PartResult;
use crate::layout::centered_grid;
use crate::parts::pegs::{solid_peg, PegParams};

/// Card holder dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardHolderParams {
    /// Inside extent along x.
    pub width: f64,
    /// Inside extent along y.
    pub length: f64,
    /// Inside extent along z.
    pub height: f64,
    pub thickness: f64,
    /// Height of the notch floor above the box floor.
    pub cut_out_elevation: f64,
    /// Notch in the +x wall; `None` leaves the wall whole.
    pub front_cut_length: Option<f64>,
    /// Notch in the -x wall.
    pub back_cut_length: Option<f64>,
    pub peg_hole_diameter: f64,
    pub peg_spacing: f64,
    /// Keep peg holes at least this far from the edges.
    pub margin: f64,
}

impl Default for CardHolderParams {
    fn default() -> Self {
        Self::fat()
    }
}

impl CardHolderParams {
    /// Holds a full stack of cards.
    pub fn fat() -> Self {
        Self::with_width(inches(1.8).to_mm())
    }

    /// Holds a handful of cards.
    pub fn thin() -> Self {
        Self::with_width(inches(0.8).to_mm())
    }

    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            length: inches(3.25).to_mm(),
            height: inches(3.0).to_mm(),
            thickness: inches(0.06).to_mm(),
            cut_out_elevation: inches(0.5).to_mm(),
            front_cut_length: Some(inches(2.0).to_mm()),
            back_cut_length: Some(inches(1.0).to_mm()),
            peg_hole_diameter: inches(0.28).to_mm(),
            peg_spacing: inches(1.0).to_mm(),
            margin: inches(0.245).to_mm(),
        }
    }

    fn shape(&self) -> [f64; 3] {
        [self.width, self.length, self.height]
    }
}

/// Box minus finger notches minus every peg hole.
pub fn index_card_holder(params: &CardHolderParams) -> PartResult<GeometryNode> {
    let body = open_top_box(params.shape(), params.thickness)?;
    let cutouts = box_cut_outs(params)?;

    let hole_peg = PegParams {
        diameter: params.peg_hole_diameter,
        ..PegParams::default()
    };
    let single_peg = Arc::new(solid_peg(&hole_peg)?.down(params.peg_hole_diameter)?);
    let holes = union([
        bottom_pegs(&single_peg, params)?,
        back_pegs(&single_peg, params)?,
        side_pegs(&single_peg, params)?,
    ])?;

    Ok(body.subtract(cutouts).difference(holes))
}

/// Hollow box, walls `thickness` thick, sitting on z = 0, open at the top.
fn open_top_box(shape: [f64; 3], thickness: f64) -> PartResult<GeometryNode> {
    let double = 2.0 * thickness;
    let outer = shape.map(|d| d + double);
    let inner = [shape[0], shape[1], shape[2] + double];
    let outer_box = cube(outer, true)?;
    let inner_box = cube(inner, true)?.up(thickness)?;
    Ok(outer_box.difference(inner_box).up(0.5 * outer[2])?)
}

fn box_cut_outs(params: &CardHolderParams) -> PartResult<Vec<GeometryNode>> {
    let cube_width = 4.0 * params.thickness;
    let cube_height = params.height;
    let up_distance = params.cut_out_elevation + 0.5 * cube_height;
    [
        (0.5, params.front_cut_length),
        (-0.5, params.back_cut_length),
    ]
    .into_iter()
    .filter_map(|(side, length)| length.map(|l| (side, l)))
    .map(|(side, length)| -> PartResult<GeometryNode> {
        Ok(cube([cube_width, length, cube_height], true)?
            .up(up_distance)?
            .right(side * params.width)?)
    })
    .collect()
}

/// One peg per grid point, peg axis along z.
fn grid_pegs(
    peg: &Arc<GeometryNode>,
    width: f64,
    length: f64,
    params: &CardHolderParams,
) -> PartResult<GeometryNode> {
    let grid = centered_grid(width, length, params.peg_spacing, params.margin)?;
    let placed = grid
        .iter()
        .map(|p| translate([0.0, p.y, 0.0], Arc::clone(peg)).and_then(|n| n.left(p.x)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(union(placed)?)
}

fn bottom_pegs(peg: &Arc<GeometryNode>, params: &CardHolderParams) -> PartResult<GeometryNode> {
    grid_pegs(peg, params.width, params.length, params)
}

/// Holes through both y walls.
fn side_pegs(peg: &Arc<GeometryNode>, params: &CardHolderParams) -> PartResult<GeometryNode> {
    let peg_set = Arc::new(
        grid_pegs(peg, params.width, params.height, params)?
            .rotate([90.0, 0.0, 0.0])?
            .up(0.5 * params.height)?,
    );
    let half_length = 0.5 * params.length;
    let left = translate([0.0, -half_length, 0.0], Arc::clone(&peg_set))?;
    let right = translate([0.0, half_length, 0.0], peg_set)?;
    Ok(left.union(right))
}

/// Holes through the -x wall.
fn back_pegs(peg: &Arc<GeometryNode>, params: &CardHolderParams) -> PartResult<GeometryNode> {
    Ok(grid_pegs(peg, params.length, params.height, params)?
        .rotate([0.0, 90.0, 0.0])?
        .left(0.5 * params.width)?
        .up(0.5 * params.height)?)
}
