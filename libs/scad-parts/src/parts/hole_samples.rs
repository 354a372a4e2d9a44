//! # Hole Size Samples
//!
//! Calibration strip with a row of through holes of increasing diameter, for
//! checking how a printer undersizes small holes.

use scad_tree::{cylinder, grounded_cube, translate, union, GeometryNode};
use scad_units::mm;

use crate::error::{PartError, PartResult};

const HOLE_SEGMENTS: u32 = 16;

/// Strip dimensions in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleSampleParams {
    pub platter_width: f64,
    /// Extent along y, the direction the holes run.
    pub platter_length: f64,
    pub platter_height: f64,
    /// Gap between neighboring holes and before the first one.
    pub hole_spacing: f64,
    /// How far each hole overshoots both faces.
    pub hole_extension: f64,
    /// Hole diameters from -y to +y.
    pub diameters: Vec<f64>,
}

impl Default for HoleSampleParams {
    fn default() -> Self {
        Self {
            platter_width: mm(12.0).to_mm(),
            platter_length: mm(56.0).to_mm(),
            platter_height: mm(2.0).to_mm(),
            hole_spacing: mm(2.0).to_mm(),
            hole_extension: mm(1.0).to_mm(),
            diameters: (1..=8).map(|d| mm(f64::from(d)).to_mm()).collect(),
        }
    }
}

impl HoleSampleParams {
    /// Center of each hole along y, packed from the -y end.
    pub fn hole_offsets(&self) -> Vec<f64> {
        let mut edge = -0.5 * self.platter_length;
        self.diameters
            .iter()
            .map(|d| {
                let radius = 0.5 * d;
                let center = edge + self.hole_spacing + radius;
                edge = center + radius;
                center
            })
            .collect()
    }
}

/// Grounded strip minus every sample hole.
pub fn hole_samples(params: &HoleSampleParams) -> PartResult<GeometryNode> {
    let offsets = params.hole_offsets();
    let far_edge = offsets
        .last()
        .zip(params.diameters.last())
        .map_or(0.0, |(center, d)| center + 0.5 * d);
    if far_edge > 0.5 * params.platter_length {
        return Err(PartError::invalid(
            "diameters",
            format!(
                "holes need {:.1} mm but the platter is {} mm long",
                far_edge + 0.5 * params.platter_length,
                params.platter_length
            ),
        ));
    }

    let platter = grounded_cube([
        params.platter_width,
        params.platter_length,
        params.platter_height,
    ])?;
    let height = params.platter_height + 2.0 * params.hole_extension;
    let holes = params
        .diameters
        .iter()
        .zip(&offsets)
        .map(|(d, &y)| -> scad_tree::Result<GeometryNode> {
            let hole = cylinder(0.5 * d, height, false, HOLE_SEGMENTS)?;
            translate([0.0, y, 0.0], hole)?.down(params.hole_extension)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cuts = if holes.is_empty() {
        Vec::new()
    } else {
        vec![union(holes)?]
    };
    Ok(platter.subtract(cuts))
}
