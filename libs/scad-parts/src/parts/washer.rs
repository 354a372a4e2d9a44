//! Flat washers.

use config::constants::DEFAULT_SEGMENTS;
use scad_tree::{cylinder, difference, GeometryNode};
use scad_units::mm;

use crate::error::{PartError, PartResult};

/// Washer dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WasherParams {
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub thickness: f64,
    pub segments: u32,
}

impl Default for WasherParams {
    fn default() -> Self {
        Self {
            outer_diameter: mm(10.0).to_mm(),
            inner_diameter: mm(4.0).to_mm(),
            thickness: mm(2.75).to_mm(),
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl WasherParams {
    /// M3-sized washer.
    pub fn small() -> Self {
        Self {
            outer_diameter: mm(6.4).to_mm(),
            inner_diameter: mm(3.4).to_mm(),
            thickness: mm(2.0).to_mm(),
            ..Self::default()
        }
    }
}

/// Disc with a through hole. The hole cylinder overshoots both faces.
pub fn washer(params: &WasherParams) -> PartResult<GeometryNode> {
    if params.inner_diameter >= params.outer_diameter {
        return Err(PartError::invalid(
            "inner_diameter",
            format!(
                "{} must be smaller than outer_diameter {}",
                params.inner_diameter, params.outer_diameter
            ),
        ));
    }
    let body = cylinder(
        params.outer_diameter / 2.0,
        params.thickness,
        false,
        params.segments,
    )?;
    let hole = cylinder(
        params.inner_diameter / 2.0,
        2.0 * params.thickness,
        false,
        params.segments,
    )?
    .down(params.thickness / 2.0)?;
    Ok(difference([body, hole])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_washer_renders() {
        let source = washer(&WasherParams::default()).unwrap().to_string();
        assert!(source.starts_with("difference() {"));
        assert!(source.contains("cylinder(r=5, h=2.75, center=false, $fn=32);"));
        assert!(source.contains("translate([0, 0, -1.375])"));
        assert!(source.contains("cylinder(r=2, h=5.5, center=false, $fn=32);"));
    }

    #[test]
    fn test_hole_must_fit() {
        let params = WasherParams {
            inner_diameter: 12.0,
            ..WasherParams::default()
        };
        assert!(matches!(
            washer(&params),
            Err(PartError::InvalidParameter { name: "inner_diameter", .. })
        ));
    }

    #[test]
    fn test_negative_thickness_is_a_geometry_error() {
        let params = WasherParams {
            thickness: -1.0,
            ..WasherParams::small()
        };
        assert!(matches!(washer(&params), Err(PartError::Geometry(_))));
    }
}
