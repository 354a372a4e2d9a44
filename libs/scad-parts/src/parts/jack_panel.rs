//! # Jack Panels
//!
//! Enclosure walls carrying keystone jacks. Each panel is an upright face with
//! a floor strip along its bottom edge so it can be glued to a base plate.

use glam::DVec2;
use scad_tree::{grounded_cube, GeometryNode};
use scad_units::{inches, mm};

use crate::error::PartResult;
use crate::parts::keystone::{add_keystones, KeystoneParams};

/// Panel dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JackPanelParams {
    pub base_thickness: f64,
    /// Width of the front and back walls.
    pub narrow_width: f64,
    /// Width of the side walls.
    pub wide_width: f64,
    pub panel_thickness: f64,
    pub panel_height: f64,
    /// Jack elevation measured from the bottom of the face.
    pub connector_elevation: f64,
    /// Sideways jack offset on the front and back walls.
    pub jack_offset: f64,
    pub keystone: KeystoneParams,
}

impl Default for JackPanelParams {
    fn default() -> Self {
        let panel_height = inches(2.5);
        Self {
            base_thickness: mm(2.0).to_mm(),
            narrow_width: inches(2.5).to_mm(),
            wide_width: inches(3.0).to_mm(),
            panel_thickness: mm(2.0).to_mm(),
            panel_height: panel_height.to_mm(),
            connector_elevation: (panel_height - inches(0.6)).to_mm(),
            jack_offset: inches(0.75).to_mm(),
            keystone: KeystoneParams::default(),
        }
    }
}

/// Front wall, jack offset toward -x.
pub fn front_panel(params: &JackPanelParams) -> PartResult<GeometryNode> {
    end_panel(params, -params.jack_offset)
}

/// Back wall, jack offset toward +x.
pub fn back_panel(params: &JackPanelParams) -> PartResult<GeometryNode> {
    end_panel(params, params.jack_offset)
}

/// Side wall with two jacks.
pub fn side_panel(params: &JackPanelParams) -> PartResult<GeometryNode> {
    let placements = [-0.25, 1.0].map(|x| DVec2::new(inches(x).to_mm(), params.connector_elevation));
    based_jack_panel(
        params,
        &placements,
        params.wide_width - params.panel_thickness,
        params.narrow_width,
        params.panel_height,
    )
}

/// Front and back walls are taller by one panel thickness so they overlap
/// the side walls.
fn end_panel(params: &JackPanelParams, offset: f64) -> PartResult<GeometryNode> {
    let placement = DVec2::new(offset, params.connector_elevation + params.panel_thickness);
    based_jack_panel(
        params,
        &[placement],
        params.narrow_width,
        params.wide_width,
        params.panel_height + params.panel_thickness,
    )
}

fn based_jack_panel(
    params: &JackPanelParams,
    placements: &[DVec2],
    width: f64,
    length: f64,
    height: f64,
) -> PartResult<GeometryNode> {
    let thickness = params.base_thickness;
    let face = grounded_cube([width, height, thickness])?;
    let panel = add_keystones(face, placements, height, &params.keystone)?;
    let base = grounded_cube([width, thickness, length])?.back(height / 2.0)?;
    Ok(panel.union(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scad_tree::TreeStats;

    /// Face, base, then per jack: hole plus six frame cubes.
    fn expected_primitives(jacks: usize) -> usize {
        2 + jacks * 7
    }

    #[test]
    fn test_end_panels_carry_one_jack() {
        let params = JackPanelParams::default();
        for panel in [front_panel(&params).unwrap(), back_panel(&params).unwrap()] {
            assert_eq!(TreeStats::of(&panel).primitives, expected_primitives(1));
        }
    }

    #[test]
    fn test_side_panel_carries_two_jacks() {
        let panel = side_panel(&JackPanelParams::default()).unwrap();
        assert_eq!(TreeStats::of(&panel).primitives, expected_primitives(2));
    }

    #[test]
    fn test_front_and_back_mirror_jack_offset() {
        let params = JackPanelParams::default();
        let front = front_panel(&params).unwrap().to_string();
        let back = back_panel(&params).unwrap().to_string();
        assert_ne!(front, back);
        assert!(front.contains("translate([-19.0"));
        assert!(back.contains("translate([19.0"));
    }
}
