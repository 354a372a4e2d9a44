//! Tests for OpenSCAD rendering.

use config::constants::RenderConfig;

use super::*;
use crate::boolean::{difference, intersection, union};
use crate::geometry::{HAlign, VAlign};
use crate::primitives::{cube, cylinder, grounded_cube, sphere, text};

fn washer() -> GeometryNode {
    let outer = cylinder(5.0, 2.75, false, 32).unwrap();
    let hole = cylinder(2.0, 5.5, false, 32).unwrap().down(1.375).unwrap();
    difference([outer, hole]).unwrap()
}

// =============================================================================
// PRIMITIVES
// =============================================================================

#[test]
fn test_cylinder_fields() {
    let source = cylinder(5.0, 10.0, false, 16).unwrap().to_string();
    assert!(source.contains("r=5"));
    assert!(source.contains("h=10"));
    assert!(source.contains("$fn=16"));
}

#[test]
fn test_cube_and_sphere() {
    assert_eq!(
        cube([1.0, 2.5, 3.0], true).unwrap().to_string(),
        "cube([1, 2.5, 3], center=true);\n"
    );
    assert_eq!(
        sphere(4.0, 24).unwrap().to_string(),
        "sphere(r=4, $fn=24);\n"
    );
}

#[test]
fn test_text_is_quoted() {
    let node = text("Hi \"there\"", HAlign::Center, VAlign::Baseline);
    assert_eq!(
        node.to_string(),
        "text(\"Hi \\\"there\\\"\", halign=\"center\", valign=\"baseline\");\n"
    );
}

// =============================================================================
// NESTING
// =============================================================================

#[test]
fn test_washer_layout() {
    let expected = "\
difference() {
    cylinder(r=5, h=2.75, center=false, $fn=32);
    translate([0, 0, -1.375]) {
        cylinder(r=2, h=5.5, center=false, $fn=32);
    }
}
";
    assert_eq!(washer().to_string(), expected);
}

#[test]
fn test_transform_keywords() {
    let base = cube([1.0, 1.0, 1.0], false).unwrap();
    let node = base
        .rotate([90.0, 0.0, 0.0])
        .and_then(|n| n.rotate_about(45.0, [0.0, 0.0, 1.0]))
        .and_then(|n| n.scale([0.4, 1.0, 1.0]))
        .and_then(|n| n.mirror([1.0, 0.0, 0.0]))
        .unwrap();
    let source = render(&node, &RenderConfig::new(2).unwrap());
    let expected = "\
mirror([1, 0, 0]) {
  scale([0.4, 1, 1]) {
    rotate(a=45, v=[0, 0, 1]) {
      rotate([90, 0, 0]) {
        cube([1, 1, 1], center=false);
      }
    }
  }
}
";
    assert_eq!(source, expected);
}

#[test]
fn test_linear_extrude() {
    let node = text("", HAlign::Left, VAlign::Bottom)
        .linear_extrude(2.0, true)
        .unwrap();
    assert_eq!(
        render(&node, &RenderConfig::new(0).unwrap()),
        "linear_extrude(height=2, center=true) {\ntext(\"\", halign=\"left\", valign=\"bottom\");\n}\n"
    );
}

#[test]
fn test_nested_translates_render_twice() {
    let node = cube([1.0, 1.0, 1.0], false)
        .and_then(|n| n.right(1.0))
        .and_then(|n| n.right(2.0))
        .unwrap();
    let source = node.to_string();
    assert_eq!(source.matches("translate(").count(), 2);
    assert!(source.starts_with("translate([2, 0, 0]) {\n    translate([1, 0, 0]) {\n"));
    assert!(!source.contains("[3, 0, 0]"));
}

#[test]
fn test_intersection_and_union_keywords() {
    let a = grounded_cube([2.0, 2.0, 2.0]).unwrap();
    let b = sphere(1.2, 16).unwrap();
    let i = intersection([a.clone(), b.clone()]).unwrap().to_string();
    let u = union([a, b]).unwrap().to_string();
    assert!(i.starts_with("intersection() {\n"));
    assert!(u.starts_with("union() {\n"));
    assert!(u.ends_with("}\n"));
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_render_is_idempotent() {
    let config = RenderConfig::default();
    let single = GeometryNode::Boolean {
        op: crate::geometry::BooleanOp::Difference,
        children: vec![std::sync::Arc::new(cube([1.0, 1.0, 1.0], false).unwrap())],
    };
    assert_eq!(render(&single, &config), render(&single, &config));
    assert_eq!(render(&washer(), &config), render(&washer(), &config));
}

#[test]
fn test_header_is_commented() {
    let config = RenderConfig::default().with_header("washer\n\n10 mm");
    let source = render(&sphere(1.0, 8).unwrap(), &config);
    assert_eq!(source, "// washer\n//\n// 10 mm\n\nsphere(r=1, $fn=8);\n");
}

#[test]
fn test_fixed_precision() {
    let config = RenderConfig::default().with_decimal_places(6).unwrap();
    let node = cylinder(1.0 / 3.0, 2.0, true, 8).unwrap();
    assert_eq!(
        render(&node, &config),
        "cylinder(r=0.333333, h=2, center=true, $fn=8);\n"
    );
}
