use config::constants::RenderConfig;
use proptest::prelude::*;
use scad_tree::{cube, cylinder, render, sphere, union, GeometryError, GeometryNode, Primitive};

fn dimension() -> impl Strategy<Value = f64> {
    prop_oneof![0.001f64..1.0, 1.0f64..500.0]
}

fn leaf() -> impl Strategy<Value = GeometryNode> {
    prop_oneof![
        (dimension(), dimension(), dimension(), any::<bool>())
            .prop_map(|(x, y, z, c)| cube([x, y, z], c).unwrap()),
        (dimension(), dimension(), 3u32..128)
            .prop_map(|(r, h, s)| cylinder(r, h, false, s).unwrap()),
        (dimension(), 3u32..128).prop_map(|(r, s)| sphere(r, s).unwrap()),
    ]
}

fn dedent(line: &str, width: usize) -> &str {
    &line[width..]
}

proptest! {
    #[test]
    fn cube_keeps_exact_dimensions(x in dimension(), y in dimension(), z in dimension(), center in any::<bool>()) {
        let node = cube([x, y, z], center).unwrap();
        prop_assert_eq!(node.as_primitive(), Some(&Primitive::Cube { size: [x, y, z], center }));
    }

    #[test]
    fn union_nests_each_child_in_order(children in prop::collection::vec(leaf(), 1..8)) {
        let config = RenderConfig::default();
        let source = render(&union(children.clone()).unwrap(), &config);
        let lines: Vec<&str> = source.lines().collect();

        prop_assert_eq!(lines[0], "union() {");
        prop_assert_eq!(*lines.last().unwrap(), "}");

        let body: Vec<&str> = lines[1..lines.len() - 1]
            .iter()
            .map(|l| dedent(l, config.indent))
            .collect();
        let expected: Vec<String> = children
            .iter()
            .map(|c| render(c, &config).trim_end().to_string())
            .collect();
        prop_assert_eq!(body.len(), children.len());
        prop_assert_eq!(body, expected);
    }

    #[test]
    fn rendering_is_deterministic(children in prop::collection::vec(leaf(), 2..6)) {
        let tree = scad_tree::difference(children).unwrap();
        let config = RenderConfig::default();
        prop_assert_eq!(render(&tree, &config), render(&tree, &config));
    }

    #[test]
    fn negative_radius_is_rejected(r in -500.0f64..=0.0, h in dimension()) {
        let is_invalid_dimension = matches!(
            cylinder(r, h, false, 16),
            Err(GeometryError::InvalidDimension { name: "radius", .. })
        );
        prop_assert!(is_invalid_dimension);
    }
}

#[test]
fn negative_cylinder_radius_fails() {
    assert!(matches!(
        cylinder(-1.0, 5.0, false, 16),
        Err(GeometryError::InvalidDimension { .. })
    ));
}

#[test]
fn same_parameters_build_equal_trees() {
    let build = || {
        let post = cylinder(3.0, 12.0, false, 16).unwrap().up(1.0).unwrap();
        union([cube([10.0, 10.0, 1.0], false).unwrap(), post]).unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn trees_survive_json() {
    let tree = cube([2.0, 3.0, 4.0], true)
        .and_then(|c| c.rotate_about(30.0, [1.0, 0.0, 0.0]))
        .unwrap()
        .union(sphere(1.5, 12).unwrap());
    let json = serde_json::to_string(&tree).unwrap();
    let back: GeometryNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
    assert_eq!(back.to_string(), tree.to_string());
}
