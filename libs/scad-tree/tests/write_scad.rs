use config::constants::RenderConfig;
use scad_tree::{cylinder, difference, write_scad, GeometryError, GeometryNode};
use tempfile::tempdir;

fn washer() -> GeometryNode {
    let body = cylinder(5.0, 2.0, false, 32).unwrap();
    let hole = cylinder(2.0, 4.0, false, 32).unwrap().down(1.0).unwrap();
    difference([body, hole]).unwrap()
}

#[test]
fn writes_rendered_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("washer.scad");

    write_scad(&washer(), &path, &RenderConfig::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, washer().to_string());
}

#[test]
fn rewriting_yields_identical_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("washer.scad");
    let config = RenderConfig::default().with_header("washer");

    write_scad(&washer(), &path, &config).unwrap();
    let first = std::fs::read(&path).unwrap();
    write_scad(&washer(), &path, &config).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempdir().unwrap();
    let parent = dir.path().join("not-there");
    let path = parent.join("washer.scad");

    let err = write_scad(&washer(), &path, &RenderConfig::default()).unwrap_err();

    match err {
        GeometryError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(!path.exists());
    assert!(!parent.exists(), "parent directories must not be created");
}

#[test]
fn rewriting_replaces_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("part.scad");
    let long = washer();
    let short = cylinder(1.0, 1.0, false, 8).unwrap();

    write_scad(&long, &path, &RenderConfig::default()).unwrap();
    write_scad(&short, &path, &RenderConfig::default()).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), short.to_string());
}

#[test]
fn failed_replace_keeps_target_and_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    // A non-empty directory cannot be replaced by a file.
    let path = dir.path().join("occupied");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep.txt"), "old").unwrap();

    let err = write_scad(&washer(), &path, &RenderConfig::default()).unwrap_err();

    assert!(matches!(err, GeometryError::Io { .. }));
    assert_eq!(std::fs::read_to_string(path.join("keep.txt")).unwrap(), "old");
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "temporary file left behind");
}
