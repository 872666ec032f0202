use super::*;

use std::fs;

struct Fixed(Option<PathBuf>);

impl RootProbe for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    fn discover(&self, _start: &Path) -> Option<PathBuf> {
        self.0.clone()
    }
}

fn markers() -> Vec<String> {
    DEFAULT_MARKERS.iter().map(ToString::to_string).collect()
}

#[test]
fn test_first_probe_wins() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let probes: Vec<Box<dyn RootProbe>> = vec![
        Box::new(Fixed(None)),
        Box::new(Fixed(Some(a.path().to_path_buf()))),
        Box::new(Fixed(Some(b.path().to_path_buf()))),
    ];
    assert_eq!(discover_root(&probes, b.path()), Some(a.path().to_path_buf()));
}

#[test]
fn test_non_directory_answers_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-dir");
    fs::write(&file, "").unwrap();
    let probes: Vec<Box<dyn RootProbe>> = vec![
        Box::new(Fixed(Some(file))),
        Box::new(Fixed(Some(dir.path().to_path_buf()))),
    ];
    assert_eq!(discover_root(&probes, dir.path()), Some(dir.path().to_path_buf()));
}

#[test]
fn test_no_probe_answers() {
    let probes: Vec<Box<dyn RootProbe>> = vec![Box::new(Fixed(None))];
    assert_eq!(discover_root(&probes, Path::new("/")), None);
    assert_eq!(discover_root(&[], Path::new("/")), None);
}

#[test]
fn test_marker_probe_finds_nearest_ancestor() {
    let dir = tempfile::tempdir().unwrap();
    let outer = dir.path().join("outer");
    let inner = outer.join("inner");
    let deep = inner.join("src").join("pkg");
    fs::create_dir_all(&deep).unwrap();
    fs::create_dir(outer.join(".projectile")).unwrap();
    fs::create_dir(inner.join(".idea")).unwrap();

    let probe = MarkerProbe::new(markers());
    assert_eq!(probe.discover(&deep), Some(inner));
}

#[test]
fn test_marker_probe_includes_start() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".project"), "").unwrap();
    let probe = MarkerProbe::new(markers());
    assert_eq!(probe.discover(dir.path()), Some(dir.path().to_path_buf()));
}

#[test]
fn test_marker_probe_custom_markers() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(dir.path().join("WORKSPACE"), "").unwrap();

    assert_eq!(
        MarkerProbe::new(vec!["WORKSPACE".into()]).discover(&sub),
        Some(dir.path().to_path_buf())
    );
    assert_eq!(MarkerProbe::new(vec![]).discover(&sub), None);
}

#[test]
fn test_cwd_probe() {
    assert_eq!(CwdProbe.discover(Path::new("/")), std::env::current_dir().ok());
}

#[test]
fn test_default_probes_order() {
    let names: Vec<String> = default_probes(&markers(), true)
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, vec!["git", "markers", "cwd"]);

    assert_eq!(default_probes(&markers(), false).len(), 2);
}
