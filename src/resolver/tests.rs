use super::*;

use std::fs;

fn touch_executable(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}

fn resolver(overrides: &[(&str, &str)], search_dirs: &[&str], path_var: Option<&Path>) -> Resolver {
    let overrides = overrides
        .iter()
        .map(|&(k, v)| (k.to_string(), PathBuf::from(v)))
        .collect();
    Resolver::new(overrides, search_dirs.iter().map(ToString::to_string).collect())
        .with_path_var(path_var.map(|p| p.as_os_str().to_os_string()))
}

#[test]
fn test_override_wins() {
    let r = resolver(&[("idea", "/opt/idea/bin/idea")], &[], None);
    let res = r.resolve_with_source("idea");
    assert_eq!(res.path, PathBuf::from("/opt/idea/bin/idea"));
    assert_eq!(res.source, Source::Override);
}

#[test]
fn test_override_ignores_path_and_search_dirs() {
    let bin = tempfile::tempdir().unwrap();
    touch_executable(bin.path(), "idea");
    let dir = bin.path().to_str().unwrap();

    let r = resolver(&[("idea", "/opt/idea/bin/idea")], &[dir], Some(bin.path()));
    assert_eq!(r.resolve("idea"), PathBuf::from("/opt/idea/bin/idea"));
}

#[test]
fn test_absolute_existing_path_is_returned_unchanged() {
    let bin = tempfile::tempdir().unwrap();
    let exe = touch_executable(bin.path(), "pycharm.sh");
    let id = exe.to_str().unwrap();

    let r = resolver(&[("idea", "/opt/idea/bin/idea")], &[], None);
    let res = r.resolve_with_source(id);
    assert_eq!(res.path, exe);
    assert_eq!(res.source, Source::Absolute);
}

#[test]
fn test_absolute_missing_path_falls_through() {
    let r = resolver(&[], &[], None);
    let res = r.resolve_with_source("/definitely/not/here/idea");
    assert_eq!(res.path, PathBuf::from("/definitely/not/here/idea"));
    assert_eq!(res.source, Source::Fallback);
}

#[cfg(unix)]
#[test]
fn test_path_lookup() {
    let bin = tempfile::tempdir().unwrap();
    let exe = touch_executable(bin.path(), "goland");

    let r = resolver(&[], &[], Some(bin.path()));
    let res = r.resolve_with_source("goland");
    assert_eq!(res.path, exe);
    assert_eq!(res.source, Source::PathLookup);
}

#[cfg(unix)]
#[test]
fn test_path_lookup_beats_search_dirs() {
    let on_path = tempfile::tempdir().unwrap();
    let extra = tempfile::tempdir().unwrap();
    let exe = touch_executable(on_path.path(), "clion");
    touch_executable(extra.path(), "clion");

    let r = resolver(&[], &[extra.path().to_str().unwrap()], Some(on_path.path()));
    assert_eq!(r.resolve("clion"), exe);
}

#[test]
fn test_search_dirs_in_order() {
    let empty = tempfile::tempdir().unwrap();
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let expected = touch_executable(first.path(), "rider");
    touch_executable(second.path(), "rider");

    let r = resolver(
        &[],
        &[
            empty.path().to_str().unwrap(),
            first.path().to_str().unwrap(),
            second.path().to_str().unwrap(),
        ],
        None,
    );
    let res = r.resolve_with_source("rider");
    assert_eq!(res.path, expected);
    assert_eq!(res.source, Source::SearchDir);
}

#[test]
fn test_search_dir_env_expansion() {
    let dir = tempfile::tempdir().unwrap();
    let expected = touch_executable(dir.path(), "webstorm");
    std::env::set_var("IDE_JUMP_TEST_SEARCH_DIR", dir.path());

    let r = resolver(&[], &["${IDE_JUMP_TEST_SEARCH_DIR}"], None);
    assert_eq!(r.resolve("webstorm"), expected);
}

#[cfg(unix)]
#[test]
fn test_search_dir_tilde_expansion() {
    let home = tempfile::tempdir().unwrap();
    let bin = home.path().join("bin");
    fs::create_dir(&bin).unwrap();
    let expected = touch_executable(&bin, "dataspell");

    let previous = std::env::var_os("HOME");
    std::env::set_var("HOME", home.path());
    let resolved = resolver(&[], &["~/bin"], None).resolve_with_source("dataspell");
    let default_dirs_expand = DEFAULT_SEARCH_DIRS
        .iter()
        .all(|dir| shellexpand::full(dir).is_ok_and(|d| !d.starts_with('~')));
    match previous {
        Some(value) => std::env::set_var("HOME", value),
        None => std::env::remove_var("HOME"),
    }

    assert_eq!(resolved.path, expected);
    assert_eq!(resolved.source, Source::SearchDir);
    assert!(default_dirs_expand);
}

#[test]
fn test_default_search_dirs_expand() {
    for dir in DEFAULT_SEARCH_DIRS {
        assert!(shellexpand::full(dir).is_ok(), "{dir} failed to expand");
    }
}

#[test]
fn test_search_dir_with_undefined_variable_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let expected = touch_executable(dir.path(), "rubymine");

    let r = resolver(
        &[],
        &["$IDE_JUMP_TEST_UNDEFINED_VAR/bin", dir.path().to_str().unwrap()],
        None,
    );
    assert_eq!(r.resolve("rubymine"), expected);
}

#[test]
fn test_unknown_identifier_falls_back_to_itself() {
    let r = resolver(&[("idea", "/opt/idea/bin/idea")], &[], None);
    for id in ["phpstorm", "no-such-ide-anywhere", "bin/relative-launcher"] {
        let res = r.resolve_with_source(id);
        assert_eq!(res.path, PathBuf::from(id));
        assert_eq!(res.source, Source::Fallback);
        assert!(!res.path.as_os_str().is_empty());
    }
}

#[test]
fn test_source_display() {
    assert_eq!(Source::PathLookup.to_string(), "PATH");
    assert_eq!(Source::SearchDir.to_string(), "search directory");
}
