//! Files the package manifests point at.

use std::path::Path;

fn assert_manifest_paths_exist(dir: &Path) {
    let manifest = std::fs::read_to_string(dir.join("Cargo.toml")).unwrap();
    for line in manifest.lines() {
        let Some((key, value)) = line.split_once('=') else { continue };
        let key = key.trim();
        if matches!(key, "readme" | "license-file") {
            let path = value.trim().trim_matches('"');
            assert!(dir.join(path).is_file(), "{key} points at missing {path}");
        }
    }
}

#[test]
fn test_manifest_paths_exist() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    assert_manifest_paths_exist(root);
    assert_manifest_paths_exist(&root.join("macros"));
}
