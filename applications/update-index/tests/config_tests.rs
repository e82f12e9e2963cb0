use folder_index::CollisionPolicy;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use update_index::{AppConfig, AppError};

fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Some(map.into_iter().collect())
}

#[test]
fn test_load_without_sources_uses_defaults() {
    let config = AppConfig::load_with_env(None, env(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_from_toml_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("update-index.toml");
    fs::write(
        &path,
        r#"
root = "/srv/music"
various_artists_name = "Various Artists"
collision_policy = "reject"
normalize_filenames = true
"#,
    )
    .unwrap();

    let config = AppConfig::load_with_env(Some(&path), env(&[])).unwrap();

    assert_eq!(config.root, Some(PathBuf::from("/srv/music")));
    assert_eq!(config.various_artists_name, "Various Artists");
    assert_eq!(config.collision_policy, CollisionPolicy::Reject);
    assert!(config.normalize_filenames);
}

#[test]
fn test_environment_overrides_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("update-index.toml");
    fs::write(&path, "various_artists_name = \"From File\"\n").unwrap();

    let config = AppConfig::load_with_env(
        Some(&path),
        env(&[
            ("UPDATE_INDEX_VARIOUS_ARTISTS_NAME", "From Env"),
            ("UPDATE_INDEX_COLLISION_POLICY", "overwrite"),
            ("UPDATE_INDEX_ROOT", "/env/root"),
        ]),
    )
    .unwrap();

    assert_eq!(config.various_artists_name, "From Env");
    assert_eq!(config.collision_policy, CollisionPolicy::Overwrite);
    assert_eq!(config.root, Some(PathBuf::from("/env/root")));
}

#[test]
fn test_missing_explicit_config_file() {
    let temp = TempDir::new().unwrap();
    let result = AppConfig::load_with_env(Some(&temp.path().join("nope.toml")), env(&[]));
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_invalid_policy_in_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "collision_policy = \"skip\"\n").unwrap();

    let result = AppConfig::load_with_env(Some(&path), env(&[]));
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_config_drives_pipeline() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("library");
    let source = root.join("Mix");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("one.mp3"), b"").unwrap();
    fs::write(source.join("two [Artist Z].mp3"), b"").unwrap();

    let config = AppConfig {
        root: Some(root.clone()),
        various_artists_name: "Unsorted".to_string(),
        ..AppConfig::default()
    };
    config.validate().unwrap();

    let summary =
        folder_index::update_index(&config.resolve_root().unwrap(), &config.index_options())
            .unwrap();

    let names: Vec<_> = summary.folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Artist Z (1)", "Unsorted (1)"]);
    assert!(!source.exists());
}
