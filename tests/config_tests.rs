//! Configuration file loading tests

use std::fs;
use tempfile::{NamedTempFile, TempDir};
use todo_widget::Config;
use todo_widget::config::IdStrategy;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path().join("todo.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_file() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        r#"
[view]
title = "Today"
prompt = "What next?"
placeholder = "All clear"
show_ids = true

[input]
reject_blank = true

[ids]
strategy = "sequential"
"#,
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.view.title, "Today");
    assert_eq!(config.view.prompt, "What next?");
    assert_eq!(config.view.placeholder, "All clear");
    assert!(config.view.show_ids);
    assert!(config.input.reject_blank);
    assert_eq!(config.ids.strategy, IdStrategy::sequential);
}

#[test]
fn test_invalid_file_names_path() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "[view\ntitle = ").unwrap();

    let err = Config::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid config file"));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_random_length_applies_to_store() {
    let config = Config::parse("[ids]\nlength = 12\n").unwrap();
    let mut store = config.build_store();
    assert_eq!(store.add("x").as_str().len(), 12);
}
