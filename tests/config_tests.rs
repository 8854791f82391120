use campusclub::config::Config;
use campusclub::config::migrate::{migrate_file, missing_fields};
use campusclub::errors::AppError;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

mod common;
use common::{cc, temp_config};

#[test]
fn missing_file_gives_defaults() {
    let path = temp_config("cfg_missing");
    let cfg = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.organizer, "you@college.edu");
    assert!(cfg.seed_demo);
    assert_eq!(cfg.share_link("evt-1"), "https://campus.example/event/evt-1");
}

#[test]
fn partial_file_is_completed_with_defaults() {
    let path = temp_config("cfg_partial");
    fs::write(&path, "organizer: chair@club.edu\nseed_demo: false\n").unwrap();

    let cfg = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(cfg.organizer, "chair@club.edu");
    assert!(!cfg.seed_demo);
    assert_eq!(cfg.separator(), '-');

    let mut missing = missing_fields(Path::new(&path)).unwrap();
    missing.sort();
    assert_eq!(missing, ["log_level", "separator_char", "share_base_url"]);

    let added = migrate_file(Path::new(&path)).unwrap();
    assert_eq!(added.len(), 3);
    assert!(missing_fields(Path::new(&path)).unwrap().is_empty());

    // existing values survive the migration
    let cfg = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(cfg.organizer, "chair@club.edu");
    assert!(migrate_file(Path::new(&path)).unwrap().is_empty());
}

#[test]
fn invalid_values_are_rejected() {
    let path = temp_config("cfg_invalid");
    fs::write(&path, "separator_char: \"==\"\n").unwrap();
    assert!(matches!(
        Config::load_from(Path::new(&path)),
        Err(AppError::Config(_))
    ));

    fs::write(&path, "seed_demo: [not, a, bool]\n").unwrap();
    assert!(matches!(
        Config::load_from(Path::new(&path)),
        Err(AppError::Yaml(_))
    ));
}

#[test]
fn init_writes_a_loadable_file() {
    let path = temp_config("cfg_init");
    let written = Config::init_at(Path::new(&path), false).unwrap();
    assert_eq!(Config::load_from(Path::new(&path)).unwrap(), written);
    fs::remove_file(&path).ok();
}

#[test]
fn seed_demo_false_starts_an_empty_session() {
    let path = temp_config("cfg_no_seed");
    fs::write(&path, "seed_demo: false\n").unwrap();

    cc(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));
}

#[test]
fn config_check_lists_missing_fields() {
    let path = temp_config("cfg_check");
    fs::write(&path, "organizer: chair@club.edu\n").unwrap();

    cc(&path)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing fields:").and(predicate::str::contains("share_base_url")));

    cc(&path)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("organizer: chair@club.edu"));
}

#[test]
fn broken_config_file_is_a_fatal_error() {
    let path = temp_config("cfg_broken");
    fs::write(&path, "organizer: [unclosed\n").unwrap();

    cc(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: YAML error"));
}
