use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
};

use super::*;

/// Create a unique temporary directory for each test.
fn test_dir() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("decl_lens_config_test_{}_{id}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn defaults_match_an_in_memory_cxx_unit() {
    let settings = ToolSettings::default();
    assert_eq!(settings.frontend.clang_path, "clang");
    assert_eq!(settings.frontend.language, SourceLanguage::Cxx);
    assert_eq!(settings.frontend.main_file_name, "input.cc");
    assert!(!settings.report.show_locations);
    assert_eq!(settings.logging.level, LogLevel::Warn);
}

#[test]
fn toml_patches_each_category() {
    let settings = ToolSettings::from_toml_str(
        r#"
        [frontend]
        clang_path = "/opt/llvm/bin/clang"
        language = "c"
        std = "c11"
        extra_flags = ["-DDEBUG", "  "]

        [report]
        show_locations = true

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(settings.frontend.clang_path, "/opt/llvm/bin/clang");
    assert_eq!(settings.frontend.language, SourceLanguage::C);
    assert_eq!(settings.frontend.std.as_deref(), Some("c11"));
    assert_eq!(settings.frontend.extra_flags, ["-DDEBUG"]);
    assert!(settings.report.show_locations);
    assert_eq!(settings.logging.level, LogLevel::Debug);
}

#[test]
fn unknown_keys_and_values_fall_back_to_defaults() {
    let settings = ToolSettings::from_toml_str(
        r#"
        colour = "always"

        [frontend]
        language = "fortran"
        main_file_name = "   "
        "#,
    )
    .unwrap();

    assert_eq!(settings.frontend.language, SourceLanguage::Cxx);
    assert_eq!(settings.frontend.main_file_name, "input.cc");
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(ToolSettings::from_toml_str("[frontend\nclang_path = 1").is_err());
}

#[test]
fn find_config_toml_discovers_in_parent_dir() {
    let dir = test_dir();
    let toml_path = dir.join(CONFIG_FILENAME);
    fs::write(&toml_path, "[report]\nshow_locations = true\n").unwrap();

    let sub = dir.join("nested");
    fs::create_dir_all(&sub).unwrap();

    assert_eq!(find_config_toml(&sub), Some(toml_path));
    assert!(ToolSettings::load(None, &sub).report.show_locations);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn explicit_path_wins_over_discovery() {
    let dir = test_dir();
    fs::write(dir.join(CONFIG_FILENAME), "[report]\nshow_locations = true\n").unwrap();
    let explicit = dir.join("other.toml");
    fs::write(&explicit, "[frontend]\nstd = \"c++20\"\n").unwrap();

    let settings = ToolSettings::load(Some(&explicit), &dir);
    assert_eq!(settings.frontend.std.as_deref(), Some("c++20"));
    assert!(!settings.report.show_locations);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let dir = test_dir();
    let settings = ToolSettings::load(Some(&dir.join("missing.toml")), &dir);
    assert_eq!(settings, ToolSettings::default());

    let _ = fs::remove_dir_all(&dir);
}
