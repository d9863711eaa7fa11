//! Configuration unit tests.

use std::time::Duration;

use super::*;
use crate::render::DEFAULT_SELECTION_COLOR;

#[test]
fn default_config_roundtrip() {
    let cfg = SurfaceConfig::default();
    let toml_str = cfg.to_toml().expect("serialize");
    let parsed = SurfaceConfig::from_toml(&toml_str).expect("deserialize");
    assert_eq!(parsed, cfg);
    assert_eq!(parsed.grid.columns, 80);
    assert_eq!(parsed.grid.rows, 25);
    assert!((parsed.font.size - 14.0).abs() < f32::EPSILON);
    assert_eq!(parsed.render.frame_interval_ms, 33);
    assert!(parsed.window.update_title_from_terminal);
    assert!(parsed.window.close_on_process_exit);
}

#[test]
fn empty_toml_gives_defaults() {
    let parsed = SurfaceConfig::from_toml("").expect("deserialize");
    assert_eq!(parsed, SurfaceConfig::default());
}

#[test]
fn partial_toml_uses_defaults() {
    let toml_str = r#"
[font]
size = 20.0

[window]
close_on_process_exit = false
"#;
    let parsed = SurfaceConfig::from_toml(toml_str).expect("deserialize");
    assert!((parsed.font.size - 20.0).abs() < f32::EPSILON);
    assert!(!parsed.window.close_on_process_exit);
    // Other fields should be defaults
    assert!(parsed.window.update_title_from_terminal);
    assert_eq!(parsed.grid.columns, 80);
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(SurfaceConfig::from_toml("[grid]\ncolumns = \"wide\"").is_err());
}

#[test]
fn default_selection_color_matches_renderer() {
    let cfg = SurfaceConfig::default();
    assert_eq!(cfg.selection_rgba().unwrap(), DEFAULT_SELECTION_COLOR);
}

#[test]
fn bad_selection_color_is_reported() {
    let mut cfg = SurfaceConfig::default();
    cfg.render.selection_color = "blue".to_owned();
    assert!(matches!(cfg.selection_rgba(), Err(Error::InvalidColor(_))));
}

#[test]
fn frame_interval_is_at_least_one_millisecond() {
    let mut cfg = SurfaceConfig::default();
    assert_eq!(cfg.frame_interval(), Duration::from_millis(33));
    cfg.render.frame_interval_ms = 0;
    assert_eq!(cfg.frame_interval(), Duration::from_millis(1));
}

#[test]
fn load_reports_missing_file_and_default_falls_back() {
    let dir = std::env::temp_dir().join(format!("ori_surface_cfg_{}", std::process::id()));
    let path = dir.join("missing.toml");
    assert!(matches!(
        SurfaceConfig::load(&path),
        Err(Error::ConfigRead { .. })
    ));
    assert_eq!(SurfaceConfig::load_or_default(&path), SurfaceConfig::default());
}

#[test]
fn load_reads_file_and_reports_parse_errors() {
    let dir = std::env::temp_dir().join(format!("ori_surface_cfg_load_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.toml");
    std::fs::write(&good, "[grid]\ncolumns = 132\nrows = 43\n").unwrap();
    let cfg = SurfaceConfig::load(&good).unwrap();
    assert_eq!((cfg.grid.columns, cfg.grid.rows), (132, 43));

    let bad = dir.join("bad.toml");
    std::fs::write(&bad, "[grid\n").unwrap();
    assert!(matches!(
        SurfaceConfig::load(&bad),
        Err(Error::ConfigParse { .. })
    ));
    assert_eq!(SurfaceConfig::load_or_default(&bad), SurfaceConfig::default());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unknown_font_keys_are_ignored() {
    let toml_str = r#"
[font]
size = 12.0
family = "Cascadia Mono"
"#;
    let parsed = SurfaceConfig::from_toml(toml_str).expect("deserialize");
    assert!((parsed.font.size - 12.0).abs() < f32::EPSILON);
}
