//! Configuration unit tests.

use std::io::Write;

use super::*;

#[test]
fn default_config_roundtrip() {
    let cfg = Config::default();
    let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
    let parsed: Config = toml::from_str(&toml_str).expect("deserialize");
    assert_eq!(parsed, cfg);
    assert_eq!(parsed.glyph_name, "glyphs");
    assert_eq!(parsed.glyph_path, PathBuf::from("."));
    assert_eq!(parsed.prefix, "GLYPH");
}

#[test]
fn empty_toml_gives_defaults() {
    let parsed: Config = toml::from_str("").expect("deserialize");
    assert_eq!(parsed, Config::default());
}

#[test]
fn partial_toml_uses_defaults() {
    let toml_str = r#"
glyph_name = "font"
glyph_path = "firmware/src"
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(parsed.glyph_name, "font");
    assert_eq!(parsed.glyph_path, PathBuf::from("firmware/src"));
    // Other fields should be defaults
    assert_eq!(parsed.prefix, "GLYPH");
    assert_eq!(parsed.copyright_holder, "Blinc Labs LLC");
}

#[test]
fn derived_names() {
    let cfg = Config {
        glyph_name: "font".to_owned(),
        prefix: "FONT".to_owned(),
        ..Config::default()
    };
    assert_eq!(cfg.header_name(), "font.h");
    assert_eq!(cfg.source_name(), "font.c");
    assert_eq!(cfg.header_guard(), "FONT_H_");
    assert_eq!(cfg.count_name(), "FONT_COUNT");
    assert_eq!(cfg.index_array(), "FONT_IDX");
    assert_eq!(cfg.width_array(), "FONT_WIDTH");
    assert_eq!(cfg.data_array(), "FONT_DATA");
}

#[test]
fn identifiers_are_checked() {
    assert!(Config::default().validate().is_ok());

    let cfg = Config {
        prefix: "2GLYPH".to_owned(),
        ..Config::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidIdentifier { field: "prefix", .. })
    ));

    let cfg = Config {
        glyph_name: "my-glyphs".to_owned(),
        ..Config::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidIdentifier { field: "glyph_name", .. })
    ));

    let cfg = Config {
        glyph_name: String::new(),
        ..Config::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "prefix = \"LED\"").expect("write");

    let cfg = Config::load(file.path()).expect("load");
    assert_eq!(cfg.prefix, "LED");
    assert_eq!(cfg.glyph_name, "glyphs");
}

#[test]
fn load_reports_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "prefix = ").expect("write");

    assert!(matches!(
        Config::load(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(matches!(
        Config::load(&dir.path().join("missing.toml")),
        Err(ConfigError::Read { .. })
    ));
}
