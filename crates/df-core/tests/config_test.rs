use std::io::Write;

use df_core::config::{Config, LogFormat};

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.general.project_name, "dealflow");
    assert_eq!(cfg.general.log_level, "info");
    assert_eq!(cfg.general.log_format, LogFormat::Human);
    assert_eq!(cfg.display.currency_symbol, "R$");
    assert_eq!(cfg.display.thousands_separator, ".");
    assert_eq!(cfg.display.decimal_separator, ",");
    assert_eq!(cfg.display.date_format, "%d/%m/%Y");
    assert!(cfg.notifications.enabled);
    assert_eq!(cfg.notifications.max_notifications, 50);
    assert_eq!(cfg.board.default_stage_id, "stage-prospeccao");
    cfg.validate().expect("defaults validate");
}

#[test]
fn config_roundtrip() {
    let cfg = Config::default();
    let toml_str = cfg.to_toml().expect("serialize to toml");
    assert!(toml_str.contains("dealflow"));

    let parsed: Config = toml::from_str(&toml_str).expect("parse toml back");
    assert_eq!(parsed.general.project_name, cfg.general.project_name);
    assert_eq!(parsed.display.date_format, cfg.display.date_format);
    assert_eq!(parsed.board.fallback_stage_label, cfg.board.fallback_stage_label);
    parsed.validate().expect("config validates");
}

#[test]
fn config_partial_toml() {
    let partial = r#"
[display]
currency_symbol = "US$"
thousands_separator = ","
decimal_separator = "."
"#;
    let cfg: Config = toml::from_str(partial).expect("parse partial");
    assert_eq!(cfg.display.currency_symbol, "US$");
    // defaults should fill in the rest
    assert_eq!(cfg.display.date_format, "%d/%m/%Y");
    assert_eq!(cfg.notifications.max_notifications, 50);
    cfg.validate().expect("config validates");
}

#[test]
fn identical_separators_fail_validation() {
    let mut cfg = Config::default();
    cfg.display.decimal_separator = ".".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn invalid_date_format_fails_validation() {
    let mut cfg = Config::default();
    cfg.display.date_format = "%Q".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("date_format"));
}

#[test]
fn zero_max_notifications_fails_validation() {
    let mut cfg = Config::default();
    cfg.notifications.max_notifications = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn empty_default_stage_fails_validation() {
    let mut cfg = Config::default();
    cfg.board.default_stage_id = "  ".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("default_stage_id"));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[general]
project_name = "crm-demo"

[board]
fallback_stage_label = "outra etapa"
"#
    )
    .expect("write config");

    let cfg = Config::load_from(file.path()).expect("load");
    assert_eq!(cfg.general.project_name, "crm-demo");
    assert_eq!(cfg.board.fallback_stage_label, "outra etapa");
    assert_eq!(cfg.board.default_stage_id, "stage-prospeccao");
}

#[test]
fn load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Config::load_from(dir.path().join("missing.toml")).expect_err("missing");
    assert!(err.to_string().starts_with("io:"));
}

#[test]
fn load_from_invalid_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[general\nproject_name = ").expect("write");
    let err = Config::load_from(file.path()).expect_err("parse error");
    assert!(err.to_string().starts_with("parse:"));
}

#[test]
fn general_log_settings_parse_and_validate() {
    let cfg: Config = toml::from_str(
        r#"
[general]
log_level = "df_state=debug,warn"
log_format = "json"
"#,
    )
    .expect("parse");
    assert_eq!(cfg.general.log_level, "df_state=debug,warn");
    assert_eq!(cfg.general.log_format, LogFormat::Json);
    cfg.validate().expect("valid");

    let mut blank = Config::default();
    blank.general.log_level = "  ".into();
    let err = blank.validate().expect_err("empty log level");
    assert!(err.to_string().contains("general.log_level"));
}
