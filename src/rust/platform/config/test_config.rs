use super::*;
use tempfile::tempdir;

#[test]
fn test_defaults_without_files() {
    let dir = tempdir().unwrap();
    let config = AppConfig::load(dir.path()).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(!config.ips.strict_bare_addresses);
    assert!(!config.log.debug);
    assert_eq!(config.range_policy(), RangePolicy::default());
}

#[test]
fn test_load_toml() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("addrspan.toml"),
        "[ips]\nstrict_bare_addresses = true\n\n[log]\ndebug = true\n",
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();
    assert!(config.ips.strict_bare_addresses);
    assert!(config.log.debug);
    assert_eq!(config.range_policy(), RangePolicy::strict());
}

#[test]
fn test_load_json_with_missing_sections() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("addrspan.json"), r#"{ "log": { "debug": true } }"#).unwrap();

    let config = AppConfig::load(dir.path()).unwrap();
    assert!(config.log.debug);
    assert!(!config.ips.strict_bare_addresses);
}

#[test]
fn test_toml_wins_over_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("addrspan.json"), r#"{ "log": { "debug": true } }"#).unwrap();
    fs::write(dir.path().join("addrspan.toml"), "[log]\ndebug = false\n").unwrap();

    assert!(!AppConfig::load(dir.path()).unwrap().log.debug);
}

#[test]
fn test_dotfile_sniffs_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".addrspan");

    fs::write(&path, r#"{ "ips": { "strict_bare_addresses": true } }"#).unwrap();
    assert!(AppConfig::load_file(&path).unwrap().ips.strict_bare_addresses);

    fs::write(&path, "[ips]\nstrict_bare_addresses = true\n").unwrap();
    assert!(AppConfig::load_file(&path).unwrap().ips.strict_bare_addresses);
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("addrspan.toml");
    fs::write(&path, "[ips\n").unwrap();

    let err = AppConfig::load(dir.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid TOML config"));
}
