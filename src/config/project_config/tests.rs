use super::*;

#[test]
fn test_default_config() {
    let config = ProjectConfig::default();
    assert_eq!(config.attestations, AttestationBases::default());
    assert_eq!(config.links.example_base, EXAMPLE_BASE);
    assert_eq!(config.sort_state(), SortState::default());
    assert!(!config.parallel());
}

#[test]
fn test_example_config_parses() {
    let config: ProjectConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
    assert_eq!(config.attestations.github, "https://github.com/");
    assert!(config.defaults.format.is_none());
}

#[test]
fn test_toml_parsing() {
    let toml_str = r#"
[attestations]
github = "https://git.example.org/"

[defaults]
format = "json"
sort = "lines"
descending = true
top = 5
"#;
    let config: ProjectConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.attestations.github, "https://git.example.org/");
    // Unset fields keep their defaults
    assert_eq!(
        config.attestations.openbsd,
        "https://github.com/openbsd/src/tree/master/"
    );
    assert_eq!(config.defaults.format.as_deref(), Some("json"));
    assert_eq!(config.defaults.top, Some(5));
    assert_eq!(config.sort_state(), SortState::new(SortField::Lines, false));
}

#[test]
fn test_bad_sort_falls_back() {
    let config: ProjectConfig = toml::from_str("[defaults]\nsort = \"bytes\"\n").unwrap();
    assert_eq!(config.sort_state(), SortState::default());
}

#[test]
fn test_load_project_config_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_project_config(dir.path());
    assert!(config.defaults.data.is_none());
}

#[test]
fn test_load_project_config_toml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("secflops.toml"),
        "[defaults]\ndata = \"snap.json\"\nparallel = true\n",
    )
    .unwrap();
    let config = load_project_config(dir.path());
    assert_eq!(config.defaults.data, Some(PathBuf::from("snap.json")));
    assert!(config.parallel());
}

#[test]
fn test_load_project_config_json_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("secflops.toml"), "not = [valid").unwrap();
    std::fs::write(
        dir.path().join(".secflopsrc.json"),
        r#"{"links": {"example_base": "https://example.org/"}}"#,
    )
    .unwrap();
    let config = load_project_config(dir.path());
    assert_eq!(config.links.example_base, "https://example.org/");
}
