//! Settings files and environment layering

use crate::common::TestProject;
use umlgraph::Settings;

#[test]
fn test_partial_file_keeps_defaults() {
    let project = TestProject::new();
    let path = project.add_file(
        ".umlgraph/settings.toml",
        "[association]\nattribute = \"Uml\"\n",
    );

    let settings = Settings::load_from(&path).expect("settings should load");
    assert_eq!(settings.association.attribute, "Uml");
    assert_eq!(
        settings.association.ignore_attribute,
        "PlantUmlIgnoreAssociation"
    );
    assert!(settings.semantic);
    assert_eq!(settings.extensions, vec!["cs"]);
    assert_eq!(settings.output.format, "plantuml");
}

#[test]
fn test_invalid_value_is_reported() {
    let project = TestProject::new();
    let path = project.add_file(".umlgraph/settings.toml", "parallel_threads = \"many\"\n");

    let error = Settings::load_from(&path).expect_err("string is not a thread count");
    assert!(error.to_string().contains("parallel_threads"));
}

#[test]
fn test_saved_settings_load_back() {
    let project = TestProject::new();
    let path = project.path().join(".umlgraph").join("settings.toml");

    let mut settings = Settings::default();
    settings.semantic = false;
    settings.association.ignore_attribute = "NoEdge".to_string();
    settings.save(&path).expect("settings should save");

    let loaded = Settings::load_from(&path).expect("settings should load");
    assert!(!loaded.semantic);
    assert_eq!(loaded.association.ignore_attribute, "NoEdge");
}
