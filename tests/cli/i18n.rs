use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

/// A plugin named `weather` inside the test project.
fn setup_plugin(test: &CliTest) -> Result<()> {
    test.write_file(
        ".plugkitrc.json",
        r#"{ "pluginRoot": "weather", "locales": ["fr_FR"] }"#,
    )?;
    test.write_file(
        "weather/core/class/weather.class.php",
        "<?php\nthrow new Exception(__('Ville inconnue', __FILE__));\n",
    )?;
    test.write_file(
        "weather/desktop/php/weather.php",
        "<legend>{{Général}}</legend>\n<label>{{Ville}}</label>\n<span>{{Ville}}</span>\n",
    )?;
    test.write_file("weather/vendor/lib/dep.php", "{{Vendor}}")?;
    test.write_file("weather/README.md", "{{Readme}}")?;
    Ok(())
}

fn read_json(test: &CliTest, path: &str) -> Result<Value> {
    let content = test.read_file(path)?;
    serde_json::from_str(&content).context("Catalog should be valid JSON")
}

#[test]
fn test_scan_lists_strings() -> Result<()> {
    let test = CliTest::new()?;
    setup_plugin(&test)?;

    let output = test.run(&["scan"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "core/class/weather.class.php\n  Ville inconnue\n\
         desktop/php/weather.php\n  Général\n  Ville\n\
         \u{2713} Found 3 strings in 2 files\n"
    );

    Ok(())
}

#[test]
fn test_i18n_dry_run_does_not_write() -> Result<()> {
    let test = CliTest::new()?;
    setup_plugin(&test)?;

    let output = test.run(&["i18n"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("fr_FR: 3 new strings to add"));
    assert!(out.contains("--apply"));
    assert!(!test.root().join("weather/core/i18n/fr_FR.json").exists());

    Ok(())
}

#[test]
fn test_i18n_apply_writes_catalog() -> Result<()> {
    let test = CliTest::new()?;
    setup_plugin(&test)?;

    let output = test.run(&["i18n", "--apply"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("fr_FR: added 3 new strings"));

    let raw = test.read_file("weather/core/i18n/fr_FR.json")?;
    assert!(raw.contains(r#""plugins\/weather\/desktop\/php\/weather.php": {"#));

    let catalog = read_json(&test, "weather/core/i18n/fr_FR.json")?;
    assert_eq!(
        catalog,
        json!({
            "plugins/weather/core/class/weather.class.php": {
                "Ville inconnue": "Ville inconnue"
            },
            "plugins/weather/desktop/php/weather.php": {
                "Général": "Général",
                "Ville": "Ville"
            }
        })
    );

    Ok(())
}

#[test]
fn test_i18n_keeps_existing_translations() -> Result<()> {
    let test = CliTest::new()?;
    setup_plugin(&test)?;
    test.write_file(
        "weather/core/i18n/en_US.json",
        r#"{
    "plugins\/weather\/desktop\/php\/weather.php": {
        "Général": "General",
        "Supprimé": "Removed"
    }
}"#,
    )?;

    let output = test.run(&["i18n", "en_US", "--apply"])?;

    assert_eq!(output.status.code(), Some(0));
    let catalog = read_json(&test, "weather/core/i18n/en_US.json")?;
    let page = &catalog["plugins/weather/desktop/php/weather.php"];
    assert_eq!(page["Général"], "General");
    assert_eq!(page["Supprimé"], "Removed");
    assert_eq!(page["Ville"], "Ville");
    assert_eq!(
        catalog["plugins/weather/core/class/weather.class.php"]["Ville inconnue"],
        "Ville inconnue"
    );
    // Only the requested locale is written
    assert!(!test.root().join("weather/core/i18n/fr_FR.json").exists());

    // Second run has nothing to add
    let again = test.run(&["i18n", "en_US"])?;
    assert!(stdout(&again).contains("en_US: catalog is up to date"));

    Ok(())
}

#[test]
fn test_i18n_updates_existing_locales_by_default() -> Result<()> {
    let test = CliTest::new()?;
    setup_plugin(&test)?;
    test.write_file("weather/core/i18n/de_DE.json", "{}")?;

    let output = test.run(&["i18n", "--apply"])?;

    assert_eq!(output.status.code(), Some(0));
    let de = read_json(&test, "weather/core/i18n/de_DE.json")?;
    assert_eq!(de.as_object().map(|o| o.len()), Some(2));
    assert!(test.root().join("weather/core/i18n/fr_FR.json").exists());

    Ok(())
}

#[test]
fn test_i18n_rejects_invalid_locale() -> Result<()> {
    let test = CliTest::new()?;
    setup_plugin(&test)?;

    let output = test.run(&["i18n", "fr_fr", "--apply"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid locale name: \"fr_fr\""));
    assert!(!test.root().join("weather/core/i18n").exists());

    Ok(())
}

#[test]
fn test_plugin_root_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    setup_plugin(&test)?;
    test.write_file("other/page.php", "{{Other}}")?;

    let output = test.run(&["scan", "--plugin-root", "other"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "page.php\n  Other\n\u{2713} Found 1 string in 1 file\n"
    );

    Ok(())
}

#[test]
fn test_missing_plugin_root_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["scan", "--plugin-root", "missing"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Plugin directory does not exist"));

    Ok(())
}
