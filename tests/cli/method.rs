use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const CLASS_FILE: &str =
    "<?php\n\nclass weather extends eqLogic\n{\n    public function preSave()\n    {\n    }\n}\n";

#[test]
fn test_method_inserted_before_closing_brace() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("weather.class.php", CLASS_FILE)?;

    let output = test.run(&[
        "method",
        "weather.class.php",
        "weather",
        "cron",
        "--static",
    ])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Added public static function cron() to class weather\n"
    );
    assert_eq!(
        test.read_file("weather.class.php")?,
        "<?php\n\nclass weather extends eqLogic\n{\n    public function preSave()\n    {\n    }\n\n\
         \x20   public static function cron()\n    {\n    }\n}\n"
    );

    Ok(())
}

#[test]
fn test_method_with_visibility() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("weather.class.php", CLASS_FILE)?;

    let output = test.run(&[
        "method",
        "weather.class.php",
        "weather",
        "refresh",
        "--visibility",
        "private",
    ])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(
        test.read_file("weather.class.php")?
            .contains("    private function refresh()\n")
    );

    Ok(())
}

#[test]
fn test_method_missing_class_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("weather.class.php", CLASS_FILE)?;

    let output = test.run(&["method", "weather.class.php", "weatherCmd", "execute"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Class weatherCmd not found in weather.class.php"));
    assert_eq!(test.read_file("weather.class.php")?, CLASS_FILE);

    Ok(())
}

#[test]
fn test_method_missing_file_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["method", "nothing.php", "weather", "cron"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("File not found: nothing.php"));
    assert!(!test.root().join("nothing.php").exists());

    Ok(())
}

#[test]
fn test_method_create_class() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[
        "method",
        "core/class/demo.class.php",
        "demo",
        "run",
        "--create-class",
    ])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("core/class/demo.class.php")?,
        "<?php\n\nclass demo\n{\n    public function run()\n    {\n    }\n}\n"
    );

    Ok(())
}

#[test]
fn test_method_already_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("weather.class.php", CLASS_FILE)?;

    let output = test.run(&["method", "weather.class.php", "weather", "preSave"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Method preSave already exists in class weather"));
    assert_eq!(test.read_file("weather.class.php")?, CLASS_FILE);

    Ok(())
}
