use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_class_creates_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["class", "core/class/weather.class.php", "weather"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Created core/class/weather.class.php with class weather\n"
    );
    assert_eq!(
        test.read_file("core/class/weather.class.php")?,
        "<?php\n\nclass weather\n{\n}\n"
    );

    Ok(())
}

#[test]
fn test_class_appends_and_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib.php", "<?php\n\nclass First\n{\n}\n")?;

    let first = test.run(&["class", "lib.php", "Second"])?;
    let second = test.run(&["class", "lib.php", "Second"])?;

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
    assert!(stdout(&second).contains("Class Second already exists in lib.php"));

    let content = test.read_file("lib.php")?;
    assert_eq!(content.matches("class First").count(), 1);
    assert_eq!(content.matches("class Second").count(), 1);

    Ok(())
}

#[test]
fn test_class_rejects_invalid_name() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["class", "lib.php", "bad-name"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("lib.php").exists());

    Ok(())
}
