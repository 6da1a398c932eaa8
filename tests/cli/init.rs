use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["init"])?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "\u{2713} Created .tagutilrc.json\n");
    assert!(test.root().join(".tagutilrc.json").exists());

    let content = test.read_file(".tagutilrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["includes"], serde_json::json!(["**/*.go"]));
    assert_eq!(parsed["ignoreTestFiles"], true);
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tagutilrc.json", "{}")?;

    let out = test.run(&["init"])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("already exists"));
    assert_eq!(test.read_file(".tagutilrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("user.go", "type U struct {\n\tA int `json:\"a\"`\n}\n")?;

    let out = test.run(&["scan"])?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("user.go:2"));
    Ok(())
}
