use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const TAG: &str = r#"json:"field,omitempty" doc:"required""#;

#[test]
fn test_parse_lists_keys() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["parse", TAG])?;

    assert_eq!(out.code, Some(0));
    insta::assert_snapshot!(out.stdout, @r#"
    doc   "required"
    json  "field" omitempty
    "#);
    Ok(())
}

#[test]
fn test_parse_json() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["parse", "--json", r#"json:",inline,omitempty" k:"a" k:"b""#])?;

    assert_eq!(out.code, Some(0));
    let value: serde_json::Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(
        value,
        serde_json::json!({ "json": ["", "inline", "omitempty"], "k": ["b"] })
    );
    Ok(())
}

#[test]
fn test_parse_malformed_warns() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["parse", "not a tag"])?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "");
    assert!(out.stderr.contains("no key:\"value\" pairs found"));
    Ok(())
}

#[test]
fn test_value_queries() -> Result<()> {
    let test = CliTest::new()?;

    let cases = [
        ("get", "field,omitempty"),
        ("first", "field"),
        ("second", "omitempty"),
        ("len", "2"),
        ("num-options", "1"),
    ];
    for (command, expected) in cases {
        let out = test.run(&[command, TAG, "json"])?;
        assert_eq!(out.code, Some(0), "{} failed: {}", command, out.stderr);
        assert_eq!(out.stdout.trim_end(), expected, "{}", command);
    }
    Ok(())
}

#[test]
fn test_missing_key_prints_zero_values() -> Result<()> {
    let test = CliTest::new()?;

    assert_eq!(test.run(&["get", TAG, "xml"])?.stdout, "\n");
    assert_eq!(test.run(&["len", TAG, "xml"])?.stdout, "0\n");
    Ok(())
}

#[test]
fn test_predicates_set_exit_status() -> Result<()> {
    let test = CliTest::new()?;
    let tag = r#"json:",inline""#;

    let out = test.run(&["contains", tag, "json", ""])?;
    assert_eq!((out.code, out.stdout.as_str()), (Some(0), "true\n"));

    let out = test.run(&["has-option", tag, "json", ""])?;
    assert_eq!((out.code, out.stdout.as_str()), (Some(1), "false\n"));

    let out = test.run(&["has-option", tag, "json", "inline"])?;
    assert_eq!(out.code, Some(0));
    Ok(())
}

#[test]
fn test_missing_argument_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["first", TAG])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("<KEY>"));
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Usage:"));
    Ok(())
}
