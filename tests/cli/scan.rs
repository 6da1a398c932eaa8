use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

const USER_GO: &str = r#"package model

type User struct {
	ID    int64  `json:"id" db:"user_id"`
	Name  string `json:"name,omitempty"`
	Email string `json:"email,omitempty" validate:"required,email"`
}
"#;

const ORDER_GO: &str = r#"package model

type Order struct {
	*Base `json:",inline"`
	Total int `json:"total,string"`
}
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("model/user.go", USER_GO)?;
    test.write_file("model/order.go", ORDER_GO)?;
    test.write_file("model/user_test.go", USER_GO)?;
    test.write_file("vendor/dep/dep.go", USER_GO)?;
    Ok(test)
}

#[test]
fn test_scan_lists_annotations() -> Result<()> {
    let test = project()?;

    let out = test.run(&["scan"])?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    insta::assert_snapshot!(out.stdout, @r#"
    model/order.go:4  Base   json:",inline"
    model/order.go:5  Total  json:"total,string"
    model/user.go:4   ID     json:"id" db:"user_id"
    model/user.go:5   Name   json:"name,omitempty"
    model/user.go:6   Email  json:"email,omitempty" validate:"required,email"
    ✓ Scanned 2 files - found 5 annotations
    "#);
    Ok(())
}

#[test]
fn test_scan_filters_by_key_and_option() -> Result<()> {
    let test = project()?;

    let out = test.run(&["scan", "--key", "json", "--option", "omitempty"])?;

    assert_eq!(out.code, Some(0));
    let fields: Vec<_> = out
        .stdout
        .lines()
        .filter(|line| line.starts_with("model/"))
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect();
    assert_eq!(fields, vec!["Name", "Email"]);
    assert!(out.stdout.ends_with("found 2 annotations\n"));
    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let test = project()?;

    let out = test.run(&["scan", "model/user.go", "--json", "-k", "db"])?;

    assert_eq!(out.code, Some(0));
    let sites: Value = serde_json::from_str(&out.stdout)?;
    let sites = sites.as_array().expect("array of sites");
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0]["file"], "user.go");
    assert_eq!(sites[0]["line"], 4);
    assert_eq!(sites[0]["field"], "ID");
    assert_eq!(sites[0]["tag"]["db"], serde_json::json!(["user_id"]));
    Ok(())
}

#[test]
fn test_scan_uses_config_keys() -> Result<()> {
    let test = project()?;
    test.write_file(".tagutilrc.json", r#"{ "keys": ["validate"] }"#)?;

    let out = test.run(&["scan", "--json"])?;

    let sites: Value = serde_json::from_str(&out.stdout)?;
    let fields: Vec<_> = sites
        .as_array()
        .expect("array of sites")
        .iter()
        .map(|site| site["field"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(fields, vec!["Email"]);
    Ok(())
}

#[test]
fn test_scan_invalid_config_is_error() -> Result<()> {
    let test = project()?;
    test.write_file(".tagutilrc.json", r#"{ "ignores": ["["] }"#)?;

    let out = test.run(&["scan"])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.starts_with("Error: "));
    assert!(out.stderr.contains("Invalid glob pattern in 'ignores'"));
    Ok(())
}

#[test]
fn test_scan_missing_path_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["scan", "does/not/exist"])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("does/not/exist"));
    Ok(())
}
