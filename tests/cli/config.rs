use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_config_directories_and_docs_url() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18n-detect.json",
        r#"{
         "defaultDirectories": ["views/"],
         "excludes": [],
         "docsUrl": "https://example.org/i18n"
     }"#,
    )?;
    test.write_file("views/home.html", r#"<h1 class="title">Welcome</h1>"#)?;
    test.write_file("openlibrary/templates/ignored.html", "<span>Not scanned</span>")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(1));
    let lines = output.lines();
    assert!(lines[0].starts_with("ERRO\tviews/home.html:1:19"));
    assert_eq!(lines[1], "1 file scanned. 1 error found.");
    assert_eq!(
        lines[2],
        "Learn how to fix these errors by reading our i18n documentation: https://example.org/i18n"
    );

    Ok(())
}

#[test]
fn test_config_exclude_globs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18n-detect.json",
        r#"{ "defaultDirectories": ["views/"], "excludes": ["views/legacy/**"] }"#,
    )?;
    test.write_file("views/legacy/old.html", "<span>Old text</span>")?;
    test.write_file("views/new.html", "<span>$_('New text')</span>")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    let lines = output.lines();
    assert!(lines[0].starts_with("SKIP\tviews/legacy/old.html"));
    assert_eq!(lines[1], "2 files scanned. 0 errors found.");

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "ci/i18n.json",
        r#"{ "defaultDirectories": ["views/"] }"#,
    )?;
    test.write_file("views/a.html", "<span>Bare</span>")?;

    let mut cmd = test.command();
    cmd.args(["--config", "ci/i18n.json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.starts_with("ERRO\tviews/a.html:1:7"));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-detect.json", r#"{ "excludes": ["[invalid"] }"#)?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid glob pattern in 'excludes'"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .i18n-detect.json"));

    let written = test.read_file(".i18n-detect.json")?;
    assert!(written.contains("\"defaultDirectories\""));
    assert!(written.contains("openlibrary/templates/login.html"));
    assert!(test.root().join(".i18n-detect.json").is_file());

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".i18n-detect.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("--init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("already exists"));
    assert_eq!(test.read_file(".i18n-detect.json")?, "{}");

    Ok(())
}
