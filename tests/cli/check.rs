use anyhow::Result;

use crate::CliTest;

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file("styles.css", ".container {}")?;
    test.write_file(
        "app.tsx",
        "import s from './styles.css';\nexport const a = s.container;\n",
    )?;

    let output = test.check(&[])?;
    assert_eq!(output.exit_code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("no issues found"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_undefined_class_access_fails() -> Result<()> {
    let test = CliTest::with_file("styles.css", ".container {}")?;
    test.write_file(
        "app.tsx",
        "import s from './styles.css';\nexport const a = s.container;\nexport const b = s.wrapper;\n",
    )?;

    let output = test.check(&[])?;
    assert_eq!(output.exit_code, Some(1));
    assert!(
        output
            .stdout
            .contains("Class or exported property 'wrapper' not found"),
        "{}",
        output.stdout
    );
    assert!(output.stdout.contains("no-undef-class"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_unused_class_reported_at_import() -> Result<()> {
    let test = CliTest::with_file("styles.css", ".container {} .header {}")?;
    test.write_file(
        "app.tsx",
        "import s from './styles.css';\nexport const a = s.container;\n",
    )?;

    let output = test.check(&[])?;
    assert_eq!(output.exit_code, Some(1));
    assert!(
        output
            .stdout
            .contains("Unused classes found in styles.css: header"),
        "{}",
        output.stdout
    );
    assert!(output.stdout.contains("app.tsx:1:1"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_mark_as_used_flag_suppresses_unused() -> Result<()> {
    let test = CliTest::with_file("styles.css", ".container {} .header {}")?;
    test.write_file(
        "app.tsx",
        "import s from './styles.css';\nexport const a = s.container;\n",
    )?;

    let output = test.check(&["--mark-as-used", "header"])?;
    assert_eq!(output.exit_code, Some(0), "{}", output.stdout);
    assert!(output.stdout.contains("no issues found"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_missing_stylesheet_is_silently_skipped() -> Result<()> {
    let test = CliTest::with_file(
        "app.tsx",
        "import s from './nonexistent.css';\nexport const a = s.whatever;\n",
    )?;

    let output = test.check(&[])?;
    assert_eq!(output.exit_code, Some(0), "{}", output.stdout);
    assert!(output.stdout.contains("no issues found"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_camel_case_config() -> Result<()> {
    let test = CliTest::with_file("styles.css", ".foo-bar {}")?;
    test.write_file(".cmlintrc.json", r#"{ "camelCase": true }"#)?;
    test.write_file(
        "app.tsx",
        "import s from './styles.css';\nexport const a = s.fooBar;\n",
    )?;

    let output = test.check(&[])?;
    assert_eq!(output.exit_code, Some(0), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_export_props_resolve() -> Result<()> {
    let test = CliTest::with_file("theme.css", ":export { primary: #bf4040; }")?;
    test.write_file(
        "app.tsx",
        "import theme from './theme.css';\nexport const color = theme.primary;\n",
    )?;

    let output = test.check(&[])?;
    assert_eq!(output.exit_code, Some(0), "{}", output.stdout);
    assert!(output.stdout.contains("no issues found"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_single_rule_selection() -> Result<()> {
    let test = CliTest::with_file("styles.css", ".used {} .unused {}")?;
    test.write_file(
        "app.tsx",
        "import s from './styles.css';\nexport const a = s.used;\nexport const b = s.nope;\n",
    )?;

    // Only the unused-class rule: the undefined access must not show up.
    let output = test.check(&["unused-class"])?;
    assert_eq!(output.exit_code, Some(1));
    assert!(output.stdout.contains("Unused classes found"), "{}", output.stdout);
    assert!(!output.stdout.contains("not found"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_parse_error_is_warning_only() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "import from from from;")?;

    let output = test.check(&[])?;
    assert_eq!(output.exit_code, Some(0), "{}", output.stdout);
    assert!(output.stdout.contains("parse-error"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".cmlintrc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;
    test.write_file("styles.css", ".container {}")?;
    test.write_file(
        "generated/bad.tsx",
        "import s from '../styles.css';\nexport const a = s.nope;\n",
    )?;
    test.write_file(
        "app.tsx",
        "import s from './styles.css';\nexport const a = s.container;\n",
    )?;

    let output = test.check(&[])?;
    assert_eq!(output.exit_code, Some(0), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("check"));
    assert!(stdout.contains("init"));

    Ok(())
}
