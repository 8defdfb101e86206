use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));

    let content = std::fs::read_to_string(test_config_path(&test))?;
    assert!(content.contains("ignores"));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".cmlintrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

fn test_config_path(test: &CliTest) -> std::path::PathBuf {
    test.project_dir.join(".cmlintrc.json")
}
