use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, path_filters};

#[test]
fn test_success() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("fr.po", &["a", "b"])?;
    let summary = test.root().join("summary.md");

    assert_cmd_snapshot!(test.github_command(&summary));
    assert_snapshot!("success_summary", test.read_file("summary.md")?);

    Ok(())
}

#[test]
fn test_no_files() -> Result<()> {
    let test = CliTest::new()?;
    let summary = test.root().join("summary.md");

    assert_cmd_snapshot!(test.github_command(&summary));
    assert_snapshot!("no_files_summary", test.read_file("summary.md")?);

    Ok(())
}

#[test]
fn test_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("a.po", &["x", "x", "y"])?;
    test.write_catalog("b.po", &["z"])?;
    let summary = test.root().join("summary.md");

    assert_cmd_snapshot!(test.github_command(&summary));
    assert_snapshot!("failure_summary", test.read_file("summary.md")?);

    Ok(())
}

#[test]
fn test_fatal_error() -> Result<()> {
    let test = CliTest::with_file("broken.po", "msgstr \"orphan\"\n")?;
    let summary = test.root().join("summary.md");

    let _filters = path_filters().bind_to_scope();
    assert_cmd_snapshot!(test.github_command(&summary));
    assert_snapshot!("fatal_error_summary", test.read_file("summary.md")?);

    Ok(())
}

#[test]
fn test_summary_to_stdout_without_summary_file() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().env("GITHUB_ACTIONS", "true"));

    Ok(())
}
