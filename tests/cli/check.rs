use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, path_filters};

#[test]
fn test_no_duplicates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("locale/fr.po", &["Hello", "Bye"])?;
    test.write_catalog("locale/de.po", &["Hello", "Bye"])?;

    assert_cmd_snapshot!(test.command());

    Ok(())
}

#[test]
fn test_no_files_found() -> Result<()> {
    let test = CliTest::with_file("messages/en.json", "{}")?;

    assert_cmd_snapshot!(test.command());

    Ok(())
}

#[test]
fn test_duplicates_found() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("a.po", &["x", "x", "y"])?;
    test.write_catalog("b.po", &["z"])?;

    assert_cmd_snapshot!(test.command());

    Ok(())
}

#[test]
fn test_duplicates_in_nested_catalogs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("locale/fr/LC_MESSAGES/app.po", &["b", "a", "b", "a"])?;
    test.write_catalog("locale/de/LC_MESSAGES/app.po", &["q", "q"])?;

    assert_cmd_snapshot!(test.command());

    Ok(())
}

#[test]
fn test_explicit_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("translations/fr.po", &["x", "x"])?;
    test.write_catalog("other/de.po", &["y"])?;

    assert_cmd_snapshot!(test.command().arg("other"));

    Ok(())
}

#[test]
fn test_parse_error_is_fatal() -> Result<()> {
    let test = CliTest::with_file("broken.po", "msgid \"never closed\nmsgstr \"\"\n")?;

    let _filters = path_filters().bind_to_scope();
    assert_cmd_snapshot!(test.command());

    Ok(())
}

#[test]
fn test_plural_index_out_of_range_is_fatal() -> Result<()> {
    let test = CliTest::with_file(
        "plural.po",
        "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[18446744073709551615] \"x\"\n",
    )?;

    let _filters = path_filters().bind_to_scope();
    assert_cmd_snapshot!(test.command());

    Ok(())
}

#[test]
fn test_byte_order_mark() -> Result<()> {
    let test = CliTest::with_file(
        "fr.po",
        "\u{FEFF}msgid \"\"\nmsgstr \"\"\n\nmsgid \"a\"\nmsgstr \"A\"\n",
    )?;

    assert_cmd_snapshot!(test.command());

    Ok(())
}

#[test]
fn test_missing_path_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("does-not-exist"));

    Ok(())
}

#[test]
fn test_verbose_lists_checked_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("fr.po", &["a"])?;

    assert_cmd_snapshot!(test.command().arg("--verbose"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"));

    Ok(())
}
