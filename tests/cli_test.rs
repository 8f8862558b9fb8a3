//! Integration tests for the fixstem command line

use std::fs;

use clap::Parser;
use fixstem::cli::args::{FixStemArgs, normalize_args};
use fixstem::cli::commands::{build_stemmer, execute_command};
use fixstem::error::{FixStemError, Result};
use fixstem::options::OptionHandler;
use tempfile::TempDir;

fn parse(args: &[&str]) -> FixStemArgs {
    let mut argv = vec!["fixstem"];
    argv.extend_from_slice(args);
    FixStemArgs::try_parse_from(normalize_args(argv)).unwrap()
}

#[test]
fn test_stem_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("output.txt");
    fs::write(&input, "Information retrieval, in brief.\nThe cat sat.\n")?;

    let args = parse(&[
        "-stemmlength",
        "4",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    execute_command(args)?;

    assert_eq!(
        fs::read_to_string(&output)?,
        "Info retr, in brie.\nThe cat sat.\n"
    );

    Ok(())
}

#[test]
fn test_stem_file_lowercase_default_length() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("output.txt");
    fs::write(&input, "INFORMATION Cat")?;

    let args = parse(&[
        "-l",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    execute_command(args)?;

    assert_eq!(fs::read_to_string(&output)?, "informa cat");

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("output.json");
    fs::write(&input, "information cat")?;

    let args = parse(&[
        "--stemmlength",
        "3",
        "-f",
        "json",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    execute_command(args)?;

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(value["options"], serde_json::json!(["-stemmlength", "3"]));
    assert_eq!(value["words"][0]["word"], "information");
    assert_eq!(value["words"][0]["stem"], "inf");
    assert_eq!(value["words"][1]["stem"], "cat");

    Ok(())
}

#[test]
fn test_show_options() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("options.txt");

    execute_command(parse(&[
        "-stemmlength",
        "5",
        "--show-options",
        "-o",
        output.to_str().unwrap(),
    ]))?;
    assert_eq!(fs::read_to_string(&output)?, "-stemmlength 5\n");

    execute_command(parse(&["--show-options", "-o", output.to_str().unwrap()]))?;
    assert_eq!(fs::read_to_string(&output)?, "-stemmlength 7\n");

    Ok(())
}

#[test]
fn test_list_options() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("list.txt");

    execute_command(parse(&["--list-options", "-o", output.to_str().unwrap()]))?;

    let text = fs::read_to_string(&output)?;
    assert!(text.contains("FixedLengthStemmer"));
    assert!(text.contains(&format!("(revision {})", fixstem::VERSION)));
    assert!(text.contains("-stemmlength <value>"));

    Ok(())
}

#[test]
fn test_config_file_and_override() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("fixstem.json");
    fs::write(&config, r#"{ "stemmlength": 2 }"#)?;

    let stemmer = build_stemmer(&parse(&["-c", config.to_str().unwrap()]))?;
    assert_eq!(stemmer.stem_length(), 2);

    let stemmer = build_stemmer(&parse(&[
        "-c",
        config.to_str().unwrap(),
        "-stemmlength",
        "6",
    ]))?;
    assert_eq!(stemmer.options(), vec!["-stemmlength", "6"]);

    Ok(())
}

#[test]
fn test_malformed_length_aborts() {
    let result = execute_command(parse(&["-stemmlength", "seven", "--show-options"]));
    assert!(matches!(result, Err(FixStemError::Parse(_))));
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");
    let output = temp_dir.path().join("out.txt");

    let result = execute_command(parse(&[
        "-i",
        missing.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]));
    assert!(matches!(result, Err(FixStemError::Io(_))));
}

#[test]
fn test_invalid_utf8_input() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("output.txt");
    let json = temp_dir.path().join("output.json");
    fs::write(&input, b"information \xff caf\nretrieval\n")?;

    execute_command(parse(&[
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]))?;
    assert_eq!(
        fs::read_to_string(&output)?,
        "informa \u{FFFD} caf\nretriev\n"
    );

    execute_command(parse(&[
        "-f",
        "json",
        "-i",
        input.to_str().unwrap(),
        "-o",
        json.to_str().unwrap(),
    ]))?;
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json)?)?;
    assert_eq!(value["words"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["words"][2]["stem"], "retriev");

    Ok(())
}

