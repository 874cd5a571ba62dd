/*!
 * End-to-end corpus build tests
 */

use anyhow::Result;
use std::fs;
use poem_corpus::errors::CorpusError;
use poem_corpus::{CorpusBuilder, PoemRecord};
use crate::common::{self, BracketTransliterator, FailingTransliterator};

/// Test the documented two-file example in the basic variant
#[test]
fn test_run_withTwoPoems_shouldWriteBasicCorpus() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[
        ("a.txt", "line one\n\nline two\n"),
        ("b.txt", "only line\n"),
    ])?;
    let output = temp_dir.path().join("poems_output.json");

    let mut builder = CorpusBuilder::new(common::test_config(&dir, &output, ""));
    let report = builder.run()?;

    assert_eq!(report.records.len(), 2);
    assert!(report.skipped.is_empty());

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    let expected: serde_json::Value = serde_json::from_str(
        r#"[{"id":1,"title":"a","lines":["line one","","line two"],"tags":[]},{"id":2,"title":"b","lines":["only line"],"tags":[]}]"#,
    )?;
    assert_eq!(written, expected);
    Ok(())
}

/// Test the exact bytes of the pretty-printed output
#[test]
fn test_run_withDevanagariPoem_shouldWriteIndentedLiteralUtf8() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[("दिल.txt", "मन की बात\n")])?;
    let output = temp_dir.path().join("out.json");

    CorpusBuilder::new(common::test_config(&dir, &output, ".txt")).run()?;

    let expected = "[\n  {\n    \"id\": 1,\n    \"title\": \"दिल\",\n    \"lines\": [\n      \"मन की बात\"\n    ],\n    \"tags\": []\n  }\n]";
    assert_eq!(fs::read_to_string(&output)?, expected);
    Ok(())
}

/// Test that ids run 1..N in filename order
#[test]
fn test_build_withManyPoems_shouldAssignSequentialIdsInNameOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[
        ("c.txt", "c"),
        ("a.txt", "a"),
        ("b.txt", "b"),
        ("d.md", "ignored"),
    ])?;
    let output = temp_dir.path().join("out.json");

    let report = CorpusBuilder::new(common::test_config(&dir, &output, ".txt")).build()?;

    let ids: Vec<u64> = report.records.iter().map(|r| r.id).collect();
    let titles: Vec<&str> = report.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(titles, vec!["a", "b", "c"]);
    assert!(!output.exists(), "build alone must not write output");
    Ok(())
}

/// Test that an unreadable file is skipped without leaving an id gap
#[test]
fn test_build_withUnreadableFile_shouldSkipItWithoutIdGap() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[
        ("a.txt", "first"),
        ("c.txt", "third"),
    ])?;
    fs::write(dir.join("b.txt"), [0xc3, 0x28, 0x0a])?;
    let output = temp_dir.path().join("out.json");

    let mut builder = CorpusBuilder::new(common::test_config(&dir, &output, ".txt"));
    let report = builder.run()?;

    let summary: Vec<(u64, &str)> = report.records.iter().map(|r| (r.id, r.title.as_str())).collect();
    assert_eq!(summary, vec![(1, "a"), (2, "c")]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].filename, "b.txt");
    assert!(output.exists());
    Ok(())
}

/// Test that a missing input directory stops the run before writing
#[test]
fn test_run_withMissingInputDir_shouldFailAndWriteNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("poems");
    let output = temp_dir.path().join("out.json");

    let result = CorpusBuilder::new(common::test_config(&missing, &output, ".txt")).run();

    assert!(matches!(result, Err(CorpusError::InputDirNotFound(_))));
    assert!(!output.exists());
    Ok(())
}

/// Test that an unwritable output path is fatal and leaves no file behind
#[test]
fn test_run_withUnwritableOutput_shouldFailAfterBuilding() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[("a.txt", "a")])?;
    let output = temp_dir.path().join("no_such_dir").join("out.json");

    let result = CorpusBuilder::new(common::test_config(&dir, &output, ".txt")).run();

    match result {
        Err(err @ CorpusError::OutputWrite { .. }) => assert!(err.is_fatal()),
        other => panic!("expected OutputWrite error, got {:?}", other.map(|r| r.records.len())),
    }
    assert!(!output.exists());
    Ok(())
}

/// Test that an empty directory produces an empty array
#[test]
fn test_run_withEmptyDir_shouldWriteEmptyArray() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[])?;
    let output = temp_dir.path().join("out.json");

    CorpusBuilder::new(common::test_config(&dir, &output, ".txt")).run()?;

    assert_eq!(fs::read_to_string(&output)?, "[]");
    Ok(())
}

/// Test that two runs over the same input give byte-identical output
#[test]
fn test_run_twice_shouldProduceIdenticalBytes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[
        ("पहला.txt", "नमस्ते दुनिया\n\nफिर मिलेंगे\n"),
        ("second.txt", "plain text\n"),
    ])?;
    let output = temp_dir.path().join("out.json");

    let mut config = common::test_config(&dir, &output, ".txt");
    config.enable_transliteration = true;

    CorpusBuilder::new(config.clone()).run()?;
    let first = fs::read(&output)?;
    CorpusBuilder::new(config).run()?;
    let second = fs::read(&output)?;

    assert_eq!(first, second);
    Ok(())
}

/// Test the extended variant with a deterministic converter
#[test]
fn test_build_withTransliterationEnabled_shouldFillExtendedFields() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[("song.txt", "la la\n   \nlo\n")])?;
    let output = temp_dir.path().join("out.json");

    let mut config = common::test_config(&dir, &output, ".txt");
    config.enable_transliteration = true;
    let mut builder = CorpusBuilder::with_transliterator(config, Box::new(BracketTransliterator));
    let report = builder.build()?;

    let record = &report.records[0];
    assert_eq!(record.lines, vec!["la la", "", "lo"]);
    assert_eq!(record.romanized_title.as_deref(), Some("[song]"));
    assert_eq!(record.romanized_lines, Some(vec!["[la la]".to_string(), String::new(), "[lo]".to_string()]));
    assert_eq!(record.translated_lines, Some(vec![String::new(); 3]));
    assert!(report.records.iter().all(PoemRecord::is_aligned));
    Ok(())
}

/// Test that converter failures never fail the run
#[test]
fn test_run_withFailingConverter_shouldKeepOriginalTextAndSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[("गीत.txt", "पहली पंक्ति\n")])?;
    let output = temp_dir.path().join("out.json");

    let mut config = common::test_config(&dir, &output, ".txt");
    config.enable_transliteration = true;
    let mut builder = CorpusBuilder::with_transliterator(config, Box::new(FailingTransliterator));
    let report = builder.run()?;

    let record = &report.records[0];
    assert_eq!(record.romanized_title.as_deref(), Some("गीत"));
    assert_eq!(record.romanized_lines, Some(vec!["पहली पंक्ति".to_string()]));

    let written: Vec<PoemRecord> = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(written, report.records);
    Ok(())
}

/// Test that the basic variant ignores the converter entirely
#[test]
fn test_build_withTransliterationDisabled_shouldOmitExtendedFields() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_poem_dir(temp_dir.path(), &[("a.txt", "x")])?;
    let output = temp_dir.path().join("out.json");

    let mut builder = CorpusBuilder::with_transliterator(
        common::test_config(&dir, &output, ".txt"),
        Box::new(BracketTransliterator),
    );
    let report = builder.build()?;

    assert!(report.records[0].romanized_lines.is_none());
    let json = serde_json::to_string(&report.records[0])?;
    assert!(!json.contains("romanized"));
    assert!(!json.contains("translated"));
    Ok(())
}
