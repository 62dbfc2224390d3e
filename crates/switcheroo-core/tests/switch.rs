//! End-to-end runs against files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use switcheroo_core::{
    KeyTableOptions, SwitchConfig, SwitcherooError, TokenError, load_key_table, run_switch,
};
use tempfile::TempDir;

const KEYS: &str = "a\tb\nc\td\n";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn config(dir: &TempDir, keys: &Path, input: &Path) -> SwitchConfig {
    SwitchConfig::new(keys, "ACCESSION", input).with_output(dir.path().join("replacement.gbk"))
}

#[test]
fn replaces_accession_token() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", KEYS);
    let input = write(
        &dir,
        "input.gbk",
        "LOCUS       a   100 bp\nACCESSION   a\nVERSION     a.1\n//\n",
    );

    let outcome = run_switch(&config(&dir, &keys, &input)).unwrap();

    assert_eq!(outcome.key_entries, 2);
    assert_eq!(outcome.stats.lines_read, 4);
    assert_eq!(outcome.stats.lines_matched, 1);
    let output = fs::read_to_string(&outcome.output).unwrap();
    assert_eq!(
        output,
        "LOCUS       a   100 bp\nACCESSION b\nVERSION     a.1\n//\n"
    );
    assert_eq!(
        fs::read_to_string(&input).unwrap(),
        "LOCUS       a   100 bp\nACCESSION   a\nVERSION     a.1\n//\n"
    );
}

#[test]
fn line_without_known_key_fails() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", KEYS);
    let input = write(&dir, "input.gbk", "ACCESSION   zzz\n");

    let err = run_switch(&config(&dir, &keys, &input)).unwrap_err();

    assert!(matches!(
        err,
        SwitcherooError::Token {
            line: 1,
            source: TokenError::NoKeyToken { .. }
        }
    ));
    assert_eq!(
        err.to_string(),
        "cannot rewrite line 1: no token on feature line 'ACCESSION zzz' is a key in the key table"
    );
}

#[test]
fn line_with_two_keys_fails() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", KEYS);
    let input = write(&dir, "input.gbk", "ACCESSION   a c\n");

    let err = run_switch(&config(&dir, &keys, &input)).unwrap_err();

    match err {
        SwitcherooError::Token {
            source: TokenError::AmbiguousKeyTokens { keys, .. },
            ..
        } => assert_eq!(keys, vec!["a".to_string(), "c".to_string()]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn out_of_range_column_fails_before_output_is_created() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", KEYS);
    let input = write(&dir, "input.gbk", "ACCESSION   a\n");
    let config = config(&dir, &keys, &input)
        .with_table_options(KeyTableOptions::default().with_val_col(5));

    let err = run_switch(&config).unwrap_err();

    assert!(matches!(
        err,
        SwitcherooError::ColumnOutOfRange {
            row: 1,
            column: 5,
            width: 2,
            ..
        }
    ));
    assert!(!config.output.exists());
}

#[test]
fn header_only_table_with_out_of_range_column_fails() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", "old\tnew\n");
    let input = write(&dir, "input.gbk", "LOCUS x\n//\n");
    let config = config(&dir, &keys, &input).with_table_options(
        KeyTableOptions::default()
            .with_header(true)
            .with_val_col(7),
    );

    let err = run_switch(&config).unwrap_err();

    assert!(matches!(
        err,
        SwitcherooError::ColumnOutOfRange {
            row: 1,
            column: 7,
            width: 2,
            ..
        }
    ));
    assert!(!config.output.exists());
}

#[test]
fn empty_key_table_fails_before_output_is_created() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", "");
    let input = write(&dir, "input.gbk", "LOCUS x\n//\n");
    let config = config(&dir, &keys, &input)
        .with_table_options(KeyTableOptions::default().with_key_col(9));

    let err = run_switch(&config).unwrap_err();

    assert!(matches!(err, SwitcherooError::EmptyKeyTable { .. }));
    assert!(!config.output.exists());
}

#[test]
fn empty_input_produces_empty_output() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", KEYS);
    let input = write(&dir, "input.gbk", "");

    let outcome = run_switch(&config(&dir, &keys, &input)).unwrap();

    assert_eq!(outcome.stats.lines_read, 0);
    assert!(outcome.output.exists());
    assert_eq!(fs::read(&outcome.output).unwrap(), Vec::<u8>::new());
}

#[test]
fn missing_input_does_not_create_output() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", KEYS);
    let config = config(&dir, &keys, &dir.path().join("absent.gbk"));

    let err = run_switch(&config).unwrap_err();

    assert!(matches!(err, SwitcherooError::InputOpen { .. }));
    assert!(!config.output.exists());
}

#[test]
fn missing_key_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "input.gbk", "ACCESSION a\n");
    let config = config(&dir, &dir.path().join("absent.tsv"), &input);

    let err = run_switch(&config).unwrap_err();

    assert!(matches!(err, SwitcherooError::KeyTableRead { .. }));
    assert!(!config.output.exists());
}

#[test]
fn header_row_is_data_unless_flagged() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", "ACCESSION\tRENAMED\na\tb\n");

    let as_data = load_key_table(&keys, &KeyTableOptions::default()).unwrap();
    assert_eq!(as_data.get("ACCESSION"), Some("RENAMED"));

    let with_header =
        load_key_table(&keys, &KeyTableOptions::default().with_header(true)).unwrap();
    assert!(!with_header.contains_key("ACCESSION"));
    assert_eq!(with_header.len(), 1);
}

#[test]
fn rerunning_on_rewritten_output_fails() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", KEYS);
    let input = write(&dir, "input.gbk", "ACCESSION   a\n");
    let first = run_switch(&config(&dir, &keys, &input)).unwrap();

    let rerun = SwitchConfig::new(&keys, "ACCESSION", &first.output)
        .with_output(dir.path().join("second.gbk"));
    let err = run_switch(&rerun).unwrap_err();

    assert!(matches!(
        err,
        SwitcherooError::Token {
            source: TokenError::NoKeyToken { .. },
            ..
        }
    ));
}

#[test]
fn swapping_columns_restores_original_tokens() {
    let dir = TempDir::new().unwrap();
    let keys = write(&dir, "keys.tsv", KEYS);
    let input = write(
        &dir,
        "input.gbk",
        "LOCUS x\nACCESSION   c\tsecondary\n//\n",
    );
    let forward = run_switch(&config(&dir, &keys, &input)).unwrap();

    let reverse = SwitchConfig::new(&keys, "ACCESSION", &forward.output)
        .with_table_options(KeyTableOptions::default().with_key_col(1).with_val_col(0))
        .with_output(dir.path().join("restored.gbk"));
    let restored = run_switch(&reverse).unwrap();

    assert_eq!(
        fs::read_to_string(&restored.output).unwrap(),
        "LOCUS x\nACCESSION c secondary\n//\n"
    );
}
