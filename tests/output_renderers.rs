use memtree::cli::{Args, OutputFormat};
use memtree::output::{csv, json, terminal};
use memtree::sample;
use std::fs;
use tempfile::TempDir;

fn args(format: OutputFormat, output: Option<String>, human: bool) -> Args {
    Args {
        format,
        output,
        human,
        verbose: 0,
    }
}

#[test]
fn test_terminal_output_matches_demo() {
    let sample = sample::build().expect("Failed to build sample");
    let mut buf = Vec::new();

    terminal::render(
        &sample.tree,
        &sample.link,
        &args(OutputFormat::Text, None, false),
        &mut buf,
    )
    .expect("Failed to render");

    let expected = "100\n\
                    2\n\
                    /\n\
                    |-bin\n\
                    |-home\n  \
                    |_tim\n    \
                    |_info.txt 100\n    \
                    |_data.in 0\n    \
                    |_data\n\
                    100\n\
                    3\n";
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn test_terminal_human_sizes() {
    let sample = sample::build().expect("Failed to build sample");
    let mut buf = Vec::new();

    terminal::render(
        &sample.tree,
        &sample.link,
        &args(OutputFormat::Text, None, true),
        &mut buf,
    )
    .expect("Failed to render");

    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("100 B\n2\n/\n"));
    assert!(text.contains("|_data.in 0 B\n"));
}

#[test]
fn test_csv_renderer_writes_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tree.csv");
    let sample = sample::build().expect("Failed to build sample");
    let entries = sample.tree.entries(sample.tree.root()).unwrap();

    csv::render(
        &entries,
        &args(OutputFormat::Csv, Some(path.display().to_string()), false),
    )
    .expect("Failed to write CSV");

    let written = fs::read_to_string(&path).expect("Failed to read CSV");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "entry_type,path,size,items");
    assert_eq!(lines[1], "dir,/bin,0,0");
    assert_eq!(lines[2], "dir,/home,100,1");
    assert_eq!(lines[4], "file,/home/tim/info.txt,100,");
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_json_renderer_writes_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tree.json");
    let sample = sample::build().expect("Failed to build sample");
    let entries = sample.tree.entries(sample.tree.root()).unwrap();

    json::render(
        &entries,
        &args(OutputFormat::Json, Some(path.display().to_string()), false),
    )
    .expect("Failed to write JSON");

    let written = fs::read_to_string(&path).expect("Failed to read JSON");
    let value: serde_json::Value = serde_json::from_str(&written).expect("invalid JSON");
    let array = value.as_array().expect("expected an array");
    assert_eq!(array.len(), 6);
    assert_eq!(array[2]["path"], "/home/tim");
    assert_eq!(array[2]["items"], 3);
}
