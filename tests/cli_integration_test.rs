use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn fizzbuzz() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fizzbuzz"))
}

#[test]
fn test_default_run_prints_one_hundred_lines() {
    let output = fizzbuzz().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 100);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[2], "Fizz");
    assert_eq!(lines[4], "Buzz");
    assert_eq!(lines[14], "FizzBuzz");
    assert_eq!(lines[99], "Buzz");
}

#[test]
fn test_limit_argument() {
    let output = fizzbuzz().args(["--limit", "15"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n"
    );
}

#[test]
fn test_json_format() {
    let output = fizzbuzz()
        .args(["-n", "5", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4], serde_json::json!({"n": 5, "output": "Buzz"}));
}

#[test]
fn test_custom_rules_from_config_file() {
    let mut config = NamedTempFile::new().unwrap();
    config
        .write_all(
            br#"
[game]
limit = 14
format = "csv"

[[rules]]
divisor = 2
label = "Fuzz"

[[rules]]
divisor = 7
label = "Bazz"
"#,
        )
        .unwrap();

    let output = fizzbuzz()
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[0], "n,output");
    assert_eq!(lines[1], "1,1");
    assert_eq!(lines[2], "2,Fuzz");
    assert_eq!(lines[7], "7,Bazz");
    assert_eq!(lines[14], "14,FuzzBazz");
}

#[test]
fn test_zero_limit_fails() {
    let output = fizzbuzz().args(["--limit", "0"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_config_file_fails() {
    let output = fizzbuzz()
        .args(["--config", "/definitely/not/here/fizzbuzz.toml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_multiline_label_in_config_fails() {
    let mut config = NamedTempFile::new().unwrap();
    config
        .write_all(b"[[rules]]\ndivisor = 3\nlabel = \"Fi\\nzz\"\n")
        .unwrap();

    let output = fizzbuzz()
        .args(["--limit", "6", "--config"])
        .arg(config.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
