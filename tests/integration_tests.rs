//! Integration tests for exaddr.
//!
//! These tests run the compiled binary end to end against temporary input
//! files and check stdout, stderr, exit status and output files.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::str;
use tempfile::NamedTempFile;

/// Helper to get the path to the compiled binary
fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_exaddr"))
}

/// Helper to create a temporary input file with test content
fn create_input(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

const SAMPLE_LOG: &str = r#"2024-09-17T12:34:56Z GET https://api.example.com/v1/users from 10.0.0.1
2024-09-17T12:34:57Z GET https://www.example.com/ from 192.168.1.20
2024-09-17T12:34:58Z redirect to cdn.test.org (203.0.113.7)
2024-09-17T12:35:01Z GET https://api.example.com/v1/orders from 10.0.0.1
2024-09-17T12:35:02Z lookup mail.example.org failed, upstream 999.999.999.999
"#;

/// Test hostname extraction to stdout
#[test]
fn test_hosts_to_stdout() {
    let input = create_input(SAMPLE_LOG);
    let output = run(&[
        "-file",
        input.path().to_str().unwrap(),
        "-d",
        "example.com",
    ]);

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert_eq!(stdout, "api.example.com\nwww.example.com\n");
}

/// Test several suffixes merged into one sorted list
#[test]
fn test_multiple_domains() {
    let input = create_input(SAMPLE_LOG);
    let output = run(&[
        "--file",
        input.path().to_str().unwrap(),
        "-d",
        "example.com, test.org,example.org",
    ]);

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "api.example.com",
            "cdn.test.org",
            "mail.example.org",
            "www.example.com"
        ]
    );
}

/// Test IP extraction keeps lexicographic order and skips range checks
#[test]
fn test_ips_to_stdout() {
    let input = create_input(SAMPLE_LOG);
    let output = run(&["-file", input.path().to_str().unwrap(), "-ip"]);

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert_eq!(
        stdout,
        "10.0.0.1\n192.168.1.20\n203.0.113.7\n999.999.999.999\n"
    );
}

/// Test that -d is ignored entirely in IP mode, even when invalid
#[test]
fn test_ip_mode_ignores_domains() {
    let input = create_input("server at 10.0.0.1 and 10.0.0.1 again, also 256.1.1.1");
    let output = run(&[
        "-file",
        input.path().to_str().unwrap(),
        "-ip",
        "-d",
        "not a domain!",
    ]);

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert_eq!(stdout, "10.0.0.1\n256.1.1.1\n");
}

/// Test file output: joined by newline, no trailing newline, overwritten
#[test]
fn test_hosts_to_file() {
    let input = create_input(SAMPLE_LOG);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("hosts.txt");
    fs::write(&out, "old contents\nthat should disappear\n").unwrap();

    let output = run(&[
        "-file",
        input.path().to_str().unwrap(),
        "-d",
        "example.com",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "File mode should not print results");
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "api.example.com\nwww.example.com"
    );
}

/// Test that an empty result still creates an empty output file
#[test]
fn test_empty_result_file() {
    let input = create_input("no addresses here");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("ips.txt");

    let output = run(&[
        "-file",
        input.path().to_str().unwrap(),
        "-ip",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}

/// Test missing -file flag
#[test]
fn test_missing_file_flag() {
    let output = run(&["-d", "example.com"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(
        stderr.contains("-file flag is required"),
        "Should report missing -file: {}",
        stderr
    );
}

/// Test missing -d flag outside IP mode
#[test]
fn test_missing_domains_flag() {
    let input = create_input(SAMPLE_LOG);
    let output = run(&["-file", input.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(
        stderr.contains("-d flag is required"),
        "Should report missing -d: {}",
        stderr
    );
}

/// Test nonexistent input file
#[test]
fn test_nonexistent_input() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let out = dir.path().join("out.txt");

    let output = run(&[
        "-file",
        missing.to_str().unwrap(),
        "-ip",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists(), "No output file should be created");
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(
        stderr.contains("Error reading file"),
        "Should report read failure: {}",
        stderr
    );
}

/// Test invalid domain syntax aborts before extraction
#[test]
fn test_invalid_domain() {
    let input = create_input(SAMPLE_LOG);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");

    let output = run(&[
        "-file",
        input.path().to_str().unwrap(),
        "-d",
        "example.com,not a domain!",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!out.exists(), "No output file should be created");
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(
        stderr.contains("Invalid domain provided: not a domain!"),
        "Should name the invalid domain: {}",
        stderr
    );
}

/// Test unwritable output target
#[test]
fn test_unwritable_output() {
    let input = create_input(SAMPLE_LOG);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no-such-dir").join("out.txt");

    let output = run(&[
        "-file",
        input.path().to_str().unwrap(),
        "-ip",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(
        stderr.contains("Error writing to file"),
        "Should report write failure: {}",
        stderr
    );
}

/// Test verbose output goes to stderr and leaves stdout clean
#[test]
fn test_verbose_diagnostics_on_stderr() {
    let input = create_input(SAMPLE_LOG);
    let output = run(&[
        "-file",
        input.path().to_str().unwrap(),
        "-ip",
        "-verbose=4",
    ]);

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert!(stdout.lines().all(|l| !l.contains("scanned")));
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(
        stderr.contains("scanned for IPv4 addresses"),
        "Debug level should log scan summary: {}",
        stderr
    );
}

/// Test Go-style explicit bool and dash-prefixed values
#[test]
fn test_ip_false_selects_host_mode() {
    let input = create_input("api.example.com at café10.0.0.1");
    let output = run(&[
        "-file",
        input.path().to_str().unwrap(),
        "-ip=false",
        "-d",
        "example.com",
    ]);

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert_eq!(stdout, "api.example.com\n");
}

/// Test addresses next to non-ASCII letters are still extracted
#[test]
fn test_ips_next_to_non_ascii_text() {
    let input = create_input("地址10.0.0.1，延迟 3µs from 10.0.0.2µs");
    let output = run(&["-file", input.path().to_str().unwrap(), "-ip=true"]);

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert_eq!(stdout, "10.0.0.1\n10.0.0.2\n");
}
