use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_annotext-cli") {
        return PathBuf::from(path);
    }
    if let Some(path) = env::var_os("CARGO_BIN_EXE_annotext_cli") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("annotext-cli");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "annotext_cli_{}_{}_{}.txt",
        name,
        now.as_secs(),
        now.subsec_nanos()
    );
    path.push(file_name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn render_wraps_fragment_with_assets() {
    let input = temp_file("render", "Paragraph.\n");
    let output = Command::new(bin_path())
        .args([input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<!DOCTYPE html>"), "expected HTML wrapper");
    assert!(stdout.contains("<style>"), "expected inline CSS");
    assert!(stdout.contains("<p>Paragraph.</p>"));
}

#[test]
fn raw_outputs_fragment_html() {
    let input = temp_file("raw", "Paragraph.\n");
    let output = Command::new(bin_path())
        .args(["--raw", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("<!DOCTYPE html>"), "expected raw HTML");
    assert!(stdout.contains("<p>Paragraph.</p>"));
}

#[test]
fn verbatim_skips_the_pipeline() {
    let input = temp_file("verbatim", "**kept literal**\n  spaced line\n");
    let output = Command::new(bin_path())
        .args(["--raw", "--verbatim", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Annotext-verbatim"));
    assert!(stdout.contains("**kept literal**\n  spaced line"));
    assert!(!stdout.contains("<strong>"));
}

#[test]
fn confidence_pretty_reports_on_stderr() {
    let input = temp_file(
        "conf_pretty",
        "**Confidence Level:** High (82%)\n\nBody text\n",
    );
    let output = Command::new(bin_path())
        .args(["--raw", "--confidence", "pretty", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("confidence: High (82%)"),
        "unexpected stderr: {}",
        stderr
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Confidence Level"));
}

#[test]
fn confidence_json_reports_level_and_rank() {
    let input = temp_file("conf_json", "Confidence Level: Medium\n\nBody\n");
    let output = Command::new(bin_path())
        .args(["--raw", "--confidence", "json", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"level\": \"Medium\""), "stderr: {}", stderr);
    assert!(stderr.contains("\"percentage\": null"), "stderr: {}", stderr);
    assert!(stderr.contains("\"rank\": \"medium\""), "stderr: {}", stderr);
}

#[test]
fn confidence_without_annotation_reports_none() {
    let input = temp_file("conf_none", "Just a plain comment\n");
    let output = Command::new(bin_path())
        .args(["--raw", "--confidence", "json", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("null"), "stderr: {}", stderr);
}

#[test]
fn theme_selection_is_accepted() {
    let input = temp_file("theme", "Paragraph.\n");
    let output = Command::new(bin_path())
        .args(["--theme", "dark", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<!DOCTYPE html>"), "expected HTML wrapper");
}

#[test]
fn unknown_mode_argument_exits_with_usage() {
    let output = Command::new(bin_path())
        .args(["--confidence", "yaml"])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(2));
}
