use std::fs;
use std::path::Path;

use assert_cmd::Command;
use filetime::FileTime;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn codepicker() -> Command {
    Command::cargo_bin("codepicker").unwrap()
}

const CONFIG: &str = r#"
excluded_dirs = ["test"]
file_extensions = ["js"]
special_dirs = ["app", "lib"]
"#;

fn fixture() -> (TempDir, TempDir, std::path::PathBuf) {
    let input = TempDir::new().unwrap();
    let out_parent = TempDir::new().unwrap();
    write_file(input.path(), "app/a.js", "x=1;\n\n");
    write_file(input.path(), "lib/b.js", "y=2;");
    write_file(input.path(), "test/t.js", "skipped\n");
    write_file(input.path(), "codepicker.config.toml", CONFIG);
    let config = input.path().join("codepicker.config.toml");
    (input, out_parent, config)
}

#[test]
fn end_to_end_run_writes_aggregates_and_report() {
    let (input, out_parent, config) = fixture();
    let output = out_parent.path().join("out");

    codepicker()
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files Processed: 2"));

    // Blank line stripped from the content, block trailing newline kept.
    let app = fs::read_to_string(output.join("app.txt")).unwrap();
    assert_eq!(app, "=== FILE BOUNDARY ====\n// File path: app/a.js\nx=1;\n\n");

    let lib = fs::read_to_string(output.join("lib.txt")).unwrap();
    assert_eq!(lib, "=== FILE BOUNDARY ====\n// File path: lib/b.js\ny=2;\n");

    let report = fs::read_to_string(output.join("token_info.txt")).unwrap();
    assert!(report.starts_with("Total Tokens: "));
    assert!(report.contains("app/a.js: "));
    assert!(report.contains("lib/b.js: "));
    assert!(!report.contains("test/t.js"));
}

#[test]
fn second_run_without_force_skips_unchanged_files() {
    let (input, out_parent, config) = fixture();
    let output = out_parent.path().join("out");

    let run = |force: bool| {
        let mut cmd = codepicker();
        cmd.arg("--input")
            .arg(input.path())
            .arg("--output")
            .arg(&output)
            .arg("--config")
            .arg(&config);
        if force {
            cmd.arg("--force");
        }
        cmd.assert().success();
    };

    run(false);
    let target = output.join("app.txt");
    let before = fs::read_to_string(&target).unwrap();
    let stale = FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_mtime(&target, stale).unwrap();

    run(false);
    assert_eq!(fs::read_to_string(&target).unwrap(), before);
    let mtime = FileTime::from_last_modification_time(&fs::metadata(&target).unwrap());
    assert_eq!(mtime, stale, "unchanged file must not be rewritten");

    run(true);
    let mtime = FileTime::from_last_modification_time(&fs::metadata(&target).unwrap());
    assert_ne!(mtime, stale, "--force must copy regardless of size match");
}

#[test]
fn project_local_config_is_discovered() {
    let input = TempDir::new().unwrap();
    let out_parent = TempDir::new().unwrap();
    let output = out_parent.path().join("out");
    write_file(input.path(), "src/m.rs", "fn main() {}\n");
    write_file(
        input.path(),
        ".codepicker.toml",
        "file_extensions = [\"rs\"]\nspecial_dirs = [\"src\"]\nexcluded_dirs = []\n",
    );

    codepicker()
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let src = fs::read_to_string(output.join("src.txt")).unwrap();
    assert!(src.contains("// File path: src/m.rs"));
}

#[test]
fn malformed_config_file_is_fatal() {
    let (input, out_parent, _) = fixture();
    let bad = input.path().join("bad.toml");
    fs::write(&bad, "file_extensions = not-a-list").unwrap();

    codepicker()
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(out_parent.path())
        .arg("--config")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed config file"));
}

#[test]
fn missing_input_directory_is_fatal() {
    let out_parent = TempDir::new().unwrap();

    codepicker()
        .args(["--input", "/nonexistent/codepicker-input"])
        .arg("--output")
        .arg(out_parent.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read directory"));
}
