use std::process::Command;

use tempfile::TempDir;

fn housegen() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_housegen"));
    command.env_remove("HOUSEGEN_LOG");
    command
}

#[test]
fn zero_count_is_a_usage_error() {
    let output = housegen().arg("0").output().expect("run housegen");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn non_numeric_count_is_a_usage_error() {
    let output = housegen().arg("many").output().expect("run housegen");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_corpora_exit_with_runtime_error() {
    let temp = TempDir::new().expect("tempdir");
    let output = housegen()
        .current_dir(temp.path())
        .args(["--no-progress", "--data-dir", "absent", "--store-dir", "store", "3"])
        .output()
        .expect("run housegen");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("housegen error: failed to build seed index"), "{stderr}");
    assert!(!temp.path().join("store").join("database_2000.json").exists());
}
