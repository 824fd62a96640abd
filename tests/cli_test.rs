// Tests for the py2c binary

use assert_cmd::Command;
use std::fs;

fn py2c() -> Command {
    let mut cmd = Command::cargo_bin("py2c").expect("binary not built");
    cmd.env_remove("PY2C_LOG");
    cmd
}

#[test]
fn test_translates_stdin() {
    let output = py2c()
        .arg("-")
        .write_stdin("x = 1\nx = x + 1\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "int x = 1; x = x + 1;\n"
    );
}

#[test]
fn test_translates_file() {
    let dir = std::env::temp_dir().join(format!("py2c-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("prog.py");
    fs::write(&path, "def f(a): return a * 2\n").unwrap();

    let output = py2c().arg(&path).output().unwrap();
    fs::remove_dir_all(&dir).ok();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "int f(int a) { return a * 2; };\n"
    );
}

#[test]
fn test_compile_error_exit_code() {
    let output = py2c().arg("-").write_stdin("1 ? 2").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unrecognized token '?'"));
}

#[test]
fn test_missing_input_is_usage_error() {
    let output = py2c().output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));
}

#[test]
fn test_missing_file() {
    let output = py2c().arg("does-not-exist.py").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.py"));
}

#[test]
fn test_version_flag() {
    py2c().arg("--version").assert().success().stdout("py2c 0.1.0\n");
}
