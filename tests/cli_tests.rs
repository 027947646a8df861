use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const CLEAN: &str = "function foo() {\n  var a;\n  a = 1;\n}\n";
const LATE_VAR: &str = "function foo() {\n  g();\n  var a;\n}\n";

fn write_js(name: &str, code: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vars-on-top-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, code).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vars-on-top"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn no_arguments_is_a_usage_error() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("Usage:"));
}

#[test]
fn unknown_option_is_a_usage_error() {
    let clean = write_js("unknown_option.js", CLEAN);
    let out = run(&["--jsn", clean.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("Usage:"));
}

#[test]
fn clean_file_exits_zero() {
    let clean = write_js("clean.js", CLEAN);
    let out = run(&[clean.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).is_empty());
}

#[test]
fn violation_exits_one_with_rendered_line() {
    let bad = write_js("late_var.js", LATE_VAR);
    let path = bad.to_str().unwrap();
    let out = run(&[path]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout(&out).trim_end(),
        format!(
            "{}:1:1: All \"var\" declarations must be at the top of the function scope. [FunctionDeclaration]",
            path
        )
    );
}

#[test]
fn unreadable_file_does_not_stop_the_rest() {
    let bad = write_js("after_missing.js", LATE_VAR);
    let missing = bad.with_file_name("does_not_exist.js");
    let out = run(&[missing.to_str().unwrap(), bad.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("does_not_exist.js"));
    assert!(stdout(&out).contains("after_missing.js:1:1:"));
}

#[test]
fn json_output() {
    let clean = write_js("json_clean.js", CLEAN);
    let out = run(&["--json", clean.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).trim(), "[]");

    let bad = write_js("json_bad.js", LATE_VAR);
    let out = run(&["--json", bad.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v[0]["node"], "FunctionDeclaration");
    assert_eq!(v[0]["line"], 1);
}
