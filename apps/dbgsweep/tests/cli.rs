use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn setup_test_directory() -> tempfile::TempDir {
    let dir = tempdir().unwrap();

    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("src/app.js"),
        "const x = 1;\nconsole.log(\"debugging\", x);\ndebugger;\n// console.log(\"commented out\")\nexport default x;\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("src/clean.ts"),
        "export const add = (a: number, b: number) => a + b;\n",
    )
    .unwrap();

    // Dependency directories must never be scanned
    fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
    fs::write(dir.path().join("node_modules/pkg/index.js"), "console.log('vendored');\n").unwrap();

    dir
}

#[test]
fn test_finds_debug_statements() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("dbgsweep").unwrap();
    cmd.arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("app.js"))
        .stdout(predicate::str::contains("console.log"))
        .stdout(predicate::str::contains("debugger"))
        .stdout(predicate::str::contains("2:1"))
        .stdout(predicate::str::contains("node_modules").not());
}

#[test]
fn test_ci_mode_fails_on_matches() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("dbgsweep").unwrap();
    cmd.arg(dir.path()).arg("--ci").assert().code(1);
}

#[test]
fn test_ci_mode_passes_on_clean_tree() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("clean.js"), "const a = 1;\n").unwrap();

    let mut cmd = Command::cargo_bin("dbgsweep").unwrap();
    cmd.arg(dir.path())
        .arg("--ci")
        .assert()
        .success()
        .stdout(predicate::str::contains("No debug statements found"));
}

#[test]
fn test_fix_rewrites_files_in_place() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("dbgsweep").unwrap();
    cmd.arg(dir.path()).arg("--fix").assert().success();

    let fixed = fs::read_to_string(dir.path().join("src/app.js")).unwrap();
    assert!(!fixed.contains("console.log(\"debugging\""));
    assert!(!fixed.contains("debugger;"));
    // Live code and comments survive
    assert!(fixed.contains("const x = 1;"));
    assert!(fixed.contains("export default x;"));
    assert!(fixed.contains("// console.log(\"commented out\")"));

    // Untouched files keep their contents
    let clean = fs::read_to_string(dir.path().join("src/clean.ts")).unwrap();
    assert!(clean.contains("a + b"));
}

#[test]
fn test_fix_is_idempotent_end_to_end() {
    let dir = setup_test_directory();

    Command::cargo_bin("dbgsweep").unwrap().arg(dir.path()).arg("--fix").assert().success();
    let once = fs::read_to_string(dir.path().join("src/app.js")).unwrap();

    Command::cargo_bin("dbgsweep").unwrap().arg(dir.path()).arg("--fix").assert().success();
    let twice = fs::read_to_string(dir.path().join("src/app.js")).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_keep_excludes_methods() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("log.js"), "console.error(\"kept\");\n").unwrap();

    let mut cmd = Command::cargo_bin("dbgsweep").unwrap();
    cmd.arg(dir.path())
        .arg("--keep")
        .arg("error")
        .arg("--ci")
        .assert()
        .success()
        .stdout(predicate::str::contains("No debug statements found"));

    // The file is untouched even with --fix
    let mut cmd = Command::cargo_bin("dbgsweep").unwrap();
    cmd.arg(dir.path()).arg("--keep").arg("error").arg("--fix").assert().success();
    let content = fs::read_to_string(dir.path().join("log.js")).unwrap();
    assert_eq!(content, "console.error(\"kept\");\n");
}

#[test]
fn test_unknown_keep_name_is_an_error() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("dbgsweep").unwrap();
    cmd.arg(dir.path())
        .arg("--keep")
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown console method"));
}

#[test]
fn test_json_report() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("dbgsweep").unwrap();
    let output = cmd.arg(dir.path()).arg("--json").output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["total_matches"], 2);
    assert_eq!(report["summary"]["files_with_matches"], 1);

    let files = report["files"].as_array().unwrap();
    let app = files
        .iter()
        .find(|f| f["file"].as_str().unwrap_or_default().ends_with("app.js"))
        .unwrap();
    let kinds: Vec<&str> =
        app["matches"].as_array().unwrap().iter().filter_map(|m| m["kind"].as_str()).collect();
    assert_eq!(kinds, vec!["console.log", "debugger"]);
}

#[test]
fn test_extension_filter() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "console.log(1);\n").unwrap();
    fs::write(dir.path().join("b.ts"), "console.log(2);\n").unwrap();

    let mut cmd = Command::cargo_bin("dbgsweep").unwrap();
    cmd.arg(dir.path())
        .arg("--ext")
        .arg("ts")
        .assert()
        .success()
        .stdout(predicate::str::contains("b.ts"))
        .stdout(predicate::str::contains("a.js").not());
}
