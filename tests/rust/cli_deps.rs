use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn cli_deps_lists_locations_under_references() {
    let dir = tempdir().expect("create tempdir");
    let data = dir.path().join("doc.json");
    std::fs::write(
        &data,
        r#"{ "a": { "b": { "c": "10.0.0.0/24" } }, "x": 1 }"#,
    )
    .expect("write data");

    let mut cmd = Command::cargo_bin("addrspan").expect("binary not found");
    cmd.current_dir(dir.path())
        .args(["deps", "--data"])
        .arg(&data)
        .args(["--auto", "$.x", "$.a.b", "0"]);

    cmd.assert()
        .success()
        .stdout("$.a.b\n$.a.b.c\n$.x\n")
        .stderr(predicate::str::contains("[INFO]"))
        .stderr(predicate::str::contains("3 dependency location(s) found"));
}
