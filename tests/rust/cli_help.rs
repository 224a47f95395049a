use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_prints_help() {
    let mut cmd = Command::cargo_bin("addrspan").expect("binary not found");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("addrspan"))
        .stdout(predicate::str::contains("ips"))
        .stdout(predicate::str::contains("deps"));
}
