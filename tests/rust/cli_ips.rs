use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn addrspan(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("addrspan").expect("binary not found");
    cmd.current_dir(dir);
    cmd
}

#[test]
fn cli_ips_single_address() {
    let dir = tempdir().expect("create tempdir");
    addrspan(dir.path())
        .args(["ips", "10.0.0.0/24", "5"])
        .assert()
        .success()
        .stdout("\"10.0.0.5\"\n");
}

#[test]
fn cli_ips_negative_index() {
    let dir = tempdir().expect("create tempdir");
    addrspan(dir.path())
        .args(["ips", "10.0.0.0/24", "-1"])
        .assert()
        .success()
        .stdout("\"10.0.0.255\"\n");
}

#[test]
fn cli_ips_range() {
    let dir = tempdir().expect("create tempdir");
    addrspan(dir.path())
        .args(["ips", "10.0.0.0/24", "0", "3"])
        .assert()
        .success()
        .stdout("[\"10.0.0.0\",\"10.0.0.1\",\"10.0.0.2\"]\n");
}

#[test]
fn cli_ips_bounds_error() {
    let dir = tempdir().expect("create tempdir");
    addrspan(dir.path())
        .args(["ips", "10.0.0.0/24", "250", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BoundsError"))
        .stderr(predicate::str::contains("would exceed size of block"));
}

#[test]
fn cli_ips_reads_references_from_data_file() {
    let dir = tempdir().expect("create tempdir");
    let data = dir.path().join("doc.json");
    std::fs::write(&data, r#"{ "meta": { "net": "172.16.0.0/12", "first": 4096 } }"#)
        .expect("write data");

    addrspan(dir.path())
        .args(["ips", "--data"])
        .arg(&data)
        .args(["$.meta.net", "$.meta.first", "2"])
        .assert()
        .success()
        .stdout("[\"172.16.16.0\",\"172.16.16.1\"]\n");
}

#[test]
fn cli_ips_bare_address_and_strict_flag() {
    let dir = tempdir().expect("create tempdir");
    addrspan(dir.path())
        .args(["ips", "0.0.0.0", "-1"])
        .assert()
        .success()
        .stdout("\"255.255.255.255\"\n");

    addrspan(dir.path())
        .args(["ips", "--strict", "0.0.0.0", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BoundsError"));
}

#[test]
fn cli_ips_strict_from_config_file() {
    let dir = tempdir().expect("create tempdir");
    std::fs::write(
        dir.path().join("addrspan.toml"),
        "[ips]\nstrict_bare_addresses = true\n",
    )
    .expect("write config");

    addrspan(dir.path())
        .args(["ips", "255.255.255.255", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("leaves the address space"));
}

#[test]
fn cli_ips_argument_count_error() {
    let dir = tempdir().expect("create tempdir");
    addrspan(dir.path())
        .args(["ips", "10.0.0.0/24"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ArgumentCountError"));
}

#[test]
fn cli_ips_debug_trace_closes_on_error() {
    let dir = tempdir().expect("create tempdir");
    addrspan(dir.path())
        .args(["--debug", "ips", "10.0.0.0/24", "300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("running (( ips ... )) operation at $."))
        .stderr(predicate::str::contains("done with (( ips ... )) operation at $."))
        .stderr(predicate::str::contains("exceeds size of block"));
}

#[test]
fn cli_ips_debug_trace_closes_on_success() {
    let dir = tempdir().expect("create tempdir");
    addrspan(dir.path())
        .args(["--debug", "ips", "10.0.0.0/24", "1"])
        .assert()
        .success()
        .stdout("\"10.0.0.1\"\n")
        .stderr(predicate::str::contains("done with (( ips ... )) operation at $."));
}
