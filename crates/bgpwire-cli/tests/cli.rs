use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bgpwire"))
}

// OPEN with AS 65000, hold time 180, BGP id 10.0.0.1, and three
// optional parameters: capabilities (4-byte AS 65536), multi-label
// marker, one unknown.
const OPEN_HEX: &str = "002d0104fde800b40a00000110\
02064104000100000800\
0904deadbeef";

fn write_fixture(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn help_lists_decode_subcommands() {
    cmd()
        .arg("decode")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("open").and(contains("local-block")).and(contains("msd")));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.bin");

    cmd()
        .arg("decode")
        .arg("open")
        .arg(missing)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn decodes_hex_open_to_json_report() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "open.hex", OPEN_HEX.as_bytes());

    let output = cmd()
        .arg("decode")
        .arg("open")
        .arg(&input)
        .arg("--hex-input")
        .output()
        .expect("run bgpwire");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("parse report");
    assert_eq!(report["report_version"], 1);
    assert_eq!(report["message"]["kind"], "open");
    assert_eq!(report["message"]["my_as"], 65000);
    assert_eq!(report["message"]["summary"]["bgp_id"], "10.0.0.1");
    assert_eq!(report["message"]["summary"]["four_byte_as"], 65536);
    assert_eq!(report["message"]["summary"]["multi_label"], true);
}

#[test]
fn writes_report_file_when_requested() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "msd.bin", &[0x01, 0x0a, 0x02, 0x08]);
    let report_path = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg("msd")
        .arg(&input)
        .arg("-o")
        .arg(&report_path)
        .assert()
        .success()
        .stderr(contains("report written"));

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report["message"]["kind"], "msd");
    assert_eq!(report["message"]["pairs"][0]["msd_type"], 1);
    assert_eq!(report["message"]["pairs"][1]["msd_value"], 8);
}

#[test]
fn odd_msd_buffer_fails_with_decode_error() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "odd.bin", &[0x01, 0x0a, 0x02]);

    cmd()
        .arg("decode")
        .arg("msd")
        .arg(&input)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("not a multiple of 2"));
}

#[test]
fn dump_hex_prints_traced_regions() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "block.bin", &[0x01, 0x00, 0x01, 0x02, 0xaa, 0xbb]);

    cmd()
        .arg("decode")
        .arg("local-block")
        .arg(&input)
        .arg("--dump-hex")
        .assert()
        .success()
        .stderr(contains("local-block.message: 01000102aabb"));
}

#[test]
fn rejects_bad_hex_input_with_hint() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "bad.hex", b"zz12");

    cmd()
        .arg("decode")
        .arg("open")
        .arg(&input)
        .arg("--hex-input")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("not valid hex"));
}
