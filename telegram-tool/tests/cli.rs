use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const REQUEST: &str = "###00050WMS  PLC1 00005REQ_0000001 AREA1AREA2*****";

fn tool() -> Command {
    Command::cargo_bin("telegram-tool").unwrap()
}

fn header_flags(cmd: &mut Command) -> &mut Command {
    cmd.args([
        "--sender", "WMS", "--receiver", "PLC1", "--sequence", "5", "--length", "50",
    ])
}

#[test]
fn decodes_movement_request_to_json() {
    let mut cmd = tool();
    header_flags(cmd.args(["--telegram", REQUEST]))
        .assert()
        .success()
        .stdout(predicate::str::contains("MovementRequest"))
        .stdout(predicate::str::contains("0000001"))
        .stdout(predicate::str::contains("AREA2"));
}

#[test]
fn reply_flag_prints_encoded_reply_telegram() {
    let mut cmd = tool();
    header_flags(cmd.args(["--telegram", REQUEST, "--reply"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("###00067PLC1 WMS  00006RES_0000001 AREA1AREA2"));
}

#[test]
fn known_targets_flag_turns_reply_into_rejection() {
    let mut cmd = tool();
    header_flags(cmd.args([
        "--telegram",
        REQUEST,
        "--reply",
        "--known-targets",
        "AREA7,AREA9",
    ]))
    .assert()
    .success()
    .stdout(predicate::str::contains("0404"));
}

#[test]
fn unknown_type_is_rejected_with_nonzero_exit() {
    let raw = "###00050WMS  PLC1 00005XXX_0000001 AREA1AREA2*****";
    let mut cmd = tool();
    header_flags(cmd.args(["--telegram", raw]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown message type"))
        .stderr(predicate::str::contains("XXX_"));
}

#[test]
fn empty_telegram_is_skipped() {
    let mut cmd = tool();
    header_flags(cmd.args(["--telegram", ""]))
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIPPED"));
}

#[test]
fn reads_telegram_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{REQUEST}").unwrap();

    let mut cmd = tool();
    header_flags(cmd.args(["--telegram-file"]).arg(file.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("MovementRequest"));
}

#[test]
fn telegram_and_file_are_mutually_exclusive() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{REQUEST}").unwrap();

    let mut cmd = tool();
    header_flags(cmd.args(["--telegram", REQUEST, "--telegram-file"]).arg(file.path()))
        .assert()
        .failure();
}
