//! Integration tests for the `bm` binary.
//!
//! These tests invoke the binary as a subprocess and check the exit code
//! and the trace written to stdout.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn bm() -> Command {
    Command::cargo_bin("bm").unwrap()
}

#[test]
fn demo_run_exits_0_with_empty_stderr() {
    bm().env_remove("RUST_LOG")
        .assert()
        .success()
        .code(0)
        .stderr(predicate::str::is_empty());
}

#[test]
fn trace_starts_with_empty_stack() {
    bm().assert()
        .success()
        .stdout(predicate::str::starts_with("Stack:\n  [empty]\nINST_PUSH\n"));
}

#[test]
fn trace_names_every_instruction() {
    let assert = bm().assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let names: Vec<_> = out.lines().filter(|l| l.starts_with("INST_")).collect();
    assert_eq!(
        names,
        vec![
            "INST_PUSH",
            "INST_PUSH",
            "INST_PLUS",
            "INST_PUSH",
            "INST_MINUS",
            "INST_PUSH",
            "INST_MULT",
            "INST_PUSH",
            "INST_DIV",
            "INST_HALT",
        ]
    );
}

#[test]
fn final_dump_shows_223() {
    bm().assert()
        .success()
        .stdout(predicate::str::ends_with("INST_HALT\nStack:\n  223\nStack:\n  223\n"));
}

#[test]
fn intermediate_results_are_dumped() {
    bm().assert()
        .success()
        .stdout(predicate::str::contains("INST_PLUS\nStack:\n  489\n"))
        .stdout(predicate::str::contains("INST_MINUS\nStack:\n  447\n"))
        .stdout(predicate::str::contains("INST_MULT\nStack:\n  894\n"));
}

#[test]
fn logging_does_not_touch_stdout() {
    bm().env("RUST_LOG", "trace")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Stack:\n  223\n"));
}
