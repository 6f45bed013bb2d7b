// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests for the `kommons` binary.

use assert_cmd::Command;
use predicates::prelude::*;

const RED_HELLO: &str = "\x1b[31mHello\x1b[0m World";

fn kommons() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kommons"))
}

#[test]
fn length_reads_stdin_and_ignores_trailing_newline() {
    kommons()
        .arg("length")
        .write_stdin(format!("{}\n", RED_HELLO))
        .assert()
        .success()
        .stdout("11\n");
}

#[test]
fn strip_from_input_flag() {
    kommons()
        .args(["strip", "--input", RED_HELLO])
        .assert()
        .success()
        .stdout("Hello World\n");
}

#[test]
fn slice_reopens_formatting() {
    kommons()
        .args(["slice", "2", "8"])
        .write_stdin(RED_HELLO)
        .assert()
        .success()
        .stdout("\x1b[31mllo\x1b[0m Wo\n");
}

#[test]
fn slice_out_of_bounds_fails() {
    kommons()
        .args(["slice", "0", "20"])
        .write_stdin(RED_HELLO)
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn char_at_prints_character() {
    kommons()
        .args(["char-at", "0"])
        .write_stdin(RED_HELLO)
        .assert()
        .success()
        .stdout("H\n");
}

#[test]
fn truncate_with_custom_marker() {
    kommons()
        .args(["truncate", "8", "--marker", "..."])
        .write_stdin("Hello World")
        .assert()
        .success()
        .stdout("Hello...\n");
}

#[test]
fn tokens_are_json() {
    kommons()
        .arg("tokens")
        .write_stdin(RED_HELLO)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display_length\": 5"));
}

#[test]
fn style_with_hex_color() {
    kommons()
        .args(["style", "logo", "--fg", "#d77757", "--bold"])
        .assert()
        .success()
        .stdout("\x1b[38;2;215;119;87;1mlogo\x1b[22;39m\n");
}

#[test]
fn style_rejects_unknown_color() {
    kommons()
        .args(["style", "x", "--fg", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    kommons()
        .args(["--verbose", "length", "--input", "abc"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("3\n")
        .stderr(predicate::str::contains("logging initialized"));
}
