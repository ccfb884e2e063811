// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! CLI integration tests.
//!
//! Drives the `ytree` binary with scripted shell sessions on stdin and
//! asserts on its output. Uses assert_cmd for running the binary and
//! predicates for output assertions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ytree() -> Command {
    Command::cargo_bin("ytree").expect("binary builds")
}

// ============================================================================
// Shell sessions
// ============================================================================

#[test]
fn test_cli_insert_find_delete() {
    ytree()
        .write_stdin("i 10\ni 20\nf 10\nd 10\nf 10\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted 10"))
        .stdout(predicate::str::contains("10 => int 10"))
        .stdout(predicate::str::contains("Deleted 10"))
        .stdout(predicate::str::contains("Key 10 not found"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_cli_duplicate_insert() {
    ytree()
        .write_stdin("i 5\ni 5\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate key 5 ignored"));
}

#[test]
fn test_cli_range_and_stats() {
    ytree()
        .write_stdin("i 1\ni 2\ni 3\nr 1 2\na\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 => int 1"))
        .stdout(predicate::str::contains("2 => int 2"))
        .stdout(predicate::str::contains("Records: 3"))
        .stdout(predicate::str::contains("Order:   4"));
}

#[test]
fn test_cli_purge_and_dumps() {
    ytree()
        .write_stdin("i 1\ni 2\nl\nx\na\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-> ()"))
        .stdout(predicate::str::contains("Tree purged"))
        .stdout(predicate::str::contains("Records: 0"));
}

#[test]
fn test_cli_json_format() {
    ytree()
        .args(["--format", "json"])
        .write_stdin("i 7\nf 7\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\":7"))
        .stdout(predicate::str::contains("\"Int\":7"));
}

#[test]
fn test_cli_help_lists_commands() {
    ytree()
        .write_stdin("?\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("i <k>"))
        .stdout(predicate::str::contains("r <k1> <k2>"))
        .stdout(predicate::str::contains("Purge the tree"));
}

#[test]
fn test_cli_unknown_command() {
    ytree()
        .write_stdin("z\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: z"));
}

// ============================================================================
// Startup arguments
// ============================================================================

#[test]
fn test_cli_custom_order() {
    ytree()
        .arg("8")
        .write_stdin("a\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Order:   8"));
}

#[test]
fn test_cli_invalid_order_is_fatal() {
    ytree()
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid B+Tree order"));
}

#[test]
fn test_cli_bulk_load_input_file() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("keys.txt");
    fs::write(&input, "5\n-3\n12\n").expect("write input");

    ytree()
        .arg("4")
        .arg(&input)
        .write_stdin("f -3\na\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 keys"))
        .stdout(predicate::str::contains("-3 => int -3"))
        .stdout(predicate::str::contains("Records: 3"));
}

#[test]
fn test_cli_bulk_load_rejects_garbage() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("keys.txt");
    fs::write(&input, "5\nnope\n").expect("write input");

    ytree()
        .arg("4")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an integer"));
}
