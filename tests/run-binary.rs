use std::process::Command;

use assert_cmd::prelude::*;
use difference::Changeset;

const BIN: &str = "sokoban-engine";

// separate fn to get stack traces with correct line numbers
fn assert_output(args: &[&str], expected: &str) {
    let output = Command::cargo_bin(BIN).unwrap().args(args).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    if stdout != expected {
        println!("{}", Changeset::new(expected, &stdout, "\n"));
        panic!("Unexpected output for {:?}", args);
    }
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");
}

#[test]
fn run_simplest() {
    let output = r"Level 1 (Super Easy)
#####
#@$.#
#####

#####
# @*#
#####

R
Moves: 1
Pushes: 1
Status: won
";

    assert_output(&["R"], output);
}

#[test]
fn run_blocked_moves() {
    let output = r"Level 1 (Super Easy)
#####
#@$.#
#####

Moves: 0
Pushes: 0
Status: in progress
";

    assert_output(&["lud"], output);
    // 3 wraps around to the first level
    assert_output(&["--level", "3"], output);
}

#[test]
fn run_moderate_solution() {
    let output = r"Level 3 (Moderate)
########
#      #
# .  $ #
# .$@$.#
# $  . #
#      #
########

########
#      #
# *    #
# *   *#
#   @* #
#      #
########

RlLuurrrdLLLdddlluRRR
Moves: 21
Pushes: 8
Status: won
";

    // negative indices use the absolute value
    assert_output(&["-l", "-2", "rlluurrrdllldddllurrr"], output);
    // moves after winning are ignored
    assert_output(&["--level", "2", "RlLuurrrdLLLdddlluRRRllll"], output);
}

#[test]
fn run_file_deadlock() {
    let output = r"Level 1 (Corner)
#####
#@$ #
#  .#
#####

#####
# @$#
#  .#
#####

R
Moves: 1
Pushes: 1
Status: deadlocked
";

    assert_output(&["--file", "levels/custom.txt", "rd"], output);
}

#[test]
fn run_file_steps_short_rows() {
    let output = r"Level 2 (Short rows)
#####
#@ $
#. ##

#####
# @$
#. ##

r
Moves: 1
Pushes: 0
Status: deadlocked
";

    assert_output(&["-f", "levels/custom.txt", "-l", "-1", "--steps", "rr"], output);
}

#[test]
fn run_steps_unnamed_level() {
    let output = r"Level 3
@$.

 @*

R
Moves: 1
Pushes: 1
Status: won
";

    assert_output(&["-f", "levels/custom.txt", "-l", "5", "-s", "ur"], output);
}

#[test]
fn run_list() {
    let output = Command::cargo_bin(BIN)
        .unwrap()
        .arg("--list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();
    for name in &["Super Easy", "Classic Easy", "Moderate"] {
        assert!(output.contains(name), "{}", output);
    }
    // size of the second level
    assert!(output.contains("8x9"), "{}", output);
}

#[test]
fn run_invalid_moves() {
    Command::cargo_bin(BIN)
        .unwrap()
        .arg("rx")
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid move 'x' at position 1 - expected one of udlrUDLR\n");
}

#[test]
fn run_missing_file() {
    Command::cargo_bin(BIN)
        .unwrap()
        .arg("--file")
        .arg("levels/does-not-exist.txt")
        .arg("r")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_invalid_level_index() {
    Command::cargo_bin(BIN)
        .unwrap()
        .arg("--level")
        .arg("first")
        .assert()
        .failure()
        .stdout("");
}
