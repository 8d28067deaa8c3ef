use predicates::prelude::*;

use crate::common::Workspace;

#[test]
fn shows_help() {
    Workspace::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("line_filter"))
        .stdout(predicate::str::contains("-o"))
        .stdout(predicate::str::contains("-f"));
}

#[test]
fn shows_version() {
    Workspace::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_input_files_is_a_usage_error_on_stdout() {
    let ws = Workspace::new();
    ws.command()
        .arg("-s")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("No input files given"))
        .stdout(predicate::str::contains("Usage:"));

    assert_eq!(std::fs::read_dir(ws.path()).unwrap().count(), 0);
}

#[test]
fn unknown_option_is_read_as_an_input_path() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "3\n");

    ws.command()
        .args(["-x", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to read file '-x'"));

    assert_eq!(ws.read("integers.txt"), "3\n");
}

#[test]
fn output_flag_takes_a_dash_value_as_directory() {
    let ws = Workspace::new();
    ws.create_dir("-s");
    ws.write_file("in.txt", "8\nword\n");

    ws.command().args(["-o", "-s", "in.txt"]).assert().success().stdout("");

    assert_eq!(ws.read("-s/integers.txt"), "8\n");
    assert_eq!(ws.read("-s/strings.txt"), "word\n");
    assert!(!ws.exists("integers.txt"));
}

#[test]
fn prefix_flag_takes_a_dash_value_as_prefix() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "8\n");
    ws.write_file("-aintegers.txt", "old\n");

    ws.command().args(["-p", "-a", "in.txt"]).assert().success();

    assert_eq!(ws.read("-aintegers.txt"), "8\n");
    assert!(!ws.exists("integers.txt"));
}

#[test]
fn output_flag_without_value_falls_back_to_current_directory() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "5\n");

    ws.command().args(["in.txt", "-o"]).assert().success();

    assert_eq!(ws.read("integers.txt"), "5\n");
}
