use predicates::prelude::*;

use crate::common::Workspace;

#[test]
fn full_stats_for_integers() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "1\n2\n3\n");

    ws.command().args(["-f", "in.txt"]).assert().success().stdout(
        "Full statistics for integers:\n  Count: 3\n  Min: 1.0\n  Max: 3.0\n  Sum: 6.0\n  Average: 2.0\n",
    );
}

#[test]
fn full_stats_for_strings_reports_lengths() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "a\nabc\nab\n");

    ws.command().args(["-f", "in.txt"]).assert().success().stdout(
        "Full statistics for strings:\n  Count: 3\n  Shortest line length: 1\n  Longest line length: 3\n",
    );
}

#[test]
fn short_stats_cover_each_non_empty_category_in_order() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "word\n0.5\n1\n2\n");

    ws.command().args(["-s", "in.txt"]).assert().success().stdout(
        "Statistics for integers:\n  Count: 2\n\
         Statistics for floats:\n  Count: 1\n\
         Statistics for strings:\n  Count: 1\n",
    );
}

#[test]
fn short_and_full_give_two_blocks() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "-1.5\n2.5\n");

    ws.command()
        .args(["-s", "-f", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Statistics for floats:\n  Count: 2\n"))
        .stdout(predicate::str::contains("Full statistics for floats:\n  Count: 2\n"))
        .stdout(predicate::str::contains("  Min: -1.5\n  Max: 2.5\n  Sum: 1.0\n  Average: 0.5\n"));
}

#[test]
fn no_stats_flags_print_nothing() {
    let ws = Workspace::new();
    ws.write_file("in.txt", "1\nx\n");

    ws.command().arg("in.txt").assert().success().stdout("");
}
