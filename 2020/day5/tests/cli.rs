use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn output_right_answers() {
    let mut cmd = Command::cargo_bin("day5").unwrap();
    cmd.arg("example.txt");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Part 1: 23").and(predicate::str::contains("Part 2: 19")));
}

#[test]
fn fail_on_missing_input() {
    let mut cmd = Command::cargo_bin("day5").unwrap();
    cmd.arg("no_such_file.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no_such_file.txt"));
}
