use assert_cmd::Command;
use predicates::{boolean::PredicateBooleanExt, prelude::predicate::str, BoxPredicate};

#[test]
fn output_right_answers() {
    let mut cmd = Command::cargo_bin("day3").unwrap();
    cmd.arg("example.txt");

    let expect_lines = ["Part 1: 7", "Part 2: 336"];
    let pred = expect_lines
        .iter()
        .map(|l| BoxPredicate::new(str::contains(*l)))
        .reduce(|total_p, this_p| BoxPredicate::new(total_p.and(this_p)))
        .unwrap();
    cmd.assert().success().stdout(pred);
}

#[test]
fn fail_on_invalid_tile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "..#\n.X.\n").unwrap();

    let mut cmd = Command::cargo_bin("day3").unwrap();
    cmd.arg(&path);
    cmd.assert()
        .failure()
        .stderr(str::contains("invalid character(X)"));
}
