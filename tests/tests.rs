use assert_cmd::prelude::*;
use lazy_static::lazy_static;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::{contains, is_match, PredicateStrExt};
use regex::Regex;
use std::process::Command;

lazy_static! {
    static ref SIZES_REGEX: Regex = Regex::new(r"Is ok (True|False) \(sizes: (\d+), (\d+)\)").unwrap();
}

const IN1: &str = "tests/input/in1.fa";
const IN2: &str = "tests/input/in2.fa";
const OUT1: &str = "tests/input/out1.fa";
const OUT2: &str = "tests/input/out2.fa";
const INTER: &str = "tests/input/inter.fa";
const EMPTY: &str = "tests/input/empty.fa";

#[test]
fn cli_no_args() {
    Command::cargo_bin("kmercheck").unwrap().assert().failure();
}

#[test]
fn cli_no_such_file() {
    Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&[IN1, "tests/input/no_such_file.fa", OUT1, OUT2, INTER, "4"])
        .assert()
        .failure()
        .stderr(contains("NotFound").trim());
}

#[test]
fn cli_invalid_kmer_size() {
    for k in &["0", "four"] {
        Command::cargo_bin("kmercheck")
            .unwrap()
            .args(&[IN1, IN2, OUT1, OUT2, INTER, *k])
            .assert()
            .failure()
            .stderr(contains("k-mer length"));
    }
}

#[test]
fn cli_correct_transformation() {
    Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&[IN1, IN2, OUT1, OUT2, INTER, "4"])
        .assert()
        .success()
        .stdout(
            "Loading tests/input/in1.fa
Loading tests/input/in2.fa
Loading tests/input/out1.fa
Loading tests/input/out2.fa
Loading tests/input/inter.fa
Is ok True
Is ok True (sizes: 6, 6)

out1 - in1
set()

out2 - in2
set()
",
        );
}

#[test]
fn cli_gzipped_output() {
    Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&[IN1, IN2, OUT1, "tests/input/out2.fa.gz", INTER, "4"])
        .assert()
        .success()
        .stdout(contains("Is ok True").count(2));
}

#[test]
fn cli_missing_intersection() {
    Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&[IN1, IN2, OUT1, OUT2, EMPTY, "4"])
        .assert()
        .success()
        .stdout(contains("Is ok False\n"))
        .stdout(contains("Is ok False (sizes: 6, 5)"))
        .stdout(contains("sym. difference:  {'ACGT'}"));
}

#[test]
fn cli_dropped_kmer_is_not_fabricated() {
    Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&[
            "tests/input/single_x.fa",
            "tests/input/single_y.fa",
            "tests/input/single_x.fa",
            EMPTY,
            EMPTY,
            "4",
        ])
        .assert()
        .success()
        .stdout(contains("Is ok True\n"))
        .stdout(contains("sym. difference:  {'ACGT'}"))
        .stdout(contains("out1 - in1\nset()\n\nout2 - in2\nset()\n"));
}

#[test]
fn cli_fabricated_kmer() {
    let output = Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&[IN1, IN2, "tests/input/out1_fabricated.fa", OUT2, INTER, "4"])
        .unwrap()
        .stdout;
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("out1 - in1\n{'CCCC'}\n"));
    assert!(stdout.contains("sym. difference:  {'CCCC'}"));
    if let Some(captures) = SIZES_REGEX.captures(&stdout) {
        assert_eq!(captures.get(1).unwrap().as_str(), "False");
        assert_eq!(captures.get(2).unwrap().as_str().parse::<usize>().unwrap(), 6);
        assert_eq!(captures.get(3).unwrap().as_str().parse::<usize>().unwrap(), 7);
    } else {
        panic!("No sizes line in output")
    }
}

#[test]
fn cli_strict_exit_status() {
    Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&["--strict", IN1, IN2, OUT1, OUT2, EMPTY, "4"])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Is ok False"));

    Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&["--strict", "-t", "5", IN1, IN2, OUT1, OUT2, INTER, "4"])
        .assert()
        .success();
}

#[test]
fn cli_stats_file() {
    let dir = tempfile::tempdir().unwrap();
    let stats = dir.path().join("stats.tsv");
    Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&[IN1, IN2, OUT1, OUT2, INTER, "4", "-s"])
        .arg(&stats)
        .assert()
        .success();
    let content = std::fs::read_to_string(&stats).unwrap();
    assert!(content.starts_with("# cmd: "));
    assert!(content.contains("tests/input/in1.fa\t3\t1\t8\n"));
    assert!(content.contains("tests/input/in2.fa\t4\t1\t8\n"));
    assert!(content.contains("tests/input/inter.fa\t1\t1\t4\n"));
}

#[test]
fn cli_verbose_logs_to_stderr() {
    Command::cargo_bin("kmercheck")
        .unwrap()
        .args(&["-v", IN1, IN2, OUT1, OUT2, INTER, "4"])
        .assert()
        .success()
        .stderr(is_match(r"#kmers=3, NS=1, CL=8 bp").unwrap())
        .stdout(contains("#kmers").not());
}
