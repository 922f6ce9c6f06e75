//! End-to-end CLI integration tests.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn fibseries() -> Command {
    Command::cargo_bin("fibseries").expect("binary not found")
}

fn runner() -> Command {
    Command::cargo_bin("fib-runner").expect("binary not found")
}

fn plotter() -> Command {
    Command::cargo_bin("fib-plot").expect("binary not found")
}

fn fields(stdout: &[u8]) -> usize {
    String::from_utf8_lossy(stdout).trim().split(',').count()
}

#[test]
fn help_flags() {
    for mut cmd in [fibseries(), runner(), plotter()] {
        cmd.arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }
}

#[test]
fn series_printed_iterative() {
    fibseries()
        .args(["7", "0", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iterative version"))
        .stdout(predicate::str::contains("1 1 2 3 5 8 13"));
}

#[test]
fn series_printed_with_any_third_argument() {
    fibseries()
        .args(["7", "2", "yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dynamic programming version"))
        .stdout(predicate::str::contains("1 1 2 3 5 8 13"));
}

#[test]
fn series_all_modes_emits_six_fields() {
    let out = fibseries().args(["10", "3"]).assert().success();
    assert_eq!(fields(&out.get_output().stdout), 6);
}

#[test]
fn series_default_mode_is_all() {
    let out = fibseries().arg("5").assert().success();
    let count = fields(&out.get_output().stdout);
    assert!(count == 6 || count == 4, "got {count} fields");
}

#[test]
fn series_degraded_mode_emits_four_fields() {
    let out = fibseries().args(["10", "4"]).assert().success();
    assert_eq!(fields(&out.get_output().stdout), 4);
}

#[test]
fn series_rejects_unknown_mode() {
    fibseries().args(["10", "9"]).assert().failure();
}

#[test]
fn series_rejects_unallocatable_length() {
    fibseries()
        .args(["18446744073709551615", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("18446744073709551615"));
}

#[test]
fn series_zero_length() {
    fibseries()
        .args(["0", "0", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("time: "));
}

fn read(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn runner_sweeps_counterpart() {
    let tmp = tempfile::TempDir::new().unwrap();
    runner()
        .args(["12", "--step", "5", "--out", "fib_c.csv", "-q"])
        .args(["--exec", env!("CARGO_BIN_EXE_fibseries")])
        .arg("--out-dir")
        .arg(tmp.path())
        .assert()
        .success();

    let timings = read(&tmp.path().join("timings_fib_c.csv"));
    assert_eq!(timings[0], "N,Iterative,Dynamic Programming,Recursive");
    assert_eq!(timings.len(), 4);
    assert!(timings[3].starts_with("11,"));

    let ops = read(&tmp.path().join("ops_fib_c.csv"));
    assert_eq!(ops[1], "1,0,0,0");
    assert_eq!(ops[2], "6,4,4,14");
}

#[test]
fn runner_drops_recursion_after_timeout() {
    let tmp = tempfile::TempDir::new().unwrap();
    let summary = tmp.path().join("summary.json");
    runner()
        .args(["45", "--step", "44", "--timeout", "200ms", "-q"])
        .args(["--exec", env!("CARGO_BIN_EXE_fibseries")])
        .arg("--out-dir")
        .arg(tmp.path())
        .arg("--summary")
        .arg(&summary)
        .assert()
        .success();

    let timings = read(&tmp.path().join("timings_fib_run.csv"));
    assert_eq!(timings.len(), 3);
    assert!(!timings[1].ends_with(",-"));
    assert!(timings[2].starts_with("45,"));
    assert!(timings[2].ends_with(",-"));

    let summary = std::fs::read_to_string(summary).unwrap();
    assert!(summary.contains("\"downgraded_at\": 45"));
    assert!(summary.contains("\"final_mode\": 4"));
}

#[cfg(unix)]
#[test]
fn runner_stops_on_failure_and_keeps_header() {
    let tmp = tempfile::TempDir::new().unwrap();
    runner()
        .args(["5", "--exec", "false", "-q"])
        .arg("--out-dir")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sweep stopped"));

    let timings = read(&tmp.path().join("timings_fib_run.csv"));
    assert_eq!(timings, ["N,Iterative,Dynamic Programming,Recursive"]);
}

#[test]
fn runner_rejects_bad_timeout() {
    runner()
        .args(["5", "--timeout", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn runner_shell_completion() {
    runner()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fib-runner"));
}

#[test]
fn plot_reports_missing_inputs() {
    let tmp = tempfile::TempDir::new().unwrap();
    plotter()
        .arg("--dir")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("timings_fib_c.csv"))
        .stdout(predicate::str::contains(
            "Missing CSVs. Run fib-runner for both implementations first.",
        ));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

const C_TIMINGS: &str = "N,Iterative,Dynamic Programming,Recursive
1,0.000001000,0.000001000,0.000001000
11,0.000002000,0.000003000,0.000040000
21,0.000003000,0.000005000,-
";

const PY_TIMINGS: &str = "N,Iterative,Dynamic Programming,Recursive
1,0.000010000,0.000012000,0.000011000
11,0.000020000,0.000040000,0.000900000
21,0.000030000,0.000070000,-
";

const OPS: &str = "N,Iterative,Dynamic Programming,Recursive
1,0,0,0
11,9,9,221
21,19,19,-
";

#[test]
fn plot_writes_all_figures() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dir = tmp.path();
    std::fs::write(dir.join("timings_fib_c.csv"), C_TIMINGS).unwrap();
    std::fs::write(dir.join("timings_fib_py.csv"), PY_TIMINGS).unwrap();
    std::fs::write(dir.join("ops_fib_c.csv"), OPS).unwrap();
    std::fs::write(dir.join("ops_fib_py.csv"), OPS).unwrap();
    let out = dir.join("figures");

    plotter()
        .arg("--dir")
        .arg(dir)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Figures saved:"))
        .stdout(predicate::str::contains(" - speedup_rec.svg"));

    for name in [
        "iter_vs_dp_c.svg",
        "iter_vs_dp_py.svg",
        "recursive_c_log.svg",
        "recursive_py_log.svg",
        "ops_c.svg",
        "ops_py.svg",
        "speedup_iter.svg",
        "speedup_dp.svg",
        "speedup_rec.svg",
    ] {
        assert!(out.join(name).is_file(), "{name} not written");
    }
}

#[test]
fn plot_skips_speedup_on_grid_mismatch() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dir = tmp.path();
    let short_py: String = PY_TIMINGS.lines().take(3).map(|l| format!("{l}\n")).collect();
    std::fs::write(dir.join("timings_fib_c.csv"), C_TIMINGS).unwrap();
    std::fs::write(dir.join("timings_fib_py.csv"), short_py).unwrap();
    std::fs::write(dir.join("ops_fib_c.csv"), OPS).unwrap();
    std::fs::write(dir.join("ops_fib_py.csv"), OPS).unwrap();

    plotter()
        .arg("--dir")
        .arg(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping speedup charts"));
    assert!(dir.join("ops_c.svg").is_file());
    assert!(!dir.join("speedup_iter.svg").exists());
}

#[test]
fn plot_rejects_malformed_table() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dir = tmp.path();
    std::fs::write(dir.join("timings_fib_c.csv"), "N,Iterative\n1,abc\n").unwrap();
    for name in ["timings_fib_py.csv", "ops_fib_c.csv", "ops_fib_py.csv"] {
        std::fs::write(dir.join(name), OPS).unwrap();
    }
    plotter()
        .arg("--dir")
        .arg(dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timings_fib_c.csv"));
}
