use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const USAGE: &str = "Usage: histplot <histogram_file.txt> <title>";

fn write_input(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_owned()
}

// Width and height from the IHDR chunk, right after the 8 bytes signature.
fn png_size(path: &Path) -> (u32, u32) {
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let be = |at: usize| u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
    (be(16), be(20))
}

#[test]
fn test_help_works() {
    let mut cmd = Command::cargo_bin("histplot").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bar-width"));
}

#[test]
fn test_wrong_arity_prints_usage() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "left.txt", "1 2\n3 4\n");
    let arg_sets: Vec<Vec<&str>> = vec![vec![], vec![input.as_str()], vec![input.as_str(), "left", "extra"]];
    for args in arg_sets {
        let mut cmd = Command::cargo_bin("histplot").unwrap();
        cmd.args(&args)
            .assert()
            .code(1)
            .stdout(predicate::str::contains(USAGE));
    }
    assert!(!dir.path().join("left_plot.png").exists());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nothing.txt");
    let mut cmd = Command::cargo_bin("histplot").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg(input.to_str().unwrap())
        .arg("nothing")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not open"));
    assert!(!dir.path().join("nothing_plot.png").exists());
}

#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad.txt", "-1 3\n0 seven\n1 2\n");
    let mut cmd = Command::cargo_bin("histplot").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg(&input)
        .arg("bad")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad data at line 2"));
    assert!(!dir.path().join("bad_plot.png").exists());
}

#[test]
fn test_plot() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "left.txt", "-200\t3\n-100\t12\n0\t40\n100\t9\n205\t1\n");
    let output = dir.path().join("left_plot.png");
    let mut cmd = Command::cargo_bin("histplot").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("--verbose")
        .arg(&input)
        .arg("left channel")
        .assert()
        .success()
        .stdout(format!("Plot saved as {}\n", output.display()))
        .stderr(predicate::str::contains("[DEBUG] Read 5 bins"))
        .stderr(predicate::str::contains("(65 samples)"))
        .stderr(predicate::str::contains("Bar width 80 (adaptive mode)"));
    assert_eq!(png_size(&output), (3600, 1800));
}

#[test]
fn test_plot_fixed_width_low_resolution() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "mid", "# value count\n1 5\n2 7\n3 2\n");
    let output = dir.path().join("mid_plot.png");
    let mut cmd = Command::cargo_bin("histplot").unwrap();
    cmd.arg("--bar-width")
        .arg("fixed")
        .arg("--dpi")
        .arg("50")
        .arg(&input)
        .arg("mid")
        .assert()
        .success()
        .stdout(predicate::str::contains("mid_plot.png"));
    assert_eq!(png_size(&output), (600, 300));
}

#[test]
fn test_plot_empty_and_single_row() {
    let dir = TempDir::new().unwrap();
    for (name, content) in [("empty.txt", ""), ("single.txt", "17 4\n")] {
        let input = write_input(&dir, name, content);
        let mut cmd = Command::cargo_bin("histplot").unwrap();
        cmd.arg("--dpi").arg("50").arg(&input).arg(name).assert().success();
    }
    assert!(dir.path().join("empty_plot.png").exists());
    assert!(dir.path().join("single_plot.png").exists());
}

#[test]
fn test_plot_title_with_leading_dash() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "left.txt", "-1000 3\n0 40\n1000 3\n");
    let mut cmd = Command::cargo_bin("histplot").unwrap();
    cmd.arg("--dpi")
        .arg("50")
        .arg(&input)
        .arg("-6dB left")
        .assert()
        .success()
        .stdout(predicate::str::contains("left_plot.png"));
    assert!(dir.path().join("left_plot.png").exists());

    write_input(&dir, "-6dB.txt", "1 2\n");
    let mut cmd = Command::cargo_bin("histplot").unwrap();
    cmd.current_dir(dir.path())
        .arg("--dpi")
        .arg("50")
        .arg("--")
        .arg("-6dB.txt")
        .arg("-6dB")
        .assert()
        .success()
        .stdout("Plot saved as -6dB_plot.png\n");
    assert!(dir.path().join("-6dB_plot.png").exists());
}
