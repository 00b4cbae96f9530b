use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hh() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hh"))
}

#[test]
fn shows_help() {
    hh().arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recurse over directories"));
}

#[test]
fn shows_version() {
    hh().arg("-v")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_path_prints_placeholder() {
    let temp = TempDir::new().unwrap();
    hh().current_dir(temp.path())
        .arg("does-not-exist")
        .assert()
        .success()
        .stdout("(Missing)\n");
}

#[test]
fn forced_dump_of_text_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();

    hh().current_dir(temp.path())
        .args(["-x", "a.txt"])
        .assert()
        .success()
        .stdout("00000000 68 65 6c 6c 6f\n");
}

#[test]
fn text_file_is_printed_verbatim() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hello\n").unwrap();

    hh().current_dir(temp.path())
        .arg("a.txt")
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn binary_file_is_dumped_without_flag() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("blob"), [0x7f, b'E', b'L', b'F', 0x02, 0x01]).unwrap();

    hh().current_dir(temp.path())
        .arg("blob")
        .assert()
        .success()
        .stdout("00000000 7f 45 4c 46 02 01\n");
}

#[test]
fn lists_directory_without_content() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();

    let output = hh()
        .current_dir(temp.path())
        .arg("--no-ids")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 1);
    let columns: Vec<&str> = lines[0].split_whitespace().collect();
    assert_eq!(columns[1], "1");
    assert_eq!(columns[2], "5B");
    assert_eq!(columns[4], "a.txt");
}

#[test]
fn numeric_ids_column() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();

    let assert = hh().current_dir(temp.path()).arg("-n").assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let columns: Vec<&str> = out.split_whitespace().collect();

    if cfg!(unix) {
        assert_eq!(columns.len(), 7);
        assert!(columns[2].chars().all(|c| c.is_ascii_digit()));
        assert!(columns[3].chars().all(|c| c.is_ascii_digit()));
    } else {
        assert_eq!(columns.len(), 5);
    }
}

#[test]
fn recursion_prints_nested_content_depth_first() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub/inner.txt"), "inner\n").unwrap();

    let assert = hh()
        .current_dir(temp.path())
        .args(["-r", "--no-ids", "."])
        .assert()
        .success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('d'));
    assert!(lines[0].ends_with(" sub"));
    assert!(lines[1].ends_with(" sub/inner.txt"));
    assert_eq!(lines[2], "inner");
}

#[test]
fn rejects_unknown_flag() {
    hh().arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_does_not_abort_recursion() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let secret = temp.path().join("a_secret");
    fs::write(&secret, "classified").unwrap();
    fs::write(temp.path().join("z.txt"), "last\n").unwrap();
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::File::open(&secret).is_ok() {
        // Permission bits do not apply to this user.
        return;
    }

    hh().current_dir(temp.path())
        .args(["-r", "--no-ids"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" z.txt\nlast\n"))
        .stderr(predicate::str::contains("Error loading path: "));
}
