//! E2E: add -> list -> activate -> deactivate -> restore -> remove.

mod common;

use predicates::prelude::*;
use std::fs;

#[test]
fn e2e_happy_path() {
    let dir = common::temp_home();
    let original = "127.0.0.1 localhost\n";
    let hosts = common::write_hosts(dir.path(), original);
    let home = dir.path().join("home");

    common::hostblock(&home, &hosts)
        .args(["add", "www.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added site: www.example.com"));

    common::hostblock(&home, &hosts)
        .args(["add", "www.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in the block list"));

    common::hostblock(&home, &hosts)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1\twww.example.com"));

    common::hostblock(&home, &hosts)
        .args(["activate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocker activated"));
    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "127.0.0.1 localhost\n127.0.0.1 www.example.com\n"
    );

    common::hostblock(&home, &hosts)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("www.example.com\tblocked"));

    common::hostblock(&home, &hosts)
        .args(["deactivate", "--yes"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&hosts).unwrap(), original);

    common::hostblock(&home, &hosts)
        .args(["activate", "-y"])
        .assert()
        .success();
    common::hostblock(&home, &hosts)
        .args(["restore", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("restored"));
    assert_eq!(fs::read_to_string(&hosts).unwrap(), original);

    common::hostblock(&home, &hosts)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed site: www.example.com"));

    common::hostblock(&home, &hosts)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sites blocked"));
}

#[test]
fn declined_prompt_cancels() {
    let dir = common::temp_home();
    let hosts = common::write_hosts(dir.path(), "127.0.0.1 localhost\n");
    let home = dir.path().join("home");

    common::hostblock(&home, &hosts)
        .args(["add", "example.com"])
        .assert()
        .success();

    common::hostblock(&home, &hosts)
        .arg("activate")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));
    assert_eq!(fs::read_to_string(&hosts).unwrap(), "127.0.0.1 localhost\n");

    common::hostblock(&home, &hosts)
        .arg("activate")
        .write_stdin("yes\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&hosts).unwrap().contains("127.0.0.1 example.com"));
}

#[test]
fn errors_are_reported_not_crashed() {
    let dir = common::temp_home();
    let hosts = common::write_hosts(dir.path(), "");
    let home = dir.path().join("home");

    common::hostblock(&home, &hosts)
        .args(["add", "EXAMPLE.COM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid site"));

    common::hostblock(&home, &hosts)
        .arg("remove")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no site selected"));

    common::hostblock(&home, &hosts)
        .args(["restore", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no hosts backup"));
}
