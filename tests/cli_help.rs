use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn top_level_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("upm-dev");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("new"))
        .stdout(contains("delete"))
        .stdout(contains("list"))
        .stdout(contains("open"))
        .stdout(contains("root"))
        .stdout(contains("config"));
}

#[test]
fn new_help_lists_scaffold_toggles() {
    let mut cmd = cargo_bin_cmd!("upm-dev");
    cmd.args(["new", "--help"])
        .assert()
        .success()
        .stdout(contains("--no-tests"))
        .stdout(contains("--no-editor"))
        .stdout(contains("--default-script"))
        .stdout(contains("--no-git"));
}

#[test]
fn delete_help_succeeds() {
    let mut cmd = cargo_bin_cmd!("upm-dev");
    cmd.args(["delete", "--help"]).assert().success();
}

#[test]
fn list_help_succeeds() {
    let mut cmd = cargo_bin_cmd!("upm-dev");
    cmd.args(["list", "--help"]).assert().success();
}

#[test]
fn root_help_lists_subcommands() {
    let mut cmd = cargo_bin_cmd!("upm-dev");
    cmd.args(["root", "--help"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("open"))
        .stdout(contains("status"));
}

#[test]
fn config_set_help_succeeds() {
    let mut cmd = cargo_bin_cmd!("upm-dev");
    cmd.args(["config", "set", "--help"]).assert().success();
}
