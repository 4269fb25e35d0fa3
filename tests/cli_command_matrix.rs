use assert_cmd::cargo::cargo_bin_cmd;

fn run_help(args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("snapcheck");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    // top-level
    run_help(&[]);

    run_help(&["evaluate"]);
    run_help(&["quiz"]);
    run_help(&["questions"]);
    run_help(&["rules"]);
}

#[test]
fn out_of_domain_flag_value_is_rejected_by_parser() {
    let mut cmd = cargo_bin_cmd!("snapcheck");
    cmd.args(["evaluate", "--age", "65_plus"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("65_plus"));
}
