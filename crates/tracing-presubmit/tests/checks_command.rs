use predicates::str::contains;

#[test]
fn checks_lists_every_registered_check() {
    assert_cmd::cargo::cargo_bin_cmd!("tracing-presubmit")
        .arg("checks")
        .assert()
        .success()
        .stdout(contains("API version 2.0.0"))
        .stdout(contains("sql-modules"))
        .stdout(contains("perfetto-tests-tag"));
}

#[test]
fn version_flag_prints_the_build_stamp() {
    assert_cmd::cargo::cargo_bin_cmd!("tracing-presubmit")
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("tracing-presubmit"));
}
