// Regression test: the demo suite reports every spec and exits with the
// suite verdict. Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn demo_suite_reports_and_exits_with_the_verdict() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.assert().code(1).stdout(
        contains("Begin spec <expectations_demo>")
            .and(contains(
                "✓ expect() works with integers and floating point numbers",
            ))
            .and(contains("✓ expect() works with nullable strings as well"))
            .and(contains("Done spec: 15 of 15 tests passed"))
            .and(contains("Begin spec <failing_demo>"))
            .and(contains("✗ This one may actually fail"))
            .and(contains("expected 1 to_be(9) -> 9"))
            .and(contains("got 1 is(1)"))
            .and(contains("Done spec: 0 of 1 tests passed")),
    );
}

#[test]
fn failure_diagnostics_carry_the_source_location() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.assert()
        .stdout(contains("* [src/bin/demo.rs, L").and(contains("|\texpected 1 to_be(9)")));
}
