//! Registrar and suite-verdict tests, run against private `Suite`
//! values so the process-wide registry stays untouched.

use minispec::{expect_i32, ReportBuffer, ReportStyle, Suite, SuiteError, Verdict};

minispec::spec!(passing_spec, |s| {
    s.describe("math", |d| {
        d.it("adds", |t| {
            expect_i32!(t, 2 + 2, to_be(4));
        });
    });
});

minispec::spec!(failing_spec, |s| {
    s.describe("math", |d| {
        d.it("is wrong on purpose", |t| {
            expect_i32!(t, 1, to_be(9));
        });
    });
});

minispec::spec!(empty_spec, |s| {
    s.describe("nothing", |_d| {});
});

#[test]
fn all_passing_suite_succeeds() {
    let mut suite = Suite::new();
    suite.register(&passing_spec).unwrap();
    let mut sink = ReportBuffer::new();
    let verdict = suite.run(&mut sink, &ReportStyle::plain()).unwrap();
    assert_eq!(verdict, Verdict::Success);
    assert_eq!(verdict.exit_code(), 0);
    assert_eq!(
        sink.as_str(),
        "Begin spec <passing_spec>\n\t✓ math adds\nDone spec: 1 of 1 tests passed\n"
    );
}

#[test]
fn one_failing_spec_fails_the_suite() {
    let mut suite = Suite::new();
    suite.register(&failing_spec).unwrap();
    let mut sink = ReportBuffer::new();
    let verdict = suite.run(&mut sink, &ReportStyle::plain()).unwrap();
    assert_eq!(verdict, Verdict::Failure);
    assert_eq!(verdict.exit_code(), 1);
    assert!(sink.as_str().contains("Done spec: 0 of 1 tests passed"));
}

#[test]
fn failure_is_sticky_across_later_passing_specs() {
    let mut suite = Suite::new();
    suite.register(&failing_spec).unwrap();
    suite.register(&passing_spec).unwrap();
    let mut sink = ReportBuffer::new();
    let verdict = suite.run(&mut sink, &ReportStyle::plain()).unwrap();
    assert_eq!(verdict, Verdict::Failure);
}

#[test]
fn specs_run_in_registration_order() {
    let mut suite = Suite::new();
    suite.register(&passing_spec).unwrap();
    suite.register(&failing_spec).unwrap();
    suite.register(&empty_spec).unwrap();
    let mut sink = ReportBuffer::new();
    suite.run(&mut sink, &ReportStyle::plain()).unwrap();

    let report = sink.as_str();
    let first = report.find("Begin spec <passing_spec>").unwrap();
    let second = report.find("Begin spec <failing_spec>").unwrap();
    let third = report.find("Begin spec <empty_spec>").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn spec_with_no_assertions_reports_zero_of_zero_and_passes() {
    let mut suite = Suite::new();
    suite.register(&empty_spec).unwrap();
    let mut sink = ReportBuffer::new();
    let verdict = suite.run(&mut sink, &ReportStyle::plain()).unwrap();
    assert_eq!(verdict, Verdict::Success);
    assert!(sink.as_str().contains("Done spec: 0 of 0 tests passed"));
}

#[test]
fn empty_suite_leaves_the_verdict_unset() {
    let mut suite = Suite::new();
    let mut sink = ReportBuffer::new();
    let verdict = suite.run(&mut sink, &ReportStyle::plain()).unwrap();
    assert_eq!(verdict, Verdict::Unset);
    assert_eq!(verdict.exit_code(), 0);
    assert_eq!(sink.as_str(), "");
}

#[test]
fn suite_runs_at_most_once() {
    let mut suite = Suite::new();
    suite.register(&passing_spec).unwrap();
    let mut sink = ReportBuffer::new();
    suite.run(&mut sink, &ReportStyle::plain()).unwrap();
    let err = suite.run(&mut sink, &ReportStyle::plain()).unwrap_err();
    assert_eq!(err, SuiteError::AlreadyRan);
}

#[test]
fn registration_is_rejected_after_the_run() {
    let mut suite = Suite::new();
    suite.register(&passing_spec).unwrap();
    let mut sink = ReportBuffer::new();
    suite.run(&mut sink, &ReportStyle::plain()).unwrap();
    let err = suite.register(&failing_spec).unwrap_err();
    assert_eq!(
        err,
        SuiteError::RegisteredAfterRun("failing_spec".to_string())
    );
}

#[test]
fn verdict_is_readable_after_the_run() {
    let mut suite = Suite::new();
    suite.register(&failing_spec).unwrap();
    let mut sink = ReportBuffer::new();
    suite.run(&mut sink, &ReportStyle::plain()).unwrap();
    assert_eq!(suite.verdict(), Verdict::Failure);
}
