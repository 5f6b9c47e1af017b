//! # Spec Registrar, Runner, and Suite Verdict
//!
//! Specs register into a process-wide ordered registry during program
//! initialization — the [`suite!`](crate::suite) macro generates a `main`
//! that performs every registration before any spec body (or other
//! program logic) runs. Execution order across specs is registration
//! order, which for `suite!` is its argument order; this is deterministic
//! and relied upon by the report.
//!
//! The suite verdict is a tri-state flag owned by the process-wide
//! [`Suite`]: consulted and initialized at the start of every spec's
//! execution, flipped to failure exactly when a spec completes with more
//! assertions seen than passed, and monotonically sticky toward failure
//! from then on. It is read once, at process exit, to compute the exit
//! status.
//!
//! Hosts embedding the engine can sidestep the process-wide registry by
//! owning a [`Suite`] value directly.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use thiserror::Error;

use crate::block::{SpecCtx, Tally};
use crate::report::{self, ReportSink, ReportStyle, StdoutSink};

/// A registered spec: a name plus its runnable body.
pub struct SpecDef {
    pub name: &'static str,
    pub body: fn(&mut SpecCtx),
}

/// The process-wide aggregate outcome of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// No spec has run yet.
    #[default]
    Unset,
    Success,
    Failure,
}

impl Verdict {
    /// Consulted at every spec's entry: an existing failure is left
    /// untouched, anything else becomes success.
    pub fn enter_spec(&mut self) {
        if *self != Verdict::Failure {
            *self = Verdict::Success;
        }
    }

    /// Applied at every spec's exit: a spec that saw more assertions
    /// than it passed flips a success verdict to failure. Failure is
    /// never reset.
    pub fn finish_spec(&mut self, tally: &Tally) {
        if tally.seen > tally.passed && *self == Verdict::Success {
            *self = Verdict::Failure;
        }
    }

    /// The process exit status this verdict maps to: 0 unless the
    /// suite failed. `Unset` (zero specs ran) is a success.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Failure => 1,
            Verdict::Unset | Verdict::Success => 0,
        }
    }
}

/// Errors surfaced by the registrar and runner.
///
/// Assertion failures are not errors — they are counted, folded data.
/// These cover misuse of the suite lifecycle itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuiteError {
    #[error("suite has already run; registered specs execute exactly once per process")]
    AlreadyRan,
    #[error("spec `{0}` was registered after the suite started running")]
    RegisteredAfterRun(String),
}

/// An ordered spec registry plus the suite verdict it folds into.
///
/// The process-wide instance behind [`register`]/[`run_suite`] is one of
/// these; embedding hosts and tests can own private instances instead.
#[derive(Default)]
pub struct Suite {
    specs: Vec<&'static SpecDef>,
    verdict: Verdict,
    ran: bool,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a spec to the registry. Registration order is execution
    /// order. Rejected once the suite has started running.
    pub fn register(&mut self, def: &'static SpecDef) -> Result<(), SuiteError> {
        if self.ran {
            return Err(SuiteError::RegisteredAfterRun(def.name.to_string()));
        }
        self.specs.push(def);
        Ok(())
    }

    /// The current verdict.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Runs every registered spec, in registration order, each to
    /// completion and independent of the others' success. Runs at most
    /// once per suite.
    pub fn run(
        &mut self,
        sink: &mut dyn ReportSink,
        style: &ReportStyle,
    ) -> Result<Verdict, SuiteError> {
        if self.ran {
            return Err(SuiteError::AlreadyRan);
        }
        self.ran = true;
        let specs = self.specs.clone();
        for def in specs {
            self.verdict.enter_spec();
            let tally = run_spec_body(def, sink, style);
            self.verdict.finish_spec(&tally);
        }
        Ok(self.verdict)
    }
}

/// Runs one spec body between its header and summary lines, returning
/// the spec's folded tally.
fn run_spec_body(def: &SpecDef, sink: &mut dyn ReportSink, style: &ReportStyle) -> Tally {
    sink.emit(&report::spec_header(def.name));
    let mut ctx = SpecCtx::new(def.name, &mut *sink, *style);
    (def.body)(&mut ctx);
    let tally = ctx.tally();
    sink.emit(&report::spec_summary(&tally));
    sink.emit("");
    tally
}

// ============================================================================
// PROCESS-WIDE SUITE: the registry behind the spec!/suite! macros
// ============================================================================

lazy_static! {
    static ref SUITE: Mutex<Suite> = Mutex::new(Suite::new());
}

// A poisoned lock only means a spec body panicked after unwinding
// through a registry call; the suite state itself stays coherent.
fn lock_suite() -> MutexGuard<'static, Suite> {
    SUITE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Registers a spec with the process-wide suite.
pub fn register(def: &'static SpecDef) -> Result<(), SuiteError> {
    lock_suite().register(def)
}

/// Reads the process-wide suite verdict.
pub fn verdict() -> Verdict {
    lock_suite().verdict()
}

/// Runs the process-wide suite against the given sink.
///
/// The registry lock is never held while a spec body runs, so bodies
/// and hooks may read [`verdict`] without deadlocking.
pub fn run_registered(
    sink: &mut dyn ReportSink,
    style: &ReportStyle,
) -> Result<Verdict, SuiteError> {
    let specs = {
        let mut suite = lock_suite();
        if suite.ran {
            return Err(SuiteError::AlreadyRan);
        }
        suite.ran = true;
        suite.specs.clone()
    };
    for def in specs {
        lock_suite().verdict.enter_spec();
        let tally = run_spec_body(def, sink, style);
        lock_suite().verdict.finish_spec(&tally);
    }
    Ok(verdict())
}

/// Runs the process-wide suite against stdout and returns the exit code
/// for the process. This is what the [`suite!`](crate::suite) macro
/// calls after registration.
pub fn run_suite() -> i32 {
    let style = ReportStyle::default();
    let mut sink = StdoutSink;
    match run_registered(&mut sink, &style) {
        Ok(verdict) => verdict.exit_code(),
        Err(err) => {
            eprintln!("minispec: {}", err);
            2
        }
    }
}

// ============================================================================
// DECLARATION MACROS: spec! and suite!
// ============================================================================

/// Declares a named spec: a static [`SpecDef`](crate::runner::SpecDef)
/// whose body is an ordinary function over [`SpecCtx`](crate::SpecCtx).
///
/// ```rust
/// minispec::spec!(arithmetic, |s| {
///     s.describe("addition", |d| {
///         d.it("adds small numbers", |t| {
///             minispec::expect_i32!(t, 2 + 2, to_be(4));
///         });
///     });
/// });
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! spec {
    ($name:ident, |$s:ident| $body:block) => {
        #[allow(non_upper_case_globals)]
        pub static $name: $crate::runner::SpecDef = $crate::runner::SpecDef {
            name: stringify!($name),
            body: {
                fn __minispec_body($s: &mut $crate::block::SpecCtx<'_>) $body
                __minispec_body
            },
        };
    };
}

/// The suite entry: declares `main` for a spec program. Use exactly
/// once per program.
///
/// The generated `main` registers every listed spec, in argument order,
/// before anything else runs, then executes the suite and exits with
/// the verdict's exit code.
#[macro_export]
macro_rules! suite {
    ($($spec:path),+ $(,)?) => {
        fn main() {
            $(
                if let Err(err) = $crate::runner::register(&$spec) {
                    eprintln!("minispec: {}", err);
                    ::std::process::exit(2);
                }
            )+
            ::std::process::exit($crate::runner::run_suite());
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_initializes_to_success_on_first_spec() {
        let mut v = Verdict::Unset;
        v.enter_spec();
        assert_eq!(v, Verdict::Success);
    }

    #[test]
    fn verdict_failure_is_sticky() {
        let mut v = Verdict::Failure;
        v.enter_spec();
        assert_eq!(v, Verdict::Failure);
        v.finish_spec(&Tally { seen: 3, passed: 3 });
        assert_eq!(v, Verdict::Failure);
    }

    #[test]
    fn verdict_flips_when_a_spec_loses_assertions() {
        let mut v = Verdict::Success;
        v.finish_spec(&Tally { seen: 2, passed: 1 });
        assert_eq!(v, Verdict::Failure);
    }

    #[test]
    fn verdict_stays_success_when_all_assertions_pass() {
        let mut v = Verdict::Success;
        v.finish_spec(&Tally { seen: 2, passed: 2 });
        assert_eq!(v, Verdict::Success);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Verdict::Unset.exit_code(), 0);
        assert_eq!(Verdict::Success.exit_code(), 0);
        assert_eq!(Verdict::Failure.exit_code(), 1);
    }
}
