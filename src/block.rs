//! # Block Engine (describe/it)
//!
//! Manages the nested naming context, per-scope lifecycle hooks, and the
//! assertion tallies that bubble from it blocks up into the owning spec.
//!
//! An it block always moves through the same states: entered, before-hook,
//! running (possibly aborted early by a require gate), after-hook, verdict
//! line, fold. The tail of that sequence is not skippable — an aborted body
//! still gets its after-hook, its verdict line, and its fold.

use crate::report::{self, ReportSink, ReportStyle};

/// A counter pair: assertions seen and assertions passed.
///
/// Each it block owns a fresh tally for its lifetime; the owning spec
/// accumulates folded tallies from every it block it ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub seen: usize,
    pub passed: usize,
}

impl Tally {
    /// Count one assertion outcome.
    pub fn record(&mut self, satisfied: bool) {
        self.seen += 1;
        if satisfied {
            self.passed += 1;
        }
    }

    /// A block passes iff every assertion it saw passed.
    pub fn all_passed(&self) -> bool {
        self.seen == self.passed
    }

    /// Accumulate another block's counters into this one.
    pub fn fold(&mut self, other: &Tally) {
        self.seen += other.seen;
        self.passed += other.passed;
    }
}

/// Lifecycle hook: receives the current it-label.
type Hook = Box<dyn FnMut(&str)>;

/// Execution context for one spec body: the spec's name, its running
/// totals, and the sink the report is written to.
pub struct SpecCtx<'a> {
    name: &'a str,
    tally: Tally,
    sink: &'a mut dyn ReportSink,
    style: ReportStyle,
}

impl<'a> SpecCtx<'a> {
    pub fn new(name: &'a str, sink: &'a mut dyn ReportSink, style: ReportStyle) -> Self {
        Self {
            name,
            tally: Tally::default(),
            sink,
            style,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// The spec's folded totals so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Opens a named grouping scope and runs `body` inside it.
    ///
    /// The scope starts with no-op hooks; `before_each`/`after_each`
    /// registrations inside `body` apply only to it blocks declared
    /// after them within this same call, and never leak into sibling
    /// or nested scopes.
    pub fn describe(&mut self, label: &str, body: impl FnOnce(&mut DescribeCtx<'_, '_>)) {
        let mut scope = DescribeCtx {
            label,
            before: None,
            after: None,
            spec: self,
        };
        body(&mut scope);
    }
}

/// A describe scope: a label plus the currently active hooks.
pub struct DescribeCtx<'d, 'a> {
    label: &'d str,
    before: Option<Hook>,
    after: Option<Hook>,
    spec: &'d mut SpecCtx<'a>,
}

impl<'d, 'a> DescribeCtx<'d, 'a> {
    /// Replaces the active before-hook for this scope. At most one
    /// before-hook is active at a time; the latest registration wins.
    pub fn before_each(&mut self, hook: impl FnMut(&str) + 'static) {
        self.before = Some(Box::new(hook));
    }

    /// Replaces the active after-hook for this scope.
    pub fn after_each(&mut self, hook: impl FnMut(&str) + 'static) {
        self.after = Some(Box::new(hook));
    }

    /// Opens a nested grouping scope with fresh (no-op) hooks.
    pub fn describe(&mut self, label: &str, body: impl FnOnce(&mut DescribeCtx<'_, '_>)) {
        self.spec.describe(label, body);
    }

    /// Runs one test case.
    ///
    /// The body receives a [`TestCtx`] with a zero-initialized tally.
    /// A `require_*!` failure returns from the body early; the
    /// after-hook, verdict line, and fold below still run.
    pub fn it(&mut self, label: &str, body: impl FnOnce(&mut TestCtx<'_>)) {
        if let Some(hook) = self.before.as_mut() {
            hook(label);
        }
        let tally = {
            let mut test = TestCtx {
                tally: Tally::default(),
                sink: &mut *self.spec.sink,
            };
            body(&mut test);
            test.tally
        };
        if let Some(hook) = self.after.as_mut() {
            hook(label);
        }
        self.spec.sink.emit(&report::verdict_line(
            &self.spec.style,
            self.label,
            label,
            tally.all_passed(),
        ));
        self.spec.tally.fold(&tally);
    }
}

/// Execution context for one it block: its private tally and the sink
/// failure diagnostics are written to.
///
/// Assertions mutate only this innermost tally; outer blocks see the
/// result by folding, never by direct mutation.
pub struct TestCtx<'a> {
    pub(crate) tally: Tally,
    pub(crate) sink: &'a mut dyn ReportSink,
}

impl TestCtx<'_> {
    /// The assertions seen/passed so far in this block.
    pub fn tally(&self) -> Tally {
        self.tally
    }
}
