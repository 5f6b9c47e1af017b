//! # Expectation Recorder and Require Gate
//!
//! One assertion is one [`Checked`] record: the matcher verdict plus
//! everything a failure diagnostic needs (source location, the literal
//! call-site text, and the formatted operand values). [`TestCtx::record`]
//! counts the assertion in the innermost tally, prints the diagnostic on
//! failure, and returns whether the assertion was satisfied so callers
//! can make control-flow decisions.
//!
//! The public surface is the macro families at the bottom:
//! `expect_<kind>!` records and continues; `require_<kind>!` records and
//! returns from the enclosing test body when unsatisfied. The require
//! gate is a plain guard clause — it exits only the immediately
//! enclosing body, never outer scopes, and already-recorded assertions
//! are kept.

use crate::block::TestCtx;
use crate::report;

/// The outcome of evaluating one `(actual, expected, direction)` triple,
/// carried from the assertion macro into the recorder.
pub struct Checked {
    pub satisfied: bool,
    /// True for the `not_to` family; selects the two-line diagnostic
    /// shape instead of the three-line one.
    pub negated: bool,
    pub file: &'static str,
    pub line: u32,
    /// Literal source text of the actual operand.
    pub actual_text: &'static str,
    /// Literal source text of the matcher tag, e.g. `to_be(42)`.
    pub matcher_text: &'static str,
    /// Formatted actual value.
    pub actual: String,
    /// Formatted expected value.
    pub expected: String,
}

impl TestCtx<'_> {
    /// Records one assertion outcome into this block's tally.
    ///
    /// Always increments "assertions seen"; on success increments
    /// "assertions passed" with no output; on failure emits the
    /// diagnostic block for the check's direction family. Returns
    /// whether the assertion was satisfied.
    pub fn record(&mut self, check: Checked) -> bool {
        self.tally.record(check.satisfied);
        if !check.satisfied {
            self.sink
                .emit(&report::failure_location(check.file, check.line));
            if check.negated {
                self.sink.emit(&report::failure_expected_negated(
                    check.actual_text,
                    check.matcher_text,
                ));
            } else {
                self.sink.emit(&report::failure_expected(
                    check.actual_text,
                    check.matcher_text,
                    &check.expected,
                ));
                self.sink
                    .emit(&report::failure_got(check.actual_text, &check.actual));
            }
        }
        check.satisfied
    }
}

// ============================================================================
// INTERNAL DISPATCH: direction parsing shared by every typed macro
// ============================================================================

// The matcher tag written at the call site (`to_be(..)` etc.) is parsed
// here into a `Direction` and preserved verbatim for diagnostics.
#[doc(hidden)]
#[macro_export]
macro_rules! __minispec_check {
    ($t:expr, $ty:ty, $holds:expr, $actual:expr, to_be($expected:expr)) => {
        $crate::__minispec_check!(@record $t, $ty, $holds,
            $crate::matcher::Direction::ToBe, $actual, $expected,
            concat!("to_be(", stringify!($expected), ")"))
    };
    ($t:expr, $ty:ty, $holds:expr, $actual:expr, not_to_be($expected:expr)) => {
        $crate::__minispec_check!(@record $t, $ty, $holds,
            $crate::matcher::Direction::NotToBe, $actual, $expected,
            concat!("not_to_be(", stringify!($expected), ")"))
    };
    ($t:expr, $ty:ty, $holds:expr, $actual:expr, to_be_like($expected:expr)) => {
        $crate::__minispec_check!(@record $t, $ty, $holds,
            $crate::matcher::Direction::ToBeLike, $actual, $expected,
            concat!("to_be_like(", stringify!($expected), ")"))
    };
    ($t:expr, $ty:ty, $holds:expr, $actual:expr, not_to_be_like($expected:expr)) => {
        $crate::__minispec_check!(@record $t, $ty, $holds,
            $crate::matcher::Direction::NotToBeLike, $actual, $expected,
            concat!("not_to_be_like(", stringify!($expected), ")"))
    };
    (@record $t:expr, $ty:ty, $holds:expr, $dir:expr, $actual:expr, $expected:expr, $matcher_text:expr) => {{
        let __actual: $ty = $actual;
        let __expected: $ty = $expected;
        let __direction = $dir;
        $t.record($crate::expectation::Checked {
            satisfied: $holds(__direction, __actual, __expected),
            negated: __direction.is_negated(),
            file: file!(),
            line: line!(),
            actual_text: stringify!($actual),
            matcher_text: $matcher_text,
            actual: $crate::matcher::display(__actual),
            expected: $crate::matcher::display(__expected),
        })
    }};
}

// String operands go through `StrOperand` so call sites may pass
// `&str`, `Option<&str>`, or `&String`.
#[doc(hidden)]
#[macro_export]
macro_rules! __minispec_check_str {
    ($t:expr, $actual:expr, to_be($expected:expr)) => {
        $crate::__minispec_check_str!(@record $t,
            $crate::matcher::Direction::ToBe, $actual, $expected,
            concat!("to_be(", stringify!($expected), ")"))
    };
    ($t:expr, $actual:expr, not_to_be($expected:expr)) => {
        $crate::__minispec_check_str!(@record $t,
            $crate::matcher::Direction::NotToBe, $actual, $expected,
            concat!("not_to_be(", stringify!($expected), ")"))
    };
    ($t:expr, $actual:expr, to_be_like($expected:expr)) => {
        $crate::__minispec_check_str!(@record $t,
            $crate::matcher::Direction::ToBeLike, $actual, $expected,
            concat!("to_be_like(", stringify!($expected), ")"))
    };
    ($t:expr, $actual:expr, not_to_be_like($expected:expr)) => {
        $crate::__minispec_check_str!(@record $t,
            $crate::matcher::Direction::NotToBeLike, $actual, $expected,
            concat!("not_to_be_like(", stringify!($expected), ")"))
    };
    (@record $t:expr, $dir:expr, $actual:expr, $expected:expr, $matcher_text:expr) => {{
        let __actual = $crate::matcher::StrOperand::as_operand($actual);
        let __expected = $crate::matcher::StrOperand::as_operand($expected);
        let __direction = $dir;
        $t.record($crate::expectation::Checked {
            satisfied: $crate::matcher::string::holds(__direction, __actual, __expected),
            negated: __direction.is_negated(),
            file: file!(),
            line: line!(),
            actual_text: stringify!($actual),
            matcher_text: $matcher_text,
            actual: $crate::matcher::string::display(__actual),
            expected: $crate::matcher::string::display(__expected),
        })
    }};
}

// ============================================================================
// EXPECT FAMILY: record the assertion, keep going
// ============================================================================

/// Non-aborting assertion over `i32` operands.
///
/// The third argument is one of `to_be(..)`, `not_to_be(..)`,
/// `to_be_like(..)`, `not_to_be_like(..)`. Evaluates to `bool`:
/// whether the assertion was satisfied.
///
/// # Examples
///
/// ```rust
/// use minispec::{expect_i32, ReportBuffer, ReportStyle, SpecCtx};
///
/// let mut sink = ReportBuffer::new();
/// let mut spec = SpecCtx::new("demo", &mut sink, ReportStyle::plain());
/// spec.describe("arithmetic", |d| {
///     d.it("adds", |t| {
///         expect_i32!(t, 2 + 2, to_be(4));
///         expect_i32!(t, 2 + 2, not_to_be(5));
///     });
/// });
/// assert_eq!(spec.tally().passed, 2);
/// ```
#[macro_export]
macro_rules! expect_i32 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        $crate::__minispec_check!($t, i32, $crate::matcher::integer::holds, $actual, $($matcher)+)
    };
}

/// Non-aborting assertion over `u32` operands.
#[macro_export]
macro_rules! expect_u32 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        $crate::__minispec_check!($t, u32, $crate::matcher::integer::holds, $actual, $($matcher)+)
    };
}

/// Non-aborting assertion over `i64` operands.
#[macro_export]
macro_rules! expect_i64 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        $crate::__minispec_check!($t, i64, $crate::matcher::integer::holds, $actual, $($matcher)+)
    };
}

/// Non-aborting assertion over `u64` operands.
#[macro_export]
macro_rules! expect_u64 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        $crate::__minispec_check!($t, u64, $crate::matcher::integer::holds, $actual, $($matcher)+)
    };
}

/// Non-aborting assertion over `i128` operands.
#[macro_export]
macro_rules! expect_i128 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        $crate::__minispec_check!($t, i128, $crate::matcher::integer::holds, $actual, $($matcher)+)
    };
}

/// Non-aborting assertion over `u128` operands.
#[macro_export]
macro_rules! expect_u128 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        $crate::__minispec_check!($t, u128, $crate::matcher::integer::holds, $actual, $($matcher)+)
    };
}

/// Non-aborting assertion over `f64` operands.
///
/// `to_be`/`not_to_be` compare exactly; the `*_like` directions compare
/// within [`EPSILON`](crate::matcher::EPSILON).
#[macro_export]
macro_rules! expect_f64 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        $crate::__minispec_check!($t, f64, $crate::matcher::float::holds, $actual, $($matcher)+)
    };
}

/// Non-aborting assertion over nullable string operands.
///
/// Operands may be `&str`, `Option<&str>`, or `&String`; the null value
/// is `None` (spell a bare null `None::<&str>`). `to_be`/`not_to_be`
/// compare byte-exact, the `*_like` directions ASCII-case-insensitively.
#[macro_export]
macro_rules! expect_str {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        $crate::__minispec_check_str!($t, $actual, $($matcher)+)
    };
}

// ============================================================================
// REQUIRE FAMILY: record the assertion, abort the test body on failure
// ============================================================================

/// Aborting assertion over `i32` operands: on failure, returns from the
/// enclosing test body. Remaining assertions in that body are never
/// evaluated and are not counted as seen; the partial tally up to the
/// abort is what gets folded.
#[macro_export]
macro_rules! require_i32 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        if !$crate::expect_i32!($t, $actual, $($matcher)+) {
            return;
        }
    };
}

/// Aborting assertion over `u32` operands.
#[macro_export]
macro_rules! require_u32 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        if !$crate::expect_u32!($t, $actual, $($matcher)+) {
            return;
        }
    };
}

/// Aborting assertion over `i64` operands.
#[macro_export]
macro_rules! require_i64 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        if !$crate::expect_i64!($t, $actual, $($matcher)+) {
            return;
        }
    };
}

/// Aborting assertion over `u64` operands.
#[macro_export]
macro_rules! require_u64 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        if !$crate::expect_u64!($t, $actual, $($matcher)+) {
            return;
        }
    };
}

/// Aborting assertion over `i128` operands.
#[macro_export]
macro_rules! require_i128 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        if !$crate::expect_i128!($t, $actual, $($matcher)+) {
            return;
        }
    };
}

/// Aborting assertion over `u128` operands.
#[macro_export]
macro_rules! require_u128 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        if !$crate::expect_u128!($t, $actual, $($matcher)+) {
            return;
        }
    };
}

/// Aborting assertion over `f64` operands.
#[macro_export]
macro_rules! require_f64 {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        if !$crate::expect_f64!($t, $actual, $($matcher)+) {
            return;
        }
    };
}

/// Aborting assertion over nullable string operands.
#[macro_export]
macro_rules! require_str {
    ($t:expr, $actual:expr, $($matcher:tt)+) => {
        if !$crate::expect_str!($t, $actual, $($matcher)+) {
            return;
        }
    };
}
