//! Handles all user-facing output for the engine.
//!
//! Every report line flows through a [`ReportSink`]: the suite runner
//! writes to [`StdoutSink`], while tests and embedding hosts can capture
//! the report programmatically with [`ReportBuffer`]. Centralizing the
//! line formatting here keeps the report byte-stable across callers.

use crate::block::Tally;

// ============================================================================
// REPORT SINKS: ReportBuffer and StdoutSink implementations
// ============================================================================

/// Destination for report lines.
pub trait ReportSink {
    fn emit(&mut self, line: &str);
}

/// Writes report lines to stdout; the default sink for suite runs.
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Collects report lines into a String for testing or programmatic
/// capture.
pub struct ReportBuffer {
    pub buffer: String,
}

impl ReportBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Default for ReportBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for ReportBuffer {
    fn emit(&mut self, line: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
    }
}

// ============================================================================
// STYLE: color handling for terminal output
// ============================================================================

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

const PASS_GLYPH: &str = "✓";
const FAIL_GLYPH: &str = "✗";

/// Controls color usage in report lines. Colors only ever wrap the
/// pass/fail glyphs; every other line stays plain so captured reports
/// compare byte-for-byte.
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    pub use_colors: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl ReportStyle {
    /// A style with colors disabled, for buffer capture and tests.
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn pass_glyph(&self) -> String {
        self.colorize(PASS_GLYPH, GREEN)
    }

    fn fail_glyph(&self) -> String {
        self.colorize(FAIL_GLYPH, RED)
    }
}

// ============================================================================
// LINE BUILDERS: the report's line shapes
// ============================================================================

/// `Begin spec <NAME>` — emitted at every spec's entry.
pub fn spec_header(name: &str) -> String {
    format!("Begin spec <{}>", name)
}

/// `Done spec: P of N tests passed` — emitted at every spec's exit.
pub fn spec_summary(tally: &Tally) -> String {
    format!("Done spec: {} of {} tests passed", tally.passed, tally.seen)
}

/// The single-line verdict for an it block, tagged with the enclosing
/// describe label.
pub fn verdict_line(
    style: &ReportStyle,
    describe_label: &str,
    it_label: &str,
    passed: bool,
) -> String {
    let glyph = if passed {
        style.pass_glyph()
    } else {
        style.fail_glyph()
    };
    format!("\t{} {} {}", glyph, describe_label, it_label)
}

/// First line of a failure diagnostic: the source location.
pub fn failure_location(file: &str, line: u32) -> String {
    format!("\t* [{}, L{}]", file, line)
}

/// Second line of a `not_to`-family failure: the violated expectation,
/// quoted from the call site.
pub fn failure_expected_negated(actual_text: &str, matcher_text: &str) -> String {
    format!("\t|\texpected {} {}", actual_text, matcher_text)
}

/// Second line of a `to`-family failure: the violated expectation plus
/// the expected value.
pub fn failure_expected(actual_text: &str, matcher_text: &str, expected_value: &str) -> String {
    format!(
        "\t|\texpected {} {} -> {}",
        actual_text, matcher_text, expected_value
    )
}

/// Third line of a `to`-family failure: what the actual operand held.
pub fn failure_got(actual_text: &str, actual_value: &str) -> String {
    format!("\t|\t     got {} is({})", actual_text, actual_value)
}
