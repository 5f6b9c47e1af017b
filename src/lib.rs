pub use crate::block::{DescribeCtx, SpecCtx, Tally, TestCtx};
pub use crate::expectation::Checked;
pub use crate::matcher::{Direction, EPSILON};
pub use crate::report::{ReportBuffer, ReportSink, ReportStyle, StdoutSink};
pub use crate::runner::{SpecDef, Suite, SuiteError, Verdict};

pub mod block;
pub mod expectation;
pub mod matcher;
pub mod report;
pub mod runner;
