//! foo-report - sums two ints and two doubles, doubles them, says hello
//!
//! Flow:
//! ```text
//! arith::add_pair -> report::Report::compute -> report::write_report -> stdout
//! ```

pub mod arith;
pub mod cli;
pub mod error;
pub mod report;

pub use error::{ReportError, Result};
pub use report::Report;
