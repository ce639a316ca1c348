//! Computes the four results and renders the transcript
//!
//! Doubles use C-style `%f` formatting: fixed point, six decimals.

use crate::arith::{add_pair, double};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

pub const GREETING: &str = "Hello from Foo!";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub int_result: i32,
    pub double_result: f64,
    pub int_product: i32,
    pub double_product: f64,
}

impl Report {
    pub fn compute() -> Self {
        let int_result = add_pair(3, 4);
        let double_result = add_pair(3.5, 4.5);

        let int_product = double(int_result);
        let double_product = double(double_result);

        tracing::debug!(int_result, double_result, int_product, double_product, "computed report");

        Self {
            int_result,
            double_result,
            int_product,
            double_product,
        }
    }

    /// The four labeled result lines, without trailing newlines.
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Int Result: {}", self.int_result),
            format!("Double Result: {:.6}", self.double_result),
            format!("Int Product: {}", self.int_product),
            format!("Double Product: {:.6}", self.double_product),
        ]
    }
}

/// JSON view of a run: the report fields plus the greeting.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    #[serde(flatten)]
    pub report: &'a Report,
    pub greeting: &'static str,
}

/// Write the greeting line.
pub fn greet<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", GREETING)?;
    Ok(())
}

/// Write the result lines followed by the greeting.
pub fn write_report<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    for line in report.lines() {
        writeln!(out, "{}", line)?;
    }
    greet(out)?;
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(report: &Report, out: &mut W, pretty: bool) -> Result<()> {
    let view = JsonReport {
        report,
        greeting: GREETING,
    };
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &view)?;
    } else {
        serde_json::to_writer(&mut *out, &view)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
