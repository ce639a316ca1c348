//! Command-line interface for foo-report

use clap::error::ErrorKind;
use clap::{Parser as ClapParser, ValueEnum};
use colored::Colorize;
use std::io::Write;

use crate::error::Result;
use crate::report::{self, Report};

#[derive(ClapParser, Debug)]
#[command(name = "foo-report")]
#[command(about = "Adds two ints and two doubles, doubles the sums, and prints the results")]
#[command(version)]
#[command(after_help = "EXAMPLES:
    foo-report              Print the five-line report
    foo-report -f json      Print the report as one JSON object

Set RUST_LOG=debug to trace the computed values on stderr.")]
pub struct Cli {
    /// Output format for the report
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Output format for the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled plain-text lines (default)
    #[default]
    Human,
    /// Single-line JSON object
    Json,
    /// The same JSON object, indented over several lines
    JsonPretty,
}

/// Parse argv, print the report, and return the process exit code.
///
/// Unrecognised arguments never stop the report: they are logged and the
/// default format is used.
pub fn run_cli() -> i32 {
    init_logging();
    let format = match parse_format(std::env::args_os()) {
        Ok(format) => format,
        Err(e) => {
            let _ = e.print();
            return 0;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(format, &mut out) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            1
        }
    }
}

/// Pick the output format from argv, falling back to `Human` on bad input.
///
/// Only `--help` and `--version` come back as `Err`, for the caller to print.
pub fn parse_format<I, T>(args: I) -> std::result::Result<OutputFormat, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli.format),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => Err(e),
        Err(e) => {
            tracing::warn!(kind = ?e.kind(), "ignoring command-line arguments");
            Ok(OutputFormat::Human)
        }
    }
}

/// Compute the report and write it to `out` in the given format.
pub fn run<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    let report = Report::compute();
    tracing::debug!(?format, "writing report");

    match format {
        OutputFormat::Human => report::write_report(&report, out),
        OutputFormat::Json => report::write_json(&report, out, false),
        OutputFormat::JsonPretty => report::write_json(&report, out, true),
    }
}

// Logs go to stderr so stdout stays exactly the report.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_human() {
        let cli = Cli::try_parse_from(["foo-report"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["foo-report", "-f", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["foo-report", "--format", "json-pretty"]).unwrap();
        assert_eq!(cli.format, OutputFormat::JsonPretty);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["foo-report", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_parse_format_ignores_stray_args() {
        assert_eq!(parse_format(["foo-report", "extra"]).unwrap(), OutputFormat::Human);
        assert_eq!(parse_format(["foo-report", "-f", "xml"]).unwrap(), OutputFormat::Human);
        assert_eq!(parse_format(["foo-report", "--bogus"]).unwrap(), OutputFormat::Human);
    }

    #[test]
    fn test_parse_format_reads_flag() {
        assert_eq!(parse_format(["foo-report", "-f", "json"]).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_parse_format_help_and_version() {
        let err = parse_format(["foo-report", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let err = parse_format(["foo-report", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_run_human() {
        let mut buf = Vec::new();
        run(OutputFormat::Human, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert_eq!(out.lines().next(), Some("Int Result: 7"));
        assert_eq!(out.lines().last(), Some("Hello from Foo!"));
    }

    #[test]
    fn test_run_json_pretty_parses() {
        let mut buf = Vec::new();
        run(OutputFormat::JsonPretty, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["int_product"], 14);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let err = run(OutputFormat::Human, &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, crate::error::ReportError::Io(_)));
    }
}
