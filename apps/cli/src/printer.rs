//! # Console Printer
//!
//! Turns machine reports into terminal lines.
//!
//! ## Line Format
//! ```text
//! 14:03:27 | SUCCESS: Purchased Oreos for 0.50. Your remaining balance is 9.50. Enjoy!
//! └──┬───┘   └──┬──┘  └───────────────────────┬──────────────────────────────────┘
//!  local    severity                       message
//!  time     (colored: INFO yellow, SUCCESS green, ERROR red)
//! ```
//!
//! Errors go to stderr, everything else to stdout. Colors follow
//! `--color` / `NO_COLOR` and whether the stream is a terminal.

use chrono::{Local, NaiveTime};
use owo_colors::{OwoColorize, Stream};
use std::io::{self, Stderr, Stdout, Write};
use tracing::warn;
use vend_core::{Report, Reporter, Severity};

/// Timestamp format of every line.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Writes reports to a pair of output streams.
pub struct ConsolePrinter<O: Write = Stdout, E: Write = Stderr> {
    out: O,
    err: E,
}

impl ConsolePrinter {
    /// Printer on the process's stdout and stderr.
    pub fn stdio() -> Self {
        ConsolePrinter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl<O: Write, E: Write> ConsolePrinter<O, E> {
    /// Printer on arbitrary writers.
    pub fn with_writers(out: O, err: E) -> Self {
        ConsolePrinter { out, err }
    }

    /// Returns the writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write(&mut self, report: &Report, time: NaiveTime) -> io::Result<()> {
        let time = time.format(TIME_FORMAT);
        let tag = report.severity.as_str().to_uppercase();

        match report.severity {
            Severity::Info => writeln!(
                self.out,
                "{} | {}: {}",
                time,
                tag.if_supports_color(Stream::Stdout, |t| t.yellow()),
                report.message
            ),
            Severity::Success => writeln!(
                self.out,
                "{} | {}: {}",
                time,
                tag.if_supports_color(Stream::Stdout, |t| t.green()),
                report.message
            ),
            Severity::Error => writeln!(
                self.err,
                "{} | {}: {}",
                time,
                tag.if_supports_color(Stream::Stderr, |t| t.red()),
                report.message
            ),
        }
    }
}

impl<O: Write, E: Write> Reporter for ConsolePrinter<O, E> {
    fn report(&mut self, report: Report) {
        if let Err(e) = self.write(&report, Local::now().time()) {
            warn!(error = %e, severity = %report.severity, "Failed to write report");
        }
    }
}
