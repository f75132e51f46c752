//! # Outcome Reports
//!
//! Every machine operation tells the user what happened through a
//! [`Reporter`]. The core only produces plain `(severity, message)` pairs;
//! colors, timestamps and where the text goes belong to the implementor.
//!
//! ```text
//! VendingMachine::deposit ──► Report { Success, "Successfully deposited …" }
//!                                   │
//!                                   ▼
//!                        &mut dyn Reporter
//!                     ┌─────────┴──────────┐
//!                     ▼                    ▼
//!             ConsolePrinter (CLI)    Vec<Report> (tests)
//! ```

use serde::Serialize;
use std::fmt;

use crate::error::CoreError;

/// How an outcome should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral information (listings, no-op notices).
    Info,
    /// The operation did what was asked.
    Success,
    /// The operation was refused; nothing changed.
    Error,
}

impl Severity {
    /// Lowercase tag: `info`, `success`, `error`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outcome record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub severity: Severity,
    pub message: String,
}

impl Report {
    pub fn info(message: impl Into<String>) -> Self {
        Report {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Report {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Report {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl From<&CoreError> for Report {
    fn from(err: &CoreError) -> Self {
        Report::error(err.to_string())
    }
}

/// The presentation collaborator.
pub trait Reporter {
    fn report(&mut self, report: Report);
}

/// Collects reports in memory.
impl Reporter for Vec<Report> {
    fn report(&mut self, report: Report) {
        self.push(report);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, report: Report) {
        (**self).report(report);
    }
}
