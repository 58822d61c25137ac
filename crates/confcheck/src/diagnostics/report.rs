//! Error/warning reports.

use super::flatten::flatten;
use crate::foundation::{Outcome, OutcomeKind};
use serde::Serialize;
use std::fmt;

/// A blocking problem at `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub path: String,
    pub message: String,
}

/// An advisory note at `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningEntry {
    pub path: String,
    pub warning: String,
}

/// Path-qualified errors and warnings of one validation call.
///
/// Entries appear in flattening order: descendants before their parents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub errors: Vec<ErrorEntry>,
    pub warnings: Vec<WarningEntry>,
}

impl Report {
    /// Partitions every node of `outcome` into errors and warnings.
    ///
    /// Unlike [`format_report`] this also runs for passing outcomes, so the
    /// warnings of a valid configuration can still be surfaced.
    #[must_use]
    pub fn collect(outcome: &Outcome, start_path: &str) -> Self {
        let mut report = Self::default();
        for entry in flatten(outcome, start_path) {
            if !entry.ok {
                if let Some(message) = format(entry.outcome) {
                    report.errors.push(ErrorEntry {
                        path: entry.path.clone(),
                        message,
                    });
                }
            }
            if let Some(warning) = entry.outcome.warning().filter(|w| !w.is_empty()) {
                report.warnings.push(WarningEntry {
                    path: entry.path,
                    warning: warning.to_owned(),
                });
            }
        }
        report
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "error at {}: {}", error.path, error.message)?;
        }
        for warning in &self.warnings {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "warning at {}: {}", warning.path, warning.warning)?;
        }
        Ok(())
    }
}

/// Renders a simple failure as `expected: <type>, got: <type> (<value>)`.
///
/// Passing outcomes and collections have no standalone message.
#[must_use]
pub fn format(outcome: &Outcome) -> Option<String> {
    match outcome.kind() {
        OutcomeKind::Failed(mismatch) => Some(format!(
            "expected: {}, got: {} ({})",
            mismatch.expected, mismatch.actual, mismatch.value
        )),
        OutcomeKind::Passed | OutcomeKind::Collection(_) => None,
    }
}

/// Builds the report of a failed validation; `None` if `outcome` passed.
///
/// # Examples
///
/// ```rust,ignore
/// let outcome = object(schema! { "a" => int() }).validate(&mut value);
/// if let Some(report) = format_report(&outcome, "") {
///     eprintln!("{report}");
/// }
/// ```
#[must_use]
pub fn format_report(outcome: &Outcome, start_path: &str) -> Option<Report> {
    if outcome.is_ok() {
        return None;
    }
    Some(Report::collect(outcome, start_path))
}
