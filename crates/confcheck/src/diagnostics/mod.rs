//! Diagnostic pipeline: from an outcome tree to a user-facing report.
//!
//! [`flatten`] turns a nested [`Outcome`](crate::foundation::Outcome) into
//! path-qualified entries (children before their parent), [`format`] renders
//! one simple failure, and [`format_report`] partitions everything into
//! errors and warnings.

pub mod flatten;
pub mod report;

pub use flatten::{Diagnostic, flatten};
pub use report::{ErrorEntry, Report, WarningEntry, format, format_report};
