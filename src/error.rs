//! Errors returned when resolving a request to a report type.

use crate::validation::ValidationError;

/// Errors that can occur during resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The request selected a report type but does not conform to it.
    #[error("Invalid request for report type '{report_type}': {}", list(.violations))]
    Invalid {
        report_type: &'static str,
        violations: Vec<ValidationError>,
    },

    /// No report type matched. The catalog always ends with a definition
    /// that matches every request, so this only happens with a custom
    /// catalog that lacks one.
    #[error("No report type matches the request")]
    NoMatchingReportType,
}

impl ResolveError {
    /// Every violation found, empty for [`ResolveError::NoMatchingReportType`].
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            ResolveError::Invalid { violations, .. } => violations,
            ResolveError::NoMatchingReportType => &[],
        }
    }
}

fn list(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ResolveResult<T> = Result<T, ResolveError>;
