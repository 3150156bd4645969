//! Report type resolution.
//!
//! Resolution happens in two steps:
//!
//! ```text
//! ReportRequest → determine (first matching signature) → validate → &ReportType
//! ```
//!
//! # Example
//!
//! ```
//! use analytix::model::ReportRequest;
//! use analytix::resolver;
//!
//! let request = ReportRequest::new()
//!     .with_dimension("day")
//!     .with_metric("views");
//!
//! let report_type = resolver::resolve(&request).unwrap();
//! assert_eq!(report_type.name, "Time-based activity");
//! ```

use tracing::{debug, info};

use crate::catalog;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{ReportRequest, ReportType};
use crate::validation;

/// Selects and validates report types against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ReportTypeResolver<'a> {
    catalog: &'a [ReportType],
}

impl Default for ReportTypeResolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTypeResolver<'static> {
    /// A resolver over the built-in catalog.
    pub fn new() -> Self {
        Self {
            catalog: catalog::catalog(),
        }
    }
}

impl<'a> ReportTypeResolver<'a> {
    /// A resolver over a caller-supplied catalog, evaluated in slice order.
    pub fn with_catalog(catalog: &'a [ReportType]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a [ReportType] {
        self.catalog
    }

    /// The first report type whose signature holds for `request`.
    ///
    /// Signatures can overlap; when several hold, catalog order decides.
    /// `{day, country}` therefore selects "Geography-based activity" rather
    /// than "Time-based activity", and validation then rejects `day`.
    pub fn determine(&self, request: &ReportRequest) -> ResolveResult<&'a ReportType> {
        debug!(
            dimensions = ?request.dimensions,
            filters = ?request.filters,
            "Determining report type"
        );

        for report_type in self.catalog {
            if report_type.matches(request) {
                debug!(report_type = report_type.name, "Signature matched");
                return Ok(report_type);
            }
        }

        Err(ResolveError::NoMatchingReportType)
    }

    /// Determine the report type for `request` and validate the request
    /// against it, collecting every violation.
    pub fn resolve(&self, request: &ReportRequest) -> ResolveResult<&'a ReportType> {
        let report_type = self.determine(request)?;
        info!(report_type = report_type.name, "Report type selected");

        match validation::validate(report_type, request) {
            Ok(()) => Ok(report_type),
            Err(violations) => {
                debug!(
                    report_type = report_type.name,
                    count = violations.len(),
                    "Request failed validation"
                );
                Err(ResolveError::Invalid {
                    report_type: report_type.name,
                    violations,
                })
            }
        }
    }
}

/// Determine the report type for `request` using the built-in catalog.
pub fn determine(request: &ReportRequest) -> ResolveResult<&'static ReportType> {
    ReportTypeResolver::new().determine(request)
}

/// Resolve `request` against the built-in catalog.
pub fn resolve(request: &ReportRequest) -> ResolveResult<&'static ReportType> {
    ReportTypeResolver::new().resolve(request)
}
