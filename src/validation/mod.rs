//! Validation of report requests.
//!
//! Every check pushes onto a shared list instead of returning early, so a
//! caller sees all problems with a request at once.

mod currencies;

pub use currencies::is_currency;

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::model::{ReportRequest, ReportType};

/// Dimensions the API no longer serves.
const DEPRECATED_DIMENSIONS: &[&str] = &["7DayTotals", "30DayTotals"];

/// Validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Dimension not accepted by the report type.
    InvalidDimension {
        dimension: String,
        report_type: String,
    },
    /// Filter not accepted by the report type.
    InvalidFilter { filter: String, report_type: String },
    /// Filter accepted, but not with this value.
    InvalidFilterValue {
        filter: String,
        value: String,
        report_type: String,
    },
    /// Filter the report type cannot run without.
    MissingFilter { filter: String, report_type: String },
    /// Metric not accepted by the report type.
    InvalidMetric { metric: String, report_type: String },
    /// Sort option not accepted by the report type.
    InvalidSortOption { option: String, report_type: String },
    /// Ascending sort on a report type that only sorts descending.
    DescendingSortRequired { option: String, report_type: String },
    /// More rows requested than a detailed report type returns.
    /// `requested` is zero when the caller asked for no limit.
    ResultLimitExceeded {
        requested: u32,
        max_results: u32,
        report_type: String,
    },
    /// Dimension retired from the API.
    DeprecatedDimension { dimension: String },
    /// End date not after start date.
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    /// Not an ISO 4217 currency code.
    InvalidCurrency { currency: String },
    /// Start index below one.
    InvalidStartIndex { index: u32 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidDimension {
                dimension,
                report_type,
            } => {
                write!(
                    f,
                    "Dimension '{}' is not valid for report type '{}'",
                    dimension, report_type
                )
            }
            ValidationError::InvalidFilter {
                filter,
                report_type,
            } => {
                write!(
                    f,
                    "Filter '{}' is not valid for report type '{}'",
                    filter, report_type
                )
            }
            ValidationError::InvalidFilterValue {
                filter,
                value,
                report_type,
            } => {
                write!(
                    f,
                    "Value '{}' is not valid for filter '{}' in report type '{}'",
                    value, filter, report_type
                )
            }
            ValidationError::MissingFilter {
                filter,
                report_type,
            } => {
                write!(
                    f,
                    "Filter '{}' is required by report type '{}'",
                    filter, report_type
                )
            }
            ValidationError::InvalidMetric {
                metric,
                report_type,
            } => {
                write!(
                    f,
                    "Metric '{}' is not valid for report type '{}'",
                    metric, report_type
                )
            }
            ValidationError::InvalidSortOption {
                option,
                report_type,
            } => {
                write!(
                    f,
                    "Sort option '{}' is not valid for report type '{}'",
                    option, report_type
                )
            }
            ValidationError::DescendingSortRequired {
                option,
                report_type,
            } => {
                write!(
                    f,
                    "Sort option '{}' must be descending ('-{}') for report type '{}'",
                    option, option, report_type
                )
            }
            ValidationError::ResultLimitExceeded {
                requested,
                max_results,
                report_type,
            } => {
                if *requested == 0 {
                    write!(
                        f,
                        "Report type '{}' returns at most {} results, but no limit was set",
                        report_type, max_results
                    )
                } else {
                    write!(
                        f,
                        "Report type '{}' returns at most {} results, got {}",
                        report_type, max_results, requested
                    )
                }
            }
            ValidationError::DeprecatedDimension { dimension } => {
                write!(
                    f,
                    "Dimension '{}' is deprecated and can no longer be used",
                    dimension
                )
            }
            ValidationError::InvalidDateRange { start, end } => {
                write!(
                    f,
                    "End date {} must be later than start date {}",
                    end, start
                )
            }
            ValidationError::InvalidCurrency { currency } => {
                write!(f, "'{}' is not an ISO 4217 currency code", currency)
            }
            ValidationError::InvalidStartIndex { index } => {
                write!(f, "Start index must be at least 1, got {}", index)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a request against the report type it resolved to.
pub fn validate(
    report_type: &ReportType,
    request: &ReportRequest,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_options(request, &mut errors);
    validate_against(report_type, request, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that do not depend on the report type.
pub fn validate_options(request: &ReportRequest, errors: &mut Vec<ValidationError>) {
    for dimension in unique(&request.dimensions) {
        if DEPRECATED_DIMENSIONS.contains(&dimension) {
            errors.push(ValidationError::DeprecatedDimension {
                dimension: dimension.to_string(),
            });
        }
    }

    if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
        if end <= start {
            errors.push(ValidationError::InvalidDateRange { start, end });
        }
    }

    if !is_currency(&request.currency) {
        errors.push(ValidationError::InvalidCurrency {
            currency: request.currency.clone(),
        });
    }

    if request.start_index < 1 {
        errors.push(ValidationError::InvalidStartIndex {
            index: request.start_index,
        });
    }
}

/// Checks every part of the request against the report type's allowed sets.
pub fn validate_against(
    report_type: &ReportType,
    request: &ReportRequest,
    errors: &mut Vec<ValidationError>,
) {
    validate_dimensions(report_type, request, errors);
    validate_filters(report_type, request, errors);
    validate_metrics(report_type, request, errors);
    validate_sort_options(report_type, request, errors);
    validate_limit(report_type, request, errors);
}

fn validate_dimensions(
    report_type: &ReportType,
    request: &ReportRequest,
    errors: &mut Vec<ValidationError>,
) {
    for dimension in unique(&request.dimensions) {
        // Already reported as deprecated
        if DEPRECATED_DIMENSIONS.contains(&dimension) {
            continue;
        }
        if !report_type.allows_dimension(dimension) {
            errors.push(ValidationError::InvalidDimension {
                dimension: dimension.to_string(),
                report_type: report_type.name.to_string(),
            });
        }
    }
}

fn validate_filters(
    report_type: &ReportType,
    request: &ReportRequest,
    errors: &mut Vec<ValidationError>,
) {
    for filter in report_type.required_filters {
        if request.filter(filter).is_none() {
            errors.push(ValidationError::MissingFilter {
                filter: filter.to_string(),
                report_type: report_type.name.to_string(),
            });
        }
    }

    for (filter, value) in &request.filters {
        match report_type.filter_values(filter) {
            None => errors.push(ValidationError::InvalidFilter {
                filter: filter.clone(),
                report_type: report_type.name.to_string(),
            }),
            Some(values) if !values.accepts(value) => {
                errors.push(ValidationError::InvalidFilterValue {
                    filter: filter.clone(),
                    value: value.clone(),
                    report_type: report_type.name.to_string(),
                })
            }
            Some(_) => {}
        }
    }
}

fn validate_metrics(
    report_type: &ReportType,
    request: &ReportRequest,
    errors: &mut Vec<ValidationError>,
) {
    for metric in unique(&request.metrics) {
        if !report_type.allows_metric(metric) {
            errors.push(ValidationError::InvalidMetric {
                metric: metric.to_string(),
                report_type: report_type.name.to_string(),
            });
        }
    }
}

fn validate_sort_options(
    report_type: &ReportType,
    request: &ReportRequest,
    errors: &mut Vec<ValidationError>,
) {
    for key in request.sort_keys() {
        if !report_type.allows_sort_option(key.metric) {
            errors.push(ValidationError::InvalidSortOption {
                option: key.raw.to_string(),
                report_type: report_type.name.to_string(),
            });
        } else if report_type.is_detailed() && !key.descending {
            errors.push(ValidationError::DescendingSortRequired {
                option: key.metric.to_string(),
                report_type: report_type.name.to_string(),
            });
        }
    }
}

fn validate_limit(
    report_type: &ReportType,
    request: &ReportRequest,
    errors: &mut Vec<ValidationError>,
) {
    let (Some(max_results), Some(requested)) = (report_type.max_results(), request.max_results)
    else {
        return;
    };

    if requested == 0 || requested > max_results {
        errors.push(ValidationError::ResultLimitExceeded {
            requested,
            max_results,
            report_type: report_type.name.to_string(),
        });
    }
}

/// Values in first-seen order, without repeats.
fn unique(values: &[String]) -> impl Iterator<Item = &str> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(String::as_str)
        .filter(move |v| seen.insert(*v))
}
