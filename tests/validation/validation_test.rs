use analytix::catalog;
use analytix::model::ReportRequest;
use analytix::validation::{self, ValidationError};
use chrono::NaiveDate;
use insta::assert_snapshot;

#[test]
fn test_validate_conforming_request() {
    let report_type = catalog::find("Traffic sources").unwrap();
    let request = ReportRequest::new()
        .with_dimensions(["insightTrafficSourceType", "day"])
        .with_filter("subscribedStatus", "UNSUBSCRIBED")
        .with_metric("views")
        .with_sort("estimatedMinutesWatched");

    assert!(validation::validate(report_type, &request).is_ok());
}

#[test]
fn test_validate_against_other_report_type() {
    // Validation does not care how the report type was chosen
    let report_type = catalog::find("Viewer demographics").unwrap();
    let request = ReportRequest::new()
        .with_dimension("day")
        .with_metric("views");

    let errors = validation::validate(report_type, &request).unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_options_checked_independently() {
    let request = ReportRequest::new()
        .with_dimension("7DayTotals")
        .with_currency("EURO")
        .with_start_index(0);

    let mut errors = Vec::new();
    validation::validate_options(&request, &mut errors);
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_equal_dates_are_invalid() {
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let request = ReportRequest::new().with_date_range(day, day);

    let mut errors = Vec::new();
    validation::validate_options(&request, &mut errors);
    assert_eq!(
        errors,
        vec![ValidationError::InvalidDateRange {
            start: day,
            end: day
        }]
    );
}

#[test]
fn test_currency_codes() {
    assert!(validation::is_currency("JPY"));
    assert!(!validation::is_currency("EURO"));
}

// ============================================================================
// Messages
// ============================================================================

#[test]
fn test_invalid_dimension_display() {
    let error = ValidationError::InvalidDimension {
        dimension: "day".to_string(),
        report_type: "Geography-based activity".to_string(),
    };
    assert_snapshot!(error.to_string(), @"Dimension 'day' is not valid for report type 'Geography-based activity'");
}

#[test]
fn test_invalid_filter_value_display() {
    let error = ValidationError::InvalidFilterValue {
        filter: "continent".to_string(),
        value: "999".to_string(),
        report_type: "Time-based activity".to_string(),
    };
    assert_snapshot!(error.to_string(), @"Value '999' is not valid for filter 'continent' in report type 'Time-based activity'");
}

#[test]
fn test_missing_filter_display() {
    let error = ValidationError::MissingFilter {
        filter: "video".to_string(),
        report_type: "Audience retention".to_string(),
    };
    assert_snapshot!(error.to_string(), @"Filter 'video' is required by report type 'Audience retention'");
}

#[test]
fn test_descending_sort_display() {
    let error = ValidationError::DescendingSortRequired {
        option: "views".to_string(),
        report_type: "Top playlists".to_string(),
    };
    assert_snapshot!(error.to_string(), @"Sort option 'views' must be descending ('-views') for report type 'Top playlists'");
}

#[test]
fn test_result_limit_display() {
    let error = ValidationError::ResultLimitExceeded {
        requested: 500,
        max_results: 200,
        report_type: "Top videos by region".to_string(),
    };
    assert_snapshot!(error.to_string(), @"Report type 'Top videos by region' returns at most 200 results, got 500");

    let error = ValidationError::ResultLimitExceeded {
        requested: 0,
        max_results: 25,
        report_type: "Playback locations (detailed)".to_string(),
    };
    assert_snapshot!(error.to_string(), @"Report type 'Playback locations (detailed)' returns at most 25 results, but no limit was set");
}

#[test]
fn test_request_option_display() {
    let error = ValidationError::InvalidDateRange {
        start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    };
    assert_snapshot!(error.to_string(), @"End date 2024-01-01 must be later than start date 2024-02-01");

    let error = ValidationError::InvalidCurrency {
        currency: "EURO".to_string(),
    };
    assert_snapshot!(error.to_string(), @"'EURO' is not an ISO 4217 currency code");

    let error = ValidationError::InvalidStartIndex { index: 0 };
    assert_snapshot!(error.to_string(), @"Start index must be at least 1, got 0");

    let error = ValidationError::DeprecatedDimension {
        dimension: "7DayTotals".to_string(),
    };
    assert_snapshot!(error.to_string(), @"Dimension '7DayTotals' is deprecated and can no longer be used");
}
