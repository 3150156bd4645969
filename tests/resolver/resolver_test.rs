use analytix::model::ReportRequest;
use analytix::resolver::{self, ReportTypeResolver};
use analytix::{ResolveError, ValidationError};
use chrono::NaiveDate;

fn violations(request: &ReportRequest) -> (&'static str, Vec<ValidationError>) {
    match resolver::resolve(request) {
        Err(ResolveError::Invalid {
            report_type,
            violations,
        }) => (report_type, violations),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(report_type) => panic!("expected violations, resolved to {}", report_type),
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_empty_request_resolves() {
    let report_type = resolver::resolve(&ReportRequest::new()).unwrap();
    assert_eq!(report_type.name, "Basic user activity");
}

#[test]
fn test_metrics_only_request_resolves() {
    let request = ReportRequest::new().with_metrics(["views", "likes", "estimatedRevenue"]);
    let report_type = resolver::resolve(&request).unwrap();
    assert_eq!(report_type.name, "Basic user activity");
}

#[test]
fn test_geography_wins_over_time() {
    let request = ReportRequest::new().with_dimensions(["day", "country"]);
    let (report_type, violations) = violations(&request);

    assert_eq!(report_type, "Geography-based activity");
    assert_eq!(
        violations,
        vec![ValidationError::InvalidDimension {
            dimension: "day".to_string(),
            report_type: "Geography-based activity".to_string(),
        }]
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let request = ReportRequest::new()
        .with_dimensions(["deviceType", "day"])
        .with_filter("country", "GB")
        .with_metric("views");

    let first = resolver::resolve(&request).unwrap();
    for _ in 0..10 {
        let again = resolver::resolve(&request).unwrap();
        assert!(std::ptr::eq(first, again));
    }
    assert_eq!(first.name, "Device types");
}

#[test]
fn test_dimension_order_does_not_matter() {
    let a = ReportRequest::new().with_dimensions(["deviceType", "operatingSystem"]);
    let b = ReportRequest::new().with_dimensions(["operatingSystem", "deviceType"]);

    let a = resolver::resolve(&a).unwrap();
    let b = resolver::resolve(&b).unwrap();
    assert_eq!(a.name, "Operating systems and device types");
    assert_eq!(a.name, b.name);
}

#[test]
fn test_us_variant_selected_by_province() {
    let request = ReportRequest::new()
        .with_dimension("province")
        .with_filter("country", "US");
    let report_type = resolver::resolve(&request).unwrap();
    assert_eq!(report_type.name, "Geography-based activity (US)");

    let request = ReportRequest::new()
        .with_dimension("day")
        .with_filter("province", "US-OH");
    let report_type = resolver::resolve(&request).unwrap();
    assert_eq!(report_type.name, "Time-based activity (US)");
}

#[test]
fn test_us_variant_requires_country() {
    let request = ReportRequest::new().with_dimension("province");
    let (report_type, violations) = violations(&request);

    assert_eq!(report_type, "Geography-based activity (US)");
    assert_eq!(
        violations,
        vec![ValidationError::MissingFilter {
            filter: "country".to_string(),
            report_type: "Geography-based activity (US)".to_string(),
        }]
    );
}

#[test]
fn test_playlist_scope() {
    let request = ReportRequest::new()
        .with_dimension("day")
        .with_filter("isCurated", "1")
        .with_metric("playlistStarts");
    let report_type = resolver::resolve(&request).unwrap();
    assert_eq!(report_type.name, "Time-based activity for playlists");

    // Without the flag the same request is a video report
    let request = ReportRequest::new()
        .with_dimension("day")
        .with_metric("playlistStarts");
    let (report_type, violations) = violations(&request);
    assert_eq!(report_type, "Time-based activity");
    assert_eq!(violations.len(), 1);
    assert!(matches!(
        &violations[0],
        ValidationError::InvalidMetric { metric, .. } if metric == "playlistStarts"
    ));
}

#[test]
fn test_top_videos_narrowed_by_filter() {
    let cases = [
        ("subscribedStatus", "SUBSCRIBED", "Top videos by subscription status"),
        ("youtubeProduct", "CORE", "Top videos by YouTube product"),
        ("liveOrOnDemand", "LIVE", "Top videos by playback detail"),
        ("province", "US-TX", "Top videos by state"),
        ("country", "FR", "Top videos by region"),
    ];

    for (key, value, expected) in cases {
        let request = ReportRequest::new()
            .with_dimension("video")
            .with_filter(key, value)
            .with_sort("-views")
            .with_max_results(10);
        let report_type = resolver::resolve(&request).unwrap();
        assert_eq!(report_type.name, expected, "filter {}", key);
    }
}

#[test]
fn test_ad_performance() {
    let request = ReportRequest::new()
        .with_dimensions(["adType", "day"])
        .with_metrics(["grossRevenue", "cpm"]);
    let report_type = resolver::resolve(&request).unwrap();
    assert_eq!(report_type.name, "Ad performance");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_limit_enforced_for_detailed_types() {
    let request = ReportRequest::new()
        .with_dimension("video")
        .with_sort("-estimatedMinutesWatched")
        .with_max_results(201);
    let (report_type, violations) = violations(&request);

    assert_eq!(report_type, "Top videos by region");
    assert_eq!(
        violations,
        vec![ValidationError::ResultLimitExceeded {
            requested: 201,
            max_results: 200,
            report_type: "Top videos by region".to_string(),
        }]
    );

    let request = request.with_max_results(200);
    assert!(resolver::resolve(&request).is_ok());
}

#[test]
fn test_detailed_type_without_limit_resolves() {
    let request = ReportRequest::new()
        .with_dimension("insightTrafficSourceDetail")
        .with_filter("insightTrafficSourceType", "YT_SEARCH");
    let report_type = resolver::resolve(&request).unwrap();
    assert_eq!(report_type.name, "Traffic sources (detailed)");
    assert_eq!(report_type.max_results(), Some(25));
}

#[test]
fn test_three_violations_reported_together() {
    let request = ReportRequest::new()
        .with_dimensions(["country", "day"])
        .with_filter("continent", "999")
        .with_metrics(["views", "notAMetric"]);
    let (report_type, violations) = violations(&request);

    assert_eq!(report_type, "Geography-based activity");
    assert_eq!(violations.len(), 3);
    assert!(matches!(violations[0], ValidationError::InvalidDimension { .. }));
    assert!(matches!(violations[1], ValidationError::InvalidFilterValue { .. }));
    assert!(matches!(violations[2], ValidationError::InvalidMetric { .. }));
}

#[test]
fn test_invalid_filter_key() {
    let request = ReportRequest::new().with_filter("isCurated", "0");
    let (report_type, violations) = violations(&request);

    assert_eq!(report_type, "Basic user activity");
    assert_eq!(
        violations,
        vec![ValidationError::InvalidFilter {
            filter: "isCurated".to_string(),
            report_type: "Basic user activity".to_string(),
        }]
    );
}

#[test]
fn test_video_filter_takes_a_list() {
    let request = ReportRequest::new()
        .with_dimension("day")
        .with_filter("video", "dQw4w9WgXcQ,9bZkp7q19f0");
    assert!(resolver::resolve(&request).is_ok());

    let request = ReportRequest::new()
        .with_dimension("day")
        .with_filter("video", "dQw4w9WgXcQ,");
    let (_, violations) = violations(&request);
    assert!(matches!(
        &violations[..],
        [ValidationError::InvalidFilterValue { filter, .. }] if filter == "video"
    ));
}

#[test]
fn test_single_value_filters_reject_lists() {
    let cases = [
        ("country", "US,GB"),
        ("continent", "002,150"),
        ("subContinent", "005,011"),
    ];

    for (key, value) in cases {
        let request = ReportRequest::new()
            .with_dimension("day")
            .with_filter(key, value);
        let (report_type, violations) = violations(&request);

        assert_eq!(report_type, "Time-based activity");
        assert_eq!(
            violations,
            vec![ValidationError::InvalidFilterValue {
                filter: key.to_string(),
                value: value.to_string(),
                report_type: "Time-based activity".to_string(),
            }],
            "filter {}",
            key
        );
    }
}

#[test]
fn test_required_filter_missing() {
    let request = ReportRequest::new().with_dimension("elapsedVideoTimeRatio");
    let (report_type, violations) = violations(&request);

    assert_eq!(report_type, "Audience retention");
    assert_eq!(
        violations,
        vec![ValidationError::MissingFilter {
            filter: "video".to_string(),
            report_type: "Audience retention".to_string(),
        }]
    );
}

#[test]
fn test_detailed_sort_must_descend() {
    let request = ReportRequest::new()
        .with_dimension("video")
        .with_sort("views")
        .with_sort("-likes");
    let (report_type, violations) = violations(&request);

    assert_eq!(report_type, "Top videos by region");
    assert_eq!(
        violations,
        vec![
            ValidationError::DescendingSortRequired {
                option: "views".to_string(),
                report_type: "Top videos by region".to_string(),
            },
            ValidationError::InvalidSortOption {
                option: "-likes".to_string(),
                report_type: "Top videos by region".to_string(),
            },
        ]
    );
}

#[test]
fn test_request_options_accumulate_with_report_type_violations() {
    let request = ReportRequest::new()
        .with_dimensions(["country", "day"])
        .with_date_range(date("2024-02-01"), date("2024-01-01"))
        .with_currency("usd")
        .with_start_index(0);
    let (_, violations) = violations(&request);

    assert_eq!(
        violations,
        vec![
            ValidationError::InvalidDateRange {
                start: date("2024-02-01"),
                end: date("2024-01-01"),
            },
            ValidationError::InvalidCurrency {
                currency: "usd".to_string(),
            },
            ValidationError::InvalidStartIndex { index: 0 },
            ValidationError::InvalidDimension {
                dimension: "day".to_string(),
                report_type: "Geography-based activity".to_string(),
            },
        ]
    );
}

#[test]
fn test_deprecated_dimension() {
    let request = ReportRequest::new().with_dimension("30DayTotals");
    let (report_type, violations) = violations(&request);

    assert_eq!(report_type, "Basic user activity");
    assert_eq!(
        violations,
        vec![ValidationError::DeprecatedDimension {
            dimension: "30DayTotals".to_string(),
        }]
    );
}

#[test]
fn test_error_message_lists_violations() {
    let request = ReportRequest::new()
        .with_dimensions(["country", "day"])
        .with_metric("notAMetric");
    let err = resolver::resolve(&request).unwrap_err();

    assert_eq!(err.violations().len(), 2);
    insta::assert_snapshot!(
        err.to_string(),
        @"Invalid request for report type 'Geography-based activity': Dimension 'day' is not valid for report type 'Geography-based activity'; Metric 'notAMetric' is not valid for report type 'Geography-based activity'"
    );
}

// ============================================================================
// Resolver instances
// ============================================================================

#[test]
fn test_resolver_without_fallback() {
    let catalog: Vec<_> = analytix::catalog::catalog()
        .iter()
        .filter(|rt| !rt.signature.is_empty())
        .copied()
        .collect();
    let resolver = ReportTypeResolver::with_catalog(&catalog);

    assert!(resolver.resolve(&ReportRequest::new().with_dimension("day")).is_ok());

    let err = resolver.resolve(&ReportRequest::new()).unwrap_err();
    assert!(matches!(err, ResolveError::NoMatchingReportType));
    assert!(err.violations().is_empty());
}

#[test]
fn test_effective_metrics() {
    let request = ReportRequest::new().with_dimension("ageGroup");
    let report_type = resolver::resolve(&request).unwrap();
    assert_eq!(request.effective_metrics(report_type), vec!["viewerPercentage"]);

    let request = request.with_metric("viewerPercentage");
    assert_eq!(request.effective_metrics(report_type), vec!["viewerPercentage"]);
}
