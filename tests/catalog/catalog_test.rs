use std::collections::HashSet;

use analytix::catalog::{self, CATALOG, CATALOG_SIZE};
use analytix::model::{Condition, Domain, ReportKind, ReportRequest, ReportType};
use analytix::resolver;

/// A request built from a report type's own signature and required filters.
fn request_for(report_type: &ReportType) -> ReportRequest {
    let mut request = ReportRequest::new();

    for condition in report_type.signature {
        request = match *condition {
            Condition::Dimension(name) => request.with_dimension(name),
            Condition::AnyDimension(names) | Condition::AnyAttribute(names) => {
                request.with_dimension(names[0])
            }
            Condition::Filter(key) => {
                let values = report_type
                    .filter_values(key)
                    .unwrap_or_else(|| panic!("{}: signature filter {} not allowed", report_type, key));
                request.with_filter(key, values.example())
            }
            Condition::FilterValue(key, value) => request.with_filter(key, value),
        };
    }

    for key in report_type.required_filters {
        if request.filter(key).is_none() {
            let values = report_type
                .filter_values(key)
                .unwrap_or_else(|| panic!("{}: required filter {} not allowed", report_type, key));
            request = request.with_filter(*key, values.example());
        }
    }

    request
}

#[test]
fn test_catalog_size_and_unique_names() {
    assert_eq!(CATALOG.len(), CATALOG_SIZE);
    assert_eq!(CATALOG_SIZE, 43);

    let names: HashSet<_> = CATALOG.iter().map(|rt| rt.name).collect();
    assert_eq!(names.len(), CATALOG_SIZE);
}

#[test]
fn test_domain_split() {
    assert_eq!(catalog::by_domain(Domain::Video).count(), 29);
    assert_eq!(catalog::by_domain(Domain::Playlist).count(), 13);
    assert_eq!(catalog::by_domain(Domain::AdPerformance).count(), 1);
}

#[test]
fn test_every_report_type_is_reachable() {
    for report_type in catalog::catalog() {
        let request = request_for(report_type);
        match resolver::resolve(&request) {
            Ok(resolved) => assert_eq!(
                resolved.name, report_type.name,
                "request {:?} resolved to the wrong report type",
                request
            ),
            Err(e) => panic!("{}: {}", report_type.name, e),
        }
    }
}

#[test]
fn test_general_sort_options_are_the_metrics() {
    for report_type in CATALOG.iter().filter(|rt| !rt.is_detailed()) {
        assert_eq!(report_type.sort_options(), report_type.metrics, "{}", report_type);
        assert_eq!(report_type.max_results(), None, "{}", report_type);
    }
}

#[test]
fn test_detailed_sort_options_are_kept_separate() {
    let detailed: Vec<_> = CATALOG.iter().filter(|rt| rt.is_detailed()).collect();
    assert!(!detailed.is_empty());

    for report_type in detailed {
        let ReportKind::Detailed {
            sort_options,
            max_results,
        } = report_type.kind
        else {
            unreachable!();
        };
        assert!(max_results > 0, "{}", report_type);
        assert!(!sort_options.is_empty(), "{}", report_type);
        for option in sort_options {
            assert!(
                report_type.allows_metric(option),
                "{}: sort option {} is not a metric",
                report_type,
                option
            );
        }
    }
}

#[test]
fn test_top_report_types_sort_on_fewer_options_than_metrics() {
    let top: Vec<_> = CATALOG
        .iter()
        .filter(|rt| rt.name.starts_with("Top "))
        .collect();
    assert_eq!(top.len(), 6);

    for report_type in top {
        assert!(report_type.is_detailed(), "{}", report_type);
        assert!(
            report_type.sort_options().len() < report_type.metrics.len(),
            "{}",
            report_type
        );
        assert_eq!(report_type.max_results(), Some(200), "{}", report_type);
    }
}

#[test]
fn test_us_variants_are_distinct_entries() {
    let us: Vec<_> = CATALOG
        .iter()
        .filter(|rt| rt.name.ends_with("(US)"))
        .collect();
    assert_eq!(us.len(), 7);

    for report_type in us {
        let base = report_type.name.trim_end_matches(" (US)");
        let base = catalog::find(base).unwrap_or_else(|| panic!("no base for {}", report_type));
        assert_ne!(base.signature, report_type.signature);
    }
}

#[test]
fn test_playlist_reports_require_curated_flag() {
    for report_type in catalog::by_domain(Domain::Playlist) {
        assert!(report_type.required_filters.contains(&"isCurated"), "{}", report_type);
        assert!(
            report_type
                .signature
                .contains(&Condition::FilterValue("isCurated", "1")),
            "{}",
            report_type
        );
    }
}

#[test]
fn test_required_filters_are_allowed() {
    for report_type in CATALOG.iter() {
        for key in report_type.required_filters {
            assert!(
                report_type.filter_values(key).is_some(),
                "{}: required filter {} is not allowed",
                report_type,
                key
            );
        }
    }
}

#[test]
fn test_report_type_serializes() {
    let report_type = catalog::find("Top videos by region").unwrap();
    let json = serde_json::to_value(report_type).unwrap();

    assert_eq!(json["name"], "Top videos by region");
    assert_eq!(json["domain"], "video");
    assert_eq!(json["kind"], "detailed");
    assert_eq!(json["max_results"], 200);
    assert_eq!(json["dimensions"], serde_json::json!(["video"]));
    assert_eq!(json["filters"]["continent"]["kind"], "one_of");
}
