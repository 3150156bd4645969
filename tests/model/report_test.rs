use analytix::catalog;
use analytix::model::{ColumnType, DataType, Report, ReportError};
use serde_json::json;

fn time_based_response() -> serde_json::Value {
    json!({
        "kind": "youtubeAnalytics#resultTable",
        "columnHeaders": [
            {"name": "day", "columnType": "DIMENSION", "dataType": "STRING"},
            {"name": "views", "columnType": "METRIC", "dataType": "INTEGER"},
            {"name": "averageViewPercentage", "columnType": "METRIC", "dataType": "FLOAT"}
        ],
        "rows": [
            ["2024-01-01", 120, 41.5],
            ["2024-01-02", 98, 39.0],
            ["2024-01-03", 143, 44.25]
        ]
    })
}

#[test]
fn test_parse_report() {
    let report_type = catalog::find("Time-based activity").unwrap();
    let report = Report::from_json(time_based_response(), report_type).unwrap();

    assert_eq!(report.shape(), (3, 3));
    assert_eq!(report.columns(), vec!["day", "views", "averageViewPercentage"]);
    assert_eq!(report.rows()[1][1], json!(98));
    assert_eq!(report.data["kind"], "youtubeAnalytics#resultTable");

    let header = &report.column_headers()[2];
    assert_eq!(header.column_type, ColumnType::Metric);
    assert_eq!(header.data_type, DataType::Float);
}

#[test]
fn test_dimension_and_metric_columns() {
    let report_type = catalog::find("Time-based activity").unwrap();
    let report = Report::from_json(time_based_response(), report_type).unwrap();

    assert_eq!(report.dimensions().into_iter().collect::<Vec<_>>(), vec!["day"]);
    assert_eq!(report.ordered_dimensions(), vec!["day"]);
    assert_eq!(report.ordered_metrics(), vec!["views", "averageViewPercentage"]);
}

#[test]
fn test_metrics_are_the_report_type_metrics() {
    let report_type = catalog::find("Time-based activity").unwrap();
    let report = Report::from_json(time_based_response(), report_type).unwrap();

    let metrics = report.metrics();
    assert_eq!(metrics.len(), report_type.metrics.len());
    assert!(metrics.contains("views"));
    assert!(metrics.contains("estimatedRevenue"));
    assert!(!metrics.contains("day"));
}

#[test]
fn test_missing_rows_is_empty() {
    let report_type = catalog::find("Basic user activity").unwrap();
    let data = json!({
        "columnHeaders": [
            {"name": "views", "columnType": "METRIC", "dataType": "INTEGER"}
        ]
    });
    let report = Report::from_json(data, report_type).unwrap();

    assert_eq!(report.shape(), (0, 1));
    assert!(report.rows().is_empty());
}

#[test]
fn test_api_error() {
    let report_type = catalog::find("Basic user activity").unwrap();
    let data = json!({
        "error": {"code": 400, "message": "Unknown identifier (foo) given in field parameters.dimensions."}
    });

    let err = Report::from_json(data, report_type).unwrap_err();
    assert!(matches!(err, ReportError::Api { code: 400, .. }));
}

#[test]
fn test_missing_column_headers() {
    let report_type = catalog::find("Basic user activity").unwrap();
    let err = Report::from_json(json!({"rows": []}), report_type).unwrap_err();
    assert!(matches!(err, ReportError::MissingColumnHeaders));
}

#[test]
fn test_invalid_column_headers() {
    let report_type = catalog::find("Basic user activity").unwrap();
    let data = json!({
        "columnHeaders": [{"name": "views", "columnType": "MEASURE", "dataType": "INTEGER"}]
    });
    let err = Report::from_json(data, report_type).unwrap_err();
    assert!(matches!(err, ReportError::InvalidColumnHeaders(_)));
}

#[test]
fn test_row_width_checked() {
    let report_type = catalog::find("Time-based activity").unwrap();
    let mut data = time_based_response();
    data["rows"][2] = json!(["2024-01-03", 143]);

    let err = Report::from_json(data, report_type).unwrap_err();
    assert_eq!(err.to_string(), "Row 2 has 2 values, expected 3");
}
