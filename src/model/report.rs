// src/model/report.rs
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::report_type::ReportType;

/// Errors raised while reading a report response body.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Response has no 'columnHeaders'")]
    MissingColumnHeaders,

    #[error("Invalid column headers: {0}")]
    InvalidColumnHeaders(#[source] serde_json::Error),

    #[error("Invalid rows: {0}")]
    InvalidRows(#[source] serde_json::Error),

    #[error("Row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Dimension,
    Metric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    String,
    Integer,
    Float,
}

/// A column header as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub name: String,
    pub column_type: ColumnType,
    pub data_type: DataType,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: i64,
    message: String,
}

/// A report returned by the API, interpreted through its report type.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    /// The raw response body.
    pub data: Value,
    pub report_type: &'a ReportType,
    column_headers: Vec<ColumnHeader>,
    rows: Vec<Vec<Value>>,
}

impl<'a> Report<'a> {
    /// Read a response body.
    ///
    /// A body without `rows` is a report with no rows. A body carrying an
    /// `error` object is turned into [`ReportError::Api`].
    pub fn from_json(data: Value, report_type: &'a ReportType) -> Result<Self, ReportError> {
        if let Some(error) = data.get("error") {
            let error: ApiError = serde_json::from_value(error.clone()).unwrap_or(ApiError {
                code: 0,
                message: error.to_string(),
            });
            return Err(ReportError::Api {
                code: error.code,
                message: error.message,
            });
        }

        let headers = data
            .get("columnHeaders")
            .ok_or(ReportError::MissingColumnHeaders)?;
        let column_headers: Vec<ColumnHeader> =
            serde_json::from_value(headers.clone()).map_err(ReportError::InvalidColumnHeaders)?;

        let rows: Vec<Vec<Value>> = match data.get("rows") {
            Some(rows) => serde_json::from_value(rows.clone()).map_err(ReportError::InvalidRows)?,
            None => Vec::new(),
        };

        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != column_headers.len())
        {
            return Err(ReportError::RowWidth {
                row,
                found: values.len(),
                expected: column_headers.len(),
            });
        }

        tracing::debug!(
            report_type = report_type.name,
            rows = rows.len(),
            columns = column_headers.len(),
            "Read report"
        );

        Ok(Self {
            data,
            report_type,
            column_headers,
            rows,
        })
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.column_headers.len())
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn column_headers(&self) -> &[ColumnHeader] {
        &self.column_headers
    }

    pub fn columns(&self) -> Vec<&str> {
        self.column_headers.iter().map(|c| c.name.as_str()).collect()
    }

    /// Every metric the report type allows, whether or not it was returned.
    /// Use [`Report::ordered_metrics`] for the metric columns present.
    pub fn metrics(&self) -> BTreeSet<&'static str> {
        self.report_type.metrics.iter().copied().collect()
    }

    /// Columns that are not metrics of the report type.
    pub fn dimensions(&self) -> BTreeSet<&str> {
        self.columns()
            .into_iter()
            .filter(|c| !self.report_type.allows_metric(c))
            .collect()
    }

    /// Dimension columns in the order they appear.
    pub fn ordered_dimensions(&self) -> Vec<&str> {
        self.columns_of(ColumnType::Dimension)
    }

    /// Metric columns in the order they appear.
    pub fn ordered_metrics(&self) -> Vec<&str> {
        self.columns_of(ColumnType::Metric)
    }

    fn columns_of(&self, column_type: ColumnType) -> Vec<&str> {
        self.column_headers
            .iter()
            .filter(|c| c.column_type == column_type)
            .map(|c| c.name.as_str())
            .collect()
    }
}
