//! Report requests.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::report_type::ReportType;

/// A report request as a caller describes it.
///
/// Dimensions, metrics and sort options keep the order they were given in,
/// which is the column order the API will use. An empty metric list means
/// "every metric the resolved report type allows".
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub dimensions: Vec<String>,
    pub filters: BTreeMap<String, String>,
    pub metrics: Vec<String>,
    /// Metrics to sort on; a leading `-` sorts descending.
    pub sort_options: Vec<String>,
    /// Maximum number of rows. `Some(0)` asks for no limit.
    pub max_results: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// ISO 4217 currency code for revenue metrics.
    pub currency: String,
    /// One-indexed row to start from.
    pub start_index: u32,
    pub include_historical_data: bool,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            dimensions: Vec::new(),
            filters: BTreeMap::new(),
            metrics: Vec::new(),
            sort_options: Vec::new(),
            max_results: None,
            start_date: None,
            end_date: None,
            currency: "USD".to_string(),
            start_index: 1,
            include_historical_data: false,
        }
    }
}

impl ReportRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimensions.push(dimension.into());
        self
    }

    pub fn with_dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions.extend(dimensions.into_iter().map(Into::into));
        self
    }

    /// Add a filter, replacing any earlier value for the same key.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metrics.push(metric.into());
        self
    }

    pub fn with_metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics.extend(metrics.into_iter().map(Into::into));
        self
    }

    pub fn with_sort(mut self, option: impl Into<String>) -> Self {
        self.sort_options.push(option.into());
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn with_historical_data(mut self, include: bool) -> Self {
        self.include_historical_data = include;
        self
    }

    pub fn has_dimension(&self, dimension: &str) -> bool {
        self.dimensions.iter().any(|d| d == dimension)
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// The requested row limit, with `0` read as "no limit".
    pub fn limit(&self) -> Option<u32> {
        self.max_results.filter(|&n| n > 0)
    }

    /// Whether the caller explicitly asked for every row.
    pub fn is_unlimited(&self) -> bool {
        self.max_results == Some(0)
    }

    /// Parsed sort options in request order.
    pub fn sort_keys(&self) -> impl Iterator<Item = SortKey<'_>> {
        self.sort_options.iter().map(|o| SortKey::parse(o))
    }

    /// The metrics to request: the explicit list, or all of the report
    /// type's metrics when none were given.
    pub fn effective_metrics(&self, report_type: &ReportType) -> Vec<String> {
        if self.metrics.is_empty() {
            report_type.metrics.iter().map(|m| m.to_string()).collect()
        } else {
            self.metrics.clone()
        }
    }
}

/// A sort option split into its metric and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<'a> {
    /// The option as written, e.g. `-views`.
    pub raw: &'a str,
    pub metric: &'a str,
    pub descending: bool,
}

impl<'a> SortKey<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix('-') {
            Some(metric) => SortKey {
                raw,
                metric,
                descending: true,
            },
            None => SortKey {
                raw,
                metric: raw,
                descending: false,
            },
        }
    }
}
