//! Report type definitions.
//!
//! A [`ReportType`] is a fixed combination of the dimensions, filters,
//! metrics and sort options the API accepts together. Every definition is a
//! `'static` constant; see [`crate::catalog`] for the ordered table.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::model::request::ReportRequest;

static COUNTRY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("country code pattern"));

static US_STATE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^US-[A-Z]{2}$").expect("state code pattern"));

/// The part of the API a report type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Video,
    Playlist,
    AdPerformance,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Video => "video",
            Domain::Playlist => "playlist",
            Domain::AdPerformance => "ad-performance",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape a filter value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// ISO 3166-1 alpha-2 code, e.g. `GB`.
    CountryCode,
    /// ISO 3166-2 subdivision of the United States, e.g. `US-OH`.
    UsStateCode,
}

impl ValueFormat {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            ValueFormat::CountryCode => COUNTRY_CODE.is_match(value),
            ValueFormat::UsStateCode => US_STATE_CODE.is_match(value),
        }
    }
}

/// Values a filter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum FilterValues {
    /// Any non-empty value.
    Any,
    /// One of a fixed set of literals.
    OneOf(&'static [&'static str]),
    /// Any value of the given format.
    Format(ValueFormat),
    /// A comma-separated list, each element checked against the inner
    /// constraint.
    ListOf(&'static FilterValues),
}

impl FilterValues {
    /// Whether `value` is acceptable.
    ///
    /// Only [`FilterValues::ListOf`] takes comma-separated input; every
    /// other constraint must match the whole value.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FilterValues::ListOf(inner) => {
                value.split(',').all(|part| inner.accepts(part.trim()))
            }
            FilterValues::Any => !value.is_empty(),
            FilterValues::OneOf(values) => values.contains(&value),
            FilterValues::Format(format) => format.matches(value),
        }
    }

    /// A value this constraint accepts.
    pub fn example(&self) -> &'static str {
        match self {
            FilterValues::Any => "example",
            FilterValues::OneOf(values) => values.first().copied().unwrap_or_default(),
            FilterValues::Format(ValueFormat::CountryCode) => "US",
            FilterValues::Format(ValueFormat::UsStateCode) => "US-CA",
            FilterValues::ListOf(inner) => inner.example(),
        }
    }
}

/// One clause of a report type's signature.
///
/// A report type is selected when every clause of its signature holds for
/// the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "condition", content = "names", rename_all = "snake_case")]
pub enum Condition {
    /// The dimension is requested.
    Dimension(&'static str),
    /// At least one of these dimensions is requested.
    AnyDimension(&'static [&'static str]),
    /// The filter is present, whatever its value.
    Filter(&'static str),
    /// The filter is present with exactly this value.
    FilterValue(&'static str, &'static str),
    /// At least one of these names is requested as a dimension or a filter.
    AnyAttribute(&'static [&'static str]),
}

impl Condition {
    pub fn holds(&self, request: &ReportRequest) -> bool {
        match self {
            Condition::Dimension(name) => request.has_dimension(name),
            Condition::AnyDimension(names) => names.iter().any(|n| request.has_dimension(n)),
            Condition::Filter(key) => request.filter(key).is_some(),
            Condition::FilterValue(key, value) => request.filter(key) == Some(*value),
            Condition::AnyAttribute(names) => names
                .iter()
                .any(|n| request.has_dimension(n) || request.filter(n).is_some()),
        }
    }
}

/// General report types sort on any of their metrics; detailed ones have
/// their own sort set and a row cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportKind {
    General,
    Detailed {
        /// Metrics the report may be sorted on, descending only.
        sort_options: &'static [&'static str],
        max_results: u32,
    },
}

/// A report type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportType {
    pub name: &'static str,
    pub domain: Domain,
    /// Clauses that must all hold for this definition to be selected.
    pub signature: &'static [Condition],
    pub dimensions: &'static [&'static str],
    #[serde(serialize_with = "serialize_filters")]
    pub filters: &'static [(&'static str, FilterValues)],
    pub required_filters: &'static [&'static str],
    pub metrics: &'static [&'static str],
    #[serde(flatten)]
    pub kind: ReportKind,
}

fn serialize_filters<S: Serializer>(
    filters: &&'static [(&'static str, FilterValues)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(filters.len()))?;
    for (key, values) in filters.iter() {
        map.serialize_entry(key, values)?;
    }
    map.end()
}

impl ReportType {
    /// Whether this definition's signature holds for `request`.
    pub fn matches(&self, request: &ReportRequest) -> bool {
        self.signature.iter().all(|c| c.holds(request))
    }

    pub fn is_detailed(&self) -> bool {
        matches!(self.kind, ReportKind::Detailed { .. })
    }

    /// Row cap, present only for detailed report types.
    pub fn max_results(&self) -> Option<u32> {
        match self.kind {
            ReportKind::General => None,
            ReportKind::Detailed { max_results, .. } => Some(max_results),
        }
    }

    /// Metrics the report may be sorted on.
    pub fn sort_options(&self) -> &'static [&'static str] {
        match self.kind {
            ReportKind::General => self.metrics,
            ReportKind::Detailed { sort_options, .. } => sort_options,
        }
    }

    pub fn allows_dimension(&self, dimension: &str) -> bool {
        self.dimensions.contains(&dimension)
    }

    pub fn allows_metric(&self, metric: &str) -> bool {
        self.metrics.contains(&metric)
    }

    pub fn allows_sort_option(&self, metric: &str) -> bool {
        self.sort_options().contains(&metric)
    }

    /// Constraint on the values of `filter`, if the filter is allowed at all.
    pub fn filter_values(&self, filter: &str) -> Option<&'static FilterValues> {
        self.filters
            .iter()
            .find(|(key, _)| *key == filter)
            .map(|(_, values)| values)
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
