//! Ad performance report types.

use super::values::*;
use crate::model::{Condition, Domain, ReportKind, ReportType};

pub(crate) const AD_PERFORMANCE: ReportType = ReportType {
    name: "Ad performance",
    domain: Domain::AdPerformance,
    signature: &[Condition::Dimension("adType")],
    dimensions: &["adType", "day"],
    filters: &[COUNTRY, CONTINENT, SUB_CONTINENT, VIDEO, GROUP],
    required_filters: &[],
    metrics: AD_PERFORMANCE_METRICS,
    kind: ReportKind::General,
};
