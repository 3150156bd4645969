//! The report type catalog.
//!
//! [`CATALOG`] lists every report type the API supports in the order the
//! resolver evaluates them. The order is part of the behaviour: a request
//! whose dimensions satisfy several signatures gets the earliest one.
//!
//! ```text
//! playlist reports      (scoped by isCurated==1, most specific first)
//! ad performance        (adType)
//! video reports         (distinct dimensions, then top videos,
//!                        then geography, then time, then subscribed status)
//! basic user activity   (no dimensions: the fallback, always last)
//! ```

mod ad_performance;
mod playlist;
mod values;
mod video;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::{Domain, ReportType};

use ad_performance::*;
use playlist::*;
use video::*;

/// Number of report types in the catalog.
pub const CATALOG_SIZE: usize = 43;

/// Every report type, in evaluation order.
pub static CATALOG: [ReportType; CATALOG_SIZE] = [
    // Playlist reports only match when isCurated==1 is present, so they are
    // checked before the video reports they otherwise mirror.
    VIEWER_DEMOGRAPHICS_PLAYLIST,
    DEVICE_TYPE_AND_OPERATING_SYSTEM_PLAYLIST,
    DEVICE_TYPE_PLAYLIST,
    OPERATING_SYSTEM_PLAYLIST,
    PLAYBACK_LOCATION_DETAIL_PLAYLIST,
    PLAYBACK_LOCATION_PLAYLIST,
    TRAFFIC_SOURCE_DETAIL_PLAYLIST,
    TRAFFIC_SOURCE_PLAYLIST,
    TOP_PLAYLISTS,
    GEOGRAPHY_BASED_ACTIVITY_US_PLAYLIST,
    GEOGRAPHY_BASED_ACTIVITY_PLAYLIST,
    TIME_BASED_ACTIVITY_PLAYLIST,
    BASIC_USER_ACTIVITY_PLAYLIST,
    // Ad performance
    AD_PERFORMANCE,
    // Reports identified by a dimension no other report type accepts
    ENGAGEMENT_AND_CONTENT_SHARING,
    AUDIENCE_RETENTION,
    VIEWER_DEMOGRAPHICS,
    DEVICE_TYPE_AND_OPERATING_SYSTEM,
    DEVICE_TYPE_REPORT,
    OPERATING_SYSTEM_REPORT,
    PLAYBACK_LOCATION_DETAIL,
    PLAYBACK_LOCATION,
    TRAFFIC_SOURCE_DETAIL,
    TRAFFIC_SOURCE,
    // Top videos, narrowed by which filter is present
    TOP_VIDEOS_US,
    TOP_VIDEOS_PLAYBACK_DETAIL,
    TOP_VIDEOS_YOUTUBE_PRODUCT,
    TOP_VIDEOS_SUBSCRIBED,
    TOP_VIDEOS_REGIONAL,
    // Geography wins over time: {day, country} is a geography report
    PLAYBACK_DETAILS_LIVE_GEOGRAPHY_BASED_US,
    PLAYBACK_DETAILS_VIEW_PERCENTAGE_GEOGRAPHY_BASED_US,
    GEOGRAPHY_BASED_ACTIVITY_US,
    PLAYBACK_DETAILS_LIVE_GEOGRAPHY_BASED,
    PLAYBACK_DETAILS_VIEW_PERCENTAGE_GEOGRAPHY_BASED,
    GEOGRAPHY_BASED_ACTIVITY,
    PLAYBACK_DETAILS_LIVE_TIME_BASED,
    PLAYBACK_DETAILS_VIEW_PERCENTAGE_TIME_BASED,
    TIME_BASED_ACTIVITY_US,
    TIME_BASED_ACTIVITY,
    PLAYBACK_DETAILS_SUBSCRIBED_STATUS_US,
    PLAYBACK_DETAILS_SUBSCRIBED_STATUS,
    BASIC_USER_ACTIVITY_US,
    // Empty signature; must stay last
    BASIC_USER_ACTIVITY,
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static ReportType>> =
    LazyLock::new(|| CATALOG.iter().map(|rt| (rt.name, rt)).collect());

/// The full catalog in evaluation order.
pub fn catalog() -> &'static [ReportType] {
    &CATALOG
}

/// Look up a report type by its exact name.
pub fn find(name: &str) -> Option<&'static ReportType> {
    BY_NAME.get(name).copied()
}

/// Look up a report type by name, ignoring ASCII case.
pub fn find_ignore_case(name: &str) -> Option<&'static ReportType> {
    find(name).or_else(|| CATALOG.iter().find(|rt| rt.name.eq_ignore_ascii_case(name)))
}

/// Report types of one domain, in evaluation order.
pub fn by_domain(domain: Domain) -> impl Iterator<Item = &'static ReportType> {
    CATALOG.iter().filter(move |rt| rt.domain == domain)
}

/// Position of a report type in the evaluation order.
pub fn rank(report_type: &ReportType) -> Option<usize> {
    CATALOG.iter().position(|rt| rt.name == report_type.name)
}
