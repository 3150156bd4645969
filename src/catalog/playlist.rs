//! Playlist report types.
//!
//! Every playlist report is scoped with `isCurated==1`.

use super::values::*;
use crate::model::{Condition, Domain, ReportKind, ReportType};

const CURATED: Condition = Condition::FilterValue("isCurated", "1");

pub(crate) const BASIC_USER_ACTIVITY_PLAYLIST: ReportType = ReportType {
    name: "Basic user activity for playlists",
    domain: Domain::Playlist,
    signature: &[CURATED],
    dimensions: &[],
    filters: &[
        IS_CURATED,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &["isCurated"],
    metrics: ALL_PLAYLIST_METRICS,
    kind: ReportKind::General,
};

pub(crate) const TIME_BASED_ACTIVITY_PLAYLIST: ReportType = ReportType {
    name: "Time-based activity for playlists",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::AnyDimension(&["day", "month"])],
    dimensions: &["day", "month", "subscribedStatus", "youtubeProduct"],
    filters: &[
        IS_CURATED,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &["isCurated"],
    metrics: ALL_PLAYLIST_METRICS,
    kind: ReportKind::General,
};

pub(crate) const GEOGRAPHY_BASED_ACTIVITY_PLAYLIST: ReportType = ReportType {
    name: "Geography-based activity for playlists",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::Dimension("country")],
    dimensions: &["country", "subscribedStatus", "youtubeProduct"],
    filters: &[
        IS_CURATED,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &["isCurated"],
    metrics: ALL_PLAYLIST_METRICS,
    kind: ReportKind::General,
};

pub(crate) const GEOGRAPHY_BASED_ACTIVITY_US_PLAYLIST: ReportType = ReportType {
    name: "Geography-based activity for playlists (US)",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::Dimension("province")],
    dimensions: &["province", "subscribedStatus", "youtubeProduct"],
    filters: &[
        IS_CURATED,
        COUNTRY_US,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &["isCurated", "country"],
    metrics: ALL_PLAYLIST_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_LOCATION_PLAYLIST: ReportType = ReportType {
    name: "Playback locations for playlists",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::Dimension("insightPlaybackLocationType")],
    dimensions: &["insightPlaybackLocationType", "day", "subscribedStatus"],
    filters: &[
        IS_CURATED,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &["isCurated"],
    metrics: LOCATION_AND_TRAFFIC_PLAYLIST_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_LOCATION_DETAIL_PLAYLIST: ReportType = ReportType {
    name: "Playback locations for playlists (detailed)",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::Dimension("insightPlaybackLocationDetail")],
    dimensions: &["insightPlaybackLocationDetail"],
    filters: &[
        IS_CURATED,
        EMBEDDED_PLAYBACK_LOCATION,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &["isCurated", "insightPlaybackLocationType"],
    metrics: LOCATION_AND_TRAFFIC_PLAYLIST_METRICS,
    kind: ReportKind::Detailed {
        sort_options: LOCATION_AND_TRAFFIC_SORT_OPTIONS,
        max_results: 25,
    },
};

pub(crate) const TRAFFIC_SOURCE_PLAYLIST: ReportType = ReportType {
    name: "Traffic sources for playlists",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::Dimension("insightTrafficSourceType")],
    dimensions: &["insightTrafficSourceType", "day", "subscribedStatus"],
    filters: &[
        IS_CURATED,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &["isCurated"],
    metrics: LOCATION_AND_TRAFFIC_PLAYLIST_METRICS,
    kind: ReportKind::General,
};

pub(crate) const TRAFFIC_SOURCE_DETAIL_PLAYLIST: ReportType = ReportType {
    name: "Traffic sources for playlists (detailed)",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::Dimension("insightTrafficSourceDetail")],
    dimensions: &["insightTrafficSourceDetail"],
    filters: &[
        IS_CURATED,
        DETAILED_TRAFFIC_SOURCE,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &["isCurated", "insightTrafficSourceType"],
    metrics: LOCATION_AND_TRAFFIC_PLAYLIST_METRICS,
    kind: ReportKind::Detailed {
        sort_options: LOCATION_AND_TRAFFIC_SORT_OPTIONS,
        max_results: 25,
    },
};

pub(crate) const DEVICE_TYPE_PLAYLIST: ReportType = ReportType {
    name: "Device types for playlists",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::Dimension("deviceType")],
    dimensions: &["deviceType", "day", "subscribedStatus", "youtubeProduct"],
    filters: &[
        IS_CURATED,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        OPERATING_SYSTEM,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &["isCurated"],
    metrics: LOCATION_AND_TRAFFIC_PLAYLIST_METRICS,
    kind: ReportKind::General,
};

pub(crate) const OPERATING_SYSTEM_PLAYLIST: ReportType = ReportType {
    name: "Operating systems for playlists",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::Dimension("operatingSystem")],
    dimensions: &[
        "operatingSystem",
        "day",
        "subscribedStatus",
        "youtubeProduct",
    ],
    filters: &[
        IS_CURATED,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        DEVICE_TYPE,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &["isCurated"],
    metrics: LOCATION_AND_TRAFFIC_PLAYLIST_METRICS,
    kind: ReportKind::General,
};

pub(crate) const DEVICE_TYPE_AND_OPERATING_SYSTEM_PLAYLIST: ReportType = ReportType {
    name: "Operating systems and device types for playlists",
    domain: Domain::Playlist,
    signature: &[
        CURATED,
        Condition::Dimension("deviceType"),
        Condition::Dimension("operatingSystem"),
    ],
    dimensions: &[
        "deviceType",
        "operatingSystem",
        "day",
        "subscribedStatus",
        "youtubeProduct",
    ],
    filters: &[
        IS_CURATED,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &["isCurated"],
    metrics: LOCATION_AND_TRAFFIC_PLAYLIST_METRICS,
    kind: ReportKind::General,
};

pub(crate) const VIEWER_DEMOGRAPHICS_PLAYLIST: ReportType = ReportType {
    name: "Viewer demographics for playlists",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::AnyDimension(&["ageGroup", "gender"])],
    dimensions: &["ageGroup", "gender", "subscribedStatus"],
    filters: &[
        IS_CURATED,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        PLAYLIST,
        GROUP,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &["isCurated"],
    metrics: DEMOGRAPHICS_METRICS,
    kind: ReportKind::General,
};

pub(crate) const TOP_PLAYLISTS: ReportType = ReportType {
    name: "Top playlists",
    domain: Domain::Playlist,
    signature: &[CURATED, Condition::Dimension("playlist")],
    dimensions: &["playlist"],
    filters: &[
        IS_CURATED,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &["isCurated"],
    metrics: ALL_PLAYLIST_METRICS,
    kind: ReportKind::Detailed {
        sort_options: TOP_PLAYLISTS_SORT_OPTIONS,
        max_results: 200,
    },
};
