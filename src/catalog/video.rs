//! Video report types.

use super::values::*;
use crate::model::{Condition, Domain, ReportKind, ReportType};

const TIME_PERIOD: Condition = Condition::AnyDimension(&["day", "month"]);
const LIVE_DETAIL: Condition = Condition::AnyAttribute(&["liveOrOnDemand"]);
const VIEW_PERCENTAGE_DETAIL: Condition =
    Condition::AnyAttribute(&["subscribedStatus", "youtubeProduct"]);

// ============================================================================
// Activity
// ============================================================================

pub(crate) const BASIC_USER_ACTIVITY: ReportType = ReportType {
    name: "Basic user activity",
    domain: Domain::Video,
    signature: &[],
    dimensions: &[],
    filters: &[COUNTRY, CONTINENT, SUB_CONTINENT, VIDEO, GROUP],
    required_filters: &[],
    metrics: ALL_VIDEO_METRICS,
    kind: ReportKind::General,
};

pub(crate) const BASIC_USER_ACTIVITY_US: ReportType = ReportType {
    name: "Basic user activity (US)",
    domain: Domain::Video,
    signature: &[Condition::Filter("province")],
    dimensions: &[],
    filters: &[PROVINCE, VIDEO, GROUP],
    required_filters: &[],
    metrics: PROVINCE_METRICS,
    kind: ReportKind::General,
};

pub(crate) const TIME_BASED_ACTIVITY: ReportType = ReportType {
    name: "Time-based activity",
    domain: Domain::Video,
    signature: &[TIME_PERIOD],
    dimensions: &["day", "month"],
    filters: &[COUNTRY, CONTINENT, SUB_CONTINENT, VIDEO, GROUP],
    required_filters: &[],
    metrics: ALL_VIDEO_METRICS,
    kind: ReportKind::General,
};

pub(crate) const TIME_BASED_ACTIVITY_US: ReportType = ReportType {
    name: "Time-based activity (US)",
    domain: Domain::Video,
    signature: &[TIME_PERIOD, Condition::Filter("province")],
    dimensions: &["day", "month"],
    filters: &[PROVINCE, VIDEO, GROUP],
    required_filters: &[],
    metrics: PROVINCE_METRICS,
    kind: ReportKind::General,
};

pub(crate) const GEOGRAPHY_BASED_ACTIVITY: ReportType = ReportType {
    name: "Geography-based activity",
    domain: Domain::Video,
    signature: &[Condition::Dimension("country")],
    dimensions: &["country"],
    filters: &[CONTINENT, SUB_CONTINENT, VIDEO, GROUP],
    required_filters: &[],
    metrics: ALL_VIDEO_METRICS,
    kind: ReportKind::General,
};

pub(crate) const GEOGRAPHY_BASED_ACTIVITY_US: ReportType = ReportType {
    name: "Geography-based activity (US)",
    domain: Domain::Video,
    signature: &[Condition::Dimension("province")],
    dimensions: &["province"],
    filters: &[COUNTRY_US, VIDEO, GROUP],
    required_filters: &["country"],
    metrics: PROVINCE_METRICS,
    kind: ReportKind::General,
};

// ============================================================================
// Playback details
// ============================================================================

pub(crate) const PLAYBACK_DETAILS_SUBSCRIBED_STATUS: ReportType = ReportType {
    name: "User activity by subscribed status",
    domain: Domain::Video,
    signature: &[VIEW_PERCENTAGE_DETAIL],
    dimensions: &["subscribedStatus", "youtubeProduct"],
    filters: &[
        COUNTRY,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: SUBSCRIPTION_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_DETAILS_SUBSCRIBED_STATUS_US: ReportType = ReportType {
    name: "User activity by subscribed status (US)",
    domain: Domain::Video,
    signature: &[VIEW_PERCENTAGE_DETAIL, Condition::Filter("province")],
    dimensions: &["subscribedStatus", "youtubeProduct"],
    filters: &[PROVINCE, VIDEO, GROUP, SUBSCRIBED_STATUS, YOUTUBE_PRODUCT],
    required_filters: &[],
    metrics: SUBSCRIPTION_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_DETAILS_LIVE_TIME_BASED: ReportType = ReportType {
    name: "Time-based playback details (live)",
    domain: Domain::Video,
    signature: &[TIME_PERIOD, LIVE_DETAIL],
    dimensions: &[
        "day",
        "month",
        "liveOrOnDemand",
        "subscribedStatus",
        "youtubeProduct",
    ],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: LIVE_PLAYBACK_DETAIL_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_DETAILS_VIEW_PERCENTAGE_TIME_BASED: ReportType = ReportType {
    name: "Time-based playback details (view percentage)",
    domain: Domain::Video,
    signature: &[TIME_PERIOD, VIEW_PERCENTAGE_DETAIL],
    dimensions: &["day", "month", "subscribedStatus", "youtubeProduct"],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: VIEW_PERCENTAGE_PLAYBACK_DETAIL_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_DETAILS_LIVE_GEOGRAPHY_BASED: ReportType = ReportType {
    name: "Geography-based playback details (live)",
    domain: Domain::Video,
    signature: &[Condition::Dimension("country"), LIVE_DETAIL],
    dimensions: &[
        "country",
        "liveOrOnDemand",
        "subscribedStatus",
        "youtubeProduct",
    ],
    filters: &[
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: LIVE_PLAYBACK_DETAIL_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_DETAILS_VIEW_PERCENTAGE_GEOGRAPHY_BASED: ReportType = ReportType {
    name: "Geography-based playback details (view percentage)",
    domain: Domain::Video,
    signature: &[Condition::Dimension("country"), VIEW_PERCENTAGE_DETAIL],
    dimensions: &["country", "subscribedStatus", "youtubeProduct"],
    filters: &[
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: VIEW_PERCENTAGE_PLAYBACK_DETAIL_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_DETAILS_LIVE_GEOGRAPHY_BASED_US: ReportType = ReportType {
    name: "Geography-based playback details (live) (US)",
    domain: Domain::Video,
    signature: &[Condition::Dimension("province"), LIVE_DETAIL],
    dimensions: &[
        "province",
        "liveOrOnDemand",
        "subscribedStatus",
        "youtubeProduct",
    ],
    filters: &[
        COUNTRY_US,
        VIDEO,
        GROUP,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &["country"],
    metrics: LIVE_PLAYBACK_DETAIL_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_DETAILS_VIEW_PERCENTAGE_GEOGRAPHY_BASED_US: ReportType = ReportType {
    name: "Geography-based playback details (view percentage) (US)",
    domain: Domain::Video,
    signature: &[Condition::Dimension("province"), VIEW_PERCENTAGE_DETAIL],
    dimensions: &["province", "subscribedStatus", "youtubeProduct"],
    filters: &[COUNTRY_US, VIDEO, GROUP, SUBSCRIBED_STATUS, YOUTUBE_PRODUCT],
    required_filters: &["country"],
    metrics: VIEW_PERCENTAGE_PLAYBACK_DETAIL_METRICS,
    kind: ReportKind::General,
};

// ============================================================================
// Playback locations and traffic sources
// ============================================================================

pub(crate) const PLAYBACK_LOCATION: ReportType = ReportType {
    name: "Playback locations",
    domain: Domain::Video,
    signature: &[Condition::Dimension("insightPlaybackLocationType")],
    dimensions: &[
        "insightPlaybackLocationType",
        "day",
        "liveOrOnDemand",
        "subscribedStatus",
    ],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &[],
    metrics: LOCATION_AND_TRAFFIC_METRICS,
    kind: ReportKind::General,
};

pub(crate) const PLAYBACK_LOCATION_DETAIL: ReportType = ReportType {
    name: "Playback locations (detailed)",
    domain: Domain::Video,
    signature: &[Condition::Dimension("insightPlaybackLocationDetail")],
    dimensions: &["insightPlaybackLocationDetail"],
    filters: &[
        EMBEDDED_PLAYBACK_LOCATION,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &["insightPlaybackLocationType"],
    metrics: LOCATION_AND_TRAFFIC_METRICS,
    kind: ReportKind::Detailed {
        sort_options: LOCATION_AND_TRAFFIC_SORT_OPTIONS,
        max_results: 25,
    },
};

pub(crate) const TRAFFIC_SOURCE: ReportType = ReportType {
    name: "Traffic sources",
    domain: Domain::Video,
    signature: &[Condition::Dimension("insightTrafficSourceType")],
    dimensions: &[
        "insightTrafficSourceType",
        "day",
        "liveOrOnDemand",
        "subscribedStatus",
    ],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &[],
    metrics: LOCATION_AND_TRAFFIC_METRICS,
    kind: ReportKind::General,
};

pub(crate) const TRAFFIC_SOURCE_DETAIL: ReportType = ReportType {
    name: "Traffic sources (detailed)",
    domain: Domain::Video,
    signature: &[Condition::Dimension("insightTrafficSourceDetail")],
    dimensions: &["insightTrafficSourceDetail"],
    filters: &[
        DETAILED_TRAFFIC_SOURCE,
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &["insightTrafficSourceType"],
    metrics: LOCATION_AND_TRAFFIC_METRICS,
    kind: ReportKind::Detailed {
        sort_options: LOCATION_AND_TRAFFIC_SORT_OPTIONS,
        max_results: 25,
    },
};

// ============================================================================
// Devices
// ============================================================================

pub(crate) const DEVICE_TYPE_REPORT: ReportType = ReportType {
    name: "Device types",
    domain: Domain::Video,
    signature: &[Condition::Dimension("deviceType")],
    dimensions: &[
        "deviceType",
        "day",
        "liveOrOnDemand",
        "subscribedStatus",
        "youtubeProduct",
    ],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        OPERATING_SYSTEM,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: LOCATION_AND_TRAFFIC_METRICS,
    kind: ReportKind::General,
};

pub(crate) const OPERATING_SYSTEM_REPORT: ReportType = ReportType {
    name: "Operating systems",
    domain: Domain::Video,
    signature: &[Condition::Dimension("operatingSystem")],
    dimensions: &[
        "operatingSystem",
        "day",
        "liveOrOnDemand",
        "subscribedStatus",
        "youtubeProduct",
    ],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        DEVICE_TYPE,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: LOCATION_AND_TRAFFIC_METRICS,
    kind: ReportKind::General,
};

pub(crate) const DEVICE_TYPE_AND_OPERATING_SYSTEM: ReportType = ReportType {
    name: "Operating systems and device types",
    domain: Domain::Video,
    signature: &[
        Condition::Dimension("deviceType"),
        Condition::Dimension("operatingSystem"),
    ],
    dimensions: &[
        "deviceType",
        "operatingSystem",
        "day",
        "liveOrOnDemand",
        "subscribedStatus",
        "youtubeProduct",
    ],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: LOCATION_AND_TRAFFIC_METRICS,
    kind: ReportKind::General,
};

// ============================================================================
// Audience
// ============================================================================

pub(crate) const VIEWER_DEMOGRAPHICS: ReportType = ReportType {
    name: "Viewer demographics",
    domain: Domain::Video,
    signature: &[Condition::AnyDimension(&["ageGroup", "gender"])],
    dimensions: &["ageGroup", "gender", "liveOrOnDemand", "subscribedStatus"],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &[],
    metrics: DEMOGRAPHICS_METRICS,
    kind: ReportKind::General,
};

pub(crate) const ENGAGEMENT_AND_CONTENT_SHARING: ReportType = ReportType {
    name: "Engagement and content sharing",
    domain: Domain::Video,
    signature: &[Condition::Dimension("sharingService")],
    dimensions: &["sharingService", "subscribedStatus"],
    filters: &[
        COUNTRY,
        CONTINENT,
        SUB_CONTINENT,
        VIDEO,
        GROUP,
        SUBSCRIBED_STATUS,
    ],
    required_filters: &[],
    metrics: ENGAGEMENT_METRICS,
    kind: ReportKind::General,
};

pub(crate) const AUDIENCE_RETENTION: ReportType = ReportType {
    name: "Audience retention",
    domain: Domain::Video,
    signature: &[Condition::Dimension("elapsedVideoTimeRatio")],
    dimensions: &["elapsedVideoTimeRatio", "creatorContentType"],
    filters: &[VIDEO, AUDIENCE_TYPE, SUBSCRIBED_STATUS, YOUTUBE_PRODUCT],
    required_filters: &["video"],
    metrics: AUDIENCE_RETENTION_METRICS,
    kind: ReportKind::General,
};

// ============================================================================
// Top videos
// ============================================================================

pub(crate) const TOP_VIDEOS_REGIONAL: ReportType = ReportType {
    name: "Top videos by region",
    domain: Domain::Video,
    signature: &[Condition::Dimension("video")],
    dimensions: &["video"],
    filters: &[COUNTRY, CONTINENT, SUB_CONTINENT],
    required_filters: &[],
    metrics: ALL_VIDEO_METRICS,
    kind: ReportKind::Detailed {
        sort_options: TOP_VIDEOS_SORT_OPTIONS,
        max_results: 200,
    },
};

pub(crate) const TOP_VIDEOS_US: ReportType = ReportType {
    name: "Top videos by state",
    domain: Domain::Video,
    signature: &[Condition::Dimension("video"), Condition::Filter("province")],
    dimensions: &["video"],
    filters: &[PROVINCE, SUBSCRIBED_STATUS],
    required_filters: &["province"],
    metrics: PROVINCE_METRICS,
    kind: ReportKind::Detailed {
        sort_options: TOP_VIDEOS_PLAYBACK_SORT_OPTIONS,
        max_results: 200,
    },
};

pub(crate) const TOP_VIDEOS_SUBSCRIBED: ReportType = ReportType {
    name: "Top videos by subscription status",
    domain: Domain::Video,
    signature: &[
        Condition::Dimension("video"),
        Condition::Filter("subscribedStatus"),
    ],
    dimensions: &["video"],
    filters: &[SUBSCRIBED_STATUS, COUNTRY, CONTINENT, SUB_CONTINENT],
    required_filters: &["subscribedStatus"],
    metrics: SUBSCRIPTION_METRICS,
    kind: ReportKind::Detailed {
        sort_options: TOP_VIDEOS_PLAYBACK_SORT_OPTIONS,
        max_results: 200,
    },
};

pub(crate) const TOP_VIDEOS_YOUTUBE_PRODUCT: ReportType = ReportType {
    name: "Top videos by YouTube product",
    domain: Domain::Video,
    signature: &[
        Condition::Dimension("video"),
        Condition::Filter("youtubeProduct"),
    ],
    dimensions: &["video"],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: VIEW_PERCENTAGE_PLAYBACK_DETAIL_METRICS,
    kind: ReportKind::Detailed {
        sort_options: TOP_VIDEOS_PLAYBACK_SORT_OPTIONS,
        max_results: 200,
    },
};

pub(crate) const TOP_VIDEOS_PLAYBACK_DETAIL: ReportType = ReportType {
    name: "Top videos by playback detail",
    domain: Domain::Video,
    signature: &[
        Condition::Dimension("video"),
        Condition::Filter("liveOrOnDemand"),
    ],
    dimensions: &["video"],
    filters: &[
        COUNTRY,
        PROVINCE,
        CONTINENT,
        SUB_CONTINENT,
        LIVE_OR_ON_DEMAND,
        SUBSCRIBED_STATUS,
        YOUTUBE_PRODUCT,
    ],
    required_filters: &[],
    metrics: LIVE_PLAYBACK_DETAIL_METRICS,
    kind: ReportKind::Detailed {
        sort_options: TOP_VIDEOS_PLAYBACK_SORT_OPTIONS,
        max_results: 200,
    },
};
