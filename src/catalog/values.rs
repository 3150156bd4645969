//! Metric groups and filter constraints shared by catalog entries.
//!
//! These are the groups the API documentation lists. An entry that drifts
//! from its group should get its own inline list rather than an edit here.

use crate::model::{FilterValues, ValueFormat};

// ============================================================================
// Metric groups
// ============================================================================

pub(crate) const ALL_VIDEO_METRICS: &[&str] = &[
    "views",
    "redViews",
    "comments",
    "likes",
    "dislikes",
    "videosAddedToPlaylists",
    "videosRemovedFromPlaylists",
    "shares",
    "estimatedMinutesWatched",
    "estimatedRedMinutesWatched",
    "averageViewDuration",
    "averageViewPercentage",
    "annotationClickThroughRate",
    "annotationCloseRate",
    "annotationImpressions",
    "annotationClickableImpressions",
    "annotationClosableImpressions",
    "annotationClicks",
    "annotationCloses",
    "cardClickRate",
    "cardTeaserClickRate",
    "cardImpressions",
    "cardTeaserImpressions",
    "cardClicks",
    "cardTeaserClicks",
    "subscribersGained",
    "subscribersLost",
    "estimatedRevenue",
    "estimatedAdRevenue",
    "grossRevenue",
    "estimatedRedPartnerRevenue",
    "monetizedPlaybacks",
    "playbackBasedCpm",
    "adImpressions",
    "cpm",
];

/// Metrics available when results are narrowed to a US state.
pub(crate) const PROVINCE_METRICS: &[&str] = &[
    "views",
    "redViews",
    "estimatedMinutesWatched",
    "estimatedRedMinutesWatched",
    "averageViewDuration",
    "averageViewPercentage",
    "annotationClickThroughRate",
    "annotationCloseRate",
    "annotationImpressions",
    "annotationClickableImpressions",
    "annotationClosableImpressions",
    "annotationClicks",
    "annotationCloses",
    "cardClickRate",
    "cardTeaserClickRate",
    "cardImpressions",
    "cardTeaserImpressions",
    "cardClicks",
    "cardTeaserClicks",
];

pub(crate) const SUBSCRIPTION_METRICS: &[&str] = &[
    "views",
    "redViews",
    "estimatedMinutesWatched",
    "estimatedRedMinutesWatched",
    "averageViewDuration",
    "averageViewPercentage",
    "annotationClickThroughRate",
    "annotationCloseRate",
    "annotationImpressions",
    "annotationClickableImpressions",
    "annotationClosableImpressions",
    "annotationClicks",
    "annotationCloses",
    "cardClickRate",
    "cardTeaserClickRate",
    "cardImpressions",
    "cardTeaserImpressions",
    "cardClicks",
    "cardTeaserClicks",
];

pub(crate) const LIVE_PLAYBACK_DETAIL_METRICS: &[&str] = &[
    "views",
    "redViews",
    "estimatedMinutesWatched",
    "estimatedRedMinutesWatched",
    "averageViewDuration",
];

pub(crate) const VIEW_PERCENTAGE_PLAYBACK_DETAIL_METRICS: &[&str] = &[
    "views",
    "redViews",
    "estimatedMinutesWatched",
    "estimatedRedMinutesWatched",
    "averageViewDuration",
    "averageViewPercentage",
];

pub(crate) const LOCATION_AND_TRAFFIC_METRICS: &[&str] = &["views", "estimatedMinutesWatched"];

pub(crate) const LOCATION_AND_TRAFFIC_SORT_OPTIONS: &[&str] = &["views", "estimatedMinutesWatched"];

pub(crate) const DEMOGRAPHICS_METRICS: &[&str] = &["viewerPercentage"];

pub(crate) const ENGAGEMENT_METRICS: &[&str] = &["shares"];

pub(crate) const AUDIENCE_RETENTION_METRICS: &[&str] = &[
    "audienceWatchRatio",
    "relativeRetentionPerformance",
    "startedWatching",
    "stoppedWatching",
    "totalSegmentImpressions",
];

pub(crate) const TOP_VIDEOS_SORT_OPTIONS: &[&str] = &[
    "views",
    "redViews",
    "estimatedRevenue",
    "estimatedRedPartnerRevenue",
    "estimatedMinutesWatched",
    "estimatedRedMinutesWatched",
];

pub(crate) const TOP_VIDEOS_PLAYBACK_SORT_OPTIONS: &[&str] = &[
    "views",
    "redViews",
    "estimatedMinutesWatched",
    "estimatedRedMinutesWatched",
];

pub(crate) const ALL_PLAYLIST_METRICS: &[&str] = &[
    "views",
    "redViews",
    "estimatedMinutesWatched",
    "estimatedRedMinutesWatched",
    "averageViewDuration",
    "playlistStarts",
    "viewsPerPlaylistStart",
    "averageTimeInPlaylist",
];

pub(crate) const LOCATION_AND_TRAFFIC_PLAYLIST_METRICS: &[&str] = &[
    "views",
    "estimatedMinutesWatched",
    "playlistStarts",
    "viewsPerPlaylistStart",
    "averageTimeInPlaylist",
];

pub(crate) const TOP_PLAYLISTS_SORT_OPTIONS: &[&str] = &[
    "views",
    "estimatedMinutesWatched",
    "playlistStarts",
    "averageTimeInPlaylist",
];

pub(crate) const AD_PERFORMANCE_METRICS: &[&str] = &["grossRevenue", "adImpressions", "cpm"];

// ============================================================================
// Filter value sets
// ============================================================================

/// UN M.49 continent codes.
const CONTINENTS: &[&str] = &["002", "009", "019", "142", "150"];

/// UN M.49 sub-continent codes.
const SUB_CONTINENTS: &[&str] = &[
    "005", "011", "013", "014", "015", "017", "018", "021", "029", "030", "034", "035", "039",
    "053", "054", "057", "061", "143", "145", "151", "154", "155",
];

const SUBSCRIBED_STATUSES: &[&str] = &["SUBSCRIBED", "UNSUBSCRIBED"];

const YOUTUBE_PRODUCTS: &[&str] = &["CORE", "GAMING", "KIDS", "UNKNOWN"];

const LIVE_OR_ON_DEMAND_VALUES: &[&str] = &["LIVE", "ON_DEMAND"];

const DEVICE_TYPES: &[&str] = &[
    "DESKTOP",
    "GAME_CONSOLE",
    "MOBILE",
    "TABLET",
    "TV",
    "UNKNOWN_PLATFORM",
];

const OPERATING_SYSTEMS: &[&str] = &[
    "ANDROID",
    "BADA",
    "BLACKBERRY",
    "CHROMECAST",
    "DOCOMO",
    "FIREFOX",
    "HIPTOP",
    "IOS",
    "KAIOS",
    "LINUX",
    "MACINTOSH",
    "MEEGO",
    "NINTENDO_3DS",
    "OTHER",
    "PLAYSTATION",
    "PLAYSTATION_VITA",
    "REALMEDIA",
    "SMART_TV",
    "SYMBIAN",
    "TIZEN",
    "WEBOS",
    "WII",
    "WINDOWS",
    "WINDOWS_MOBILE",
    "XBOX",
];

/// Traffic source types that have a detail report.
const DETAILED_TRAFFIC_SOURCE_TYPES: &[&str] = &[
    "ADVERTISING",
    "CAMPAIGN_CARD",
    "END_SCREEN",
    "EXT_URL",
    "HASHTAGS",
    "NOTIFICATION",
    "RELATED_VIDEO",
    "SOUND_PAGE",
    "SUBSCRIBER",
    "VIDEO_REMIXES",
    "YT_CHANNEL",
    "YT_OTHER_PAGE",
    "YT_SEARCH",
];

const AUDIENCE_TYPES: &[&str] = &["ORGANIC", "AD_INSTREAM", "AD_INDISPLAY"];

// ============================================================================
// Filters
// ============================================================================

// Only video and playlist filters take comma-separated ID lists.

pub(crate) type Filter = (&'static str, FilterValues);

pub(crate) const COUNTRY: Filter = ("country", FilterValues::Format(ValueFormat::CountryCode));
pub(crate) const COUNTRY_US: Filter = ("country", FilterValues::OneOf(&["US"]));
pub(crate) const PROVINCE: Filter = ("province", FilterValues::Format(ValueFormat::UsStateCode));
pub(crate) const CONTINENT: Filter = ("continent", FilterValues::OneOf(CONTINENTS));
pub(crate) const SUB_CONTINENT: Filter = ("subContinent", FilterValues::OneOf(SUB_CONTINENTS));
pub(crate) const VIDEO: Filter = ("video", FilterValues::ListOf(&FilterValues::Any));
pub(crate) const GROUP: Filter = ("group", FilterValues::Any);
pub(crate) const PLAYLIST: Filter = ("playlist", FilterValues::ListOf(&FilterValues::Any));
pub(crate) const IS_CURATED: Filter = ("isCurated", FilterValues::OneOf(&["1"]));
pub(crate) const SUBSCRIBED_STATUS: Filter =
    ("subscribedStatus", FilterValues::OneOf(SUBSCRIBED_STATUSES));
pub(crate) const YOUTUBE_PRODUCT: Filter = ("youtubeProduct", FilterValues::OneOf(YOUTUBE_PRODUCTS));
pub(crate) const LIVE_OR_ON_DEMAND: Filter =
    ("liveOrOnDemand", FilterValues::OneOf(LIVE_OR_ON_DEMAND_VALUES));
pub(crate) const DEVICE_TYPE: Filter = ("deviceType", FilterValues::OneOf(DEVICE_TYPES));
pub(crate) const OPERATING_SYSTEM: Filter =
    ("operatingSystem", FilterValues::OneOf(OPERATING_SYSTEMS));
pub(crate) const EMBEDDED_PLAYBACK_LOCATION: Filter =
    ("insightPlaybackLocationType", FilterValues::OneOf(&["EMBEDDED"]));
pub(crate) const DETAILED_TRAFFIC_SOURCE: Filter = (
    "insightTrafficSourceType",
    FilterValues::OneOf(DETAILED_TRAFFIC_SOURCE_TYPES),
);
pub(crate) const AUDIENCE_TYPE: Filter = ("audienceType", FilterValues::OneOf(AUDIENCE_TYPES));
