//! Videos and their sub-resources

use super::serde_helpers::{
    deserialize_flexible_f64, deserialize_flexible_string, deserialize_flexible_u64,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A video: the metadata container around one or more conversions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub title: Option<String>,
    /// Comma-separated tags
    pub tags: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    /// Publication date, Unix seconds
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub date: Option<u64>,
    /// Web page the video is published on
    pub link: Option<String>,
    pub download_url: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub md5: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub size: Option<u64>,
    pub status: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub views: Option<u64>,
    pub error: Option<Value>,
    pub sourcetype: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub duration: Option<f64>,
    pub mediatype: Option<String>,
}

/// One transcoded rendition of a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConversion {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub mediatype: Option<String>,
    pub status: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub duration: Option<f64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub filesize: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub width: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub height: Option<u64>,
    /// Conversion template (`key`, `name`, `format`, ...)
    pub template: Option<Value>,
    pub error: Option<Value>,
    pub link: Option<Value>,
}

/// Thumbnail (and preview strip) state of a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoThumbnail {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub status: Option<String>,
    pub strip_status: Option<String>,
    pub link: Option<Value>,
    pub error: Option<Value>,
    pub strip_error: Option<Value>,
}

/// A caption track attached to a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoCaption {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub label: Option<String>,
    pub format: Option<String>,
    pub link: Option<Value>,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub position: Option<f64>,
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub md5: Option<String>,
    pub status: Option<String>,
    pub error: Option<Value>,
}

/// A tag and how many videos carry it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoTag {
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub videos: Option<u64>,
}

/// View statistics of a video, or one day/year bucket of them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoView {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub views: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub pageviews: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub viewed: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub streams: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub downloads: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub timestamp: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub number: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub year: Option<u64>,
    pub total: Option<Value>,
    pub months: Option<Value>,
    pub days: Option<Value>,
}

/// Engagement analytics of a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoEngagement {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    /// Per-position engagement figures as sent by the API
    pub engagements: Option<Value>,
}
