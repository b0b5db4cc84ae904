//! Channels (playlists) and their sub-resources

use super::serde_helpers::{
    deserialize_flexible_f64, deserialize_flexible_string, deserialize_flexible_u64,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A channel: a manual or dynamic list of videos
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub link: Option<String>,
    /// `manual` or `dynamic`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub tags: Option<String>,
    pub tags_mode: Option<String>,
    pub sort_order: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub videos: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub views: Option<u64>,
}

/// Thumbnail state of a channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelThumbnail {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub status: Option<String>,
    pub error: Option<Value>,
}

/// A video as listed in a channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelVideo {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub date: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub duration: Option<f64>,
    pub link: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub md5: Option<String>,
    pub mediatype: Option<String>,
    pub tags: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub views: Option<u64>,
}

/// View statistics of a channel, or one day/year bucket of them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelView {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub views: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub timestamp: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub number: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub year: Option<u64>,
    pub total: Option<Value>,
    pub days: Option<Value>,
    pub years: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channel_type_field() {
        let channel: Channel = serde_json::from_value(json!({
            "key": "nPripu9l",
            "type": "dynamic",
            "title": "Channel",
            "videos": "12"
        }))
        .unwrap();
        assert_eq!(channel.kind.as_deref(), Some("dynamic"));
        assert_eq!(channel.videos, Some(12));

        let back = serde_json::to_value(&channel).unwrap();
        assert_eq!(back["type"], "dynamic");
    }
}
