//! Players and their statistics

use super::serde_helpers::{
    deserialize_flexible_bool, deserialize_flexible_string, deserialize_flexible_u64,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A player configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub width: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub height: Option<u64>,
    pub template: Option<Value>,
    pub ga_web_property_id: Option<String>,
    pub controlbar: Option<String>,
    pub playlist: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub playlistsize: Option<u64>,
    pub related_videos: Option<Value>,
    pub stretching: Option<String>,
    pub aspectratio: Option<String>,
    /// `true`, `false` or a mode such as `viewable`
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub autostart: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_bool")]
    pub repeat: Option<bool>,
    #[serde(deserialize_with = "deserialize_flexible_bool")]
    pub responsive: Option<bool>,
    pub skin: Option<Value>,
    #[serde(deserialize_with = "deserialize_flexible_bool")]
    pub sharing: Option<bool>,
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub sharing_player_key: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_bool")]
    pub sitecatalyst: Option<bool>,
    #[serde(deserialize_with = "deserialize_flexible_bool")]
    pub captions: Option<bool>,
    pub ltas_channel: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub version: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub views: Option<u64>,
    pub watermark: Option<Value>,
    pub advertising: Option<Value>,
}

/// View statistics of a player, or one day/year bucket of them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerView {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub views: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub timestamp: Option<u64>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub number: Option<u64>,
    pub months: Option<Value>,
    pub years: Option<Value>,
}
