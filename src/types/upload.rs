//! Upload links and the results of create/upload calls

use super::serde_helpers::{deserialize_flexible_string, deserialize_flexible_u64};
use crate::config::Settings;
use crate::http::encoding::encode_component;
use serde::{Deserialize, Serialize};

/// Where to send the file for a freshly created media object.
///
/// Returned as `link` by the create calls that expect an upload. Every part
/// is optional; the configured upload host and the conventional
/// `/<version>/<call_class>/upload` path fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadLink {
    pub protocol: Option<String>,
    pub address: Option<String>,
    pub path: Option<String>,
    pub query: UploadQuery,
}

/// Credentials the upload host expects in the query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadQuery {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub token: Option<String>,
}

impl UploadLink {
    pub fn protocol<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.protocol
            .as_deref()
            .unwrap_or(settings.upload.protocol.as_str())
    }

    pub fn address<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.address
            .as_deref()
            .unwrap_or(settings.upload.address.as_str())
    }

    /// `<protocol>://<address><path>`
    pub fn upload_url(&self, settings: &Settings, call_class: &str) -> String {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => format!("/{}/{}/upload", settings.api.version, call_class),
        };
        format!(
            "{}://{}{}",
            self.protocol(settings),
            self.address(settings),
            path
        )
    }

    /// URL to poll the upload progress of this link.
    ///
    /// `callback` names the JSONP function the progress is wrapped in.
    pub fn progress_url(&self, settings: &Settings, callback: &str) -> String {
        format!(
            "{}://{}/progress?token={}&callback={}",
            self.protocol(settings),
            self.address(settings),
            encode_component(self.query.token.as_deref().unwrap_or_default()),
            encode_component(callback)
        )
    }
}

/// Outcome of a create call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    /// Envelope status, normally `ok`
    pub status: String,
    /// Key of the new object
    pub key: String,
    /// Upload target, for objects that expect a file
    pub link: Option<UploadLink>,
}

/// The `file` object returned by the upload host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadedFile {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub md5: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub size: Option<u64>,
}

/// Reference to a media object (`{"key": ...}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRef {
    #[serde(deserialize_with = "deserialize_flexible_string")]
    pub key: Option<String>,
}
