//! Resource operations
//!
//! Each handle borrows the client and maps one call class onto typed
//! operations. Extra API options are passed as [`Params`]; the required
//! keys of an operation are explicit arguments.
//!
//! ```rust,no_run
//! use botr::{Client, Params, Settings};
//!
//! # async fn example() -> botr::Result<()> {
//! let client = Client::new(Settings::with_credentials("key", "secret"))?;
//!
//! let created = client
//!     .videos()
//!     .create(Params::new().with("title", "Holiday"))
//!     .await?;
//! if let Some(link) = &created.link {
//!     client.videos().upload(link, "holiday.mp4").await?;
//! }
//!
//! for video in client.videos().list(Params::new().with("tags", "holiday")).await? {
//!     println!("{:?} {:?}", video.key, video.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod players;
pub mod videos;

pub use channels::{ChannelThumbnails, ChannelVideos, ChannelViews, Channels};
pub use players::{PlayerViews, Players};
pub use videos::{
    VideoCaptions, VideoConversions, VideoEngagements, VideoTags, VideoThumbnails, VideoViews,
    Videos,
};

use crate::api::{ClientGeneric, Envelope, Params};
use crate::http::HttpBackend;
use crate::types::{Created, MediaRef, UploadedFile};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::warn;

impl<B: HttpBackend> ClientGeneric<B> {
    pub fn videos(&self) -> Videos<'_, B> {
        Videos::new(self)
    }

    pub fn video_conversions(&self) -> VideoConversions<'_, B> {
        VideoConversions::new(self)
    }

    pub fn video_thumbnails(&self) -> VideoThumbnails<'_, B> {
        VideoThumbnails::new(self)
    }

    pub fn video_captions(&self) -> VideoCaptions<'_, B> {
        VideoCaptions::new(self)
    }

    pub fn video_tags(&self) -> VideoTags<'_, B> {
        VideoTags::new(self)
    }

    pub fn video_views(&self) -> VideoViews<'_, B> {
        VideoViews::new(self)
    }

    pub fn video_engagements(&self) -> VideoEngagements<'_, B> {
        VideoEngagements::new(self)
    }

    pub fn channels(&self) -> Channels<'_, B> {
        Channels::new(self)
    }

    pub fn channel_thumbnails(&self) -> ChannelThumbnails<'_, B> {
        ChannelThumbnails::new(self)
    }

    pub fn channel_videos(&self) -> ChannelVideos<'_, B> {
        ChannelVideos::new(self)
    }

    pub fn channel_views(&self) -> ChannelViews<'_, B> {
        ChannelViews::new(self)
    }

    pub fn players(&self) -> Players<'_, B> {
        Players::new(self)
    }

    pub fn player_views(&self) -> PlayerViews<'_, B> {
        PlayerViews::new(self)
    }
}

/// `show` call returning the payload named `field`
async fn show<B, T>(
    client: &ClientGeneric<B>,
    call_class: &str,
    params: Params,
    field: &str,
) -> Result<T>
where
    B: HttpBackend,
    T: DeserializeOwned,
{
    client.call(call_class, "show", params).await?.field(field)
}

/// `list` call returning the array named `field`
async fn list<B, T>(
    client: &ClientGeneric<B>,
    call_class: &str,
    params: Params,
    field: &str,
) -> Result<Vec<T>>
where
    B: HttpBackend,
    T: DeserializeOwned,
{
    client.call(call_class, "list", params).await?.field(field)
}

/// `list` call of a statistics resource.
///
/// Depending on the grouping asked for, the answer holds per-object
/// entries under `field`, per-day or per-year buckets, or a single total
/// spread over the envelope itself.
async fn view_list<B, T>(
    client: &ClientGeneric<B>,
    call_class: &str,
    params: Params,
    field: &str,
) -> Result<Vec<T>>
where
    B: HttpBackend,
    T: DeserializeOwned,
{
    let envelope = client.call(call_class, "list", params).await?;
    match envelope.first_list(&[field, "days", "years"])? {
        Some(entries) => Ok(entries),
        None => Ok(vec![envelope.decode()?]),
    }
}

/// Read the key of a created object from `{field: {key: ...}}` plus an
/// optional upload link
fn created(envelope: &Envelope, field: &str) -> Result<Created> {
    let media: MediaRef = envelope.field(field)?;
    let key = media.key.ok_or_else(|| {
        Error::unexpected_response(format!("missing `{field}.key` in response"))
    })?;
    Ok(Created {
        status: envelope.status().to_string(),
        key,
        link: envelope.optional_field("link")?,
    })
}

fn uploaded(envelope: &Envelope) -> Result<UploadedFile> {
    envelope.field("file")
}

/// Log envelopes of write calls that did not come back `ok`
fn acknowledge(envelope: Envelope, call_class: &str) -> Result<()> {
    if !envelope.is_ok() {
        warn!(
            "{} call answered with status '{}'",
            call_class,
            envelope.status()
        );
    }
    Ok(())
}
