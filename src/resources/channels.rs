//! Channels and their sub-resources

use super::{acknowledge, created, list, show, uploaded, view_list};
use crate::Result;
use crate::api::{ClientGeneric, Params};
use crate::http::HttpBackend;
use crate::types::{
    Channel, ChannelThumbnail, ChannelVideo, ChannelView, Created, UploadLink, UploadedFile,
};
use std::path::Path;

pub struct Channels<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> Channels<'a, B> {
    pub const CALL_CLASS: &'static str = "channels";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, channel_key: &str) -> Result<Channel> {
        let params = Params::new().with("channel_key", channel_key);
        show(self.client, Self::CALL_CLASS, params, "channel").await
    }

    pub async fn list(&self, params: Params) -> Result<Vec<Channel>> {
        list(self.client, Self::CALL_CLASS, params, "channels").await
    }

    pub async fn all(&self) -> Result<Vec<Channel>> {
        self.list(Params::new()).await
    }

    /// Create a channel of the given type (`manual` or `dynamic`)
    pub async fn create(&self, kind: &str, params: Params) -> Result<Created> {
        let params = params.with("type", kind);
        let envelope = self.client.call(Self::CALL_CLASS, "create", params).await?;
        created(&envelope, "channel")
    }

    pub async fn update(&self, channel_key: &str, params: Params) -> Result<()> {
        let params = params.with("channel_key", channel_key);
        let envelope = self.client.update(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }

    pub async fn delete(&self, channel_key: &str) -> Result<()> {
        let params = Params::new().with("channel_key", channel_key);
        let envelope = self.client.remove(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }
}

pub struct ChannelThumbnails<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> ChannelThumbnails<'a, B> {
    pub const CALL_CLASS: &'static str = "channels/thumbnails";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, channel_key: &str) -> Result<ChannelThumbnail> {
        let params = Params::new().with("channel_key", channel_key);
        show(self.client, Self::CALL_CLASS, params, "thumbnail").await
    }

    /// Ask for an upload link for a new channel thumbnail
    pub async fn update(&self, channel_key: &str) -> Result<Created> {
        let params = Params::new().with("channel_key", channel_key);
        let envelope = self.client.update(Self::CALL_CLASS, params).await?;
        created(&envelope, "media")
    }

    pub async fn upload(&self, link: &UploadLink, path: impl AsRef<Path>) -> Result<UploadedFile> {
        let envelope = self.client.upload(Self::CALL_CLASS, link, path).await?;
        uploaded(&envelope)
    }
}

/// The video playlist of a channel
pub struct ChannelVideos<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> ChannelVideos<'a, B> {
    pub const CALL_CLASS: &'static str = "channels/videos";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    /// A video of the channel, selected by `video_key` or `position`
    pub async fn show(&self, channel_key: &str, params: Params) -> Result<ChannelVideo> {
        let params = params.with("channel_key", channel_key);
        show(self.client, Self::CALL_CLASS, params, "video").await
    }

    pub async fn list(&self, channel_key: &str, params: Params) -> Result<Vec<ChannelVideo>> {
        let params = params.with("channel_key", channel_key);
        list(self.client, Self::CALL_CLASS, params, "videos").await
    }

    /// Add a video to a manual channel, optionally at `position`
    pub async fn create(&self, channel_key: &str, video_key: &str, params: Params) -> Result<()> {
        let params = params
            .with("channel_key", channel_key)
            .with("video_key", video_key);
        let envelope = self.client.call(Self::CALL_CLASS, "create", params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }

    /// Move a video (`position_from` to `position_to`)
    pub async fn update(&self, channel_key: &str, params: Params) -> Result<()> {
        let params = params.with("channel_key", channel_key);
        let envelope = self.client.update(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }

    /// Remove videos by `video_key` or the one at `position`
    pub async fn delete(&self, channel_key: &str, params: Params) -> Result<()> {
        let params = params.with("channel_key", channel_key);
        let envelope = self.client.remove(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }
}

pub struct ChannelViews<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> ChannelViews<'a, B> {
    pub const CALL_CLASS: &'static str = "channels/views";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, channel_key: &str, params: Params) -> Result<ChannelView> {
        let params = params.with("channel_key", channel_key);
        show(self.client, Self::CALL_CLASS, params, "channel").await
    }

    pub async fn list(&self, params: Params) -> Result<Vec<ChannelView>> {
        view_list(self.client, Self::CALL_CLASS, params, "channels").await
    }

    pub async fn all(&self) -> Result<Vec<ChannelView>> {
        self.list(Params::new()).await
    }
}
