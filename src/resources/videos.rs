//! Videos and their sub-resources

use super::{acknowledge, created, list, show, uploaded, view_list};
use crate::Result;
use crate::api::{ClientGeneric, Params};
use crate::http::HttpBackend;
use crate::types::{
    Created, UploadLink, UploadedFile, Video, VideoCaption, VideoConversion, VideoEngagement,
    VideoTag, VideoThumbnail, VideoView,
};
use std::path::Path;

/// Creating, searching, editing and deleting videos
pub struct Videos<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> Videos<'a, B> {
    pub const CALL_CLASS: &'static str = "videos";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, video_key: &str) -> Result<Video> {
        let params = Params::new().with("video_key", video_key);
        show(self.client, Self::CALL_CLASS, params, "video").await
    }

    /// Search videos, e.g. by `tags` with `tags_mode` `all` or `any`
    pub async fn list(&self, params: Params) -> Result<Vec<Video>> {
        list(self.client, Self::CALL_CLASS, params, "videos").await
    }

    pub async fn all(&self) -> Result<Vec<Video>> {
        self.list(Params::new()).await
    }

    /// Create a video container (`title`, `tags`, `description`, `author`,
    /// `date`, `link`, ...). The returned link is where the file goes.
    pub async fn create(&self, params: Params) -> Result<Created> {
        let envelope = self.client.call(Self::CALL_CLASS, "create", params).await?;
        created(&envelope, "media")
    }

    pub async fn upload(&self, link: &UploadLink, path: impl AsRef<Path>) -> Result<UploadedFile> {
        let envelope = self.client.upload(Self::CALL_CLASS, link, path).await?;
        uploaded(&envelope)
    }

    pub async fn update(&self, video_key: &str, params: Params) -> Result<()> {
        let params = params.with("video_key", video_key);
        let envelope = self.client.update(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }

    pub async fn delete(&self, video_key: &str) -> Result<()> {
        let params = Params::new().with("video_key", video_key);
        let envelope = self.client.remove(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }
}

/// Transcoded renditions of a video
pub struct VideoConversions<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> VideoConversions<'a, B> {
    pub const CALL_CLASS: &'static str = "videos/conversions";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, conversion_key: &str) -> Result<VideoConversion> {
        let params = Params::new().with("conversion_key", conversion_key);
        show(self.client, Self::CALL_CLASS, params, "conversion").await
    }

    pub async fn list(&self, video_key: &str, params: Params) -> Result<Vec<VideoConversion>> {
        let params = params.with("video_key", video_key);
        list(self.client, Self::CALL_CLASS, params, "conversions").await
    }

    /// Queue a conversion of `video_key` with the template `template_key`
    pub async fn create(&self, video_key: &str, template_key: &str) -> Result<Created> {
        let params = Params::new()
            .with("video_key", video_key)
            .with("template_key", template_key);
        let envelope = self.client.call(Self::CALL_CLASS, "create", params).await?;
        created(&envelope, "conversion")
    }

    pub async fn delete(&self, conversion_key: &str) -> Result<()> {
        let params = Params::new().with("conversion_key", conversion_key);
        let envelope = self.client.remove(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }
}

/// Poster images of a video
pub struct VideoThumbnails<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> VideoThumbnails<'a, B> {
    pub const CALL_CLASS: &'static str = "videos/thumbnails";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, video_key: &str) -> Result<VideoThumbnail> {
        let params = Params::new().with("video_key", video_key);
        show(self.client, Self::CALL_CLASS, params, "thumbnail").await
    }

    /// Pick a frame (`position`) or, without options, ask for an upload link
    pub async fn update(&self, video_key: &str, params: Params) -> Result<Created> {
        let params = params.with("video_key", video_key);
        let envelope = self.client.update(Self::CALL_CLASS, params).await?;
        created(&envelope, "media")
    }

    pub async fn upload(&self, link: &UploadLink, path: impl AsRef<Path>) -> Result<UploadedFile> {
        let envelope = self.client.upload(Self::CALL_CLASS, link, path).await?;
        uploaded(&envelope)
    }
}

/// Caption tracks of a video
pub struct VideoCaptions<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> VideoCaptions<'a, B> {
    pub const CALL_CLASS: &'static str = "videos/captions";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, caption_key: &str) -> Result<VideoCaption> {
        let params = Params::new().with("caption_key", caption_key);
        show(self.client, Self::CALL_CLASS, params, "caption").await
    }

    pub async fn list(&self, video_key: &str, params: Params) -> Result<Vec<VideoCaption>> {
        let params = params.with("video_key", video_key);
        list(self.client, Self::CALL_CLASS, params, "captions").await
    }

    pub async fn create(&self, video_key: &str, params: Params) -> Result<Created> {
        let params = params.with("video_key", video_key);
        let envelope = self.client.call(Self::CALL_CLASS, "create", params).await?;
        created(&envelope, "media")
    }

    pub async fn upload(&self, link: &UploadLink, path: impl AsRef<Path>) -> Result<UploadedFile> {
        let envelope = self.client.upload(Self::CALL_CLASS, link, path).await?;
        uploaded(&envelope)
    }

    pub async fn update(&self, caption_key: &str, params: Params) -> Result<()> {
        let params = params.with("caption_key", caption_key);
        let envelope = self.client.update(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }

    pub async fn delete(&self, caption_key: &str) -> Result<()> {
        let params = Params::new().with("caption_key", caption_key);
        let envelope = self.client.remove(Self::CALL_CLASS, params).await?;
        acknowledge(envelope, Self::CALL_CLASS)
    }
}

pub struct VideoTags<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> VideoTags<'a, B> {
    pub const CALL_CLASS: &'static str = "videos/tags";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    /// Tags in use, optionally filtered with `search`
    pub async fn list(&self, params: Params) -> Result<Vec<VideoTag>> {
        list(self.client, Self::CALL_CLASS, params, "tags").await
    }

    pub async fn all(&self) -> Result<Vec<VideoTag>> {
        self.list(Params::new()).await
    }
}

/// View statistics of videos
pub struct VideoViews<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> VideoViews<'a, B> {
    pub const CALL_CLASS: &'static str = "videos/views";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    /// Statistics of one video (`start_date`, `end_date`, `aggregate`, ...)
    pub async fn show(&self, video_key: &str, params: Params) -> Result<VideoView> {
        let params = params.with("video_key", video_key);
        show(self.client, Self::CALL_CLASS, params, "video").await
    }

    /// Per-video entries, or day/year buckets when grouped that way
    pub async fn list(&self, params: Params) -> Result<Vec<VideoView>> {
        view_list(self.client, Self::CALL_CLASS, params, "videos").await
    }

    pub async fn all(&self) -> Result<Vec<VideoView>> {
        self.list(Params::new()).await
    }
}

pub struct VideoEngagements<'a, B: HttpBackend> {
    client: &'a ClientGeneric<B>,
}

impl<'a, B: HttpBackend> VideoEngagements<'a, B> {
    pub const CALL_CLASS: &'static str = "videos/engagement";

    pub fn new(client: &'a ClientGeneric<B>) -> Self {
        Self { client }
    }

    pub async fn show(&self, video_key: &str) -> Result<VideoEngagement> {
        let params = Params::new().with("video_key", video_key);
        show(self.client, Self::CALL_CLASS, params, "video").await
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use crate::api::Params;
    use crate::api::client::tests::test_client;
    use crate::http::HttpResponse;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_show() {
        let client = test_client(vec![HttpResponse::ok(
            r#"{"status":"ok","video":{"key":"yYul4DRz","title":"Example","size":"2155823"}}"#,
        )]);

        let video = client.videos().show("yYul4DRz").await.unwrap();
        assert_eq!(video.title.as_deref(), Some("Example"));
        assert_eq!(video.size, Some(2155823));

        let request = client.backend().last();
        assert_eq!(request.url, "https://api.bitsontherun.com/v1/videos");
        assert_eq!(request.params.get("method"), Some("show"));
        assert_eq!(request.params.get("video_key"), Some("yYul4DRz"));
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let client = test_client(vec![HttpResponse::ok(
            r#"{"status":"ok","videos":[{"key":"a"},{"key":"b"}],"total":2}"#,
        )]);

        let videos = client
            .videos()
            .list(Params::new().with("tags", "foo,bar").with("tags_mode", "any"))
            .await
            .unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[1].key.as_deref(), Some("b"));

        let request = client.backend().last();
        assert_eq!(request.params.get("method"), Some("list"));
        assert_eq!(request.params.get("tags_mode"), Some("any"));
    }

    #[tokio::test]
    async fn test_all_sends_no_filters() {
        let client = test_client(vec![HttpResponse::ok(r#"{"status":"ok","videos":[]}"#)]);
        assert!(client.videos().all().await.unwrap().is_empty());
        assert!(!client.backend().last().params.contains("tags"));
    }

    #[tokio::test]
    async fn test_create_returns_key_and_link() {
        let client = test_client(vec![HttpResponse::ok(
            r#"{"status":"ok","media":{"type":"video","key":"yYul4DRz"},
                "link":{"protocol":"http","address":"upload.example.com","path":"/v1/videos/upload",
                        "query":{"key":"yYul4DRz","token":"bbfc1c3c4b"}}}"#,
        )]);

        let created = client
            .videos()
            .create(Params::new().with("title", "Holiday"))
            .await
            .unwrap();
        assert_eq!(created.status, "ok");
        assert_eq!(created.key, "yYul4DRz");
        let link = created.link.unwrap();
        assert_eq!(link.query.token.as_deref(), Some("bbfc1c3c4b"));

        let request = client.backend().last();
        assert_eq!(request.params.get("method"), Some("create"));
        assert_eq!(request.params.get("title"), Some("Holiday"));
    }

    #[tokio::test]
    async fn test_create_without_media_is_unexpected() {
        let client = test_client(vec![HttpResponse::ok(r#"{"status":"ok"}"#)]);
        let err = client.videos().create(Params::new()).await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn test_upload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"\x00\x00\x00\x18ftypmp42").unwrap();

        let client = test_client(vec![HttpResponse::ok(
            r#"{"status":"ok","file":{"md5":"1f3a","size":12}}"#,
        )]);
        let file = client
            .videos()
            .upload(&Default::default(), &path)
            .await
            .unwrap();
        assert_eq!(file.size, Some(12));

        let request = client.backend().last();
        assert_eq!(
            request.url,
            "http://upload.bitsontherun.com/v1/videos/upload"
        );
        let body = request.upload.unwrap();
        assert!(
            body.windows(b"Content-Type: video/mp4".len())
                .any(|w| w == b"Content-Type: video/mp4")
        );
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let client = test_client(vec![]);
        client
            .videos()
            .update("yYul4DRz", Params::new().with("title", "New title"))
            .await
            .unwrap();
        client.videos().delete("yYul4DRz").await.unwrap();

        let requests = client.backend().requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].params.get("title"), Some("New title"));
        assert_eq!(requests[0].params.get("video_key"), Some("yYul4DRz"));
        assert_eq!(requests[1].method, "DELETE");
        assert_eq!(requests[1].params.get("video_key"), Some("yYul4DRz"));
    }

    #[tokio::test]
    async fn test_delete_protocol_error() {
        let client = test_client(vec![HttpResponse::new(404, "No such video")]);
        let err = client.videos().delete("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP Error 404: No such video");
    }

    #[tokio::test]
    async fn test_conversions() {
        let client = test_client(vec![
            HttpResponse::ok(r#"{"status":"ok","conversion":{"key":"c1"}}"#),
            HttpResponse::ok(
                r#"{"status":"ok","conversions":[{"key":"c1","width":"1280","height":720}]}"#,
            ),
        ]);
        let conversions = client.video_conversions();

        let created = conversions.create("yYul4DRz", "tmpl").await.unwrap();
        assert_eq!(created.key, "c1");
        assert!(created.link.is_none());

        let list = conversions.list("yYul4DRz", Params::new()).await.unwrap();
        assert_eq!(list[0].width, Some(1280));

        let requests = client.backend().requests();
        assert_eq!(
            requests[0].url,
            "https://api.bitsontherun.com/v1/videos/conversions"
        );
        assert_eq!(requests[0].params.get("template_key"), Some("tmpl"));
        assert_eq!(requests[1].params.get("video_key"), Some("yYul4DRz"));
    }

    #[tokio::test]
    async fn test_thumbnail_update_returns_link() {
        let client = test_client(vec![HttpResponse::ok(
            r#"{"status":"ok","media":{"key":"yYul4DRz"},"link":{"path":"/v1/videos/thumbnails/upload","query":{"key":"yYul4DRz","token":"t"}}}"#,
        )]);

        let created = client
            .video_thumbnails()
            .update("yYul4DRz", Params::new())
            .await
            .unwrap();
        assert_eq!(created.key, "yYul4DRz");
        assert_eq!(client.backend().last().method, "PUT");
    }

    #[tokio::test]
    async fn test_caption_operations() {
        let client = test_client(vec![
            HttpResponse::ok(r#"{"status":"ok","caption":{"key":"cap","label":"English"}}"#),
            HttpResponse::ok(r#"{"status":"ok","media":{"key":"cap2"},"link":{}}"#),
        ]);
        let captions = client.video_captions();

        let caption = captions.show("cap").await.unwrap();
        assert_eq!(caption.label.as_deref(), Some("English"));

        let created = captions
            .create("yYul4DRz", Params::new().with("label", "Deutsch"))
            .await
            .unwrap();
        assert_eq!(created.key, "cap2");

        captions.delete("cap").await.unwrap();
        let requests = client.backend().requests();
        assert_eq!(requests[0].params.get("caption_key"), Some("cap"));
        assert_eq!(requests[1].params.get("video_key"), Some("yYul4DRz"));
        assert_eq!(requests[2].method, "DELETE");
        assert_eq!(requests[2].params.get("caption_key"), Some("cap"));
    }

    #[tokio::test]
    async fn test_tags() {
        let client = test_client(vec![HttpResponse::ok(
            r#"{"status":"ok","tags":[{"name":"foo","videos":"3"}]}"#,
        )]);
        let tags = client.video_tags().all().await.unwrap();
        assert_eq!(tags[0].videos, Some(3));
        assert_eq!(
            client.backend().last().url,
            "https://api.bitsontherun.com/v1/videos/tags"
        );
    }

    #[tokio::test]
    async fn test_view_list_variants() {
        let client = test_client(vec![
            HttpResponse::ok(r#"{"status":"ok","videos":[{"key":"a","views":5}]}"#),
            HttpResponse::ok(r#"{"status":"ok","days":[{"date":"2024-05-01","views":2}]}"#),
            HttpResponse::ok(r#"{"status":"ok","years":[{"year":2023,"views":9}]}"#),
            HttpResponse::ok(r#"{"status":"ok","views":42}"#),
        ]);
        let views = client.video_views();

        let per_video = views.all().await.unwrap();
        assert_eq!(per_video[0].key.as_deref(), Some("a"));

        let per_day = views
            .list(Params::new().with("group_days", "True"))
            .await
            .unwrap();
        assert_eq!(per_day[0].date.as_deref(), Some("2024-05-01"));

        let per_year = views.list(Params::new()).await.unwrap();
        assert_eq!(per_year[0].year, Some(2023));

        let total = views.list(Params::new()).await.unwrap();
        assert_eq!(total.len(), 1);
        assert_eq!(total[0].views, Some(42));
        assert_eq!(total[0].status.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_engagement() {
        let client = test_client(vec![HttpResponse::ok(
            r#"{"status":"ok","video":{"key":"yYul4DRz","engagements":{"0":1.0}}}"#,
        )]);
        let engagement = client.video_engagements().show("yYul4DRz").await.unwrap();
        assert_eq!(engagement.key.as_deref(), Some("yYul4DRz"));
        assert_eq!(
            client.backend().last().url,
            "https://api.bitsontherun.com/v1/videos/engagement"
        );
    }
}
