//! HTTP backends
//!
//! [`HttpBackend`] is the seam between the API client and the transport. The
//! default [`ReqwestBackend`] sends parameters in the query string (using the
//! same encoder as the signature) and streams upload bodies from disk with an
//! exact `Content-Length`.

use super::multipart::Multipart;
use super::response::HttpResponse;
use super::upload_io::UploadIo;
use crate::api::Params;
use crate::{Result, config::Settings};
use async_trait::async_trait;
use futures_util::Stream;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Body, Client, Method, RequestBuilder};
use std::io;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Size of the chunks an upload body is read in
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Transport used by [`crate::Client`]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET with `params` as the query string
    async fn get(&self, url: &str, params: &Params) -> Result<HttpResponse>;

    /// PUT with `params` as the query string
    async fn put(&self, url: &str, params: &Params) -> Result<HttpResponse>;

    /// DELETE with `params` as the query string
    async fn delete(&self, url: &str, params: &Params) -> Result<HttpResponse>;

    /// POST with `params` as the query string.
    ///
    /// With `upload` the body is the multipart stream, otherwise the same
    /// parameters form-encoded.
    async fn post(
        &self,
        url: &str,
        params: &Params,
        upload: Option<Multipart>,
    ) -> Result<HttpResponse>;
}

/// [`HttpBackend`] on top of an async `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: Client,
    timeout: Duration,
}

impl ReqwestBackend {
    /// Build a client from the network settings (user agent, timeout, proxy)
    pub fn new(settings: &Settings) -> Result<Self> {
        let timeout = settings.network.timeout();
        let mut builder = Client::builder()
            .user_agent(settings.network.user_agent.as_str())
            .connect_timeout(timeout);

        if let Some(proxy) = settings.get_proxy_url() {
            debug!("Using proxy: {}", proxy);
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            timeout,
        })
    }

    /// Wrap an existing client
    pub fn from_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn request(&self, method: Method, url: &str, params: &Params) -> Result<RequestBuilder> {
        let mut target = Url::parse(url)?;
        if !params.is_empty() {
            target.set_query(Some(&params.to_query()));
        }
        debug!("{} {} ({} params)", method, url, params.len());
        Ok(self.client.request(method, target))
    }

    async fn send(request: RequestBuilder) -> Result<HttpResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Response status {} ({} bytes)", status, body.len());
        Ok(HttpResponse::new(status, body))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get(&self, url: &str, params: &Params) -> Result<HttpResponse> {
        let request = self.request(Method::GET, url, params)?.timeout(self.timeout);
        Self::send(request).await
    }

    async fn put(&self, url: &str, params: &Params) -> Result<HttpResponse> {
        let request = self.request(Method::PUT, url, params)?.timeout(self.timeout);
        Self::send(request).await
    }

    async fn delete(&self, url: &str, params: &Params) -> Result<HttpResponse> {
        let request = self
            .request(Method::DELETE, url, params)?
            .timeout(self.timeout);
        Self::send(request).await
    }

    async fn post(
        &self,
        url: &str,
        params: &Params,
        upload: Option<Multipart>,
    ) -> Result<HttpResponse> {
        let request = self.request(Method::POST, url, params)?;

        let request = match upload {
            Some(multipart) => {
                let length = multipart.size();
                info!(
                    "Uploading {} ({} bytes, {})",
                    multipart.filename(),
                    length,
                    multipart.file_content_type()
                );
                // Uploads are not bounded by the request timeout, only by connect
                request
                    .header(CONTENT_TYPE, multipart.content_type())
                    .header(CONTENT_LENGTH, length)
                    .body(upload_body(multipart.into_stream()))
            }
            None => request
                .timeout(self.timeout)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(params.to_query()),
        };

        Self::send(request).await
    }
}

/// Stream `stream` as a request body.
///
/// The segments are closed when the stream is exhausted, or dropped with the
/// body if the request fails first.
pub fn upload_body(stream: UploadIo) -> Body {
    Body::wrap_stream(upload_chunks(stream))
}

/// Chunks of at most [`UPLOAD_CHUNK_SIZE`] bytes, read on the blocking pool
pub fn upload_chunks(
    stream: UploadIo,
) -> impl Stream<Item = io::Result<Vec<u8>>> + Send + Sync + 'static {
    futures_util::stream::try_unfold(stream, |mut stream| async move {
        let (stream, chunk) = tokio::task::spawn_blocking(move || {
            let chunk = stream.read_chunk(Some(UPLOAD_CHUNK_SIZE));
            (stream, chunk)
        })
        .await
        .map_err(io::Error::other)?;

        match chunk? {
            Some(bytes) if !bytes.is_empty() => Ok(Some((bytes, stream))),
            _ => Ok::<_, io::Error>(None),
        }
    })
}
