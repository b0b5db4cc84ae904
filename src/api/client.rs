//! API client
//!
//! [`ClientGeneric`] owns the [`Settings`] and an [`HttpBackend`]. It builds
//! call URLs, signs every request and unwraps the response [`Envelope`].
//! Resource-specific operations live in [`crate::resources`] and are reached
//! through accessors such as [`ClientGeneric::videos`].

use super::auth::{SIGNATURE_PARAM, api_nonce, api_timestamp, signature};
use super::envelope::Envelope;
use super::params::Params;
use crate::config::Settings;
use crate::http::{HttpBackend, Multipart, ReqwestBackend};
use crate::types::UploadLink;
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Authentication parameters the client sets on every request
pub const AUTH_PARAMS: [&str; 5] = [
    "api_format",
    "api_key",
    "api_timestamp",
    "api_nonce",
    SIGNATURE_PARAM,
];

/// Client over the default `reqwest` backend
pub type Client = ClientGeneric<ReqwestBackend>;

/// API client, generic over the transport for testing
#[derive(Debug, Clone)]
pub struct ClientGeneric<B: HttpBackend> {
    settings: Settings,
    backend: B,
}

impl Client {
    /// Create a client with a `reqwest` backend built from `settings`
    pub fn new(settings: Settings) -> Result<Self> {
        let backend = ReqwestBackend::new(&settings)?;
        Ok(Self::with_backend(settings, backend))
    }
}

impl<B: HttpBackend> ClientGeneric<B> {
    pub fn with_backend(settings: Settings, backend: B) -> Self {
        Self { settings, backend }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// `<protocol>://<server>/<version>/<call_class>`
    pub fn api_url(&self, call_class: &str) -> String {
        let api = &self.settings.api;
        format!(
            "{}://{}/{}/{}",
            api.protocol, api.server, api.version, call_class
        )
    }

    /// Where files for `call_class` are posted, given the link from a create call
    pub fn upload_url(&self, call_class: &str, link: &UploadLink) -> String {
        link.upload_url(&self.settings, call_class)
    }

    /// Progress polling URL for an upload link
    pub fn progress_url(&self, link: &UploadLink, callback: &str) -> String {
        link.progress_url(&self.settings, callback)
    }

    /// Add the authentication parameters and the signature to `params`.
    ///
    /// Fails with a configuration error when the key or secret is missing.
    /// Authentication parameters supplied by the caller are replaced.
    pub fn signed_params(&self, params: Params) -> Result<Params> {
        let (key, secret) = self.settings.api.credentials()?;

        let mut params = params;
        for name in AUTH_PARAMS {
            params.remove(name);
        }
        params.insert("api_format", &self.settings.api.format);
        params.insert("api_key", key);
        params.insert("api_timestamp", api_timestamp());
        params.insert("api_nonce", api_nonce());

        let digest = signature(&params, secret);
        params.insert(SIGNATURE_PARAM, digest);
        Ok(params)
    }

    /// GET `<call_class>?method=<method>` with signed `params`
    pub async fn call(&self, call_class: &str, method: &str, params: Params) -> Result<Envelope> {
        let params = self.signed_params(params.with("method", method))?;
        debug!("Calling {}/{}", call_class, method);
        let response = self.backend.get(&self.api_url(call_class), &params).await?;
        Envelope::parse(response)
    }

    /// PUT `<call_class>` with signed `params`
    pub async fn update(&self, call_class: &str, params: Params) -> Result<Envelope> {
        let params = self.signed_params(params)?;
        debug!("Updating {}", call_class);
        let response = self.backend.put(&self.api_url(call_class), &params).await?;
        Envelope::parse(response)
    }

    /// DELETE `<call_class>` with signed `params`
    pub async fn remove(&self, call_class: &str, params: Params) -> Result<Envelope> {
        let params = self.signed_params(params)?;
        debug!("Deleting from {}", call_class);
        let response = self
            .backend
            .delete(&self.api_url(call_class), &params)
            .await?;
        Envelope::parse(response)
    }

    /// POST the file at `path` to the upload host named by `link`.
    ///
    /// The file is opened before anything else happens, so a missing file
    /// fails without network I/O.
    pub async fn upload(
        &self,
        call_class: &str,
        link: &UploadLink,
        path: impl AsRef<Path>,
    ) -> Result<Envelope> {
        let path = path.as_ref();
        let multipart = Multipart::new(path, None)?;

        let mut params = Params::new();
        params.insert_opt("key", link.query.key.as_deref());
        params.insert_opt("token", link.query.token.as_deref());
        let params = self.signed_params(params)?;

        let url = self.upload_url(call_class, link);
        info!("Uploading {} to {}", path.display(), url);
        let response = self.backend.post(&url, &params, Some(multipart)).await?;
        let envelope = Envelope::parse(response)?;
        info!("Upload of {} finished: {}", path.display(), envelope.status());
        Ok(envelope)
    }
}
