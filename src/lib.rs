//! BOTR - client for the Bits on the Run video platform API
//!
//! Typed access to videos, channels, players and their sub-resources
//! (thumbnails, captions, conversions, tags, statistics), with request
//! signing and streamed multipart uploads.
//!
//! # Architecture
//!
//! - [`http`]: form encoding, the segment concatenator and multipart body
//!   used for uploads, and the [`http::HttpBackend`] transport seam
//! - [`api`]: parameters, request signing, the [`Client`] and response
//!   envelopes
//! - [`types`] and [`resources`]: resource structs and the operations on them
//! - [`config`]: settings from defaults, a TOML file and the environment
//!
//! # Examples
//!
//! ```rust,no_run
//! use botr::{Client, Params, Settings};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = Client::new(Settings::with_credentials("XOqEAfxj", "uA96CFtJa138E2T5GhKfngml"))?;
//!
//! let video = client.videos().show("yYul4DRz").await?;
//! println!("{:?}", video.title);
//!
//! client
//!     .videos()
//!     .update("yYul4DRz", Params::new().with("title", "New title"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;
pub mod utils;

pub use api::{Client, ClientGeneric, Envelope, Params};
pub use config::Settings;
pub use error::{Error, Result};
pub use http::{HttpBackend, Multipart, ReqwestBackend, UploadIo};
