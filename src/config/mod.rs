//! Configuration management for the BOTR client
//!
//! This module handles loading and managing the endpoint, credential,
//! and transport settings. Settings are owned by the caller and
//! passed explicitly to every [`crate::Client`].

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, default_config_path};
pub use settings::{ApiSettings, NetworkSettings, Settings, UploadSettings};
