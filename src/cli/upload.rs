//! `botr upload`
//!
//! Creates a video container with the given metadata, then sends the file
//! to the upload link the API returned.

use crate::{Client, Error, Params, config::ConfigLoader};
use anyhow::Result;
use clap::Args;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments of the upload command
#[derive(Debug, Clone, Args)]
pub struct UploadArgs {
    /// Video file to upload
    #[arg(value_name = "VIDEO_PATH")]
    pub video_path: PathBuf,

    /// API key (falls back to BOTR_API_KEY or the config file)
    #[arg(short, long)]
    pub key: Option<String>,

    /// API secret (falls back to BOTR_API_SECRET or the config file)
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Title of the video
    #[arg(short, long)]
    pub title: Option<String>,

    /// Tags of the video, comma-separated
    #[arg(short = 'g', long)]
    pub tags: Option<String>,

    /// Description of the video
    #[arg(short, long)]
    pub description: Option<String>,

    /// Author of the video
    #[arg(short, long)]
    pub author: Option<String>,

    /// Creation date of the video as a Unix timestamp
    #[arg(long)]
    pub date: Option<u64>,

    /// URL of the web page the video will be published on
    #[arg(short, long)]
    pub link: Option<String>,
}

impl UploadArgs {
    /// Metadata parameters for the `videos create` call
    pub fn metadata(&self) -> Params {
        let mut params = Params::new();
        params.insert_opt("title", self.title.as_deref());
        params.insert_opt("tags", self.tags.as_deref());
        params.insert_opt("description", self.description.as_deref());
        params.insert_opt("author", self.author.as_deref());
        params.insert_opt("date", self.date);
        params.insert_opt("link", self.link.as_deref());
        params
    }
}

/// Run the upload command
pub async fn run_upload(args: UploadArgs, config_file: Option<&Path>) -> Result<()> {
    check_upload_target(&args.video_path)?;

    let mut settings = ConfigLoader::new().load(config_file)?;
    if let Some(key) = &args.key {
        settings.api.key = Some(key.clone());
    }
    if let Some(secret) = &args.secret {
        settings.api.secret = Some(secret.clone());
    }
    settings.api.credentials()?;

    let client = Client::new(settings)?;
    let videos = client.videos();

    println!("\nStarting upload.\n");
    let created = videos.create(args.metadata()).await?;
    debug!("Created video {}", created.key);
    let link = created.link.ok_or_else(|| {
        Error::unexpected_response(format!("no upload link for video {}", created.key))
    })?;

    println!("Uploading....\n");
    let file = videos.upload(&link, &args.video_path).await?;
    info!(
        "Uploaded video {} ({} bytes)",
        created.key,
        file.size.unwrap_or_default()
    );

    println!("Upload Complete.\n");
    Ok(())
}

/// The upload target must be a readable regular file before anything is sent
fn check_upload_target(path: &Path) -> crate::Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| Error::file_access(path, e))?;
    if !metadata.is_file() {
        return Err(Error::file_access(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    Ok(())
}
