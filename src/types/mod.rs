//! Resource types
//!
//! One explicit struct per remote resource. Fields the API sends that are
//! not listed here are ignored; fields it omits are `None`.

pub mod channel;
pub mod player;
pub mod serde_helpers;
pub mod upload;
pub mod video;

pub use channel::{Channel, ChannelThumbnail, ChannelVideo, ChannelView};
pub use player::{Player, PlayerView};
pub use upload::{Created, MediaRef, UploadLink, UploadQuery, UploadedFile};
pub use video::{
    Video, VideoCaption, VideoConversion, VideoEngagement, VideoTag, VideoThumbnail, VideoView,
};
