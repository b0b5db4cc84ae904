//! Transport layer
//!
//! Everything that touches bytes on the wire: the shared form encoder, the
//! segment concatenator and multipart builder used for uploads, and the
//! [`HttpBackend`] seam the API client sends requests through.

pub mod backend;
pub mod encoding;
pub mod multipart;
pub mod response;
pub mod upload_io;

pub use backend::{HttpBackend, ReqwestBackend};
pub use encoding::{decode_component, encode_component, encode_form};
pub use multipart::Multipart;
pub use response::{HttpResponse, ResponseKind};
pub use upload_io::{FileSegment, MemorySegment, Segment, UploadIo};
