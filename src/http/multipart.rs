//! `multipart/form-data` upload bodies (RFC 2388)
//!
//! A [`Multipart`] is exactly three segments: a generated head, the raw file
//! bytes streamed from disk, and a generated tail. The upload server only
//! picks up a file sent under the form field name `file`.

use super::upload_io::{FileSegment, MemorySegment, Segment, UploadIo};
use crate::{Error, Result};
use std::io::{self, Read};
use std::path::Path;
use uuid::Uuid;

/// The only form field name the upload server accepts
pub const FILE_FIELD_NAME: &str = "file";

/// Content type used when the extension has no known mapping
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const BOUNDARY_PREFIX: &str = "BotrUpload";

/// A framed single-file multipart body
#[derive(Debug)]
pub struct Multipart {
    boundary: String,
    filename: String,
    file_content_type: String,
    stream: UploadIo,
}

impl Multipart {
    /// Frame the file at `path`, generating a boundary unless one is given.
    ///
    /// The file is opened here, so a missing or unreadable file fails with
    /// [`Error::FileAccess`] before anything is sent.
    pub fn new(path: impl AsRef<Path>, boundary: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let body = FileSegment::open(path).map_err(|e| Error::file_access(path, e))?;

        let boundary = boundary.map_or_else(generate_boundary, str::to_owned);
        // A raw quote would end the quoted `filename` parameter early
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().replace('"', "%22"))
            .unwrap_or_default();
        let file_content_type = mime_type_for(path);

        let head = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{FILE_FIELD_NAME}\"; filename=\"{filename}\"\r\n\
             Content-Length: {length}\r\n\
             Content-Type: {file_content_type}\r\n\
             Content-Transfer-Encoding: binary\r\n\
             \r\n",
            length = body.len(),
        );
        let tail = format!("\r\n--{boundary}--\r\n");

        let stream = UploadIo::new(vec![
            Box::new(MemorySegment::new(head)) as Box<dyn Segment>,
            Box::new(body),
            Box::new(MemorySegment::new(tail)),
        ]);

        Ok(Self {
            boundary,
            filename,
            file_content_type,
            stream,
        })
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// MIME type of the framed file
    pub fn file_content_type(&self) -> &str {
        &self.file_content_type
    }

    /// Value for the request's `Content-Type` header
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Exact number of body bytes, for the `Content-Length` header
    pub fn size(&self) -> u64 {
        self.stream.size()
    }

    /// See [`UploadIo::read_chunk`]
    pub fn read_chunk(&mut self, max: Option<usize>) -> io::Result<Option<Vec<u8>>> {
        self.stream.read_chunk(max)
    }

    pub fn rewind(&mut self) -> io::Result<()> {
        self.stream.rewind()
    }

    pub fn close(&mut self) {
        self.stream.close();
    }

    pub fn is_closed(&self) -> bool {
        self.stream.is_closed()
    }

    pub fn into_stream(self) -> UploadIo {
        self.stream
    }
}

impl Read for Multipart {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

/// Random boundary: fixed tag followed by 16 random decimal digits
pub fn generate_boundary() -> String {
    let random = Uuid::new_v4().as_u128() % 10_u128.pow(16);
    format!("{BOUNDARY_PREFIX}{random:016}")
}

/// MIME type from the file extension, falling back to [`DEFAULT_CONTENT_TYPE`]
pub fn mime_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const EXPECTED: &str = "--753536\r\n\
        Content-Disposition: form-data; name=\"file\"; filename=\"test.txt\"\r\n\
        Content-Length: 15\r\n\
        Content-Type: text/plain\r\n\
        Content-Transfer-Encoding: binary\r\n\
        \r\n\
        This is a test.\r\n\
        --753536--\r\n";

    fn fixture(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read_exact_body() {
        let (_dir, path) = fixture("test.txt", b"This is a test.");
        let mut multipart = Multipart::new(&path, Some("753536")).unwrap();

        let body = multipart.read_chunk(None).unwrap().unwrap();
        assert_eq!(String::from_utf8(body).unwrap(), EXPECTED);
    }

    #[test]
    fn test_size_matches_body() {
        let (_dir, path) = fixture("test.txt", b"This is a test.");
        let multipart = Multipart::new(&path, Some("753536")).unwrap();
        assert_eq!(multipart.size(), EXPECTED.len() as u64);
    }

    #[test]
    fn test_chunked_read_matches_body() {
        let (_dir, path) = fixture("test.txt", b"This is a test.");
        let mut multipart = Multipart::new(&path, Some("753536")).unwrap();

        let mut out = Vec::new();
        loop {
            let chunk = multipart.read_chunk(Some(7)).unwrap().unwrap();
            if chunk.is_empty() {
                break;
            }
            out.extend(chunk);
        }
        assert_eq!(out, EXPECTED.as_bytes());
    }

    #[test]
    fn test_close() {
        let (_dir, path) = fixture("test.txt", b"This is a test.");
        let mut multipart = Multipart::new(&path, Some("753536")).unwrap();
        assert!(!multipart.is_closed());
        multipart.close();
        assert!(multipart.is_closed());
        multipart.close();
    }

    #[test]
    fn test_rewind_rereads_file() {
        let (_dir, path) = fixture("test.txt", b"This is a test.");
        let mut multipart = Multipart::new(&path, Some("753536")).unwrap();

        let mut first = String::new();
        multipart.read_to_string(&mut first).unwrap();
        multipart.rewind().unwrap();
        let mut second = String::new();
        multipart.read_to_string(&mut second).unwrap();

        assert_eq!(first, EXPECTED);
        assert_eq!(second, EXPECTED);
    }

    #[test]
    fn test_content_type_header() {
        let (_dir, path) = fixture("test.txt", b"x");
        let multipart = Multipart::new(&path, Some("753536")).unwrap();
        assert_eq!(
            multipart.content_type(),
            "multipart/form-data; boundary=753536"
        );
        assert_eq!(multipart.boundary(), "753536");
        assert_eq!(multipart.filename(), "test.txt");
    }

    #[test]
    fn test_generated_boundary() {
        let (_dir, path) = fixture("clip.mp4", b"\x00\x01\x02");
        let multipart = Multipart::new(&path, None).unwrap();
        let boundary = multipart.boundary();

        assert!(boundary.starts_with(BOUNDARY_PREFIX));
        let digits = &boundary[BOUNDARY_PREFIX.len()..];
        assert_eq!(digits.len(), 16);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(multipart.file_content_type(), "video/mp4");
    }

    #[test]
    fn test_binary_content_preserved() {
        let content: Vec<u8> = (0..=255).collect();
        let (_dir, path) = fixture("blob.bin", &content);
        let mut multipart = Multipart::new(&path, Some("b")).unwrap();

        let body = multipart.read_chunk(None).unwrap().unwrap();
        assert_eq!(body.len() as u64, multipart.size());
        let start = body.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
        assert_eq!(&body[start..start + 256], content.as_slice());
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        let (_dir, path) = fixture("video.botrunknownext", b"data");
        let multipart = Multipart::new(&path, Some("x")).unwrap();
        assert_eq!(multipart.file_content_type(), DEFAULT_CONTENT_TYPE);

        assert_eq!(mime_type_for(Path::new("no_extension")), DEFAULT_CONTENT_TYPE);
    }

    #[cfg(unix)]
    #[test]
    fn test_quote_in_filename_is_escaped() {
        let (_dir, path) = fixture("say \"hi\".txt", b"hi");
        let mut multipart = Multipart::new(&path, Some("b")).unwrap();
        assert_eq!(multipart.filename(), "say %22hi%22.txt");

        let body = String::from_utf8(multipart.read_chunk(None).unwrap().unwrap()).unwrap();
        assert!(body.contains("filename=\"say %22hi%22.txt\"\r\n"));
    }

    #[test]
    fn test_missing_file_fails_at_construction() {
        let err = Multipart::new("/nonexistent/botr/video.mp4", Some("x")).unwrap_err();
        match err {
            Error::FileAccess { path, source } => {
                assert_eq!(path, PathBuf::from("/nonexistent/botr/video.mp4"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
