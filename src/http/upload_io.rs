//! Streaming concatenation of byte segments
//!
//! [`UploadIo`] presents several independently owned segments as a single
//! sequential stream. It is used to build upload bodies where the framing is
//! generated in memory while the (possibly large) file is streamed from disk.
//!
//! # Examples
//!
//! ```rust
//! use botr::http::{MemorySegment, UploadIo};
//!
//! let mut io = UploadIo::new(vec![
//!     Box::new(MemorySegment::new("head|")) as Box<dyn botr::http::Segment>,
//!     Box::new(MemorySegment::new("tail")),
//! ]);
//!
//! assert_eq!(io.size(), 9);
//! assert_eq!(io.read_chunk(Some(7)).unwrap().unwrap(), b"head|ta");
//! assert_eq!(io.read_chunk(None).unwrap().unwrap(), b"il");
//! assert_eq!(io.read_chunk(None).unwrap(), None);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Buffer size used when draining the stream without a length limit
const DRAIN_BUFFER_SIZE: usize = 8 * 1024;

/// One byte-producing unit of an [`UploadIo`]
pub trait Segment: Read + Send + Sync {
    /// Total length of the segment in bytes, independent of the read position
    fn len(&self) -> u64;

    /// Whether the segment holds no bytes at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reset the segment to its first byte.
    fn rewind(&mut self) -> io::Result<()> {
        Err(io::Error::new(
            ErrorKind::Unsupported,
            "segment cannot be rewound",
        ))
    }

    /// Release the underlying resource. Must tolerate repeated calls.
    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

/// In-memory segment
#[derive(Debug, Clone)]
pub struct MemorySegment {
    data: Vec<u8>,
    position: usize,
    closed: bool,
}

impl MemorySegment {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            position: 0,
            closed: false,
        }
    }
}

impl Read for MemorySegment {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.closed {
            return Ok(0);
        }
        let remaining = &self.data[self.position..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.position += n;
        Ok(n)
    }
}

impl Segment for MemorySegment {
    fn len(&self) -> u64 {
        self.data.len() as u64
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.position = 0;
        self.closed = false;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// File-backed segment, streamed sequentially from disk.
///
/// The length is taken from the file metadata when the segment is opened and
/// bounds every read: bytes appended later are never streamed, and a file that
/// shrinks fails with [`ErrorKind::UnexpectedEof`]. A closed segment reopens
/// its path on [`Segment::rewind`].
#[derive(Debug)]
pub struct FileSegment {
    path: PathBuf,
    file: Option<File>,
    len: u64,
    remaining: u64,
}

impl FileSegment {
    /// Open `path` for reading; fails if it is missing, unreadable or not a regular file.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }

        Ok(Self {
            path,
            file: Some(file),
            len: metadata.len(),
            remaining: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for FileSegment {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(file) = self.file.as_mut() else {
            return Ok(0);
        };
        if self.remaining == 0 || buf.is_empty() {
            return Ok(0);
        }

        let limit = usize::try_from(self.remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let n = file.read(&mut buf[..limit])?;
        if n == 0 {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                format!(
                    "{} ended {} bytes short of its declared length",
                    self.path.display(),
                    self.remaining
                ),
            ));
        }
        self.remaining -= n as u64;
        Ok(n)
    }
}

impl Segment for FileSegment {
    fn len(&self) -> u64 {
        self.len
    }

    fn rewind(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => {
                file.seek(SeekFrom::Start(0))?;
            }
            None => {
                self.file = Some(File::open(&self.path)?);
            }
        }
        self.remaining = self.len;
        Ok(())
    }

    fn close(&mut self) {
        // Dropping the handle closes it
        self.file.take();
    }

    fn is_closed(&self) -> bool {
        self.file.is_none()
    }
}

/// Sequential concatenation of [`Segment`]s.
///
/// Single-owner and single-pass apart from [`UploadIo::rewind`]. Once the
/// last segment is exhausted every segment is closed.
pub struct UploadIo {
    segments: Vec<Box<dyn Segment>>,
    current: usize,
}

impl UploadIo {
    pub fn new(segments: Vec<Box<dyn Segment>>) -> Self {
        Self {
            segments,
            current: 0,
        }
    }

    /// Total number of bytes across all segments. Does not consume the stream.
    pub fn size(&self) -> u64 {
        self.segments.iter().map(|segment| segment.len()).sum()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Read up to `max` bytes, or everything that is left when `max` is `None`.
    ///
    /// A request for zero bytes returns an empty chunk without touching any
    /// segment. At the end of the stream an unlimited read returns `None`
    /// while a limited read returns an empty chunk.
    pub fn read_chunk(&mut self, max: Option<usize>) -> io::Result<Option<Vec<u8>>> {
        match max {
            Some(0) => Ok(Some(Vec::new())),
            Some(limit) => {
                let capacity = usize::try_from(self.size()).unwrap_or(usize::MAX);
                let mut buf = vec![0; limit.min(capacity)];
                let filled = self.fill(&mut buf)?;
                buf.truncate(filled);
                Ok(Some(buf))
            }
            None => {
                let mut out = Vec::new();
                let mut buf = [0; DRAIN_BUFFER_SIZE];
                loop {
                    let filled = self.fill(&mut buf)?;
                    if filled == 0 {
                        break;
                    }
                    out.extend_from_slice(&buf[..filled]);
                }
                Ok(if out.is_empty() { None } else { Some(out) })
            }
        }
    }

    /// Move back to the first byte of the first segment.
    ///
    /// Fails with the first segment error if any segment cannot rewind. The
    /// stream is then left closed and at its end, never partially rewound.
    pub fn rewind(&mut self) -> io::Result<()> {
        for segment in &mut self.segments {
            if let Err(e) = segment.rewind() {
                self.current = self.segments.len();
                self.close();
                return Err(e);
            }
        }
        self.current = 0;
        Ok(())
    }

    /// Close every segment that is still open
    pub fn close(&mut self) {
        for segment in &mut self.segments {
            if !segment.is_closed() {
                segment.close();
            }
        }
    }

    /// True when every segment reports closed
    pub fn is_closed(&self) -> bool {
        self.segments.iter().all(|segment| segment.is_closed())
    }

    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            let Some(segment) = self.segments.get_mut(self.current) else {
                break;
            };
            match segment.read(&mut buf[filled..]) {
                Ok(0) => self.current += 1,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        if self.current >= self.segments.len() {
            self.close();
        }

        Ok(filled)
    }
}

impl Read for UploadIo {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.fill(buf)
    }
}

impl fmt::Debug for UploadIo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadIo")
            .field("segments", &self.segments.len())
            .field("current", &self.current)
            .field("size", &self.size())
            .finish()
    }
}
