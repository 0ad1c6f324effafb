//! Segment adapter for embedded-io streams.

use crate::domain::ports::Segment;
use embedded_io::{Read, Seek, SeekFrom};

/// Segment wrapper for blocking I/O streams.
///
/// Wraps any type implementing `embedded_io::{Read, Seek}` and provides the
/// [`Segment`] port. The length is found by seeking to the end and back.
///
/// # Example
///
/// ```ignore
/// use combined_stream::IoSegment;
///
/// let file = std::fs::File::open("part-000.bin")?;
/// let segment = IoSegment::from_std(file);
/// ```
pub struct IoSegment<T>(T);

impl<T> IoSegment<T> {
    /// Create a new IoSegment wrapping the given stream.
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Get a reference to the inner stream.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Get a mutable reference to the inner stream.
    ///
    /// Moving the inner cursor is harmless (every read repositions it), but
    /// changing the stream's length is not supported.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consume the wrapper and return the inner stream.
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(feature = "std")]
impl<T> IoSegment<embedded_io_adapters::std::FromStd<T>> {
    /// Wrap a `std::io::{Read, Seek}` stream (a `File`, a `Cursor`, ...).
    pub fn from_std(inner: T) -> Self {
        Self(embedded_io_adapters::std::FromStd::new(inner))
    }
}

impl<T: Read + Seek> Segment for IoSegment<T> {
    type Error = T::Error;

    fn length(&mut self) -> Result<u64, Self::Error> {
        // Leave the cursor where the caller had it
        let current = self.0.seek(SeekFrom::Current(0))?;
        let end = self.0.seek(SeekFrom::End(0))?;
        self.0.seek(SeekFrom::Start(current))?;
        Ok(end)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.0.read(buf)
    }

    fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error> {
        self.0.seek(SeekFrom::Start(offset)).map(|_| ())
    }
}
