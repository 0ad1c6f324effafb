//! Segment adapter for embedded-io-async streams.

use crate::domain::ports::AsyncSegment;
use embedded_io_async::{Read, Seek, SeekFrom};

/// Segment wrapper for async I/O streams.
///
/// Wraps any type implementing `embedded_io_async::{Read, Seek}` and provides
/// the [`AsyncSegment`] port.
///
/// # Example
///
/// ```ignore
/// use combined_stream::AsyncIoSegment;
/// use embedded_io_adapters::tokio_1::FromTokio;
///
/// let file = tokio::fs::File::open("part-000.bin").await?;
/// let segment = AsyncIoSegment::new(FromTokio::new(file));
/// ```
pub struct AsyncIoSegment<T>(T);

impl<T> AsyncIoSegment<T> {
    /// Create a new AsyncIoSegment wrapping the given stream.
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Get a reference to the inner stream.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Get a mutable reference to the inner stream.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consume the wrapper and return the inner stream.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Read + Seek> AsyncSegment for AsyncIoSegment<T> {
    type Error = T::Error;

    async fn length(&mut self) -> Result<u64, Self::Error> {
        let current = self.0.seek(SeekFrom::Current(0)).await?;
        let end = self.0.seek(SeekFrom::End(0)).await?;
        self.0.seek(SeekFrom::Start(current)).await?;
        Ok(end)
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.0.read(buf).await
    }

    async fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error> {
        self.0.seek(SeekFrom::Start(offset)).await.map(|_| ())
    }
}
