//! Segment port - the capability set an underlying stream must provide.
//!
//! A segment is anything that can report its length, read from its own
//! cursor and jump to an absolute offset inside itself. The combined stream
//! places no other requirement on it.

/// Port for a synchronous segment.
///
/// # Implementation Notes
///
/// - `length` is queried exactly once, when the combined stream is built,
///   and must not change afterwards
/// - `read` follows the usual contract: `Ok(0)` means no more data
/// - `seek_to` takes an offset local to the segment
///
/// # Examples
///
/// ```
/// use combined_stream::Segment;
///
/// struct Zeroes {
///     len: u64,
///     pos: u64,
/// }
///
/// impl Segment for Zeroes {
///     type Error = core::convert::Infallible;
///
///     fn length(&mut self) -> Result<u64, Self::Error> {
///         Ok(self.len)
///     }
///
///     fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
///         let n = buf.len().min((self.len - self.pos) as usize);
///         buf[..n].fill(0);
///         self.pos += n as u64;
///         Ok(n)
///     }
///
///     fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error> {
///         self.pos = offset.min(self.len);
///         Ok(())
///     }
/// }
/// ```
pub trait Segment {
    /// Error type returned by segment operations.
    type Error: core::fmt::Debug;

    /// Current length of the segment in bytes.
    fn length(&mut self) -> Result<u64, Self::Error>;

    /// Read up to `buf.len()` bytes from the segment's cursor, advancing it.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Move the segment's cursor to `offset` bytes from its start.
    fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error>;
}

/// Port for an asynchronous segment.
///
/// Same contract as [`Segment`], with every operation awaited.
#[cfg(feature = "async")]
pub trait AsyncSegment {
    /// Error type returned by segment operations.
    type Error: core::fmt::Debug;

    /// Current length of the segment in bytes.
    async fn length(&mut self) -> Result<u64, Self::Error>;

    /// Read up to `buf.len()` bytes from the segment's cursor, advancing it.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Move the segment's cursor to `offset` bytes from its start.
    async fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error>;
}
