//! Async flavour of [`CombinedStream`](crate::CombinedStream).

use crate::domain::{
    combined_stream::partial_or,
    error::StreamError,
    ports::AsyncSegment,
    seek::SeekFrom,
    segment_map::{SegmentLocation, SegmentMap},
};

use alloc::vec::Vec;

/// A read-only stream over an ordered, fixed sequence of async segments.
///
/// Same layout and positioning rules as
/// [`CombinedStream`](crate::CombinedStream). Seeking is synchronous since it
/// never touches a segment; only construction and reads await.
///
/// # Examples
///
/// ```ignore
/// use combined_stream::{AsyncCombinedStream, AsyncIoSegment};
///
/// let mut stream = AsyncCombinedStream::new(vec![
///     AsyncIoSegment::new(first),
///     AsyncIoSegment::new(second),
/// ])
/// .await?;
///
/// let mut buf = [0u8; 512];
/// let n = stream.read(&mut buf).await?;
/// ```
pub struct AsyncCombinedStream<S: AsyncSegment> {
    segments: Vec<S>,
    map: SegmentMap,
    position: u64,
}

impl<S: AsyncSegment> AsyncCombinedStream<S> {
    /// Combine `segments`, in order, into a single stream positioned at 0.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment fails to report its length or the total
    /// length overflows `u64`.
    pub async fn new(mut segments: Vec<S>) -> Result<Self, StreamError<S::Error>> {
        let mut lengths = Vec::with_capacity(segments.len());
        for segment in segments.iter_mut() {
            lengths.push(segment.length().await.map_err(StreamError::Segment)?);
        }
        let map = SegmentMap::from_lengths(lengths)?;

        debug!(
            "combined {} async segments, total length {}",
            map.len(),
            map.total_len()
        );

        Ok(Self {
            segments,
            map,
            position: 0,
        })
    }

    /// Total length in bytes.
    #[inline]
    pub const fn length(&self) -> u64 {
        self.map.total_len()
    }

    /// Current logical position.
    #[inline]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Bytes between the current position and the end of the stream.
    #[inline]
    pub const fn remaining(&self) -> u64 {
        self.map.total_len().saturating_sub(self.position)
    }

    /// Number of segments, including zero-length ones.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the stream was built from no segments at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments, in order.
    pub fn segments(&self) -> &[S] {
        &self.segments
    }

    /// The segment layout captured at construction.
    pub fn segment_map(&self) -> &SegmentMap {
        &self.map
    }

    /// Resolve a logical position to a segment and local offset.
    pub fn locate(&self, position: u64) -> Option<SegmentLocation> {
        self.map.locate(position)
    }

    /// Consume the stream and hand the segments back.
    pub fn into_segments(self) -> Vec<S> {
        self.segments
    }

    /// Always `true`.
    pub const fn can_read(&self) -> bool {
        true
    }

    /// Always `true`.
    pub const fn can_seek(&self) -> bool {
        true
    }

    /// Always `false`.
    pub const fn can_write(&self) -> bool {
        false
    }

    /// Move the logical position. See [`CombinedStream::seek`](crate::CombinedStream::seek).
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64, StreamError<S::Error>> {
        let target = pos.resolve(self.position, self.map.total_len()).inspect_err(|_| {
            warn!("rejected seek from position {}", self.position);
        })?;

        self.position = target;
        Ok(target)
    }

    /// Read up to `buf.len()` bytes from the current position.
    ///
    /// See [`CombinedStream::read`](crate::CombinedStream::read) for the
    /// error and partial-read rules.
    pub async fn read(&mut self, buf: &mut [u8]) -> Result<usize, StreamError<S::Error>> {
        if buf.is_empty() {
            return Ok(0);
        }
        let Some(mut location) = self.map.locate(self.position) else {
            return Ok(0);
        };

        let mut filled = 0;
        let mut positioned = false;

        while filled < buf.len() {
            let segment = &mut self.segments[location.index];

            if !positioned {
                if let Err(e) = segment.seek_to(location.offset).await {
                    return partial_or(filled, StreamError::Segment(e));
                }
                positioned = true;
            }

            let available = self.map.remaining_in(location);
            let want = usize::try_from(available)
                .unwrap_or(usize::MAX)
                .min(buf.len() - filled);

            let n = match segment.read(&mut buf[filled..filled + want]).await {
                Ok(0) => {
                    warn!(
                        "segment {} ended at offset {}, {} bytes early",
                        location.index,
                        location.offset,
                        available
                    );
                    return partial_or(
                        filled,
                        StreamError::SegmentTruncated {
                            index: location.index,
                        },
                    );
                }
                Ok(n) => n.min(want),
                Err(e) => return partial_or(filled, StreamError::Segment(e)),
            };

            filled += n;
            self.position += n as u64;

            if (n as u64) < available {
                location.offset += n as u64;
                continue;
            }

            match self.map.next_non_empty(location.index) {
                Some(next) => {
                    trace!("crossing from segment {} to {}", location.index, next);
                    location = SegmentLocation {
                        index: next,
                        offset: 0,
                    };
                    positioned = false;
                }
                None => break,
            }
        }

        Ok(filled)
    }

    /// Writing is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`StreamError::Unsupported`].
    pub async fn write(&mut self, _buf: &[u8]) -> Result<usize, StreamError<S::Error>> {
        warn!("write attempted on a combined stream");
        Err(StreamError::Unsupported)
    }

    /// Nothing is ever buffered, so this always succeeds.
    pub async fn flush(&mut self) -> Result<(), StreamError<S::Error>> {
        Ok(())
    }
}

impl<S: AsyncSegment> AsyncSegment for AsyncCombinedStream<S> {
    type Error = StreamError<S::Error>;

    async fn length(&mut self) -> Result<u64, Self::Error> {
        Ok(AsyncCombinedStream::length(self))
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        AsyncCombinedStream::read(self, buf).await
    }

    async fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error> {
        AsyncCombinedStream::seek(self, SeekFrom::Start(offset)).map(|_| ())
    }
}
