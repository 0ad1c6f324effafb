//! CombinedStream domain service - presents several segments as one stream.
//!
//! Only the logical position is stored. It is turned into a segment and a
//! local offset when a read happens, so seeking never touches a segment.

use crate::domain::{
    error::StreamError,
    ports::Segment,
    seek::SeekFrom,
    segment_map::{SegmentLocation, SegmentMap},
};

use alloc::vec::Vec;

/// A read-only stream over an ordered, fixed sequence of segments.
///
/// The bytes of the segments are laid end to end: segment `i` starts where
/// segment `i - 1` ends. Reads cross segment boundaries transparently.
///
/// # Type Parameters
///
/// - `S`: The segment type. Use `Box<dyn Segment<Error = E>>` to mix segment
///   implementations sharing an error type.
///
/// # Examples
///
/// ```
/// use combined_stream::{CombinedStream, IoSegment, SeekFrom};
/// use std::io::Cursor;
///
/// let segments = vec![
///     IoSegment::from_std(Cursor::new(vec![0x1])),
///     IoSegment::from_std(Cursor::new(vec![0x2, 0x3])),
/// ];
/// let mut stream = CombinedStream::new(segments).unwrap();
/// assert_eq!(stream.length(), 3);
///
/// let mut buf = [0u8; 3];
/// assert_eq!(stream.read(&mut buf).unwrap(), 3);
/// assert_eq!(buf, [0x1, 0x2, 0x3]);
///
/// assert_eq!(stream.seek(SeekFrom::End(-2)).unwrap(), 1);
/// ```
pub struct CombinedStream<S: Segment> {
    segments: Vec<S>,
    map: SegmentMap,
    position: u64,
}

impl<S: Segment> CombinedStream<S> {
    /// Combine `segments`, in order, into a single stream positioned at 0.
    ///
    /// The length of every segment is queried once, here.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A segment fails to report its length
    /// - The total length overflows `u64`
    pub fn new(mut segments: Vec<S>) -> Result<Self, StreamError<S::Error>> {
        let lengths = segments
            .iter_mut()
            .map(|segment| segment.length().map_err(StreamError::Segment))
            .collect::<Result<Vec<_>, _>>()?;
        let map = SegmentMap::from_lengths(lengths)?;

        debug!(
            "combined {} segments, total length {}",
            map.len(),
            map.total_len()
        );

        Ok(Self {
            segments,
            map,
            position: 0,
        })
    }

    /// Combine the segments yielded by `segments`, in iteration order.
    pub fn from_segments<I>(segments: I) -> Result<Self, StreamError<S::Error>>
    where
        I: IntoIterator<Item = S>,
    {
        Self::new(segments.into_iter().collect())
    }

    /// Total length in bytes, the sum of all segment lengths.
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

    /// Always `false`; see [`CombinedStream::write`].
    pub const fn can_write(&self) -> bool {
        false
    }

    /// Move the logical position.
    ///
    /// Seeking past the end is allowed; reads there return 0. No segment is
    /// touched until the next read.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::SeekBeforeBegin`] if the target would be
    /// negative, or [`StreamError::PositionOverflow`] if it does not fit in a
    /// `u64`. The position is unchanged in both cases.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64, StreamError<S::Error>> {
        let target = pos.resolve(self.position, self.map.total_len()).inspect_err(|_| {
            warn!("rejected seek from position {}", self.position);
        })?;

        self.position = target;
        Ok(target)
    }

    /// Read up to `buf.len()` bytes from the current position.
    ///
    /// Fills `buf` from consecutive segments until it is full or the stream
    /// ends, and advances the position by the returned count.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment fails before any byte was copied, or if
    /// the current segment ends early ([`StreamError::SegmentTruncated`]).
    /// Once some bytes have been copied, a failure ends the read early and
    /// the bytes are returned; the next read retries the failing segment.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, StreamError<S::Error>> {
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
                if let Err(e) = segment.seek_to(location.offset) {
                    return partial_or(filled, StreamError::Segment(e));
                }
                positioned = true;
            }

            let available = self.map.remaining_in(location);
            let want = usize::try_from(available)
                .unwrap_or(usize::MAX)
                .min(buf.len() - filled);

            let n = match segment.read(&mut buf[filled..filled + want]) {
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
    pub fn write(&mut self, _buf: &[u8]) -> Result<usize, StreamError<S::Error>> {
        warn!("write attempted on a combined stream");
        Err(StreamError::Unsupported)
    }

    /// Nothing is ever buffered, so this always succeeds.
    pub fn flush(&mut self) -> Result<(), StreamError<S::Error>> {
        Ok(())
    }
}

/// Return what was already copied, or the error when nothing was.
pub(crate) fn partial_or<E>(filled: usize, error: StreamError<E>) -> Result<usize, StreamError<E>> {
    if filled > 0 { Ok(filled) } else { Err(error) }
}

// Combined streams nest: a combined stream is itself a valid segment.
impl<S: Segment> Segment for CombinedStream<S> {
    type Error = StreamError<S::Error>;

    fn length(&mut self) -> Result<u64, Self::Error> {
        Ok(CombinedStream::length(self))
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        CombinedStream::read(self, buf)
    }

    fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error> {
        CombinedStream::seek(self, SeekFrom::Start(offset)).map(|_| ())
    }
}
