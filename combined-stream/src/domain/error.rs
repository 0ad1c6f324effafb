//! Stream errors.
//!
//! Segment failures are carried through untouched in [`StreamError::Segment`];
//! every other variant is raised by the combined stream itself.

use core::fmt;

/// Message carried by [`StreamError::SeekBeforeBegin`].
pub const SEEK_BEFORE_BEGIN_MESSAGE: &str =
    "An attempt was made to move the position before the beginning of the stream.";

/// Errors produced by a combined stream.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum StreamError<E> {
    /// Error from one of the underlying segments, propagated as-is.
    Segment(E),

    /// A seek resolved to a negative absolute position.
    ///
    /// The stream position is left unchanged.
    SeekBeforeBegin,

    /// A seek resolved to a position that does not fit in a `u64`.
    PositionOverflow,

    /// The sum of the segment lengths does not fit in a `u64`.
    LengthOverflow,

    /// A segment reported end-of-data before reaching the length it had at
    /// construction time.
    SegmentTruncated {
        /// Index of the offending segment.
        index: usize,
    },

    /// The operation is not supported (combined streams are read-only).
    Unsupported,
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Segment(e) => write!(f, "Segment error: {}", e),
            Self::SeekBeforeBegin => f.write_str(SEEK_BEFORE_BEGIN_MESSAGE),
            Self::PositionOverflow => write!(f, "Seek target does not fit in a 64-bit position"),
            Self::LengthOverflow => write!(f, "Combined length of the segments overflows 64 bits"),
            Self::SegmentTruncated { index } => write!(
                f,
                "Segment {} ended before its recorded length",
                index
            ),
            Self::Unsupported => write!(f, "Combined streams do not support writing"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for StreamError<E> {}

impl<E> StreamError<E> {
    /// Returns the segment error, if this error came from a segment.
    pub fn segment_error(&self) -> Option<&E> {
        match self {
            Self::Segment(e) => Some(e),
            _ => None,
        }
    }
}

// Lets the combined streams be used anywhere embedded-io (and embedded-io-async,
// which shares the trait) expects an error type.
impl<E: embedded_io::Error + fmt::Display> embedded_io::Error for StreamError<E> {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Self::Segment(e) => e.kind(),
            Self::SeekBeforeBegin => embedded_io::ErrorKind::InvalidInput,
            Self::PositionOverflow => embedded_io::ErrorKind::InvalidInput,
            Self::LengthOverflow => embedded_io::ErrorKind::InvalidData,
            Self::SegmentTruncated { .. } => embedded_io::ErrorKind::InvalidData,
            Self::Unsupported => embedded_io::ErrorKind::Unsupported,
        }
    }
}
