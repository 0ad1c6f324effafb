//! Implementations of std::io traits for [`CombinedStream`].

use crate::domain::{CombinedStream, SEEK_BEFORE_BEGIN_MESSAGE, Segment, StreamError};
use std::io;

impl<E: Into<io::Error>> From<StreamError<E>> for io::Error {
    fn from(error: StreamError<E>) -> Self {
        match error {
            StreamError::Segment(e) => e.into(),
            StreamError::SeekBeforeBegin => {
                io::Error::new(io::ErrorKind::InvalidInput, SEEK_BEFORE_BEGIN_MESSAGE)
            }
            StreamError::PositionOverflow => io::Error::new(
                io::ErrorKind::InvalidInput,
                "Seek target does not fit in a 64-bit position",
            ),
            StreamError::LengthOverflow => io::Error::new(
                io::ErrorKind::InvalidData,
                "Combined length of the segments overflows 64 bits",
            ),
            StreamError::SegmentTruncated { index } => io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("Segment {} ended before its recorded length", index),
            ),
            StreamError::Unsupported => io::Error::new(
                io::ErrorKind::Unsupported,
                "Combined streams do not support writing",
            ),
        }
    }
}

impl<S> io::Read for CombinedStream<S>
where
    S: Segment,
    S::Error: Into<io::Error>,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        CombinedStream::read(self, buf).map_err(Into::into)
    }
}

impl<S> io::Seek for CombinedStream<S>
where
    S: Segment,
    S::Error: Into<io::Error>,
{
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        CombinedStream::seek(self, pos.into()).map_err(Into::into)
    }
}

impl<S> io::Write for CombinedStream<S>
where
    S: Segment,
    S::Error: Into<io::Error>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        CombinedStream::write(self, buf).map_err(Into::into)
    }

    fn flush(&mut self) -> io::Result<()> {
        CombinedStream::flush(self).map_err(Into::into)
    }
}
