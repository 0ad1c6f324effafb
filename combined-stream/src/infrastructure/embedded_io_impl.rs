//! Implementations of embedded_io traits for the combined streams.
//!
//! Writes are rejected with `ErrorKind::Unsupported`; flushing is a no-op.

use crate::domain::{CombinedStream, Segment, StreamError};
use core::fmt::Display;
use embedded_io::{ErrorType, Read, Seek, Write};

impl<S> ErrorType for CombinedStream<S>
where
    S: Segment,
    S::Error: embedded_io::Error + Display,
{
    type Error = StreamError<S::Error>;
}

impl<S> Read for CombinedStream<S>
where
    S: Segment,
    S::Error: embedded_io::Error + Display,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        CombinedStream::read(self, buf)
    }
}

impl<S> Seek for CombinedStream<S>
where
    S: Segment,
    S::Error: embedded_io::Error + Display,
{
    fn seek(&mut self, pos: embedded_io::SeekFrom) -> Result<u64, Self::Error> {
        CombinedStream::seek(self, pos.into())
    }
}

impl<S> Write for CombinedStream<S>
where
    S: Segment,
    S::Error: embedded_io::Error + Display,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        CombinedStream::write(self, buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        CombinedStream::flush(self)
    }
}

#[cfg(feature = "async")]
mod asynchronous {
    use crate::domain::{AsyncCombinedStream, AsyncSegment, SeekFrom, StreamError};
    use core::fmt::Display;
    use embedded_io_async::{ErrorType, Read, Seek, Write};

    fn convert_seek_from(from: embedded_io_async::SeekFrom) -> SeekFrom {
        match from {
            embedded_io_async::SeekFrom::Start(n) => SeekFrom::Start(n),
            embedded_io_async::SeekFrom::End(n) => SeekFrom::End(n),
            embedded_io_async::SeekFrom::Current(n) => SeekFrom::Current(n),
        }
    }

    impl<S> ErrorType for AsyncCombinedStream<S>
    where
        S: AsyncSegment,
        S::Error: embedded_io_async::Error + Display,
    {
        type Error = StreamError<S::Error>;
    }

    impl<S> Read for AsyncCombinedStream<S>
    where
        S: AsyncSegment,
        S::Error: embedded_io_async::Error + Display,
    {
        async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            AsyncCombinedStream::read(self, buf).await
        }
    }

    impl<S> Seek for AsyncCombinedStream<S>
    where
        S: AsyncSegment,
        S::Error: embedded_io_async::Error + Display,
    {
        async fn seek(&mut self, pos: embedded_io_async::SeekFrom) -> Result<u64, Self::Error> {
            AsyncCombinedStream::seek(self, convert_seek_from(pos))
        }
    }

    impl<S> Write for AsyncCombinedStream<S>
    where
        S: AsyncSegment,
        S::Error: embedded_io_async::Error + Display,
    {
        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            AsyncCombinedStream::write(self, buf).await
        }

        async fn flush(&mut self) -> Result<(), Self::Error> {
            AsyncCombinedStream::flush(self).await
        }
    }
}
