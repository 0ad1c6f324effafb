//! Forwarding impls so boxed and borrowed segments are segments too.

use crate::domain::ports::Segment;
use alloc::boxed::Box;

#[cfg(feature = "async")]
use crate::domain::ports::AsyncSegment;

impl<S: Segment + ?Sized> Segment for Box<S> {
    type Error = S::Error;

    fn length(&mut self) -> Result<u64, Self::Error> {
        (**self).length()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }

    fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error> {
        (**self).seek_to(offset)
    }
}

impl<S: Segment + ?Sized> Segment for &mut S {
    type Error = S::Error;

    fn length(&mut self) -> Result<u64, Self::Error> {
        (**self).length()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }

    fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error> {
        (**self).seek_to(offset)
    }
}

#[cfg(feature = "async")]
impl<S: AsyncSegment> AsyncSegment for &mut S {
    type Error = S::Error;

    async fn length(&mut self) -> Result<u64, Self::Error> {
        (**self).length().await
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf).await
    }

    async fn seek_to(&mut self, offset: u64) -> Result<(), Self::Error> {
        (**self).seek_to(offset).await
    }
}
