//! Adapter layer - connects concrete streams to the segment ports.
//!
//! # Available Adapters
//!
//! - **`IoSegment`**: Adapts `embedded_io::{Read, Seek}` streams to `Segment`
//! - **`AsyncIoSegment`**: Adapts `embedded_io_async::{Read, Seek}` streams to
//!   `AsyncSegment` (requires `async`)
//! - Forwarding impls for `Box<S>` and `&mut S`, so segments of different
//!   types can share one stream behind `Box<dyn Segment<Error = E>>`

mod forwarding;
mod io_segment;

#[cfg(feature = "async")]
mod async_io_segment;

pub use io_segment::IoSegment;

#[cfg(feature = "async")]
pub use async_io_segment::AsyncIoSegment;
