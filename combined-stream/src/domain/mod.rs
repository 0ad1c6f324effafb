//! Domain layer - position arithmetic and segment stitching.
//!
//! The domain layer contains:
//! - **Value Objects**: `SegmentMap`, `SegmentLocation`, `SeekFrom`
//! - **Domain Services**: `CombinedStream` (and `AsyncCombinedStream`)
//! - **Ports**: `Segment` (and `AsyncSegment`)
//! - **Domain Errors**: `StreamError`
//!
//! ```text
//!   logical stream   [ seg 0 ][   seg 1   ][][ seg 3 ]
//!   offset           0        len0         |  len0 + len1 + len2
//!                                          └─ zero-length segment, never selected
//! ```
//!
//! A logical position is resolved to `(segment, local offset)` by a binary
//! search over the cumulative start offsets, only when a read needs it.

pub mod error;
pub mod ports;

mod combined_stream;
mod seek;
mod segment_map;

#[cfg(feature = "async")]
mod async_combined_stream;

pub use combined_stream::CombinedStream;
pub use error::{StreamError, SEEK_BEFORE_BEGIN_MESSAGE};
pub use ports::Segment;
pub use seek::SeekFrom;
pub use segment_map::{SegmentLocation, SegmentMap};

#[cfg(feature = "async")]
pub use async_combined_stream::AsyncCombinedStream;

#[cfg(feature = "async")]
pub use ports::AsyncSegment;
