//! Read and seek across an ordered set of streams as if they were one.
//!
//! A [`CombinedStream`] owns a fixed, ordered list of segments and lays their
//! bytes end to end. Reads that hit a segment boundary carry on into the next
//! segment; seeks only move a logical cursor and never touch a segment.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! ## Domain Layer (`domain`)
//! Position arithmetic and segment stitching, no I/O dependencies:
//! - **Value Objects**: `SegmentMap`, `SegmentLocation`, `SeekFrom`
//! - **Services**: `CombinedStream`, `AsyncCombinedStream`
//! - **Ports**: `Segment`, `AsyncSegment`
//!
//! ## Adapter Layer (`adapters`)
//! - **`IoSegment`**: any `embedded_io::{Read, Seek}` stream as a `Segment`
//! - **`AsyncIoSegment`**: any `embedded_io_async::{Read, Seek}` stream as an
//!   `AsyncSegment`
//!
//! ## Infrastructure Layer (`infrastructure`)
//! `embedded_io`, `embedded_io_async` and `std::io` trait implementations for
//! the combined streams.
//!
//! # Quick Start
//!
//! ```
//! use combined_stream::{CombinedStream, IoSegment, SeekFrom};
//! use std::io::Cursor;
//!
//! let parts = [vec![0x1], vec![0x2], vec![0x3]];
//! let mut stream =
//!     CombinedStream::from_segments(parts.map(|p| IoSegment::from_std(Cursor::new(p)))).unwrap();
//!
//! let mut buf = [0u8; 3];
//! assert_eq!(stream.read(&mut buf).unwrap(), 3);
//! assert_eq!(buf, [0x1, 0x2, 0x3]);
//!
//! // Seeking before the start fails and leaves the position alone
//! stream.seek(SeekFrom::Start(1)).unwrap();
//! assert!(stream.seek(SeekFrom::Current(-2)).is_err());
//! assert_eq!(stream.position(), 1);
//! ```
//!
//! # Features
//!
//! - `std`: std::io interop and `IoSegment::from_std` (default)
//! - `async`: `AsyncSegment`, `AsyncIoSegment`, `AsyncCombinedStream` (default)
//! - `log`: Enable logging support (default)
//! - `defmt`: Enable defmt logging for embedded

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)]

extern crate alloc;

#[macro_use]
mod log_macros;

// Core layers
pub mod domain;
pub mod adapters;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    CombinedStream, SEEK_BEFORE_BEGIN_MESSAGE, SeekFrom, Segment, SegmentLocation, SegmentMap,
    StreamError,
};

pub use adapters::IoSegment;

#[cfg(feature = "async")]
pub use domain::{AsyncCombinedStream, AsyncSegment};

#[cfg(feature = "async")]
pub use adapters::AsyncIoSegment;

// Re-export the I/O trait crates for convenience
pub use embedded_io;

#[cfg(feature = "async")]
pub use embedded_io_async;
