//! Ports - interfaces the combined streams need from their segments.

mod segment;

pub use segment::Segment;

#[cfg(feature = "async")]
pub use segment::AsyncSegment;
