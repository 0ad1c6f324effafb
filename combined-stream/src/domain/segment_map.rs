//! Layout of the segments on the logical stream.

use crate::domain::error::StreamError;

use alloc::vec::Vec;

/// A position resolved to a concrete segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentLocation {
    /// Index of the segment holding the position.
    pub index: usize,
    /// Offset of the position inside that segment.
    pub offset: u64,
}

/// Segment lengths captured at construction, with their cumulative start offsets.
///
/// Segment `i` covers the logical range `[start(i), start(i) + len(i))`. The
/// map is immutable, so lookups never need invalidating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentMap {
    lengths: Vec<u64>,
    starts: Vec<u64>,
    total: u64,
}

impl SegmentMap {
    /// Build a map from segment lengths, in segment order.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::LengthOverflow`] if the lengths sum past `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use combined_stream::SegmentMap;
    ///
    /// let map = SegmentMap::from_lengths::<()>([1, 2, 3]).unwrap();
    /// assert_eq!(map.total_len(), 6);
    /// assert_eq!(map.segment_start(2), Some(3));
    /// ```
    pub fn from_lengths<E>(lengths: impl IntoIterator<Item = u64>) -> Result<Self, StreamError<E>> {
        let lengths: Vec<u64> = lengths.into_iter().collect();
        let mut starts = Vec::with_capacity(lengths.len());
        let mut total = 0u64;

        for &len in &lengths {
            starts.push(total);
            total = total.checked_add(len).ok_or(StreamError::LengthOverflow)?;
        }

        Ok(Self {
            lengths,
            starts,
            total,
        })
    }

    /// Number of segments, including zero-length ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Whether the map holds no segments at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Sum of all segment lengths.
    #[inline]
    pub const fn total_len(&self) -> u64 {
        self.total
    }

    /// Length of segment `index`.
    pub fn segment_len(&self, index: usize) -> Option<u64> {
        self.lengths.get(index).copied()
    }

    /// Logical offset at which segment `index` starts.
    pub fn segment_start(&self, index: usize) -> Option<u64> {
        self.starts.get(index).copied()
    }

    /// Find the segment holding the byte at `position`.
    ///
    /// Zero-length segments never hold a byte and are never returned. Returns
    /// `None` at or past the end of the stream.
    pub fn locate(&self, position: u64) -> Option<SegmentLocation> {
        if position >= self.total {
            return None;
        }

        // Last segment starting at or before `position`. Empty segments share
        // their start with the following segment, so they are stepped over.
        let index = self
            .starts
            .partition_point(|&start| start <= position)
            .checked_sub(1)?;

        Some(SegmentLocation {
            index,
            offset: position - self.starts[index],
        })
    }

    /// Bytes left in the located segment from its offset onwards.
    pub fn remaining_in(&self, location: SegmentLocation) -> u64 {
        self.segment_len(location.index)
            .map_or(0, |len| len.saturating_sub(location.offset))
    }

    /// First non-empty segment after `index`.
    pub fn next_non_empty(&self, index: usize) -> Option<usize> {
        let from = index.checked_add(1)?;
        self.lengths
            .get(from..)?
            .iter()
            .position(|&len| len > 0)
            .map(|skip| from + skip)
    }
}
