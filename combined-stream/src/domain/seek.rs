//! Seek origins and target resolution.

use crate::domain::error::StreamError;

/// Seek position for combined stream operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SeekFrom {
    /// Offset from the start of the stream.
    Start(u64),
    /// Offset relative to the current position.
    Current(i64),
    /// Offset from the end of the stream.
    End(i64),
}

impl SeekFrom {
    /// Resolve this origin/offset pair into an absolute position.
    ///
    /// Pure computation: nothing is committed, so a failed resolution leaves
    /// the caller's state untouched. Targets past `length` are accepted.
    ///
    /// # Errors
    ///
    /// - [`StreamError::SeekBeforeBegin`] if the target is negative
    /// - [`StreamError::PositionOverflow`] if the target exceeds `u64::MAX`
    ///
    /// # Examples
    ///
    /// ```
    /// use combined_stream::SeekFrom;
    ///
    /// let target = SeekFrom::End(-1).resolve::<()>(2, 5).unwrap();
    /// assert_eq!(target, 4);
    /// ```
    pub fn resolve<E>(self, position: u64, length: u64) -> Result<u64, StreamError<E>> {
        let target = match self {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::Current(offset) => position as i128 + offset as i128,
            SeekFrom::End(offset) => length as i128 + offset as i128,
        };

        if target < 0 {
            return Err(StreamError::SeekBeforeBegin);
        }

        u64::try_from(target).map_err(|_| StreamError::PositionOverflow)
    }
}

impl From<embedded_io::SeekFrom> for SeekFrom {
    fn from(from: embedded_io::SeekFrom) -> Self {
        match from {
            embedded_io::SeekFrom::Start(n) => SeekFrom::Start(n),
            embedded_io::SeekFrom::End(n) => SeekFrom::End(n),
            embedded_io::SeekFrom::Current(n) => SeekFrom::Current(n),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::SeekFrom> for SeekFrom {
    fn from(from: std::io::SeekFrom) -> Self {
        match from {
            std::io::SeekFrom::Start(n) => SeekFrom::Start(n),
            std::io::SeekFrom::End(n) => SeekFrom::End(n),
            std::io::SeekFrom::Current(n) => SeekFrom::Current(n),
        }
    }
}
