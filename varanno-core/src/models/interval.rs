use std::cmp::{max, min};
use std::fmt::{self, Display};

use crate::errors::{RecordError, Result};

/// Represent a closed range [start, end] on a 1-based coordinate axis.
///
/// Used for genomic coordinates, k-mer occurrences and protein regions alike.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    ///
    /// Create a new interval, checking that `1 <= start <= end`.
    ///
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start == 0 || start > end {
            return Err(RecordError::InvalidInterval { start, end });
        }
        Ok(Interval { start, end })
    }

    ///
    /// A single-base interval at `pos`.
    ///
    pub fn point(pos: u32) -> Result<Self> {
        Interval::new(pos, pos)
    }

    /// Number of positions covered, both ends included. A reversed interval
    /// built without [`Interval::new`] covers nothing.
    #[inline]
    pub fn len(&self) -> usize {
        (self.end as usize + 1).saturating_sub(self.start as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `pos` lies inside the interval
    #[inline]
    pub fn contains_position(&self, pos: u32) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// Check if `other` lies entirely inside the interval
    #[inline]
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Compute the shared span of two intervals, if any
    #[inline]
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let start = max(self.start, other.start);
        let end = min(self.end, other.end);
        (start <= end).then_some(Interval { start, end })
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
